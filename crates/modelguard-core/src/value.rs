//! # Observed Values — Erased Property Snapshots
//!
//! The validation engine is compiled generically: a predicate receives a
//! property value with no compile-time knowledge of the underlying field
//! type. Rather than passing raw untyped values across that boundary,
//! accessors produce an [`ObservedValue`] — a small discriminated snapshot
//! of what the property held at validation time.
//!
//! Every validator matches on this enum exhaustively, so the fail-closed
//! branch for an unexpected kind is a single explicit arm, not an
//! unchecked cast.

/// A property value as seen by the validation engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ObservedValue {
    /// No value present (`Option::None` or an unresolvable member).
    Absent,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// A sequence of values.
    Sequence(Vec<ObservedValue>),
}

impl ObservedValue {
    /// Whether the value is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The numeric reading of the value, if it has one.
    ///
    /// Integers widen to `f64`; every non-numeric kind is `None`, which
    /// range validators treat as a violation.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// A short name for the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Sequence(_) => "sequence",
        }
    }
}

/// Conversion of model field types into [`ObservedValue`].
///
/// Implemented for the scalar types models are built from, plus `Option`
/// (absence) and `Vec`/slices (sequences). Accessor closures read as
/// `|m: &Model| m.age.observe()`.
pub trait Observe {
    /// Snapshot this value for the validation engine.
    fn observe(&self) -> ObservedValue;
}

impl<T: Observe + ?Sized> Observe for &T {
    fn observe(&self) -> ObservedValue {
        (**self).observe()
    }
}

impl<T: Observe> Observe for Option<T> {
    fn observe(&self) -> ObservedValue {
        match self {
            Some(value) => value.observe(),
            None => ObservedValue::Absent,
        }
    }
}

impl Observe for str {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Text(self.to_string())
    }
}

impl Observe for String {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Text(self.clone())
    }
}

impl Observe for bool {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Bool(*self)
    }
}

macro_rules! observe_integer {
    ($($ty:ty),*) => {
        $(impl Observe for $ty {
            fn observe(&self) -> ObservedValue {
                ObservedValue::Integer(i64::from(*self))
            }
        })*
    };
}

observe_integer!(i8, i16, i32, i64, u8, u16, u32);

impl Observe for u64 {
    fn observe(&self) -> ObservedValue {
        match i64::try_from(*self) {
            Ok(n) => ObservedValue::Integer(n),
            Err(_) => ObservedValue::Float(*self as f64),
        }
    }
}

impl Observe for usize {
    fn observe(&self) -> ObservedValue {
        (*self as u64).observe()
    }
}

impl Observe for f32 {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Float(f64::from(*self))
    }
}

impl Observe for f64 {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Float(*self)
    }
}

impl<T: Observe> Observe for [T] {
    fn observe(&self) -> ObservedValue {
        ObservedValue::Sequence(self.iter().map(Observe::observe).collect())
    }
}

impl<T: Observe> Observe for Vec<T> {
    fn observe(&self) -> ObservedValue {
        self.as_slice().observe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_observes_as_absent() {
        let value: Option<String> = None;
        assert_eq!(value.observe(), ObservedValue::Absent);
    }

    #[test]
    fn test_some_observes_inner_value() {
        let value = Some("hello".to_string());
        assert_eq!(value.observe(), ObservedValue::Text("hello".into()));
    }

    #[test]
    fn test_integer_widening() {
        assert_eq!(42u16.observe(), ObservedValue::Integer(42));
        assert_eq!((-7i32).observe(), ObservedValue::Integer(-7));
    }

    #[test]
    fn test_u64_beyond_i64_falls_back_to_float() {
        let big = u64::MAX;
        match big.observe() {
            ObservedValue::Float(f) => assert!(f > 0.0),
            other => panic!("expected float fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_vec_observes_as_sequence() {
        let tags = vec!["a".to_string(), "b".to_string()];
        match tags.observe() {
            ObservedValue::Sequence(items) => assert_eq!(items.len(), 2),
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_as_number_readings() {
        assert_eq!(ObservedValue::Integer(3).as_number(), Some(3.0));
        assert_eq!(ObservedValue::Float(2.5).as_number(), Some(2.5));
        assert_eq!(ObservedValue::Text("3".into()).as_number(), None);
        assert_eq!(ObservedValue::Absent.as_number(), None);
        assert_eq!(ObservedValue::Bool(true).as_number(), None);
    }
}
