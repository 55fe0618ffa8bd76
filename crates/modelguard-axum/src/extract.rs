//! # ValidatedJson — Schema-Checked Body Extraction
//!
//! `ValidatedJson<T>` deserializes a JSON body like `axum::Json<T>`, then
//! consults the shared [`SchemaRegistry`] for `T`'s compiled validator.
//! A type with no registered schema has nothing to validate and passes
//! through unchanged; a violating body is rejected before the handler
//! runs.

use std::sync::Arc;

use axum::extract::{FromRequest, Request};
use axum::{Extension, Json, Router};
use serde::de::DeserializeOwned;

use modelguard_core::SchemaRegistry;

use crate::reject::ValidationRejection;

/// A JSON body that satisfied its model's registered schema.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Grab the registry before the body extractor consumes the request.
        let registry = req.extensions().get::<Arc<SchemaRegistry>>().cloned();
        let Json(value) = Json::<T>::from_request(req, state).await?;

        let Some(registry) = registry else {
            tracing::warn!(
                model = std::any::type_name::<T>(),
                "no schema registry installed; body accepted unvalidated"
            );
            return Ok(Self(value));
        };

        // Unregistered model type: nothing to validate.
        let Some(validator) = registry.validator::<T>() else {
            return Ok(Self(value));
        };

        let result = validator.validate(Some(&value));
        if result.is_valid() {
            Ok(Self(value))
        } else {
            tracing::debug!(
                model = std::any::type_name::<T>(),
                failures = result.failures().len(),
                "rejecting body that violates its schema"
            );
            Err(ValidationRejection::Invalid(result))
        }
    }
}

/// Registry installation for routers.
pub trait RouterExt {
    /// Share `registry` with every [`ValidatedJson`] extractor under this
    /// router.
    fn with_schema_registry(self, registry: Arc<SchemaRegistry>) -> Self;
}

impl<S: Clone + Send + Sync + 'static> RouterExt for Router<S> {
    fn with_schema_registry(self, registry: Arc<SchemaRegistry>) -> Self {
        self.layer(Extension(registry))
    }
}
