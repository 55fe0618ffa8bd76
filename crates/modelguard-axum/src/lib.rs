//! # modelguard-axum — Request-Pipeline Integration
//!
//! Connects a sealed [`SchemaRegistry`](modelguard_core::SchemaRegistry)
//! to an Axum application:
//!
//! - [`ValidatedJson<T>`] — a body extractor that validates deserialized
//!   requests against the registry and rejects violations with a
//!   structured failure map (`422 Unprocessable Entity`).
//! - [`RouterExt::with_schema_registry`] — installs the shared registry
//!   as a request extension.
//! - [`schema_document`] — renders every registered schema as JSON for a
//!   documentation consumer.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use axum::routing::post;
//! use axum::{Json, Router};
//! use modelguard_axum::{RouterExt, ValidatedJson};
//! use modelguard_core::SchemaRegistry;
//!
//! # #[derive(serde::Deserialize)]
//! # struct CreatePerson { name: String }
//! async fn create(ValidatedJson(person): ValidatedJson<CreatePerson>) -> Json<String> {
//!     Json(person.name)
//! }
//!
//! fn app(registry: Arc<SchemaRegistry>) -> Router {
//!     Router::new()
//!         .route("/people", post(create))
//!         .with_schema_registry(registry)
//! }
//! ```

pub mod document;
pub mod extract;
pub mod reject;

pub use document::schema_document;
pub use extract::{RouterExt, ValidatedJson};
pub use reject::ValidationRejection;
