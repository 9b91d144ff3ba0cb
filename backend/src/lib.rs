//! Per-user preference service.
//!
//! Layout follows a hexagonal split: [`domain`] holds the model, ports and
//! services; [`inbound`] and [`outbound`] hold the HTTP and storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
