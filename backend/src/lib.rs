//! Backend library modules.

pub mod api;
pub mod doc;
pub mod middleware;
pub mod models;
pub mod server;

/// Public OpenAPI surface used by the Scalar reference page and tooling.
pub use doc::ApiDoc;
pub use middleware::RequestLog;
