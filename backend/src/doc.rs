//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints (users, health)
//! - **Schemas**: The request/response types ([`User`], [`NewUser`],
//!   [`Health`])
//! - **Info**: Title, version, description, and support contact
//!
//! The generated specification is embedded in the Scalar reference page at
//! `/reference` and exported via `cargo run --bin openapi-dump` for external
//! tooling. It describes the declared contract of the API, which is not
//! verified against handler behaviour: the document lists 400/404 responses
//! no handler produces.

use crate::api::health::Health;
use crate::models::{NewUser, User};
use utoipa::openapi::server::ServerBuilder;
use utoipa::OpenApi;

/// HTML shell served at `/reference`.
///
/// `$spec` is substituted with the serialised OpenAPI document, so the page
/// body carries the full specification inline; the Scalar viewer renders it
/// client-side with the `bluePlanet` theme.
pub(crate) const REFERENCE_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>My Awesome API</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <script id="api-reference" type="application/json" data-configuration='{"theme":"bluePlanet"}'>$spec</script>
    <script src="https://cdn.jsdelivr.net/npm/@scalar/api-reference"></script>
  </body>
</html>"#;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "My Awesome API",
        version = "1.0.0",
        description = "A sample user-management API with an interactive Scalar reference",
        contact(name = "API Support", email = "support@example.com")
    ),
    paths(
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::health::health,
    ),
    components(schemas(User, NewUser, Health)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI document with the development-server entry for `port`.
///
/// The server list depends on runtime configuration, so it is injected here
/// rather than declared on [`ApiDoc`].
pub fn openapi(port: u16) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new()
        .url(format!("http://localhost:{port}"))
        .description(Some("Development server"))
        .build()]);
    doc
}
