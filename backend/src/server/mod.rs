//! Server construction and route wiring.

mod config;

pub use config::{ConfigError, ServerConfig, DEFAULT_PORT};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::api::health::health;
use crate::api::users::{create_user, get_user, list_users};
use crate::doc;
use crate::middleware::RequestLog;

fn build_app(
    config: ServerConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(list_users)
        .service(create_user)
        .service(get_user);

    App::new()
        .wrap(RequestLog)
        .service(api)
        .service(health)
        .service(
            Scalar::with_url("/reference", doc::openapi(config.port()))
                .custom_html(doc::REFERENCE_HTML),
        )
}

/// Construct an Actix HTTP server for the supplied configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let bind_addr = ("0.0.0.0", config.port());
    let server = HttpServer::new(move || build_app(config.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
