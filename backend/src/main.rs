//! Backend entry-point: wires the user endpoints, health check, and the
//! Scalar API reference page.

use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use backend::server::{create_server, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env().map_err(std::io::Error::other)?;
    let port = config.port();
    let server = create_server(config)?;

    info!(port, "server listening");
    info!("API reference at http://localhost:{port}/reference");
    server.await
}
