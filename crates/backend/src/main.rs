pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use shared::config::StorageBackend;
use shared::data::{DataGateway, InMemoryGateway, SqliteGateway};
use shared::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let gateway: Arc<dyn DataGateway> = match config.data.backend {
        StorageBackend::Sqlite => {
            let db_path = shared::config::get_database_path(&config)?;
            shared::data::db::initialize_database(Some(&db_path.to_string_lossy()))
                .await
                .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;
            Arc::new(SqliteGateway)
        }
        StorageBackend::Memory => Arc::new(InMemoryGateway::new()),
    };
    tracing::info!("Data backend: {}", gateway.backend_name());

    if config.data.seed_demo_data {
        shared::data::seed::seed_demo_data(gateway.as_ref()).await?;
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(system::actor::USER_HEADER),
            header::HeaderName::from_static(system::actor::ROLE_HEADER),
        ]);

    let app = routes::configure_routes(AppState::new(gateway))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {e}"))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
