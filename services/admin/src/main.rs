use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod models;
mod routes;
mod seed;
mod state;

use common::repository::InMemoryRepository;
use tokio::net::TcpListener;

use crate::{config::ServerConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting administration service");

    let config = ServerConfig::from_env();

    // Seed the in-memory stores with fixed sample data
    let roles = seed::roles();
    let employees = seed::employees(&roles);

    let role_repository = InMemoryRepository::new(roles);
    let employee_repository = InMemoryRepository::new(employees);

    let app_state = AppState {
        employee_repository,
        role_repository,
    };

    info!("Administration service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Administration service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
