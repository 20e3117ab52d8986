use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use eh_api::{
    app::{create_app, AppState},
    config::{init_tracing, load_config, log_summary},
};
use eh_infra::database::{DatabasePool, SqliteUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_tracing(&config.logging)?;

    tracing::info!("Starting error handler demo server");
    log_summary(&config);

    let pool = DatabasePool::new(config.database.clone()).await?;
    if !pool.health_check().await? {
        anyhow::bail!("database health check failed");
    }

    let users = SqliteUserRepository::new(pool.get_pool().clone());
    users.migrate().await.context("failed to run migrations")?;

    let state = web::Data::new(AppState::new(Arc::new(users)));
    let errors = config.errors.clone();

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone(), &errors));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!(stats = %pool.get_statistics(), "Server stopped");
    pool.close().await;
    Ok(())
}
