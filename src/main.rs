use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use scout::{
    configuration::get_configuration, dal::company_db, services::KununuClient, startup::run,
};
use sqlx::sqlite::SqlitePoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let connection_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&configuration.database.connection_string())
        .await
        .context("Failed to open the local company store.")?;
    company_db::init_store(&connection_pool)
        .await
        .context("Failed to apply the company store schema.")?;

    let kununu_client = KununuClient::new(&configuration.kununu.search_url)
        .context("Invalid kununu search url in configuration.")?;

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    run(listener, connection_pool, kununu_client)?.await?;

    Ok(())
}
