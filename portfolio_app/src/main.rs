use portfolio_app::{app::App, config::Config};
use portfolio_render::ApiClient;

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::parse();
    let db = portfolio_db::Db::init(&config.database_url).await?;
    let api_client = ApiClient::new(config.api_base_url());

    portfolio_app::serve(App {
        config: Arc::new(config),
        db,
        api_client,
    })
    .await
}
