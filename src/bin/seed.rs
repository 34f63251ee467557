use dotenvy::dotenv;
use tracing::info;

use grammar_shop::infra::{
    config::AppConfig, postgres_persistence, seed_data::seed, setup::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env();
    let persistence = postgres_persistence(&config.database_url).await?;

    seed(&persistence, &persistence).await?;

    info!("Database seeded");
    Ok(())
}
