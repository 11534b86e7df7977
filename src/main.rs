use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_catalog::infrastructure::AppState;
use item_catalog::{config, seed, server};

#[tokio::main]
async fn main() {
    // Load .env before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_catalog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    let state = AppState::in_memory();

    if config.seed_data {
        tracing::info!("Seeding initial catalog...");
        match seed::seed_demo_data(state.item_repo.as_ref()).await {
            Ok(count) => tracing::info!("Seeded {} items.", count),
            Err(e) => tracing::error!("Failed to seed data: {}", e),
        }
    } else {
        tracing::info!("Seeding disabled via SEED_DATA");
    }

    server::serve(&config, state)
        .await
        .expect("Failed to start server");
}
