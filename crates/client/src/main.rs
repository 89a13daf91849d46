//! Arena client binary.
//!
//! ```bash
//! ARENA_SEED=7 ARENA_ENEMY_STAMINA=20 cargo run -p arena-client
//! ```

use anyhow::Result;
use arena_client::{ArenaApp, ClientConfig, logging};
use runtime::Runtime;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = ClientConfig::from_env();

    // 2. Setup logging
    let _log_guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    tracing::info!("Starting arena client");
    tracing::info!(
        "Seed: {:?}, attack delay: {:?}",
        config.runtime.seed,
        config.runtime.attack_delay
    );

    // 3. Build runtime
    let runtime = Runtime::builder().config(config.runtime).build().await?;

    // 4. Run the frontend until the player quits
    ArenaApp::new(runtime).await.execute().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
