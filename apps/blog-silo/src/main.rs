//! # Blog Silo
//!
//! Hosts the in-process post actor runtime.

mod config;
mod silo;
mod telemetry;

use blog_core::ports::PostService;
use config::SiloConfig;
use silo::Silo;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = SiloConfig::from_env();
    tracing::info!(
        mailbox_capacity = config.runtime.mailbox_capacity,
        seed_demo_posts = config.seed_demo_posts,
        no_wait = config.no_wait,
        "Starting blog silo"
    );

    let silo = Silo::new(config.runtime.clone());
    silo.seed_demo_posts(config.seed_demo_posts).await?;

    let recent = silo
        .coordinator
        .get_recent_posts(config.recent_posts_count)
        .await?;
    if !recent.is_empty() {
        tracing::debug!(
            posts = %serde_json::to_string(&recent)?,
            "Recent posts"
        );
    }

    if !config.no_wait {
        tracing::info!("Silo running, press Ctrl-C to stop");
        tokio::signal::ctrl_c().await?;
    }

    silo.shutdown().await;
    Ok(())
}
