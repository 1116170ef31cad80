// Soulfile - Web Server
// REST API over the element/fortune core with Axum

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use soulfile::api::{router, AppState};
use soulfile::{ServerConfig, TracingSink};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🔮 Soulfile - Web Server v{}", soulfile::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if config.checkout.is_none() {
        tracing::warn!("LEMONSQUEEZY_* not set, /api/checkout will answer 500");
    }

    let state = AppState::new(config.checkout.clone(), Arc::new(TracingSink));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    tracing::info!(addr = %config.addr, "server listening");
    println!("\n🚀 Server running on http://{}", config.addr);
    println!("   API: http://{}/api/health", config.addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Server exited with an error")?;

    Ok(())
}
