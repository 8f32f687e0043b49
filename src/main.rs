//! TFDN Site Server
//!
//! Run with: cargo run --bin tfdn
//!
//! Serves the content API, the career assessment, the mock form endpoints and
//! (when `api.static_dir` is set) the built UI.
//!
//! # Configuration
//!
//! Read from `--config PATH` or the default locations (see `tfdn::config`),
//! then overridden by `TFDN_*` environment variables. `RUST_LOG` takes
//! precedence over `logging.level`.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tfdn::api::{serve, AppState};
use tfdn::auth::{HostedAuthConfig, HostedAuthProvider};
use tfdn::config::{Config, ConfigOrigin, LoggingConfig};
use tfdn::content::{ContentStore, Fixture};
use tfdn::submissions::{Submissions, Validator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "tfdn")]
#[command(about = "TFDN site server", version)]
struct Args {
    /// Config file (defaults to the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, origin) = match &args.config {
        Some(path) => (
            Config::load_with_env(path)?,
            ConfigOrigin {
                path: Some(path.clone()),
                ..Default::default()
            },
        ),
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting TFDN server v{}", env!("CARGO_PKG_VERSION"));
    origin.log();

    // Content
    let fixture = Fixture::load_or_embedded(config.content.fixture_path.as_deref())?;
    tracing::info!("Content loaded: {}", fixture.summary());

    let content = ContentStore::new(fixture).with_latency(config.content.simulate_latency);
    let submissions =
        Submissions::new(Validator::new()?).with_latency(config.content.simulate_latency);

    if !config.content.simulate_latency {
        tracing::info!("Simulated latency disabled");
    }

    let mut state = AppState::new(content, submissions, config.api.clone());

    // Session checks
    match &config.auth.provider_url {
        Some(url) => {
            let provider = HostedAuthProvider::new(HostedAuthConfig {
                base_url: url.clone(),
                timeout_ms: config.auth.timeout_ms,
            })?;
            tracing::info!("Hosted auth enabled: {}", url);
            state = state.with_auth(Arc::new(provider));
        }
        None => tracing::info!("No auth provider configured, all sessions are anonymous"),
    }

    if let Some(dir) = &config.api.static_dir {
        tracing::info!("Serving UI from {:?}", dir);
    }

    serve(state).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("tfdn={},tower_http={}", logging.level, logging.level))
    });

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
