use anyhow::Result;
use tracing_subscriber::EnvFilter;
use users_api::config::{self, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    users_api::server::run(config).await
}

/// Installs the global subscriber using `RUST_LOG` and `LOG_FORMAT`.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_json_logging() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
