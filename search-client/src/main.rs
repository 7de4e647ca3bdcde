//! Startup binary: connect to the search engine, verify it is healthy, and
//! make sure the configured index exists. Any failure here is fatal.

use std::process;

use dotenv::dotenv;
use tracing::{error, info};

use search_client::logging::init_tracing;
use search_client::{AppConfig, AppError, Dependencies};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(&config).await {
        error!(error = %e, "Startup failed");
        process::exit(1);
    }
}

async fn run(config: &AppConfig) -> Result<(), AppError> {
    let deps = Dependencies::new(config).await?;

    if deps.ensure_index(config).await? {
        info!("Startup index created");
    }

    info!(elasticsearch_url = %config.elasticsearch_url, "Search client ready");
    Ok(())
}
