use anyhow::Result;
use std::sync::Arc;

use thai_word_classifier::config::LoggingConfig;
use thai_word_classifier::{Config, WordClassifier, server};

#[tokio::main]
async fn main() -> Result<()> {
    // .env 文件可选
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    setup_logging(&config.logging);

    tracing::info!("📚 ระบบจำแนกชนิดของคำภาษาไทย");
    tracing::info!("🤖 模型: {} ({})", config.api.model, config.api.base_url);

    let classifier = Arc::new(WordClassifier::new(config.clone()).await?);

    server::serve(&config.server, Arc::clone(&classifier)).await?;

    classifier.database().close().await;
    Ok(())
}

// RUST_LOG 优先于配置文件中的日志级别
fn setup_logging(config: &LoggingConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(false))
                .init();
        }
    }
}
