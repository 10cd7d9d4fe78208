use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vega::chat::ChatSession;
use vega::llm::{GeminiClient, LlmClient};
use vega::utils::VegaConfig;
use vega::AppState;

/// V.E.G.A - Versatile Engine for Grounded Answers
#[derive(Parser)]
#[command(name = "vega-server", version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "vega.toml", env = "VEGA_CONFIG")]
    config: std::path::PathBuf,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = VegaConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;

    let default_filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.server.log_level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_key = config
        .llm
        .api_key()
        .context("resolving the Gemini API key")?;
    let client = Arc::new(GeminiClient::new(
        config.llm.base_url.clone(),
        api_key,
        config.llm.model.clone(),
        config.llm.timeout_secs,
    )?);
    tracing::info!(model = client.model_name(), "LLM client ready");

    let session = ChatSession::new(client, config.retrieval.top_k, config.llm.temperature);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, session);

    let app = vega::api::create_router().with_state(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!(%addr, "V.E.G.A listening");

    axum::serve(listener, app).await?;
    Ok(())
}
