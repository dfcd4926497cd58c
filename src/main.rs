use std::sync::Arc;

use tracing::info;

use clil_glossary_server::api::{create_router, AppState};
use clil_glossary_server::config::Config;
use clil_glossary_server::llm::{LlmClient, OpenAiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "clil_glossary_server=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let llm: Arc<dyn LlmClient> =
        Arc::new(OpenAiClient::with_model(config.api_key.clone(), &config.model));
    info!(model = %config.model, "glossary service configured");

    let app = create_router(AppState { llm });

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
