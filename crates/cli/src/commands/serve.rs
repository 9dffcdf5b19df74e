use anyhow::Result;
use productivity_coach_core::CoachConfig;
use productivity_coach_http::{AppState, create_router};
use productivity_coach_llm::LlmClient;
use std::sync::Arc;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let config = CoachConfig::from_env();
    let llm = LlmClient::from_config(&config)?;
    tracing::info!(model = %llm.model(), base_url = %llm.base_url(), "completion client ready");

    let state = Arc::new(AppState::new(llm));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
