use anyhow::Result;
use productivity_coach_core::{CoachConfig, ScoreReport};
use productivity_coach_llm::LlmClient;
use std::path::Path;

use crate::read_request;

pub(crate) fn run_prompt(file: &Path) -> Result<()> {
    let request = read_request(file)?;
    print!("{}", request.prompt());
    Ok(())
}

pub(crate) async fn run_analyze(file: &Path) -> Result<()> {
    let request = read_request(file)?;
    let llm = LlmClient::from_config(&CoachConfig::from_env())?;
    let analysis = llm.analyze_usage(&request).await?;
    println!("{analysis}");
    Ok(())
}

pub(crate) fn run_score(file: &Path) -> Result<()> {
    let request = read_request(file)?;
    let report = ScoreReport::from_records(&request.usage);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
