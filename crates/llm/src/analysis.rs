use productivity_coach_core::AnalysisRequest;

use crate::ai_types::{ChatRequest, Message};
use crate::client::LlmClient;
use crate::error::LlmError;

impl LlmClient {
    /// Asks the model to coach the student on this usage.
    ///
    /// Sends the coaching prompt as the only user message and returns the
    /// reply unparsed.
    ///
    /// # Errors
    /// Returns any [`LlmError`] from the completion call.
    pub async fn analyze_usage(&self, request: &AnalysisRequest) -> Result<String, LlmError> {
        let chat_request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(request.prompt())],
        };

        tracing::debug!(
            model = %self.model,
            usage_records = request.usage.len(),
            "requesting productivity analysis"
        );
        let analysis = self.chat_completion(&chat_request).await?;
        tracing::debug!(analysis_len = analysis.len(), "productivity analysis received");
        Ok(analysis)
    }
}
