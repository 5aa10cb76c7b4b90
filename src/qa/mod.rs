// src/qa/mod.rs
// Question-answering provider abstraction - pluggable architecture
// Default: extractive QA model served over HTTP

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// QA provider trait - implement this to support new model backends
#[async_trait::async_trait]
pub trait QaProvider: Send + Sync {
    /// Answer `question` against `context`, returning the model's top
    /// answer span.
    async fn answer(&self, question: &str, context: &str) -> Result<QaAnswer, QaError>;
    fn model_name(&self) -> &str;
    async fn health_check(&self) -> Result<(), QaError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaAnswer {
    pub answer: String,
    pub score: Option<f64>,
}

#[derive(Debug, Error)]
pub enum QaError {
    #[error("QA model connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Invalid QA model response: {0}")]
    InvalidResponse(String),
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
}

/// HTTP-backed QA provider. Posts `{question, context, model}` to the
/// model server and reads back `{answer, score}`.
pub struct HttpQaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct QaRequest<'a> {
    question: &'a str,
    context: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct QaResponse {
    answer: String,
    score: Option<f64>,
}

impl HttpQaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            url,
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl QaProvider for HttpQaProvider {
    async fn answer(&self, question: &str, context: &str) -> Result<QaAnswer, QaError> {
        debug!(
            model = %self.model,
            question_len = question.len(),
            context_len = context.len(),
            "Running QA inference"
        );

        let url = format!("{}/answer", self.url);
        let req = QaRequest {
            question,
            context,
            model: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| QaError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(QaError::InferenceFailed(format!(
                "model server returned {}",
                response.status()
            )));
        }

        let qa_resp: QaResponse = response
            .json()
            .await
            .map_err(|e| QaError::InvalidResponse(e.to_string()))?;

        info!(model = %self.model, answer_len = qa_resp.answer.len(), "Inference complete");
        Ok(QaAnswer {
            answer: qa_resp.answer,
            score: qa_resp.score,
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    async fn health_check(&self) -> Result<(), QaError> {
        let health_url = format!("{}/health", self.url);
        self.client.get(&health_url).send().await.map_err(|e| {
            QaError::ConnectionFailed(format!("Cannot reach QA model at {}: {}", self.url, e))
        })?;
        Ok(())
    }
}

/// Create the HTTP QA provider from config, probing the model server
/// once at startup. A failed probe logs a warning and continues; the
/// server stays up and /chat reports the failure per request.
pub async fn create_provider(config: &crate::config::ApiConfig) -> std::sync::Arc<dyn QaProvider> {
    info!(url = %config.qa_url, model = %config.qa_model, "Initializing QA provider");
    let provider = HttpQaProvider::new(config.qa_url.clone(), config.qa_model.clone());
    if let Err(e) = provider.health_check().await {
        warn!("QA model health check failed: {}. Continuing without it...", e);
    }
    std::sync::Arc::new(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_model_name() {
        let provider = HttpQaProvider::new(
            "http://localhost:8090".to_string(),
            "distilbert-base-uncased-distilled-squad".to_string(),
        );
        assert_eq!(provider.model_name(), "distilbert-base-uncased-distilled-squad");
    }

    #[test]
    fn test_qa_error_display() {
        let err = QaError::ConnectionFailed("test".to_string());
        assert!(format!("{}", err).contains("connection failed"));
    }
}
