// src/config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Fixed chunk length in characters for extracted PDF text.
    pub chunk_size: usize,
    pub qa_url: String,
    pub qa_model: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BACKEND_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .expect("BACKEND_PORT must be a valid u16");
        let chunk_size = env::var("CHUNK_SIZE")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .expect("CHUNK_SIZE must be a valid usize");
        let qa_url = env::var("QA_URL").unwrap_or_else(|_| "http://localhost:8090".to_string());
        let qa_model = env::var("QA_MODEL")
            .unwrap_or_else(|_| "distilbert-base-uncased-distilled-squad".to_string());
        Self {
            host,
            port,
            chunk_size,
            qa_url,
            qa_model,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr() {
        let config = ApiConfig {
            host: "0.0.0.0".to_string(),
            port: 8000,
            chunk_size: 1000,
            qa_url: "http://localhost:8090".to_string(),
            qa_model: "distilbert-base-uncased-distilled-squad".to_string(),
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }
}
