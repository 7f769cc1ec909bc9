use crate::api::models::{Reply, RequestBody};
use crate::api::response::parse_completion;
use crate::error::{CliGptError, Result};
use crate::models::Message;
use crate::ui::print_verbose;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Anything that can answer a conversation. The session only talks to this.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, history: &[Message], model: &str) -> Result<Reply>;
}

pub struct ChatClient {
    endpoint: String,
    http: reqwest::Client,
    verbose: bool,
}

impl ChatClient {
    pub fn new(api_key: &str, endpoint: &str, verbose: bool) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(CliGptError::ConfigError("API key is empty".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e| {
                CliGptError::ConfigError(format!("Invalid authorization header: {}", e))
            })?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            http,
            verbose,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Completion for ChatClient {
    async fn complete(&self, history: &[Message], model: &str) -> Result<Reply> {
        if history.is_empty() {
            return Err(CliGptError::ConfigError(
                "refusing to send an empty conversation".to_string(),
            ));
        }
        if model.trim().is_empty() {
            return Err(CliGptError::ConfigError("model name is empty".to_string()));
        }

        let request_body = RequestBody::new(model, history);
        if self.verbose {
            print_verbose(&format!(
                "POST {} ({} messages, model {})",
                self.endpoint,
                history.len(),
                model
            ));
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await?;

        if self.verbose {
            print_verbose(&format!("Response status: {}", response.status()));
        }

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CliGptError::TransportError {
                status: Some(status),
                message: error_text,
            });
        }

        let body = response.text().await?;
        parse_completion(&body)
    }
}
