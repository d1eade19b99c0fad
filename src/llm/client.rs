//! Minimal client for OpenAI-compatible chat completion endpoints

use crate::config::LlmConfig;
use crate::error::{Result, ResumeMatcherError};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl ChatResponse {
    /// Text of the first choice
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

/// Chat completion client. Settings and credential are supplied by the caller.
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    config: LlmConfig,
    api_key: String,
}

impl ChatClient {
    pub fn new(config: LlmConfig, api_key: String) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        // Local model servers are reached directly even when a proxy is configured
        if is_loopback_endpoint(&config.endpoint) {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send one system + user exchange and return the reply text
    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request_body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending chat completion request to {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ResumeMatcherError::LlmResponse(format!(
                "API returned {}: {}",
                status.as_u16(),
                message
            )));
        }

        let chat_response: ChatResponse = response.json().await?;
        if let Some(usage) = &chat_response.usage {
            debug!(
                "Chat completion succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat_response
            .text()
            .map(str::to_string)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| ResumeMatcherError::LlmResponse("Empty completion".to_string()))
    }
}

fn is_loopback_endpoint(endpoint: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(endpoint) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    }
}
