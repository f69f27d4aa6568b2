//! OpenAI-compatible chat completions client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use super::{build_prompt, parse_assignments, Prioritizer, SYSTEM_PROMPT};
use crate::config::PrioritizerConfig;
use crate::error::{Result, TaskError};
use crate::task::Task;

/// Prioritizer backed by any endpoint speaking the OpenAI chat
/// completions protocol. Which endpoint and model is a config matter;
/// nothing here assumes api.openai.com specifically.
pub struct OpenAiPrioritizer {
    config: PrioritizerConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: String,
}

impl OpenAiPrioritizer {
    pub fn new(config: PrioritizerConfig) -> Self {
        Self { config }
    }

    fn api_key(&self) -> Result<String> {
        if let Some(key) = &self.config.api_key {
            return Ok(key.clone());
        }
        std::env::var("OPENAI_API_KEY").map_err(|_| {
            TaskError::Collaborator(
                "no API key: set OPENAI_API_KEY or prioritizer.api_key in config.toml".to_string(),
            )
        })
    }
}

#[async_trait]
impl Prioritizer for OpenAiPrioritizer {
    async fn assign(&self, tasks: &[Task]) -> Result<BTreeMap<i64, u8>> {
        let key = self.api_key()?;
        let prompt = build_prompt(tasks);

        let client = reqwest::Client::builder()
            .user_agent("taskling")
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| TaskError::Collaborator(e.to_string()))?;

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        debug!("Requesting priorities from {} with {}", url, self.config.model);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: 0.0,
        };

        let response = client
            .post(&url)
            .bearer_auth(key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TaskError::Collaborator(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TaskError::Collaborator(format!(
                "model endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| TaskError::Collaborator(e.to_string()))?;

        let reply = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| TaskError::Collaborator("reply contained no choices".to_string()))?;

        parse_assignments(reply)
    }
}
