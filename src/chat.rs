//! Chat completion client
//!
//! Single-turn, non-streaming queries against an OpenAI-style chat API.
//! Unlike the translation resolver, failures here are NOT swallowed; they
//! propagate to the caller, which decides how to isolate them.

use crate::config::Config;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize, Clone)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

impl ChatClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.chat_endpoint.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.chat_model.clone(),
        }
    }

    /// Submit `prompt` as a single user message and return the first
    /// choice's content.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Chat("response contained no choices".to_string()))
    }
}
