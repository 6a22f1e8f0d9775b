use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

/// Boundary to the external chat-completion service. One prompt in, raw
/// model text out; no retries or backoff, failures surface as
/// [`AppError::Upstream`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Calls an OpenAI-compatible `/chat/completions` endpoint over HTTP.
pub struct HttpChatGateway {
    client: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Deserialize)]
struct ChatReplyMessage {
    content: String,
}

impl HttpChatGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: config.chat_api_base.trim_end_matches('/').to_string(),
            api_key: config.chat_api_key.clone(),
            model: config.chat_model.clone(),
            temperature: config.chat_temperature,
        }
    }
}

#[async_trait]
impl ChatCompletionGateway for HttpChatGateway {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_base);
        let body = ChatCompletionBody {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("chat request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("chat service returned {}: {}", status, detail);
            return Err(AppError::Upstream(format!(
                "chat service returned {}",
                status
            )));
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid chat response: {}", e)))?;

        reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream("chat response contained no choices".to_string()))
    }
}
