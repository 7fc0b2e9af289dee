use anyhow::{Context, Result};
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ApiConfig;

// OpenAI 兼容的 chat completion 响应结构
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    // 取第一个 choice 的文本，缺失时返回空字符串
    pub fn first_content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<RequestMessage>,
    pub max_completion_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: String,
}

pub struct ApiClient {
    client: Client,
    config: ApiConfig,
    endpoint: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()?;
        let endpoint = format!("{}/chat/completions", config.base_url.trim_end_matches('/'));

        Ok(ApiClient {
            client,
            config: config.clone(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![RequestMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_completion_tokens: self.config.max_completion_tokens,
            temperature: self.config.temperature,
        }
    }

    // 单次请求，不重试
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = self.build_request(prompt);

        tracing::debug!(model = %request.model, endpoint = %self.endpoint, "发送模型请求");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("网络请求失败")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("API请求失败 (状态码: {}): {}", status, error_text);
        }

        let api_response: ChatCompletionResponse =
            response.json().await.context("JSON解析失败")?;

        Ok(api_response.first_content())
    }
}
