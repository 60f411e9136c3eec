use async_trait::async_trait;
use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::prompt::GenerationRequest;
use crate::services::GenerationService;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.7;

// Success value used when the payload carries no message content.
const NO_RESPONSE_FALLBACK: &str = "No response generated";

pub struct GroqClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: Option<String>, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model
                .filter(|model| !model.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Groq API key not configured; set HERALD_GROQ_API_KEY or run \
                 `herald config init` (free keys at https://console.groq.com)"
                    .to_string(),
            )
        })
    }

    fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GenerationService for GroqClient {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        let api_key = self.api_key()?;
        let request_body = ChatRequest::new(&self.model, request.prompt());

        let response = self
            .http
            .post(self.completions_endpoint())
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .json(&request_body)
            .send()
            .await
            .map_err(|err| {
                log::debug!("chat completion request failed: {err}");
                AppError::Transport(
                    "could not reach the generation service, please try again".to_string(),
                )
            })?;

        // The service reports failures in the JSON payload; the HTTP status
        // alone does not decide the outcome.
        let payload: ChatResponse = response.json().await.map_err(|err| {
            log::debug!("chat completion response unreadable: {err}");
            AppError::Transport(
                "the generation service sent an unreadable response, please try again".to_string(),
            )
        })?;

        if let Some(api_error) = payload.error {
            let message = api_error
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| "API request failed".to_string());
            return Err(AppError::Upstream(message));
        }

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty());

        match content {
            Some(text) => Ok(text),
            None => {
                log::warn!("generation response carried no message content");
                Ok(NO_RESPONSE_FALLBACK.to_string())
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f64,
}

impl ChatRequest {
    fn new(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}
