//! Blocking client for an OpenAI-compatible chat completions API.

use std::thread::sleep;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::{debug, warn};

use super::types::{ChatMessage, ChatRequest, ChatResponse, RetryPolicy, SentimentAnalysis};
use super::{SentimentAnalyzer, Summarizer};
use crate::config::AiConfig;
use crate::error::JournalError;

const USER_AGENT: &str = concat!("pinkink/", env!("CARGO_PKG_VERSION"));

const SENTIMENT_SYSTEM_PROMPT: &str = "You are a sentiment analysis AI for a personal journal app. \
Analyze the user's journal entry and determine their mood.

Available moods: happy, sad, peaceful, frustrated, thoughtful, tired, excited, anxious, grateful, neutral

Respond with a JSON object containing:
- mood: one of the available moods
- confidence: a number from 0 to 1 indicating how confident you are
- reason: a brief explanation of why you chose this mood

Be empathetic and understanding. Consider the overall emotional tone, not just individual words.";

const SUMMARY_SYSTEM_PROMPT: &str = "You are a compassionate AI assistant that helps people reflect on their journal entries. \
Create a thoughtful, encouraging summary of their week based on their journal entries. \
Focus on patterns, growth, emotions, and insights. Be warm and supportive.";

const SENTIMENT_MAX_TOKENS: u32 = 200;
const SENTIMENT_TEMPERATURE: f32 = 0.3;
const SUMMARY_MAX_TOKENS: u32 = 500;
const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Build the sentiment request for `text`.
#[must_use]
pub fn sentiment_request(model: &str, text: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SENTIMENT_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Please analyze the sentiment of this journal entry: \"{text}\""
            )),
        ],
        max_tokens: SENTIMENT_MAX_TOKENS,
        temperature: SENTIMENT_TEMPERATURE,
    }
}

/// Build the weekly summary request for already formatted entries.
#[must_use]
pub fn summary_request(model: &str, entries_text: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
            ChatMessage::user(format!(
                "Please create a weekly summary of my journal entries:\n\n{entries_text}"
            )),
        ],
        max_tokens: SUMMARY_MAX_TOKENS,
        temperature: SUMMARY_TEMPERATURE,
    }
}

/// Parse the model's JSON reply into a sentiment reading.
///
/// Missing or empty fields fall back to `neutral`, `0.5` and
/// `Analysis completed`. A reply wrapped in a code fence is accepted.
///
/// # Errors
///
/// Returns `Parse` if the reply is not a JSON object.
pub fn parse_sentiment(content: &str) -> Result<SentimentAnalysis, JournalError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fence(content))?;
    if !value.is_object() {
        return Err(JournalError::Parse(
            "Sentiment reply is not a JSON object".to_string(),
        ));
    }

    let mood = value["mood"]
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("neutral");
    let confidence = value["confidence"]
        .as_f64()
        .filter(|c| c.is_normal())
        .unwrap_or(0.5)
        .clamp(0.0, 1.0);
    let reason = value["reason"]
        .as_str()
        .filter(|r| !r.is_empty())
        .unwrap_or("Analysis completed");

    Ok(SentimentAnalysis {
        mood: mood.to_string(),
        confidence,
        reason: reason.to_string(),
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, |inner| inner.trim_start_matches("json").trim())
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

/// A failed request attempt.
#[derive(Debug)]
enum AttemptError {
    Transport(reqwest::Error),
    Status(StatusCode, String),
    Decode(String),
}

impl AttemptError {
    /// Connection failures, timeouts, 5xx and 429 are worth retrying.
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            Self::Status(status, _) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Decode(_) => false,
        }
    }

    fn into_error(self) -> JournalError {
        match self {
            Self::Transport(e) => JournalError::Api(format!("Request failed: {e}")),
            Self::Status(status, body) => {
                JournalError::Api(format!("{status}: {}", api_error_message(&body)))
            }
            Self::Decode(msg) => JournalError::Api(format!("Invalid response: {msg}")),
        }
    }
}

/// Client for sentiment analysis and weekly summaries.
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    sentiment_model: String,
    summary_model: String,
    retry: RetryPolicy,
}

impl OpenAiClient {
    /// Create a client from configuration. Without a key every call fails
    /// with `ApiKeyMissing` before touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AiConfig, api_key: Option<String>) -> Result<Self, JournalError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| JournalError::Api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.clone(),
            sentiment_model: config.sentiment_model.clone(),
            summary_model: config.summary_model.clone(),
            retry: RetryPolicy::from_config(config),
        })
    }

    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Send `request` and return the first choice's content.
    fn complete(&self, operation: &str, request: &ChatRequest) -> Result<String, JournalError> {
        let key = self.api_key.as_deref().ok_or(JournalError::ApiKeyMissing)?;

        debug!(operation, model = %request.model, "calling completion API");
        let response = execute_with_retry(&self.retry, operation, || self.send(key, request))?;

        response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| JournalError::Api("No response from the completion API".to_string()))
    }

    fn send(&self, key: &str, request: &ChatRequest) -> Result<ChatResponse, AttemptError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(key)
            .json(request)
            .send()
            .map_err(AttemptError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AttemptError::Status(status, body));
        }

        response
            .json::<ChatResponse>()
            .map_err(|e| AttemptError::Decode(e.to_string()))
    }
}

/// Run `attempt` until it succeeds, fails permanently, or retries run out.
fn execute_with_retry<T, F>(
    policy: &RetryPolicy,
    operation: &str,
    mut attempt: F,
) -> Result<T, JournalError>
where
    F: FnMut() -> Result<T, AttemptError>,
{
    let mut retries = 0;

    loop {
        match attempt() {
            Ok(value) => {
                if retries > 0 {
                    debug!(operation, attempts = retries + 1, "succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) if retries < policy.max_retries && e.is_retryable() => {
                retries += 1;
                let delay = policy.delay_for(retries);
                warn!(
                    operation,
                    retry = retries,
                    max_retries = policy.max_retries,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = ?e,
                    "request failed, retrying"
                );
                sleep(delay);
            }
            Err(e) => return Err(e.into_error()),
        }
    }
}

impl SentimentAnalyzer for OpenAiClient {
    fn analyze_sentiment(&self, text: &str) -> Result<SentimentAnalysis, JournalError> {
        let request = sentiment_request(&self.sentiment_model, text);
        let content = self.complete("sentiment", &request)?;
        parse_sentiment(&content)
    }
}

impl Summarizer for OpenAiClient {
    fn summarize(&self, entries_text: &str) -> Result<String, JournalError> {
        let request = summary_request(&self.summary_model, entries_text);
        self.complete("weekly summary", &request)
    }
}
