//! Stock backend HTTP client
//!
//! Typed access to the backend's REST routes. The AI endpoints
//! (prediction and free-form Q&A) return a structured [`ApiError`] and
//! retry transient failures with exponential backoff; the market-data
//! endpoints (quote, history, alerts) follow the simpler
//! context-propagating style.
//!
//! The commentary core never touches this module: it parses whatever
//! complete string the caller fetched here.

pub mod ai;
pub mod market;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commentary::types::SentimentKind;

// ============================================================================
// Request Configuration Constants
// ============================================================================

/// Request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum retries for transient errors
pub const MAX_RETRIES: u32 = 2;

/// Base delay for exponential backoff (milliseconds)
pub const RETRY_BASE_DELAY_MS: u64 = 1000;

/// Calculate exponential backoff delay, capped at 10 seconds
pub fn calculate_backoff_delay(attempt: u32) -> std::time::Duration {
    let delay_ms = RETRY_BASE_DELAY_MS * 2u64.pow(attempt);
    std::time::Duration::from_millis(delay_ms.min(10_000))
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-success HTTP status from the backend.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The backend answered with success but embedded an error message
    /// in the JSON body.
    #[error("backend error: {0}")]
    Backend(String),
    /// Response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transient errors worth retrying with backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Backend(_) | Self::Decode(_) => false,
        }
    }
}

/// Decode a success payload, surfacing a backend-embedded `error` field
/// as a typed error first.
pub(crate) fn decode_payload<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(ApiError::Backend(message.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

// ============================================================================
// Wire Models
// ============================================================================

/// Stock snapshot posted to the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSnapshot {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// AI-generated assessment for a stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPrediction {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub recommendation: SentimentKind,
    pub best_buy_price: Option<f64>,
    pub best_sell_price: Option<f64>,
    pub summary: String,
}

/// Question posted to the Q&A endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
}

/// Q&A endpoint payload. `result` holds the raw commentary text that
/// the parsing core consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    pub result: Option<String>,
}

/// Latest traded price for a stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub currency: Option<String>,
}

/// One daily closing price for charting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Price alert registered against an email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAlert {
    pub email: String,
    pub symbol: String,
    pub limit: f64,
}
