//! AI prediction and Q&A endpoints
//!
//! Wraps the backend routes that invoke the language model:
//! `POST /stock/ai/predict` and `POST /stock/ask/ai`. The backend owns
//! the model invocation; this module only ships a stock snapshot or a
//! question over and returns what comes back. Transient failures are
//! retried with exponential backoff.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{
    calculate_backoff_delay, decode_payload, AiPrediction, ApiError, AskRequest, AskResponse,
    StockSnapshot, MAX_RETRIES, REQUEST_TIMEOUT_SECS,
};
use crate::config::ApiConfig;

/// Request an AI assessment for a stock.
pub async fn predict(config: &ApiConfig, stock: &StockSnapshot) -> Result<AiPrediction, ApiError> {
    let url = config.endpoint("stock/ai/predict");
    log::debug!("Requesting AI prediction for {} from {}", stock.symbol, url);
    post_json(&url, stock).await
}

/// Ask the AI a free-form financial question and return the raw
/// commentary text, ready for the parsing core.
pub async fn ask(config: &ApiConfig, question: &str) -> Result<String, ApiError> {
    let url = config.endpoint("stock/ask/ai");
    log::debug!("Sending question to {}", url);

    let request = AskRequest {
        question: question.to_string(),
    };
    let response: AskResponse = post_json(&url, &request).await?;

    response
        .result
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| ApiError::Decode("response contained no result".to_string()))
}

/// POST a JSON body and decode the enveloped response, retrying
/// transient failures with exponential backoff.
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .pool_max_idle_per_host(2)
        .build()?;

    let mut attempt = 0;
    loop {
        match post_json_once(&client, url, body).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < MAX_RETRIES && err.is_retryable() => {
                log::warn!(
                    "Transient backend error ({}), retry {}/{}",
                    err,
                    attempt + 1,
                    MAX_RETRIES
                );
                tokio::time::sleep(calculate_backoff_delay(attempt)).await;
                attempt += 1;
            }
            Err(err) => {
                log::error!("Request to {} failed: {}", url, err);
                return Err(err);
            }
        }
    }
}

async fn post_json_once<B, T>(client: &reqwest::Client, url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = client.post(url).json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let value: serde_json::Value = response.json().await?;
    decode_payload(value)
}
