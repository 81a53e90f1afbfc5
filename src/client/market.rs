//! Market data and alert endpoints
//!
//! Quote, price history, and price-alert routes of the stock backend:
//! `GET /stock/:id`, `GET /stock/graph/:symbol`, `POST /stock/alert`,
//! `GET /stock/alert/:email`. Path segments are percent-encoded since
//! symbols and email addresses come straight from user input.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

use super::{HistoryPoint, PriceAlert, StockQuote};
use crate::config::ApiConfig;

/// Fetch the latest quote for a stock.
pub async fn fetch_quote(config: &ApiConfig, symbol: &str) -> Result<StockQuote> {
    let url = config.endpoint(&format!("stock/{}", urlencoding::encode(symbol)));
    log::debug!("Fetching quote for {} from {}", symbol, url);
    get_json(&url).await
}

/// Fetch daily closing prices for charting.
pub async fn fetch_history(config: &ApiConfig, symbol: &str) -> Result<Vec<HistoryPoint>> {
    let url = config.endpoint(&format!("stock/graph/{}", urlencoding::encode(symbol)));
    log::debug!("Fetching history for {} from {}", symbol, url);
    get_json(&url).await
}

/// Register a price alert with the backend.
pub async fn set_alert(config: &ApiConfig, alert: &PriceAlert) -> Result<()> {
    let url = config.endpoint("stock/alert");
    log::debug!("Registering alert for {} at {}", alert.symbol, alert.limit);

    let response = reqwest::Client::new()
        .post(&url)
        .json(alert)
        .send()
        .await
        .map_err(|e| anyhow!("Request failed for alert: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::error!("Alert registration failed: {} - {}", status, body);
        return Err(anyhow!("HTTP error for alert: {} - {}", status, body));
    }
    Ok(())
}

/// List the alerts registered for an email address.
pub async fn fetch_alerts(config: &ApiConfig, email: &str) -> Result<Vec<PriceAlert>> {
    let url = config.endpoint(&format!("stock/alert/{}", urlencoding::encode(email)));
    log::debug!("Fetching alerts from {}", url);
    get_json(&url).await
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow!("Request failed: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::error!("Backend error: {} - {}", status, body);
        return Err(anyhow!("HTTP error: {} - {}", status, body));
    }

    response
        .json()
        .await
        .map_err(|e| anyhow!("Failed to parse JSON: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments_are_percent_encoded() {
        let config = ApiConfig::new("http://localhost:5000/api");
        let symbol = "BRK.A & co";
        let url = config.endpoint(&format!("stock/{}", urlencoding::encode(symbol)));
        assert_eq!(url, "http://localhost:5000/api/stock/BRK.A%20%26%20co");

        let email = "user+alerts@example.com";
        let url = config.endpoint(&format!("stock/alert/{}", urlencoding::encode(email)));
        assert_eq!(
            url,
            "http://localhost:5000/api/stock/alert/user%2Balerts%40example.com"
        );
    }
}
