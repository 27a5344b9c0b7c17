// Insight API client - fetches calculation results over HTTP
use crate::application::insight_source::{DateRange, InsightSource};
use crate::domain::insight::InsightCalculationResult;
use crate::infrastructure::config::ApiSettings;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::SecondsFormat;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct InsightApiClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl InsightApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
            client,
        })
    }

    fn result_url(&self, insight_id: &str, range: &DateRange) -> String {
        format!(
            "{}/api/v2/insights/{}/result/{}/{}/",
            self.base_url,
            urlencoding::encode(insight_id),
            range.from.to_rfc3339_opts(SecondsFormat::Secs, true),
            range.to.to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    }
}

#[async_trait]
impl InsightSource for InsightApiClient {
    async fn fetch_result(&self, insight_id: &str, range: &DateRange) -> Result<InsightCalculationResult> {
        let url = self.result_url(insight_id, range);
        tracing::debug!("Fetching insight result: {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to Insight API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Insight API request failed with status {}: {}", status, body);
        }

        let result = response
            .json::<InsightCalculationResult>()
            .await
            .context("Failed to parse Insight API response")?;

        tracing::debug!(
            "Received {} data points for insight {}",
            result.data.len(),
            insight_id
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_result_url() {
        let client = InsightApiClient::new(&ApiSettings {
            base_url: "https://api.example.com/".to_string(),
            token: None,
            timeout_secs: 5,
        })
        .unwrap();
        let range = DateRange::new(
            Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2021, 6, 28, 12, 30, 0).unwrap(),
        );

        assert_eq!(
            client.result_url("a b", &range),
            "https://api.example.com/api/v2/insights/a%20b/result/2021-06-01T00:00:00Z/2021-06-28T12:30:00Z/"
        );
    }
}
