use anyhow::Result;
use renda_model::prelude::Holding;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Structured failures from the portfolio API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("empty response from server")]
    EmptyResponse,
    #[error("server rejected request ({status}): {body}")]
    Status { status: StatusCode, body: String },
}

/// Response envelope used by the portfolio API.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// HTTP client for the portfolio API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_version: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] base URL: {}", base_url);

        Self {
            client,
            base_url,
            api_version: "v1".to_string(),
        }
    }

    /// Build a versioned API URL.
    pub fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Fetch the user's fixed-income product list.
    ///
    /// The viewer treats the returned list as the single source of
    /// truth; search, sort, and pagination only derive views from it.
    /// Records that fail model validation are dropped here so the rest
    /// of the snapshot still renders.
    pub async fn fetch_fixed_income(&self) -> Result<Vec<Holding>> {
        let url = self.build_url("fixed-income");
        log::debug!("[ApiClient] GET {}", url);
        let holdings: Vec<Holding> = self.get_json(&url).await?;
        Ok(retain_valid(holdings))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::OK => {
                let envelope: ApiResponse<T> = response.json().await?;
                if let Some(err) = envelope.error {
                    return Err(anyhow::anyhow!(err));
                }
                envelope.data.ok_or_else(|| ApiError::EmptyResponse.into())
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Status { status, body }.into())
            }
        }
    }
}

/// Drop holdings that fail model validation, logging each rejection.
pub fn retain_valid(holdings: Vec<Holding>) -> Vec<Holding> {
    holdings
        .into_iter()
        .filter(|h| match h.validate() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Skipping holding: {}", err);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_versioned_urls() {
        let client = ApiClient::new("http://localhost:3000".to_string());
        assert_eq!(
            client.build_url("/fixed-income"),
            "http://localhost:3000/api/v1/fixed-income"
        );
        assert_eq!(
            client.build_url("fixed-income"),
            "http://localhost:3000/api/v1/fixed-income"
        );
    }

    #[test]
    fn deserializes_the_product_list_envelope() {
        let payload = r#"{
            "success": true,
            "data": [{
                "fixedIncome": {
                    "portfolioProductId": 15,
                    "name": "CDB Banco Master",
                    "bondType": "CDB"
                },
                "position": {
                    "valueApplied": 5000.0,
                    "equity": 5389.71,
                    "profitability": 7.79,
                    "portfolioPercentage": 10.2,
                    "indexerLabel": "110% CDI"
                },
                "due": {
                    "date": 1772323200,
                    "daysUntilExpiration": 548
                }
            }]
        }"#;

        let envelope: ApiResponse<Vec<Holding>> =
            serde_json::from_str(payload).expect("envelope should parse");
        assert!(envelope.success);
        let holdings = envelope.data.expect("data present");
        assert_eq!(holdings.len(), 1);
        assert_eq!(holdings[0].fixed_income.name, "CDB Banco Master");
        assert_eq!(holdings[0].due.days_until_expiration, 548);
    }

    #[test]
    fn invalid_records_are_dropped_from_the_fetched_list() {
        use renda_model::prelude::{Due, FixedIncome, Position, ProductId};

        let good = Holding {
            fixed_income: FixedIncome {
                portfolio_product_id: ProductId::new(1),
                name: "CDB Banco Master".to_string(),
                bond_type: "CDB".to_string(),
            },
            position: Position {
                value_applied: 5000.0,
                equity: 5389.71,
                profitability: 7.79,
                portfolio_percentage: 10.2,
                indexer_label: "110% CDI".to_string(),
            },
            due: Due {
                date: 0,
                days_until_expiration: 548,
            },
        };
        let mut nameless = good.clone();
        nameless.fixed_income.name.clear();
        let mut poisoned = good.clone();
        poisoned.position.value_applied = f64::NAN;

        let kept = retain_valid(vec![nameless, good.clone(), poisoned]);
        assert_eq!(kept, vec![good]);
    }
}
