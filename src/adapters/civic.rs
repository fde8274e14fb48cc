use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::model::Official;
use crate::domain::ports::RepresentativeLookup;
use crate::utils::error::{EtlError, Result};

pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/civicinfo/v2/representatives";

const LEGISLATOR_ROLES: [&str; 2] = ["legislatorUpperBody", "legislatorLowerBody"];

#[derive(Debug, Deserialize)]
struct RepresentativeInfoResponse {
    #[serde(default)]
    officials: Vec<Official>,
}

/// HTTP client for the civic information `representatives` endpoint,
/// limited to national legislators.
pub struct CivicInfoClient {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl CivicInfoClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }

    fn query(&self, zipcode: &str, key: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("address", zipcode.to_string()),
            ("levels", "country".to_string()),
        ];
        query.extend(LEGISLATOR_ROLES.iter().map(|role| ("roles", role.to_string())));
        query.push(("key", key.to_string()));
        query
    }
}

#[async_trait]
impl RepresentativeLookup for CivicInfoClient {
    async fn lookup(&self, zipcode: &str) -> Result<Vec<Official>> {
        let key = self.api_key.as_deref().ok_or_else(|| EtlError::MissingConfigError {
            field: "API_KEY".to_string(),
        })?;

        tracing::debug!("Requesting representatives for {} from {}", zipcode, self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query(zipcode, key))
            .send()
            .await?;

        tracing::debug!("Civic API response status: {}", response.status());
        let response = response.error_for_status()?;
        let text = response.text().await?;
        let body: RepresentativeInfoResponse = serde_json::from_str(&text)?;

        Ok(body.officials)
    }
}
