use crate::domain::model::{LocalityQuery, LookupResult, PostalCode};
use crate::domain::ports::{ConfigProvider, LookupService};
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};

pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";
const FORMAT_SEGMENT: &str = "json";

/// ViaCEP client over reqwest.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{code}/json/`
    pub fn postal_code_url(&self, code: &PostalCode) -> String {
        format!("{}/{}/{}/", self.base_url, code.as_str(), FORMAT_SEGMENT)
    }

    /// `{base}/{region}/{city}/{street}/json/`
    pub fn address_url(&self, query: &LocalityQuery) -> String {
        format!(
            "{}/{}/{}/{}/{}/",
            self.base_url, query.region, query.city, query.street, FORMAT_SEGMENT
        )
    }

    async fn fetch(&self, url: &str) -> LookupResult {
        tracing::debug!("GET {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return LookupResult::Unsuccessful;
            }
        };

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        // 只有 200 視為成功，其他 2xx 也一樣算失敗
        if status != StatusCode::OK {
            tracing::warn!("Lookup {} returned status {}", url, status);
            return LookupResult::Unsuccessful;
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => LookupResult::Found(body),
            Err(e) => {
                tracing::warn!("Response from {} is not valid JSON: {}", url, e);
                LookupResult::Unsuccessful
            }
        }
    }
}

impl LookupService for ViaCepClient {
    async fn postal_code(&self, code: &PostalCode) -> LookupResult {
        let url = self.postal_code_url(code);
        self.fetch(&url).await
    }

    async fn address(&self, query: &LocalityQuery) -> LookupResult {
        let url = self.address_url(query);
        self.fetch(&url).await
    }
}
