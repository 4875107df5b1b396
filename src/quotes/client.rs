//! CoinGecko Quote Client
//!
//! A client for the simple-price endpoint, returning spot rates and 24h
//! changes for a set of assets.

use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::quotes::error::QuoteError;
use crate::quotes::{QuoteMap, QuoteSource};
use reqwest::{Client, ClientBuilder, Response};
use std::collections::HashMap;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("quotewatch/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: Client,
    environment: Environment,
}

impl QuoteClient {
    /// Creates a new client.
    ///
    /// # Errors
    /// Returns a `QuoteError::Network` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(environment: Environment) -> Result<Self, QuoteError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()?,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, QuoteError> {
        if !response.status().is_success() {
            return Err(QuoteError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl QuoteSource for QuoteClient {
    async fn fetch(
        &self,
        asset_ids: &[String],
        currency_codes: &[String],
    ) -> Result<QuoteMap, QuoteError> {
        let url = self.build_url("api/v3/simple/price");
        log::debug!("GET {} ids={:?}", url, asset_ids);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("ids", asset_ids.join(",")),
                ("vs_currencies", currency_codes.join(",")),
                ("include_24hr_change", "true".to_string()),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;

        // Change fields are null for assets the source has no history for;
        // drop those entries instead of failing the whole cycle.
        let raw: HashMap<String, HashMap<String, Option<f64>>> =
            serde_json::from_slice(&response_bytes)?;
        Ok(raw
            .into_iter()
            .map(|(asset, fields)| {
                let fields = fields
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v)))
                    .collect();
                (asset, fields)
            })
            .collect())
    }
}
