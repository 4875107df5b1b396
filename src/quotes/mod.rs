use crate::quotes::error::QuoteError;
use std::collections::HashMap;

pub(crate) mod client;
pub use client::QuoteClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// Per-asset quote fields: currency codes plus derived fields such as
/// `usd_24h_change`, as returned by the simple-price endpoint.
pub type AssetQuote = HashMap<String, f64>;

/// Mapping from asset identifier to its quote fields.
pub type QuoteMap = HashMap<String, AssetQuote>;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch current rates for the given assets against the given currencies.
    ///
    /// One call covers the whole refresh cycle; no retry is performed here. A
    /// failed cycle surfaces as a single error row and the next cycle is
    /// simply the next scheduled fetch.
    async fn fetch(
        &self,
        asset_ids: &[String],
        currency_codes: &[String],
    ) -> Result<QuoteMap, QuoteError>;
}
