//! Application configuration.

use crate::consts::cli_consts::DEFAULT_REFRESH_INTERVAL_SECS;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::{fs, path::Path};

/// The reference currency every tracked asset is priced in.
pub const PRIMARY_CURRENCY: &str = "usd";

/// A currency pair whose cross rate is computed through a bridge asset.
///
/// Serialized as `"from/to"`, matching the `usd/brl` shape of the
/// configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
}

impl CurrencyPair {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_lowercase(),
            to: to.to_lowercase(),
        }
    }

    /// The uppercased `FROM/TO` label used in display rows.
    pub fn label(&self) -> String {
        format!("{}/{}", self.from.to_uppercase(), self.to.to_uppercase())
    }
}

impl FromStr for CurrencyPair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((from, to)) if !from.trim().is_empty() && !to.trim().is_empty() => {
                Ok(Self::new(from.trim(), to.trim()))
            }
            _ => Err(format!("invalid currency pair: {s:?} (expected \"from/to\")")),
        }
    }
}

impl TryFrom<String> for CurrencyPair {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<CurrencyPair> for String {
    fn from(pair: CurrencyPair) -> Self {
        pair.to_string()
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Asset identifiers queried from the quote source, in display order.
    pub tracked_assets: Vec<String>,
    /// Currency pairs cross-computed through a bridge asset, in display order.
    pub tracked_pairs: Vec<CurrencyPair>,
    /// Seconds between scheduled fetch cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

fn default_refresh_interval() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tracked_assets: vec![
                "bitcoin".to_string(),
                "ethereum".to_string(),
                "solana".to_string(),
            ],
            tracked_pairs: vec![CurrencyPair::new("usd", "brl"), CurrencyPair::new("eur", "usd")],
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads configuration from the given path, falling back to the built-in
    /// tracked lists when no file exists.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if a file exists but cannot be parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::debug!("no config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The deduplicated currency codes requested from the quote source: every
    /// leg of every tracked pair, plus the primary reference currency.
    pub fn currency_codes(&self) -> Vec<String> {
        let mut codes = vec![PRIMARY_CURRENCY.to_string()];
        for pair in &self.tracked_pairs {
            for code in [&pair.from, &pair.to] {
                if !codes.contains(code) {
                    codes.push(code.clone());
                }
            }
        }
        codes
    }
}

/// Default location of the configuration file.
///
/// # Errors
/// Returns an `std::io::Error` if the home directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
    })?;
    Ok(home.join(".config").join("quotewatch").join("config.json"))
}
