use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the quote-source deployments the dashboard can poll.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local stand-in for the quote API, for development and tests.
    Local,
    /// The public CoinGecko API.
    #[default]
    Production,
}

impl Environment {
    /// Returns the quote API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:50505".to_string(),
            Environment::Production => "https://api.coingecko.com".to_string(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}
