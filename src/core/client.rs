//! Public client surface + builder.

use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::AvError;

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const USER_AGENT: &str = concat!("avantage-rs/", env!("CARGO_PKG_VERSION"));
const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// HTTP client for the Alpha Vantage `query` endpoint.
///
/// Cheap to clone; holds the underlying `reqwest::Client`, the base URL, and
/// the API key.
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl Default for AvClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AvClient {
    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /* -------- internal getters used by the endpoint modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the query URL for one provider `function` and symbol.
    pub(crate) fn query_url(&self, function: &str, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("function", function)
            .append_pair("symbol", symbol)
            .append_pair("apikey", &self.api_key);
        url
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AvClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query base URL (useful for tests).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the API key explicitly instead of reading `ALPHAVANTAGE_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// A missing API key is not rejected here. The key falls back to the
    /// `ALPHAVANTAGE_API_KEY` environment variable and then to the empty
    /// string; requests sent with an empty key fail upstream with the
    /// provider's own error payload, which the fetchers classify normally.
    pub fn build(self) -> Result<AvClient, AvError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => {
                Url::parse(DEFAULT_BASE_URL).map_err(|e| AvError::Unexpected(e.to_string()))?
            }
        };

        let api_key = self
            .api_key
            .or_else(|| env::var(API_KEY_ENV).ok())
            .unwrap_or_default();

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb
            .build()
            .map_err(|e| AvError::Unexpected(e.to_string()))?;

        Ok(AvClient {
            http,
            base_url,
            api_key,
        })
    }
}
