//! Outbound HTTP request stage.
//!
//! [`Fetcher`] is the seam between the pipeline and the network: the binary
//! uses [`HttpFetcher`], tests substitute canned responses.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code.
    pub status: u16,

    /// Final URL after redirects.
    pub url: Url,

    /// Raw `Content-Type` header, if present and valid ASCII.
    pub content_type: Option<String>,

    /// Response body bytes, undecoded.
    pub body: Vec<u8>,
}

/// Issues a single GET and returns the whole response.
pub trait Fetcher {
    /// Fetch `url`. Non-success statuses are returned as responses, not errors.
    fn get(&self, url: &Url) -> Result<Response>;
}

/// Blocking reqwest client configured from [`Options`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client sending the configured user agent, bounded by the
    /// configured timeout.
    pub fn new(options: &Options) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&options.user_agent)
            .map_err(|e| Error::InvalidHeader(format!("`{}`: {e}", options.user_agent)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(options.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &Url) -> Result<Response> {
        debug!(%url, "sending GET");
        let response = self.client.get(url.clone()).send().map_err(Error::Request)?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().map_err(Error::Request)?.to_vec();
        debug!(status, size_bytes = body.len(), url = %final_url, "response received");

        Ok(Response {
            status,
            url: final_url,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_user_agent_with_control_characters() {
        let options = Options {
            user_agent: "bad\nagent".to_string(),
            ..Options::default()
        };
        let result = HttpFetcher::new(&options);
        assert!(matches!(result, Err(Error::InvalidHeader(_))));
    }

    #[test]
    fn builds_with_default_options() {
        assert!(HttpFetcher::new(&Options::default()).is_ok());
    }
}
