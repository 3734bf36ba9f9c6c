//! Blocking HTTP transport
//!
//! Everything the pipeline fetches goes through [`Fetcher`], so the shape
//! download and the SPARQL query share one client and one User-Agent, and
//! tests can substitute canned responses.

use reqwest::Url;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::ACCEPT;

use crate::error::Result;

/// Performs a single GET request and returns the response body
pub trait Fetcher {
    /// Fetch `url`, asking for the `accept` media type
    ///
    /// Non-success status codes are errors.
    fn fetch(&self, url: &Url, accept: &str) -> Result<Vec<u8>>;
}

/// `reqwest` backed fetcher identifying itself with a custom User-Agent
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_builder(Client::builder(), user_agent)
    }

    /// Finish a preconfigured builder (proxy, timeouts) with the User-Agent
    pub fn with_builder(builder: ClientBuilder, user_agent: &str) -> Result<Self> {
        let client = builder.user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpClient {
    fn fetch(&self, url: &Url, accept: &str) -> Result<Vec<u8>> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, accept)
            .send()?
            .error_for_status()?;
        Ok(response.bytes()?.to_vec())
    }
}
