use dioxus::logger::tracing;
use futures::future::{BoxFuture, FutureExt};
use reqwest::{Client, Response, Url};

use super::error::{CatalogError, CatalogResult};
use super::record::{CatalogRecord, SearchResponse};
use crate::utils::SearchConfig;

/// Anything that can answer a title search
pub trait CatalogClient {
    fn search<'a>(&'a self, title: &'a str, limit: usize)
        -> BoxFuture<'a, CatalogResult<Vec<CatalogRecord>>>;
}

/// Client for the Open Library title search API
#[derive(Clone)]
pub struct OpenLibraryClient {
    http: Client,
    endpoint: String,
}

impl OpenLibraryClient {
    pub fn new(config: &SearchConfig) -> CatalogResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("book-finder/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        // Validate the endpoint once so every request URL can be built
        Url::parse(&config.endpoint).map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The GET URL for a title search, with the title URL-encoded
    pub fn search_url(&self, title: &str, limit: usize) -> CatalogResult<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[("title", title.to_string()), ("limit", limit.to_string())],
        )
        .map_err(|e| CatalogError::Client(e.to_string()))
    }

    async fn fetch(&self, title: &str, limit: usize) -> CatalogResult<Vec<CatalogRecord>> {
        let url = self.search_url(title, limit)?;
        tracing::debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        read_search_response(response).await
    }
}

impl CatalogClient for OpenLibraryClient {
    fn search<'a>(&'a self, title: &'a str, limit: usize)
        -> BoxFuture<'a, CatalogResult<Vec<CatalogRecord>>> {
        self.fetch(title, limit).boxed()
    }
}

/// Reject non-2xx statuses, then parse the body
pub async fn read_search_response(response: Response) -> CatalogResult<Vec<CatalogRecord>> {
    let body = response.error_for_status()?.text().await?;
    parse_search_response(&body)
}

/// Parse a search body into its records, in service order
pub fn parse_search_response(body: &str) -> CatalogResult<Vec<CatalogRecord>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.docs)
}
