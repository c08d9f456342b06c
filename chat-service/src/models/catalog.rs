use crate::models::book::{BookRecord, SearchDoc, SearchResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const TITLE_FIELDS: &str = "title,author_name,first_publish_year,description,subject";
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Why the catalog could not answer. Callers treat every cause the same way;
/// the distinction only survives into the logs.
#[derive(Error, Debug)]
pub enum UnavailableCause {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(StatusCode),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("no matching books")]
    NotFound,
    #[error("catalog unavailable: {0}")]
    Unavailable(#[from] UnavailableCause),
}

#[async_trait]
pub trait BookCatalog {
    /// Best single match for a title.
    async fn find_by_title(&self, title: &str) -> Result<BookRecord, CatalogError>;
    /// Up to three of the best rated books for a subject.
    async fn find_by_subject(&self, genre: &str) -> Result<Vec<BookRecord>, CatalogError>;
}

/// Catalog backed by the Open Library search API.
pub struct OpenLibraryCatalog {
    client: Client,
    search_url: String,
}

impl OpenLibraryCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("chat-service/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            search_url: format!("{}/search.json", base_url.trim_end_matches('/')),
        })
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<Vec<SearchDoc>, UnavailableCause> {
        debug!("Catalog query {} {:?}", self.search_url, params);

        let response = self
            .client
            .get(&self.search_url)
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UnavailableCause::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.docs)
    }
}

#[async_trait]
impl BookCatalog for OpenLibraryCatalog {
    async fn find_by_title(&self, title: &str) -> Result<BookRecord, CatalogError> {
        let docs = self
            .search(&[("title", title), ("fields", TITLE_FIELDS), ("limit", "1")])
            .await?;

        docs.into_iter()
            .next()
            .map(BookRecord::from)
            .ok_or(CatalogError::NotFound)
    }

    async fn find_by_subject(&self, genre: &str) -> Result<Vec<BookRecord>, CatalogError> {
        let limit = MAX_RECOMMENDATIONS.to_string();
        let docs = self
            .search(&[("subject", genre), ("sort", "rating"), ("limit", limit.as_str())])
            .await?;

        if docs.is_empty() {
            return Err(CatalogError::NotFound);
        }

        Ok(docs
            .into_iter()
            .take(MAX_RECOMMENDATIONS)
            .map(BookRecord::from)
            .collect())
    }
}
