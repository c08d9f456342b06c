use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

const DEFAULT_CATALOG_BASE_URL: &str = "https://openlibrary.org";
const DEFAULT_EXPORT_PATH: &str = "books_data.json";
const DEFAULT_CATEGORIES: [&str; 3] = ["fiction", "science", "history"];
const RESULTS_PER_CATEGORY: usize = 100;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
enum ExportError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog returned status {0}")]
    Status(StatusCode),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

/// Untyped fields: a document with an odd field still decodes, so it cannot
/// fail the rest of its category.
#[derive(Debug, Default, Deserialize)]
struct SearchDoc {
    title: Option<Value>,
    author_name: Option<Value>,
    description: Option<Value>,
    first_publish_year: Option<Value>,
    subject: Option<Value>,
}

/// Flattened record as written to the export file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ExportRecord {
    title: String,
    authors: Vec<String>,
    description: String,
    /// Copied through as the catalog sent it; `null` when absent.
    first_publish_year: Value,
    subject: Vec<String>,
}

impl From<SearchDoc> for ExportRecord {
    fn from(doc: SearchDoc) -> Self {
        Self {
            title: doc.title.map(plain_text).unwrap_or_default(),
            authors: doc.author_name.map(text_list).unwrap_or_default(),
            description: doc.description.map(description_text).unwrap_or_default(),
            first_publish_year: doc.first_publish_year.unwrap_or(Value::Null),
            subject: doc.subject.map(text_list).unwrap_or_default(),
        }
    }
}

fn plain_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// String entries of a JSON array; anything else yields an empty list.
fn text_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Descriptions arrive either as plain text or as `{"type": ..., "value": ...}`.
fn description_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Object(mut map) => match map.remove("value") {
            Some(Value::String(text)) => text,
            _ => String::new(),
        },
        _ => String::new(),
    }
}

struct Exporter {
    client: Client,
    search_url: String,
}

impl Exporter {
    fn new(base_url: &str) -> Result<Self, ExportError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            search_url: format!("{}/search.json", base_url.trim_end_matches('/')),
        })
    }

    async fn fetch_category(&self, category: &str) -> Result<Vec<ExportRecord>, ExportError> {
        info!("Fetching up to {} books for '{}'", RESULTS_PER_CATEGORY, category);

        let limit = RESULTS_PER_CATEGORY.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .query(&[("q", category), ("limit", limit.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ExportError::Status(response.status()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        Ok(parsed.docs.into_iter().map(ExportRecord::from).collect())
    }

    /// Fetches every category in order. A failed category is logged and skipped.
    async fn collect(&self, categories: &[String]) -> Vec<ExportRecord> {
        let mut all_books = Vec::new();

        for category in categories {
            match self.fetch_category(category).await {
                Ok(books) => {
                    info!("✓ Collected {} books for '{}'", books.len(), category);
                    all_books.extend(books);
                }
                Err(e) => error!("✗ Failed to collect '{}': {}", category, e),
            }
        }

        all_books
    }
}

/// Writes `records` as a 4-space indented JSON array, replacing any existing file.
fn write_records(path: &Path, records: &[ExportRecord]) -> Result<(), ExportError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;

    fs::write(path, buf)?;
    Ok(())
}

fn categories_from_args(args: &[String]) -> Vec<String> {
    if args.is_empty() {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        args.to_vec()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("export_module=info")
        .init();

    let base_url =
        std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_CATALOG_BASE_URL.to_string());
    let export_path =
        std::env::var("EXPORT_PATH").unwrap_or_else(|_| DEFAULT_EXPORT_PATH.to_string());

    // Positional arguments replace the default categories
    let args: Vec<String> = std::env::args().skip(1).collect();
    let categories = categories_from_args(&args);
    info!("Exporting categories {:?} to {}", categories, export_path);

    let exporter = Exporter::new(&base_url)?;
    let books = exporter.collect(&categories).await;

    if books.is_empty() {
        warn!("No books collected, writing an empty export");
    }

    write_records(Path::new(&export_path), &books)?;
    info!("Wrote {} books to {}", books.len(), export_path);

    Ok(())
}
