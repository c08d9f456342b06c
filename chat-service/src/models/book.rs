use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Top-level shape of a catalog search response.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<SearchDoc>,
}

/// One catalog document as it arrives over the wire. Every field is optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    /// Usually a number, but text and `""` show up too.
    pub first_publish_year: Option<Value>,
    pub subject: Option<Vec<String>>,
}

/// A book as the formatters see it, with upstream gaps already filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub title: String,
    /// Never empty: holds `["Unknown"]` when the catalog gave no authors.
    pub authors: Vec<String>,
    /// Rendered as given; `None` when absent or blank.
    pub first_publish_year: Option<String>,
    pub subjects: Vec<String>,
}

impl BookRecord {
    pub fn first_author(&self) -> &str {
        self.authors
            .first()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

impl From<SearchDoc> for BookRecord {
    fn from(doc: SearchDoc) -> Self {
        let authors = match doc.author_name {
            Some(names) if !names.is_empty() => names,
            _ => vec![UNKNOWN_AUTHOR.to_string()],
        };

        Self {
            title: doc.title.unwrap_or_default(),
            authors,
            first_publish_year: doc.first_publish_year.and_then(year_text),
            subjects: doc.subject.unwrap_or_default(),
        }
    }
}

fn year_text(value: Value) -> Option<String> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
