//! Catalog ingestion: raw JSON rows to [`CatalogRecord`]s.
//!
//! Rows are sanitized the same way the directory backend cleans user input
//! before storing it, and rows marked `rejected` never reach the index.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::traits::CatalogSource;
use crate::types::CatalogRecord;

pub const MAX_NAME_CHARS: usize = 160;
pub const MAX_CATEGORY_CHARS: usize = 120;
pub const MAX_DESCRIPTION_CHARS: usize = 500;

const ALLOWED_PUNCTUATION: &str = ".,;:!?'\"()-";

/// A row as stored by the directory backend. Only ever seen here.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    id: Value,
    #[serde(default, alias = "business_name")]
    name: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    discount: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl CatalogRow {
    fn is_rejected(&self) -> bool {
        self.status.as_deref().is_some_and(|s| s.trim().eq_ignore_ascii_case("rejected"))
    }

    fn into_record(self, row_number: usize) -> CatalogRecord {
        let id = match self.id {
            Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => format!("row-{}", row_number),
        };
        CatalogRecord {
            id,
            name: sanitize_text(self.name.as_deref().unwrap_or(""), MAX_NAME_CHARS),
            category: sanitize_text(self.category.as_deref().unwrap_or(""), MAX_CATEGORY_CHARS),
            description: sanitize_text(self.description.as_deref().unwrap_or(""), MAX_DESCRIPTION_CHARS),
            discount: self.discount.unwrap_or_default().trim().to_string(),
            city: self.city.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Parse a JSON array of catalog rows, dropping rejected ones.
pub fn records_from_json(json: &str) -> Result<Vec<CatalogRecord>> {
    let rows: Vec<CatalogRow> =
        serde_json::from_str(json).map_err(|e| Error::Catalog(format!("malformed catalog JSON: {}", e)))?;
    let total = rows.len();
    let mut records = Vec::with_capacity(total);
    for (i, row) in rows.into_iter().enumerate() {
        if row.is_rejected() {
            debug!(row = i + 1, "skipping rejected catalog row");
            continue;
        }
        records.push(row.into_record(i + 1));
    }
    if records.len() < total {
        info!(kept = records.len(), skipped = total - records.len(), "filtered catalog rows");
    }
    Ok(records)
}

/// A catalog stored as a JSON file, re-read on every snapshot.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl CatalogSource for JsonCatalog {
    fn snapshot(&self) -> Result<Vec<CatalogRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = records_from_json(&content)?;
        info!(path = %self.path.display(), items = records.len(), "loaded catalog snapshot");
        Ok(records)
    }
}

/// Remove HTML tags, drop characters outside word characters, whitespace and
/// basic punctuation, trim, and cut to `max_chars` characters.
pub fn sanitize_text(text: &str, max_chars: usize) -> String {
    let stripped = strip_html(text);
    let cleaned: String = stripped
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '_' || c.is_whitespace() || ALLOWED_PUNCTUATION.contains(c))
        .collect();
    cleaned.trim().chars().take(max_chars).collect()
}

/// Remove every `<...>` span. An unclosed `<` is left alone.
fn strip_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else { break };
        out.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);
    out
}
