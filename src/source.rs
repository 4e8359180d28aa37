// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Where catalog snapshots come from.
//!
//! The store only knows the `CatalogSource` trait. The crate ships one
//! implementation that reads an exported JSON file; the hosted backend lives
//! outside this crate and implements the same trait.
//!
//! Two file layouts are accepted:
//!
//! ```json
//! [ { "id": "...", "name": "Shodan", ... } ]
//! ```
//!
//! ```json
//! { "tools": [ ... ], "categories": [ { "slug": "maps", "name": "Maps", "sort_order": 2, "tool_count": 14 } ] }
//! ```
//!
//! Rows are read one at a time. A row that doesn't deserialize (missing name,
//! unknown `tool_type`, ...) is skipped with a warning; the rest of the
//! catalog still loads.

use crate::error::CatalogError;
use crate::types::{CatalogEntry, CategoryCount, FacetChoice, FacetDimension};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A provider of catalog snapshots.
pub trait CatalogSource {
    /// Every catalog entry. Inactive entries may be included; the store drops them.
    fn fetch_snapshot(&self) -> Result<Vec<CatalogEntry>, CatalogError>;

    /// Category choices in display order.
    ///
    /// An empty list is valid and means "derive categories from the entries".
    fn fetch_facet_vocabulary(&self) -> Result<Vec<FacetChoice>, CatalogError>;

    /// Entries and category choices from the same read of the source.
    ///
    /// `CatalogStore::refresh` calls this. The default fetches the two halves
    /// separately; sources that can serve both at once should override it.
    fn fetch_all(&self) -> Result<(Vec<CatalogEntry>, Vec<FacetChoice>), CatalogError> {
        Ok((self.fetch_snapshot()?, self.fetch_facet_vocabulary()?))
    }
}

/// Parsed contents of an exported catalog file.
#[derive(Debug, Clone)]
pub struct CatalogPayload {
    pub entries: Vec<CatalogEntry>,
    pub categories: Vec<CategoryCount>,
    /// Rows that could not be read as entries.
    pub skipped: usize,
}

impl CatalogPayload {
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let (rows, categories) = match serde_json::from_str::<Value>(json)? {
            Value::Array(rows) => (rows, Vec::new()),
            Value::Object(mut object) => {
                let rows = match object.remove("tools") {
                    Some(Value::Array(rows)) => rows,
                    Some(_) => return Err(CatalogError::Layout("\"tools\" is not a list".into())),
                    None => return Err(CatalogError::Layout("missing \"tools\" list".into())),
                };
                let categories = match object.remove("categories") {
                    Some(Value::Null) | None => Vec::new(),
                    Some(value) => serde_json::from_value(value)?,
                };
                (rows, categories)
            }
            _ => return Err(CatalogError::Layout("expected a list or an object".into())),
        };

        let mut entries = Vec::with_capacity(rows.len());
        let mut skipped = 0;
        for (row, value) in rows.into_iter().enumerate() {
            match serde_json::from_value::<CatalogEntry>(value) {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    warn!(row, %error, "skipping unreadable catalog row");
                    skipped += 1;
                }
            }
        }

        Ok(Self {
            entries,
            categories,
            skipped,
        })
    }

    /// Category counts as filter choices, ordered by `sort_order` then name.
    pub fn category_choices(&self) -> Vec<FacetChoice> {
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then_with(|| a.name.cmp(&b.name)));
        categories
            .into_iter()
            .map(|c| FacetChoice {
                dimension: FacetDimension::Category,
                value: c.slug,
                label: c.name,
                aliases: Vec::new(),
                count: c.tool_count,
            })
            .collect()
    }
}

/// Catalog read from a JSON export on disk. Every fetch re-reads the file;
/// `fetch_all` reads it once for both halves.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CatalogPayload, CatalogError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        let payload = CatalogPayload::parse(&raw)?;
        debug!(
            path = %self.path.display(),
            entries = payload.entries.len(),
            categories = payload.categories.len(),
            skipped = payload.skipped,
            "loaded catalog file"
        );
        Ok(payload)
    }
}

impl CatalogSource for JsonCatalogSource {
    fn fetch_snapshot(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.load()?.entries)
    }

    fn fetch_facet_vocabulary(&self) -> Result<Vec<FacetChoice>, CatalogError> {
        Ok(self.load()?.category_choices())
    }

    fn fetch_all(&self) -> Result<(Vec<CatalogEntry>, Vec<FacetChoice>), CatalogError> {
        let payload = self.load()?;
        let categories = payload.category_choices();
        Ok((payload.entries, categories))
    }
}
