// src/extract/mod.rs
//! # Listing extraction
//!
//! Turns a raw response body into a [`ListingTable`]. This is the only place
//! that knows where the listings live inside a document:
//!
//! - **HTML**: the first `<table>` carrying the results marker class
//!   (`Ltbl_list`). The first row is the header row and is skipped.
//! - **JSON**: a named array reached by a dotted path
//!   (`data.dlt_srchResult`, or `resultList` for flat documents).
//!
//! ## Outcomes
//! - Marker table / array missing → empty table, `Ok`.
//! - Marker present with no data rows → empty table, `Ok`.
//! - Body unreadable as the declared format → [`ParseError`].
//!
//! Extraction is pure: same body in, same table out. Transports never call
//! into here; `search::run` hands the body over.

pub mod html;
pub mod json;
mod table;

use std::{fmt, str::FromStr};

pub use table::{ListingRow, ListingTable};

use crate::config::consts::{JSON_RESULT_PATH, RESULTS_TABLE_CLASS};
use crate::error::ParseError;

/// What kind of document a response body is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Html,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" | "htm" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Where to look. Defaults match the live site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extractor {
    /// Class carried by the results `<table>`
    pub table_class: String,
    /// Dotted path to the results array
    pub json_path: String,
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            table_class: s!(RESULTS_TABLE_CLASS),
            json_path: s!(JSON_RESULT_PATH),
        }
    }
}

impl Extractor {
    pub fn new(table_class: impl Into<String>, json_path: impl Into<String>) -> Self {
        Self { table_class: table_class.into(), json_path: json_path.into() }
    }

    pub fn with_json_path(mut self, path: impl Into<String>) -> Self {
        self.json_path = path.into();
        self
    }

    pub fn extract(&self, body: &str, format: Format) -> Result<ListingTable, ParseError> {
        let table = match format {
            Format::Html => html::extract_table(body, &self.table_class)?,
            Format::Json => json::extract_array(body, &self.json_path)?,
        };
        logd!(
            "Extract: format={} rows={} headers={} rectangular={}",
            format,
            table.row_count(),
            table.header_count(),
            table.is_rectangular()
        );
        Ok(table)
    }
}

/// Extract with the live site's markers.
pub fn extract(body: &str, format: Format) -> Result<ListingTable, ParseError> {
    Extractor::default().extract(body, format)
}
