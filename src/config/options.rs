// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use super::{catalog, consts::*};
use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use crate::transport::TransportKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
}

/// What the form holds: labels, not codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub court: String,
    pub building: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub transport: TransportKind,
}

impl Default for SearchOptions {
    fn default() -> Self {
        let today = Local::now().date_naive();
        let cat = catalog();
        Self {
            court: cat.court_names().next().map(String::from).unwrap_or_default(),
            building: cat
                .building_type("아파트")
                .map(|b| b.label.clone())
                .or_else(|| cat.building_labels().next().map(String::from))
                .unwrap_or_default(),
            start_date: today,
            end_date: today,
            transport: TransportKind::DirectFormPost,
        }
    }
}

impl SearchOptions {
    pub fn to_criteria(&self) -> Result<SearchCriteria, SearchError> {
        SearchCriteria::from_labels(&self.court, &self.building, self.start_date, self.end_date)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows `format`.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(join!(&*stem, ".", self.format.ext()))
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a typed extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    pub fn set_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == OutputPath::default()
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
