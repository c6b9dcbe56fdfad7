// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::sanitize_filename;
use crate::criteria::SearchCriteria;
use crate::csv::write_table;
use crate::error::ExportError;
use crate::extract::ListingTable;

/// Write the table to `export.out_path()` (headers policy and delimiter from `export`).
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &ListingTable) -> Result<PathBuf, ExportError> {
    if table.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = export.out_path();
    write_table_to(&path, table, export.include_headers, export.delim())?;
    logf!("Export: {} rows → {}", table.row_count(), path.display());
    Ok(path)
}

/// Ensure parent dir exists; create/truncate file; write everything.
pub fn write_table_to(
    path: &Path,
    table: &ListingTable,
    include_headers: bool,
    sep: char,
) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_table(&mut out, table, include_headers, sep)?;
    out.flush()?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// `<court>_<building>_<start>-<end>`, e.g. `서울중앙지방법원_아파트_20240101-20240131`.
pub fn default_stem(criteria: &SearchCriteria) -> String {
    let raw = format!(
        "{} {} {}-{}",
        criteria.court_name(),
        criteria.building_label(),
        criteria.api_start(),
        criteria.api_end()
    );
    sanitize_filename(&raw, crate::config::consts::DEFAULT_FILE)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

/// Turn a user-typed output path into a concrete file path.
/// A trailing separator or an existing directory means "put `default_filename` in there".
pub fn resolve_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, ExportError> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
