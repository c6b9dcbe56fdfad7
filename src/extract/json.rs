// src/extract/json.rs

use std::collections::BTreeSet;

use serde_json::Value;

use super::{ListingRow, ListingTable};
use crate::error::ParseError;

/// Rows from the array at dotted `path` (e.g. `data.dlt_srchResult`).
///
/// Columns are the sorted union of keys over all object elements; a missing
/// key is an empty cell. Elements with no non-empty cell are dropped. A path
/// that is absent, or not an array, gives an empty table.
pub fn extract_array(doc: &str, path: &str) -> Result<ListingTable, ParseError> {
    let root: Value = serde_json::from_str(doc)?;

    let Some(items) = lookup(&root, path).and_then(Value::as_array) else {
        logd!("Extract: no array at {path:?}");
        return Ok(ListingTable::empty());
    };

    let columns: BTreeSet<&str> = items
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|obj| obj.keys().map(String::as_str))
        .collect();

    let rows: Vec<ListingRow> = items
        .iter()
        .map(|item| match item.as_object() {
            Some(obj) => columns
                .iter()
                .map(|k| obj.get(*k).map(cell_text).unwrap_or_default())
                .collect(),
            None => vec![cell_text(item)],
        })
        .filter(|row: &ListingRow| row.iter().any(|c| !c.is_empty()))
        .collect();

    let headers = if columns.is_empty() {
        None
    } else {
        Some(columns.iter().map(|k| s!(*k)).collect())
    };

    Ok(ListingTable::new(headers, rows))
}

fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|seg| !seg.is_empty())
        .try_fold(root, |node, seg| node.get(seg))
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        nested => nested.to_string(),
    }
}
