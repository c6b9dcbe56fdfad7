// src/csv.rs
use std::io::{self, Write};

use crate::extract::ListingTable;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the whole table. Header line only when asked for and present.
pub fn write_table<W: Write>(
    mut w: W,
    table: &ListingTable,
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        if let Some(h) = &table.headers {
            write_row(&mut w, h, sep)?;
        }
    }
    for r in &table.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

/// Create a full export string (Copy/Export).
pub fn to_export_string(table: &ListingTable, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buf, table, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ListingTable {
        ListingTable::new(
            Some(vec![s!("사건번호"), s!("감정평가액")]),
            vec![
                vec![s!("2024타경1"), s!("1,000,000")],
                vec![s!("2024타경2"), s!("say \"hi\"")],
            ],
        )
    }

    #[test]
    fn quotes_only_when_needed() {
        let out = to_export_string(&table(), true, ',');
        assert_eq!(
            out,
            "사건번호,감정평가액\n2024타경1,\"1,000,000\"\n2024타경2,\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn tsv_without_headers() {
        let out = to_export_string(&table(), false, '\t');
        assert_eq!(out.lines().next(), Some("2024타경1\t1,000,000"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn headers_requested_but_absent() {
        let t = ListingTable::new(None, vec![vec![s!("a")]]);
        assert_eq!(to_export_string(&t, true, ','), "a\n");
    }
}
