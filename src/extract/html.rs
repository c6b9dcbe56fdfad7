// src/extract/html.rs

use scraper::{ElementRef, Html, Selector};

use super::{ListingRow, ListingTable};
use crate::core::html::{class_list, scan};
use crate::error::ParseError;

/// Rows of the first `<table>` whose class list contains `marker_class`.
///
/// - First `<tr>` is the header row (positional; its content is not inspected).
///   Its `th`/`td` texts become `headers`.
/// - Each later `<tr>` yields the trimmed texts of its `<td>` cells.
/// - Rows with no `<td>`, or only blank ones, are dropped.
pub fn extract_table(doc: &str, marker_class: &str) -> Result<ListingTable, ParseError> {
    check_markup(doc, marker_class)?;

    let document = Html::parse_document(doc);
    let table_sel = selector("table")?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td")?;
    let head_sel = selector("th, td")?;

    let Some(table) = document
        .select(&table_sel)
        .find(|t| t.value().classes().any(|c| c == marker_class))
    else {
        logd!("Extract: no table.{marker_class} in document");
        return Ok(ListingTable::empty());
    };

    let mut trs = table.select(&row_sel);

    // FIXME: positional header rule. A second header row (or none at all)
    // would be misread as data / lose the first listing.
    let headers = trs.next().and_then(|tr| {
        let hs: Vec<String> = tr.select(&head_sel).map(cell_text).collect();
        if hs.is_empty() { None } else { Some(hs) }
    });

    let mut rows: Vec<ListingRow> = Vec::new();
    for tr in trs {
        let cells: ListingRow = tr.select(&cell_sel).map(cell_text).collect();
        if cells.iter().all(|c| c.is_empty()) {
            continue; // spacer / layout row
        }
        rows.push(cells);
    }

    Ok(ListingTable::new(headers, rows))
}

/// Each text node trimmed, blanks dropped, the rest joined without a separator.
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::Selector(s!(css)))
}

/// The tree parser accepts anything, so refuse what is clearly not a whole
/// HTML document before parsing.
fn check_markup(doc: &str, marker_class: &str) -> Result<(), ParseError> {
    if doc.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    if !doc.contains('<') {
        return Err(ParseError::NotMarkup);
    }

    let found = scan(doc);
    if let Some(what) = found.unterminated {
        return Err(ParseError::Truncated(format!("document ends inside a {what}")));
    }

    // Table nesting depth inside the first marker table; 0 until it opens.
    let mut depth = 0usize;
    for tag in found.tags.iter().filter(|t| t.is("table")) {
        if depth == 0 {
            if !tag.closing && class_list(tag.raw(doc)).contains(&marker_class) {
                depth = 1;
            }
        } else if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Ok(());
            }
        } else {
            depth += 1;
        }
    }
    if depth > 0 {
        return Err(ParseError::Truncated(format!(
            "results table .{marker_class} is never closed"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "Ltbl_list";

    #[test]
    fn cell_text_joins_trimmed_nodes() {
        let doc = r#"<table class="Ltbl_list"><tr><th>h</th></tr>
            <tr><td> 101 <b> 호 </b>
            </td><td>&nbsp;1억&nbsp;</td></tr></table>"#;
        let t = extract_table(doc, MARKER).unwrap();
        assert_eq!(t.rows, vec![vec![s!("101호"), s!("1억")]]);
    }

    #[test]
    fn th_only_rows_are_dropped() {
        let doc = r#"<table class="Ltbl_list"><tr><th>a</th></tr><tr><th>sub</th></tr>
            <tr><td>x</td></tr></table>"#;
        let t = extract_table(doc, MARKER).unwrap();
        assert_eq!(t.rows, vec![vec![s!("x")]]);
    }

    #[test]
    fn headers_come_from_first_row() {
        let doc = r#"<table class="Ltbl_list"><thead><tr><th>사건번호</th><th> 용도 </th></tr></thead>
            <tbody><tr><td>1</td><td>2</td></tr></tbody></table>"#;
        let t = extract_table(doc, MARKER).unwrap();
        assert_eq!(t.headers, Some(vec![s!("사건번호"), s!("용도")]));
        assert_eq!(t.row_count(), 1);
    }

    #[test]
    fn unclosed_marker_table_is_truncated() {
        let doc = r#"<html><body><table class="Ltbl_list"><tr><td>a</td></tr>"#;
        assert!(matches!(extract_table(doc, MARKER), Err(ParseError::Truncated(_))));
    }

    #[test]
    fn nested_table_does_not_close_marker() {
        let doc = r#"<table class="Ltbl_list"><tr><td><table><tr><td>a</td></tr></table></td></tr>"#;
        assert!(matches!(extract_table(doc, MARKER), Err(ParseError::Truncated(_))));
    }

    #[test]
    fn unterminated_comment_is_truncated() {
        let doc = r#"<table class="Ltbl_list"><tr><td>a</td></tr></table><!-- foot"#;
        assert!(matches!(extract_table(doc, MARKER), Err(ParseError::Truncated(_))));
    }

    #[test]
    fn unclosed_unrelated_table_is_fine() {
        let doc = r#"<html><body><table class="layout"><tr><td>a</td></tr></body></html>"#;
        assert!(extract_table(doc, MARKER).unwrap().is_empty());
    }
}
