// tests/extract_html.rs
//
// HTML results pages → ListingTable, without any network.
//
use auction_scrape::extract::{self, html::extract_table, Format};
use auction_scrape::ParseError;

fn page(body_rows: &[&[&str]]) -> String {
    let mut doc = String::from(
        r#"<html><body><table class="Ltbl_list"><tr><th>호수</th><th>용도</th><th>가격</th></tr>"#,
    );
    for row in body_rows {
        doc.push_str("<tr>");
        for cell in *row {
            doc.push_str(&format!("<td>{cell}</td>"));
        }
        doc.push_str("</tr>");
    }
    doc.push_str("</table></body></html>");
    doc
}

#[test]
fn two_listings_header_excluded() {
    let doc = page(&[&["101호", "아파트", "1억"], &["102호", "아파트", "1억2천"]]);
    let t = extract::extract(&doc, Format::Html).unwrap();

    assert_eq!(
        t.rows,
        vec![
            vec!["101호".to_string(), "아파트".into(), "1억".into()],
            vec!["102호".to_string(), "아파트".into(), "1억2천".into()],
        ]
    );
    assert_eq!(t.headers, Some(vec!["호수".to_string(), "용도".into(), "가격".into()]));
}

#[test]
fn header_only_table_is_empty() {
    let t = extract::extract(&page(&[]), Format::Html).unwrap();
    assert!(t.is_empty());
}

#[test]
fn no_marker_table_is_empty() {
    let doc = r#"<html><body><p>검색결과가 없습니다.</p>
        <table class="other"><tr><td>x</td></tr><tr><td>y</td></tr></table></body></html>"#;
    let t = extract::extract(doc, Format::Html).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.headers, None);
}

#[test]
fn truncated_document_is_a_parse_error() {
    let doc = r#"<html><body><table class="Ltbl_list"><tr><th>a</th></tr><tr><td>1</td></tr><tr><td clas"#;
    assert!(matches!(
        extract::extract(doc, Format::Html),
        Err(ParseError::Truncated(_))
    ));

    let unclosed = r#"<html><body><table class="Ltbl_list"><tr><th>a</th></tr><tr><td>1</td></tr>"#;
    assert!(matches!(
        extract::extract(unclosed, Format::Html),
        Err(ParseError::Truncated(_))
    ));
}

#[test]
fn non_markup_bodies_are_parse_errors() {
    assert!(matches!(extract::extract("", Format::Html), Err(ParseError::Empty)));
    assert!(matches!(extract::extract("  \n", Format::Html), Err(ParseError::Empty)));
    assert!(matches!(
        extract::extract("Service Unavailable", Format::Html),
        Err(ParseError::NotMarkup)
    ));
}

#[test]
fn row_count_matches_data_rows() {
    for n in [0usize, 1, 7, 40] {
        let cells: Vec<[String; 2]> = (0..n).map(|i| [format!("{i}호"), format!("{i}억")]).collect();
        let rows: Vec<Vec<&str>> = cells.iter().map(|c| vec![c[0].as_str(), c[1].as_str()]).collect();
        let refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();

        let t = extract::extract(&page(&refs), Format::Html).unwrap();
        assert_eq!(t.row_count(), n, "n={n}");
    }
}

#[test]
fn extraction_is_idempotent() {
    let doc = page(&[&["101호", "아파트", "1억"]]);
    let a = extract::extract(&doc, Format::Html).unwrap();
    let b = extract::extract(&doc, Format::Html).unwrap();
    assert_eq!(a, b);
}

#[test]
fn first_marker_table_wins() {
    let doc = r#"<html><body>
        <table class="layout"><tr><th>menu</th></tr><tr><td>홈</td></tr></table>
        <table class="tbl Ltbl_list wide"><tr><th>h</th></tr><tr><td>first</td></tr></table>
        <table class="Ltbl_list"><tr><th>h</th></tr><tr><td>second</td></tr></table>
        </body></html>"#;
    let t = extract::extract(doc, Format::Html).unwrap();
    assert_eq!(t.rows, vec![vec!["first".to_string()]]);
}

#[test]
fn ragged_rows_are_kept_as_is() {
    let doc = page(&[&["101호", "아파트", "1억"], &["102호"]]);
    let t = extract::extract(&doc, Format::Html).unwrap();
    assert_eq!(t.row_count(), 2);
    assert_eq!(t.rows[1], vec!["102호".to_string()]);
    assert!(!t.is_rectangular());
    assert_eq!(t.column_count(), 3);
}

#[test]
fn blank_rows_are_dropped_and_cells_trimmed() {
    let doc = r#"<table class="Ltbl_list">
        <tr><th>사건</th><th>소재지</th></tr>
        <tr><td>   </td><td></td></tr>
        <tr><td>
              2024타경100
            </td><td>서울 <br/> 강남구</td></tr>
        </table>"#;
    let t = extract_table(doc, "Ltbl_list").unwrap();
    assert_eq!(t.rows, vec![vec!["2024타경100".to_string(), "서울강남구".into()]]);
}

#[test]
fn partly_blank_row_keeps_its_blank_cells() {
    let doc = page(&[&["x", " ", ""]]);
    let t = extract::extract(&doc, Format::Html).unwrap();
    assert_eq!(t.rows, vec![vec!["x".to_string(), "".into(), "".into()]]);

    let doc = r#"<table class="Ltbl_list"><tr><th>a</th><th>b</th></tr><tr><td>x</td><td> </td></tr></table>"#;
    assert_eq!(extract_table(doc, "Ltbl_list").unwrap().rows, vec![vec!["x".to_string(), "".into()]]);
}

#[test]
fn trailing_comment_with_apostrophe_parses() {
    let doc = page(&[&["101호", "아파트", "1억"]]) + "\n<!-- it's served from cache -->";
    let t = extract::extract(&doc, Format::Html).unwrap();
    assert_eq!(t.row_count(), 1);
}

#[test]
fn unclosed_text_after_page_parses() {
    let doc = page(&[&["101호", "아파트", "1억"]]) + "<p>1 < 2";
    let t = extract::extract(&doc, Format::Html).unwrap();
    assert_eq!(t.row_count(), 1);
}

#[test]
fn commented_out_marker_table_is_ignored() {
    let doc = r#"<html><body><!-- old layout: <table class="Ltbl_list"> --><p>none</p></body></html>"#;
    let t = extract::extract(doc, Format::Html).unwrap();
    assert!(t.is_empty());

    let doc = r#"<html><head><script>var tpl = '<table class="Ltbl_list">';</script></head><body></body></html>"#;
    assert!(extract::extract(doc, Format::Html).unwrap().is_empty());
}

#[test]
fn custom_marker_class() {
    let doc = r#"<table class="results"><tr><th>a</th></tr><tr><td>1</td></tr></table>"#;
    assert_eq!(extract_table(doc, "results").unwrap().row_count(), 1);
    assert!(extract_table(doc, "Ltbl_list").unwrap().is_empty());

    let ex = extract::Extractor::new("results", "resultList");
    assert_eq!(ex.extract(doc, Format::Html).unwrap().rows, vec![vec!["1".to_string()]]);
}
