// tests/export.rs
//
// ExportOptions path logic and file output, without UI.
//
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use auction_scrape::config::options::{ExportFormat, ExportOptions};
use auction_scrape::error::ExportError;
use auction_scrape::{file, ListingTable, SearchCriteria};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("auction_scrape_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn table() -> ListingTable {
    ListingTable::new(
        Some(vec!["사건번호".into(), "감정평가액".into()]),
        vec![
            vec!["2024타경100".into(), "350,000,000".into()],
            vec!["2024타경101".into(), "1억".into()],
        ],
    )
}

#[test]
fn extension_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert!(opts.out_path().to_string_lossy().ends_with("listings.csv"));

    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().to_string_lossy().ends_with("listings.tsv"));
}

#[test]
fn typed_extension_is_replaced() {
    let mut opts = ExportOptions::default();
    opts.set_path("results/seoul.txt");
    assert_eq!(opts.out_path(), Path::new("results").join("seoul.csv"));
    assert!(!opts.is_default_path());
}

#[test]
fn writes_csv_with_headers() {
    let dir = tmp_dir("csv_headers");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("out.csv").to_str().unwrap());

    let path = file::write_export(&opts, &table()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "사건번호,감정평가액\n2024타경100,\"350,000,000\"\n2024타경101,1억\n"
    );
}

#[test]
fn writes_tsv_without_headers_into_new_dir() {
    let dir = tmp_dir("tsv_nested");
    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.include_headers = false;
    opts.set_path(dir.join("a").join("b").join("x").to_str().unwrap());

    let path = file::write_export(&opts, &table()).unwrap();
    assert!(path.ends_with("a/b/x.tsv"));
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), ["2024타경100\t350,000,000", "2024타경101\t1억"]);
}

#[test]
fn empty_table_is_not_written() {
    let dir = tmp_dir("empty");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("none.csv").to_str().unwrap());

    assert!(matches!(file::write_export(&opts, &ListingTable::empty()), Err(ExportError::Empty)));
    assert!(!dir.join("none.csv").exists());
}

#[test]
fn file_in_place_of_dir_is_reported() {
    let dir = tmp_dir("not_a_dir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let mut opts = ExportOptions::default();
    opts.set_path(blocker.join("out.csv").to_str().unwrap());
    assert!(matches!(file::write_export(&opts, &table()), Err(ExportError::NotADirectory(_))));
}

#[test]
fn resolve_out_path_dir_hint() {
    let dir = tmp_dir("resolve");
    let hinted = format!("{}/", dir.join("sub").display());
    let p = file::resolve_out_path(&hinted, "listings.csv").unwrap();
    assert!(p.ends_with("sub/listings.csv"));
    assert!(dir.join("sub").is_dir());

    let p = file::resolve_out_path(dir.to_str().unwrap(), "listings.csv").unwrap();
    assert_eq!(p, dir.join("listings.csv"));

    assert_eq!(file::resolve_out_path("", "x.tsv").unwrap(), PathBuf::from("x.tsv"));
}

#[test]
fn default_stem_names_the_search() {
    let c = SearchCriteria::from_labels(
        "서울중앙지방법원",
        "아파트",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    )
    .unwrap();
    assert_eq!(file::default_stem(&c), "서울중앙지방법원_아파트_20240101-20240131");
}
