// tests/criteria.rs
use chrono::NaiveDate;

use auction_scrape::config::catalog;
use auction_scrape::config::options::SearchOptions;
use auction_scrape::{SearchCriteria, SearchError};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn labels_resolve_to_codes() {
    let c = SearchCriteria::from_labels("서울남부지방법원", "오피스텔", d(2024, 5, 1), d(2024, 5, 31)).unwrap();
    assert_eq!(c.court_name(), "서울남부지방법원");
    assert_eq!(c.court_code(), "B000212");
    assert_eq!(c.building_type_code(), "00008020110");
}

#[test]
fn unknown_labels_are_rejected() {
    let err = SearchCriteria::from_labels("부산지방법원", "아파트", d(2024, 1, 1), d(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidCriteria(ref m) if m.contains("부산지방법원")));

    let err = SearchCriteria::from_labels("서울중앙지방법원", "성", d(2024, 1, 1), d(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidCriteria(_)));
}

#[test]
fn reversed_range_is_rejected() {
    let err = SearchCriteria::from_labels("서울중앙지방법원", "아파트", d(2024, 2, 1), d(2024, 1, 1)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidCriteria(_)));
    assert!(err.user_message().starts_with("검색 조건 오류"));
}

#[test]
fn direct_construction_validates_usage_code() {
    for code in ["123", "0000802010", "000080201040", "0000802010a", ""] {
        let err = SearchCriteria::new("서울중앙지방법원", "B000210", code, d(2024, 1, 1), d(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, SearchError::InvalidCriteria(_)), "{code:?}");
    }
    assert!(SearchCriteria::new(" ", "B000210", "00008020104", d(2024, 1, 1), d(2024, 1, 1)).is_err());

    let c = SearchCriteria::new("서울중앙지방법원", "B000210", "00008020104", d(2024, 1, 1), d(2024, 1, 1)).unwrap();
    assert_eq!(c.usage_codes().large, "0000802");
}

#[test]
fn single_day_range_is_fine() {
    assert!(SearchCriteria::from_labels("서울북부지방법원", "빌라", d(2024, 2, 29), d(2024, 2, 29)).is_ok());
}

#[test]
fn every_catalog_pair_builds() {
    let cat = catalog();
    for court in cat.court_names() {
        for building in cat.building_labels() {
            let c = SearchCriteria::from_labels(court, building, d(2024, 1, 1), d(2024, 1, 31));
            assert!(c.is_ok(), "{court} / {building}");
        }
    }
}

#[test]
fn default_form_options_are_searchable() {
    let opts = SearchOptions::default();
    assert_eq!(opts.building, "아파트");
    assert_eq!(opts.court, "서울중앙지방법원");
    let c = opts.to_criteria().unwrap();
    assert_eq!(c.start_date(), c.end_date());
}
