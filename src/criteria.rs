// src/criteria.rs
use chrono::NaiveDate;

use crate::config::catalog;
use crate::error::SearchError;

/// One search request. Built once by the caller, never mutated.
///
/// Every value has passed the checks in [`SearchCriteria::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    court_name: String,
    court_code: String,
    building_type_code: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// Large / middle / small usage codes, derived from the small code's prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageCodes<'a> {
    pub large: &'a str,
    pub middle: &'a str,
    pub small: &'a str,
}

impl SearchCriteria {
    pub fn new(
        court_name: impl Into<String>,
        court_code: impl Into<String>,
        building_type_code: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, SearchError> {
        let court_name = court_name.into();
        let building_type_code = building_type_code.into();

        if court_name.trim().is_empty() {
            return Err(SearchError::InvalidCriteria(s!("court is empty")));
        }
        if building_type_code.len() != 11 || !building_type_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SearchError::InvalidCriteria(format!(
                "building type code must be 11 digits: {building_type_code:?}"
            )));
        }
        if start_date > end_date {
            return Err(SearchError::InvalidCriteria(format!(
                "start date {start_date} is after end date {end_date}"
            )));
        }

        Ok(Self {
            court_name,
            court_code: court_code.into(),
            building_type_code,
            start_date,
            end_date,
        })
    }

    /// Resolve human-readable labels through the catalog.
    pub fn from_labels(
        court_label: &str,
        building_label: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, SearchError> {
        let cat = catalog();
        let court = cat
            .court(court_label.trim())
            .ok_or_else(|| SearchError::InvalidCriteria(format!("unknown court: {court_label}")))?;
        let building = cat.building_type(building_label.trim()).ok_or_else(|| {
            SearchError::InvalidCriteria(format!("unknown building type: {building_label}"))
        })?;

        Self::new(&court.name, &court.code, &building.code, start_date, end_date)
    }

    /// Court name as the site's select box knows it (e.g. 서울중앙지방법원)
    pub fn court_name(&self) -> &str {
        &self.court_name
    }

    /// Court office code used by the JSON API (e.g. B000210)
    pub fn court_code(&self) -> &str {
        &self.court_code
    }

    /// 11-digit small-category usage code
    pub fn building_type_code(&self) -> &str {
        &self.building_type_code
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// `YYYY.MM.DD`, as typed into the HTML form.
    pub fn form_start(&self) -> String {
        form_date(self.start_date)
    }

    pub fn form_end(&self) -> String {
        form_date(self.end_date)
    }

    /// `YYYYMMDD`, as the JSON API wants it.
    pub fn api_start(&self) -> String {
        api_date(self.start_date)
    }

    pub fn api_end(&self) -> String {
        api_date(self.end_date)
    }

    pub fn usage_codes(&self) -> UsageCodes<'_> {
        let code = self.building_type_code.as_str();
        UsageCodes {
            large: code.get(..7).unwrap_or(code),
            middle: code.get(..9).unwrap_or(code),
            small: code,
        }
    }

    pub fn building_label(&self) -> &str {
        catalog()
            .building_label_for_code(&self.building_type_code)
            .unwrap_or(&self.building_type_code)
    }
}

pub fn form_date(d: NaiveDate) -> String {
    d.format("%Y.%m.%d").to_string()
}

pub fn api_date(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

/// Accepts `2024-03-01`, `2024.03.01`, `2024/03/01` and `20240301`.
pub fn parse_date(text: &str) -> Result<NaiveDate, SearchError> {
    let t = text.trim();
    for fmt in ["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%Y%m%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Ok(d);
        }
    }
    Err(SearchError::InvalidCriteria(format!("unrecognized date: {text:?}")))
}
