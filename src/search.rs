// src/search.rs
use std::time::Instant;

use crate::{
    config::Settings,
    criteria::SearchCriteria,
    error::SearchError,
    extract::{Extractor, ListingTable},
    progress::Progress,
    transport::{self, Transport, TransportKind},
};

/// Status text for a search that found nothing. Not an error.
pub const NO_RESULTS: &str = "검색 결과가 없습니다.";

/// fetch → extract. One request, one parse, no retries.
///
/// `Ok` with an empty table means the site had nothing for these criteria;
/// that is never reported as an error.
pub fn run(
    transport: &dyn Transport,
    extractor: &Extractor,
    criteria: &SearchCriteria,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ListingTable, SearchError> {
    let started = Instant::now();
    let kind = transport.kind();

    logf!(
        "Search: Begin via={} court={} building={} {}..{}",
        kind.slug(),
        criteria.court_name(),
        criteria.building_label(),
        criteria.start_date(),
        criteria.end_date()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.begin(kind.label());
        p.log(&format!("{} 요청 중…", kind.label()));
    }

    let result = transport
        .fetch(criteria)
        .map_err(SearchError::from)
        .and_then(|raw| {
            if let Some(p) = progress.as_deref_mut() {
                p.log("결과 해석 중…");
            }
            extractor.extract(&raw.body, raw.format).map_err(SearchError::from)
        });

    match &result {
        Ok(table) => logf!(
            "Search: OK via={} rows={} in {:?}",
            kind.slug(),
            table.row_count(),
            started.elapsed()
        ),
        Err(e) => loge!("Search: Error via={}: {}", kind.slug(), e),
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

/// Build the transport from settings, then [`run`] with the live site's markers.
pub fn search(
    kind: TransportKind,
    settings: &Settings,
    criteria: &SearchCriteria,
    progress: Option<&mut dyn Progress>,
) -> Result<ListingTable, SearchError> {
    let transport = transport::for_kind(kind, settings)?;
    run(transport.as_ref(), &Extractor::default(), criteria, progress)
}
