// src/transport/json_api.rs
use reqwest::blocking::Client;
use serde::Serialize;

use super::{http, RawResponse, Transport, TransportKind};
use crate::config::{
    consts::{JSON_SEARCH_PATH, JSON_SUBMISSION_ID, PAGE_SIZE},
    Settings,
};
use crate::criteria::SearchCriteria;
use crate::error::TransportError;

/// Calls the site's internal search endpoint directly.
pub struct DirectJsonApi {
    client: Client,
    url: String,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    #[serde(rename = "dma_pageInfo")]
    pub page_info: PageInfo,
    #[serde(rename = "dma_srchGdsDtlSrchInfo")]
    pub detail: DetailSearch<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page_no: u32,
    pub page_size: u32,
    pub bf_page_no: &'static str,
    pub start_row_no: &'static str,
    pub total_cnt: &'static str,
    pub total_yn: &'static str,
    pub group_total_count: &'static str,
}

impl PageInfo {
    /// First page only.
    fn first() -> Self {
        Self {
            page_no: 1,
            page_size: PAGE_SIZE,
            bf_page_no: "",
            start_row_no: "",
            total_cnt: "",
            total_yn: "Y",
            group_total_count: "",
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSearch<'a> {
    pub cort_ofc_cd: &'a str,
    pub bid_bgng_ymd: String,
    pub bid_end_ymd: String,
    pub lcl_dspsl_gds_lst_usg_cd: &'a str,
    pub mcl_dspsl_gds_lst_usg_cd: &'a str,
    pub scl_dspsl_gds_lst_usg_cd: &'a str,
    pub cort_st_dvs: &'static str,
    pub bid_dvs_cd: &'static str,
    pub mvprp_rlet_dvs_cd: &'static str,
    pub cort_auctn_srch_cond_cd: &'static str,
    pub srch_btn_yn: &'static str,
    pub pgm_id: &'static str,
}

impl<'a> SearchRequest<'a> {
    pub fn from_criteria(criteria: &'a SearchCriteria) -> Self {
        let usage = criteria.usage_codes();
        Self {
            page_info: PageInfo::first(),
            detail: DetailSearch {
                cort_ofc_cd: criteria.court_code(),
                bid_bgng_ymd: criteria.api_start(),
                bid_end_ymd: criteria.api_end(),
                lcl_dspsl_gds_lst_usg_cd: usage.large,
                mcl_dspsl_gds_lst_usg_cd: usage.middle,
                scl_dspsl_gds_lst_usg_cd: usage.small,
                cort_st_dvs: "1",
                bid_dvs_cd: "000331",
                mvprp_rlet_dvs_cd: "00031R",
                cort_auctn_srch_cond_cd: "0004601",
                srch_btn_yn: "Y",
                pgm_id: "PGJ151F01",
            },
        }
    }
}

impl DirectJsonApi {
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        Ok(Self { client: http::build_client(settings)?, url: settings.url(JSON_SEARCH_PATH) })
    }
}

impl Transport for DirectJsonApi {
    fn kind(&self) -> TransportKind {
        TransportKind::DirectJsonApi
    }

    fn fetch(&self, criteria: &SearchCriteria) -> Result<RawResponse, TransportError> {
        if criteria.court_code().is_empty() {
            return Err(TransportError::UnknownCourt(s!(criteria.court_name())));
        }

        let request = SearchRequest::from_criteria(criteria);
        logd!("JsonApi: POST {} court={} {}..{}",
            self.url, criteria.court_code(), request.detail.bid_bgng_ymd, request.detail.bid_end_ymd);

        let resp = self
            .client
            .post(&self.url)
            .header("submissionid", JSON_SUBMISSION_ID)
            .json(&request)
            .send()?;
        let body = http::ensure_success(resp)?.text()?;

        logf!("JsonApi: {} bytes", body.len());
        Ok(RawResponse::json(body))
    }
}
