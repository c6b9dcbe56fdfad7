// src/transport/form_post.rs
use reqwest::blocking::Client;
use reqwest::header;

use super::{http, RawResponse, Transport, TransportKind};
use crate::config::{
    consts::{FORM_RESULT_PATH, PAGE_SIZE, SEARCH_FORM_PATH},
    Settings,
};
use crate::criteria::SearchCriteria;
use crate::error::TransportError;

/// Replays the multi-criteria search form as a plain POST.
pub struct DirectFormPost {
    client: Client,
    form_url: String,
    result_url: String,
}

impl DirectFormPost {
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        Ok(Self {
            client: http::build_client(settings)?,
            form_url: settings.url(SEARCH_FORM_PATH),
            result_url: settings.url(FORM_RESULT_PATH),
        })
    }

    /// Form fields in the order the site's own form submits them.
    pub fn form_fields(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
        let usage = criteria.usage_codes();
        let page_spec = format!("default{PAGE_SIZE}");
        vec![
            ("bubwLocGubun", s!("1")),
            ("jiwonNm", s!(criteria.court_name())),
            ("lclsUtilCd", s!(usage.large)),
            ("mclsUtilCd", s!(usage.middle)),
            ("sclsUtilCd", s!(usage.small)),
            ("termStartDt", criteria.form_start()),
            ("termEndDt", criteria.form_end()),
            ("srnID", s!("PNO102001")),
            ("page", page_spec.clone()),
            ("pageSpec", page_spec),
            ("targetRow", s!("1")),
        ]
    }
}

impl Transport for DirectFormPost {
    fn kind(&self) -> TransportKind {
        TransportKind::DirectFormPost
    }

    fn fetch(&self, criteria: &SearchCriteria) -> Result<RawResponse, TransportError> {
        // Session cookie first; the result page rejects cookieless posts.
        logd!("FormPost: GET {}", self.form_url);
        http::ensure_success(self.client.get(&self.form_url).send()?)?;

        let fields = Self::form_fields(criteria);
        logd!("FormPost: POST {} ({} fields)", self.result_url, fields.len());
        let resp = self
            .client
            .post(&self.result_url)
            .header(header::REFERER, &self.form_url)
            .form(&fields)
            .send()?;
        let resp = http::ensure_success(resp)?;

        // Charset from Content-Type (the site serves EUC-KR)
        let body = resp.text()?;
        logf!("FormPost: {} bytes", body.len());
        Ok(RawResponse::html(body))
    }
}
