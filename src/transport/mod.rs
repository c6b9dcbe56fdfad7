// src/transport/mod.rs
//
// Three ways to get the same result document out of the site.
// Each returns the raw body plus what format it is in; none of them parse.

mod browser;
mod form_post;
mod http;
mod json_api;

use std::{fmt, str::FromStr};

pub use browser::{BrowserAutomation, BrowserSession};
pub use form_post::DirectFormPost;
pub use json_api::DirectJsonApi;

use crate::{
    config::Settings,
    criteria::SearchCriteria,
    error::TransportError,
    extract::Format,
};

/// Response body, consumed once by the extractor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub body: String,
    pub format: Format,
}

impl RawResponse {
    pub fn html(body: impl Into<String>) -> Self {
        Self { body: body.into(), format: Format::Html }
    }

    pub fn json(body: impl Into<String>) -> Self {
        Self { body: body.into(), format: Format::Json }
    }
}

pub trait Transport {
    fn kind(&self) -> TransportKind;

    /// One blocking exchange with the site. No retries.
    fn fetch(&self, criteria: &SearchCriteria) -> Result<RawResponse, TransportError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportKind {
    BrowserAutomation,
    DirectFormPost,
    DirectJsonApi,
}

impl TransportKind {
    pub const ALL: [TransportKind; 3] = [
        TransportKind::DirectFormPost,
        TransportKind::DirectJsonApi,
        TransportKind::BrowserAutomation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransportKind::BrowserAutomation => "Browser",
            TransportKind::DirectFormPost => "Form POST",
            TransportKind::DirectJsonApi => "JSON API",
        }
    }

    /// Short name used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            TransportKind::BrowserAutomation => "browser",
            TransportKind::DirectFormPost => "form",
            TransportKind::DirectJsonApi => "json",
        }
    }
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" | "chrome" => Ok(TransportKind::BrowserAutomation),
            "form" | "post" => Ok(TransportKind::DirectFormPost),
            "json" | "api" => Ok(TransportKind::DirectJsonApi),
            other => Err(format!("unknown transport: {other}")),
        }
    }
}

/// Build the transport for `kind`. HTTP clients are created here; the
/// browser is only launched inside `fetch`.
pub fn for_kind(kind: TransportKind, settings: &Settings) -> Result<Box<dyn Transport>, TransportError> {
    Ok(match kind {
        TransportKind::BrowserAutomation => Box::new(BrowserAutomation::new(settings.clone())),
        TransportKind::DirectFormPost => Box::new(DirectFormPost::new(settings)?),
        TransportKind::DirectJsonApi => Box::new(DirectJsonApi::new(settings)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_slug() {
        for k in TransportKind::ALL {
            assert_eq!(k.slug().parse::<TransportKind>().unwrap(), k);
        }
        assert!("ftp".parse::<TransportKind>().is_err());
    }

    #[test]
    fn raw_response_tags_format() {
        assert_eq!(RawResponse::html("<p>").format, Format::Html);
        assert_eq!(RawResponse::json("{}").format, Format::Json);
    }
}
