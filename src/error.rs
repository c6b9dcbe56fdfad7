// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Getting the response body failed. Nothing was parsed.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("browser automation failed: {0}")]
    Browser(String),

    #[error("unknown court: {0}")]
    UnknownCourt(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}

/// The body could not be read as the declared format at all.
/// A missing or empty results table is not a parse error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is empty")]
    Empty,

    #[error("document contains no markup")]
    NotMarkup,

    #[error("document is truncated: {0}")]
    Truncated(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid selector {0:?}")]
    Selector(String),
}

/// Everything a single search can fail with.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SearchError {
    /// Short Korean-first message for the status line.
    pub fn user_message(&self) -> String {
        match self {
            SearchError::InvalidCriteria(msg) => format!("검색 조건 오류: {msg}"),
            SearchError::Transport(e) if e.is_timeout() => s!("요청 시간이 초과되었습니다."),
            SearchError::Transport(e) => format!("사이트 요청 실패: {e}"),
            SearchError::Parse(e) => format!("응답을 해석할 수 없습니다: {e}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("nothing to export")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
