// src/transport/http.rs
use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::config::{consts::USER_AGENT, Settings};
use crate::error::TransportError;

/// Blocking client with a cookie jar (the form flow needs the session
/// cookie from its first GET), browser-like headers and the configured timeout.
pub fn build_client(settings: &Settings) -> Result<Client, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("ko-KR,ko;q=0.9,en-US;q=0.6"),
    );

    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .cookie_store(true)
        .timeout(settings.timeout)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;
    Ok(client)
}

/// Non-2xx is a transport failure, with the URL for the log.
pub fn ensure_success(resp: Response) -> Result<Response, TransportError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(TransportError::Status { status: status.as_u16(), url: resp.url().to_string() })
    }
}
