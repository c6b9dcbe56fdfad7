// src/transport/browser.rs
use std::{ffi::OsStr, fmt::Display, sync::Arc};

use headless_chrome::{Browser, LaunchOptions, Tab};

use super::{RawResponse, Transport, TransportKind};
use crate::config::{
    consts::{INDEX_FRAME_ID, QUICK_SEARCH_LINK, RESULTS_TABLE_CLASS, SEARCH_BUTTON_XPATH},
    Settings,
};
use crate::criteria::SearchCriteria;
use crate::error::TransportError;

/// Drives a real Chrome through the site's search form.
pub struct BrowserAutomation {
    settings: Settings,
}

/// One launched browser. The process is killed when this is dropped,
/// so every exit from `fetch` (including `?`) releases it.
pub struct BrowserSession {
    browser: Browser,
}

impl BrowserSession {
    pub fn launch(settings: &Settings) -> Result<Self, TransportError> {
        let options = LaunchOptions::default_builder()
            .headless(settings.headless)
            .sandbox(false)
            .path(settings.chrome_path.clone())
            .args(vec![OsStr::new("--disable-dev-shm-usage")])
            .idle_browser_timeout(settings.timeout * 2)
            .build()
            .map_err(fail("launch options"))?;

        let browser = Browser::new(options).map_err(fail("launch"))?;
        logd!("Browser: launched (headless={})", settings.headless);
        Ok(Self { browser })
    }

    pub fn new_tab(&self) -> Result<Arc<Tab>, TransportError> {
        self.browser.new_tab().map_err(fail("new tab"))
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        logd!("Browser: session released");
    }
}

impl BrowserAutomation {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    fn open_search_page(&self, tab: &Tab) -> Result<(), TransportError> {
        tab.navigate_to(&self.settings.base_url)
            .and_then(|t| t.wait_until_navigated())
            .map_err(fail("open site"))?;

        // The landing page wraps everything in an iframe; load its target directly.
        let src = tab
            .evaluate(&frame_src_js(), false)
            .map_err(fail("read index frame"))?
            .value
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default();
        if !src.is_empty() {
            logd!("Browser: following {INDEX_FRAME_ID} → {src}");
            tab.navigate_to(&src)
                .and_then(|t| t.wait_until_navigated())
                .map_err(fail("open index frame"))?;
        }

        tab.wait_for_element(QUICK_SEARCH_LINK)
            .and_then(|link| link.click().map(|_| ()))
            .map_err(fail("quick search link"))?;
        tab.wait_until_navigated().map_err(fail("search page"))?;
        Ok(())
    }

    fn fill_and_submit(&self, tab: &Tab, criteria: &SearchCriteria) -> Result<(), TransportError> {
        let missing = tab
            .evaluate(&fill_form_js(criteria), false)
            .map_err(fail("fill form"))?
            .value
            .and_then(|v| v.as_str().map(str::to_owned))
            .unwrap_or_default();
        if !missing.is_empty() {
            return Err(TransportError::Browser(format!("search form fields not found: {missing}")));
        }

        tab.wait_for_xpath(SEARCH_BUTTON_XPATH)
            .and_then(|btn| btn.click().map(|_| ()))
            .map_err(fail("search button"))?;
        tab.wait_until_navigated().map_err(fail("submit"))?;
        Ok(())
    }
}

impl Transport for BrowserAutomation {
    fn kind(&self) -> TransportKind {
        TransportKind::BrowserAutomation
    }

    fn fetch(&self, criteria: &SearchCriteria) -> Result<RawResponse, TransportError> {
        let session = BrowserSession::launch(&self.settings)?;
        let tab = session.new_tab()?;
        tab.set_default_timeout(self.settings.timeout);

        self.open_search_page(&tab)?;
        self.fill_and_submit(&tab, criteria)?;

        // No table within the wait is a legitimate "no results" page.
        let marker = format!("table.{RESULTS_TABLE_CLASS}");
        if let Err(e) = tab.wait_for_element_with_custom_timeout(&marker, self.settings.browser_wait) {
            logd!("Browser: {marker} did not appear ({e})");
        }

        let body = tab.get_content().map_err(fail("page source"))?;
        logf!("Browser: {} bytes", body.len());
        Ok(RawResponse::html(body))
    }
}

fn fail<E: Display>(stage: &'static str) -> impl FnOnce(E) -> TransportError {
    move |e| TransportError::Browser(format!("{stage}: {e}"))
}

/// JS string literal (quotes and escapes included).
fn js_str(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn frame_src_js() -> String {
    format!(
        "(() => {{ const f = document.getElementById({}); return f ? f.src : ''; }})()",
        js_str(INDEX_FRAME_ID)
    )
}

/// Sets each field, adding a select option when the page has not loaded it
/// yet (middle/small categories are filled by the page's own AJAX).
/// Returns the selectors that were not found, comma-separated.
fn fill_form_js(criteria: &SearchCriteria) -> String {
    let usage = criteria.usage_codes();
    let (start, end) = (criteria.form_start(), criteria.form_end());
    let fields = [
        ("#idJiwonNm", criteria.court_name()),
        ("select[name=lclsUtilCd]", usage.large),
        ("select[name=mclsUtilCd]", usage.middle),
        ("select[name=sclsUtilCd]", usage.small),
        ("input[name=termStartDt]", start.as_str()),
        ("input[name=termEndDt]", end.as_str()),
    ];
    let calls: Vec<String> = fields
        .iter()
        .map(|(sel, val)| format!("set({}, {})", js_str(sel), js_str(val)))
        .collect();

    format!(
        r#"(() => {{
  const set = (sel, value) => {{
    const el = document.querySelector(sel);
    if (!el) return sel;
    if (el.tagName === 'SELECT' && ![...el.options].some(o => o.value === value)) {{
      el.add(new Option(value, value));
    }}
    el.value = value;
    el.dispatchEvent(new Event('change', {{ bubbles: true }}));
    return '';
  }};
  return [{}].filter(Boolean).join(',');
}})()"#,
        calls.join(", ")
    )
}
