// src/core/sanitize.rs

/// File-name-safe stem. Keeps letters (Hangul included) and digits,
/// turns whitespace runs into `_`, drops path separators and punctuation.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '_' { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '.' { out.push(ch); last_us = false; }
    }
    let out = out.trim_matches(|c| c == '_' || c == '.').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}
