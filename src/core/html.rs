// src/core/html.rs
// Raw-text checks on markup, independent of tree parsing.
// Tag names are matched case-insensitively on ASCII; byte offsets index the
// original text.

/// Elements whose content is text up to the matching close tag.
const RAW_TEXT: [&str; 2] = ["script", "style"];

/// One opening or closing tag found by [`scan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub start: usize,
    /// One past the closing `>`
    pub end: usize,
    pub closing: bool,
    pub name: &'a str,
}

impl Tag<'_> {
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    pub fn raw<'s>(&self, doc: &'s str) -> &'s str {
        &doc[self.start..self.end]
    }
}

#[derive(Debug, Default)]
pub struct Scan<'a> {
    pub tags: Vec<Tag<'a>>,
    /// What the text ends inside of, if it stops mid-construct
    pub unterminated: Option<&'static str>,
}

/// Walk the tags of `s` in order.
///
/// Comments, doctypes and processing instructions are skipped whole, as is
/// the body of `script`/`style`. A `<` not followed by a letter (or `/` and a
/// letter) is text. Quotes only group inside attribute values, so an
/// apostrophe in text or a comment is never mistaken for one.
pub fn scan(s: &str) -> Scan<'_> {
    let b = s.as_bytes();
    let mut out = Scan::default();
    let mut i = 0usize;

    while let Some(rel) = s[i..].find('<') {
        let lt = i + rel;
        let rest = &s[lt..];

        if let Some(body) = rest.strip_prefix("<!--") {
            match body.find("-->") {
                Some(e) => i = lt + 4 + e + 3,
                None => return out.stop("comment"),
            }
            continue;
        }

        let (closing, name_start) = match (b.get(lt + 1).copied(), b.get(lt + 2).copied()) {
            (Some(b'!' | b'?'), _) => {
                match rest.find('>') {
                    Some(e) => i = lt + e + 1,
                    None => return out.stop("declaration"),
                }
                continue;
            }
            (Some(b'/'), Some(c)) if c.is_ascii_alphabetic() => (true, lt + 2),
            (Some(c), _) if c.is_ascii_alphabetic() => (false, lt + 1),
            _ => {
                i = lt + 1;
                continue;
            }
        };

        let name_end = b[name_start..]
            .iter()
            .position(|c| c.is_ascii_whitespace() || *c == b'>' || *c == b'/')
            .map_or(b.len(), |p| name_start + p);
        let Some(end) = attr_end(b, name_end) else {
            return out.stop("tag");
        };
        let tag = Tag { start: lt, end, closing, name: &s[name_start..name_end] };
        i = end;

        if let Some(&raw) = RAW_TEXT.iter().find(|r| !closing && tag.is(r)) {
            match find_ci(s, &join!("</", raw), end) {
                Some(at) => i = at,
                None => return out.stop(raw),
            }
        }
        out.tags.push(tag);
    }
    out
}

impl Scan<'_> {
    fn stop(mut self, what: &'static str) -> Self {
        self.unterminated = Some(what);
        self
    }
}

/// One past the `>` ending the tag whose attributes start at `i`.
/// A quote opens a value only right after `=`.
fn attr_end(b: &[u8], mut i: usize) -> Option<usize> {
    let mut after_eq = false;
    while i < b.len() {
        match b[i] {
            b'>' => return Some(i + 1),
            b'=' => after_eq = true,
            q @ (b'"' | b'\'') if after_eq => {
                i += 1 + b[i + 1..].iter().position(|&c| c == q)?;
                after_eq = false;
            }
            c if c.is_ascii_whitespace() => {}
            _ => after_eq = false,
        }
        i += 1;
    }
    None
}

/// Case-insensitive `find`, starting at byte `from`.
fn find_ci(s: &str, needle: &str, from: usize) -> Option<usize> {
    let lc = s.to_ascii_lowercase();
    Some(lc.get(from..)?.find(&needle.to_ascii_lowercase())? + from)
}

/// Class names from a raw opening tag such as `<table class="a Ltbl_list">`.
/// Handles double, single and unquoted values.
pub fn class_list(open_tag: &str) -> Vec<&str> {
    let lc = open_tag.to_ascii_lowercase();
    let mut from = 0usize;

    while let Some(rel) = lc[from..].find("class") {
        let at = from + rel;
        from = at + 5;

        // Attribute name must stand alone (not `data-class`, not `classes`)
        let prev_ok = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        let rest = open_tag[from..].trim_start();
        if !prev_ok || !rest.starts_with('=') {
            continue;
        }
        let value = rest[1..].trim_start();
        let raw = match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let inner = &value[1..];
                &inner[..inner.find(q).unwrap_or(inner.len())]
            }
            _ => {
                let end = value
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(value.len());
                &value[..end]
            }
        };
        return raw.split_whitespace().collect();
    }
    Vec::new()
}
