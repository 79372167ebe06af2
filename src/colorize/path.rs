//! File paths and URLs

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use super::Colorizers;
use crate::palette::ColorIndex;

/// What a string looks like as a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Invalid,
    File,
    Url,
}

fn drive_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]:\\").expect("Drive pattern should be valid"))
}

/// Parse `s` as a hierarchical URL. Opaque URIs such as `mailto:x` are
/// rejected along with anything the URL parser refuses. The parser drops
/// surrounding spaces and embedded tabs or newlines, so input carrying
/// them is not a URL.
fn parse_url(s: &str) -> Option<Url> {
    if s.trim() != s || s.chars().any(char::is_control) {
        return None;
    }
    Url::parse(s).ok().filter(|url| !url.cannot_be_a_base())
}

/// Classify `s` as a URL, an absolute file path or neither.
///
/// URLs need a scheme and must not be opaque. File paths start with `/`
/// or with a drive letter such as `C:\`.
pub fn identify_path(s: &str) -> PathKind {
    if parse_url(s).is_some() {
        return PathKind::Url;
    }
    if s.starts_with('/') || drive_pattern().is_match(s) {
        return PathKind::File;
    }
    PathKind::Invalid
}

impl Colorizers {
    /// Path segments and separators colored separately. Empty segments
    /// collapse, so `//a` renders as `/a`.
    pub fn file(&self, file: &str) -> String {
        let sep = if drive_pattern().is_match(file) { '\\' } else { '/' };
        self.segments(file, sep, self.config.colors.path, self.config.colors.path_separator)
    }

    fn segments(&self, s: &str, sep: char, segment: ColorIndex, separator: ColorIndex) -> String {
        let sep_str = sep.to_string();
        let mut out = String::new();
        for (i, part) in s.split(sep).enumerate() {
            if part.is_empty() {
                continue;
            }
            if i > 0 {
                out.push_str(&self.wrap(&sep_str, separator));
            }
            out.push_str(&self.wrap(part, segment));
        }
        if s.ends_with(sep) && (s.len() > 1 || out.is_empty()) {
            out.push_str(&self.wrap(&sep_str, separator));
        }
        out
    }

    /// URL with each component in its own color; the host is hashed like
    /// any other string. The URL is shown in its parsed form, so
    /// `HTTP://Example.com` renders as `http://example.com/`. Input that is
    /// not a URL is returned unchanged.
    pub fn url(&self, raw: &str) -> String {
        let Some(url) = parse_url(raw) else {
            return raw.to_string();
        };
        let colors = &self.config.colors;
        let sep = |s: &str| self.wrap(s, colors.url_separators);

        let mut out = self.wrap(url.scheme(), colors.scheme);
        out.push_str(&sep(if url.has_host() { "://" } else { ":" }));

        if !url.username().is_empty() {
            out.push_str(&self.wrap(url.username(), colors.user));
            if let Some(password) = url.password() {
                out.push_str(&sep(":"));
                out.push_str(&self.wrap(password, colors.password));
            }
            out.push_str(&sep("@"));
        }
        if let Some(host) = url.host_str().filter(|h| !h.is_empty()) {
            out.push_str(&self.wrap(host, self.color_for_string(host)));
        }
        if let Some(port) = url.port() {
            out.push_str(&sep(":"));
            out.push_str(&self.port(port));
        }

        if let Some(segments) = url.path_segments() {
            for segment in segments {
                out.push_str(&sep("/"));
                if !segment.is_empty() {
                    out.push_str(&self.wrap(segment, colors.url_path));
                }
            }
        }

        if let Some(query) = url.query().filter(|q| !q.is_empty()) {
            out.push_str(&sep("?"));
            let pairs: Vec<String> = query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => format!(
                        "{}{}{}",
                        self.wrap(key, colors.query_key),
                        sep("="),
                        self.wrap(value, colors.query_value)
                    ),
                    None => self.wrap(pair, colors.query_key),
                })
                .collect();
            out.push_str(&pairs.join(&sep("&")));
        }

        if let Some(fragment) = url.fragment().filter(|f| !f.is_empty()) {
            out.push_str(&sep("#"));
            out.push_str(&self.wrap(fragment, colors.fragment));
        }
        out
    }

    pub fn urls<S: AsRef<str>>(&self, raw: &[S]) -> String {
        super::join(raw.iter().map(|r| self.url(r.as_ref())))
    }
}
