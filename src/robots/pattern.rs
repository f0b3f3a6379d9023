//! Rule pattern compilation and matching
//!
//! A rule pattern is the value of an `Allow` or `Disallow` line. It is matched
//! against the relative reference (path, query and fragment) of a URL after
//! both sides have been percent-decoded.

use crate::url::{decode_unreserved, relative_reference, resolve_url};
use crate::UrlError;
use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::OnceLock;
use url::Url;

/// Upper bound for the compiled size of a single rule pattern
const COMPILED_SIZE_LIMIT: usize = 1 << 20;

/// A single allow or disallow pattern
///
/// Two characters are special: `*` matches any sequence of characters
/// (including none) and a trailing `$` anchors the match to the end of the
/// reference. Everything else is literal. The pattern may match anywhere in
/// the reference, so `/bar` matches `/foo/bar`.
///
/// The matcher is compiled on first use and cached for the lifetime of the
/// pattern.
///
/// Only percent-encoded ASCII is normalized. URLs have non-ASCII path
/// characters percent-encoded (`/café` becomes `/caf%C3%A9`), so a pattern
/// written with raw UTF-8 never matches them; write such patterns encoded.
#[derive(Clone)]
pub struct RulePattern {
    raw: String,
    compiled: OnceLock<Option<Regex>>,
}

impl RulePattern {
    /// Creates a new pattern from a directive value
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            raw: pattern.into(),
            compiled: OnceLock::new(),
        }
    }

    /// Returns the original, undecoded directive value
    pub fn pattern(&self) -> &str {
        &self.raw
    }

    /// Length of the raw pattern in bytes, used to rank competing matches
    pub fn specificity(&self) -> usize {
        self.raw.len()
    }

    /// Checks whether the pattern matches a resolved URL
    ///
    /// # Examples
    ///
    /// ```
    /// use robots_rep::url::resolve_url;
    /// use robots_rep::RulePattern;
    ///
    /// let pattern = RulePattern::new("/foo/*/bar$");
    /// assert!(pattern.matches(&resolve_url("/foo/yo/bar").unwrap()));
    /// assert!(!pattern.matches(&resolve_url("/foo/yo/bar/baz").unwrap()));
    /// ```
    pub fn matches(&self, url: &Url) -> bool {
        self.matches_decoded(&decode_unreserved(relative_reference(url)))
    }

    /// Resolves `uri` and checks whether the pattern matches it
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the pattern matches
    /// * `Err(UrlError)` - `uri` could not be parsed
    pub fn matches_str(&self, uri: &str) -> Result<bool, UrlError> {
        Ok(self.matches(&resolve_url(uri)?))
    }

    #[cfg(test)]
    pub(crate) fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Matches an already decoded relative reference
    pub(crate) fn matches_decoded(&self, reference: &str) -> bool {
        self.compiled()
            .is_some_and(|regex| regex.is_match(reference))
    }

    fn compiled(&self) -> Option<&Regex> {
        self.compiled
            .get_or_init(|| match compile(&self.raw) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    tracing::warn!("Rule pattern '{}' cannot be compiled: {}", self.raw, e);
                    None
                }
            })
            .as_ref()
    }
}

/// Builds the regular expression for a raw pattern
fn compile(raw: &str) -> Result<Regex, regex::Error> {
    let decoded = decode_unreserved(raw);
    let (body, anchored) = match decoded.strip_suffix('$') {
        Some(body) => (body, true),
        None => (decoded.as_str(), false),
    };

    let mut expression = body
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    if anchored {
        expression.push('$');
    }

    RegexBuilder::new(&expression)
        .dot_matches_new_line(true)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
}

impl fmt::Debug for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RulePattern").field(&self.raw).finish()
    }
}

impl fmt::Display for RulePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for RulePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RulePattern {}

impl From<&str> for RulePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for RulePattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}
