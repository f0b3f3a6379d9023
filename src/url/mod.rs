//! URL handling module for Robots-REP
//!
//! This module resolves candidate URLs into [`Url`] values and provides the
//! percent-decoding applied to paths and rule patterns before comparison.

mod encoding;

use crate::UrlError;
use url::{ParseError, Position, Url};

// Re-export main functions
pub use encoding::decode_unreserved;

/// Base used to resolve relative references such as `/foo` or `page?x=1`
///
/// The `.invalid` TLD is reserved, so the placeholder host can never collide
/// with a real site.
const PLACEHOLDER_BASE: &str = "http://robots.invalid/";

/// Resolves a URL string, accepting both absolute URLs and relative references
///
/// Only the path, query and fragment of the result are relevant for robots.txt
/// matching, so relative input is resolved against a placeholder base.
///
/// # Arguments
///
/// * `input` - An absolute URL (`https://example.com/a`) or a relative reference (`/a?b`)
///
/// # Returns
///
/// * `Ok(Url)` - The resolved URL
/// * `Err(UrlError)` - The input could not be parsed
///
/// # Examples
///
/// ```
/// use robots_rep::url::{relative_reference, resolve_url};
///
/// let url = resolve_url("/search?q=rust#top").unwrap();
/// assert_eq!(relative_reference(&url), "/search?q=rust#top");
///
/// let url = resolve_url("https://example.com/docs").unwrap();
/// assert_eq!(relative_reference(&url), "/docs");
/// ```
pub fn resolve_url(input: &str) -> Result<Url, UrlError> {
    let parse_error = |source| UrlError::Parse {
        input: input.to_string(),
        source,
    };

    match Url::parse(input) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(PLACEHOLDER_BASE).map_err(parse_error)?;
            base.join(input).map_err(parse_error)
        }
        Err(e) => Err(parse_error(e)),
    }
}

/// Returns the relative reference of a URL: path, query and fragment
///
/// This is the portion of the URL that robots.txt rule patterns are matched
/// against. Scheme and authority are never part of it.
pub fn relative_reference(url: &Url) -> &str {
    &url[Position::BeforePath..]
}
