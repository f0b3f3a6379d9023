//! Robots.txt handling module
//!
//! This module parses robots.txt content into user-agent groups and resolves
//! allow/disallow verdicts for URLs.

mod document;
mod group;
mod parser;
mod pattern;

pub use document::RobotsTxt;
pub use group::{UserAgentGroup, UserAgentGroupBuilder, WILDCARD_AGENT};
pub use parser::{Directive, Parser};
pub use pattern::RulePattern;

use crate::UrlError;

/// Checks if a URL is allowed by robots.txt
///
/// # Arguments
///
/// * `robots` - The parsed robots.txt data
/// * `url` - The URL to check, absolute or relative
/// * `user_agent` - The user agent string
///
/// # Returns
///
/// * `Ok(true)` - If the URL is allowed
/// * `Ok(false)` - If the URL is disallowed
/// * `Err(UrlError)` - If the URL cannot be parsed
pub fn is_allowed(robots: &RobotsTxt, url: &str, user_agent: &str) -> Result<bool, UrlError> {
    robots.is_allowed(url, user_agent)
}

/// Parses robots.txt content and checks a single URL in one step
///
/// Convenient when a document is only consulted once. Crawlers checking many
/// URLs should parse once with [`RobotsTxt::parse`] and keep the result.
///
/// # Returns
///
/// * `Ok(bool)` - Whether the URL is allowed
/// * `Err(RobotsError::Parse)` - The content is structurally invalid
/// * `Err(RobotsError::Url)` - The URL cannot be parsed
pub fn check(content: &str, url: &str, user_agent: &str) -> crate::Result<bool> {
    let robots = RobotsTxt::parse(content)?;
    Ok(robots.is_allowed(url, user_agent)?)
}
