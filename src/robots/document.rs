//! The parsed robots.txt document and cross-group verdicts

use crate::robots::group::UserAgentGroup;
use crate::robots::parser::Parser;
use crate::url::resolve_url;
use crate::{ParseError, UrlError};
use std::str::FromStr;
use url::Url;

/// Parsed robots.txt data
///
/// Holds the user-agent groups in file order and the declared sitemap URLs.
/// A document is immutable and can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxt {
    groups: Vec<UserAgentGroup>,
    sitemaps: Vec<String>,
}

impl RobotsTxt {
    /// Creates a document from groups and sitemap URLs
    pub fn new(groups: Vec<UserAgentGroup>, sitemaps: Vec<String>) -> Self {
        Self { groups, sitemaps }
    }

    /// Creates a permissive document that allows everything
    ///
    /// This is what an empty or missing robots.txt amounts to.
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Parses robots.txt content with the default parser settings
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsTxt)` - The parsed document
    /// * `Err(ParseError)` - A rule line appears before any user-agent line
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        Parser::new().parse(content)
    }

    /// User-agent groups in file order
    pub fn groups(&self) -> &[UserAgentGroup] {
        &self.groups
    }

    /// Sitemap URLs in declaration order
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }

    /// Checks if a URL is allowed for the given user agent
    ///
    /// Every group that applies to `user_agent` (including `*` groups) takes
    /// part. If none applies the URL is allowed. If several apply, their rules
    /// are pooled and resolved by the same most-specific-match rule used
    /// within one group.
    ///
    /// # Arguments
    ///
    /// * `uri` - An absolute URL or a relative reference such as `/page?x=1`
    /// * `user_agent` - The crawler name, compared case-insensitively
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the URL is allowed
    /// * `Ok(false)` - If the URL is disallowed
    /// * `Err(UrlError)` - If `uri` cannot be parsed
    pub fn is_allowed(&self, uri: &str, user_agent: &str) -> Result<bool, UrlError> {
        Ok(self.is_allowed_url(&resolve_url(uri)?, user_agent))
    }

    /// Same as [`is_allowed`](Self::is_allowed) for an already resolved URL
    pub fn is_allowed_url(&self, url: &Url, user_agent: &str) -> bool {
        let matching: Vec<&UserAgentGroup> = self
            .groups
            .iter()
            .filter(|group| group.contains(user_agent))
            .collect();

        verdict(&matching, url).unwrap_or(true)
    }

    /// Checks if the user agent is named explicitly in a group that disallows the URL
    ///
    /// Groups that apply only through the `*` wildcard are ignored, so this
    /// returns `false` whenever no group names `user_agent`, even if a
    /// wildcard group would disallow the URL.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the agent is specifically disallowed
    /// * `Err(UrlError)` - If `uri` cannot be parsed
    pub fn is_explicitly_not_allowed_for(
        &self,
        uri: &str,
        user_agent: &str,
    ) -> Result<bool, UrlError> {
        Ok(self.is_explicitly_not_allowed_for_url(&resolve_url(uri)?, user_agent))
    }

    /// Same as [`is_explicitly_not_allowed_for`](Self::is_explicitly_not_allowed_for)
    /// for an already resolved URL
    pub fn is_explicitly_not_allowed_for_url(&self, url: &Url, user_agent: &str) -> bool {
        let matching: Vec<&UserAgentGroup> = self
            .groups
            .iter()
            .filter(|group| group.contains_explicitly(user_agent))
            .collect();

        verdict(&matching, url).is_some_and(|allowed| !allowed)
    }
}

/// Resolves the verdict of the selected groups, `None` if no group was selected
fn verdict(groups: &[&UserAgentGroup], url: &Url) -> Option<bool> {
    match groups {
        [] => None,
        [group] => Some(group.is_allowed_url(url)),
        _ => Some(UserAgentGroup::pooled_is_allowed_url(groups, url)),
    }
}

impl FromStr for RobotsTxt {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
