//! User-agent groups and the most-specific-match verdict

use crate::robots::pattern::RulePattern;
use crate::url::{decode_unreserved, relative_reference, resolve_url};
use crate::UrlError;
use url::Url;

/// Agent token that makes a group apply to every crawler
pub const WILDCARD_AGENT: &str = "*";

/// A set of user agents sharing one list of allow and disallow rules
///
/// Groups are immutable once built. Use [`UserAgentGroupBuilder`] to assemble
/// one rule at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentGroup {
    user_agents: Vec<String>,
    disallowed: Vec<RulePattern>,
    allowed: Vec<RulePattern>,
}

impl UserAgentGroup {
    /// Creates a group from its agents and rule lists
    pub fn new<A, S>(user_agents: A, disallowed: Vec<RulePattern>, allowed: Vec<RulePattern>) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_agents: user_agents.into_iter().map(Into::into).collect(),
            disallowed,
            allowed,
        }
    }

    /// Starts building a group for the given agents
    pub fn builder<A, S>(user_agents: A) -> UserAgentGroupBuilder
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UserAgentGroupBuilder::new(user_agents)
    }

    /// Combines several groups into one synthetic wildcard group
    ///
    /// The result holds every disallow pattern of every group, in group order,
    /// followed by every allow pattern in group order. This is how rules are
    /// pooled when more than one group applies to the same crawler.
    pub fn merge<'a, I>(groups: I) -> Self
    where
        I: IntoIterator<Item = &'a UserAgentGroup>,
    {
        let mut disallowed = Vec::new();
        let mut allowed = Vec::new();

        for group in groups {
            disallowed.extend(group.disallowed.iter().cloned());
            allowed.extend(group.allowed.iter().cloned());
        }

        Self::new([WILDCARD_AGENT], disallowed, allowed)
    }

    /// Agent names in declaration order
    pub fn user_agents(&self) -> &[String] {
        &self.user_agents
    }

    /// Disallow patterns in declaration order
    pub fn disallowed_patterns(&self) -> &[RulePattern] {
        &self.disallowed
    }

    /// Allow patterns in declaration order
    pub fn allowed_patterns(&self) -> &[RulePattern] {
        &self.allowed
    }

    /// Checks if the group applies to `user_agent`
    ///
    /// Names compare case-insensitively, and a `*` entry matches any agent.
    pub fn contains(&self, user_agent: &str) -> bool {
        self.user_agents
            .iter()
            .any(|agent| agent == WILDCARD_AGENT || agent.eq_ignore_ascii_case(user_agent))
    }

    /// Checks if the group names `user_agent` explicitly, ignoring `*`
    pub fn contains_explicitly(&self, user_agent: &str) -> bool {
        self.user_agents
            .iter()
            .any(|agent| agent != WILDCARD_AGENT && agent.eq_ignore_ascii_case(user_agent))
    }

    /// Checks if the group allows fetching `uri`
    ///
    /// # Arguments
    ///
    /// * `uri` - An absolute URL or a relative reference such as `/path?query`
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the URL is allowed
    /// * `Ok(false)` - If the URL is disallowed
    /// * `Err(UrlError)` - If `uri` cannot be parsed
    pub fn is_allowed(&self, uri: &str) -> Result<bool, UrlError> {
        Ok(self.is_allowed_url(&resolve_url(uri)?))
    }

    /// Checks if the group allows fetching an already resolved URL
    ///
    /// With no matching disallow rule the URL is allowed. With matching
    /// disallow rules but no matching allow rule it is disallowed. When both
    /// match, the longest raw pattern wins, and an allow wins a tie.
    pub fn is_allowed_url(&self, url: &Url) -> bool {
        let reference = decode_unreserved(relative_reference(url));
        let allowed = most_specific_match(&self.disallowed, &self.allowed, &reference);

        tracing::trace!(
            "Verdict for '{}' with agents {:?}: {}",
            reference,
            self.user_agents,
            if allowed { "allowed" } else { "disallowed" }
        );

        allowed
    }

    /// Verdict of several groups with their rules pooled
    ///
    /// Gives the same answer as [`merge`](Self::merge) followed by
    /// [`is_allowed_url`](Self::is_allowed_url), but reads the patterns in
    /// place so their compiled matchers are reused across queries.
    pub(crate) fn pooled_is_allowed_url(groups: &[&UserAgentGroup], url: &Url) -> bool {
        let reference = decode_unreserved(relative_reference(url));
        let allowed = most_specific_match(
            groups.iter().flat_map(|group| &group.disallowed),
            groups.iter().flat_map(|group| &group.allowed),
            &reference,
        );

        tracing::trace!(
            "Verdict for '{}' across {} pooled groups: {}",
            reference,
            groups.len(),
            if allowed { "allowed" } else { "disallowed" }
        );

        allowed
    }
}

/// Resolves allow against disallow for an already decoded reference
fn most_specific_match<'a, D, A>(disallowed: D, allowed: A, reference: &str) -> bool
where
    D: IntoIterator<Item = &'a RulePattern>,
    A: IntoIterator<Item = &'a RulePattern>,
{
    let Some(longest_disallow) = longest_match(disallowed, reference) else {
        return true;
    };

    match longest_match(allowed, reference) {
        Some(longest_allow) => longest_disallow <= longest_allow,
        None => false,
    }
}

/// Raw length of the longest pattern matching `reference`, if any matches
fn longest_match<'a, I>(patterns: I, reference: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a RulePattern>,
{
    patterns
        .into_iter()
        .filter(|pattern| pattern.matches_decoded(reference))
        .map(RulePattern::specificity)
        .max()
}

/// Incremental builder for [`UserAgentGroup`]
///
/// Agents are given when the builder is created and rules can only be
/// appended. [`build`](Self::build) freezes the group.
#[derive(Debug, Clone, Default)]
pub struct UserAgentGroupBuilder {
    user_agents: Vec<String>,
    disallowed: Vec<RulePattern>,
    allowed: Vec<RulePattern>,
}

impl UserAgentGroupBuilder {
    /// Creates a builder for the given agents
    pub fn new<A, S>(user_agents: A) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_agents: user_agents.into_iter().map(Into::into).collect(),
            disallowed: Vec::new(),
            allowed: Vec::new(),
        }
    }

    /// Appends a disallow pattern
    pub fn disallow(mut self, pattern: impl Into<RulePattern>) -> Self {
        self.push_disallow(pattern);
        self
    }

    /// Appends an allow pattern
    pub fn allow(mut self, pattern: impl Into<RulePattern>) -> Self {
        self.push_allow(pattern);
        self
    }

    pub(crate) fn push_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agents.push(user_agent.into());
    }

    pub(crate) fn push_disallow(&mut self, pattern: impl Into<RulePattern>) {
        self.disallowed.push(pattern.into());
    }

    pub(crate) fn push_allow(&mut self, pattern: impl Into<RulePattern>) {
        self.allowed.push(pattern.into());
    }

    /// Freezes the group
    pub fn build(self) -> UserAgentGroup {
        UserAgentGroup {
            user_agents: self.user_agents,
            disallowed: self.disallowed,
            allowed: self.allowed,
        }
    }
}
