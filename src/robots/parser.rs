//! Robots.txt directive parser
//!
//! This module turns raw robots.txt content into a [`RobotsTxt`] document.
//! Each line is classified once into a [`Directive`], and a small amount of
//! state tracks which group the following rules belong to.

use crate::config::ParserConfig;
use crate::robots::document::RobotsTxt;
use crate::robots::group::{UserAgentGroup, UserAgentGroupBuilder};
use crate::ParseError;

/// One classified robots.txt line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `User-agent: <name>`
    UserAgent(&'a str),
    /// `Allow: <pattern>`
    Allow(&'a str),
    /// `Disallow: <pattern>`
    Disallow(&'a str),
    /// `Sitemap: <url>`
    Sitemap(&'a str),
    /// Anything else, including unsupported directives such as `Crawl-delay`
    Other,
}

/// Line-oriented robots.txt parser
///
/// Parsing is permissive: unknown directives, blank lines, comments, empty
/// rule values and odd spacing are all ignored. The only structural error is a
/// rule line that appears before any `User-agent` line.
///
/// # Example
///
/// ```
/// use robots_rep::Parser;
///
/// let robots = Parser::new()
///     .parse("User-agent: FooBot\nUser-agent: BarBot\nDisallow: /private\n")
///     .unwrap();
///
/// assert_eq!(robots.groups().len(), 1);
/// assert_eq!(robots.groups()[0].user_agents(), ["FooBot", "BarBot"]);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    trim_characters: Vec<char>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::with_config(&ParserConfig::default())
    }
}

impl Parser {
    /// Creates a parser with the default trim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser from configuration
    pub fn with_config(config: &ParserConfig) -> Self {
        Self {
            trim_characters: config.trim_characters.clone(),
        }
    }

    /// Parses robots.txt content
    ///
    /// # Returns
    ///
    /// * `Ok(RobotsTxt)` - The parsed document
    /// * `Err(ParseError)` - An allow/disallow line precedes every user-agent line
    pub fn parse(&self, content: &str) -> Result<RobotsTxt, ParseError> {
        let mut groups: Vec<UserAgentGroup> = Vec::new();
        let mut sitemaps: Vec<String> = Vec::new();
        let mut current: Option<UserAgentGroupBuilder> = None;
        // True while consecutive user-agent lines are being collected
        let mut in_agent_run = false;

        for (index, raw_line) in content.split('\n').enumerate() {
            let line = self.trim(raw_line);
            if line.is_empty() {
                continue;
            }

            let directive = self.classify(line);
            if !matches!(directive, Directive::UserAgent(_)) {
                in_agent_run = false;
            }

            match directive {
                Directive::UserAgent(value) => {
                    if !in_agent_run {
                        groups.extend(current.take().map(UserAgentGroupBuilder::build));
                        in_agent_run = true;
                    }
                    let builder = current.get_or_insert_with(UserAgentGroupBuilder::default);
                    if let Some(agent) = self.user_agent_value(value) {
                        builder.push_agent(agent);
                    }
                }
                Directive::Allow(value) | Directive::Disallow(value) => {
                    let Some(builder) = current.as_mut() else {
                        return Err(ParseError::RuleBeforeUserAgent { line: index + 1 });
                    };
                    let Some(pattern) = self.rule_value(value) else {
                        continue;
                    };
                    if matches!(directive, Directive::Allow(_)) {
                        builder.push_allow(pattern);
                    } else {
                        builder.push_disallow(pattern);
                    }
                }
                Directive::Sitemap(value) => {
                    if !value.is_empty() {
                        sitemaps.push(value.to_string());
                    }
                }
                Directive::Other => {
                    tracing::trace!("Ignoring robots.txt line {}: {}", index + 1, line);
                }
            }
        }

        groups.extend(current.map(UserAgentGroupBuilder::build));

        tracing::debug!(
            "Parsed robots.txt: {} groups, {} sitemaps",
            groups.len(),
            sitemaps.len()
        );

        Ok(RobotsTxt::new(groups, sitemaps))
    }

    /// Classifies a trimmed line
    ///
    /// The directive name is the text before the first `:`, compared
    /// case-insensitively. The returned value is the trimmed text after it.
    pub fn classify<'a>(&self, line: &'a str) -> Directive<'a> {
        let Some((key, value)) = line.split_once(':') else {
            return Directive::Other;
        };
        let key = self.trim(key);
        let value = self.trim(value);

        if key.eq_ignore_ascii_case("user-agent") {
            Directive::UserAgent(value)
        } else if key.eq_ignore_ascii_case("allow") {
            Directive::Allow(value)
        } else if key.eq_ignore_ascii_case("disallow") {
            Directive::Disallow(value)
        } else if key.eq_ignore_ascii_case("sitemap") {
            Directive::Sitemap(value)
        } else {
            Directive::Other
        }
    }

    fn trim<'a>(&self, text: &'a str) -> &'a str {
        text.trim_matches(|c| self.trim_characters.contains(&c))
    }

    /// Agent name with any trailing `# comment` removed
    fn user_agent_value<'a>(&self, value: &'a str) -> Option<&'a str> {
        let name = match value.split_once('#') {
            Some((name, _comment)) => self.trim(name),
            None => value,
        };
        (!name.is_empty()).then_some(name)
    }

    /// Pattern of a rule line: the value up to the first whitespace or trim character
    fn rule_value<'a>(&self, value: &'a str) -> Option<&'a str> {
        value
            .split(|c: char| c.is_whitespace() || self.trim_characters.contains(&c))
            .next()
            .filter(|pattern| !pattern.is_empty())
    }
}
