use serde::Deserialize;

/// Characters trimmed from robots.txt lines and directive values by default
///
/// ASCII whitespace (including NUL, vertical tab and form feed) plus the
/// Unicode space separators, the line and paragraph separators, the
/// zero-width space and the byte-order mark.
pub const DEFAULT_TRIM_CHARACTERS: &[char] = &[
    ' ', '\t', '\n', '\r', '\0', '\u{0B}', '\u{0C}', '\u{85}', '\u{A0}', '\u{1680}', '\u{2000}',
    '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}', '\u{2007}',
    '\u{2008}', '\u{2009}', '\u{200A}', '\u{200B}', '\u{2028}', '\u{2029}', '\u{202F}',
    '\u{205F}', '\u{3000}', '\u{FEFF}',
];

/// Main configuration structure for Robots-REP
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Directive parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Characters stripped from both ends of every line and directive value
    #[serde(rename = "trim-characters", default = "default_trim_characters")]
    pub trim_characters: Vec<char>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trim_characters: default_trim_characters(),
        }
    }
}

fn default_trim_characters() -> Vec<char> {
    DEFAULT_TRIM_CHARACTERS.to_vec()
}

/// Crawler identity used when checking URLs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserAgentConfig {
    /// Product token matched against `User-agent` lines
    #[serde(default = "default_user_agent_name")]
    pub name: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_user_agent_name(),
        }
    }
}

fn default_user_agent_name() -> String {
    "robots-rep".to_string()
}
