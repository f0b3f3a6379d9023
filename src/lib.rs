//! Robots-REP: Robots Exclusion Protocol verdicts for crawlers
//!
//! This crate parses `robots.txt` content into user-agent groups and decides,
//! for a URL and a crawler name, whether the fetch is allowed. Fetching the
//! file is left to the caller.
//!
//! # Example
//!
//! ```
//! use robots_rep::RobotsTxt;
//!
//! let robots = RobotsTxt::parse("User-agent: *\nDisallow: /private\nAllow: /private/press").unwrap();
//! assert!(!robots.is_allowed("/private/notes", "ExampleBot").unwrap());
//! assert!(robots.is_allowed("/private/press/2024", "ExampleBot").unwrap());
//! ```

pub mod config;
pub mod robots;
pub mod url;

use thiserror::Error;

/// Main error type for Robots-REP operations
#[derive(Debug, Error)]
pub enum RobotsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Robots.txt parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),
}

/// Structural errors in robots.txt content
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Rule (allow/disallow) on line {line} appears before any user-agent line")]
    RuleBeforeUserAgent { line: usize },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL '{input}': {source}")]
    Parse {
        input: String,
        source: ::url::ParseError,
    },
}

/// Result type alias for Robots-REP operations
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::config::{Config, ParserConfig};
pub use crate::robots::{
    Directive, Parser, RobotsTxt, RulePattern, UserAgentGroup, UserAgentGroupBuilder,
};
pub use crate::url::{decode_unreserved, relative_reference, resolve_url};
