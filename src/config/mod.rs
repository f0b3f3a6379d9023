//! Configuration module for Robots-REP
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use robots_rep::config::load_config;
//! use robots_rep::Parser;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("robots-rep.toml")).unwrap();
//! let parser = Parser::with_config(&config.parser);
//! println!("Checking as: {}", config.user_agent.name);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, ParserConfig, UserAgentConfig, DEFAULT_TRIM_CHARACTERS};

// Re-export parser functions
pub use parser::{load_config, parse_config};
