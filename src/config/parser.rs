use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use robots_rep::config::load_config;
///
/// let config = load_config(Path::new("robots-rep.toml")).unwrap();
/// println!("User agent: {}", config.user_agent.name);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// Both the `[parser]` and `[user-agent]` tables are optional.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TRIM_CHARACTERS;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[parser]
trim-characters = [" ", "\t", "\r", "\n", "\u00A0"]

[user-agent]
name = "ExampleBot"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.parser.trim_characters,
            vec![' ', '\t', '\r', '\n', '\u{a0}']
        );
        assert_eq!(config.user_agent.name, "ExampleBot");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.parser.trim_characters, DEFAULT_TRIM_CHARACTERS);
        assert_eq!(config.user_agent.name, "robots-rep");
    }

    #[test]
    fn test_partial_tables_use_defaults() {
        let config = parse_config("[user-agent]\n").unwrap();
        assert_eq!(config.user_agent.name, "robots-rep");

        let config = parse_config("[parser]\n").unwrap();
        assert_eq!(config.parser.trim_characters, DEFAULT_TRIM_CHARACTERS);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/robots-rep.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_multi_character_trim_entry_is_rejected() {
        let result = parse_config("[parser]\ntrim-characters = [\"ab\"]\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[user-agent]
name = "Example Bot"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
