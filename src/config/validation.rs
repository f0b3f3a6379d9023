use crate::config::types::{Config, ParserConfig, UserAgentConfig, DEFAULT_TRIM_CHARACTERS};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_parser_config(&config.parser)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates parser configuration
fn validate_parser_config(config: &ParserConfig) -> Result<(), ConfigError> {
    if config.trim_characters.is_empty() {
        return Err(ConfigError::Validation(
            "trim-characters cannot be empty".to_string(),
        ));
    }

    // Anything visible could eat into directive names or rule patterns
    if let Some(c) = config
        .trim_characters
        .iter()
        .find(|c| !is_space_like(**c))
    {
        return Err(ConfigError::Validation(format!(
            "trim-characters may only contain whitespace, control or zero-width characters, got {:?}",
            c
        )));
    }

    Ok(())
}

fn is_space_like(c: char) -> bool {
    c.is_whitespace() || c.is_control() || DEFAULT_TRIM_CHARACTERS.contains(&c)
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config
        .name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only ASCII letters, digits, '-', '_' and '.', got '{}'",
            config.name
        )));
    }

    Ok(())
}
