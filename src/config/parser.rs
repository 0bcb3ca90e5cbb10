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
/// use hidden_listings::config::load_config;
///
/// let config = load_config(Path::new("listings.toml")).unwrap();
/// println!("Output: {}", config.output.csv_path);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
///
/// An empty document yields the default configuration.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CSV_PATH, DEFAULT_MAX_ID, DEFAULT_URL_TEMPLATE};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[site]
name = "TestRentals"
url-template = "https://rentals.example.com/listing/{query}/{id}/"
query = "all"
max-id = 25

[http]
user-agent = "TestAgent/1.0"
timeout-secs = 3

[delay]
min-ms = 0
max-ms = 50
per-request = true

[output]
csv-path = "./out.csv"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.name, "TestRentals");
        assert_eq!(config.site.max_id, 25);
        assert_eq!(config.site.query, "all");
        assert_eq!(config.http.user_agent, "TestAgent/1.0");
        assert_eq!(config.http.timeout_secs, 3);
        assert!(config.delay.per_request);
        assert_eq!(config.output.csv_path, "./out.csv");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();

        assert_eq!(config.site.max_id, DEFAULT_MAX_ID);
        assert_eq!(config.site.url_template, DEFAULT_URL_TEMPLATE);
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.delay.min_ms, 800);
        assert_eq!(config.delay.max_ms, 1200);
        assert!(!config.delay.per_request);
        assert_eq!(config.output.csv_path, DEFAULT_CSV_PATH);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[site]\nmax-id = 40\n").unwrap();

        assert_eq!(config.site.max_id, 40);
        assert_eq!(config.site.url_template, DEFAULT_URL_TEMPLATE);
        assert_eq!(config.http.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/listings.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[delay]\nmin-ms = 500\nmax-ms = 100\n");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
