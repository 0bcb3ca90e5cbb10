use crate::config::types::{Config, DelayConfig, HttpConfig, OutputConfig, SiteConfig};
use crate::site::render_url;
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Largest accepted `max-id`
pub const MAX_ID_LIMIT: u32 = 1_000_000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_http_config(&config.http)?;
    validate_delay_config(&config.delay)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site section: ID range, URL template and patterns
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.name.trim().is_empty() {
        return Err(ConfigError::Validation("site name cannot be empty".to_string()));
    }

    if config.max_id < 1 || config.max_id > MAX_ID_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_id must be between 1 and {}, got {}",
            MAX_ID_LIMIT, config.max_id
        )));
    }

    validate_url_template(&config.url_template, &config.query)?;

    // Name and bed/bath groups
    validate_pattern("title_pattern", &config.title_pattern, 2)?;
    // Amount group
    validate_pattern("price_pattern", &config.price_pattern, 1)?;

    Ok(())
}

/// Checks that the template carries `{id}` and renders to an HTTP(S) URL
fn validate_url_template(template: &str, query: &str) -> Result<(), ConfigError> {
    if !template.contains("{id}") {
        return Err(ConfigError::Validation(format!(
            "url_template must contain '{{id}}', got '{}'",
            template
        )));
    }

    let rendered = render_url(template, query, 1);
    let url = Url::parse(&rendered).map_err(|e| {
        ConfigError::InvalidUrl(format!("url_template renders to '{}': {}", rendered, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "url_template must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Compiles a pattern and checks it has enough capture groups
fn validate_pattern(field: &str, pattern: &str, groups: usize) -> Result<(), ConfigError> {
    let regex = Regex::new(pattern)
        .map_err(|e| ConfigError::InvalidPattern(format!("{}: {}", field, e)))?;

    // captures_len counts the implicit whole-match group
    if regex.captures_len() < groups + 1 {
        return Err(ConfigError::InvalidPattern(format!(
            "{} needs at least {} capture group(s), got {}",
            field,
            groups,
            regex.captures_len() - 1
        )));
    }

    Ok(())
}

fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation("user_agent cannot be empty".to_string()));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

fn validate_delay_config(config: &DelayConfig) -> Result<(), ConfigError> {
    if config.min_ms > config.max_ms {
        return Err(ConfigError::Validation(format!(
            "delay min_ms ({}) must not exceed max_ms ({})",
            config.min_ms, config.max_ms
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation("csv_path cannot be empty".to_string()));
    }

    Ok(())
}
