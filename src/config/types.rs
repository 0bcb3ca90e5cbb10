use serde::Deserialize;

/// Source name of the default site
pub const DEFAULT_SOURCE_NAME: &str = "StudentRentalsLaCrosse";

/// Page URL template; `{query}` and `{id}` are substituted per request
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://www.studentrentalslacrosse.com/all-rental-listings-la-crosse/{query}/{id}/";

/// Placeholder query segment the site accepts for "any listing"
pub const DEFAULT_QUERY: &str = "any-words";

/// Highest listing ID probed
pub const DEFAULT_MAX_ID: u32 = 900;

/// `<name> - <N>br/<M>ba`, anchored at the start of the cleaned title
pub const DEFAULT_TITLE_PATTERN: &str = r"^(.*?)\s*[–-]\s*(\d+br/\d+(?:\.\d+)?ba)";

/// First dollar amount: four or more bare digits, or comma-grouped
pub const DEFAULT_PRICE_PATTERN: &str = r"\$(\d{4,}|\d{1,3}(?:,\d{3})*)";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DELAY_MIN_MS: u64 = 800;
pub const DEFAULT_DELAY_MAX_MS: u64 = 1200;
pub const DEFAULT_CSV_PATH: &str = "hidden_listings.csv";

/// Main configuration structure
///
/// Every section falls back to its defaults, so an empty file describes the
/// La Crosse student rentals scan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub delay: DelayConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Which site to probe and how to read its pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Source name reported for this site
    pub name: String,

    /// Page URL template containing `{id}` and optionally `{query}`
    #[serde(rename = "url-template")]
    pub url_template: String,

    /// Value substituted for `{query}`
    pub query: String,

    /// IDs `1..=max_id` are probed
    #[serde(rename = "max-id")]
    pub max_id: u32,

    /// Applied to the cleaned title; group 1 is the name, group 2 the bed/bath token
    #[serde(rename = "title-pattern")]
    pub title_pattern: String,

    /// Applied to the body text; group 1 is the amount without the dollar sign
    #[serde(rename = "price-pattern")]
    pub price_pattern: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SOURCE_NAME.to_string(),
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            query: DEFAULT_QUERY.to_string(),
            max_id: DEFAULT_MAX_ID,
            title_pattern: DEFAULT_TITLE_PATTERN.to_string(),
            price_pattern: DEFAULT_PRICE_PATTERN.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Pause between consecutive requests
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DelayConfig {
    /// Lower bound of the random delay (milliseconds)
    #[serde(rename = "min-ms")]
    pub min_ms: u64,

    /// Upper bound of the random delay, inclusive (milliseconds)
    #[serde(rename = "max-ms")]
    pub max_ms: u64,

    /// Draw a fresh delay before every pause instead of once per scan
    #[serde(rename = "per-request")]
    pub per_request: bool,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            min_ms: DEFAULT_DELAY_MIN_MS,
            max_ms: DEFAULT_DELAY_MAX_MS,
            per_request: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV file, overwritten on every run
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: DEFAULT_CSV_PATH.to_string(),
        }
    }
}
