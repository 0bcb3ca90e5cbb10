use crate::config::SiteConfig;
use crate::site::{render_url, ListingSource};
use crate::ScrapeError;
use regex::Regex;
use url::Url;

/// A listing source described entirely by configuration
#[derive(Debug, Clone)]
pub struct ConfiguredSite {
    name: String,
    url_template: String,
    query: String,
    max_id: u32,
    title_pattern: Regex,
    price_pattern: Regex,
}

impl ConfiguredSite {
    /// Compiles the site's patterns and checks its URL template
    ///
    /// # Returns
    ///
    /// * `Ok(ConfiguredSite)` - Ready-to-use site adapter
    /// * `Err(ScrapeError)` - A pattern failed to compile or the template does not render to a URL
    pub fn from_config(config: &SiteConfig) -> Result<Self, ScrapeError> {
        let title_pattern = Regex::new(&config.title_pattern)?;
        let price_pattern = Regex::new(&config.price_pattern)?;

        let sample = render_url(&config.url_template, &config.query, 1);
        Url::parse(&sample).map_err(|e| ScrapeError::InvalidUrl {
            url: sample.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            name: config.name.clone(),
            url_template: config.url_template.clone(),
            query: config.query.clone(),
            max_id: config.max_id,
            title_pattern,
            price_pattern,
        })
    }
}

impl Default for ConfiguredSite {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default()).expect("default site config is valid")
    }
}

impl ListingSource for ConfiguredSite {
    fn name(&self) -> &str {
        &self.name
    }

    fn build_url(&self, id: u32) -> String {
        render_url(&self.url_template, &self.query, id)
    }

    fn max_id(&self) -> u32 {
        self.max_id
    }

    fn title_pattern(&self) -> &Regex {
        &self.title_pattern
    }

    fn price_pattern(&self) -> &Regex {
        &self.price_pattern
    }
}
