//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured site URL
pub const SITE_URL_ENV: &str = "SITE_URL";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    /// Author used for posts without an `author` key
    pub author: String,

    // URL
    pub url: String,
    pub blog_dir: String,
    pub static_pages: Vec<String>,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    // Writing
    pub words_per_minute: u32,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Crawlers
    #[serde(default)]
    pub robots: RobotsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: String::new(),
            author: "Site Author".to_string(),

            url: "https://example.com".to_string(),
            blog_dir: "blog".to_string(),
            static_pages: ["/", "/about", "/projects", "/blog", "/contact"]
                .iter()
                .map(|p| p.to_string())
                .collect(),

            content_dir: "content/blog".to_string(),
            public_dir: "public".to_string(),

            words_per_minute: 200,
            highlight: HighlightConfig::default(),

            robots: RobotsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::parse(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: SiteConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) {
        self.apply_site_url(std::env::var(SITE_URL_ENV).ok());
    }

    fn apply_site_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!("Site URL overridden by {}: {}", SITE_URL_ENV, url);
            self.url = url.trim().to_string();
        }
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub enable: bool,
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enable: false,
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

/// robots.txt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            disallow: vec!["/api/".to_string(), "/*.json$".to_string()],
        }
    }
}
