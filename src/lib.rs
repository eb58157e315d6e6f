//! folio: the markdown blog pipeline behind a personal portfolio site
//!
//! Posts live as markdown files with a YAML front-matter block. This crate
//! lists and renders them, estimates reading time, and produces the
//! sitemap and robots.txt, either as static files or over HTTP.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "_config.yml";

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown posts directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let config_path = base_dir.as_ref().join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };
        config.apply_env();

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Content store over the configured content directory
    pub fn store(&self) -> content::ContentStore {
        content::ContentStore::new(&self.content_dir, &self.config)
    }

    /// Generate the static output
    pub fn generate(&self) -> Result<usize> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, slug: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_paths_follow_config() {
        let config = config::SiteConfig {
            content_dir: "posts".to_string(),
            public_dir: "dist".to_string(),
            ..Default::default()
        };
        let folio = Folio::with_config("/srv/site", config);
        assert_eq!(folio.content_dir, PathBuf::from("/srv/site/posts"));
        assert_eq!(folio.public_dir, PathBuf::from("/srv/site/dist"));
    }

    #[test]
    fn test_new_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "title: Tested\ncontent_dir: writing\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        assert_eq!(folio.config.title, "Tested");
        assert_eq!(folio.content_dir, tmp.path().join("writing"));
    }

    #[test]
    fn test_new_rejects_malformed_config() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "static_pages: 12\n").unwrap();
        assert!(Folio::new(tmp.path()).is_err());
    }
}
