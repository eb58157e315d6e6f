//! Generator module - writes the blog index, post documents, sitemap and
//! robots.txt into the public directory

pub mod sitemap;

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::content::ContentStore;
use crate::Folio;

/// Name of the post index inside the blog output directory
pub const INDEX_FILE: &str = "index.json";

/// Subdirectory of the blog output holding one document per post
pub const POSTS_DIR: &str = "posts";

/// Static output generator
pub struct Generator {
    folio: Folio,
    store: ContentStore,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Self {
        Self {
            folio: folio.clone(),
            store: folio.store(),
        }
    }

    /// Generate all output files; returns the number of posts written
    pub fn generate(&self) -> Result<usize> {
        let public_dir = &self.folio.public_dir;
        let blog_dir = public_dir.join(self.folio.config.blog_dir.trim_matches('/'));
        let posts_dir = blog_dir.join(POSTS_DIR);
        fs::create_dir_all(&posts_dir)?;

        let summaries = self.store.list_summaries();
        write_json(&blog_dir.join(INDEX_FILE), &summaries)?;

        let mut written = 0;
        for summary in &summaries {
            match self.store.get_by_slug(&summary.slug) {
                Ok(post) => {
                    write_json(&posts_dir.join(format!("{}.json", summary.slug)), &post)?;
                    written += 1;
                }
                Err(e) => tracing::warn!("Failed to render post {}: {}", summary.slug, e),
            }
        }
        tracing::info!("Generated {} posts", written);

        let config = &self.folio.config;
        fs::write(
            public_dir.join("sitemap.xml"),
            sitemap::sitemap_xml(config, &self.store),
        )?;
        tracing::info!("Generated sitemap.xml");

        fs::write(public_dir.join("robots.txt"), sitemap::render_robots(config))?;
        tracing::info!("Generated robots.txt");

        Ok(written)
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}
