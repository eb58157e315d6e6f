//! sitemap.xml and robots.txt

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::helpers::{date_w3c, full_url_for, post_path};

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    /// `YYYY-MM-DD`
    pub lastmod: Option<String>,
}

/// Entries for every static page followed by every post
///
/// A post that fails to load keeps its entry, just without `<lastmod>`.
pub fn sitemap_entries(config: &SiteConfig, store: &ContentStore) -> Vec<SitemapEntry> {
    let mut entries: Vec<SitemapEntry> = config
        .static_pages
        .iter()
        .map(|page| SitemapEntry {
            loc: full_url_for(config, page),
            lastmod: None,
        })
        .collect();

    for slug in store.list_slugs() {
        let lastmod = match store.get_by_slug(&slug) {
            Ok(post) => post.meta.date.as_deref().and_then(date_w3c),
            Err(e) => {
                tracing::warn!("Sitemap entry for {} has no lastmod: {}", slug, e);
                None
            }
        };

        entries.push(SitemapEntry {
            loc: full_url_for(config, &post_path(config, &slug)),
            lastmod,
        });
    }

    entries
}

/// Render entries as a sitemaps.org `urlset`
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        let loc = escape_xml(&entry.loc);
        match &entry.lastmod {
            Some(lastmod) => xml.push_str(&format!(
                "  <url><loc>{}</loc><lastmod>{}</lastmod></url>\n",
                loc, lastmod
            )),
            None => xml.push_str(&format!("  <url><loc>{}</loc></url>\n", loc)),
        }
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Build the full sitemap for the site
pub fn sitemap_xml(config: &SiteConfig, store: &ContentStore) -> String {
    render_sitemap(&sitemap_entries(config, store))
}

/// Render robots.txt
pub fn render_robots(config: &SiteConfig) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in &config.robots.disallow {
        body.push_str(&format!("Disallow: {}\n", path));
    }
    body.push_str(&format!(
        "Sitemap: {}\n",
        full_url_for(config, "/sitemap.xml")
    ));
    body
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
