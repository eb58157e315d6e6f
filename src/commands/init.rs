//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# Site
title: Portfolio
description: ''
author: Site Author

# URL (the SITE_URL environment variable takes precedence)
url: https://example.com
blog_dir: blog
static_pages:
  - /
  - /about
  - /projects
  - /blog
  - /contact

# Directory
content_dir: content/blog
public_dir: public

# Writing
words_per_minute: 200
highlight:
  enable: false
  theme: base16-ocean.dark
  line_number: false

# Crawlers
robots:
  disallow:
    - /api/
    - /*.json$
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let config = SiteConfig::load(&config_path)?;
    let content_dir = target_dir.join(&config.content_dir);
    fs::create_dir_all(&content_dir)?;

    let sample_path = content_dir.join("hello-world.md");
    if !sample_path.exists() {
        let now = chrono::Local::now();
        let sample_post = format!(
            r#"---
title: Hello World
description: The first post on this blog.
date: {}
tags:
  - meta
keywords: blog, hello
---

Welcome! This post lives in `{}`. Every markdown file in that directory
becomes a post, and its file name becomes the URL slug.

## Writing posts

Run `folio new "My New Post"` to create a post with a front-matter block.

| Command | What it does |
| --- | --- |
| folio list | Show all posts, newest first |
| folio generate | Write the index, sitemap and robots.txt |
| folio server | Serve the blog API |
"#,
            now.format("%Y-%m-%d"),
            config.content_dir
        );
        fs::write(&sample_path, sample_post)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_site() {
        let tmp = TempDir::new().unwrap();
        init_site(tmp.path()).unwrap();

        let folio = Folio::with_config(
            tmp.path(),
            SiteConfig::load(tmp.path().join(CONFIG_FILE)).unwrap(),
        );
        let store = folio.store();
        assert_eq!(store.list_slugs(), vec!["hello-world"]);

        let post = store.get_by_slug("hello-world").unwrap();
        assert_eq!(post.meta.title, "Hello World");
        assert_eq!(post.meta.keywords, vec!["blog", "hello"]);
        assert!(post.content_html.contains("<th>Command</th>"));
    }

    #[test]
    fn test_init_keeps_existing_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "title: Mine\ncontent_dir: posts\n").unwrap();

        init_site(tmp.path()).unwrap();

        let config = fs::read_to_string(tmp.path().join(CONFIG_FILE)).unwrap();
        assert!(config.starts_with("title: Mine"));
        assert!(tmp.path().join("posts/hello-world.md").exists());
    }
}
