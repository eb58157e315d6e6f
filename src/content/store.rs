//! Content store - reads posts from the content directory on every call

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::reading_time::reading_time;
use super::tables::convert_tables;
use super::{ContentError, FrontMatter, MarkdownRenderer, PostDetail, PostMeta, PostSummary};
use crate::config::SiteConfig;

/// Extension of post files
const POST_EXTENSION: &str = "md";

/// Directory of markdown posts, one file per post
///
/// Nothing is cached: listings and lookups re-read the files each time.
pub struct ContentStore {
    dir: PathBuf,
    default_author: String,
    words_per_minute: u32,
    renderer: MarkdownRenderer,
}

impl ContentStore {
    /// Create a store over `dir` using the writing settings of `config`
    pub fn new<P: Into<PathBuf>>(dir: P, config: &SiteConfig) -> Self {
        Self {
            dir: dir.into(),
            default_author: config.author.clone(),
            words_per_minute: config.words_per_minute,
            renderer: MarkdownRenderer::from_config(&config.highlight),
        }
    }

    /// The content directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Slugs of all posts, sorted by name
    ///
    /// Only slugs that [`get_by_slug`](Self::get_by_slug) accepts are listed;
    /// hidden files such as `.draft.md` are left out. An unreadable content
    /// directory yields an empty list.
    pub fn list_slugs(&self) -> Vec<String> {
        if !self.dir.is_dir() {
            tracing::warn!("Content directory {:?} is not readable", self.dir);
            return Vec::new();
        }

        let mut slugs = Vec::new();

        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Failed to read entry in {:?}: {}", self.dir, e);
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if is_safe_slug(stem) => slugs.push(stem.to_string()),
                _ => tracing::debug!("Ignoring {:?}: not a servable slug", path),
            }
        }

        slugs.sort();
        tracing::debug!("Found {} posts in {:?}", slugs.len(), self.dir);
        slugs
    }

    /// Summaries of all posts, newest first
    ///
    /// Dates are compared as plain strings, so a post without a date (the
    /// empty string) sorts after every dated post. Posts that cannot be read
    /// or whose front-matter is malformed are skipped.
    pub fn list_summaries(&self) -> Vec<PostSummary> {
        let mut summaries: Vec<PostSummary> = self
            .list_slugs()
            .into_iter()
            .filter_map(|slug| match self.load(&slug) {
                Ok((meta, _)) => Some(meta),
                Err(e) => {
                    tracing::warn!("Skipping post {}: {}", slug, e);
                    None
                }
            })
            .collect();

        // Stable: equal dates keep slug order
        summaries.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
        summaries
    }

    /// Load and render a single post
    pub fn get_by_slug(&self, slug: &str) -> Result<PostDetail, ContentError> {
        let (meta, body) = self.load(slug)?;

        let content_html = self.renderer.render(&convert_tables(&body));
        let reading_time = reading_time(&body, self.words_per_minute);

        Ok(PostDetail {
            meta,
            raw: body,
            content_html,
            reading_time,
        })
    }

    /// Read a post file and split its front-matter from the body
    fn load(&self, slug: &str) -> Result<(PostMeta, String), ContentError> {
        let text = self.read_source(slug)?;
        let (fm, body) =
            FrontMatter::parse(&text).map_err(|source| ContentError::FrontMatter {
                slug: slug.to_string(),
                source,
            })?;

        let meta = PostMeta::from_front_matter(slug, fm, &self.default_author);
        Ok((meta, body.to_string()))
    }

    fn read_source(&self, slug: &str) -> Result<String, ContentError> {
        if !is_safe_slug(slug) {
            return Err(ContentError::NotFound(slug.to_string()));
        }

        let path = self.dir.join(format!("{}.{}", slug, POST_EXTENSION));
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ContentError::NotFound(slug.to_string()),
            _ => ContentError::Io {
                slug: slug.to_string(),
                source: e,
            },
        })
    }
}

/// Check if a file is a post file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == POST_EXTENSION)
        .unwrap_or(false)
}

/// Slugs come from URLs; keep them inside the content directory
fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(|c: char| c == '/' || c == '\\' || c == '\0')
}
