//! Post models

use serde::Serialize;

use super::FrontMatter;

/// Summary fields of a post, as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostMeta {
    /// File name without the `.md` extension
    pub slug: String,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    /// Publish date exactly as written in the front-matter
    pub date: Option<String>,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub author: String,
    pub featured_image: Option<String>,
}

/// Listing entries carry only the summary fields
pub type PostSummary = PostMeta;

/// A fully rendered post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub meta: PostMeta,
    /// Markdown body after the front-matter
    #[serde(skip_serializing)]
    pub raw: String,
    pub content_html: String,
    /// Estimated minutes to read
    pub reading_time: u32,
}

impl PostMeta {
    /// Build summary fields, filling absent values from the slug and the
    /// configured default author
    pub fn from_front_matter(slug: &str, fm: FrontMatter, default_author: &str) -> Self {
        let excerpt = non_empty(fm.excerpt);
        let description = non_empty(fm.description).or_else(|| excerpt.clone());

        Self {
            slug: slug.to_string(),
            title: non_empty(fm.title).unwrap_or_else(|| slug.to_string()),
            description: description.unwrap_or_default(),
            excerpt: excerpt.unwrap_or_default(),
            date: non_empty(fm.date),
            tags: fm.tags,
            keywords: fm.keywords,
            author: non_empty(fm.author).unwrap_or_else(|| default_author.to_string()),
            featured_image: non_empty(fm.featured_image).or_else(|| non_empty(fm.image)),
        }
    }

    /// Key used for newest-first ordering; a missing date is the empty string
    pub fn sort_key(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
