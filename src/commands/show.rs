//! Show a single rendered post

use anyhow::Result;

use crate::content::{ContentError, PostDetail};
use crate::helpers::full_date;
use crate::Folio;

/// Print one post as text or JSON
pub fn run(folio: &Folio, slug: &str, json: bool) -> Result<()> {
    let post = match folio.store().get_by_slug(slug) {
        Ok(post) => post,
        Err(ContentError::NotFound(_)) => anyhow::bail!("Post not found: {}", slug),
        Err(e) => {
            tracing::error!("Error loading post {}: {}", slug, e);
            anyhow::bail!("Error loading post: {}", slug);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        print!("{}", render_text(&post));
    }

    Ok(())
}

/// Header lines followed by the rendered HTML
fn render_text(post: &PostDetail) -> String {
    let meta = &post.meta;
    let mut out = format!("{}\n", meta.title);

    let mut details = Vec::new();
    if let Some(date) = meta.date.as_deref() {
        details.push(full_date(date).unwrap_or_else(|| date.to_string()));
    }
    details.push(format!("{} min read", post.reading_time));
    details.push(meta.author.clone());
    out.push_str(&details.join(" · "));
    out.push('\n');

    if !meta.tags.is_empty() {
        out.push_str(&format!("tags: {}\n", meta.tags.join(", ")));
    }

    out.push('\n');
    out.push_str(&post.content_html);
    out
}
