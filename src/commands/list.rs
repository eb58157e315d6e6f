//! List site content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::PostSummary;
use crate::Folio;

/// List site content by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = folio.store();

    match content_type {
        "post" | "posts" => {
            let posts = store.list_summaries();
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!("  {}", format_post_line(post));
            }
        }
        "slug" | "slugs" => {
            for slug in store.list_slugs() {
                println!("{}", slug);
            }
        }
        "tag" | "tags" => {
            let tags = count_tags(&store.list_summaries());
            println!("Tags ({}):", tags.len());
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, slugs, tags",
                content_type
            );
        }
    }

    Ok(())
}

fn format_post_line(post: &PostSummary) -> String {
    let date = post.date.as_deref().unwrap_or("----------");
    format!("{} - {} [{}]", date, post.title, post.slug)
}

/// Tags with their post counts, most used first, then by name
fn count_tags(posts: &[PostSummary]) -> Vec<(String, usize)> {
    let mut tags: HashMap<&str, usize> = HashMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<(String, usize)> = tags
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags
}
