//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Folio;

/// Create a new post file with a front-matter scaffold
pub fn create_post(folio: &Folio, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = slug::slugify(slug.unwrap_or(title));
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a slug from title {:?}", title);
    }

    fs::create_dir_all(&folio.content_dir)?;

    let file_path = folio.content_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let now = chrono::Local::now();
    // A JSON string is a valid double-quoted YAML scalar
    let content = format!(
        "---\ntitle: {}\ndescription: ''\ndate: {}\ntags: []\nkeywords: ''\n---\n\n",
        serde_json::to_string(title)?,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
