//! Errors raised while reading posts

use std::io;
use thiserror::Error;

/// Front-matter could not be split from the body
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("missing opening `---` front-matter delimiter")]
    MissingDelimiter,
    #[error("front-matter block is not closed by `---`")]
    Unterminated,
    #[error("invalid front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A post could not be produced for a slug
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("post not found: {0}")]
    NotFound(String),
    #[error("failed to read post `{slug}`: {source}")]
    Io {
        slug: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed front-matter in post `{slug}`: {source}")]
    FrontMatter {
        slug: String,
        #[source]
        source: FrontMatterError,
    },
}

impl ContentError {
    /// Whether callers should render their "not found" fallback
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
