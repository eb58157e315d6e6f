//! Content module - posts, front-matter and the markdown pipeline

mod error;
mod frontmatter;
mod markdown;
mod post;
pub mod reading_time;
mod store;
pub mod tables;

pub use error::{ContentError, FrontMatterError};
pub use frontmatter::FrontMatter;
pub use markdown::MarkdownRenderer;
pub use post::{PostDetail, PostMeta, PostSummary};
pub use store::ContentStore;
