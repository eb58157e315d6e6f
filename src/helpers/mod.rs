//! Helper functions for URLs and dates

mod date;
mod url;

pub use date::*;
pub use url::*;
