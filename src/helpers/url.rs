//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters that must be escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about") // -> "https://example.com/about"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Site-relative path of a post
///
/// # Examples
/// ```ignore
/// post_path(&config, "hello world") // -> "/blog/hello%20world"
/// ```
pub fn post_path(config: &SiteConfig, slug: &str) -> String {
    let blog_dir = config.blog_dir.trim_matches('/');
    let slug = encode_segment(slug);

    if blog_dir.is_empty() {
        format!("/{}", slug)
    } else {
        format!("/{}/{}", blog_dir, slug)
    }
}

/// Percent-encode one path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/"), "https://example.com/");
        assert_eq!(full_url_for(&config, "/about"), "https://example.com/about");
        assert_eq!(full_url_for(&config, "blog/x"), "https://example.com/blog/x");
    }

    #[test]
    fn test_post_path() {
        let mut config = test_config();
        assert_eq!(post_path(&config, "my-first-post"), "/blog/my-first-post");
        assert_eq!(post_path(&config, "a b?c"), "/blog/a%20b%3Fc");

        config.blog_dir = "/".to_string();
        assert_eq!(post_path(&config, "x"), "/x");
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hello_world-1.0"), "hello_world-1.0");
        assert_eq!(encode_segment("café"), "caf%C3%A9");
    }
}
