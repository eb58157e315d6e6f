//! Front-matter parsing

use serde::{Deserialize, Deserializer};

use super::error::FrontMatterError;

/// Line that opens and closes the metadata block
const DELIMITER: &str = "---";

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Keywords are written as one comma-separated string; a list is accepted too
fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct CommaList;

    impl<'de> Visitor<'de> for CommaList {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(String::from)
                .collect())
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                let item = item.trim();
                if !item.is_empty() {
                    vec.push(item.to_string());
                }
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(CommaList)
}

/// Accept any YAML scalar and keep its textual form (`date: 2024` is a number)
///
/// Used for every single-valued text field. Lists and mappings read as absent.
fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// Front-matter data from a post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(deserialize_with = "optional_scalar")]
    pub title: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub description: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub date: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "comma_list")]
    pub keywords: Vec<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub author: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub featured_image: Option<String>,
    #[serde(deserialize_with = "optional_scalar")]
    pub image: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let (first, rest) = match content.find('\n') {
            Some(pos) => (&content[..pos], &content[pos + 1..]),
            None => (content, ""),
        };
        if first.trim_end() != DELIMITER {
            return Err(FrontMatterError::MissingDelimiter);
        }

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == DELIMITER {
                let yaml = &rest[..offset];
                let body = &rest[offset + line.len()..];
                return Ok((Self::from_yaml(yaml)?, body));
            }
            offset += line.len();
        }

        Err(FrontMatterError::Unterminated)
    }

    fn from_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        // Blank or comment-only blocks are a null document, not a mapping
        let is_blank = yaml.lines().all(|line| {
            let line = line.trim();
            line.is_empty() || line.starts_with('#')
        });
        if is_blank {
            return Ok(Self::default());
        }

        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
tags:
  - rust
  - web
keywords: performance, react ,  caching
author: Jane
featured_image: /img/hello.png
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello World"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.tags, vec!["rust", "web"]);
        assert_eq!(fm.keywords, vec!["performance", "react", "caching"]);
        assert_eq!(fm.author.as_deref(), Some("Jane"));
        assert_eq!(fm.featured_image.as_deref(), Some("/img/hello.png"));
        assert_eq!(body, "\nThis is the content.\n");
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = "---\ntitle: One Tag\ntags: Notes\n---\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_keywords_as_list() {
        let content = "---\nkeywords:\n  - a\n  - ' b '\n  - ''\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.keywords, vec!["a", "b"]);
    }

    #[test]
    fn test_scalar_fields_are_stringified() {
        let content = "---\ntitle: 1984\ndate: 2024\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("1984"));
        assert_eq!(fm.date.as_deref(), Some("2024"));
    }

    #[test]
    fn test_all_text_fields_accept_scalars() {
        let content = "---\ndescription: 42\nexcerpt: 1.5\nauthor: true\nimage: 7\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.description.as_deref(), Some("42"));
        assert_eq!(fm.excerpt.as_deref(), Some("1.5"));
        assert_eq!(fm.author.as_deref(), Some("true"));
        assert_eq!(fm.image.as_deref(), Some("7"));
    }

    #[test]
    fn test_nested_values_read_as_absent() {
        let content = "---\ntitle: [a, b]\nauthor:\n  name: Jane\n---\n";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert!(fm.author.is_none());
    }

    #[test]
    fn test_absent_fields() {
        let content = "---\ntitle: Minimal\ntags:\nunknown_key: ignored\n---\ntext";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Minimal"));
        assert!(fm.date.is_none());
        assert!(fm.tags.is_empty());
        assert!(fm.keywords.is_empty());
        assert!(fm.featured_image.is_none());
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nonly body").unwrap();
        assert!(fm.title.is_none());
        assert_eq!(body, "only body");

        let (fm, _) = FrontMatter::parse("---\n# just a comment\n---\n").unwrap();
        assert!(fm.title.is_none());
    }

    #[test]
    fn test_crlf_and_bom() {
        let content = "\u{feff}---\r\ntitle: Windows\r\n---\r\nBody\r\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Windows"));
        assert_eq!(body, "Body\r\n");
    }

    #[test]
    fn test_body_keeps_thematic_breaks() {
        let content = "---\ntitle: Breaks\n---\nabove\n\n---\n\nbelow\n";
        let (_, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(body, "above\n\n---\n\nbelow\n");
    }

    #[test]
    fn test_missing_delimiter() {
        let err = FrontMatter::parse("# Just markdown\n\ntext").unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingDelimiter));

        let err = FrontMatter::parse("").unwrap_err();
        assert!(matches!(err, FrontMatterError::MissingDelimiter));
    }

    #[test]
    fn test_unterminated_block() {
        let err = FrontMatter::parse("---\ntitle: Open\n\nbody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Unterminated));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = FrontMatter::parse("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));

        let err = FrontMatter::parse("---\njust prose here\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }
}
