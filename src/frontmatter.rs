//! Parse YAML frontmatter embedded in a leading `/** ... */` comment.
//!
//! ```text
//! /**
//!  * title: Basic usage
//!  * description: A button with an icon
//!  */
//! import { Button } from 'antd';
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

/// Parsed frontmatter mapping; all keys are retained for downstream consumers
pub type Frontmatter = Map<String, Value>;

#[allow(clippy::expect_used)]
static LEADING_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\r?\n\s*").expect("leading breaks regex is valid"));

// Head doc comment, then the rest of the file. The comment closes on the first
// `*/` that starts its own line.
#[allow(clippy::expect_used)]
static HEAD_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A(/\*\*.*?\n\s*\*/)?\s*(.+)?\z").expect("head comment regex is valid")
});

#[allow(clippy::expect_used)]
static CONTINUATION_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\A|\n)\s*\*+").expect("continuation regex is valid"));

/// Code with its frontmatter split off
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFrontmatter {
    /// Code after the comment when frontmatter parsed, the raw input otherwise
    pub code: String,
    /// Parsed mapping, `None` when absent or malformed
    pub frontmatter: Option<Frontmatter>,
}

/// Split a leading doc comment off `raw` and parse it as YAML frontmatter
///
/// Failure is never an error: when the comment is missing, empty, not valid
/// YAML, or not a mapping, the input comes back untouched with no frontmatter.
pub fn parse_code_frontmatter(raw: &str) -> ExtractedFrontmatter {
    let trimmed = LEADING_BREAKS.replace(raw, "");

    let (comment, code) = match HEAD_COMMENT.captures(&trimmed) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        ),
        None => ("", ""),
    };

    let frontmatter = parse_yaml_comment(comment);
    match frontmatter {
        Some(frontmatter) => ExtractedFrontmatter {
            code: code.to_string(),
            frontmatter: Some(frontmatter),
        },
        None => ExtractedFrontmatter {
            code: raw.to_string(),
            frontmatter: None,
        },
    }
}

fn parse_yaml_comment(comment: &str) -> Option<Frontmatter> {
    if comment.is_empty() {
        return None;
    }

    let inner = comment.strip_prefix('/').unwrap_or(comment);
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    let yaml = CONTINUATION_STARS.replace_all(inner, "${1}");

    let value: serde_yaml::Value = match serde_yaml::from_str(&yaml) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Ignoring malformed frontmatter comment: {}", e);
            return None;
        }
    };

    if !value.is_mapping() {
        log::debug!("Ignoring frontmatter comment that is not a mapping");
        return None;
    }

    match serde_json::to_value(&value) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => None,
        Err(e) => {
            log::debug!("Ignoring frontmatter with unrepresentable keys: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_title_and_strip_comment() {
        let raw = "/**\n * title: Foo\n * description: Bar baz\n */\n\nimport React from 'react';\n";
        let extracted = parse_code_frontmatter(raw);

        let fm = extracted.frontmatter.expect("frontmatter should parse");
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Foo"));
        assert_eq!(fm.get("description").and_then(Value::as_str), Some("Bar baz"));
        assert_eq!(extracted.code, "import React from 'react';\n");
    }

    #[test]
    fn test_no_comment_keeps_raw() {
        let raw = "import React from 'react';\nexport default () => null;\n";
        let extracted = parse_code_frontmatter(raw);

        assert!(extracted.frontmatter.is_none());
        assert_eq!(extracted.code, raw);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let raw = "\n\n  /**\n * title: Spaced\n */\nexport {};";
        let extracted = parse_code_frontmatter(raw);

        let fm = extracted.frontmatter.expect("frontmatter should parse");
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Spaced"));
        assert_eq!(extracted.code, "export {};");
    }

    #[test]
    fn test_malformed_yaml_keeps_raw() {
        let raw = "/**\n * title: [unclosed\n */\nexport {};";
        let extracted = parse_code_frontmatter(raw);

        assert!(extracted.frontmatter.is_none());
        assert_eq!(extracted.code, raw);
    }

    #[test]
    fn test_scalar_comment_is_not_frontmatter() {
        let raw = "/**\n * Just a description of the file\n */\nexport {};";
        let extracted = parse_code_frontmatter(raw);

        assert!(extracted.frontmatter.is_none());
        assert_eq!(extracted.code, raw);
    }

    #[test]
    fn test_plain_block_comment_is_not_frontmatter() {
        let raw = "/* title: Foo */\nexport {};";
        let extracted = parse_code_frontmatter(raw);

        assert!(extracted.frontmatter.is_none());
        assert_eq!(extracted.code, raw);
    }

    #[test]
    fn test_unknown_keys_are_retained() {
        let raw = "/**\n * title: Foo\n * title.zh-CN: 标题\n * debug: true\n * keywords:\n *   - a\n *   - b\n */\nexport {};";
        let fm = parse_code_frontmatter(raw)
            .frontmatter
            .expect("frontmatter should parse");

        assert_eq!(fm.get("title.zh-CN"), Some(&json!("标题")));
        assert_eq!(fm.get("debug"), Some(&json!(true)));
        assert_eq!(fm.get("keywords"), Some(&json!(["a", "b"])));
    }

    #[test]
    fn test_comment_only_file() {
        let raw = "/**\n * title: Empty\n */";
        let extracted = parse_code_frontmatter(raw);

        assert!(extracted.frontmatter.is_some());
        assert_eq!(extracted.code, "");
    }

    #[test]
    fn test_parse_is_idempotent_on_plain_code() {
        let raw = "const a = 1;\n";
        let once = parse_code_frontmatter(raw);
        let twice = parse_code_frontmatter(&once.code);
        assert_eq!(once, twice);
    }
}
