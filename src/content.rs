//! Sub-section extraction from source files
//!
//! Both helpers are lenient: a range that does not parse, or a pattern that
//! does not compile or match, yields the full content. The regular-expression
//! helper reports why it fell back so callers can surface it.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::{BlockError, Result, extract};

#[allow(clippy::expect_used)]
static LINE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^L(\d+)(?:-L(\d+))?$").expect("range regex is valid"));

#[allow(clippy::expect_used)]
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n").expect("line break regex is valid"));

/// A parsed `L<start>[-L<end>]` range, 1-based and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Parse `L3` or `L3-L10`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when `range` is not in that form.
    pub fn parse(range: &str) -> Result<Self> {
        let caps = LINE_RANGE
            .captures(range)
            .ok_or_else(|| extract::invalid_range(range))?;

        let number = |idx: usize| -> Result<Option<usize>> {
            caps.get(idx)
                .map(|m| m.as_str().parse::<usize>())
                .transpose()
                .map_err(|_| extract::invalid_range(range))
        };

        let start = number(1)?.ok_or_else(|| extract::invalid_range(range))?;
        let end = number(2)?.unwrap_or(start);
        Ok(Self { start, end })
    }
}

/// Lines `range` of `content`, joined with `\n`
///
/// Lines past the end are ignored, and an end before the start selects
/// nothing. A range that does not parse returns `content` unchanged.
pub fn extract_range_lines(content: &str, range: &str) -> String {
    let Ok(LineRange { start, end }) = LineRange::parse(range) else {
        return content.to_string();
    };

    let skip = start.saturating_sub(1);
    let take = end.saturating_sub(skip);

    LINE_BREAK
        .split(content)
        .skip(skip)
        .take(take)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of a regular-expression extraction
#[derive(Debug)]
pub struct Extraction {
    pub content: String,
    /// Why the extraction fell back to the full content, if it did
    pub diagnostic: Option<BlockError>,
}

impl Extraction {
    pub fn fell_back(&self) -> bool {
        self.diagnostic.is_some()
    }
}

/// Compile `pattern`, given as `/body/flags` or as a bare pattern
///
/// Supported flags are `i`, `m`, `s` and `x`; `g`, `u` and `y` are accepted
/// and have no effect on a first-match search.
///
/// # Errors
///
/// Returns `InvalidPattern` for an unknown flag or a pattern that does not
/// compile.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let (body, flags) = split_literal(pattern).unwrap_or((pattern, ""));

    let mut builder = RegexBuilder::new(body);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            'g' | 'u' | 'y' => &mut builder,
            other => {
                return Err(extract::invalid_pattern(
                    pattern,
                    format!("unsupported flag '{}'", other),
                ));
            }
        };
    }

    builder
        .build()
        .map_err(|e| extract::invalid_pattern(pattern, e.to_string()))
}

// `/body/flags` with the last slash as the delimiter
fn split_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (body, flags) = (&rest[..close], &rest[close + 1..]);
    flags
        .chars()
        .all(|c| c.is_ascii_alphabetic())
        .then_some((body, flags))
}

/// First match of `pattern` in `content`
///
/// On a compile failure or no match, returns the full content with the reason
/// in [`Extraction::diagnostic`]. `file` only labels the diagnostic.
pub fn extract_by_regexp(content: &str, pattern: &str, file: &str) -> Extraction {
    let found = compile_pattern(pattern).and_then(|re| {
        re.find(content)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| extract::not_matched(pattern, file))
    });

    match found {
        Ok(content) => Extraction {
            content,
            diagnostic: None,
        },
        Err(diagnostic) => {
            log::debug!("Extraction from {} fell back: {}", file, diagnostic);
            Extraction {
                content: content.to_string(),
                diagnostic: Some(diagnostic),
            }
        }
    }
}
