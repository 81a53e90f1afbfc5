//! Block segmentation of raw commentary text
//!
//! Splits a full AI response into heading/body pairs and standalone
//! paragraph lines. The scan is an explicit cursor over the non-blank
//! lines: a recognized heading consumes itself plus the following line,
//! anything else becomes a paragraph block on its own.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Block, HeadingStrategy};

// Full-line heading forms. Partial occurrences inside a line are left
// for the inline tokenizer to treat as ordinary markup.
static RE_HEADING_DELIMITER_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*$").unwrap());
static RE_HEADING_COLON_EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.+?): \*$").unwrap());

impl HeadingStrategy {
    /// Extract the heading text if `line` is a heading under this
    /// strategy, with delimiters stripped.
    fn heading_text(self, line: &str) -> Option<String> {
        let re = match self {
            Self::DelimiterPair => &RE_HEADING_DELIMITER_PAIR,
            Self::ColonEmphasis => &RE_HEADING_COLON_EMPHASIS,
        };
        re.captures(line).map(|caps| caps[1].to_string())
    }

    /// Whether `next` may serve as the explanatory line for a heading.
    fn accepts_body(self, next: &str) -> bool {
        match self {
            // A following bold line is the next heading candidate, not
            // an explanation.
            Self::DelimiterPair => !next.starts_with("**"),
            Self::ColonEmphasis => true,
        }
    }

    /// Pick a strategy from the response text itself: colon-emphasis
    /// when its heading form occurs on some line, delimiter-pair
    /// otherwise.
    pub fn infer(raw: &str) -> Self {
        let has_colon_heading = raw
            .lines()
            .map(str::trim)
            .any(|line| RE_HEADING_COLON_EMPHASIS.is_match(line));
        if has_colon_heading {
            Self::ColonEmphasis
        } else {
            Self::DelimiterPair
        }
    }
}

/// Segment raw commentary into ordered blocks.
///
/// Lines are trimmed and blank lines dropped before scanning, so no
/// block is ever empty. Total over all inputs: an empty string yields
/// an empty sequence.
pub fn segment(raw: &str, strategy: HeadingStrategy) -> Vec<Block> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let next = lines.get(i + 1).copied();

        match (strategy.heading_text(line), next) {
            (Some(heading), Some(body)) if strategy.accepts_body(body) => {
                blocks.push(Block {
                    heading: Some(heading),
                    body_line: body.to_string(),
                });
                i += 2;
            }
            _ => {
                blocks.push(Block {
                    heading: None,
                    body_line: line.to_string(),
                });
                i += 1;
            }
        }
    }

    blocks
}
