//! Commentary type definitions
//!
//! Pure data types shared by the segmenter and the inline tokenizer.
//! Tokens and blocks classify spans of AI-generated text without
//! carrying any presentation information; styling is looked up by the
//! render adapter (`crate::render`) after parsing.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentiment Keywords
// ============================================================================

/// Actionable recommendation word recognized in commentary text.
///
/// Doubles as the wire type for the prediction endpoint's
/// `recommendation` field, which uses the same three lowercase words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentKind {
    Buy,
    Sell,
    Hold,
}

impl SentimentKind {
    /// Classify a matched keyword from its spelling, case-insensitively.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "buy" => Some(Self::Buy),
            "sell" => Some(Self::Sell),
            "hold" => Some(Self::Hold),
            _ => None,
        }
    }
}

// ============================================================================
// Inline Tokens
// ============================================================================

/// One classified span within a single line of commentary.
///
/// Emphasis tokens carry the inner text with the asterisk delimiters
/// stripped. [`InlineToken::source`] restores the exact substring the
/// token was matched from, so concatenating the sources of a line's
/// tokens reproduces that line unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum InlineToken {
    PlainText(String),
    Bold(String),
    Italic(String),
    /// Literal matched amount including the currency glyph, e.g. `₹1234.50`.
    CurrencyAmount(String),
    /// Whole-word buy/sell/hold in its original spelling.
    SentimentKeyword { value: String, kind: SentimentKind },
}

impl InlineToken {
    /// The displayable text content of the token.
    pub fn value(&self) -> &str {
        match self {
            Self::PlainText(v)
            | Self::Bold(v)
            | Self::Italic(v)
            | Self::CurrencyAmount(v)
            | Self::SentimentKeyword { value: v, .. } => v,
        }
    }

    /// The exact input substring this token was matched from.
    pub fn source(&self) -> String {
        match self {
            Self::Bold(v) => format!("**{}**", v),
            Self::Italic(v) => format!("*{}*", v),
            Self::PlainText(v) | Self::CurrencyAmount(v) => v.clone(),
            Self::SentimentKeyword { value, .. } => value.clone(),
        }
    }
}

// ============================================================================
// Blocks
// ============================================================================

/// Heading-detection rule set for the block segmenter.
///
/// AI responses arrive in two heading conventions that are not
/// behaviorally equivalent, so callers choose one explicitly.
/// `DelimiterPair` is the default; [`HeadingStrategy::infer`] picks a
/// strategy from the response text for callers that prefer that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeadingStrategy {
    /// `**Heading**` alone on its line, explanation on the next line.
    #[default]
    DelimiterPair,
    /// `**Label: *` alone on its line, explanation on the next line.
    ColonEmphasis,
}

/// One logical unit of segmented commentary: a heading paired with its
/// explanatory line, or a standalone paragraph line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub heading: Option<String>,
    pub body_line: String,
}

/// A [`Block`] with its heading and body run through the inline
/// tokenizer. This is the unit handed to a rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizedBlock {
    pub heading: Option<Vec<InlineToken>>,
    pub body: Vec<InlineToken>,
}
