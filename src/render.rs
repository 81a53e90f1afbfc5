//! Rendering adapter: token classification to presentation style
//!
//! A pure lookup table from token variants and block shapes to semantic
//! style descriptors. The descriptors name intent (tone, weight) rather
//! than concrete colors or fonts, so any UI toolkit can map them onto
//! its own theme. Nothing here feeds back into tokenization.

use serde::Serialize;

use crate::commentary::types::{InlineToken, SentimentKind};

/// Semantic color role of a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Default,
    Muted,
    /// Favorable signals: currency targets, buy recommendations.
    Positive,
    /// Sell recommendations.
    Negative,
    /// Hold recommendations.
    Caution,
}

/// Font weight of a rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Weight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Style descriptor for one rendered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub tone: Tone,
    pub weight: Weight,
    pub italic: bool,
    pub uppercase: bool,
}

impl TextStyle {
    const fn plain(tone: Tone, weight: Weight) -> Self {
        Self {
            tone,
            weight,
            italic: false,
            uppercase: false,
        }
    }
}

/// Look up the style for an inline token.
pub fn token_style(token: &InlineToken) -> TextStyle {
    match token {
        InlineToken::PlainText(_) => TextStyle::plain(Tone::Default, Weight::Regular),
        InlineToken::Bold(_) => TextStyle::plain(Tone::Default, Weight::Semibold),
        InlineToken::Italic(_) => TextStyle {
            italic: true,
            ..TextStyle::plain(Tone::Muted, Weight::Regular)
        },
        InlineToken::CurrencyAmount(_) => TextStyle::plain(Tone::Positive, Weight::Medium),
        InlineToken::SentimentKeyword { kind, .. } => TextStyle {
            uppercase: true,
            ..TextStyle::plain(sentiment_tone(*kind), Weight::Bold)
        },
    }
}

/// Tone of a recommendation word. Also used for the prediction
/// payload's recommendation badge, which carries the same three values.
pub fn sentiment_tone(kind: SentimentKind) -> Tone {
    match kind {
        SentimentKind::Buy => Tone::Positive,
        SentimentKind::Sell => Tone::Negative,
        SentimentKind::Hold => Tone::Caution,
    }
}

/// Style for a block heading line.
pub fn heading_style() -> TextStyle {
    TextStyle::plain(Tone::Default, Weight::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_renders_unstyled() {
        let style = token_style(&InlineToken::PlainText("text".into()));
        assert_eq!(style.tone, Tone::Default);
        assert_eq!(style.weight, Weight::Regular);
        assert!(!style.italic);
        assert!(!style.uppercase);
    }

    #[test]
    fn test_emphasis_styles() {
        assert_eq!(
            token_style(&InlineToken::Bold("b".into())).weight,
            Weight::Semibold
        );
        let italic = token_style(&InlineToken::Italic("i".into()));
        assert!(italic.italic);
        assert_eq!(italic.tone, Tone::Muted);
    }

    #[test]
    fn test_currency_is_positive_medium() {
        let style = token_style(&InlineToken::CurrencyAmount("₹99".into()));
        assert_eq!(style.tone, Tone::Positive);
        assert_eq!(style.weight, Weight::Medium);
    }

    #[test]
    fn test_sentiment_tones_follow_recommendation() {
        assert_eq!(sentiment_tone(SentimentKind::Buy), Tone::Positive);
        assert_eq!(sentiment_tone(SentimentKind::Sell), Tone::Negative);
        assert_eq!(sentiment_tone(SentimentKind::Hold), Tone::Caution);

        let style = token_style(&InlineToken::SentimentKeyword {
            value: "sell".into(),
            kind: SentimentKind::Sell,
        });
        assert_eq!(style.tone, Tone::Negative);
        assert_eq!(style.weight, Weight::Bold);
        assert!(style.uppercase);
    }

    #[test]
    fn test_heading_is_bold_default_tone() {
        let style = heading_style();
        assert_eq!(style.tone, Tone::Default);
        assert_eq!(style.weight, Weight::Bold);
    }
}
