//! Inline markup tokenizer
//!
//! Scans one line of commentary left to right with a single combined
//! pattern and emits classified spans. Text between matches becomes
//! plain-text tokens, so the matched sources always concatenate back to
//! the input line. Unterminated emphasis delimiters never match and
//! fall through into the surrounding plain text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::{InlineToken, SentimentKind};

// Alternation order is match priority. Bold sits before italic so that
// `**x**` is never read as two adjacent italic spans.
static RE_INLINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>.+?)\*|(?P<currency>₹\d+(?:\.\d+)?)|\b(?P<keyword>(?i:buy|sell|hold))\b",
    )
    .unwrap()
});

/// Tokenize a single line into an ordered sequence of inline tokens.
///
/// Total over all inputs: malformed markup degrades to plain text and
/// an empty line yields an empty sequence.
pub fn tokenize(line: &str) -> Vec<InlineToken> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in RE_INLINE.captures_iter(line) {
        let matched = caps.get(0).unwrap(); // group 0 exists on every match
        if matched.start() > last {
            tokens.push(InlineToken::PlainText(
                line[last..matched.start()].to_string(),
            ));
        }
        tokens.push(classify(&caps));
        last = matched.end();
    }

    if last < line.len() {
        tokens.push(InlineToken::PlainText(line[last..].to_string()));
    }

    tokens
}

/// Map a match to its token variant by the named group that participated.
fn classify(caps: &Captures<'_>) -> InlineToken {
    if let Some(inner) = caps.name("bold") {
        InlineToken::Bold(inner.as_str().to_string())
    } else if let Some(inner) = caps.name("italic") {
        InlineToken::Italic(inner.as_str().to_string())
    } else if let Some(amount) = caps.name("currency") {
        InlineToken::CurrencyAmount(amount.as_str().to_string())
    } else if let Some(word) = caps.name("keyword") {
        match SentimentKind::from_word(word.as_str()) {
            Some(kind) => InlineToken::SentimentKeyword {
                value: word.as_str().to_string(),
                kind,
            },
            None => InlineToken::PlainText(word.as_str().to_string()),
        }
    } else {
        // Unreachable while every alternation branch is named.
        InlineToken::PlainText(caps.get(0).map_or("", |m| m.as_str()).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(tokens: &[InlineToken]) -> String {
        tokens.iter().map(|t| t.source()).collect()
    }

    #[test]
    fn test_currency_amount() {
        let tokens = tokenize("Target ₹1234.50 by Q4");
        assert_eq!(
            tokens,
            vec![
                InlineToken::PlainText("Target ".into()),
                InlineToken::CurrencyAmount("₹1234.50".into()),
                InlineToken::PlainText(" by Q4".into()),
            ]
        );
    }

    #[test]
    fn test_currency_without_decimals() {
        let tokens = tokenize("₹120");
        assert_eq!(tokens, vec![InlineToken::CurrencyAmount("₹120".into())]);
    }

    #[test]
    fn test_currency_trailing_dot_stays_plain() {
        // A bare trailing dot is not part of the amount.
        let tokens = tokenize("₹12.");
        assert_eq!(
            tokens,
            vec![
                InlineToken::CurrencyAmount("₹12".into()),
                InlineToken::PlainText(".".into()),
            ]
        );
    }

    #[test]
    fn test_sentiment_keyword_word_boundary() {
        let tokens = tokenize("Analysts say sell now, not oversell.");
        assert_eq!(
            tokens,
            vec![
                InlineToken::PlainText("Analysts say ".into()),
                InlineToken::SentimentKeyword {
                    value: "sell".into(),
                    kind: SentimentKind::Sell,
                },
                InlineToken::PlainText(" now, not oversell.".into()),
            ]
        );
    }

    #[test]
    fn test_sentiment_keyword_keeps_original_spelling() {
        let tokens = tokenize("Strong BUY signal");
        assert_eq!(
            tokens[1],
            InlineToken::SentimentKeyword {
                value: "BUY".into(),
                kind: SentimentKind::Buy,
            }
        );
    }

    #[test]
    fn test_bold_takes_precedence_over_italic() {
        let tokens = tokenize("**important** and *also*");
        assert_eq!(
            tokens,
            vec![
                InlineToken::Bold("important".into()),
                InlineToken::PlainText(" and ".into()),
                InlineToken::Italic("also".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_bold_degrades_to_plain_text() {
        let tokens = tokenize("**unclosed bold");
        assert_eq!(
            tokens,
            vec![InlineToken::PlainText("**unclosed bold".into())]
        );
    }

    #[test]
    fn test_unterminated_italic_degrades_to_plain_text() {
        let tokens = tokenize("an *unclosed span");
        assert_eq!(
            tokens,
            vec![InlineToken::PlainText("an *unclosed span".into())]
        );
    }

    #[test]
    fn test_keyword_inside_emphasis_is_not_split() {
        // The emphasis span consumes its content whole; scanning resumes
        // after the closing delimiter.
        let tokens = tokenize("*buy the dip*");
        assert_eq!(tokens, vec![InlineToken::Italic("buy the dip".into())]);
    }

    #[test]
    fn test_empty_line_yields_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_lossless_reassembly() {
        let line = "**Verdict:** buy below ₹950.25, else hold *for now*";
        assert_eq!(reassemble(&tokenize(line)), line);
    }

    #[test]
    fn test_lossless_reassembly_with_malformed_markup() {
        let line = "mixed **bold** then *dangling and ₹10";
        assert_eq!(reassemble(&tokenize(line)), line);
    }

    #[test]
    fn test_emphasis_content_is_terminal() {
        // Re-tokenizing a stripped emphasis value yields plain text, so
        // tokens never re-markup recursively.
        let tokens = tokenize("**important**");
        assert_eq!(tokens, vec![InlineToken::Bold("important".into())]);
        assert_eq!(
            tokenize(tokens[0].value()),
            vec![InlineToken::PlainText("important".into())]
        );
    }
}
