//! AI commentary parsing core
//!
//! Two pure stages turn a raw language-model response into stylable
//! tokens. The block segmenter pairs heading lines with their
//! explanations, and the inline tokenizer classifies the spans within
//! each line. Both stages are synchronous total functions over any
//! input string: no I/O and no shared state, and malformed input
//! produces a degenerate (possibly empty) sequence instead of an error.
//!
//! Presentation is deliberately absent from this module; a rendering
//! layer maps the token variants to styles via `crate::render`.

pub mod segment;
pub mod tokenize;
pub mod types;

pub use segment::segment;
pub use tokenize::tokenize;
pub use types::{Block, HeadingStrategy, InlineToken, SentimentKind, TokenizedBlock};

/// Run the full pipeline: segment `raw` into blocks, then tokenize
/// every heading and body line.
pub fn parse(raw: &str, strategy: HeadingStrategy) -> Vec<TokenizedBlock> {
    segment::segment(raw, strategy)
        .into_iter()
        .map(|block| TokenizedBlock {
            heading: block.heading.as_deref().map(tokenize::tokenize),
            body: tokenize::tokenize(&block.body_line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_produces_tokenized_blocks() {
        let raw = "**Verdict**\nWe say buy below ₹950.\nUnrelated footnote.";
        let blocks = parse(raw, HeadingStrategy::DelimiterPair);

        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0].heading,
            Some(vec![InlineToken::PlainText("Verdict".into())])
        );
        assert_eq!(
            blocks[0].body,
            vec![
                InlineToken::PlainText("We say ".into()),
                InlineToken::SentimentKeyword {
                    value: "buy".into(),
                    kind: SentimentKind::Buy,
                },
                InlineToken::PlainText(" below ".into()),
                InlineToken::CurrencyAmount("₹950".into()),
                InlineToken::PlainText(".".into()),
            ]
        );
        assert_eq!(blocks[1].heading, None);
        assert_eq!(
            blocks[1].body,
            vec![InlineToken::PlainText("Unrelated footnote.".into())]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse("", HeadingStrategy::DelimiterPair).is_empty());
    }

    #[test]
    fn test_parse_with_inferred_strategy() {
        let raw = "**Valuation: *\nTrading at a discount to peers.";
        let blocks = parse(raw, HeadingStrategy::infer(raw));
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0].heading,
            Some(vec![InlineToken::PlainText("Valuation".into())])
        );
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "**Summary**\nSteady compounder, hold for now.";
        let first = parse(raw, HeadingStrategy::DelimiterPair);
        let second = parse(raw, HeadingStrategy::DelimiterPair);
        assert_eq!(first, second);
    }
}
