//! Heuristic dependency parsing
//!
//! The parser owns sentence segmentation: it splits the document on UAX #29
//! sentence boundaries and then attaches every token to its sentence root,
//! labelling the arc from the token's POS tag and its position relative to
//! the root.

use unicode_segmentation::UnicodeSegmentation;

use crate::errors::Result;
use crate::pipeline::traits::{Component, Stage};
use crate::types::{DepLabel, Document, PosTag, Span};

/// Sentence segmenter plus flat dependency attachment
#[derive(Debug, Clone, Default)]
pub struct DependencyParser;

impl DependencyParser {
    pub fn new() -> Self {
        Self
    }

    /// Find sentence boundaries in text as byte ranges
    pub fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }

    /// Group tokens into sentence spans using byte offsets
    fn segment(&self, doc: &Document) -> Vec<Span> {
        let bounds = self.sentence_boundaries(&doc.text);
        let mut spans = Vec::with_capacity(bounds.len());
        let mut cursor = 0;

        for (_, end) in bounds {
            let first = cursor;
            while cursor < doc.tokens.len() && doc.tokens[cursor].start < end {
                cursor += 1;
            }
            if cursor > first {
                spans.push(Span::new(first, cursor));
            }
        }

        // Trailing tokens past the last boundary
        if cursor < doc.tokens.len() {
            spans.push(Span::new(cursor, doc.tokens.len()));
        }

        spans
    }

    fn attach(&self, doc: &mut Document, sent_idx: usize, span: Span) {
        let root = (span.start..span.end)
            .find(|&i| doc.tokens[i].pos == PosTag::Verb)
            .unwrap_or(span.start);

        for i in span.start..span.end {
            let token = &mut doc.tokens[i];
            token.sentence = Some(sent_idx);
            if i == root {
                token.head = Some(i);
                token.dep = Some(DepLabel::Root);
                continue;
            }
            token.head = Some(root);
            token.dep = Some(match token.pos {
                PosTag::Punctuation => DepLabel::Punct,
                PosTag::Determiner => DepLabel::Det,
                PosTag::Adjective => DepLabel::Amod,
                PosTag::Adverb => DepLabel::Advmod,
                PosTag::Preposition => DepLabel::Prep,
                PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun if i < root => {
                    DepLabel::Nsubj
                }
                PosTag::Noun | PosTag::ProperNoun | PosTag::Pronoun => DepLabel::Dobj,
                _ => DepLabel::Dep,
            });
        }
    }
}

impl Component for DependencyParser {
    fn stage(&self) -> Stage {
        Stage::Parser
    }

    fn process(&self, doc: &mut Document) -> Result<()> {
        let spans = self.segment(doc);
        for (sent_idx, span) in spans.iter().enumerate() {
            self.attach(doc, sent_idx, *span);
        }
        doc.sentences = spans;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::tokenizer::Tokenizer;

    fn parse(text: &str) -> Document {
        let mut doc = Document::new(text, Tokenizer::new().tokenize(text));
        DependencyParser::new().process(&mut doc).unwrap();
        doc
    }

    #[test]
    fn test_sentence_segmentation() {
        let doc = parse("Hello world. This is a test.");
        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0], Span::new(0, 3));
        assert_eq!(doc.tokens[3].sentence, Some(1));
        assert!(doc.is_sentence_start(3));
    }

    #[test]
    fn test_every_token_has_a_head_in_its_sentence() {
        let doc = parse("The cats are running. Dogs bark loudly!");
        for token in &doc.tokens {
            let head = token.head.unwrap();
            assert_eq!(doc.tokens[head].sentence, token.sentence);
        }
        let roots = doc
            .tokens
            .iter()
            .filter(|t| t.dep == Some(DepLabel::Root))
            .count();
        assert_eq!(roots, doc.sentences.len());
    }

    #[test]
    fn test_labels() {
        let doc = parse("The cats are running.");
        let deps: Vec<DepLabel> = doc.tokens.iter().map(|t| t.dep.unwrap()).collect();
        assert_eq!(
            deps,
            vec![
                DepLabel::Det,
                DepLabel::Nsubj,
                DepLabel::Root,
                DepLabel::Dep,
                DepLabel::Punct
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("   ");
        assert!(doc.sentences.is_empty());
        assert!(doc.tokens.is_empty());
    }
}
