//! Core types for batch_lemmatizer
//!
//! This module defines the analyzed-text data model shared by the NLP
//! components, the pipeline, and the batch writer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Part-of-speech tags
// ============================================================================

/// Part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Interjection,
    Numeral,
    Particle,
    Punctuation,
    Symbol,
    ProperNoun,
    Other,
}

// ============================================================================
// Dependency and entity labels
// ============================================================================

/// Dependency relation assigned by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepLabel {
    Root,
    Nsubj,
    Dobj,
    Det,
    Amod,
    Advmod,
    Prep,
    Punct,
    Dep,
}

/// Entity type assigned by the entity recognizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    /// Capitalized multi-word or mid-sentence name
    Name,
    /// Numeric literal
    Cardinal,
}

// ============================================================================
// Token
// ============================================================================

/// A token from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form (original text)
    pub text: String,
    /// The lemma; equals `text` until a lemmatizer rewrites it
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Byte offset (start) in the analyzed text
    pub start: usize,
    /// Byte offset (end) in the analyzed text
    pub end: usize,
    /// Position of this token in its document
    pub index: usize,
    /// Whether this token is a stopword
    pub is_stopword: bool,
    /// Non-empty and made only of alphabetic characters
    pub is_alpha: bool,
    /// Made only of punctuation characters
    pub is_punct: bool,
    /// Sentence index (set by the parser)
    pub sentence: Option<usize>,
    /// Index of the syntactic head (set by the parser)
    pub head: Option<usize>,
    /// Dependency relation to the head (set by the parser)
    pub dep: Option<DepLabel>,
    /// Entity type (set by the entity recognizer)
    pub ent_type: Option<EntityLabel>,
}

impl Token {
    /// Create a new token; the lemma starts out as the surface form.
    pub fn new(
        text: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        index: usize,
    ) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        let is_punct = !text.is_empty()
            && text
                .chars()
                .all(|c| c.is_ascii_punctuation() || is_unicode_punct(c));
        Self {
            lemma: text.clone(),
            text,
            pos,
            start,
            end,
            index,
            is_stopword: false,
            is_alpha,
            is_punct,
            sentence: None,
            head: None,
            dep: None,
            ent_type: None,
        }
    }

    /// Whether this token survives the output filter
    pub fn is_content(&self) -> bool {
        self.is_alpha && !self.is_stopword
    }
}

fn is_unicode_punct(c: char) -> bool {
    matches!(c,
        '\u{2010}'..='\u{2027}' |   // Dashes, quotes, bullets
        '\u{2030}'..='\u{205E}' |   // General punctuation
        '\u{3001}'..='\u{3003}' |   // CJK punctuation
        '\u{00A1}' | '\u{00BF}' | '\u{00AB}' | '\u{00BB}'
    )
}

// ============================================================================
// Spans
// ============================================================================

/// A contiguous run of tokens `[start, end)` within a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// A recognized entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub span: Span,
    pub label: EntityLabel,
}

// ============================================================================
// Document
// ============================================================================

/// The analyzed form of one paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The analyzed text
    pub text: String,
    /// Tokens in text order
    pub tokens: Vec<Token>,
    /// Sentence spans (empty unless the parser ran)
    pub sentences: Vec<Span>,
    /// Entity spans (empty unless the entity recognizer ran)
    pub entities: Vec<Entity>,
}

impl Document {
    /// Create a document from tokenizer output
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
            sentences: Vec::new(),
            entities: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Lemmas of alphabetic, non-stop tokens in order
    pub fn content_lemmas(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .filter(|t| t.is_content())
            .map(|t| t.lemma.as_str())
    }

    /// Whether the token at `idx` opens a sentence.
    ///
    /// Without parser output only the first token counts.
    pub fn is_sentence_start(&self, idx: usize) -> bool {
        if self.sentences.is_empty() {
            return idx == 0;
        }
        self.sentences.iter().any(|s| s.start == idx)
    }
}

// ============================================================================
// FileResult
// ============================================================================

/// All documents produced from one source file, in paragraph order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResult {
    pub source: PathBuf,
    pub documents: Vec<Document>,
}

impl FileResult {
    pub fn new(source: impl Into<PathBuf>, documents: Vec<Document>) -> Self {
        Self {
            source: source.into(),
            documents,
        }
    }

    /// Number of tokens across all documents
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Document::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_flags() {
        let word = Token::new("Cats", PosTag::Noun, 0, 4, 0);
        assert!(word.is_alpha);
        assert!(!word.is_punct);
        assert_eq!(word.lemma, "Cats");

        let punct = Token::new(".", PosTag::Punctuation, 4, 5, 1);
        assert!(!punct.is_alpha);
        assert!(punct.is_punct);

        let number = Token::new("42", PosTag::Numeral, 0, 2, 0);
        assert!(!number.is_alpha);
        assert!(!number.is_punct);

        let clitic = Token::new("n't", PosTag::Particle, 0, 3, 0);
        assert!(!clitic.is_alpha);
    }

    #[test]
    fn test_unicode_alpha() {
        let token = Token::new("café", PosTag::Noun, 0, 5, 0);
        assert!(token.is_alpha);
    }

    #[test]
    fn test_content_lemmas_filters() {
        let mut the = Token::new("The", PosTag::Determiner, 0, 3, 0);
        the.is_stopword = true;
        let mut cats = Token::new("cats", PosTag::Noun, 4, 8, 1);
        cats.lemma = "cat".into();
        let dot = Token::new(".", PosTag::Punctuation, 8, 9, 2);

        let doc = Document::new("The cats.", vec![the, cats, dot]);
        let lemmas: Vec<&str> = doc.content_lemmas().collect();
        assert_eq!(lemmas, vec!["cat"]);
    }

    #[test]
    fn test_sentence_start_without_parser() {
        let doc = Document::new(
            "a b",
            vec![
                Token::new("a", PosTag::Other, 0, 1, 0),
                Token::new("b", PosTag::Other, 2, 3, 1),
            ],
        );
        assert!(doc.is_sentence_start(0));
        assert!(!doc.is_sentence_start(1));
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_file_result_token_count() {
        let doc = Document::new("x", vec![Token::new("x", PosTag::Noun, 0, 1, 0)]);
        let result = FileResult::new("a.txt", vec![doc.clone(), doc]);
        assert_eq!(result.token_count(), 2);
    }
}
