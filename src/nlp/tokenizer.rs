//! Unicode-aware tokenization
//!
//! This module provides UAX #29 word segmentation with English clitic
//! splitting and heuristic part-of-speech tagging. Punctuation and numbers
//! are kept as tokens so that downstream filters can see them.

use crate::types::{PosTag, Token};
use unicode_segmentation::UnicodeSegmentation;

/// Clitic suffixes split off the preceding word, longest first.
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Split English contractions (`don't` -> `do` `n't`)
    split_clitics: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            split_clitics: true,
        }
    }

    /// Enable or disable contraction splitting
    pub fn with_split_clitics(mut self, split: bool) -> Self {
        self.split_clitics = split;
        self
    }

    /// Tokenize text into tokens with heuristic POS tags.
    ///
    /// Whitespace segments are dropped; every other word-boundary segment
    /// becomes one token (or two, when a clitic is split off).
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if segment.chars().all(char::is_whitespace) {
                continue;
            }

            match self.clitic_split(segment) {
                Some(at) => {
                    self.push(&mut tokens, &segment[..at], start);
                    self.push(&mut tokens, &segment[at..], start + at);
                }
                None => self.push(&mut tokens, segment, start),
            }
        }

        tokens
    }

    fn push(&self, tokens: &mut Vec<Token>, word: &str, start: usize) {
        let pos = self.guess_pos(word);
        let index = tokens.len();
        tokens.push(Token::new(word, pos, start, start + word.len(), index));
    }

    /// Byte position where a trailing clitic begins, if any
    fn clitic_split(&self, word: &str) -> Option<usize> {
        if !self.split_clitics {
            return None;
        }

        // Compare on the original characters; lowercasing can change
        // the character count of the word.
        CLITICS.iter().find_map(|clitic| {
            let n = clitic.chars().count();
            let tail: Vec<(usize, char)> = word.char_indices().rev().take(n).collect();
            if tail.len() < n {
                return None;
            }
            let matched = tail
                .iter()
                .zip(clitic.chars().rev())
                .all(|(&(_, c), expected)| fold_apostrophe(c).to_ascii_lowercase() == expected);
            let at = tail[n - 1].0;
            (matched && at > 0).then_some(at)
        })
    }

    /// Basic heuristic POS tagging
    ///
    /// This is intentionally simple; it only needs to be good enough for the
    /// parser and entity heuristics downstream.
    pub fn guess_pos(&self, word: &str) -> PosTag {
        if word.chars().all(|c| c.is_ascii_punctuation() && !is_ascii_symbol(c)) {
            return PosTag::Punctuation;
        }
        if !word.chars().any(char::is_alphanumeric) {
            return PosTag::Symbol;
        }

        let lower = word.to_lowercase().replace('\u{2019}', "'");

        if let Some(pos) = self.function_word_pos(&lower) {
            return pos;
        }

        // Numbers
        if word
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            return PosTag::Numeral;
        }

        // Capitalized word (might be proper noun or sentence start)
        if word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false)
            && word.chars().skip(1).all(|c| c.is_lowercase())
            && word.chars().count() > 1
        {
            return PosTag::ProperNoun;
        }

        // Common adjective suffixes
        if lower.ends_with("ful")
            || lower.ends_with("less")
            || lower.ends_with("ous")
            || lower.ends_with("ive")
            || lower.ends_with("able")
            || lower.ends_with("ible")
            || lower.ends_with("al")
            || lower.ends_with("ic")
        {
            return PosTag::Adjective;
        }

        // Common verb suffixes
        if lower.ends_with("ing") || lower.ends_with("ed") || lower.ends_with("ize") {
            return PosTag::Verb;
        }

        // Common adverb suffix
        if lower.ends_with("ly") {
            return PosTag::Adverb;
        }

        // Common noun suffixes
        if lower.ends_with("tion")
            || lower.ends_with("ness")
            || lower.ends_with("ment")
            || lower.ends_with("ity")
            || lower.ends_with("er")
            || lower.ends_with("or")
        {
            return PosTag::Noun;
        }

        // Default to noun (most content words are nouns)
        PosTag::Noun
    }

    fn function_word_pos(&self, lower: &str) -> Option<PosTag> {
        let pos = match lower {
            // Determiners
            "a" | "an" | "the" | "this" | "that" | "these" | "those" | "my" | "your" | "his"
            | "her" | "its" | "our" | "their" | "some" | "any" | "each" | "every" | "no" => {
                PosTag::Determiner
            }
            // Conjunctions
            "and" | "or" | "but" | "nor" | "so" | "yet" | "if" | "because" | "while"
            | "though" | "although" | "when" | "unless" | "until" | "since" => PosTag::Conjunction,
            // Prepositions
            "of" | "to" | "in" | "for" | "on" | "with" | "at" | "from" | "by" | "about" | "as"
            | "into" | "like" | "through" | "after" | "over" | "between" | "out" | "against"
            | "during" | "without" | "before" | "under" | "around" | "among" => PosTag::Preposition,
            // Pronouns
            "i" | "you" | "he" | "she" | "it" | "we" | "they" | "me" | "him" | "us"
            | "them" | "myself" | "yourself" | "ourselves" | "themselves" => PosTag::Pronoun,
            // Auxiliaries and common irregular verbs
            "is" | "are" | "was" | "were" | "be" | "been" | "being" | "am" | "'m" | "'re"
            | "has" | "have" | "had" | "'ve" | "do" | "does" | "did" | "will" | "'ll"
            | "would" | "'d" | "can" | "could" | "should" | "may" | "might" | "must"
            | "ca" | "wo" | "bark" | "barks" | "run" | "runs" | "ran" | "go" | "goes"
            | "went" | "said" | "says" => PosTag::Verb,
            // Common particles
            "not" | "n't" | "'s" => PosTag::Particle,
            // Interjections
            "oh" | "hey" | "wow" | "yes" | "ouch" => PosTag::Interjection,
            _ => return None,
        };
        Some(pos)
    }
}

fn is_ascii_symbol(c: char) -> bool {
    matches!(c, '$' | '%' | '&' | '+' | '<' | '=' | '>' | '@' | '^' | '|' | '~')
}

/// Curly apostrophes are common in prose
fn fold_apostrophe(c: char) -> char {
    if c == '\u{2019}' {
        '\''
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("The cats are running.");

        assert_eq!(texts(&tokens), vec!["The", "cats", "are", "running", "."]);
        assert_eq!(tokens[4].pos, PosTag::Punctuation);
        assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "Dogs  bark\tloudly!";
        let tokens = Tokenizer::new().tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_clitic_splitting() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("I don't know the cat's name.");
        assert_eq!(
            texts(&tokens),
            vec!["I", "do", "n't", "know", "the", "cat", "'s", "name", "."]
        );
        assert!(!tokens[2].is_alpha);
    }

    #[test]
    fn test_clitic_split_when_case_folding_changes_length() {
        // 'İ' lowercases to two chars
        let tokens = Tokenizer::new().tokenize("İt's here. DON\u{2019}T go.");
        assert_eq!(
            texts(&tokens),
            vec!["İt", "'s", "here", ".", "DO", "N\u{2019}T", "go", "."]
        );
        assert_eq!(tokens[1].start, "İt".len());
    }

    #[test]
    fn test_curly_apostrophe_clitic() {
        let tokens = Tokenizer::new().tokenize("They\u{2019}re here");
        assert_eq!(texts(&tokens), vec!["They", "\u{2019}re", "here"]);
    }

    #[test]
    fn test_clitic_splitting_disabled() {
        let tokens = Tokenizer::new()
            .with_split_clitics(false)
            .tokenize("don't");
        assert_eq!(texts(&tokens), vec!["don't"]);
    }

    #[test]
    fn test_unicode_handling() {
        let tokens = Tokenizer::new().tokenize("Café résumé naïve.");
        assert!(tokens.iter().any(|t| t.text.contains('é')));
        assert!(tokens.iter().filter(|t| t.is_alpha).count() == 3);
    }

    #[test]
    fn test_numbers_are_not_alpha() {
        let tokens = Tokenizer::new().tokenize("I have 3 cats");
        let three = tokens.iter().find(|t| t.text == "3").unwrap();
        assert!(!three.is_alpha);
        assert_eq!(three.pos, PosTag::Numeral);
    }

    #[test]
    fn test_pos_guessing() {
        let tokenizer = Tokenizer::new();

        assert_eq!(tokenizer.guess_pos("beautiful"), PosTag::Adjective);
        assert_eq!(tokenizer.guess_pos("running"), PosTag::Verb);
        assert_eq!(tokenizer.guess_pos("quickly"), PosTag::Adverb);
        assert_eq!(tokenizer.guess_pos("information"), PosTag::Noun);
        assert_eq!(tokenizer.guess_pos("the"), PosTag::Determiner);
        assert_eq!(tokenizer.guess_pos("are"), PosTag::Verb);
        assert_eq!(tokenizer.guess_pos("London"), PosTag::ProperNoun);
        assert_eq!(tokenizer.guess_pos(","), PosTag::Punctuation);
        assert_eq!(tokenizer.guess_pos("$"), PosTag::Symbol);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  \n\t ").is_empty());
    }
}
