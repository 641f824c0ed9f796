//! Stopword flagging
//!
//! Stopword lists are the NLTK lists shipped by the `stop-words` crate
//! (built with its `nltk` feature). English additionally
//! treats the clitics produced by the tokenizer (`n't`, `'s`, ...) as
//! stopwords.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::{LemmatizerError, Result};
use crate::types::Token;

const ENGLISH_CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// A case-insensitive stopword set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase, straight apostrophes)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language code or name.
    ///
    /// Unknown languages are a configuration error.
    pub fn new(language: &str) -> Result<Self> {
        let lang = Self::language(language)?;
        let is_english = matches!(lang, LANGUAGE::English);
        let mut stopwords: FxHashSet<String> = get(lang)
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| normalize(s))
            .collect();
        if is_english {
            stopwords.extend(ENGLISH_CLITICS.iter().map(|s| s.to_string()));
        }
        Ok(Self { stopwords })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| normalize(w)).collect(),
        }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(normalize(word));
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&normalize(word));
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&normalize(word))
    }

    /// Set `is_stopword` on every token
    pub fn flag(&self, tokens: &mut [Token]) {
        for token in tokens {
            token.is_stopword = self.is_stopword(&token.text);
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn language(language: &str) -> Result<LANGUAGE> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            other => {
                return Err(LemmatizerError::config(format!(
                    "no stopword list for language '{}'",
                    other
                )))
            }
        };
        Ok(lang)
    }
}

fn normalize(word: &str) -> String {
    word.to_lowercase().replace('\u{2019}', "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en").unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("are"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("cat"));
        assert!(!filter.is_stopword("dog"));
    }

    #[test]
    fn test_english_keeps_content_words() {
        let filter = StopwordFilter::new("en").unwrap();

        for word in ["hello", "world", "new", "test", "first", "results", "run"] {
            assert!(!filter.is_stopword(word), "{word} should not be a stopword");
        }
        assert!(!filter.is_stopword(""));
        assert!(filter.len() < 250);
    }

    #[test]
    fn test_english_clitics() {
        let filter = StopwordFilter::new("english").unwrap();
        assert!(filter.is_stopword("n't"));
        assert!(filter.is_stopword("\u{2019}s"));
    }

    #[test]
    fn test_unknown_language_is_config_error() {
        let err = StopwordFilter::new("klingon").unwrap_err();
        assert!(matches!(err, LemmatizerError::Config { .. }));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("Custom"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_flag_tokens() {
        let filter = StopwordFilter::from_list(&["the"]);
        let mut tokens = vec![
            Token::new("The", PosTag::Determiner, 0, 3, 0),
            Token::new("cat", PosTag::Noun, 4, 7, 1),
        ];
        filter.flag(&mut tokens);
        assert!(tokens[0].is_stopword);
        assert!(!tokens[1].is_stopword);
    }
}
