//! Natural Language Processing components
//!
//! The tokenizer and stopword filter always run; the parser, lemmatizer and
//! entity recognizer are pipeline components that a profile can disable.

pub mod lemmatizer;
pub mod ner;
pub mod parser;
pub mod stopwords;
pub mod tokenizer;
