//! Stage trait definitions for the pipeline.
//!
//! Tokenization and stopword flagging are fixed; everything after that is a
//! [`Component`] that mutates the [`Document`] in place. Components are
//! shared read-only across worker threads, hence the `Send + Sync` bound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{LemmatizerError, Result};
use crate::types::Document;

// ============================================================================
// Stage: the disable-able components
// ============================================================================

/// A pipeline stage that a profile may disable.
///
/// Declaration order is execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Parser,
    Lemmatizer,
    #[serde(rename = "ner")]
    EntityRecognizer,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 3] = [Stage::Parser, Stage::Lemmatizer, Stage::EntityRecognizer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Parser => "parser",
            Stage::Lemmatizer => "lemmatizer",
            Stage::EntityRecognizer => "ner",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = LemmatizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "parser" => Ok(Stage::Parser),
            "lemmatizer" => Ok(Stage::Lemmatizer),
            "ner" | "entity_recognizer" => Ok(Stage::EntityRecognizer),
            other => Err(LemmatizerError::config(format!(
                "unknown pipeline stage '{}'",
                other
            ))),
        }
    }
}

// ============================================================================
// Component: one analysis step over a document
// ============================================================================

/// An analysis step applied to a tokenized document.
///
/// # Contract
///
/// - **Input**: a mutable [`Document`] whose tokens carry POS tags and
///   stopword flags.
/// - **Output**: none; the document is annotated in place.
/// - **Deterministic**: same input, same annotations.
pub trait Component: Send + Sync + fmt::Debug {
    /// Which stage this component implements
    fn stage(&self) -> Stage;

    /// Annotate the document in place.
    fn process(&self, doc: &mut Document) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_names_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>().unwrap(), stage);
        }
    }

    #[test]
    fn test_unknown_stage() {
        assert!("tagger".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_order() {
        let mut stages = vec![Stage::EntityRecognizer, Stage::Parser, Stage::Lemmatizer];
        stages.sort();
        assert_eq!(stages, Stage::ALL.to_vec());
    }

    #[test]
    fn test_stage_serde_names() {
        let json = serde_json::to_string(&Stage::EntityRecognizer).unwrap();
        assert_eq!(json, "\"ner\"");
        let back: Stage = serde_json::from_str("\"lemmatizer\"").unwrap();
        assert_eq!(back, Stage::Lemmatizer);
    }
}
