//! # batch_lemmatizer
//!
//! Batch lemmatization of plain-text corpora.
//!
//! Every `.txt` file in an input directory is split into paragraphs, each
//! paragraph is run through a rule-based English analysis pipeline, and the
//! lemmas of alphabetic non-stopword tokens are written one line per
//! paragraph to `<name>_processed.txt` in an output directory.
//!
//! A [`Profile`] decides which pipeline stages run and whether files are
//! processed sequentially or on a worker pool.

pub mod batch;
pub mod cli;
pub mod config;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use batch::{run_batch, BatchReport, FileSummary};
pub use config::{load_config, BatchConfig, ConfigFile};
pub use errors::{LemmatizerError, Result};
pub use pipeline::{
    setup_pipeline, Component, ExecutionMode, Pipeline, PipelineSpec, Profile, RuntimeSpec, Stage,
};
pub use types::{Document, FileResult, PosTag, Token};
