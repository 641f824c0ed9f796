//! Batch processing: discover, analyze, write.
//!
//! ## Submodules
//!
//! - [`loader`]: read one file as UTF-8
//! - [`splitter`]: paragraphs → documents
//! - [`runner`]: file discovery and sequential / pooled execution
//! - [`writer`]: documents → output lines

pub mod loader;
pub mod runner;
pub mod splitter;
pub mod writer;

pub use loader::load_file;
pub use runner::{list_text_files, load_and_process_file, BatchRunner};
pub use splitter::{process_text, split_paragraphs};
pub use writer::{output_path_for, render_line, write_file_result};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::BatchConfig;
use crate::errors::{LemmatizerError, Result};
use crate::pipeline::{ExecutionMode, Pipeline, Profile};

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub paragraphs: usize,
    pub tokens_analyzed: usize,
    pub tokens_written: usize,
}

/// Outcome of a successful batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub profile: Profile,
    pub mode: ExecutionMode,
    pub threads: usize,
    pub components: Vec<String>,
    pub files: Vec<FileSummary>,
    pub elapsed_ms: u64,
}

impl BatchReport {
    pub fn total_paragraphs(&self) -> usize {
        self.files.iter().map(|f| f.paragraphs).sum()
    }

    pub fn total_tokens_written(&self) -> usize {
        self.files.iter().map(|f| f.tokens_written).sum()
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| LemmatizerError::io(path, e))
    }
}

/// Run a whole batch: build the pipeline, analyze every input file, then
/// write the outputs in listing order.
///
/// Any error aborts the run. Analysis of all files completes before the
/// first output is written, so a failing input leaves no partial outputs.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport> {
    config.validate()?;
    let started = Instant::now();

    let pipeline = Pipeline::from_spec(config.pipeline_spec())?;
    let runtime = config.runtime_spec();

    fs::create_dir_all(&config.output_dir)
        .map_err(|e| LemmatizerError::io(&config.output_dir, e))?;

    let files = list_text_files(&config.input_dir, &config.input_suffix)?;
    info!(
        profile = config.profile.name(),
        files = files.len(),
        input = %config.input_dir.display(),
        "starting batch"
    );

    let results = BatchRunner::new(&pipeline, runtime).run(&files)?;

    let mut summaries = Vec::with_capacity(results.len());
    for result in &results {
        let output = output_path_for(
            &result.source,
            &config.output_dir,
            &config.input_suffix,
            &config.output_suffix,
        );
        let tokens_written = write_file_result(result, &output)?;
        debug!(output = %output.display(), tokens_written, "wrote file");

        summaries.push(FileSummary {
            input: result.source.clone(),
            output,
            paragraphs: result.documents.len(),
            tokens_analyzed: result.token_count(),
            tokens_written,
        });
    }

    let report = BatchReport {
        profile: config.profile,
        mode: runtime.mode,
        threads: runtime.effective_threads(),
        components: pipeline.pipe_names().into_iter().map(String::from).collect(),
        files: summaries,
        elapsed_ms: started.elapsed().as_millis() as u64,
    };
    info!(
        files = report.files.len(),
        paragraphs = report.total_paragraphs(),
        elapsed_ms = report.elapsed_ms,
        "batch complete"
    );
    Ok(report)
}
