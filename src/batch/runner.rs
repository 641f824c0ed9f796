//! File discovery and batch execution.
//!
//! Files are analyzed either one after another or as independent tasks on a
//! dedicated Rayon pool. Either way results come back in listing order, and
//! the first failure aborts the batch.

use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

use super::loader::load_file;
use super::splitter::process_text;
use crate::errors::{LemmatizerError, Result};
use crate::pipeline::{ExecutionMode, Pipeline, RuntimeSpec};
use crate::types::FileResult;

/// List immediate entries of `dir` whose file name ends with `suffix`.
///
/// The listing is sorted by path so runs are reproducible.
pub fn list_text_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| LemmatizerError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LemmatizerError::io(dir, e))?;
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Load and analyze one file.
pub fn load_and_process_file(path: &Path, pipeline: &Pipeline) -> Result<FileResult> {
    let content = load_file(path)?;
    let documents = process_text(&content, pipeline)?;
    debug!(
        file = %path.display(),
        paragraphs = documents.len(),
        "analyzed file"
    );
    Ok(FileResult::new(path, documents))
}

/// Runs the per-file work under a [`RuntimeSpec`].
#[derive(Debug)]
pub struct BatchRunner<'a> {
    pipeline: &'a Pipeline,
    runtime: RuntimeSpec,
}

impl<'a> BatchRunner<'a> {
    pub fn new(pipeline: &'a Pipeline, runtime: RuntimeSpec) -> Self {
        Self { pipeline, runtime }
    }

    /// Process every file, returning results in the order given.
    pub fn run(&self, files: &[PathBuf]) -> Result<Vec<FileResult>> {
        let _span = info_span!(
            "batch_run",
            files = files.len(),
            threads = self.runtime.effective_threads()
        )
        .entered();

        match self.runtime.build_thread_pool()? {
            None => files
                .iter()
                .map(|f| load_and_process_file(f, self.pipeline))
                .collect(),
            Some(pool) => {
                debug_assert_eq!(self.runtime.mode, ExecutionMode::Parallel);
                let pipeline = self.pipeline;
                pool.install(|| {
                    files
                        .par_iter()
                        .map(|f| load_and_process_file(f, pipeline))
                        .collect()
                })
            }
        }
    }
}
