//! Pipeline and runtime specifications.
//!
//! [`PipelineSpec`] says what to build (language, disabled stages, input
//! limits); [`RuntimeSpec`] says how to schedule file-level work. Both are
//! derived from a [`Profile`] and may be adjusted before use.

use serde::{Deserialize, Serialize};

use super::profile::{ExecutionMode, Profile};
use super::traits::Stage;
use crate::errors::{LemmatizerError, Result};

/// Default cap on characters per `analyze` call
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// What the pipeline factory should build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSpec {
    /// Stopword language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Stages to leave out
    #[serde(default)]
    pub disabled: Vec<Stage>,

    /// Maximum characters accepted by a single `analyze` call.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self {
            language: default_language(),
            disabled: Vec::new(),
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl PipelineSpec {
    /// Spec for a profile with default language and limits
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            disabled: profile.disabled_stages(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn is_enabled(&self, stage: Stage) -> bool {
        !self.disabled.contains(&stage)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(LemmatizerError::config("max_length must be greater than 0"));
        }
        if self.language.trim().is_empty() {
            return Err(LemmatizerError::config("language must not be empty"));
        }
        Ok(())
    }
}

/// File-level scheduling and threading controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    pub mode: ExecutionMode,

    /// Worker count for parallel mode.
    /// `None` uses the number of logical CPUs.
    #[serde(default)]
    pub max_threads: Option<usize>,
}

impl RuntimeSpec {
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            mode: profile.execution_mode(),
            max_threads: None,
        }
    }

    pub fn with_max_threads(mut self, max_threads: Option<usize>) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Resolve the effective worker count.
    ///
    /// - `Sequential` → `1`
    /// - `max_threads == Some(n)` → `n`
    /// - otherwise → number of logical CPUs
    pub fn effective_threads(&self) -> usize {
        match self.mode {
            ExecutionMode::Sequential => 1,
            ExecutionMode::Parallel => self.max_threads.unwrap_or_else(num_cpus::get).max(1),
        }
    }

    /// Build the dedicated Rayon pool for parallel mode.
    ///
    /// Returns `None` in sequential mode.
    pub fn build_thread_pool(&self) -> Result<Option<rayon::ThreadPool>> {
        if self.mode == ExecutionMode::Sequential {
            return Ok(None);
        }
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.effective_threads())
            .thread_name(|i| format!("lemmatizer-worker-{}", i))
            .build()
            .map(Some)
            .map_err(|e| LemmatizerError::config(format!("failed to build worker pool: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_threads == Some(0) {
            return Err(LemmatizerError::config("threads must be greater than 0"));
        }
        Ok(())
    }
}
