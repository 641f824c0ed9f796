//! Run configuration.
//!
//! [`BatchConfig`] is the fully resolved input to [`crate::batch::run_batch`].
//! [`ConfigFile`] is the optional TOML file the CLI merges with its flags;
//! every key in it is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{LemmatizerError, Result};
use crate::pipeline::{PipelineSpec, Profile, RuntimeSpec, DEFAULT_MAX_LENGTH};

pub const DEFAULT_INPUT_SUFFIX: &str = ".txt";
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_processed.txt";

/// Everything a batch run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub profile: Profile,
    pub input_suffix: String,
    pub output_suffix: String,
    pub language: String,
    /// Worker count for parallel profiles; `None` = logical CPUs
    pub threads: Option<usize>,
    pub max_length: usize,
}

impl BatchConfig {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        profile: Profile,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            profile,
            input_suffix: DEFAULT_INPUT_SUFFIX.to_string(),
            output_suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            language: "en".to_string(),
            threads: None,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_suffixes(
        mut self,
        input_suffix: impl Into<String>,
        output_suffix: impl Into<String>,
    ) -> Self {
        self.input_suffix = input_suffix.into();
        self.output_suffix = output_suffix.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Reject configurations that cannot produce a sensible run.
    pub fn validate(&self) -> Result<()> {
        if self.input_suffix.is_empty() {
            return Err(LemmatizerError::config("input_suffix must not be empty"));
        }
        if self.output_suffix.is_empty() {
            return Err(LemmatizerError::config("output_suffix must not be empty"));
        }
        // Outputs would be picked up again as inputs on the next run
        if self.input_dir == self.output_dir && self.output_suffix.ends_with(&self.input_suffix) {
            return Err(LemmatizerError::config(
                "output_dir must differ from input_dir when output files match the input suffix",
            ));
        }
        self.pipeline_spec().validate()?;
        self.runtime_spec().validate()
    }

    pub fn pipeline_spec(&self) -> PipelineSpec {
        PipelineSpec::for_profile(self.profile)
            .with_language(self.language.clone())
            .with_max_length(self.max_length)
    }

    pub fn runtime_spec(&self) -> RuntimeSpec {
        RuntimeSpec::for_profile(self.profile).with_max_threads(self.threads)
    }
}

/// Optional on-disk configuration; every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub profile: Option<Profile>,
    pub input_suffix: Option<String>,
    pub output_suffix: Option<String>,
    pub language: Option<String>,
    pub threads: Option<usize>,
    pub max_length: Option<usize>,
}

impl ConfigFile {
    /// Fill the optional settings of `config` from this file.
    ///
    /// Directories and profile are resolved by the caller because flags
    /// take precedence over them.
    pub fn apply_to(&self, mut config: BatchConfig) -> BatchConfig {
        if let Some(suffix) = &self.input_suffix {
            config.input_suffix = suffix.clone();
        }
        if let Some(suffix) = &self.output_suffix {
            config.output_suffix = suffix.clone();
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(max_length) = self.max_length {
            config.max_length = max_length;
        }
        config
    }
}

/// Load a [`ConfigFile`] from TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| LemmatizerError::io(path, e))?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}
