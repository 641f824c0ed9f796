//! Pipeline construction and text analysis.
//!
//! ## Submodules
//!
//! - [`traits`]: the [`Component`] trait and the disable-able [`Stage`]s
//! - [`profile`]: the five performance profiles
//! - [`spec`]: what to build ([`PipelineSpec`]) and how to schedule it ([`RuntimeSpec`])
//! - [`factory`]: profile → configured [`Pipeline`]

pub mod factory;
pub mod profile;
pub mod spec;
pub mod traits;

pub use factory::{setup_pipeline, setup_pipeline_from_selector};
pub use profile::{ExecutionMode, Profile};
pub use spec::{PipelineSpec, RuntimeSpec, DEFAULT_MAX_LENGTH};
pub use traits::{Component, Stage};

use crate::errors::{LemmatizerError, Result};
use crate::nlp::lemmatizer::Lemmatizer;
use crate::nlp::ner::EntityRecognizer;
use crate::nlp::parser::DependencyParser;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Document;

// ============================================================================
// Pipeline: tokenizer, stopwords, and the enabled components
// ============================================================================

/// A configured text-analysis pipeline.
///
/// Immutable after construction and safe to share across threads.
#[derive(Debug)]
pub struct Pipeline {
    spec: PipelineSpec,
    tokenizer: Tokenizer,
    stopwords: StopwordFilter,
    components: Vec<Box<dyn Component>>,
}

impl Pipeline {
    /// Build a pipeline from a spec.
    pub fn from_spec(spec: PipelineSpec) -> Result<Self> {
        spec.validate()?;
        let stopwords = StopwordFilter::new(&spec.language)?;

        let mut components: Vec<Box<dyn Component>> = Vec::new();
        for stage in Stage::ALL {
            if !spec.is_enabled(stage) {
                continue;
            }
            let component: Box<dyn Component> = match stage {
                Stage::Parser => Box::new(DependencyParser::new()),
                Stage::Lemmatizer => Box::new(Lemmatizer::new()),
                Stage::EntityRecognizer => Box::new(EntityRecognizer::new()),
            };
            components.push(component);
        }

        Ok(Self {
            spec,
            tokenizer: Tokenizer::new(),
            stopwords,
            components,
        })
    }

    /// Replace the stopword filter (e.g. with a custom list)
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Analyze one piece of text into a [`Document`].
    pub fn analyze(&self, text: &str) -> Result<Document> {
        let length = text.chars().count();
        if length > self.spec.max_length {
            return Err(LemmatizerError::pipeline(
                "tokenizer",
                format!(
                    "text of length {} exceeds maximum of {}",
                    length, self.spec.max_length
                ),
            ));
        }

        let mut tokens = self.tokenizer.tokenize(text);
        self.stopwords.flag(&mut tokens);
        let mut doc = Document::new(text, tokens);

        for component in &self.components {
            let _span =
                tracing::trace_span!("pipeline_stage", stage = %component.stage()).entered();
            component.process(&mut doc)?;
        }

        Ok(doc)
    }

    /// Names of the active components, in execution order
    pub fn pipe_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.stage().as_str()).collect()
    }

    /// Stages left out of this pipeline
    pub fn disabled(&self) -> &[Stage] {
        &self.spec.disabled
    }

    pub fn has_stage(&self, stage: Stage) -> bool {
        self.components.iter().any(|c| c.stage() == stage)
    }

    pub fn spec(&self) -> &PipelineSpec {
        &self.spec
    }
}
