//! Profile → pipeline lookup.

use tracing::debug;

use super::profile::Profile;
use super::spec::PipelineSpec;
use super::Pipeline;
use crate::errors::Result;

/// Build the pipeline for a profile.
///
/// Basic and Moderate run without the lemmatizer; Balanced, High and Extreme
/// run every stage.
pub fn setup_pipeline(profile: Profile) -> Result<Pipeline> {
    let pipeline = Pipeline::from_spec(PipelineSpec::for_profile(profile))?;
    debug!(
        profile = profile.name(),
        components = ?pipeline.pipe_names(),
        "pipeline ready"
    );
    Ok(pipeline)
}

/// Build the pipeline for a raw selector such as `"3"`.
pub fn setup_pipeline_from_selector(selector: &str) -> Result<Pipeline> {
    setup_pipeline(selector.parse()?)
}
