//! Paragraph splitting.

use crate::errors::Result;
use crate::pipeline::Pipeline;
use crate::types::Document;

/// Paragraph delimiter: one blank line
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Non-blank paragraphs of `content`, in order.
///
/// Paragraphs are returned untrimmed; only blank ones are dropped.
pub fn split_paragraphs(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(PARAGRAPH_DELIMITER)
        .filter(|p| !p.trim().is_empty())
}

/// Analyze every non-blank paragraph of `content`.
///
/// Empty input yields an empty vector.
pub fn process_text(content: &str, pipeline: &Pipeline) -> Result<Vec<Document>> {
    split_paragraphs(content)
        .map(|paragraph| pipeline.analyze(paragraph))
        .collect()
}
