//! Heuristic named-entity recognition
//!
//! Maximal runs of capitalized, alphabetic, non-stop tokens become `NAME`
//! entities unless the run is a single sentence-initial word. Numeric tokens
//! become `CARDINAL` entities.

use crate::errors::Result;
use crate::pipeline::traits::{Component, Stage};
use crate::types::{Document, Entity, EntityLabel, PosTag, Span};

#[derive(Debug, Clone, Default)]
pub struct EntityRecognizer;

impl EntityRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn is_name_part(doc: &Document, idx: usize) -> bool {
        let token = &doc.tokens[idx];
        token.is_alpha
            && !token.is_stopword
            && token.text.chars().next().is_some_and(char::is_uppercase)
    }

    fn recognize(&self, doc: &Document) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut i = 0;

        while i < doc.tokens.len() {
            if doc.tokens[i].pos == PosTag::Numeral {
                entities.push(Entity {
                    span: Span::new(i, i + 1),
                    label: EntityLabel::Cardinal,
                });
                i += 1;
                continue;
            }

            if Self::is_name_part(doc, i) {
                let start = i;
                while i < doc.tokens.len()
                    && Self::is_name_part(doc, i)
                    && (i == start || !doc.is_sentence_start(i))
                {
                    i += 1;
                }
                let span = Span::new(start, i);
                if span.len() > 1 || !doc.is_sentence_start(start) {
                    entities.push(Entity {
                        span,
                        label: EntityLabel::Name,
                    });
                }
                continue;
            }

            i += 1;
        }

        entities
    }
}

impl Component for EntityRecognizer {
    fn stage(&self) -> Stage {
        Stage::EntityRecognizer
    }

    fn process(&self, doc: &mut Document) -> Result<()> {
        let entities = self.recognize(doc);
        for entity in &entities {
            for token in &mut doc.tokens[entity.span.start..entity.span.end] {
                token.ent_type = Some(entity.label);
            }
        }
        doc.entities = entities;
        Ok(())
    }
}
