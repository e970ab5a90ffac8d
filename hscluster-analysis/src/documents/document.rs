//! Document: raw text plus the entities recognized in it.

use std::fmt;

use hscluster_core::errors::DocumentError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::recognizer::EntityRecognizer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    body: String,
    tokens: Vec<String>,
    /// Distinct entities in first-seen order.
    entities: Vec<Entity>,
    /// Cluster assignment, set by whatever clusters the documents.
    cluster: Option<usize>,
}

impl Document {
    /// Wrap `body`, running `recognizer` over it once.
    ///
    /// Entities are deduplicated on normalized name and label.
    ///
    /// # Errors
    /// `EmptyIdentifier` for a blank id, `InvalidSpan` if the recognizer
    /// returns a range outside `body`, or whatever the recognizer fails with.
    pub fn analyze(
        id: impl Into<String>,
        body: impl Into<String>,
        tokens: Vec<String>,
        recognizer: &dyn EntityRecognizer,
    ) -> Result<Self, DocumentError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DocumentError::EmptyIdentifier);
        }
        let body = body.into();

        let spans = recognizer.recognize(&body)?;
        let mut seen = FxHashSet::default();
        let mut entities = Vec::new();
        for span in &spans {
            let text = span.text(&body).ok_or_else(|| DocumentError::InvalidSpan {
                start: span.start,
                end: span.end,
                len: body.len(),
            })?;
            let entity = Entity::new(text, span.label.as_str());
            if seen.insert(entity.clone()) {
                entities.push(entity);
            }
        }

        tracing::debug!(
            document = %id,
            recognizer = recognizer.name(),
            spans = spans.len(),
            entity_count = entities.len(),
            "document analyzed"
        );

        Ok(Self {
            id,
            body,
            tokens,
            entities,
            cluster: None,
        })
    }

    pub fn with_cluster(mut self, cluster: usize) -> Self {
        self.cluster = Some(cluster);
        self
    }

    pub fn set_cluster(&mut self, cluster: Option<usize>) {
        self.cluster = cluster;
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }

    pub fn has_entity(&self, entity: &Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Distinct entity labels in first-seen order.
    pub fn entity_labels(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.entities
            .iter()
            .map(Entity::label)
            .filter(|label| seen.insert(*label))
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cluster {
            Some(cluster) => write!(f, "{}_{}", cluster, self.id),
            None => f.write_str(&self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::entity::EntitySpan;

    struct Fixed(Vec<EntitySpan>);

    impl EntityRecognizer for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, DocumentError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_dedup_keeps_first_seen_order() {
        let body = "Paris, paris and Google";
        let recognizer = Fixed(vec![
            EntitySpan::new(0, 5, "GPE"),
            EntitySpan::new(7, 12, "GPE"),
            EntitySpan::new(17, 23, "ORG"),
        ]);
        let doc = Document::analyze("d1", body, vec![], &recognizer).unwrap();
        assert_eq!(
            doc.entities(),
            &[Entity::new("paris", "GPE"), Entity::new("google", "ORG")]
        );
        assert_eq!(doc.entity_labels(), vec!["GPE", "ORG"]);
        assert!(doc.has_entity(&Entity::new("PARIS", "GPE")));
    }

    #[test]
    fn test_out_of_bounds_span() {
        let recognizer = Fixed(vec![EntitySpan::new(2, 99, "GPE")]);
        let err = Document::analyze("d1", "short", vec![], &recognizer).unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidSpan {
                start: 2,
                end: 99,
                len: 5
            }
        );
    }

    #[test]
    fn test_blank_id_rejected() {
        let recognizer = Fixed(vec![]);
        let err = Document::analyze("  ", "text", vec![], &recognizer).unwrap_err();
        assert_eq!(err, DocumentError::EmptyIdentifier);
    }

    #[test]
    fn test_display_with_and_without_cluster() {
        let recognizer = Fixed(vec![]);
        let mut doc = Document::analyze("42", "text", vec!["text".to_string()], &recognizer).unwrap();
        assert_eq!(doc.to_string(), "42");
        doc.set_cluster(Some(3));
        assert_eq!(doc.to_string(), "3_42");
        assert_eq!(doc.clone().with_cluster(7).cluster(), Some(7));
        doc.set_cluster(None);
        assert_eq!(doc.to_string(), "42");
        assert_eq!(doc.tokens(), &["text".to_string()]);
    }
}
