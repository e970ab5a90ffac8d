//! The seam to the external entity recognition service.

use hscluster_core::errors::DocumentError;

/// Anything that can find named entities in raw text.
///
/// Implementations wrap an NLP engine (or a dictionary, see
/// [`GazetteerRecognizer`](super::GazetteerRecognizer)) and must be safe to
/// share across threads.
pub trait EntityRecognizer: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    /// Return every entity span found in `text`. Spans index into `text`.
    fn recognize(&self, text: &str) -> Result<Vec<super::EntitySpan>, DocumentError>;
}

impl<R: EntityRecognizer + ?Sized> EntityRecognizer for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn recognize(&self, text: &str) -> Result<Vec<super::EntitySpan>, DocumentError> {
        (**self).recognize(text)
    }
}
