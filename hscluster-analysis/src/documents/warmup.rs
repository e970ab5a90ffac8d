//! One-time recognizer warm-up.
//!
//! NLP engines load models lazily, so the first real document pays the load
//! cost. The host calls [`WarmRecognizer::warm_up`] once at startup to move
//! that cost out of any timed path.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use hscluster_core::config::NlpConfig;
use hscluster_core::errors::DocumentError;

use super::entity::EntitySpan;
use super::recognizer::EntityRecognizer;

/// Default warm-up text.
pub const DEFAULT_SAMPLE_TEXT: &str = "foo bar";

/// Wraps a recognizer and runs a sample recognition at most once.
#[derive(Debug)]
pub struct WarmRecognizer<R> {
    inner: R,
    sample_text: String,
    /// When false, `warm_up` never touches the recognizer.
    enabled: bool,
    warmed: OnceLock<Result<Duration, DocumentError>>,
}

impl<R: EntityRecognizer> WarmRecognizer<R> {
    pub fn new(inner: R) -> Self {
        Self::with_sample_text(inner, DEFAULT_SAMPLE_TEXT)
    }

    pub fn with_sample_text(inner: R, sample_text: impl Into<String>) -> Self {
        Self {
            inner,
            sample_text: sample_text.into(),
            enabled: true,
            warmed: OnceLock::new(),
        }
    }

    /// Apply the `[nlp]` config section: sample text and the `warm_up` switch.
    pub fn from_config(inner: R, config: &NlpConfig) -> Self {
        Self {
            enabled: config.effective_warm_up(),
            ..Self::with_sample_text(inner, config.effective_warm_up_text())
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run the sample recognition once and return how long it took.
    ///
    /// Later calls, from any thread, return the first outcome without
    /// touching the recognizer again. A failed warm-up is not retried.
    /// When warm-up is disabled this returns `Duration::ZERO` and the
    /// recognizer is never called.
    pub fn warm_up(&self) -> Result<Duration, DocumentError> {
        self.warmed
            .get_or_init(|| {
                if !self.enabled {
                    tracing::debug!(recognizer = self.inner.name(), "recognizer warm-up disabled");
                    return Ok(Duration::ZERO);
                }
                let started = Instant::now();
                let result = self.inner.recognize(&self.sample_text);
                let elapsed = started.elapsed();
                match result {
                    Ok(_) => {
                        tracing::info!(
                            recognizer = self.inner.name(),
                            warm_up_time_ms = elapsed.as_millis() as u64,
                            "recognizer warmed up"
                        );
                        Ok(elapsed)
                    }
                    Err(e) => {
                        tracing::warn!(recognizer = self.inner.name(), error = %e, "recognizer warm-up failed");
                        Err(e)
                    }
                }
            })
            .clone()
    }

    /// Whether a warm-up has completed successfully.
    pub fn is_warm(&self) -> bool {
        matches!(self.warmed.get(), Some(Ok(_)))
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: EntityRecognizer> EntityRecognizer for WarmRecognizer<R> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, DocumentError> {
        self.inner.recognize(text)
    }
}
