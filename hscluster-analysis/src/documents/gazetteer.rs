//! Dictionary-backed entity recognizer.
//!
//! Matches a fixed list of phrases, ASCII case-insensitively, keeping the
//! leftmost-longest hit and only whole words. Deterministic and
//! dependency-free at runtime, which makes it the stand-in for a real NLP
//! engine in tests and small deployments.

use aho_corasick::{AhoCorasick, MatchKind};
use hscluster_core::errors::DocumentError;

use super::entity::EntitySpan;
use super::recognizer::EntityRecognizer;

const NAME: &str = "gazetteer";

#[derive(Debug, Clone)]
pub struct GazetteerRecognizer {
    automaton: AhoCorasick,
    /// Label per automaton pattern, same order.
    labels: Vec<String>,
}

impl GazetteerRecognizer {
    /// Build from `(phrase, label)` pairs. Blank phrases are skipped.
    pub fn new<I, P, L>(entries: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = (P, L)>,
        P: AsRef<str>,
        L: Into<String>,
    {
        let mut phrases = Vec::new();
        let mut labels = Vec::new();
        for (phrase, label) in entries {
            let phrase = phrase.as_ref().trim();
            if phrase.is_empty() {
                continue;
            }
            phrases.push(phrase.to_string());
            labels.push(label.into());
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&phrases)
            .map_err(|e| DocumentError::RecognizerFailed {
                recognizer: NAME.to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(phrases = phrases.len(), "gazetteer built");
        Ok(Self { automaton, labels })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn name(&self) -> &str {
        NAME
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, DocumentError> {
        Ok(self
            .automaton
            .find_iter(text)
            .filter(|m| is_whole_word(text, m.start(), m.end()))
            .map(|m| EntitySpan::new(m.start(), m.end(), self.labels[m.pattern().as_usize()].clone()))
            .collect())
    }
}

fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer() -> GazetteerRecognizer {
        GazetteerRecognizer::new([
            ("New York", "GPE"),
            ("New York Times", "ORG"),
            ("Obama", "PERSON"),
            ("  ", "EMPTY"),
        ])
        .unwrap()
    }

    #[test]
    fn test_blank_phrases_skipped() {
        assert_eq!(recognizer().len(), 3);
    }

    #[test]
    fn test_longest_match_wins() {
        let text = "The New York Times reported";
        let spans = recognizer().recognize(text).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].label, "ORG");
        assert_eq!(spans[0].text(text), Some("New York Times"));
    }

    #[test]
    fn test_case_insensitive() {
        let text = "obama visited NEW YORK";
        let spans = recognizer().recognize(text).unwrap();
        let labels: Vec<&str> = spans.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["PERSON", "GPE"]);
        assert_eq!(spans[1].text(text), Some("NEW YORK"));
    }

    #[test]
    fn test_partial_words_ignored() {
        let spans = recognizer().recognize("Obamacare in Newark").unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_empty_gazetteer() {
        let empty = GazetteerRecognizer::new(Vec::<(&str, &str)>::new()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.recognize("anything at all").unwrap().is_empty());
    }
}
