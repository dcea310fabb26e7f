use crate::error::{AppError, AppResult};

use super::classifier::SentimentClassifier;
use super::vectorizer::TfidfVectorizer;

/// Text sentiment scoring: a fitted vectorizer paired with a fitted
/// classifier.
pub struct SentimentModel {
    vectorizer: TfidfVectorizer,
    classifier: SentimentClassifier,
}

/// A label counts as positive iff it starts with "pos", case-insensitively.
pub fn is_positive(label: &str) -> bool {
    label.to_lowercase().starts_with("pos")
}

impl SentimentModel {
    /// Pairs a vectorizer with a classifier, checking that their feature
    /// dimensions agree.
    pub fn new(vectorizer: TfidfVectorizer, classifier: SentimentClassifier) -> AppResult<Self> {
        if classifier.dimension() != vectorizer.dimension() {
            return Err(AppError::ArtifactLoad(format!(
                "classifier was fitted on {} features but the vectorizer produces {}",
                classifier.dimension(),
                vectorizer.dimension()
            )));
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Predicts the sentiment label for one review text.
    ///
    /// Empty or whitespace-only input is not classifiable and returns
    /// `None` rather than an error.
    pub fn predict(&self, text: &str) -> AppResult<Option<String>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.label_for(text)?.to_string()))
    }

    /// Classifies one text without the emptiness guard. Used on review
    /// table rows, which may legitimately be empty after lemmatization.
    pub fn label_for(&self, text: &str) -> AppResult<&str> {
        let features = self.vectorizer.transform(text);
        self.classifier.predict(&features)
    }
}
