use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Sparse feature vector: (feature index, weight) pairs sorted by index.
pub type SparseVector = Vec<(usize, f32)>;

/// A fitted TF-IDF vectorizer.
///
/// The vocabulary and idf weights come from the offline training pipeline;
/// the transform itself is stateless. Tokenization matches the training
/// side: lowercase, split on non-alphanumeric characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Self {
        Self { vocabulary, idf }
    }

    /// Number of features produced by the transform.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Checks internal consistency after deserialization.
    pub fn validate(&self) -> AppResult<()> {
        for (term, &index) in &self.vocabulary {
            if index >= self.idf.len() {
                return Err(AppError::ArtifactLoad(format!(
                    "vectorizer term '{term}' maps to feature {index} but only {} idf weights are present",
                    self.idf.len()
                )));
            }
        }
        Ok(())
    }

    /// Transforms text into an L2-normalized tf-idf vector.
    ///
    /// Unknown terms are ignored; text with no known terms yields an empty
    /// vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in text.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();
        features.sort_by_key(|&(index, _)| index);

        let norm = features.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary = [
            ("good".to_string(), 0),
            ("bad".to_string(), 1),
            ("product".to_string(), 2),
        ]
        .into_iter()
        .collect();
        TfidfVectorizer::new(vocabulary, vec![1.0, 1.0, 2.0])
    }

    #[test]
    fn test_transform_counts_and_normalizes() {
        let features = vectorizer().transform("good good product");
        // tf-idf before normalization: good = 2.0, product = 2.0
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].0, 0);
        assert_eq!(features[1].0, 2);
        let norm: f32 = features.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
        assert!((features[0].1 - features[1].1).abs() < 1e-6);
    }

    #[test]
    fn test_transform_is_case_and_punctuation_insensitive() {
        let features = vectorizer().transform("Good, BAD!");
        assert_eq!(features.iter().map(|&(i, _)| i).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_transform_unknown_terms_yield_empty_vector() {
        assert!(vectorizer().transform("unheard of words").is_empty());
        assert!(vectorizer().transform("").is_empty());
    }

    #[test]
    fn test_validate_rejects_out_of_range_indices() {
        let vocabulary = [("stray".to_string(), 5)].into_iter().collect();
        let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0]);
        assert!(vectorizer.validate().is_err());
    }
}
