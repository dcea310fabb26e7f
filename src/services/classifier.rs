use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// A fitted binary linear classifier over tf-idf features.
///
/// `classes` holds the two label strings; a positive decision value selects
/// `classes[1]`, matching the convention of the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentClassifier {
    weights: Vec<f32>,
    intercept: f32,
    classes: [String; 2],
}

impl SentimentClassifier {
    pub fn new(weights: Vec<f32>, intercept: f32, classes: [String; 2]) -> Self {
        Self {
            weights,
            intercept,
            classes,
        }
    }

    /// Number of input features the model was fitted on.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// The two labels this model can emit.
    pub fn classes(&self) -> &[String; 2] {
        &self.classes
    }

    /// Classifies one feature vector.
    ///
    /// A feature index outside the fitted weight range means the vectorizer
    /// and classifier artifacts disagree and is reported as an internal
    /// error rather than skipped.
    pub fn predict(&self, features: &[(usize, f32)]) -> AppResult<&str> {
        let mut decision = self.intercept;
        for &(index, weight) in features {
            let coefficient = self.weights.get(index).ok_or_else(|| {
                AppError::Internal(format!(
                    "feature index {index} out of range for classifier with {} weights",
                    self.weights.len()
                ))
            })?;
            decision += coefficient * weight;
        }
        Ok(if decision > 0.0 {
            &self.classes[1]
        } else {
            &self.classes[0]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SentimentClassifier {
        SentimentClassifier::new(
            vec![1.0, -1.0],
            0.0,
            ["Negative".to_string(), "Positive".to_string()],
        )
    }

    #[test]
    fn test_predict_follows_decision_sign() {
        let classifier = classifier();
        assert_eq!(classifier.predict(&[(0, 1.0)]).unwrap(), "Positive");
        assert_eq!(classifier.predict(&[(1, 1.0)]).unwrap(), "Negative");
    }

    #[test]
    fn test_predict_empty_vector_falls_to_first_class() {
        // Zero decision is not positive.
        assert_eq!(classifier().predict(&[]).unwrap(), "Negative");
    }

    #[test]
    fn test_predict_rejects_out_of_range_features() {
        assert!(classifier().predict(&[(9, 1.0)]).is_err());
    }
}
