use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{RatingMatrix, RawRatingMatrix, ReviewTable};

use super::classifier::SentimentClassifier;
use super::vectorizer::TfidfVectorizer;

/// Fixed artifact file names inside the model root directory.
pub const SENTIMENT_CLASSIFIER_FILE: &str = "sentiment_classifier.bin";
pub const TFIDF_VECTORIZER_FILE: &str = "tfidf_vectorizer.bin";
pub const USER_RATINGS_FILE: &str = "user_ratings.bin";
pub const CLEANED_REVIEWS_FILE: &str = "cleaned_reviews.bin";

/// The four read-only artifacts the serving path depends on.
pub struct ArtifactStore {
    pub classifier: SentimentClassifier,
    pub vectorizer: TfidfVectorizer,
    pub ratings: RatingMatrix,
    pub reviews: ReviewTable,
}

impl ArtifactStore {
    /// Loads all four artifacts from `root`. Any missing or malformed file
    /// fails the whole load.
    pub fn load(root: &Path) -> AppResult<Self> {
        let classifier: SentimentClassifier = load_artifact(root, SENTIMENT_CLASSIFIER_FILE)?;
        let vectorizer: TfidfVectorizer = load_artifact(root, TFIDF_VECTORIZER_FILE)?;
        vectorizer.validate()?;
        let raw_ratings: RawRatingMatrix = load_artifact(root, USER_RATINGS_FILE)?;
        let ratings = RatingMatrix::from_raw(raw_ratings)?;
        let reviews: ReviewTable = load_artifact(root, CLEANED_REVIEWS_FILE)?;

        tracing::info!(
            users = ratings.user_count(),
            products = ratings.products().len(),
            reviews = reviews.len(),
            features = vectorizer.dimension(),
            "Artifacts loaded"
        );

        Ok(Self {
            classifier,
            vectorizer,
            ratings,
            reviews,
        })
    }
}

/// Reads and decodes one bincode artifact, attaching the file path to any
/// failure.
fn load_artifact<T: DeserializeOwned>(root: &Path, file_name: &str) -> AppResult<T> {
    let path = root.join(file_name);
    let file = File::open(&path).map_err(|e| {
        AppError::ArtifactLoad(format!("failed to open {}: {}", path.display(), e))
    })?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|e| {
        AppError::ArtifactLoad(format!("failed to decode {}: {}", path.display(), e))
    })
}

/// Encodes one artifact to its bincode file under `root`, truncating any
/// existing file. The export side of `load_artifact`.
pub fn save_artifact<T: Serialize>(root: &Path, file_name: &str, value: &T) -> AppResult<()> {
    let path = root.join(file_name);
    let file = File::create(&path).map_err(|e| {
        AppError::ArtifactLoad(format!("failed to create {}: {}", path.display(), e))
    })?;
    bincode::serialize_into(BufWriter::new(file), value).map_err(|e| {
        AppError::ArtifactLoad(format!("failed to encode {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserKey;
    use tempfile::TempDir;

    #[test]
    fn test_load_fails_on_missing_directory() {
        let result = ArtifactStore::load(Path::new("/no/such/models"));
        assert!(matches!(result, Err(AppError::ArtifactLoad(_))));
    }

    #[test]
    fn test_load_fails_when_one_artifact_is_missing() {
        let dir = TempDir::new().unwrap();
        let classifier = SentimentClassifier::new(
            vec![1.0],
            0.0,
            ["Negative".to_string(), "Positive".to_string()],
        );
        save_artifact(dir.path(), SENTIMENT_CLASSIFIER_FILE, &classifier).unwrap();
        // The remaining three files are absent.
        let result = ArtifactStore::load(dir.path());
        assert!(matches!(result, Err(AppError::ArtifactLoad(_))));
    }

    #[test]
    fn test_save_then_load_round_trips_all_artifacts() {
        let dir = TempDir::new().unwrap();

        let classifier = SentimentClassifier::new(
            vec![1.0],
            0.0,
            ["Negative".to_string(), "Positive".to_string()],
        );
        let vectorizer = TfidfVectorizer::new(
            [("good".to_string(), 0)].into_iter().collect(),
            vec![1.0],
        );
        let ratings = RawRatingMatrix {
            products: vec!["p1".to_string()],
            rows: vec![(UserKey::Int(1), vec![0.5])],
        };
        let reviews = ReviewTable::default();

        save_artifact(dir.path(), SENTIMENT_CLASSIFIER_FILE, &classifier).unwrap();
        save_artifact(dir.path(), TFIDF_VECTORIZER_FILE, &vectorizer).unwrap();
        save_artifact(dir.path(), USER_RATINGS_FILE, &ratings).unwrap();
        save_artifact(dir.path(), CLEANED_REVIEWS_FILE, &reviews).unwrap();

        let store = ArtifactStore::load(dir.path()).unwrap();
        assert_eq!(store.ratings.user_count(), 1);
        assert_eq!(store.ratings.products(), ["p1".to_string()]);
        assert!(store.reviews.is_empty());
        assert_eq!(store.classifier.dimension(), store.vectorizer.dimension());
    }
}
