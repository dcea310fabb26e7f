mod classifier;
mod recommender;
mod sentiment;
mod store;
mod vectorizer;

pub use classifier::SentimentClassifier;
pub use recommender::{SentimentRecommender, DEFAULT_CANDIDATE_POOL, DEFAULT_TOP_K};
pub use sentiment::{is_positive, SentimentModel};
pub use store::{
    save_artifact, ArtifactStore, CLEANED_REVIEWS_FILE, SENTIMENT_CLASSIFIER_FILE,
    TFIDF_VECTORIZER_FILE, USER_RATINGS_FILE,
};
pub use vectorizer::{SparseVector, TfidfVectorizer};
