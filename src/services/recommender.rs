use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::error::AppResult;
use crate::models::{RatingMatrix, Recommendation, ReviewTable};

use super::sentiment::{is_positive, SentimentModel};
use super::store::ArtifactStore;

/// Default number of ranked entries returned to callers.
pub const DEFAULT_TOP_K: usize = 5;

/// Default number of highest-rated products considered for sentiment
/// scoring.
pub const DEFAULT_CANDIDATE_POOL: usize = 20;

/// Serves sentiment-filtered product recommendations from pre-trained
/// artifacts.
///
/// Candidates come from the rating matrix, their historical reviews are
/// classified one by one, and products are ranked by the share of reviews
/// predicted positive. All inputs are read-only after construction, so an
/// instance is safe to share across concurrent requests.
pub struct SentimentRecommender {
    ratings: RatingMatrix,
    reviews: ReviewTable,
    sentiment: SentimentModel,
}

/// Per-product aggregation bucket while grouping predictions.
#[derive(Default)]
struct ProductStats {
    positive: u32,
    total: u32,
}

impl ProductStats {
    /// Positive share in percent, rounded to two decimals. An empty bucket
    /// maps to 0.0 rather than dividing by zero.
    fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let percent = 100.0 * f64::from(self.positive) / f64::from(self.total);
        (percent * 100.0).round() / 100.0
    }
}

impl SentimentRecommender {
    /// Loads all artifacts from `root` and wires them into an engine.
    pub fn load(root: &Path) -> AppResult<Self> {
        Self::from_store(ArtifactStore::load(root)?)
    }

    /// Builds an engine from already-loaded artifacts, checking that the
    /// classifier and vectorizer agree on feature dimensions.
    pub fn from_store(store: ArtifactStore) -> AppResult<Self> {
        let sentiment = SentimentModel::new(store.vectorizer, store.classifier)?;
        Ok(Self {
            ratings: store.ratings,
            reviews: store.reviews,
            sentiment,
        })
    }

    /// Predicts the sentiment label for a single review text. Empty input
    /// returns `None`.
    pub fn predict_sentiment(&self, text: &str) -> AppResult<Option<String>> {
        self.sentiment.predict(text)
    }

    /// Returns the user's top products ranked by positive review sentiment.
    ///
    /// `Ok(None)` means the user is unknown; `Ok(Some(vec![]))` means the
    /// user is known but no candidates or reviews are on file. The returned
    /// list is sorted descending by positive-sentiment percentage and
    /// truncated to `top_k` entries.
    pub fn recommend(
        &self,
        user_id: &str,
        top_k: usize,
        candidate_pool: usize,
    ) -> AppResult<Option<Vec<Recommendation>>> {
        let Some(candidates) = self.ratings.top_products(user_id, candidate_pool) else {
            return Ok(None);
        };
        if candidates.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let candidate_set: HashSet<&str> = candidates.iter().copied().collect();

        // Join candidates against the review table. Candidates with no
        // reviews on file drop out here.
        let matched: Vec<_> = self
            .reviews
            .records
            .iter()
            .filter(|record| candidate_set.contains(record.product_id.as_str()))
            .collect();
        if matched.is_empty() {
            tracing::debug!(
                user = user_id,
                candidates = candidates.len(),
                "No reviews on file for candidate products"
            );
            return Ok(Some(Vec::new()));
        }

        // Classify every matched review and aggregate by product name.
        // BTreeMap keeps group order deterministic, so equal percentages
        // come out name-ascending after the stable sort below.
        let mut groups: BTreeMap<&str, ProductStats> = BTreeMap::new();
        for record in &matched {
            let label = self.sentiment.label_for(&record.text)?;
            let stats = groups.entry(record.name.as_str()).or_default();
            stats.total += 1;
            if is_positive(label) {
                stats.positive += 1;
            }
        }

        let mut ranked: Vec<Recommendation> = groups
            .into_iter()
            .map(|(name, stats)| Recommendation {
                name: name.to_string(),
                pos_sentiment_percent: stats.percent(),
            })
            .collect();
        ranked.sort_by(|a, b| b.pos_sentiment_percent.total_cmp(&a.pos_sentiment_percent));
        ranked.truncate(top_k);

        tracing::debug!(
            user = user_id,
            reviews = matched.len(),
            entries = ranked.len(),
            "Recommendations ranked"
        );
        Ok(Some(ranked))
    }
}
