use serde::Serialize;

/// A single ranked recommendation entry returned to the client
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    /// Share of the product's reviews classified positive, 0 to 100
    pub pos_sentiment_percent: f64,
}
