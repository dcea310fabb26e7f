use serde::{Deserialize, Serialize};

/// One historical product review, text pre-lemmatized by the offline
/// cleaning pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub product_id: String,
    pub name: String,
    pub text: String,
}

/// The cleaned review table: one record per review, many per product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewTable {
    pub records: Vec<ReviewRecord>,
}

impl ReviewTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
