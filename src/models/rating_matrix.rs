use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// User identifier as stored in the serialized rating matrix.
///
/// Export pipelines are not consistent about key types: matrices built from
/// numeric account ids carry integers, matrices built from usernames carry
/// strings. Keys are canonicalized to their string form once at load time,
/// so lookups never have to sniff types at call time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserKey {
    Int(i64),
    Text(String),
}

impl UserKey {
    /// Returns the canonical (string) form of the key.
    pub fn canonical(&self) -> String {
        match self {
            UserKey::Int(id) => id.to_string(),
            UserKey::Text(id) => id.clone(),
        }
    }
}

/// Serialized form of the user x product rating matrix.
///
/// `rows` pairs each user key with a score vector aligned to `products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRatingMatrix {
    pub products: Vec<String>,
    pub rows: Vec<(UserKey, Vec<f32>)>,
}

/// In-memory rating matrix with canonicalized row keys.
#[derive(Debug, Clone)]
pub struct RatingMatrix {
    products: Vec<String>,
    rows: HashMap<String, Vec<f32>>,
}

impl RatingMatrix {
    /// Builds the matrix from its serialized form, canonicalizing row keys.
    ///
    /// Fails on mis-sized rows and on keys that collide after
    /// canonicalization.
    pub fn from_raw(raw: RawRatingMatrix) -> AppResult<Self> {
        let mut rows = HashMap::with_capacity(raw.rows.len());
        for (key, scores) in raw.rows {
            let canonical = key.canonical();
            if scores.len() != raw.products.len() {
                return Err(AppError::ArtifactLoad(format!(
                    "rating row '{}' has {} scores but the matrix has {} products",
                    canonical,
                    scores.len(),
                    raw.products.len()
                )));
            }
            if rows.insert(canonical.clone(), scores).is_some() {
                return Err(AppError::ArtifactLoad(format!(
                    "duplicate user key '{canonical}' in rating matrix"
                )));
            }
        }
        Ok(Self {
            products: raw.products,
            rows,
        })
    }

    /// Product identifiers in column order.
    pub fn products(&self) -> &[String] {
        &self.products
    }

    /// Number of users with a rating row.
    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    /// Looks up a user's score row by canonical key.
    pub fn user_row(&self, user_id: &str) -> Option<&[f32]> {
        self.rows.get(user_id).map(Vec::as_slice)
    }

    /// Returns the ids of the user's `pool` highest-scored products, best
    /// first, or `None` for an unknown user. Ties keep the matrix's native
    /// column order.
    pub fn top_products(&self, user_id: &str, pool: usize) -> Option<Vec<&str>> {
        let row = self.user_row(user_id)?;
        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        Some(
            ranked
                .into_iter()
                .take(pool)
                .map(|(i, _)| self.products[i].as_str())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> RatingMatrix {
        RatingMatrix::from_raw(RawRatingMatrix {
            products: vec!["p1".to_string(), "p2".to_string(), "p3".to_string()],
            rows: vec![
                (UserKey::Text("u1".to_string()), vec![0.9, 0.5, 0.1]),
                (UserKey::Int(42), vec![0.1, 0.5, 0.5]),
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_integer_and_text_keys_share_one_lookup_form() {
        let matrix = matrix();
        // The integer key 42 is stored under its string form.
        assert!(matrix.user_row("42").is_some());
        assert!(matrix.user_row("u1").is_some());
        assert!(matrix.user_row("unknown").is_none());
    }

    #[test]
    fn test_top_products_orders_by_score_descending() {
        let matrix = matrix();
        assert_eq!(matrix.top_products("u1", 2).unwrap(), vec!["p1", "p2"]);
        assert_eq!(
            matrix.top_products("u1", 10).unwrap(),
            vec!["p1", "p2", "p3"]
        );
    }

    #[test]
    fn test_top_products_keeps_column_order_on_ties() {
        let matrix = matrix();
        // User 42 scores p2 and p3 equally; p2 comes first in column order.
        assert_eq!(
            matrix.top_products("42", 10).unwrap(),
            vec!["p2", "p3", "p1"]
        );
    }

    #[test]
    fn test_top_products_unknown_user() {
        assert!(matrix().top_products("nobody", 5).is_none());
    }

    #[test]
    fn test_from_raw_rejects_mis_sized_rows() {
        let result = RatingMatrix::from_raw(RawRatingMatrix {
            products: vec!["p1".to_string(), "p2".to_string()],
            rows: vec![(UserKey::Text("u1".to_string()), vec![0.9])],
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_from_raw_rejects_colliding_keys() {
        let result = RatingMatrix::from_raw(RawRatingMatrix {
            products: vec!["p1".to_string()],
            rows: vec![
                (UserKey::Int(7), vec![0.1]),
                (UserKey::Text("7".to_string()), vec![0.2]),
            ],
        });
        assert!(result.is_err());
    }
}
