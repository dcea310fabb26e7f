//! Sentiment-filtered product recommendation service.
//!
//! Four pre-trained artifacts (a linear sentiment classifier, a TF-IDF
//! vectorizer, a user x product rating matrix and a cleaned review table)
//! are loaded once at startup and served read-only: candidate products come
//! from the rating matrix, their historical reviews are classified, and
//! products are ranked by positive-sentiment percentage. A single-review
//! sentiment prediction utility rides on the same artifacts.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
