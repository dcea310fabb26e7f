mod rating_matrix;
mod recommendation;
mod review;

pub use rating_matrix::{RatingMatrix, RawRatingMatrix, UserKey};
pub use recommendation::Recommendation;
pub use review::{ReviewRecord, ReviewTable};
