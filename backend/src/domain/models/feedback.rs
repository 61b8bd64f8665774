use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lowest rating a stored feedback row may carry
pub const MIN_RATING: u8 = 1;
/// Highest rating a stored feedback row may carry
pub const MAX_RATING: u8 = 5;

/// Parent feedback on one activity. Several rows per activity are allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub activity_id: String,
    /// Copied from the activity at submission time
    pub child_id: Option<String>,
    pub rating: u8,
    pub experience: String,
    pub outcomes: String,
    pub suggestions: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn is_valid_rating(rating: i64) -> bool {
        (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating)
    }
}
