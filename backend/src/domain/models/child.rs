use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a child profile.
/// The owning parent account is kept here but never exposed over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub age: u8,
    pub grade: Option<String>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.account_id == account_id
    }
}
