//! Domain model for a recorded learning activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Intelligence;

/// A completed learning activity. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    /// None for activities generated without a child profile
    pub child_id: Option<String>,
    pub age: u8,
    pub title: String,
    pub description: String,
    /// Non-empty, duplicates collapsed
    pub subjects: Vec<String>,
    /// Non-empty, duplicates collapsed
    pub intelligences: Vec<Intelligence>,
    pub tools: Vec<String>,
    pub instructions: Vec<String>,
    pub materials_required: Vec<String>,
    pub skills: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Activity {
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
