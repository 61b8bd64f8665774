use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{decode_timestamp, encode_list, encode_timestamp};
use crate::domain::models::Feedback;
use crate::storage::connection::DbConnection;
use crate::storage::traits::FeedbackStorage;

/// Repository for parent feedback rows
#[derive(Clone)]
pub struct FeedbackRepository {
    db: DbConnection,
}

impl FeedbackRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_feedback(row: &SqliteRow) -> Result<Feedback> {
        let rating: i64 = row.get("rating");
        Ok(Feedback {
            id: row.get("id"),
            activity_id: row.get("activity_id"),
            child_id: row.get("child_id"),
            rating: u8::try_from(rating).context("Stored rating out of range")?,
            experience: row.get("experience"),
            outcomes: row.get("outcomes"),
            suggestions: row.get("suggestions"),
            created_at: decode_timestamp("created_at", row.get::<&str, _>("created_at"))?,
        })
    }
}

#[async_trait]
impl FeedbackStorage for FeedbackRepository {
    async fn store_feedback(&self, feedback: &Feedback) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO feedback
                (id, activity_id, child_id, rating, experience, outcomes, suggestions, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&feedback.id)
        .bind(&feedback.activity_id)
        .bind(&feedback.child_id)
        .bind(i64::from(feedback.rating))
        .bind(&feedback.experience)
        .bind(&feedback.outcomes)
        .bind(&feedback.suggestions)
        .bind(encode_timestamp(&feedback.created_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn list_feedback_for_activity(&self, activity_id: &str) -> Result<Vec<Feedback>> {
        let rows = sqlx::query(
            r#"
            SELECT id, activity_id, child_id, rating, experience, outcomes, suggestions, created_at
            FROM feedback
            WHERE activity_id = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(activity_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_feedback).collect()
    }

    async fn list_feedback_for_activities(&self, activity_ids: &[String]) -> Result<Vec<Feedback>> {
        if activity_ids.is_empty() {
            return Ok(Vec::new());
        }

        // The id set travels as one JSON array parameter
        let rows = sqlx::query(
            r#"
            SELECT id, activity_id, child_id, rating, experience, outcomes, suggestions, created_at
            FROM feedback
            WHERE activity_id IN (SELECT value FROM json_each(?))
            ORDER BY created_at ASC, rowid ASC
            "#,
        )
        .bind(encode_list(activity_ids)?)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_feedback).collect()
    }
}
