use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{decode_list, decode_timestamp, encode_list, encode_timestamp};
use crate::domain::commands::activities::ActivityListQuery;
use crate::domain::models::Activity;
use crate::storage::connection::DbConnection;
use crate::storage::traits::{ActivityStorage, ACTIVITY_LIST_LIMIT};

const ACTIVITY_COLUMNS: &str = "id, child_id, age, title, description, subjects, intelligences, \
     tools, instructions, materials_required, skills, learning_outcomes, created_at";

/// Repository for activity records
#[derive(Clone)]
pub struct ActivityRepository {
    db: DbConnection,
}

impl ActivityRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_activity(row: &SqliteRow) -> Result<Activity> {
        let age: i64 = row.get("age");
        Ok(Activity {
            id: row.get("id"),
            child_id: row.get("child_id"),
            age: u8::try_from(age).context("Stored activity age out of range")?,
            title: row.get("title"),
            description: row.get("description"),
            subjects: decode_list("subjects", row.get::<&str, _>("subjects"))?,
            intelligences: decode_list("intelligences", row.get::<&str, _>("intelligences"))?,
            tools: decode_list("tools", row.get::<&str, _>("tools"))?,
            instructions: decode_list("instructions", row.get::<&str, _>("instructions"))?,
            materials_required: decode_list(
                "materials_required",
                row.get::<&str, _>("materials_required"),
            )?,
            skills: decode_list("skills", row.get::<&str, _>("skills"))?,
            learning_outcomes: decode_list(
                "learning_outcomes",
                row.get::<&str, _>("learning_outcomes"),
            )?,
            created_at: decode_timestamp("created_at", row.get::<&str, _>("created_at"))?,
        })
    }
}

#[async_trait]
impl ActivityStorage for ActivityRepository {
    async fn store_activity(&self, activity: &Activity) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO activities (
                id, child_id, age, title, description, subjects, intelligences,
                tools, instructions, materials_required, skills, learning_outcomes, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&activity.id)
        .bind(&activity.child_id)
        .bind(i64::from(activity.age))
        .bind(&activity.title)
        .bind(&activity.description)
        .bind(encode_list(&activity.subjects)?)
        .bind(encode_list(&activity.intelligences)?)
        .bind(encode_list(&activity.tools)?)
        .bind(encode_list(&activity.instructions)?)
        .bind(encode_list(&activity.materials_required)?)
        .bind(encode_list(&activity.skills)?)
        .bind(encode_list(&activity.learning_outcomes)?)
        .bind(encode_timestamp(&activity.created_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_activity(&self, activity_id: &str) -> Result<Option<Activity>> {
        let sql = format!("SELECT {} FROM activities WHERE id = ?", ACTIVITY_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(activity_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::row_to_activity).transpose()
    }

    async fn list_activities_by_child(&self, child_id: &str) -> Result<Vec<Activity>> {
        let sql = format!(
            "SELECT {} FROM activities WHERE child_id = ? ORDER BY created_at ASC, rowid ASC",
            ACTIVITY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(child_id)
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_activity).collect()
    }

    async fn list_activities(&self, query: &ActivityListQuery) -> Result<Vec<Activity>> {
        // Unset filters bind NULL and match every row
        let sql = format!(
            r#"
            SELECT {}
            FROM activities
            WHERE (?1 IS NULL OR child_id = ?1)
              AND (?2 IS NULL OR age = ?2)
              AND (?3 IS NULL OR EXISTS (
                    SELECT 1 FROM json_each(activities.subjects) WHERE json_each.value = ?3))
              AND (?4 IS NULL OR EXISTS (
                    SELECT 1 FROM json_each(activities.intelligences) WHERE json_each.value = ?4))
            ORDER BY created_at DESC, rowid DESC
            LIMIT ?5
            "#,
            ACTIVITY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(&query.child_id)
            .bind(query.age.map(i64::from))
            .bind(&query.subject)
            .bind(&query.intelligence)
            .bind(i64::from(ACTIVITY_LIST_LIMIT))
            .fetch_all(self.db.pool())
            .await?;

        rows.iter().map(Self::row_to_activity).collect()
    }
}
