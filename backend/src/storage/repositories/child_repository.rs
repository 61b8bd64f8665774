use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{decode_list, decode_timestamp, encode_list, encode_timestamp};
use crate::domain::models::Child;
use crate::storage::connection::DbConnection;
use crate::storage::traits::ChildStorage;

/// Repository for child profile operations
#[derive(Clone)]
pub struct ChildRepository {
    db: DbConnection,
}

impl ChildRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_child(row: &SqliteRow) -> Result<Child> {
        let age: i64 = row.get("age");
        Ok(Child {
            id: row.get("id"),
            account_id: row.get("account_id"),
            name: row.get("name"),
            age: u8::try_from(age).context("Stored child age out of range")?,
            grade: row.get("grade"),
            interests: decode_list("interests", row.get::<&str, _>("interests"))?,
            created_at: decode_timestamp("created_at", row.get::<&str, _>("created_at"))?,
            updated_at: decode_timestamp("updated_at", row.get::<&str, _>("updated_at"))?,
        })
    }
}

#[async_trait]
impl ChildStorage for ChildRepository {
    async fn store_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO children
                (id, account_id, name, age, grade, interests, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&child.id)
        .bind(&child.account_id)
        .bind(&child.name)
        .bind(i64::from(child.age))
        .bind(&child.grade)
        .bind(encode_list(&child.interests)?)
        .bind(encode_timestamp(&child.created_at))
        .bind(encode_timestamp(&child.updated_at))
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let row = sqlx::query(
            r#"
            SELECT id, account_id, name, age, grade, interests, created_at, updated_at
            FROM children
            WHERE id = ?
            "#,
        )
        .bind(child_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_child).transpose()
    }

    async fn list_children(&self, account_id: &str) -> Result<Vec<Child>> {
        let rows = sqlx::query(
            r#"
            SELECT id, account_id, name, age, grade, interests, created_at, updated_at
            FROM children
            WHERE account_id = ?
            ORDER BY name ASC, created_at ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_child).collect()
    }

    async fn update_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE children
            SET name = ?, age = ?, grade = ?, interests = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&child.name)
        .bind(i64::from(child.age))
        .bind(&child.grade)
        .bind(encode_list(&child.interests)?)
        .bind(encode_timestamp(&child.updated_at))
        .bind(&child.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_child(&self, child_id: &str) -> Result<bool> {
        // Activities and their feedback go with the child via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM children WHERE id = ?")
            .bind(child_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn setup_test() -> ChildRepository {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ChildRepository::new(db)
    }

    fn test_child(account_id: &str, name: &str) -> Child {
        let now = Utc::now();
        Child {
            id: Child::generate_id(),
            account_id: account_id.to_string(),
            name: name.to_string(),
            age: 8,
            grade: Some("3rd".to_string()),
            interests: vec!["dinosaurs".to_string(), "music".to_string()],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_store_and_get_child() {
        let repo = setup_test().await;
        let child = test_child("parent-1", "Ada");

        repo.store_child(&child).await.expect("Failed to store child");

        let stored = repo.get_child(&child.id).await.expect("Failed to get child");
        let stored = stored.expect("Child should exist");
        assert_eq!(stored.name, "Ada");
        assert_eq!(stored.account_id, "parent-1");
        assert_eq!(stored.grade.as_deref(), Some("3rd"));
        assert_eq!(stored.interests, vec!["dinosaurs", "music"]);
    }

    #[tokio::test]
    async fn test_get_nonexistent_child() {
        let repo = setup_test().await;
        let child = repo.get_child("missing").await.expect("Query failed");
        assert!(child.is_none());
    }

    #[tokio::test]
    async fn test_list_children_scoped_to_account_and_sorted() {
        let repo = setup_test().await;
        repo.store_child(&test_child("parent-1", "Zoe")).await.unwrap();
        repo.store_child(&test_child("parent-1", "Ben")).await.unwrap();
        repo.store_child(&test_child("parent-2", "Ada")).await.unwrap();

        let children = repo.list_children("parent-1").await.expect("Failed to list children");
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Zoe"]);
    }

    #[tokio::test]
    async fn test_update_child() {
        let repo = setup_test().await;
        let mut child = test_child("parent-1", "Ada");
        repo.store_child(&child).await.unwrap();

        child.name = "Ada L.".to_string();
        child.age = 9;
        child.grade = None;
        child.interests = vec!["maths".to_string()];
        repo.update_child(&child).await.expect("Failed to update child");

        let stored = repo.get_child(&child.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Ada L.");
        assert_eq!(stored.age, 9);
        assert!(stored.grade.is_none());
        assert_eq!(stored.interests, vec!["maths"]);
    }

    #[tokio::test]
    async fn test_delete_child() {
        let repo = setup_test().await;
        let child = test_child("parent-1", "Ada");
        repo.store_child(&child).await.unwrap();

        assert!(repo.delete_child(&child.id).await.unwrap());
        assert!(repo.get_child(&child.id).await.unwrap().is_none());
        assert!(!repo.delete_child(&child.id).await.unwrap());
    }
}
