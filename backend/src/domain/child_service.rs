use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::children::{CreateChildCommand, UpdateChildCommand};
use crate::domain::models::Child;
use crate::error::{DomainError, DomainResult};
use crate::storage::traits::ChildStorage;

/// Youngest age accepted for children and activities
pub const MIN_AGE: u32 = 1;
/// Oldest age accepted for children and activities
pub const MAX_AGE: u32 = 18;
/// Longest accepted child name, in characters
pub const MAX_NAME_LENGTH: usize = 100;

/// Service for managing child profiles and their ownership
#[derive(Clone)]
pub struct ChildService {
    child_storage: Arc<dyn ChildStorage>,
}

impl ChildService {
    pub fn new(child_storage: Arc<dyn ChildStorage>) -> Self {
        Self { child_storage }
    }

    /// Create a child owned by `account_id`
    pub async fn create_child(
        &self,
        account_id: &str,
        command: CreateChildCommand,
    ) -> DomainResult<Child> {
        info!("Creating child: name={}, age={}", command.name, command.age);

        let name = validate_name(&command.name)?;
        let age = validate_age(command.age)?;

        let now = Utc::now();
        let child = Child {
            id: Child::generate_id(),
            account_id: account_id.to_string(),
            name,
            age,
            grade: clean_grade(command.grade),
            interests: clean_interests(command.interests),
            created_at: now,
            updated_at: now,
        };

        self.child_storage.store_child(&child).await?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// Children of one account, ordered by name
    pub async fn list_children(&self, account_id: &str) -> DomainResult<Vec<Child>> {
        info!("Listing children for account {}", account_id);

        let children = self.child_storage.list_children(account_id).await?;

        info!("Found {} children", children.len());
        Ok(children)
    }

    /// Resolve a child and check that `account_id` owns it.
    ///
    /// A missing child is `NotFound`; someone else's child is `Unauthorized`.
    pub async fn get_owned_child(&self, account_id: &str, child_id: &str) -> DomainResult<Child> {
        let child = match self.child_storage.get_child(child_id).await? {
            Some(child) => child,
            None => {
                warn!("Child not found: {}", child_id);
                return Err(DomainError::child_not_found(child_id));
            }
        };

        if !child.is_owned_by(account_id) {
            warn!("Account {} denied access to child {}", account_id, child_id);
            return Err(DomainError::Unauthorized {
                child_id: child_id.to_string(),
            });
        }

        Ok(child)
    }

    /// Apply a partial update to an owned child
    pub async fn update_child(
        &self,
        account_id: &str,
        child_id: &str,
        command: UpdateChildCommand,
    ) -> DomainResult<Child> {
        info!("Updating child: {}", child_id);

        let mut child = self.get_owned_child(account_id, child_id).await?;

        if let Some(name) = command.name {
            child.name = validate_name(&name)?;
        }
        if let Some(age) = command.age {
            child.age = validate_age(age)?;
        }
        if let Some(grade) = command.grade {
            child.grade = clean_grade(Some(grade));
        }
        if let Some(interests) = command.interests {
            child.interests = clean_interests(interests);
        }
        child.updated_at = Utc::now();

        self.child_storage.update_child(&child).await?;

        info!("Updated child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// Delete an owned child together with its activities and feedback
    pub async fn delete_child(&self, account_id: &str, child_id: &str) -> DomainResult<()> {
        info!("Deleting child: {}", child_id);

        self.get_owned_child(account_id, child_id).await?;

        if !self.child_storage.delete_child(child_id).await? {
            return Err(DomainError::child_not_found(child_id));
        }

        info!("Deleted child: {}", child_id);
        Ok(())
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::validation("Child name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Child name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(name.to_string())
}

/// Accepts ages in `MIN_AGE..=MAX_AGE`
pub(crate) fn validate_age(age: u32) -> DomainResult<u8> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::validation(format!(
            "Age must be between {} and {}",
            MIN_AGE, MAX_AGE
        )));
    }
    u8::try_from(age).map_err(|_| DomainError::validation("Age out of range"))
}

fn clean_grade(grade: Option<String>) -> Option<String> {
    grade
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
}

fn clean_interests(interests: Vec<String>) -> Vec<String> {
    interests
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ChildRepository, DbConnection};

    async fn create_test_service() -> ChildService {
        let db = DbConnection::init_test().await.unwrap();
        ChildService::new(Arc::new(ChildRepository::new(db)))
    }

    fn create_command(name: &str, age: u32) -> CreateChildCommand {
        CreateChildCommand {
            name: name.to_string(),
            age,
            grade: Some(" 2nd ".to_string()),
            interests: vec!["  space ".to_string(), "".to_string(), "lego".to_string()],
        }
    }

    #[tokio::test]
    async fn test_create_child_cleans_input() {
        let service = create_test_service().await;

        let child = service
            .create_child("parent-1", create_command("  Ada  ", 7))
            .await
            .expect("Failed to create child");

        assert_eq!(child.name, "Ada");
        assert_eq!(child.account_id, "parent-1");
        assert_eq!(child.grade.as_deref(), Some("2nd"));
        assert_eq!(child.interests, vec!["space", "lego"]);
    }

    #[tokio::test]
    async fn test_create_child_validation() {
        let service = create_test_service().await;

        let result = service.create_child("parent-1", create_command("   ", 7)).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = service
            .create_child("parent-1", create_command(&"x".repeat(101), 7))
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = service.create_child("parent-1", create_command("Ada", 0)).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let result = service.create_child("parent-1", create_command("Ada", 19)).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_owned_child_checks_ownership() {
        let service = create_test_service().await;
        let child = service.create_child("parent-1", create_command("Ada", 7)).await.unwrap();

        let owned = service.get_owned_child("parent-1", &child.id).await.unwrap();
        assert_eq!(owned.id, child.id);

        let foreign = service.get_owned_child("parent-2", &child.id).await;
        assert!(matches!(foreign, Err(DomainError::Unauthorized { .. })));

        let missing = service.get_owned_child("parent-1", "nope").await;
        assert!(matches!(missing, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_children_only_returns_own() {
        let service = create_test_service().await;
        service.create_child("parent-1", create_command("Zoe", 9)).await.unwrap();
        service.create_child("parent-1", create_command("Ben", 5)).await.unwrap();
        service.create_child("parent-2", create_command("Max", 6)).await.unwrap();

        let children = service.list_children("parent-1").await.unwrap();
        let names: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Zoe"]);
    }

    #[tokio::test]
    async fn test_update_child_partial() {
        let service = create_test_service().await;
        let child = service.create_child("parent-1", create_command("Ada", 7)).await.unwrap();

        let updated = service
            .update_child(
                "parent-1",
                &child.id,
                UpdateChildCommand {
                    age: Some(8),
                    interests: Some(vec!["chess".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.age, 8);
        assert_eq!(updated.interests, vec!["chess"]);
        assert!(updated.updated_at >= child.updated_at);

        let result = service
            .update_child("parent-2", &child.id, UpdateChildCommand::default())
            .await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    }

    #[tokio::test]
    async fn test_delete_child() {
        let service = create_test_service().await;
        let child = service.create_child("parent-1", create_command("Ada", 7)).await.unwrap();

        let result = service.delete_child("parent-2", &child.id).await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));

        service.delete_child("parent-1", &child.id).await.unwrap();

        let result = service.get_owned_child("parent-1", &child.id).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }
}
