use chrono::Utc;
use shared::Intelligence;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::child_service::{validate_age, ChildService};
use crate::domain::commands::activities::{ActivityListQuery, RecordActivityCommand};
use crate::domain::models::Activity;
use crate::error::{DomainError, DomainResult};
use crate::storage::traits::ActivityStorage;

/// Service for recording and browsing generated activities
#[derive(Clone)]
pub struct ActivityService {
    activity_storage: Arc<dyn ActivityStorage>,
    child_service: ChildService,
}

impl ActivityService {
    pub fn new(activity_storage: Arc<dyn ActivityStorage>, child_service: ChildService) -> Self {
        Self {
            activity_storage,
            child_service,
        }
    }

    /// Validate and store a generated activity.
    ///
    /// When the activity names a child, `account_id` must own that child.
    pub async fn record_activity(
        &self,
        account_id: Option<&str>,
        command: RecordActivityCommand,
    ) -> DomainResult<Activity> {
        info!(
            "Recording activity: title={}, child_id={:?}",
            command.title, command.child_id
        );

        let age = validate_age(command.age)?;

        let title = command.title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::validation("Activity title cannot be empty"));
        }

        let subjects = distinct(clean_list(command.subjects));
        if subjects.is_empty() {
            return Err(DomainError::validation("At least one subject is required"));
        }

        let intelligences = parse_intelligences(&command.intelligences)?;
        if intelligences.is_empty() {
            return Err(DomainError::validation("At least one intelligence is required"));
        }

        let child_id = match command.child_id.filter(|id| !id.trim().is_empty()) {
            Some(child_id) => {
                let account_id = account_id.ok_or_else(|| {
                    warn!("Anonymous caller tried to record an activity for {}", child_id);
                    DomainError::Unauthorized {
                        child_id: child_id.clone(),
                    }
                })?;
                self.child_service.get_owned_child(account_id, &child_id).await?;
                Some(child_id)
            }
            None => None,
        };

        let activity = Activity {
            id: Activity::generate_id(),
            child_id,
            age,
            title,
            description: command.description.trim().to_string(),
            subjects,
            intelligences,
            tools: clean_list(command.tools),
            instructions: clean_list(command.instructions),
            materials_required: clean_list(command.materials_required),
            skills: clean_list(command.skills),
            learning_outcomes: clean_list(command.learning_outcomes),
            created_at: Utc::now(),
        };

        self.activity_storage.store_activity(&activity).await?;

        info!("Recorded activity {}", activity.id);
        Ok(activity)
    }

    pub async fn get_activity(&self, activity_id: &str) -> DomainResult<Activity> {
        info!("Getting activity: {}", activity_id);

        match self.activity_storage.get_activity(activity_id).await? {
            Some(activity) => Ok(activity),
            None => {
                warn!("Activity not found: {}", activity_id);
                Err(DomainError::activity_not_found(activity_id))
            }
        }
    }

    /// Filtered listing, newest first
    pub async fn list_activities(
        &self,
        mut query: ActivityListQuery,
    ) -> DomainResult<Vec<Activity>> {
        info!("Listing activities: {:?}", query);

        // Stored tags use canonical names, so normalise the filter first
        if let Some(name) = query.intelligence.take() {
            let intelligence = name
                .parse::<Intelligence>()
                .map_err(|e| DomainError::validation(e.to_string()))?;
            query.intelligence = Some(intelligence.name().to_string());
        }
        if let Some(age) = query.age {
            validate_age(age)?;
        }

        let activities = self.activity_storage.list_activities(&query).await?;

        info!("Found {} activities", activities.len());
        Ok(activities)
    }
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Drop repeats, keeping first occurrences in order
fn distinct<T: PartialEq>(values: Vec<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(values.len());
    for value in values {
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}

fn parse_intelligences(names: &[String]) -> DomainResult<Vec<Intelligence>> {
    let parsed = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            name.parse::<Intelligence>()
                .map_err(|e| DomainError::validation(e.to_string()))
        })
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(distinct(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::children::CreateChildCommand;
    use crate::storage::{ActivityRepository, ChildRepository, DbConnection};

    async fn create_test_service() -> ActivityService {
        let db = DbConnection::init_test().await.unwrap();
        let child_service = ChildService::new(Arc::new(ChildRepository::new(db.clone())));
        ActivityService::new(Arc::new(ActivityRepository::new(db)), child_service)
    }

    async fn create_child(service: &ActivityService, account_id: &str) -> String {
        service
            .child_service
            .create_child(
                account_id,
                CreateChildCommand {
                    name: "Ada".to_string(),
                    age: 7,
                    grade: None,
                    interests: vec![],
                },
            )
            .await
            .unwrap()
            .id
    }

    fn record_command(child_id: Option<String>) -> RecordActivityCommand {
        RecordActivityCommand {
            child_id,
            age: 7,
            title: "  Rhythm clapping ".to_string(),
            description: "Clap along to songs".to_string(),
            subjects: vec!["Music".to_string(), " Music".to_string(), "Mathematics".to_string()],
            intelligences: vec![
                "musical".to_string(),
                "Musical".to_string(),
                "Logical-Mathematical".to_string(),
            ],
            skills: vec!["Listening".to_string(), " ".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_record_guest_activity() {
        let service = create_test_service().await;

        let activity = service.record_activity(None, record_command(None)).await.unwrap();

        assert_eq!(activity.title, "Rhythm clapping");
        assert_eq!(activity.child_id, None);
        assert_eq!(activity.subjects, vec!["Music", "Mathematics"]);
        assert_eq!(
            activity.intelligences,
            vec![Intelligence::Musical, Intelligence::LogicalMathematical]
        );
        assert_eq!(activity.skills, vec!["Listening"]);

        let stored = service.get_activity(&activity.id).await.unwrap();
        assert_eq!(stored, activity);
    }

    #[tokio::test]
    async fn test_record_activity_validation() {
        let service = create_test_service().await;

        let mut command = record_command(None);
        command.intelligences = vec!["Telepathic".to_string()];
        let result = service.record_activity(None, command).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let mut command = record_command(None);
        command.subjects = vec![" ".to_string()];
        let result = service.record_activity(None, command).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let mut command = record_command(None);
        command.age = 0;
        let result = service.record_activity(None, command).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));

        let mut command = record_command(None);
        command.title = String::new();
        let result = service.record_activity(None, command).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn test_record_activity_for_child_requires_owner() {
        let service = create_test_service().await;
        let child_id = create_child(&service, "parent-1").await;

        let activity = service
            .record_activity(Some("parent-1"), record_command(Some(child_id.clone())))
            .await
            .unwrap();
        assert_eq!(activity.child_id.as_deref(), Some(child_id.as_str()));

        let result = service
            .record_activity(Some("parent-2"), record_command(Some(child_id.clone())))
            .await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));

        let result = service.record_activity(None, record_command(Some(child_id))).await;
        assert!(matches!(result, Err(DomainError::Unauthorized { .. })));

        let result = service
            .record_activity(Some("parent-1"), record_command(Some("missing".to_string())))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_get_missing_activity() {
        let service = create_test_service().await;
        let result = service.get_activity("missing").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_activities_normalises_intelligence_filter() {
        let service = create_test_service().await;
        service.record_activity(None, record_command(None)).await.unwrap();

        let found = service
            .list_activities(ActivityListQuery {
                intelligence: Some("logical-mathematical".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let result = service
            .list_activities(ActivityListQuery {
                intelligence: Some("Telepathic".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
