use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::feedback::SubmitFeedbackCommand;
use crate::domain::models::feedback::{MAX_RATING, MIN_RATING};
use crate::domain::models::{Activity, Feedback};
use crate::error::{DomainError, DomainResult};
use crate::storage::traits::{ActivityStorage, FeedbackStorage};

/// Service for parent feedback on activities
#[derive(Clone)]
pub struct FeedbackService {
    feedback_storage: Arc<dyn FeedbackStorage>,
    activity_storage: Arc<dyn ActivityStorage>,
}

impl FeedbackService {
    pub fn new(
        feedback_storage: Arc<dyn FeedbackStorage>,
        activity_storage: Arc<dyn ActivityStorage>,
    ) -> Self {
        Self {
            feedback_storage,
            activity_storage,
        }
    }

    /// Store feedback for an existing activity. The child reference is taken
    /// from the activity, not from the caller.
    pub async fn submit_feedback(&self, command: SubmitFeedbackCommand) -> DomainResult<Feedback> {
        info!(
            "Submitting feedback: activity_id={}, rating={}",
            command.activity_id, command.rating
        );

        if !Feedback::is_valid_rating(command.rating) {
            return Err(DomainError::validation(format!(
                "Rating must be between {} and {}",
                MIN_RATING, MAX_RATING
            )));
        }
        let rating = u8::try_from(command.rating)
            .map_err(|_| DomainError::validation("Rating out of range"))?;

        let experience = command.experience.trim().to_string();
        if experience.is_empty() {
            return Err(DomainError::validation("Experience cannot be empty"));
        }
        let outcomes = command.outcomes.trim().to_string();
        if outcomes.is_empty() {
            return Err(DomainError::validation("Outcomes cannot be empty"));
        }

        let activity = self.require_activity(&command.activity_id).await?;

        let feedback = Feedback {
            id: Feedback::generate_id(),
            activity_id: activity.id,
            child_id: activity.child_id,
            rating,
            experience,
            outcomes,
            suggestions: command
                .suggestions
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            created_at: Utc::now(),
        };

        self.feedback_storage.store_feedback(&feedback).await?;

        info!("Stored feedback {} for activity {}", feedback.id, feedback.activity_id);
        Ok(feedback)
    }

    /// Feedback rows for one activity, oldest first
    pub async fn list_feedback(&self, activity_id: &str) -> DomainResult<Vec<Feedback>> {
        info!("Listing feedback for activity {}", activity_id);

        self.require_activity(activity_id).await?;
        let feedback = self.feedback_storage.list_feedback_for_activity(activity_id).await?;

        info!("Found {} feedback entries", feedback.len());
        Ok(feedback)
    }

    async fn require_activity(&self, activity_id: &str) -> DomainResult<Activity> {
        match self.activity_storage.get_activity(activity_id).await? {
            Some(activity) => Ok(activity),
            None => {
                warn!("Feedback refers to unknown activity {}", activity_id);
                Err(DomainError::activity_not_found(activity_id))
            }
        }
    }
}
