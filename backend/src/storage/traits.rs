//! # Storage Traits
//!
//! Storage abstractions the domain services depend on. The SQLite
//! repositories in `storage::repositories` implement them; services hold
//! them as trait objects so any backend can be swapped in.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::commands::activities::ActivityListQuery;
use crate::domain::models::{Activity, Child, Feedback};

/// Maximum number of rows returned by an unscoped activity listing
pub const ACTIVITY_LIST_LIMIT: u32 = 100;

/// Activity record store. Activities are write-once.
#[async_trait]
pub trait ActivityStorage: Send + Sync {
    /// Store a newly recorded activity
    async fn store_activity(&self, activity: &Activity) -> Result<()>;

    /// Retrieve a specific activity by ID
    async fn get_activity(&self, activity_id: &str) -> Result<Option<Activity>>;

    /// All activities of one child, oldest first
    async fn list_activities_by_child(&self, child_id: &str) -> Result<Vec<Activity>>;

    /// Filtered listing, newest first, at most `ACTIVITY_LIST_LIMIT` rows
    async fn list_activities(&self, query: &ActivityListQuery) -> Result<Vec<Activity>>;
}

/// Feedback record store. Several rows per activity are valid.
#[async_trait]
pub trait FeedbackStorage: Send + Sync {
    /// Store a new feedback row
    async fn store_feedback(&self, feedback: &Feedback) -> Result<()>;

    /// Feedback for one activity, oldest first
    async fn list_feedback_for_activity(&self, activity_id: &str) -> Result<Vec<Feedback>>;

    /// Feedback for any of the given activities, oldest first
    async fn list_feedback_for_activities(&self, activity_ids: &[String]) -> Result<Vec<Feedback>>;
}

/// Child profile store
#[async_trait]
pub trait ChildStorage: Send + Sync {
    /// Store a new child
    async fn store_child(&self, child: &Child) -> Result<()>;

    /// Retrieve a specific child by ID regardless of owner
    async fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List one account's children ordered by name
    async fn list_children(&self, account_id: &str) -> Result<Vec<Child>>;

    /// Update an existing child
    async fn update_child(&self, child: &Child) -> Result<()>;

    /// Delete a child together with its activities and their feedback.
    /// Returns false when no such child existed.
    async fn delete_child(&self, child_id: &str) -> Result<bool>;
}
