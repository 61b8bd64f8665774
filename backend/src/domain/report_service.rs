//! Exposure report assembly.
//!
//! Every request recomputes the report from the stores, so a newly recorded
//! activity or feedback row shows up in the very next report.

use std::sync::Arc;
use tracing::info;

use crate::domain::child_service::ChildService;
use crate::domain::exposure_aggregator::ExposureAggregator;
use crate::domain::models::ExposureReport;
use crate::domain::recommendation_deriver::RecommendationDeriver;
use crate::error::DomainResult;
use crate::storage::traits::{ActivityStorage, FeedbackStorage};

/// Builds exposure reports for children owned by the caller
#[derive(Clone)]
pub struct ReportService {
    child_service: ChildService,
    activity_storage: Arc<dyn ActivityStorage>,
    feedback_storage: Arc<dyn FeedbackStorage>,
    aggregator: ExposureAggregator,
    deriver: RecommendationDeriver,
}

impl ReportService {
    pub fn new(
        child_service: ChildService,
        activity_storage: Arc<dyn ActivityStorage>,
        feedback_storage: Arc<dyn FeedbackStorage>,
        deriver: RecommendationDeriver,
    ) -> Self {
        Self {
            child_service,
            activity_storage,
            feedback_storage,
            aggregator: ExposureAggregator::new(),
            deriver,
        }
    }

    /// Assemble the exposure report of one child.
    ///
    /// Fails with `NotFound` for an unknown child and `Unauthorized` when the
    /// child belongs to another account.
    pub async fn generate_report(
        &self,
        account_id: &str,
        child_id: &str,
    ) -> DomainResult<ExposureReport> {
        info!("Generating exposure report for child {}", child_id);

        let child = self.child_service.get_owned_child(account_id, child_id).await?;

        let activities = self.activity_storage.list_activities_by_child(&child.id).await?;
        let activity_ids: Vec<String> = activities.iter().map(|a| a.id.clone()).collect();
        let feedback = self
            .feedback_storage
            .list_feedback_for_activities(&activity_ids)
            .await?;

        let profile = self.aggregator.aggregate(&activities, &feedback)?;
        let insights = self.deriver.derive(&profile, &child.interests);

        info!(
            "Report for child {}: {} activities, {} feedback rows, {} strengths",
            child.id,
            profile.total_activities,
            feedback.len(),
            insights.strengths.len()
        );

        Ok(ExposureReport {
            child_id: child.id,
            child_name: child.name,
            profile,
            insights,
        })
    }
}
