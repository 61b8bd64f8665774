use crate::domain::commands::feedback::SubmitFeedbackCommand;
use crate::domain::models::Feedback as DomainFeedback;
use shared::{Feedback as SharedFeedback, SubmitFeedbackRequest, SubmitFeedbackResponse};

/// Mapper between shared feedback DTOs and the domain feedback model
pub struct FeedbackMapper;

impl FeedbackMapper {
    pub fn to_dto(domain: DomainFeedback) -> SharedFeedback {
        SharedFeedback {
            id: domain.id,
            activity_id: domain.activity_id,
            child_id: domain.child_id,
            rating: domain.rating,
            experience: domain.experience,
            outcomes: domain.outcomes,
            suggestions: domain.suggestions,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_dto_list(domain: Vec<DomainFeedback>) -> Vec<SharedFeedback> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    /// The request's child_id is ignored; the service copies it from the activity
    pub fn to_submit_command(request: SubmitFeedbackRequest) -> SubmitFeedbackCommand {
        SubmitFeedbackCommand {
            activity_id: request.activity_id,
            rating: i64::from(request.rating),
            experience: request.experience,
            outcomes: request.outcomes,
            suggestions: request.suggestions,
        }
    }

    pub fn to_submit_response(domain: &DomainFeedback) -> SubmitFeedbackResponse {
        SubmitFeedbackResponse {
            message: "Feedback submitted successfully".to_string(),
            id: domain.id.clone(),
        }
    }
}
