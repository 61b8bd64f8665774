use crate::domain::commands::activities::RecordActivityCommand;
use crate::domain::models::Activity as DomainActivity;
use shared::{Activity as SharedActivity, RecordActivityRequest};

/// Mapper between shared activity DTOs and the domain activity model
pub struct ActivityMapper;

impl ActivityMapper {
    pub fn to_dto(domain: DomainActivity) -> SharedActivity {
        SharedActivity {
            id: domain.id,
            child_id: domain.child_id,
            age: domain.age,
            title: domain.title,
            description: domain.description,
            subjects: domain.subjects,
            intelligences: domain.intelligences,
            tools: domain.tools,
            instructions: domain.instructions,
            materials_required: domain.materials_required,
            skills: domain.skills,
            learning_outcomes: domain.learning_outcomes,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_dto_list(domain: Vec<DomainActivity>) -> Vec<SharedActivity> {
        domain.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_record_command(request: RecordActivityRequest) -> RecordActivityCommand {
        RecordActivityCommand {
            child_id: request.child_id,
            age: request.age,
            title: request.title,
            description: request.description,
            subjects: request.subjects,
            intelligences: request.intelligences,
            tools: request.tools,
            instructions: request.instructions,
            materials_required: request.materials_required,
            skills: request.skills,
            learning_outcomes: request.learning_outcomes,
        }
    }
}
