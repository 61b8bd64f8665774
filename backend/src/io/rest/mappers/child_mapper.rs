use crate::domain::commands::children::{CreateChildCommand, UpdateChildCommand};
use crate::domain::models::Child as DomainChild;
use shared::{Child as SharedChild, ChildResponse, CreateChildRequest, UpdateChildRequest};

/// Mapper between shared child DTOs and the domain child model.
/// The owning account id never leaves the domain.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        SharedChild {
            id: domain.id,
            name: domain.name,
            age: domain.age,
            grade: domain.grade,
            interests: domain.interests,
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_response(domain: DomainChild, success_message: &str) -> ChildResponse {
        ChildResponse {
            child: Self::to_dto(domain),
            success_message: success_message.to_string(),
        }
    }

    pub fn to_create_command(request: CreateChildRequest) -> CreateChildCommand {
        CreateChildCommand {
            name: request.name,
            age: request.age,
            grade: request.grade,
            interests: request.interests,
        }
    }

    pub fn to_update_command(request: UpdateChildRequest) -> UpdateChildCommand {
        UpdateChildCommand {
            name: request.name,
            age: request.age,
            grade: request.grade,
            interests: request.interests,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_dto_drops_account() {
        let created = Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap();
        let domain = DomainChild {
            id: "child-1".to_string(),
            account_id: "parent-1".to_string(),
            name: "Ada".to_string(),
            age: 7,
            grade: Some("2nd".to_string()),
            interests: vec!["space".to_string()],
            created_at: created,
            updated_at: created,
        };

        let dto = ChildMapper::to_dto(domain);

        assert_eq!(dto.id, "child-1");
        assert_eq!(dto.created_at, "2025-02-03T10:00:00+00:00");
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("account_id").is_none());
    }
}
