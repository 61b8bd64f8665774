//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined
//! in the `shared` crate to these internal types.

pub mod activities {
    /// Input for recording an activity produced by the content generator.
    #[derive(Debug, Clone, Default)]
    pub struct RecordActivityCommand {
        pub child_id: Option<String>,
        pub age: u32,
        pub title: String,
        pub description: String,
        pub subjects: Vec<String>,
        pub intelligences: Vec<String>,
        pub tools: Vec<String>,
        pub instructions: Vec<String>,
        pub materials_required: Vec<String>,
        pub skills: Vec<String>,
        pub learning_outcomes: Vec<String>,
    }

    /// Filters for listing activities. All filters are optional and combine with AND.
    #[derive(Debug, Clone, Default)]
    pub struct ActivityListQuery {
        pub child_id: Option<String>,
        pub subject: Option<String>,
        pub intelligence: Option<String>,
        pub age: Option<u32>,
    }
}

pub mod feedback {
    /// Input for submitting feedback on an activity.
    #[derive(Debug, Clone)]
    pub struct SubmitFeedbackCommand {
        pub activity_id: String,
        pub rating: i64,
        pub experience: String,
        pub outcomes: String,
        pub suggestions: Option<String>,
    }
}

pub mod children {
    /// Input for creating a child profile.
    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
        pub age: u32,
        pub grade: Option<String>,
        pub interests: Vec<String>,
    }

    /// Partial update of a child profile; `None` leaves a field unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateChildCommand {
        pub name: Option<String>,
        pub age: Option<u32>,
        pub grade: Option<String>,
        pub interests: Option<Vec<String>>,
    }
}
