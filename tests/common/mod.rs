mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projboard for tests
pub use projboard::core::{
    DragPayload, DragTarget, NewProject, Project, ProjectForm, ProjectId, ProjectListModel,
    ProjectState, ProjectStatus,
};
pub use projboard::config::ValidationRules;
