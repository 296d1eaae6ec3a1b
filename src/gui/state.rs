use crate::{
    config::ValidationRules,
    core::{DragPayload, ProjectState},
};

/// Everything components share: the project store, the form rules and the
/// payload of the drag in progress.
#[derive(Debug, Default)]
pub struct AppContext {
    pub projects: ProjectState,
    pub rules: ValidationRules,
    pub drag: Option<DragPayload>,
}

impl AppContext {
    pub fn new(rules: ValidationRules) -> Self {
        Self {
            projects: ProjectState::new(),
            rules,
            drag: None,
        }
    }
}
