pub mod config;
pub mod core;
pub mod logging;

pub use config::{AppConfig, ThemeChoice, ValidationRules};
pub use crate::core::{
    DragPayload, NewProject, Project, ProjectForm, ProjectId, ProjectListModel, ProjectState,
    ProjectStatus,
};

#[cfg(feature = "gui")]
pub mod gui;
