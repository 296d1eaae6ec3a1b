use std::sync::{Arc, Mutex};

use projboard::core::{NewProject, Project, ProjectForm, ProjectId, ProjectState};

/// Creates a NewProject with a description long enough to pass validation.
pub fn make_new_project(title: &str, people: u32) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("Work on {title}"),
        people,
    }
}

/// Creates a form filled with the given raw input values.
pub fn make_form(title: &str, description: &str, people: &str) -> ProjectForm {
    ProjectForm {
        title: title.to_string(),
        description: description.to_string(),
        people: people.to_string(),
    }
}

/// Snapshots received by a listener, one entry per notification.
pub type Recorded = Arc<Mutex<Vec<Vec<Project>>>>;

/// Registers a listener on `state` that records every snapshot it receives.
pub fn record_snapshots(state: &mut ProjectState) -> Recorded {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = recorded.clone();
    state.add_listener(move |projects| sink.lock().unwrap().push(projects));
    recorded
}

/// Adds `count` projects and returns their ids in insertion order.
pub fn add_projects(state: &mut ProjectState, count: usize) -> Vec<ProjectId> {
    (0..count)
        .map(|n| state.add_project(make_new_project(&format!("Project {n}"), 1)))
        .collect()
}
