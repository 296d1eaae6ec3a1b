use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::core::{
    drag::{DragPayload, DragTarget},
    project::{Project, ProjectStatus},
    state::{ProjectState, StateError},
};

/// The projects of one status, kept current by a store listener.
#[derive(Debug, Clone)]
pub struct ProjectListModel {
    kind: ProjectStatus,
    assigned: Arc<RwLock<Vec<Project>>>,
    droppable: bool,
}

impl ProjectListModel {
    /// Creates the list and subscribes it to `state`.
    pub fn new(kind: ProjectStatus, state: &mut ProjectState) -> Self {
        let assigned = Arc::new(RwLock::new(Vec::new()));
        let slot = assigned.clone();
        state.add_listener(move |projects: Vec<Project>| {
            let relevant: Vec<Project> = projects
                .into_iter()
                .filter(|project| project.status == kind)
                .collect();
            debug!(list = %kind, count = relevant.len(), "list refreshed");
            *slot.write().unwrap_or_else(PoisonError::into_inner) = relevant;
        });

        Self {
            kind,
            assigned,
            droppable: false,
        }
    }

    pub fn kind(&self) -> ProjectStatus {
        self.kind
    }

    pub fn assigned(&self) -> Vec<Project> {
        self.assigned
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    pub fn list_id(&self) -> String {
        format!("{}-projects-list", self.kind.slug())
    }

    pub fn heading(&self) -> String {
        self.kind.heading()
    }
}

impl DragTarget for ProjectListModel {
    fn drag_over(&mut self, payload: &DragPayload) -> bool {
        let accepted = payload.is_text_plain();
        if accepted {
            self.droppable = true;
        }
        accepted
    }

    fn drag_leave(&mut self) {
        self.droppable = false;
    }

    fn on_drop(
        &mut self,
        payload: DragPayload,
        state: &mut ProjectState,
    ) -> Result<bool, StateError> {
        self.droppable = false;
        let Some(id) = payload.project_id() else {
            warn!(list = %self.kind, mime = %payload.mime, "ignoring drop with unsupported payload");
            return Ok(false);
        };
        state.move_project(&id, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drag::DragPayload;

    fn foreign_payload() -> DragPayload {
        DragPayload {
            mime: "application/json".to_string(),
            data: "{}".to_string(),
        }
    }

    #[test]
    fn list_ids_follow_kind() {
        let mut state = ProjectState::new();
        let list = ProjectListModel::new(ProjectStatus::Finished, &mut state);
        assert_eq!(list.list_id(), "finished-projects-list");
        assert_eq!(list.heading(), "FINISHED PROJECTS");
    }

    #[test]
    fn drag_over_only_accepts_text_plain() {
        let mut state = ProjectState::new();
        let mut list = ProjectListModel::new(ProjectStatus::Active, &mut state);
        assert!(!list.drag_over(&foreign_payload()));
        assert!(!list.is_droppable());

        assert!(list.drag_over(&DragPayload::text_plain(&"x".into())));
        assert!(list.is_droppable());

        list.drag_leave();
        assert!(!list.is_droppable());
    }

    #[test]
    fn highlighted_list_still_rejects_foreign_payload() {
        let mut state = ProjectState::new();
        let mut list = ProjectListModel::new(ProjectStatus::Finished, &mut state);

        assert!(list.drag_over(&DragPayload::text_plain(&"x".into())));
        assert!(!list.drag_over(&foreign_payload()));
    }
}
