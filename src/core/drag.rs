//! Drag-and-drop contract between list items and list drop zones.

use crate::core::{
    project::ProjectId,
    state::{ProjectState, StateError},
};

pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Data carried from a drag source to a drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime: String,
    pub data: String,
}

impl DragPayload {
    pub fn text_plain(id: &ProjectId) -> Self {
        Self {
            mime: MIME_TEXT_PLAIN.to_string(),
            data: id.to_string(),
        }
    }

    pub fn is_text_plain(&self) -> bool {
        self.mime == MIME_TEXT_PLAIN
    }

    /// The carried project id, if the payload is plain text.
    pub fn project_id(&self) -> Option<ProjectId> {
        self.is_text_plain()
            .then(|| ProjectId::from(self.data.as_str()))
    }
}

pub trait Draggable {
    fn drag_start(&self) -> DragPayload;
    fn drag_end(&self);
}

pub trait DragTarget {
    /// Marks the target as droppable when it accepts `payload`.
    fn drag_over(&mut self, payload: &DragPayload) -> bool;
    fn drag_leave(&mut self);
    /// Returns whether the drop changed a project's status.
    fn on_drop(
        &mut self,
        payload: DragPayload,
        state: &mut ProjectState,
    ) -> Result<bool, StateError>;
}
