use iced::{
    Element, Length, Task,
    widget::{Column, column, container, mouse_area, scrollable, text},
};
use tracing::{debug, warn};

use crate::{
    core::{DragPayload, DragTarget, Draggable, ProjectId, ProjectListModel, ProjectState, ProjectStatus},
    gui::{
        AppContext,
        components::{Component, ComponentMessage, ProjectItem, ProjectItemMessage},
        widgets::drop_zone_style,
    },
};

/// A drop zone listing every project of one status.
#[derive(Debug, Clone)]
pub struct ProjectList {
    model: ProjectListModel,
    dragging: Option<ProjectId>,
}

#[derive(Debug, Clone)]
pub enum ProjectListMessage {
    Item(ProjectId, ProjectItemMessage),
    DragEnter,
    DragExit,
    Drop,
}

#[derive(Debug, Clone)]
pub enum ProjectListParentMessage {
    DragFinished,
}

impl ProjectList {
    pub fn new(kind: ProjectStatus, projects: &mut ProjectState) -> Self {
        Self {
            model: ProjectListModel::new(kind, projects),
            dragging: None,
        }
    }

    pub fn model(&self) -> &ProjectListModel {
        &self.model
    }

    /// Resets drag state once the pointer is released, wherever that happened.
    pub fn end_drag(&mut self, payload: Option<&DragPayload>) {
        self.model.drag_leave();
        self.dragging = None;

        let assigned = self.model.assigned();
        if let Some(id) = payload.and_then(DragPayload::project_id)
            && let Some(project) = assigned.iter().find(|project| project.id == id)
        {
            ProjectItem::new(project).drag_end();
        }
    }
}

fn local(message: ProjectListMessage) -> ComponentMessage<ProjectList> {
    ComponentMessage::Component(message)
}

impl Component for ProjectList {
    type Message = ProjectListMessage;
    type ParentMessage = ProjectListParentMessage;

    fn view(&self) -> Element<'_, ComponentMessage<Self>> {
        let items = self.model.assigned().into_iter().map(|project| {
            let id = project.id.clone();
            let dragging = self.dragging.as_ref() == Some(&project.id);
            ProjectItem::new(&project)
                .view(dragging)
                .map(move |msg| local(ProjectListMessage::Item(id.clone(), msg)))
        });

        let body = column![
            text(self.model.heading()).size(24),
            scrollable(Column::with_children(items).spacing(8)).height(Length::Fill),
        ]
        .spacing(12);

        let zone = container(body)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(drop_zone_style(self.model.is_droppable()));

        mouse_area(zone)
            .on_enter(local(ProjectListMessage::DragEnter))
            .on_exit(local(ProjectListMessage::DragExit))
            .on_release(local(ProjectListMessage::Drop))
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            ProjectListMessage::Item(id, ProjectItemMessage::DragStart) => {
                let assigned = self.model.assigned();
                if let Some(project) = assigned.iter().find(|project| project.id == id) {
                    ctx.drag = Some(ProjectItem::new(project).drag_start());
                    self.dragging = Some(id);
                }
                Task::none()
            }
            ProjectListMessage::DragEnter => {
                if let Some(payload) = &ctx.drag {
                    self.model.drag_over(payload);
                }
                Task::none()
            }
            ProjectListMessage::DragExit => {
                self.model.drag_leave();
                Task::none()
            }
            ProjectListMessage::Drop => {
                let Some(payload) = ctx.drag.clone() else {
                    return Task::none();
                };
                match self.model.on_drop(payload, &mut ctx.projects) {
                    Ok(moved) => debug!(list = %self.model.kind(), moved, "drop handled"),
                    Err(err) => warn!(list = %self.model.kind(), error = %err, "drop rejected"),
                }
                Task::done(ComponentMessage::Parent(
                    ProjectListParentMessage::DragFinished,
                ))
            }
        }
    }
}
