use iced::{
    Element, Length, mouse,
    widget::{column, container, mouse_area, text},
};
use tracing::debug;

use crate::{
    core::{DragPayload, Draggable, Project},
    gui::widgets::card_style,
};

/// One project card; pressing it starts a drag.
#[derive(Debug, Clone, Copy)]
pub struct ProjectItem<'a> {
    project: &'a Project,
}

#[derive(Debug, Clone)]
pub enum ProjectItemMessage {
    DragStart,
}

impl<'a> ProjectItem<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    pub fn persons(&self) -> String {
        self.project.persons_label()
    }

    pub fn view(&self, dragging: bool) -> Element<'static, ProjectItemMessage> {
        let card = container(
            column![
                text(self.project.title.clone()).size(20),
                text(format!("{} assigned", self.persons())).size(14),
                text(self.project.description.clone()),
            ]
            .spacing(4),
        )
        .padding(10)
        .width(Length::Fill)
        .style(card_style(dragging));

        mouse_area(card)
            .on_press(ProjectItemMessage::DragStart)
            .interaction(mouse::Interaction::Grab)
            .into()
    }
}

impl Draggable for ProjectItem<'_> {
    fn drag_start(&self) -> DragPayload {
        debug!(project_id = %self.project.id, "drag started");
        DragPayload::text_plain(&self.project.id)
    }

    fn drag_end(&self) {
        debug!(project_id = %self.project.id, "drag ended");
    }
}
