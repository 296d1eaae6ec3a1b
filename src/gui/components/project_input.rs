use iced::{
    Element, Length, Task,
    widget::{button, column, container, text, text_input},
};
use iced_widget::container::bordered_box;
use tracing::debug;

use crate::{
    core::ProjectForm,
    gui::{
        AppContext,
        components::{Component, ComponentMessage},
    },
};

/// The "new project" form.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    form: ProjectForm,
}

#[derive(Debug, Clone)]
pub enum ProjectInputMessage {
    TitleChanged(String),
    DescriptionChanged(String),
    PeopleChanged(String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum ProjectInputParentMessage {
    Alert(String),
}

impl ProjectInput {
    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    /// Adds the project when the form is valid and clears it. Otherwise
    /// returns the alert text to show, leaving the form untouched.
    pub fn submit(&mut self, ctx: &mut AppContext) -> Option<String> {
        match self.form.gather(&ctx.rules) {
            Ok(new_project) => {
                ctx.projects.add_project(new_project);
                self.form.clear();
                None
            }
            Err(err) => {
                debug!(detail = %err.detail(), "rejected project input");
                Some(err.to_string())
            }
        }
    }
}

fn local(message: ProjectInputMessage) -> ComponentMessage<ProjectInput> {
    ComponentMessage::Component(message)
}

impl Component for ProjectInput {
    type Message = ProjectInputMessage;
    type ParentMessage = ProjectInputParentMessage;

    fn view(&self) -> Element<'_, ComponentMessage<Self>> {
        let content = column![
            text("Title"),
            text_input("Title", &self.form.title)
                .on_input(|value| local(ProjectInputMessage::TitleChanged(value)))
                .on_submit(local(ProjectInputMessage::Submit)),
            text("Description"),
            text_input("Description", &self.form.description)
                .on_input(|value| local(ProjectInputMessage::DescriptionChanged(value)))
                .on_submit(local(ProjectInputMessage::Submit)),
            text("People"),
            text_input("People", &self.form.people)
                .on_input(|value| local(ProjectInputMessage::PeopleChanged(value)))
                .on_submit(local(ProjectInputMessage::Submit)),
            button("ADD PROJECT").on_press(local(ProjectInputMessage::Submit)),
        ]
        .spacing(8);

        container(content)
            .padding(16)
            .width(Length::Fill)
            .style(bordered_box)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> Task<ComponentMessage<Self>> {
        match message {
            ProjectInputMessage::TitleChanged(value) => {
                self.form.title = value;
                Task::none()
            }
            ProjectInputMessage::DescriptionChanged(value) => {
                self.form.description = value;
                Task::none()
            }
            ProjectInputMessage::PeopleChanged(value) => {
                self.form.people = value;
                Task::none()
            }
            ProjectInputMessage::Submit => match self.submit(ctx) {
                Some(alert) => Task::done(ComponentMessage::Parent(
                    ProjectInputParentMessage::Alert(alert),
                )),
                None => Task::none(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{INVALID_INPUT_MESSAGE, ProjectStatus};

    fn fill(input: &mut ProjectInput, ctx: &mut AppContext, title: &str, desc: &str, people: &str) {
        let _ = input.update(ProjectInputMessage::TitleChanged(title.into()), ctx);
        let _ = input.update(ProjectInputMessage::DescriptionChanged(desc.into()), ctx);
        let _ = input.update(ProjectInputMessage::PeopleChanged(people.into()), ctx);
    }

    #[test]
    fn submit_adds_active_project_and_clears_form() {
        let mut ctx = AppContext::default();
        let mut input = ProjectInput::default();
        fill(&mut input, &mut ctx, "Garden", "Plant the tomatoes", "2");

        let _ = input.update(ProjectInputMessage::Submit, &mut ctx);

        assert_eq!(ctx.projects.len(), 1);
        assert_eq!(ctx.projects.projects()[0].status, ProjectStatus::Active);
        assert_eq!(input.form(), &ProjectForm::default());
    }

    #[test]
    fn invalid_submit_keeps_form_and_store() {
        let mut ctx = AppContext::default();
        let mut input = ProjectInput::default();
        fill(&mut input, &mut ctx, "Garden", "tiny", "2");

        let _ = input.update(ProjectInputMessage::Submit, &mut ctx);

        assert!(ctx.projects.is_empty());
        assert_eq!(input.form().description, "tiny");
    }

    #[test]
    fn invalid_submit_raises_alert() {
        let mut ctx = AppContext::default();
        let mut input = ProjectInput::default();
        fill(&mut input, &mut ctx, "", "", "");

        let alert = input.submit(&mut ctx);

        assert_eq!(alert.as_deref(), Some(INVALID_INPUT_MESSAGE));
        assert!(ctx.projects.is_empty());
    }

    #[test]
    fn valid_submit_raises_no_alert() {
        let mut ctx = AppContext::default();
        let mut input = ProjectInput::default();
        fill(&mut input, &mut ctx, "Garden", "Plant the tomatoes", "2");

        assert_eq!(input.submit(&mut ctx), None);
        assert_eq!(ctx.projects.len(), 1);
    }
}
