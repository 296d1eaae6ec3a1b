use iced::{
    Element, Length, Task, Theme,
    widget::{column, container, mouse_area, row, text},
};
use tracing::info;

use crate::{
    config::{AppConfig, ThemeChoice},
    core::ProjectStatus,
    gui::{
        AppContext, Message,
        components::{
            Component, ComponentMessage, ProjectInput, ProjectInputParentMessage, ProjectList,
            ProjectListParentMessage,
        },
        widgets,
    },
};

pub struct ProjboardApp {
    ctx: AppContext,
    input: ProjectInput,
    active: ProjectList,
    finished: ProjectList,
    alert: Option<String>,
    theme: ThemeChoice,
}

impl ProjboardApp {
    pub fn new(config: &AppConfig) -> Self {
        let mut ctx = AppContext::new(config.validation_rules());
        let active = ProjectList::new(ProjectStatus::Active, &mut ctx.projects);
        let finished = ProjectList::new(ProjectStatus::Finished, &mut ctx.projects);
        Self {
            ctx,
            input: ProjectInput::default(),
            active,
            finished,
            alert: None,
            theme: config.theme,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn list(&self, kind: ProjectStatus) -> &ProjectList {
        match kind {
            ProjectStatus::Active => &self.active,
            ProjectStatus::Finished => &self.finished,
        }
    }

    pub fn title(&self) -> String {
        "Projboard - Project Tracker".to_string()
    }

    pub fn theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Input(ComponentMessage::Component(msg)) => {
                self.input.update(msg, &mut self.ctx).map(Message::Input)
            }
            Message::Input(ComponentMessage::Parent(ProjectInputParentMessage::Alert(text))) => {
                self.alert = Some(text);
                Task::none()
            }
            Message::ActiveList(msg) => self.update_list(ProjectStatus::Active, msg),
            Message::FinishedList(msg) => self.update_list(ProjectStatus::Finished, msg),
            Message::DragEnd => {
                self.end_drag();
                Task::none()
            }
            Message::DismissAlert => {
                self.alert = None;
                Task::none()
            }
        }
    }

    fn update_list(
        &mut self,
        kind: ProjectStatus,
        message: ComponentMessage<ProjectList>,
    ) -> Task<Message> {
        match message {
            ComponentMessage::Component(msg) => match kind {
                ProjectStatus::Active => self
                    .active
                    .update(msg, &mut self.ctx)
                    .map(Message::ActiveList),
                ProjectStatus::Finished => self
                    .finished
                    .update(msg, &mut self.ctx)
                    .map(Message::FinishedList),
            },
            ComponentMessage::Parent(ProjectListParentMessage::DragFinished) => {
                self.end_drag();
                Task::none()
            }
        }
    }

    fn end_drag(&mut self) {
        let payload = self.ctx.drag.take();
        self.active.end_drag(payload.as_ref());
        self.finished.end_drag(payload.as_ref());
    }

    pub fn view(&self) -> Element<'_, Message> {
        let lists = row![
            self.active.view().map(Message::ActiveList),
            self.finished.view().map(Message::FinishedList),
        ]
        .spacing(20)
        .height(Length::Fill);

        let content = column![
            text("Projboard").size(32),
            self.input.view().map(Message::Input),
            lists,
        ]
        .spacing(20)
        .padding(20);

        let base = mouse_area(container(content).width(Length::Fill).height(Length::Fill))
            .on_release(Message::DragEnd);

        match &self.alert {
            Some(alert) => widgets::alert(base, alert, Message::DismissAlert),
            None => base.into(),
        }
    }
}

pub fn run(config: AppConfig) -> iced::Result {
    info!(theme = ?config.theme, "opening window");
    iced::application(
        move || ProjboardApp::new(&config),
        ProjboardApp::update,
        ProjboardApp::view,
    )
    .title(ProjboardApp::title)
    .theme(ProjboardApp::theme)
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{INVALID_INPUT_MESSAGE, ProjectStatus},
        gui::components::{ProjectInputMessage, ProjectItemMessage, ProjectListMessage},
    };

    fn submit(app: &mut ProjboardApp, title: &str, desc: &str, people: &str) {
        for msg in [
            ProjectInputMessage::TitleChanged(title.into()),
            ProjectInputMessage::DescriptionChanged(desc.into()),
            ProjectInputMessage::PeopleChanged(people.into()),
            ProjectInputMessage::Submit,
        ] {
            let _ = app.update(Message::Input(ComponentMessage::Component(msg)));
        }
    }

    #[test]
    fn new_app_registers_both_lists() {
        let app = ProjboardApp::new(&AppConfig::default());
        assert_eq!(app.context().projects.listener_count(), 2);
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn alert_is_shown_and_dismissed() {
        let mut app = ProjboardApp::new(&AppConfig::default());
        let _ = app.update(Message::Input(ComponentMessage::Parent(
            ProjectInputParentMessage::Alert(INVALID_INPUT_MESSAGE.to_string()),
        )));
        assert_eq!(app.alert(), Some(INVALID_INPUT_MESSAGE));

        let _ = app.update(Message::DismissAlert);
        assert_eq!(app.alert(), None);
    }

    #[test]
    fn drag_and_drop_between_lists() {
        let mut app = ProjboardApp::new(&AppConfig::default());
        submit(&mut app, "Roof", "Fix the leaking roof", "4");
        let id = app.context().projects.projects()[0].id.clone();

        let _ = app.update(Message::ActiveList(ComponentMessage::Component(
            ProjectListMessage::Item(id.clone(), ProjectItemMessage::DragStart),
        )));
        let _ = app.update(Message::FinishedList(ComponentMessage::Component(
            ProjectListMessage::Drop,
        )));
        let _ = app.update(Message::FinishedList(ComponentMessage::Parent(
            ProjectListParentMessage::DragFinished,
        )));

        assert!(app.context().drag.is_none());
        assert!(app.list(ProjectStatus::Active).model().assigned().is_empty());
        assert_eq!(
            app.list(ProjectStatus::Finished).model().assigned()[0].id,
            id
        );
    }

    #[test]
    fn release_elsewhere_cancels_drag() {
        let mut app = ProjboardApp::new(&AppConfig::default());
        submit(&mut app, "Roof", "Fix the leaking roof", "4");
        let id = app.context().projects.projects()[0].id.clone();

        let _ = app.update(Message::ActiveList(ComponentMessage::Component(
            ProjectListMessage::Item(id, ProjectItemMessage::DragStart),
        )));
        let _ = app.update(Message::DragEnd);

        assert!(app.context().drag.is_none());
        assert_eq!(
            app.context().projects.projects()[0].status,
            ProjectStatus::Active
        );
    }
}
