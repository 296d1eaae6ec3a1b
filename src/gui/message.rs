use crate::gui::components::{ComponentMessage, ProjectInput, ProjectList};

#[derive(Debug, Clone)]
pub enum Message {
    Input(ComponentMessage<ProjectInput>),
    ActiveList(ComponentMessage<ProjectList>),
    FinishedList(ComponentMessage<ProjectList>),
    DragEnd,
    DismissAlert,
}
