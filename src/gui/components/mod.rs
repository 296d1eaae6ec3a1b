pub mod project_input;
pub mod project_item;
pub mod project_list;

use std::fmt;

use iced::{Element, Task};

use crate::gui::AppContext;

pub use project_input::{ProjectInput, ProjectInputMessage, ProjectInputParentMessage};
pub use project_item::{ProjectItem, ProjectItemMessage};
pub use project_list::{ProjectList, ProjectListMessage, ProjectListParentMessage};

/// Messages produced by a component: either handled by the component itself
/// or forwarded to whoever hosts it.
pub enum ComponentMessage<C: Component> {
    Component(C::Message),
    Parent(C::ParentMessage),
}

impl<C: Component> Clone for ComponentMessage<C> {
    fn clone(&self) -> Self {
        match self {
            Self::Component(msg) => Self::Component(msg.clone()),
            Self::Parent(msg) => Self::Parent(msg.clone()),
        }
    }
}

impl<C: Component> fmt::Debug for ComponentMessage<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(msg) => f.debug_tuple("Component").field(msg).finish(),
            Self::Parent(msg) => f.debug_tuple("Parent").field(msg).finish(),
        }
    }
}

pub trait Component: Sized {
    type Message: fmt::Debug + Clone + Send + 'static;
    type ParentMessage: fmt::Debug + Clone + Send + 'static;

    fn view(&self) -> Element<'_, ComponentMessage<Self>>;
    fn update(
        &mut self,
        message: Self::Message,
        ctx: &mut AppContext,
    ) -> Task<ComponentMessage<Self>>;
}
