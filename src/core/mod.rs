pub mod drag;
pub mod form;
pub mod list;
pub mod project;
pub mod state;
pub mod validation;

pub use drag::{DragPayload, DragTarget, Draggable, MIME_TEXT_PLAIN};
pub use form::{Field, FieldError, INVALID_INPUT_MESSAGE, InvalidInput, ProjectForm};
pub use list::ProjectListModel;
pub use project::{NewProject, Project, ProjectId, ProjectStatus};
pub use state::{Listener, ProjectState, State, StateError};
pub use validation::{FieldValue, Validatable, Violation, validate};
