mod app;
mod message;
mod state;
pub mod components;
mod widgets;

pub use app::{ProjboardApp, run};
pub use message::Message;
pub use state::AppContext;
