pub mod runtime;
pub mod state;
pub mod terminal;

pub use runtime::{App, AppHandle};
pub use state::{AppState, Effect, Event, Phase, UserEvent, View};
