pub mod action;
pub mod app_state;
pub mod reducer;
pub mod session;

pub use action::Action;
pub use app_state::{AppState, ImmersiveMode, PersistedState, Role, View};
pub use reducer::reduce;
pub use session::Session;
