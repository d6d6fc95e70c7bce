pub(crate) mod message;
pub(crate) mod panel_state;

pub use message::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
pub use panel_state::{PanelAction, PanelState};
