pub(crate) mod chat_composer;
pub(crate) mod chat_panel;
#[cfg(all(test, target_arch = "wasm32"))]
mod chat_panel_test;
pub(crate) mod chat_toggle;
pub(crate) mod chat_widget;
pub(crate) mod message_bubble;
pub(crate) mod typing_indicator;

// Re-export components for convenience
pub use chat_panel::ChatPanel;
pub use chat_widget::ChatWidget;
pub use typing_indicator::TypingIndicator;
