//! SSR tests for the conversation panel.
//!
//! Renders the panel with fixture props and asserts on the produced markup:
//! message ordering and alignment, the thinking row, and the two submit
//! affordances.

use wasm_bindgen_test::*;
use yew::{Callback, LocalServerRenderer};

use crate::components::chat_panel::{ChatPanel, ChatPanelProps};
use crate::models::ChatMessage;

wasm_bindgen_test_configure!(run_in_browser);

const AVATAR: &str = "https://cdn-icons-png.flaticon.com/512/4712/4712102.png";

fn panel_props(messages: Vec<ChatMessage>, loading: bool) -> ChatPanelProps {
    ChatPanelProps {
        messages,
        input: String::new(),
        loading,
        avatar_url: AVATAR.to_string(),
        assistant_name: "FinVerse-AI Bot".to_string(),
        on_input: Callback::noop(),
        on_send: Callback::noop(),
        on_close: Callback::noop(),
    }
}

async fn render_panel(props: ChatPanelProps) -> String {
    LocalServerRenderer::<ChatPanel>::with_props(props)
        .hydratable(false)
        .render()
        .await
}

#[wasm_bindgen_test]
async fn messages_render_in_insertion_order_with_alignment() {
    let rendered = render_panel(panel_props(
        vec![
            ChatMessage::user("how do I save more?"),
            ChatMessage::bot("Set a monthly budget."),
        ],
        false,
    ))
    .await;

    let user_at = rendered.find("how do I save more?").unwrap();
    let bot_at = rendered.find("Set a monthly budget.").unwrap();
    assert!(user_at < bot_at);

    // User turns align right, bot turns align left with the avatar.
    assert!(rendered.contains("ml-auto"));
    assert!(rendered.contains("mr-auto"));
    assert!(rendered.contains("alt=\"bot\""));
}

#[wasm_bindgen_test]
async fn thinking_row_tracks_loading_flag() {
    let loading = render_panel(panel_props(vec![ChatMessage::user("hi")], true)).await;
    assert!(loading.contains("Thinking..."));

    let idle = render_panel(panel_props(vec![ChatMessage::user("hi")], false)).await;
    assert!(!idle.contains("Thinking..."));
}

#[wasm_bindgen_test]
async fn header_names_the_assistant() {
    let rendered = render_panel(panel_props(Vec::new(), false)).await;
    assert!(rendered.contains("FinVerse-AI Bot"));
    assert!(rendered.contains("alt=\"bot-avatar\""));
}

#[wasm_bindgen_test]
async fn composer_offers_both_submit_paths() {
    let rendered = render_panel(panel_props(Vec::new(), false)).await;

    // Text input (Enter submits) and the Send button route to the same
    // callback; both affordances must be present.
    assert!(rendered.contains("Type your question..."));
    assert!(rendered.contains("Send"));
}
