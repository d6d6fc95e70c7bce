use wasm_bindgen_futures::spawn_local;
use yew::{Callback, Html, function_component, html, use_reducer};

use super::chat_panel::ChatPanel;
use super::chat_toggle::ChatToggle;
use crate::api::ChatApiClient;
use crate::config::WidgetConfig;
use crate::models::{ChatRequest, PanelAction, PanelState};

/// Root of the widget: owns all panel state and the send operation.
///
/// Completions dispatch reducer actions, so a reply that lands after more
/// sends (or after the panel was closed) still appends to current history.
/// In-flight requests are never cancelled.
#[function_component(ChatWidget)]
pub fn chat_widget() -> Html {
    let state = use_reducer(PanelState::default);
    let config = WidgetConfig::default();

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanelAction::ToggleOpen))
    };

    let on_close = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(PanelAction::Close))
    };

    let on_input = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(PanelAction::InputChanged(value)))
    };

    let on_send = {
        let state = state.clone();
        Callback::from(move |()| {
            if !state.can_submit() {
                return;
            }

            let text = state.input.clone();
            state.dispatch(PanelAction::SendStarted { text: text.clone() });

            let state = state.clone();
            spawn_local(async move {
                let client = ChatApiClient::shared();
                let request = ChatRequest { message: text };
                match client.send_message(&request).await {
                    Ok(response) => state.dispatch(PanelAction::ReplyArrived {
                        text: response.reply_or_default(),
                    }),
                    Err(_) => state.dispatch(PanelAction::SendFailed),
                }
            });
        })
    };

    html! {
        <>
            <ChatToggle avatar_url={config.avatar_url.clone()} on_toggle={on_toggle} />
            { if state.open {
                html! {
                    <ChatPanel
                        messages={state.messages.clone()}
                        input={state.input.clone()}
                        loading={state.loading}
                        avatar_url={config.avatar_url}
                        assistant_name={config.assistant_name}
                        on_input={on_input}
                        on_send={on_send}
                        on_close={on_close}
                    />
                }
            } else {
                html! {}
            }}
        </>
    }
}
