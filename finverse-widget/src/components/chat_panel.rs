use web_sys::Element;
use yew::{
    Callback, Html, MouseEvent, Properties, function_component, html, use_effect_with,
    use_node_ref,
};
use yew_icons::{Icon, IconId};

use super::chat_composer::ChatComposer;
use super::message_bubble::MessageBubble;
use super::typing_indicator::TypingIndicator;
use crate::models::ChatMessage;

#[derive(Properties, PartialEq, Clone)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub loading: bool,
    pub avatar_url: String,
    pub assistant_name: String,
    pub on_input: Callback<String>,
    pub on_send: Callback<()>,
    pub on_close: Callback<MouseEvent>,
}

/// The chat window: header, scrollable message list, and composer.
#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let list_ref = use_node_ref();

    // Keep the list pinned to the newest entry as history grows or the
    // thinking row appears.
    {
        let list_ref = list_ref.clone();
        use_effect_with((props.messages.len(), props.loading), move |_| {
            if let Some(list) = list_ref.cast::<Element>() {
                list.set_scroll_top(list.scroll_height());
            }
            || ()
        });
    }

    html! {
        <div class="chat-panel fixed bottom-24 right-6 w-80 sm:w-96 bg-[#0b1020]/95 border border-indigo-700/40 backdrop-blur-2xl text-white rounded-2xl shadow-2xl overflow-hidden">
            <div class="bg-gradient-to-r from-indigo-600 to-blue-500 px-4 py-3 font-semibold flex items-center space-x-3">
                <img
                    src={props.avatar_url.clone()}
                    alt="bot-avatar"
                    class="w-8 h-8 rounded-full border border-white/40"
                />
                <span>{ props.assistant_name.clone() }</span>
                <button
                    type="button"
                    class="ml-auto text-white/70 hover:text-white text-sm"
                    onclick={props.on_close.clone()}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} width="16" height="16" />
                </button>
            </div>

            <div ref={list_ref} class="chat-messages p-3 h-72 overflow-y-auto space-y-2">
                { for props.messages.iter().cloned().map(|message| html! {
                    <MessageBubble message={message} avatar_url={props.avatar_url.clone()} />
                }) }
                <TypingIndicator active={props.loading} />
            </div>

            <ChatComposer
                text={props.input.clone()}
                on_text_change={props.on_input.clone()}
                on_submit={props.on_send.clone()}
                placeholder="Type your question..."
            />
        </div>
    }
}
