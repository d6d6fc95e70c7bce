use yew::{Html, Properties, classes, function_component, html};

use crate::models::{ChatMessage, ChatRole};

#[derive(Properties, PartialEq, Clone)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
    pub avatar_url: String,
}

const fn role_classes(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "ml-auto bg-indigo-600 text-white",
        ChatRole::Bot => "mr-auto bg-white/10 text-indigo-200 flex items-start space-x-2",
    }
}

/// One history entry. User turns sit right-aligned; bot turns sit
/// left-aligned behind the assistant avatar.
#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let classes = classes!(
        "p-2",
        "px-3",
        "rounded-xl",
        "text-sm",
        "max-w-[80%]",
        role_classes(props.message.role)
    );

    html! {
        <div class={classes}>
            { if props.message.role == ChatRole::Bot {
                html! {
                    <img
                        src={props.avatar_url.clone()}
                        alt="bot"
                        class="w-6 h-6 rounded-full border border-indigo-500/40"
                    />
                }
            } else {
                html! {}
            }}
            <span>{ props.message.text.clone() }</span>
        </div>
    }
}
