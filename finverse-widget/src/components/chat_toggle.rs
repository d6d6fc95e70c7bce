use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatToggleProps {
    pub avatar_url: String,
    pub on_toggle: Callback<MouseEvent>,
}

/// Floating avatar button that shows or hides the conversation panel.
#[function_component(ChatToggle)]
pub fn chat_toggle(props: &ChatToggleProps) -> Html {
    html! {
        <button
            type="button"
            class="chat-toggle fixed bottom-6 right-6 w-14 h-14 bg-gradient-to-r from-indigo-500 to-blue-500 rounded-full shadow-lg flex items-center justify-center hover:scale-110 transition-transform duration-300"
            onclick={props.on_toggle.clone()}
        >
            <img
                src={props.avatar_url.clone()}
                alt="FinVerse Bot"
                class="w-10 h-10 rounded-full border-2 border-white shadow-md"
            />
        </button>
    }
}
