use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub placeholder: String,
}

/// Text input plus Send button. The Enter key and the button invoke the
/// same submit callback; the composer stays enabled while a request is in
/// flight so overlapping sends remain possible.
#[function_component(ChatComposer)]
pub fn chat_composer(props: &ChatComposerProps) -> Html {
    let on_input = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    html! {
        <div class="chat-composer border-t border-indigo-700/40 flex bg-[#0f1535]/80">
            <input
                type="text"
                class="flex-1 p-2 bg-transparent outline-none text-white placeholder-indigo-300 text-sm"
                placeholder={props.placeholder.clone()}
                value={props.text.clone()}
                oninput={on_input}
                onkeydown={on_keydown}
            />
            <button
                type="button"
                class="bg-indigo-600 hover:bg-indigo-700 px-4 text-sm font-semibold transition"
                onclick={on_click}
            >
                { "Send" }
            </button>
        </div>
    }
}
