use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or(false)]
    pub active: bool,
    #[prop_or_default]
    pub label: Option<String>,
}

/// Transient "thinking" row shown after the last message while a request is
/// in flight. Never part of the message history.
#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    if !props.active {
        return Html::default();
    }

    let label = props.label.clone().unwrap_or_else(|| "Thinking...".to_string());

    html! {
        <div class="typing-indicator text-indigo-400 italic text-sm flex items-center space-x-2">
            <div class="w-2 h-2 bg-indigo-400 rounded-full animate-bounce"></div>
            <div class="w-2 h-2 bg-indigo-400 rounded-full animate-bounce delay-100"></div>
            <div class="w-2 h-2 bg-indigo-400 rounded-full animate-bounce delay-200"></div>
            <span>{ label }</span>
        </div>
    }
}
