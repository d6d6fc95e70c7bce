use yew::{Html, function_component, html};

use crate::components::ChatWidget;

/// Application root. The widget floats over whatever the host page renders,
/// so this is the only thing mounted here.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ChatWidget />
    }
}
