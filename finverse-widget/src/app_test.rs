use wasm_bindgen_test::*;
use yew::LocalServerRenderer;

use crate::app::App;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn app_renders_closed_widget() {
    let rendered = LocalServerRenderer::<App>::new()
        .hydratable(false)
        .render()
        .await;

    // Only the floating toggle is present until it is activated.
    assert!(rendered.contains("chat-toggle"));
    assert!(rendered.contains("alt=\"FinVerse Bot\""));
    assert!(!rendered.contains("chat-panel"));
}

#[wasm_bindgen_test]
async fn toggle_carries_avatar_image() {
    let rendered = LocalServerRenderer::<App>::new()
        .hydratable(false)
        .render()
        .await;

    assert!(rendered.contains("<img"));
    assert!(rendered.contains("flaticon.com"));
}
