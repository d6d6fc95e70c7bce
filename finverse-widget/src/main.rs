mod api;
#[cfg(test)]
mod api_test;
mod app;
#[cfg(all(test, target_arch = "wasm32"))]
mod app_test;
mod components;
mod config;
mod models;

use app::App;
use yew::Renderer;

fn main() {
    // Surface panic payloads in the browser console.
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("Unknown panic");
        web_sys::console::error_1(&format!("Panic: {payload}").into());
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting FinVerse chat widget".into());

    // Mount over the host page body.
    Renderer::<App>::with_root(
        web_sys::window()
            .expect("window")
            .document()
            .expect("document")
            .get_elements_by_tag_name("body")
            .item(0)
            .expect("body element"),
    )
    .render();
}
