use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};

use crate::config::WidgetConfig;
use crate::models::{ChatRequest, ChatResponse};

thread_local! {
    static SHARED_CLIENT: OnceCell<ChatApiClient> = const { OnceCell::new() };
}

/// Lightweight HTTP client for the chat backend.
#[derive(Clone, Debug)]
pub struct ChatApiClient {
    base_url: String,
    client: Client,
}

impl ChatApiClient {
    /// Create a new client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Per-tab shared instance, configured from [`WidgetConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&WidgetConfig::default().api_base_url))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send one chat turn. A single attempt; non-2xx statuses and undecodable
    /// bodies surface as `Err` alongside transport failures.
    pub async fn send_message(&self, payload: &ChatRequest) -> Result<ChatResponse, Error> {
        let url = self.api_url("chat");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }
}
