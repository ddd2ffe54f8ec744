use crate::{
    constants::CHAT_PATH,
    errors::{ChatError, ChatResult},
    logging::log_api_call,
    models::{ApiCallLog, ChatRequest, ChatResponse},
};
use chrono::Utc;
use futures::future::BoxFuture;
use reqwest::Client;
use std::time::Instant;

/// The remote backend that turns a user message into a reply.
pub trait ChatService: Send + Sync {
    fn send_message<'a>(&'a self, message: &'a str) -> BoxFuture<'a, ChatResult<String>>;
}

/// Chat service reached over HTTP: `POST <base>/chat` with `{"message": ..}`,
/// answered by `{"response": ..}`.
#[derive(Debug, Clone)]
pub struct HttpChatService {
    client: Client,
    endpoint: String,
}

impl HttpChatService {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH);
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one message and returns the bot's reply.
    /// Transport errors, non-2xx statuses and bad bodies all come back as
    /// `ServiceUnavailable`.
    pub async fn get_reply(&self, message: &str) -> ChatResult<String> {
        let start_time = Instant::now();

        let result = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.record_call(message, None, start_time);
                return Err(ChatError::service_unavailable(format!(
                    "Request failed: {}",
                    e
                )));
            }
        };

        let status = response.status();
        self.record_call(message, Some(status.as_u16()), start_time);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::service_unavailable(format!(
                "Service returned error: {} - {}",
                status, error_text
            )));
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            ChatError::service_unavailable(format!("Failed to parse service response: {}", e))
        })?;

        Ok(body.response)
    }

    fn record_call(&self, message: &str, status: Option<u16>, start_time: Instant) {
        let snippet: String = message.chars().take(40).collect();
        log_api_call(&ApiCallLog {
            timestamp: Utc::now(),
            endpoint: self.endpoint.clone(),
            request_summary: format!("chat \"{}\"", snippet),
            response_status: status,
            response_time_ms: start_time.elapsed().as_millis(),
        });
    }
}

impl ChatService for HttpChatService {
    fn send_message<'a>(&'a self, message: &'a str) -> BoxFuture<'a, ChatResult<String>> {
        Box::pin(self.get_reply(message))
    }
}
