use std::time::Duration;

use reqwest::{Client, Proxy, Response};
use serde::Serialize;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// JSON body of the `sendMessage` bot call.
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Client for delivering text messages to a chat through a bot endpoint.
#[derive(Debug, Clone)]
pub struct BotClient {
    bot_token: String,
    chat_id: String,
    base_url: String,
    http: Client,
}

impl BotClient {
    /// Build a client, optionally routing traffic through an HTTP(S) proxy.
    ///
    /// An unparsable proxy URL fails here, before any network call is made.
    pub fn new(bot_token: String, chat_id: String, proxy_url: Option<&str>) -> Result<Self> {
        Self::with_base_url(bot_token, chat_id, proxy_url, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Used by tests.
    pub fn with_base_url(
        bot_token: String,
        chat_id: String,
        proxy_url: Option<&str>,
        base_url: String,
    ) -> Result<Self> {
        let mut builder = Client::builder().timeout(REQUEST_TIMEOUT);

        if let Some(url) = proxy_url {
            let proxy = Proxy::all(url)
                .map_err(|e| Error::Config(format!("invalid proxy URL '{url}': {e}")))?;
            builder = builder.proxy(proxy);
            tracing::info!(proxy = url, "routing bot traffic through proxy");
        }

        let http = builder.build()?;

        Ok(Self { bot_token, chat_id, base_url, http })
    }

    /// Deliver `text` to the configured chat.
    ///
    /// Returns the raw response; interpreting the delivery status is left to
    /// the caller.
    pub async fn send_message(&self, text: &str) -> Result<Response> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.bot_token);
        let payload = SendMessage { chat_id: &self.chat_id, text };

        tracing::debug!(chat_id = %self.chat_id, "delivering message to bot endpoint");

        let res = self.http.post(&url).json(&payload).send().await?;

        Ok(res)
    }
}
