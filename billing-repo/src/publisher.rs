//! Message publisher adapters.
//!
//! `HttpQueuePublisher` treats the channel name as a queue endpoint URL and
//! POSTs the payload to it. `InMemoryPublisher` keeps messages in publish
//! order for local runs and tests.

use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use billing_types::{MessagePublisher, PublishError};

// ─────────────────────────────────────────────────────────────────────────────
// HTTP queue publisher
// ─────────────────────────────────────────────────────────────────────────────

/// Publishes by POSTing the payload to the channel URL.
///
/// No retries: a network error or non-2xx response is returned as-is.
/// A channel that is not an absolute URL is reported as unknown without
/// any request being made.
pub struct HttpQueuePublisher {
    client: reqwest::Client,
}

impl HttpQueuePublisher {
    /// Creates a publisher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Creates a publisher around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessagePublisher for HttpQueuePublisher {
    #[instrument(skip(self, payload), fields(bytes = payload.len()))]
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        let url = reqwest::Url::parse(channel)
            .map_err(|_| PublishError::UnknownChannel(channel.to_string()))?;

        let resp = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| PublishError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            debug!("Queue accepted message with {}", status);
            Ok(())
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(PublishError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory publisher
// ─────────────────────────────────────────────────────────────────────────────

/// A message captured by [`InMemoryPublisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub channel: String,
    pub payload: Vec<u8>,
}

/// Records every published message in order.
///
/// Channels marked with [`InMemoryPublisher::fail_channel`] refuse messages.
#[derive(Default)]
pub struct InMemoryPublisher {
    messages: Mutex<Vec<PublishedMessage>>,
    failing: Mutex<HashSet<String>>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later publish to `channel` fail with a transport error.
    pub fn fail_channel(&self, channel: impl Into<String>) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(channel.into());
        }
    }

    /// Returns a snapshot of the messages published so far.
    pub fn messages(&self) -> Vec<PublishedMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Messages published to one channel, in order.
    pub fn messages_for(&self, channel: &str) -> Vec<PublishedMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.channel == channel)
            .collect()
    }
}

#[async_trait]
impl MessagePublisher for InMemoryPublisher {
    async fn publish(&self, channel: &str, payload: Vec<u8>) -> Result<(), PublishError> {
        let refused = self
            .failing
            .lock()
            .map(|failing| failing.contains(channel))
            .unwrap_or(false);
        if refused {
            return Err(PublishError::Transport(format!(
                "channel {} is unavailable",
                channel
            )));
        }

        let mut messages = self
            .messages
            .lock()
            .map_err(|_| PublishError::Transport("publisher lock poisoned".into()))?;
        messages.push(PublishedMessage {
            channel: channel.to_string(),
            payload,
        });
        Ok(())
    }
}
