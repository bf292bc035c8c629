use crate::error::{GenError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// A request accepted by the provider queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedRequest {
    pub model_id: String,
    pub request_id: String,
    pub status_url: String,
    pub response_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueueStatus {
    InQueue {
        #[serde(default)]
        queue_position: Option<u32>,
    },
    InProgress,
    Completed,
}

/// Submit / poll / fetch primitives of an asynchronous generation queue.
#[async_trait]
pub trait ProviderQueue: Send + Sync {
    async fn submit(&self, model_id: &str, arguments: Value) -> Result<QueuedRequest>;

    async fn status(&self, request: &QueuedRequest) -> Result<QueueStatus>;

    async fn result(&self, request: &QueuedRequest) -> Result<Value>;

    fn poll_interval(&self) -> Duration {
        Duration::from_millis(500)
    }
}

/// Handle returned by [`QueueClient::submit`]; `get` waits for the result.
pub struct RequestHandle {
    queue: Arc<dyn ProviderQueue>,
    request: QueuedRequest,
}

impl RequestHandle {
    pub fn request_id(&self) -> &str {
        &self.request.request_id
    }

    /// Polls until the request completes, then fetches its output. No timeout.
    pub async fn get(self) -> Result<Value> {
        let interval = self.queue.poll_interval();
        loop {
            match self.queue.status(&self.request).await? {
                QueueStatus::Completed => break,
                QueueStatus::InQueue { queue_position } => {
                    log::debug!(
                        "{} queued at position {:?}",
                        self.request.request_id,
                        queue_position
                    );
                }
                QueueStatus::InProgress => {
                    log::debug!("{} in progress", self.request.request_id);
                }
            }
            tokio::time::sleep(interval).await;
        }

        log::info!(
            "Request {} for {} completed",
            self.request.request_id,
            self.request.model_id
        );
        self.queue.result(&self.request).await
    }
}

#[derive(Clone)]
pub struct QueueClient {
    queue: Arc<dyn ProviderQueue>,
}

impl QueueClient {
    pub fn new(queue: Arc<dyn ProviderQueue>) -> Self {
        Self { queue }
    }

    pub async fn submit(&self, model_id: &str, arguments: Value) -> Result<RequestHandle> {
        log::info!("Submitting request to model: {}", model_id);
        let request = self.queue.submit(model_id, arguments).await?;
        log::debug!("Queued {} as {}", model_id, request.request_id);

        Ok(RequestHandle {
            queue: self.queue.clone(),
            request,
        })
    }

    pub async fn subscribe(&self, model_id: &str, arguments: Value) -> Result<Value> {
        self.submit(model_id, arguments).await?.get().await
    }
}

/// Pulls `field` out of a result payload and decodes it.
pub(crate) fn take_field<T: serde::de::DeserializeOwned>(
    mut payload: Value,
    field: &str,
) -> Result<T> {
    let value = payload
        .get_mut(field)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| GenError::ResponseError(format!("Missing '{}' in provider result", field)))?;

    serde_json::from_value(value).map_err(|e| GenError::ResponseError(e.to_string()))
}
