use crate::{
    config::FalConfig,
    error::{GenError, Result},
    fal::queue::{ProviderQueue, QueueStatus, QueuedRequest},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    request_id: String,
    #[serde(default)]
    status_url: Option<String>,
    #[serde(default)]
    response_url: Option<String>,
}

/// fal.ai queue REST API (`POST {queue}/{model}`, then poll `status_url`).
pub struct FalHttpQueue {
    client: Client,
    api_key: String,
    queue_url: String,
    poll_interval: Duration,
}

impl FalHttpQueue {
    pub fn new(config: FalConfig) -> Self {
        let api_key = config.api_key.unwrap_or_else(|| {
            log::warn!("FAL_KEY is not set, provider calls will be rejected");
            String::new()
        });

        Self {
            client: Client::new(),
            api_key,
            queue_url: config.queue_url.trim_end_matches('/').to_string(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(reqwest::header::AUTHORIZATION, format!("Key {}", self.api_key))
    }

    async fn send(&self, request: RequestBuilder, model_id: &str) -> Result<Response> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| GenError::RequestError(format!("{} request failed: {}", model_id, e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("Provider returned {} for {}: {}", status, model_id, body);
        Err(GenError::ProviderError(format!(
            "{} returned {}: {}",
            model_id, status, body
        )))
    }
}

#[async_trait]
impl ProviderQueue for FalHttpQueue {
    async fn submit(&self, model_id: &str, arguments: Value) -> Result<QueuedRequest> {
        let url = format!("{}/{}", self.queue_url, model_id);
        log::debug!("POST {} {}", url, arguments);

        let response = self.send(self.client.post(&url).json(&arguments), model_id).await?;
        let submitted: SubmitResponse = response
            .json()
            .await
            .map_err(|e| GenError::ResponseError(e.to_string()))?;

        let base = format!("{}/requests/{}", url, submitted.request_id);
        Ok(QueuedRequest {
            model_id: model_id.to_string(),
            status_url: submitted
                .status_url
                .unwrap_or_else(|| format!("{}/status", base)),
            response_url: submitted.response_url.unwrap_or(base),
            request_id: submitted.request_id,
        })
    }

    async fn status(&self, request: &QueuedRequest) -> Result<QueueStatus> {
        let response = self
            .send(self.client.get(&request.status_url), &request.model_id)
            .await?;
        response
            .json()
            .await
            .map_err(|e| GenError::ResponseError(format!("Unreadable queue status: {}", e)))
    }

    async fn result(&self, request: &QueuedRequest) -> Result<Value> {
        let response = self
            .send(self.client.get(&request.response_url), &request.model_id)
            .await?;
        response
            .json()
            .await
            .map_err(|e| GenError::ResponseError(e.to_string()))
    }

    fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}
