//! Client for a remote estimate evaluator.
//!
//! A deployment can point wizard sessions at another instance of this
//! service so every price comes from one authoritative pricing table.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::domain::{EstimateRequest, EstimateResult};
use crate::error::ApiError;
use crate::middleware::X_REQUEST_ID;

#[derive(Clone)]
pub struct EstimatorClient {
    client: Client,
    base_url: String,
}

/// Error body returned by the evaluator
#[derive(Debug, Deserialize)]
struct EvaluatorErrorResponse {
    message: String,
}

impl EstimatorClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::info!(base_url = base_url, "Estimator client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the request to `/calculate-estimate`.
    #[instrument(skip(self, request), fields(rooms = request.rooms.len(), exterior_items = request.exterior_items.len()))]
    pub async fn calculate(
        &self,
        request: &EstimateRequest,
        request_id: Option<&str>,
    ) -> Result<EstimateResult, ApiError> {
        let url = format!("{}/calculate-estimate", self.base_url);

        let mut req = self.client.post(&url).json(request);
        if let Some(rid) = request_id {
            req = req.header(X_REQUEST_ID, rid);
        }

        debug!(url = %url, "Estimator request");

        let response = req.send().await.map_err(|e| {
            error!(error = %e, "Estimator request failed");
            ApiError::Internal(anyhow::anyhow!("Estimator unavailable: {}", e))
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<EstimateResult>().await.map_err(|e| {
                error!(error = %e, "Failed to parse estimator response");
                ApiError::Internal(anyhow::anyhow!("Invalid estimator response: {}", e))
            });
        }

        let message = response
            .json::<EvaluatorErrorResponse>()
            .await
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("Estimator error: {}", status));

        match status {
            StatusCode::BAD_REQUEST => Err(ApiError::BadRequest(message)),
            _ => {
                error!(status = %status, message = %message, "Estimator error");
                Err(ApiError::Internal(anyhow::anyhow!(message)))
            }
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/health", self.base_url);

        self.client
            .get(&url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Estimator health check failed")?
            .error_for_status()
            .context("Estimator unhealthy")?;

        Ok(())
    }
}
