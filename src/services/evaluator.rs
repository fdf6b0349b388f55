//! Where wizard sessions get their estimates from.

use anyhow::Result;
use std::sync::Arc;

use super::EstimatorClient;
use crate::domain::{EstimateRequest, EstimateResult};
use crate::error::ApiError;
use crate::estimator::{self, PricingConfig};

#[derive(Clone)]
pub enum Evaluator {
    /// Price in-process against this service's own table
    Local(Arc<PricingConfig>),
    /// Forward to an authoritative evaluator over HTTP
    Remote(EstimatorClient),
}

impl Evaluator {
    pub async fn evaluate(
        &self,
        request: &EstimateRequest,
        request_id: Option<&str>,
    ) -> Result<EstimateResult, ApiError> {
        match self {
            Self::Local(pricing) => Ok(estimator::estimate(request, pricing)),
            Self::Remote(client) => client.calculate(request, request_id).await,
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }

    pub async fn health_check(&self) -> Result<()> {
        match self {
            Self::Local(_) => Ok(()),
            Self::Remote(client) => client.health_check().await,
        }
    }
}
