//! Tariff endpoints

use crate::error::Result;
use crate::store::PricingInfoPatch;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Current-tariff queries
pub struct PricingApi {
    transport: Arc<ApiTransport>,
}

impl PricingApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/pricing/current` — decodes straight into a merge patch
    pub async fn current(&self) -> Result<PricingInfoPatch> {
        self.transport.get("/api/pricing/current").await
    }
}
