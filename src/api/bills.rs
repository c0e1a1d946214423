//! Billing endpoints
//!
//! Bill payloads stay opaque to this layer; the view renders them as-is.

use crate::error::Result;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Billing queries for the current user
pub struct BillsApi {
    transport: Arc<ApiTransport>,
}

impl BillsApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/bills/user/current`
    pub async fn current_user(&self) -> Result<serde_json::Value> {
        self.transport.get("/api/bills/user/current").await
    }

    /// `GET /api/bills/{billId}`
    pub async fn by_id(&self, bill_id: &str) -> Result<serde_json::Value> {
        self.transport.get(&format!("/api/bills/{}", bill_id)).await
    }
}
