//! Administration endpoints
//!
//! Pile and system management for operator accounts. Payloads stay opaque;
//! the server owns their shape and the view renders them directly.

use crate::error::Result;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Operator-only management operations
pub struct AdminApi {
    transport: Arc<ApiTransport>,
}

impl AdminApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/admin/piles/status`
    pub async fn piles_status(&self) -> Result<serde_json::Value> {
        self.transport.get("/api/admin/piles/status").await
    }

    /// `GET /api/admin/pile/{pileId}`
    pub async fn pile_detail(&self, pile_id: u32) -> Result<serde_json::Value> {
        self.transport.get(&format!("/api/admin/pile/{}", pile_id)).await
    }

    /// `POST /api/admin/pile/{pileId}/toggle`
    pub async fn toggle_pile(&self, pile_id: u32) -> Result<serde_json::Value> {
        self.transport
            .post::<(), _>(&format!("/api/admin/pile/{}/toggle", pile_id), None)
            .await
    }

    /// `GET /api/admin/system-config`
    pub async fn system_config(&self) -> Result<serde_json::Value> {
        self.transport.get("/api/admin/system-config").await
    }

    /// `POST /api/admin/system-config`
    pub async fn update_system_config(&self, config: &serde_json::Value) -> Result<serde_json::Value> {
        self.transport.post("/api/admin/system-config", Some(config)).await
    }

    /// `GET /api/admin/report?startDate=&endDate=`
    pub async fn report(&self, start_date: &str, end_date: &str) -> Result<serde_json::Value> {
        self.transport
            .get(&format!(
                "/api/admin/report?startDate={}&endDate={}",
                start_date, end_date
            ))
            .await
    }

    /// `POST /api/admin/piles/add?pileType=`
    pub async fn add_pile(&self, pile_type: &str) -> Result<serde_json::Value> {
        self.transport
            .post::<(), _>(&format!("/api/admin/piles/add?pileType={}", pile_type), None)
            .await
    }

    /// `DELETE /api/admin/piles/{pileNumber}`
    pub async fn delete_pile(&self, pile_number: &str) -> Result<serde_json::Value> {
        self.transport
            .delete(&format!("/api/admin/piles/{}", pile_number))
            .await
    }
}
