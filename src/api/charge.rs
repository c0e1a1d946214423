//! Charging-request endpoints

use super::types::{
    BatteryCapacityResponse, ChargingRequest, ChargingResponse, SetBatteryCapacityRequest,
    SetBatteryCapacityResponse,
};
use crate::error::Result;
use crate::store::ChargeStatusPatch;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Charging-session operations: submit/modify/start/stop/cancel a request,
/// read the user's status, and manage the battery profile
pub struct ChargeApi {
    transport: Arc<ApiTransport>,
}

impl ChargeApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `POST /api/charge/request`
    pub async fn submit_request(&self, request: &ChargingRequest) -> Result<ChargingResponse> {
        self.transport.post("/api/charge/request", Some(request)).await
    }

    /// `POST /api/charge/modify`
    pub async fn modify_request(&self, request: &ChargingRequest) -> Result<ChargingResponse> {
        self.transport.post("/api/charge/modify", Some(request)).await
    }

    /// `POST /api/charge/start`
    pub async fn start(&self) -> Result<ChargingResponse> {
        self.transport.post::<(), _>("/api/charge/start", None).await
    }

    /// `POST /api/charge/stop`
    pub async fn stop(&self) -> Result<ChargingResponse> {
        self.transport.post::<(), _>("/api/charge/stop", None).await
    }

    /// `POST /api/charge/cancel`
    pub async fn cancel(&self) -> Result<ChargingResponse> {
        self.transport.post::<(), _>("/api/charge/cancel", None).await
    }

    /// `GET /api/charge/status/user` — decodes straight into a merge patch
    pub async fn user_status(&self) -> Result<ChargeStatusPatch> {
        self.transport.get("/api/charge/status/user").await
    }

    /// `GET /api/charge/battery/capacity`
    pub async fn battery_capacity(&self) -> Result<BatteryCapacityResponse> {
        self.transport.get("/api/charge/battery/capacity").await
    }

    /// `POST /api/charge/battery/capacity`
    pub async fn set_battery_capacity(&self, capacity: f64) -> Result<SetBatteryCapacityResponse> {
        let body = SetBatteryCapacityRequest {
            battery_capacity: capacity,
        };
        self.transport
            .post("/api/charge/battery/capacity", Some(&body))
            .await
    }
}
