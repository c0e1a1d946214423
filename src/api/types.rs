//! Wire types for the reservation server's REST contract
//!
//! Field names follow the server's JSON (camelCase). Status payloads are not
//! here: they decode directly into the store's patch types.

use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token to persist and attach to subsequent requests
    pub token: String,
    /// Account type label (e.g. user or admin)
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

/// Body of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "type")]
    pub account_type: String,
}

/// Response of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: Option<String>,
}

/// Body of `POST /api/charge/request` and `POST /api/charge/modify`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingRequest {
    /// Charging mode: `fast` or `slow`
    pub charging_mode: String,
    /// Requested charge amount (kWh)
    pub charging_amount: f64,
}

/// Response of the charging action endpoints (request/modify/start/stop/cancel)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingResponse {
    pub request_id: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Response of `GET /api/charge/battery/capacity`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryCapacityResponse {
    /// Configured battery capacity (kWh), null when the user never set one
    pub battery_capacity: Option<f64>,
}

/// Body of `POST /api/charge/battery/capacity`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBatteryCapacityRequest {
    pub battery_capacity: f64,
}

/// Response of `POST /api/charge/battery/capacity`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetBatteryCapacityResponse {
    pub success: bool,
    pub message: Option<String>,
}
