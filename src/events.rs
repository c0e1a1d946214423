//! Server-push notification channel
//!
//! The server keeps one long-lived event stream per authenticated user and
//! pushes four payload shapes over it: per-user charge status, per-user queue
//! status, broadcast pricing changes, and pile-failure notifications. The
//! view layer owns the connection lifetime; this module supplies the address
//! construction, frame parsing and payload decoding, and the sync layer
//! routes decoded events into store mutations.

use crate::error::{ChargelinkError, Result};
use crate::store::{
    ChargeStatusPatch, LocationType, NewNotification, NotificationLevel, PricingInfoPatch,
    QueueInfoPatch,
};
use serde::Deserialize;

/// Address of the notification stream.
///
/// The stream cannot carry an Authorization header, so the bearer credential
/// is embedded as a query parameter instead.
pub fn stream_url(base_url: &str, token: &str) -> String {
    format!(
        "{}/api/notifications/connect?token={}",
        base_url.trim_end_matches('/'),
        token
    )
}

/// A pile-failure (or similar) notification pushed by the server
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    /// Server-side notification type label; its presence discriminates this
    /// shape from the status payloads
    pub notification_type: String,
    pub title: Option<String>,
    pub message: Option<String>,
    pub level: Option<NotificationLevel>,
    pub pile_number: Option<String>,
    pub request_id: Option<String>,
}

impl NotificationEvent {
    /// Convert into the store's insertion payload
    pub fn into_new_notification(self) -> NewNotification {
        NewNotification {
            level: self.level.unwrap_or(NotificationLevel::Warning),
            title: self.title.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            kind: Some(self.notification_type),
            pile_number: self.pile_number,
        }
    }
}

/// Per-user queue status as pushed over the stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatusEvent {
    pub queue_number: Option<u32>,
    pub queue_count: u32,
    pub estimated_wait: u32,
    pub location_type: LocationType,
}

impl QueueStatusEvent {
    /// Convert into the store's merge patch
    pub fn into_patch(self) -> QueueInfoPatch {
        QueueInfoPatch {
            queue_number: self.queue_number,
            queue_count: Some(self.queue_count),
            estimated_wait: Some(self.estimated_wait),
            location_type: Some(self.location_type),
        }
    }
}

/// Pricing broadcast as pushed over the stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingEvent {
    pub price_type: String,
    pub unit_price: f64,
    pub service_fee_rate: Option<f64>,
    pub current_period: String,
}

impl PricingEvent {
    /// Convert into the store's merge patch
    pub fn into_patch(self) -> PricingInfoPatch {
        PricingInfoPatch {
            current_period: Some(self.current_period),
            unit_price: Some(self.unit_price),
            service_fee_rate: self.service_fee_rate,
            price_type: Some(self.price_type),
        }
    }
}

/// One decoded server-push event, discriminated by payload shape.
///
/// Variant order matters: the charge-status patch is all-optional and
/// therefore matches any object, so it must come last.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ServerEvent {
    Notification(NotificationEvent),
    Queue(QueueStatusEvent),
    Pricing(PricingEvent),
    ChargeStatus(ChargeStatusPatch),
}

/// Decode one event payload
pub fn parse_event(data: &str) -> Result<ServerEvent> {
    serde_json::from_str(data)
        .map_err(|e| ChargelinkError::generic(format!("Unrecognized event payload: {}", e)))
}

/// Extract the data payload from one SSE frame.
///
/// Multiple `data:` lines in a frame are joined with newlines per the SSE
/// format; comment and field lines are ignored. Returns None for frames
/// without data (keep-alives).
pub fn parse_sse_data(frame: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for line in frame.lines() {
        if let Some(rest) = line.strip_prefix("data:") {
            parts.push(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
