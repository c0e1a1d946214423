//! Status store for Chargelink
//!
//! The stateful core of the client: session, queue, pricing, battery and
//! notification state, the partial-merge entry points fed by server responses
//! and push events, and the derived predicates that gate user actions.
//!
//! Lifecycle transitions here are local conveniences that also clear dependent
//! fields; they never call the server. Callers pair them with the matching
//! endpoint operation or with an incoming server-pushed update.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle stage of the user's charging request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeStatus {
    NotCharging,
    Waiting,
    PriorityWaiting,
    Charging,
    Completed,
    Canceled,
}

/// Server-reported availability of an assigned charging pile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PileStatus {
    Available,
    Charging,
    Unavailable,
    /// Tolerated for forward compatibility with new server-side states
    #[serde(other)]
    Unknown,
}

/// Where the user's vehicle is currently modeled as being
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    None,
    WaitingArea,
    ChargingPile,
}

/// Severity of a pushed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// The user's current charging-request lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeSession {
    pub status: ChargeStatus,
    /// Battery level (kWh)
    pub current_power: f64,
    /// Energy delivered this session (kWh)
    pub charged_amount: f64,
    /// Battery total capacity, > 0 once known (kWh)
    pub total_capacity: f64,
    /// Requested charge amount (kWh)
    pub requested_amount: f64,
    /// Remaining charging time (minutes)
    pub remaining_time: u32,
    /// Assigned pile, present only while WAITING/CHARGING with an assignment
    pub charging_pile_id: Option<u32>,
    pub charging_pile_status: Option<PileStatus>,
    pub is_queue_first: bool,
    /// Fee accrued so far this session (currency units)
    pub current_total_fee: f64,
    /// Projected total fee for the session (currency units)
    pub estimated_total_fee: f64,
}

impl Default for ChargeSession {
    fn default() -> Self {
        Self {
            status: ChargeStatus::NotCharging,
            current_power: 0.0,
            charged_amount: 0.0,
            total_capacity: 0.0,
            requested_amount: 0.0,
            remaining_time: 0,
            charging_pile_id: None,
            charging_pile_status: None,
            is_queue_first: false,
            current_total_fee: 0.0,
            estimated_total_fee: 0.0,
        }
    }
}

/// The user's position in the waiting queue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuePosition {
    /// Assigned queue number, 0 = unassigned
    pub queue_number: u32,
    /// Cars ahead of this one
    pub queue_count: u32,
    /// Estimated wait (minutes)
    pub estimated_wait: u32,
    pub location_type: LocationType,
}

impl Default for QueuePosition {
    fn default() -> Self {
        Self {
            queue_number: 0,
            queue_count: 0,
            estimated_wait: 0,
            location_type: LocationType::None,
        }
    }
}

/// Current tariff as last reported by the server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSnapshot {
    pub current_period: String,
    /// Price per kWh (currency units)
    pub unit_price: f64,
    /// Service fee per kWh (currency units)
    pub service_fee_rate: f64,
    pub price_type: String,
}

impl Default for PricingSnapshot {
    fn default() -> Self {
        Self {
            current_period: String::new(),
            unit_price: 0.0,
            service_fee_rate: 0.0,
            price_type: String::new(),
        }
    }
}

impl PricingSnapshot {
    /// Combined unit price plus service fee, formatted to two decimals
    pub fn total_price_per_unit(&self) -> String {
        format!("{:.2}", self.unit_price + self.service_fee_rate)
    }
}

/// A notification retained by the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Strictly increasing per session, assigned at insertion
    pub id: u64,
    pub level: NotificationLevel,
    /// Milliseconds since epoch, assigned at insertion
    pub timestamp: i64,
    pub title: String,
    pub message: String,
    /// Server-side notification type label, when pushed over the stream
    pub kind: Option<String>,
    /// Pile involved, for pile-failure notifications
    pub pile_number: Option<String>,
}

/// Caller-supplied payload for a new notification
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub kind: Option<String>,
    pub pile_number: Option<String>,
}

impl NewNotification {
    /// Convenience constructor for a plain notification
    pub fn new(level: NotificationLevel, title: &str, message: &str) -> Self {
        Self {
            level,
            title: title.to_string(),
            message: message.to_string(),
            kind: None,
            pile_number: None,
        }
    }
}

// Wire payloads may carry an explicit `null` for nullable fields; an absent
// key must leave the stored value untouched while `null` clears it. Wrapping
// in an outer Some at deserialization keeps the two cases distinguishable.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial update for [`ChargeSession`]; also the wire shape of
/// `GET /api/charge/status/user` and of charge-status push events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeStatusPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ChargeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_power: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charged_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_capacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<u32>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub charging_pile_id: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_queue_first: Option<bool>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub charging_pile_status: Option<Option<PileStatus>>,
    /// Set by the server when it completed the session on its own; consumed
    /// by the event router, never merged into state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_auto_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_total_fee: Option<f64>,
}

/// Partial update for [`QueuePosition`]; also the wire shape of
/// `GET /api/queue/user` and of queue push events
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_wait: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_type: Option<LocationType>,
}

/// Partial update for [`PricingSnapshot`]; also the wire shape of
/// `GET /api/pricing/current` and of pricing broadcasts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_type: Option<String>,
}

/// The client-side state container.
///
/// Owns every entity for the lifetime of the process; constructed with all
/// fields at documented defaults and reset only through explicit lifecycle
/// transitions. Consumers receive it by injection, there is no implicit
/// global instance.
pub struct ChargeStore {
    pub session: ChargeSession,
    pub queue: QueuePosition,
    pub pricing: PricingSnapshot,
    /// User battery capacity (kWh), unset until fetched or configured
    pub battery_capacity: Option<f64>,
    notifications: Vec<Notification>,
    notification_id_counter: u64,
    max_notifications: usize,
}

impl ChargeStore {
    /// Create a store with all entities at their defaults
    pub fn new() -> Self {
        Self::with_notification_limit(10)
    }

    /// Create a store with a custom notification retention limit
    pub fn with_notification_limit(max_notifications: usize) -> Self {
        Self {
            session: ChargeSession::default(),
            queue: QueuePosition::default(),
            pricing: PricingSnapshot::default(),
            battery_capacity: None,
            notifications: Vec::new(),
            notification_id_counter: 0,
            max_notifications,
        }
    }

    // ---- lifecycle transitions -------------------------------------------

    /// Enter CHARGING. The caller must have verified [`can_start_charge`](Self::can_start_charge)
    pub fn start_charging(&mut self) {
        self.session.status = ChargeStatus::Charging;
    }

    /// Enter COMPLETED and clear pile assignment and queue position
    pub fn stop_charging(&mut self) {
        self.session.status = ChargeStatus::Completed;
        self.clear_assignment();
    }

    /// Return to NOT_CHARGING, clearing session numerics and queue position.
    /// Battery capacity and pricing are kept.
    pub fn reset_charging(&mut self) {
        self.session.status = ChargeStatus::NotCharging;
        self.session.current_power = 0.0;
        self.session.total_capacity = 0.0;
        self.session.remaining_time = 0;
        self.clear_assignment();
    }

    /// Enter WAITING
    pub fn set_waiting(&mut self) {
        self.session.status = ChargeStatus::Waiting;
    }

    /// Enter CANCELED and clear pile assignment and queue position
    pub fn set_canceled(&mut self) {
        self.session.status = ChargeStatus::Canceled;
        self.clear_assignment();
    }

    /// Enter COMPLETED without clearing: models a server-driven completion
    /// whose remaining fields arrive via a subsequent merge
    pub fn handle_auto_complete(&mut self) {
        self.session.status = ChargeStatus::Completed;
    }

    fn clear_assignment(&mut self) {
        self.session.charging_pile_id = None;
        self.session.is_queue_first = false;
        self.session.charging_pile_status = None;
        self.queue = QueuePosition::default();
    }

    // ---- partial merges --------------------------------------------------

    /// Merge a charge-status patch: present fields overwrite, absent fields
    /// stay untouched
    pub fn update_charge_status(&mut self, patch: &ChargeStatusPatch) {
        if let Some(status) = patch.status {
            self.session.status = status;
        }
        if let Some(v) = patch.current_power {
            self.session.current_power = v;
        }
        if let Some(v) = patch.charged_amount {
            self.session.charged_amount = v;
        }
        if let Some(v) = patch.total_capacity {
            self.session.total_capacity = v;
        }
        if let Some(v) = patch.requested_amount {
            self.session.requested_amount = v;
        }
        if let Some(v) = patch.remaining_time {
            self.session.remaining_time = v;
        }
        if let Some(v) = patch.charging_pile_id {
            self.session.charging_pile_id = v;
        }
        if let Some(v) = patch.is_queue_first {
            self.session.is_queue_first = v;
        }
        if let Some(v) = patch.charging_pile_status {
            self.session.charging_pile_status = v;
        }
        if let Some(v) = patch.current_total_fee {
            self.session.current_total_fee = v;
        }
        if let Some(v) = patch.estimated_total_fee {
            self.session.estimated_total_fee = v;
        }
    }

    /// Merge a queue-position patch
    pub fn update_queue_info(&mut self, patch: &QueueInfoPatch) {
        if let Some(v) = patch.queue_number {
            self.queue.queue_number = v;
        }
        if let Some(v) = patch.queue_count {
            self.queue.queue_count = v;
        }
        if let Some(v) = patch.estimated_wait {
            self.queue.estimated_wait = v;
        }
        if let Some(v) = patch.location_type {
            self.queue.location_type = v;
        }
    }

    /// Merge a pricing patch
    pub fn update_pricing_info(&mut self, patch: &PricingInfoPatch) {
        if let Some(ref v) = patch.current_period {
            self.pricing.current_period = v.clone();
        }
        if let Some(v) = patch.unit_price {
            self.pricing.unit_price = v;
        }
        if let Some(v) = patch.service_fee_rate {
            self.pricing.service_fee_rate = v;
        }
        if let Some(ref v) = patch.price_type {
            self.pricing.price_type = v.clone();
        }
    }

    // ---- notifications ---------------------------------------------------

    /// Insert a notification at the front of the sequence, assigning its id
    /// and timestamp. The sequence is truncated to the retention limit.
    /// Returns the assigned id.
    pub fn add_notification(&mut self, new: NewNotification) -> u64 {
        self.notification_id_counter += 1;
        let id = self.notification_id_counter;

        self.notifications.insert(
            0,
            Notification {
                id,
                level: new.level,
                timestamp: Utc::now().timestamp_millis(),
                title: new.title,
                message: new.message,
                kind: new.kind,
                pile_number: new.pile_number,
            },
        );
        self.notifications.truncate(self.max_notifications);

        id
    }

    /// Remove a notification by id. Idempotent: returns false when the id is
    /// already gone, so a stale expiry timer is a no-op.
    pub fn remove_notification(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Drop all notifications
    pub fn clear_all_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Retained notifications, most recent first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // ---- derived predicates ----------------------------------------------

    /// A charging request is in flight (waiting, priority-waiting or charging)
    pub fn has_active_request(&self) -> bool {
        matches!(
            self.session.status,
            ChargeStatus::Waiting | ChargeStatus::PriorityWaiting | ChargeStatus::Charging
        )
    }

    /// The vehicle is at the charging area: charging, or waiting with a pile
    /// already assigned
    pub fn is_in_charging_area(&self) -> bool {
        self.session.status == ChargeStatus::Charging
            || (self.session.status == ChargeStatus::Waiting
                && self.session.charging_pile_id.is_some())
    }

    /// Charging may begin: waiting at the head of the queue with an available
    /// pile
    pub fn can_start_charge(&self) -> bool {
        self.session.status == ChargeStatus::Waiting
            && self.session.is_queue_first
            && self.session.charging_pile_status == Some(PileStatus::Available)
    }

    /// Charging may be stopped
    pub fn can_stop_charge(&self) -> bool {
        self.session.status == ChargeStatus::Charging
    }

    /// The pending request may be canceled
    pub fn can_cancel_charge(&self) -> bool {
        matches!(
            self.session.status,
            ChargeStatus::Waiting | ChargeStatus::PriorityWaiting
        )
    }

    /// A new charging request may be submitted (battery capacity must be set)
    pub fn can_submit_request(&self) -> bool {
        self.battery_capacity.is_some_and(|c| c > 0.0)
    }

    /// Battery capacity may be modified (only without an active request)
    pub fn can_set_battery_capacity(&self) -> bool {
        !self.has_active_request()
    }
}

impl Default for ChargeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_status_tolerates_unknown_labels() {
        let status: PileStatus = serde_json::from_str("\"MAINTENANCE\"").unwrap();
        assert_eq!(status, PileStatus::Unknown);

        let status: PileStatus = serde_json::from_str("\"AVAILABLE\"").unwrap();
        assert_eq!(status, PileStatus::Available);
    }

    #[test]
    fn null_pile_id_clears_but_absent_keeps() {
        let mut store = ChargeStore::new();
        store.update_charge_status(&ChargeStatusPatch {
            charging_pile_id: Some(Some(3)),
            ..Default::default()
        });
        assert_eq!(store.session.charging_pile_id, Some(3));

        // Absent key leaves the assignment alone
        let patch: ChargeStatusPatch = serde_json::from_str(r#"{"currentPower": 5.0}"#).unwrap();
        store.update_charge_status(&patch);
        assert_eq!(store.session.charging_pile_id, Some(3));

        // Explicit null clears it
        let patch: ChargeStatusPatch = serde_json::from_str(r#"{"chargingPileId": null}"#).unwrap();
        store.update_charge_status(&patch);
        assert_eq!(store.session.charging_pile_id, None);
    }

    #[test]
    fn total_price_per_unit_formats_two_decimals() {
        let mut store = ChargeStore::new();
        store.update_pricing_info(&PricingInfoPatch {
            unit_price: Some(1.0),
            service_fee_rate: Some(0.8),
            ..Default::default()
        });
        assert_eq!(store.pricing.total_price_per_unit(), "1.80");
    }
}
