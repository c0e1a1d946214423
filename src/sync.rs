//! Fetch and refresh operations binding the API to the status store
//!
//! Two distinct error contracts live here. The individual fetch operations
//! are must-succeed: they log and re-raise so the caller owns user-visible
//! error display. `refresh_all_status` is a best-effort batch: it commits
//! whichever merges succeeded, logs failures and never returns an error, so
//! a partial refresh leaves stale-but-present values rather than blanks.

use crate::api::StatusEndpoints;
use crate::api::types::{BatteryCapacityResponse, SetBatteryCapacityResponse};
use crate::error::Result;
use crate::events::ServerEvent;
use crate::logging::get_logger;
use crate::store::{
    ChargeStatusPatch, ChargeStore, NewNotification, NotificationLevel, PricingInfoPatch,
    QueueInfoPatch,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Keeps a shared [`ChargeStore`] current against the server
pub struct StatusSync {
    store: Arc<Mutex<ChargeStore>>,
    endpoints: Arc<dyn StatusEndpoints>,
    info_ttl: Duration,
    logger: crate::logging::StructuredLogger,
}

impl StatusSync {
    /// Create a sync layer over a shared store and endpoint set, with the
    /// default 5-second INFO notification expiry
    pub fn new(store: Arc<Mutex<ChargeStore>>, endpoints: Arc<dyn StatusEndpoints>) -> Self {
        Self::with_info_ttl(store, endpoints, Duration::from_millis(5000))
    }

    /// Create a sync layer with a custom INFO notification expiry
    pub fn with_info_ttl(
        store: Arc<Mutex<ChargeStore>>,
        endpoints: Arc<dyn StatusEndpoints>,
        info_ttl: Duration,
    ) -> Self {
        Self {
            store,
            endpoints,
            info_ttl,
            logger: get_logger("sync"),
        }
    }

    /// The shared store this layer feeds
    pub fn store(&self) -> Arc<Mutex<ChargeStore>> {
        self.store.clone()
    }

    /// Fetch the user's charge status and merge it into the store
    pub async fn fetch_charge_status(&self) -> Result<ChargeStatusPatch> {
        match self.endpoints.charge_status().await {
            Ok(patch) => {
                self.store.lock().await.update_charge_status(&patch);
                Ok(patch)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch charge status: {}", err));
                Err(err)
            }
        }
    }

    /// Fetch the user's queue position and merge it into the store
    pub async fn fetch_queue_status(&self) -> Result<QueueInfoPatch> {
        match self.endpoints.queue_status().await {
            Ok(patch) => {
                self.store.lock().await.update_queue_info(&patch);
                Ok(patch)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch queue status: {}", err));
                Err(err)
            }
        }
    }

    /// Fetch the current tariff and merge it into the store
    pub async fn fetch_pricing_info(&self) -> Result<PricingInfoPatch> {
        match self.endpoints.pricing_current().await {
            Ok(patch) => {
                self.store.lock().await.update_pricing_info(&patch);
                Ok(patch)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch pricing info: {}", err));
                Err(err)
            }
        }
    }

    /// Fetch the user's battery capacity.
    ///
    /// On failure the stored capacity is reset to unset before the error is
    /// re-raised: an unknown capacity must never silently retain a stale
    /// value.
    pub async fn fetch_battery_capacity(&self) -> Result<BatteryCapacityResponse> {
        match self.endpoints.battery_capacity().await {
            Ok(response) => {
                self.store.lock().await.battery_capacity = response.battery_capacity;
                Ok(response)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch battery capacity: {}", err));
                self.store.lock().await.battery_capacity = None;
                Err(err)
            }
        }
    }

    /// Set the user's battery capacity on the server, committing the value
    /// locally only when the server reports success
    pub async fn set_battery_capacity(&self, capacity: f64) -> Result<SetBatteryCapacityResponse> {
        match self.endpoints.set_battery_capacity(capacity).await {
            Ok(response) => {
                if response.success {
                    self.store.lock().await.battery_capacity = Some(capacity);
                }
                Ok(response)
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to set battery capacity: {}", err));
                Err(err)
            }
        }
    }

    /// Refresh charge, queue, pricing and battery state concurrently.
    ///
    /// Best-effort: merges that succeed are committed even when a sibling
    /// fetch fails, and no error escapes this call. Failures are observable
    /// only through the log.
    pub async fn refresh_all_status(&self) {
        let (charge, queue, pricing, battery) = tokio::join!(
            self.fetch_charge_status(),
            self.fetch_queue_status(),
            self.fetch_pricing_info(),
            self.fetch_battery_capacity(),
        );

        let failures = [
            charge.is_err(),
            queue.is_err(),
            pricing.is_err(),
            battery.is_err(),
        ]
        .iter()
        .filter(|failed| **failed)
        .count();

        if failures > 0 {
            self.logger.warn(&format!(
                "Status refresh incomplete: {} of 4 fetches failed",
                failures
            ));
        }
    }

    /// Add a notification to the store.
    ///
    /// INFO-level entries are scheduled for removal after the configured
    /// delay. The expiry task is fire-and-forget: removal by id is idempotent
    /// and ids are never reused, so a timer firing after a manual removal is
    /// a no-op.
    pub async fn push_notification(&self, notification: NewNotification) -> u64 {
        let level = notification.level;
        let id = self.store.lock().await.add_notification(notification);

        if level == NotificationLevel::Info {
            let store = self.store.clone();
            let ttl = self.info_ttl;
            tokio::spawn(async move {
                tokio::time::sleep(ttl).await;
                store.lock().await.remove_notification(id);
            });
        }

        id
    }

    /// Route a server-pushed event into the matching store mutation
    pub async fn apply_event(&self, event: ServerEvent) {
        match event {
            ServerEvent::Notification(notification) => {
                self.push_notification(notification.into_new_notification())
                    .await;
            }
            ServerEvent::Queue(queue) => {
                self.store
                    .lock()
                    .await
                    .update_queue_info(&queue.into_patch());
            }
            ServerEvent::Pricing(pricing) => {
                self.store
                    .lock()
                    .await
                    .update_pricing_info(&pricing.into_patch());
            }
            ServerEvent::ChargeStatus(patch) => {
                let mut store = self.store.lock().await;
                // Server-driven completion: record the transition, then let
                // the same payload deliver the final numbers
                if patch.is_auto_completed == Some(true) {
                    store.handle_auto_complete();
                }
                store.update_charge_status(&patch);
            }
        }
    }
}
