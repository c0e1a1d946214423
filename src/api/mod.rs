//! Remote endpoint groups for Chargelink
//!
//! Named collections of remote operations built on the shared transport.
//! These are pure request-shape definitions with no state of their own; every
//! response is decoded into the wire types in [`types`] or into the store's
//! patch types.

pub mod admin;
pub mod auth;
pub mod bills;
pub mod charge;
pub mod pricing;
pub mod queue;
pub mod types;

use crate::error::Result;
use crate::store::{ChargeStatusPatch, PricingInfoPatch, QueueInfoPatch};
use crate::transport::ApiTransport;
use std::sync::Arc;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use bills::BillsApi;
pub use charge::ChargeApi;
pub use pricing::PricingApi;
pub use queue::QueueApi;
pub use types::*;

/// Entry point grouping every remote operation family
pub struct ApiService {
    transport: Arc<ApiTransport>,
}

impl ApiService {
    /// Create the service over a shared transport
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// Authentication operations
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.transport.clone())
    }

    /// Charging-request operations
    pub fn charge(&self) -> ChargeApi {
        ChargeApi::new(self.transport.clone())
    }

    /// Queue-position operations
    pub fn queue(&self) -> QueueApi {
        QueueApi::new(self.transport.clone())
    }

    /// Billing queries
    pub fn bills(&self) -> BillsApi {
        BillsApi::new(self.transport.clone())
    }

    /// Tariff queries
    pub fn pricing(&self) -> PricingApi {
        PricingApi::new(self.transport.clone())
    }

    /// Administration operations
    pub fn admin(&self) -> AdminApi {
        AdminApi::new(self.transport.clone())
    }

    /// Address of the server-push notification stream for the current token.
    ///
    /// The stream cannot carry a header, so the credential rides in the query
    /// string. Returns None while unauthenticated.
    pub async fn notification_stream_url(&self) -> Option<String> {
        let token = self.transport.token().await?;
        Some(crate::events::stream_url(self.transport.base_url(), &token))
    }
}

/// The status-fetch operations consumed by the sync layer.
///
/// A seam for tests: the sync layer talks to this trait, not to the concrete
/// service, so fetch behavior can be scripted without a server.
#[async_trait::async_trait]
pub trait StatusEndpoints: Send + Sync {
    async fn charge_status(&self) -> Result<ChargeStatusPatch>;
    async fn queue_status(&self) -> Result<QueueInfoPatch>;
    async fn pricing_current(&self) -> Result<PricingInfoPatch>;
    async fn battery_capacity(&self) -> Result<BatteryCapacityResponse>;
    async fn set_battery_capacity(&self, capacity: f64) -> Result<SetBatteryCapacityResponse>;
}

#[async_trait::async_trait]
impl StatusEndpoints for ApiService {
    async fn charge_status(&self) -> Result<ChargeStatusPatch> {
        self.charge().user_status().await
    }

    async fn queue_status(&self) -> Result<QueueInfoPatch> {
        self.queue().user_status().await
    }

    async fn pricing_current(&self) -> Result<PricingInfoPatch> {
        self.pricing().current().await
    }

    async fn battery_capacity(&self) -> Result<BatteryCapacityResponse> {
        self.charge().battery_capacity().await
    }

    async fn set_battery_capacity(&self, capacity: f64) -> Result<SetBatteryCapacityResponse> {
        self.charge().set_battery_capacity(capacity).await
    }
}
