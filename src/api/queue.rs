//! Queue-position endpoints

use crate::error::Result;
use crate::store::QueueInfoPatch;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Queue-position queries
pub struct QueueApi {
    transport: Arc<ApiTransport>,
}

impl QueueApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `GET /api/queue/user` — decodes straight into a merge patch
    pub async fn user_status(&self) -> Result<QueueInfoPatch> {
        self.transport.get("/api/queue/user").await
    }
}
