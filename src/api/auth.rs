//! Authentication endpoints

use super::types::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::Result;
use crate::transport::ApiTransport;
use std::sync::Arc;

/// Login and registration operations
pub struct AuthApi {
    transport: Arc<ApiTransport>,
}

impl AuthApi {
    pub fn new(transport: Arc<ApiTransport>) -> Self {
        Self { transport }
    }

    /// `POST /api/login`
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        self.transport.post("/api/login", Some(credentials)).await
    }

    /// `POST /api/register`
    pub async fn register(&self, user: &RegisterRequest) -> Result<RegisterResponse> {
        self.transport.post("/api/register", Some(user)).await
    }
}
