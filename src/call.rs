//! Reusable asynchronous call harness
//!
//! [`ApiCall`] gives every remote invocation the same three-way observable
//! outcome: `loading` while in flight, `error` with the normalized message on
//! failure, `data` with the last successful result. The feature wrappers at
//! the bottom are thin bindings of this harness over specific endpoint
//! groups; they carry no state beyond their harnesses.

use crate::api::types::{
    ChargingRequest, ChargingResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};
use crate::api::{AdminApi, AuthApi, BillsApi, ChargeApi};
use crate::error::Result;
use crate::logging::get_logger;

/// Options for a single execution
#[derive(Debug, Clone)]
pub struct CallOptions {
    /// Log the failure at error level
    pub show_error: bool,
    /// Message used when the failure carries no message of its own
    pub error_message: String,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            show_error: true,
            error_message: "Operation failed".to_string(),
        }
    }
}

/// Per-invocation harness with pending / error / value observables
pub struct ApiCall<T> {
    /// True while an execution is in flight
    pub loading: bool,
    /// Normalized message of the last failure, empty when none
    pub error: String,
    /// Last successful result
    pub data: Option<T>,
    logger: crate::logging::StructuredLogger,
}

impl<T: Clone> ApiCall<T> {
    /// Create an idle harness
    pub fn new() -> Self {
        Self {
            loading: false,
            error: String::new(),
            data: None,
            logger: get_logger("call"),
        }
    }

    /// Run one operation through the harness.
    ///
    /// Sets `loading`, clears `error`, awaits the operation; on success stores
    /// and returns the value, on failure stores the normalized message and
    /// re-raises. `loading` is cleared on every exit path.
    pub async fn execute<F>(&mut self, operation: F, options: &CallOptions) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.loading = true;
        self.error.clear();

        let outcome = operation.await;
        self.loading = false;

        match outcome {
            Ok(value) => {
                self.data = Some(value.clone());
                Ok(value)
            }
            Err(err) => {
                let message = if err.message().is_empty() {
                    options.error_message.clone()
                } else {
                    err.message().to_string()
                };
                if options.show_error {
                    self.logger.error(&format!("Call failed: {}", message));
                }
                self.error = message;
                Err(err)
            }
        }
    }

    /// Return the harness to its idle state
    pub fn reset(&mut self) {
        self.loading = false;
        self.error.clear();
        self.data = None;
    }

    /// Clear only the error observable
    pub fn clear_error(&mut self) {
        self.error.clear();
    }
}

impl<T: Clone> Default for ApiCall<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Charging actions bound to one harness
pub struct ChargeActions {
    api: ChargeApi,
    pub call: ApiCall<ChargingResponse>,
}

impl ChargeActions {
    pub fn new(api: ChargeApi) -> Self {
        Self {
            api,
            call: ApiCall::new(),
        }
    }

    pub async fn submit_request(&mut self, request: &ChargingRequest) -> Result<ChargingResponse> {
        ApiCall::execute(
            &mut self.call,
            self.api.submit_request(request),
            &CallOptions::default(),
        )
        .await
    }

    pub async fn modify_request(&mut self, request: &ChargingRequest) -> Result<ChargingResponse> {
        ApiCall::execute(
            &mut self.call,
            self.api.modify_request(request),
            &CallOptions::default(),
        )
        .await
    }

    pub async fn start_charging(&mut self) -> Result<ChargingResponse> {
        ApiCall::execute(&mut self.call, self.api.start(), &CallOptions::default()).await
    }

    pub async fn stop_charging(&mut self) -> Result<ChargingResponse> {
        ApiCall::execute(&mut self.call, self.api.stop(), &CallOptions::default()).await
    }

    pub async fn cancel_charging(&mut self) -> Result<ChargingResponse> {
        ApiCall::execute(&mut self.call, self.api.cancel(), &CallOptions::default()).await
    }
}

/// Authentication calls, one harness per distinct response type
pub struct AuthCalls {
    api: AuthApi,
    pub login: ApiCall<LoginResponse>,
    pub register: ApiCall<RegisterResponse>,
}

impl AuthCalls {
    pub fn new(api: AuthApi) -> Self {
        Self {
            api,
            login: ApiCall::new(),
            register: ApiCall::new(),
        }
    }

    pub async fn login(&mut self, credentials: &LoginRequest) -> Result<LoginResponse> {
        ApiCall::execute(
            &mut self.login,
            self.api.login(credentials),
            &CallOptions::default(),
        )
        .await
    }

    pub async fn register(&mut self, user: &RegisterRequest) -> Result<RegisterResponse> {
        ApiCall::execute(
            &mut self.register,
            self.api.register(user),
            &CallOptions::default(),
        )
        .await
    }
}

/// Billing queries bound to one harness
pub struct BillingCalls {
    api: BillsApi,
    pub call: ApiCall<serde_json::Value>,
}

impl BillingCalls {
    pub fn new(api: BillsApi) -> Self {
        Self {
            api,
            call: ApiCall::new(),
        }
    }

    pub async fn current_user_bills(&mut self) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.current_user(), &CallOptions::default()).await
    }

    pub async fn bill_by_id(&mut self, bill_id: &str) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.by_id(bill_id), &CallOptions::default()).await
    }
}

/// Administration calls bound to one harness
pub struct AdminCalls {
    api: AdminApi,
    pub call: ApiCall<serde_json::Value>,
}

impl AdminCalls {
    pub fn new(api: AdminApi) -> Self {
        Self {
            api,
            call: ApiCall::new(),
        }
    }

    pub async fn piles_status(&mut self) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.piles_status(), &CallOptions::default()).await
    }

    pub async fn pile_detail(&mut self, pile_id: u32) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.pile_detail(pile_id), &CallOptions::default())
            .await
    }

    pub async fn toggle_pile(&mut self, pile_id: u32) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.toggle_pile(pile_id), &CallOptions::default())
            .await
    }

    pub async fn system_config(&mut self) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.system_config(), &CallOptions::default()).await
    }

    pub async fn update_system_config(
        &mut self,
        config: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        ApiCall::execute(
            &mut self.call,
            self.api.update_system_config(config),
            &CallOptions::default(),
        )
        .await
    }

    pub async fn report(&mut self, start_date: &str, end_date: &str) -> Result<serde_json::Value> {
        ApiCall::execute(
            &mut self.call,
            self.api.report(start_date, end_date),
            &CallOptions::default(),
        )
        .await
    }

    pub async fn add_pile(&mut self, pile_type: &str) -> Result<serde_json::Value> {
        ApiCall::execute(&mut self.call, self.api.add_pile(pile_type), &CallOptions::default())
            .await
    }

    pub async fn delete_pile(&mut self, pile_number: &str) -> Result<serde_json::Value> {
        ApiCall::execute(
            &mut self.call,
            self.api.delete_pile(pile_number),
            &CallOptions::default(),
        )
        .await
    }
}
