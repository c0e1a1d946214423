//! # Chargelink - Client State Synchronization for EV Charging Reservations
//!
//! A Rust client library for EV charging-reservation services. It maintains a
//! local, continuously refreshed mirror of server-authoritative facts about a
//! user's charging session, queue position, pricing and battery profile, and
//! exposes the derived capability flags that gate user actions.
//!
//! ## Features
//!
//! - **Async-first**: Built on the Tokio runtime
//! - **Uniform Transport**: Shared HTTP client with bearer-token injection
//!   and normalized error messages
//! - **Status Store**: Partial-merge state container with derived predicates
//! - **Server Push**: Event-stream payload decoding routed into store updates
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! The crate follows a modular architecture with clear separation of concerns:
//!
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `credentials`: Persisted bearer-token storage
//! - `transport`: HTTP request issuance and error normalization
//! - `api`: Remote endpoint groups and wire types
//! - `call`: Reusable asynchronous call harness
//! - `store`: Session/queue/pricing/battery state container
//! - `sync`: Fetch and refresh operations binding the API to the store
//! - `events`: Server-push notification channel integration

pub mod api;
pub mod call;
pub mod config;
pub mod credentials;
pub mod error;
pub mod events;
pub mod logging;
pub mod store;
pub mod sync;
pub mod transport;

// Re-export commonly used types
pub use config::Config;
pub use error::{ChargelinkError, Result};
pub use store::ChargeStore;
pub use sync::StatusSync;
