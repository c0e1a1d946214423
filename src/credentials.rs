//! Persisted bearer-token storage
//!
//! The bearer credential is the only piece of client state that survives a
//! process restart. It is kept in a small JSON file under a fixed key and
//! attached by the transport to every outgoing request.

use crate::error::Result;
use crate::logging::get_logger;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk shape of the credential file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredCredentials {
    /// Bearer token under the fixed key used by the original client storage
    jwt: Option<String>,
}

/// Credential store backed by a JSON file
pub struct CredentialStore {
    file_path: String,
    credentials: StoredCredentials,
    logger: crate::logging::StructuredLogger,
}

impl CredentialStore {
    /// Create a new credential store; the file is not touched until
    /// [`load`](Self::load) or [`save`](Self::save)
    pub fn new(file_path: &str) -> Self {
        let logger = get_logger("credentials");

        Self {
            file_path: file_path.to_string(),
            credentials: StoredCredentials::default(),
            logger,
        }
    }

    /// Load the persisted token from disk
    pub fn load(&mut self) -> Result<()> {
        let path = Path::new(&self.file_path);

        if !path.exists() {
            self.logger.info("No credential file found, starting unauthenticated");
            return Ok(());
        }

        let contents = std::fs::read_to_string(path)?;
        self.credentials = serde_json::from_str(&contents)?;
        self.logger.info("Loaded credentials from disk");

        Ok(())
    }

    /// Save the current token to disk
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.credentials)?;
        std::fs::write(&self.file_path, contents)?;
        self.logger.debug("Saved credentials to disk");

        Ok(())
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<&str> {
        self.credentials.jwt.as_deref()
    }

    /// Store a new bearer token and persist it
    pub fn set_token(&mut self, token: String) -> Result<()> {
        self.credentials.jwt = Some(token);
        self.save()
    }

    /// Drop the stored token and persist the cleared state
    pub fn clear(&mut self) -> Result<()> {
        self.credentials.jwt = None;
        self.save()
    }
}
