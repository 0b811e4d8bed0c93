//! Error types for mongocheck operations.
//!
//! This module defines [`CheckError`], the error type produced by the
//! individual environment checks, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks never propagate errors out of the run; each failure is turned
//!   into a report line where it happens
//! - `CheckError` keeps enough structure for the connection step to tell a
//!   server-selection timeout apart from everything else
//! - Use `anyhow::Error` (via `CheckError::Other`) for failures outside the
//!   driver's own error type, such as a connection attempt that panicked

use thiserror::Error;

/// Core error type for mongocheck operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The client driver is not available in this build.
    #[error("Driver '{name}' is not available: {hint}")]
    DriverUnavailable { name: String, hint: String },

    /// No usable server was found within the server-selection timeout.
    #[error("Server selection failed for {address}: {message}")]
    ServerSelection { address: String, message: String },

    /// The driver reported a failure other than server selection.
    #[error("Connection to {address} failed: {message}")]
    Connection { address: String, message: String },

    /// The async runtime backing the driver could not be started.
    #[error("Failed to start driver runtime: {0}")]
    Runtime(String),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckError {
    /// Whether this error means the server could not be reached in time.
    pub fn is_server_selection(&self) -> bool {
        matches!(self, CheckError::ServerSelection { .. })
    }
}

/// Result type alias for mongocheck operations.
pub type Result<T> = std::result::Result<T, CheckError>;
