//! Check status types.
//!
//! Each check produces one of these values. They carry what the report needs
//! to print and nothing else, so tests can assert on the variant instead of
//! matching output text.

use std::path::PathBuf;

/// The result of looking for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryStatus {
    /// The binary exists at the expected path.
    Found {
        /// Path that was checked.
        path: PathBuf,
    },

    /// Nothing at the expected path. Reported, never fatal: the server may
    /// live elsewhere or run on another host.
    Missing {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The platform has no well-known path, so nothing was checked.
    Skipped,
}

impl BinaryStatus {
    /// Whether the check counts as passed. A skip is a pass.
    pub fn is_pass(&self) -> bool {
        !matches!(self, BinaryStatus::Missing { .. })
    }
}

/// The result of probing for the client driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverStatus {
    /// The driver is linked into this build.
    Available {
        /// Driver name (e.g., "mongodb").
        name: String,
    },

    /// The driver cannot be used. Every later step depends on it.
    Unavailable {
        /// Driver name.
        name: String,
        /// How to get the driver.
        install_hint: String,
    },
}

impl DriverStatus {
    /// Whether the driver can be used.
    pub fn is_available(&self) -> bool {
        matches!(self, DriverStatus::Available { .. })
    }
}

/// The result of the single connection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionOutcome {
    /// Ping succeeded; database names in the order the server sent them.
    Connected {
        /// Database names.
        databases: Vec<String>,
    },

    /// No usable server within the server-selection timeout.
    Timeout {
        /// Driver-provided detail.
        detail: String,
    },

    /// Anything else that went wrong during the connection phase.
    Other {
        /// Error detail.
        detail: String,
    },
}

impl ConnectionOutcome {
    /// Whether the server answered.
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionOutcome::Connected { .. })
    }
}
