//! Start-up values shared by every check.
//!
//! Everything the checks need to know about the machine and the target
//! server is computed once in [`CheckContext::detect`] and handed to each
//! check explicitly, so tests can build a context for any platform.

use std::path::PathBuf;
use std::time::Duration;

/// Standard install location of the server binary on Linux.
pub const DEFAULT_SERVER_BINARY: &str = "/usr/bin/mongod";

/// Host the connection check targets.
pub const DEFAULT_HOST: &str = "localhost";

/// Port the connection check targets.
pub const DEFAULT_PORT: u16 = 27017;

/// How long the driver may search for a usable server.
pub const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Platform family, as far as the binary check is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Unix-like systems, where the server binary has a well-known path.
    Posix,
    /// Anything else. The binary check is skipped.
    Other,
}

impl Platform {
    /// Detect the current platform.
    pub fn current() -> Self {
        if cfg!(unix) {
            Platform::Posix
        } else {
            Platform::Other
        }
    }

    /// Whether this is the POSIX branch.
    pub fn is_posix(self) -> bool {
        matches!(self, Platform::Posix)
    }
}

/// Where and how to reach the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    /// Host name.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Upper bound on server selection, enforced by the driver.
    pub server_selection_timeout: Duration,
}

impl ConnectionTarget {
    /// The fixed local target: `localhost:27017` with a 5 s timeout.
    pub fn local() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            server_selection_timeout: SERVER_SELECTION_TIMEOUT,
        }
    }

    /// Connection string handed to the driver. No credentials.
    pub fn uri(&self) -> String {
        format!("mongodb://{}:{}", self.host, self.port)
    }

    /// `host:port`, as shown in report lines.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ConnectionTarget {
    fn default() -> Self {
        Self::local()
    }
}

/// Values computed at start-up and passed to each check.
#[derive(Debug, Clone)]
pub struct CheckContext {
    /// Detected platform.
    pub platform: Platform,
    /// Server binary to look for. Only consulted on [`Platform::Posix`].
    pub server_binary: Option<PathBuf>,
    /// Server the connection check talks to.
    pub target: ConnectionTarget,
}

impl CheckContext {
    /// Build the context for the machine we're running on.
    pub fn detect() -> Self {
        Self::for_platform(Platform::current())
    }

    /// Build the context for a given platform.
    pub fn for_platform(platform: Platform) -> Self {
        let server_binary = match platform {
            Platform::Posix => Some(PathBuf::from(DEFAULT_SERVER_BINARY)),
            Platform::Other => None,
        };

        Self {
            platform,
            server_binary,
            target: ConnectionTarget::local(),
        }
    }

    /// Replace the server binary path (tests point this into a temp dir).
    pub fn with_server_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.server_binary = Some(path.into());
        self
    }
}
