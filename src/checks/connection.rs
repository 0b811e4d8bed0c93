//! Connection check.
//!
//! One attempt, one ping, one database listing. The attempt itself lives
//! behind [`ServerProbe`]; this module only classifies what came back.
//! An attempt that panics is reported like any other unexpected failure, so
//! the run still reaches its last line.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::context::ConnectionTarget;
use crate::error::{CheckError, Result};

use super::driver::{DRIVER_NAME, INSTALL_HINT};
use super::status::ConnectionOutcome;

/// Performs the single connection attempt against a server.
pub trait ServerProbe {
    /// Connect to `target`, ping it, and return its database names in the
    /// order the server sent them.
    ///
    /// The client is acquired and released inside this call.
    fn ping_and_list(&self, target: &ConnectionTarget) -> Result<Vec<String>>;
}

/// Stand-in used when the driver is not compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDriverProbe;

impl ServerProbe for NoDriverProbe {
    fn ping_and_list(&self, _target: &ConnectionTarget) -> Result<Vec<String>> {
        Err(CheckError::DriverUnavailable {
            name: DRIVER_NAME.to_string(),
            hint: INSTALL_HINT.to_string(),
        })
    }
}

/// The server probe backed by the linked driver.
pub fn default_server_probe() -> Box<dyn ServerProbe> {
    #[cfg(feature = "mongodb")]
    {
        Box::new(crate::mongo::MongoServerProbe::new())
    }

    #[cfg(not(feature = "mongodb"))]
    {
        Box::new(NoDriverProbe)
    }
}

/// Attempt the connection and classify the result.
pub fn check_connection(target: &ConnectionTarget, probe: &dyn ServerProbe) -> ConnectionOutcome {
    tracing::debug!(
        "Connecting to {} (server selection timeout {:?})",
        target.uri(),
        target.server_selection_timeout
    );

    match attempt(target, probe) {
        Ok(databases) => {
            tracing::debug!("Server answered with {} database(s)", databases.len());
            ConnectionOutcome::Connected { databases }
        }
        Err(CheckError::ServerSelection { message, .. }) => {
            tracing::warn!("No server reachable at {}", target.address());
            ConnectionOutcome::Timeout { detail: message }
        }
        Err(e) => {
            tracing::warn!("Connection check failed: {}", e);
            ConnectionOutcome::Other {
                detail: e.to_string(),
            }
        }
    }
}

/// Make the attempt, turning a panic into [`CheckError::Other`].
fn attempt(target: &ConnectionTarget, probe: &dyn ServerProbe) -> Result<Vec<String>> {
    catch_unwind(AssertUnwindSafe(|| probe.ping_and_list(target))).unwrap_or_else(|payload| {
        Err(CheckError::Other(anyhow::anyhow!(
            "connection attempt panicked: {}",
            panic_message(payload.as_ref())
        )))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Scripted {
        result: fn() -> Result<Vec<String>>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(result: fn() -> Result<Vec<String>>) -> Self {
            Self {
                result,
                calls: Cell::new(0),
            }
        }
    }

    impl ServerProbe for Scripted {
        fn ping_and_list(&self, _target: &ConnectionTarget) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            (self.result)()
        }
    }

    #[test]
    fn success_keeps_database_order() {
        let probe = Scripted::new(|| {
            Ok(vec![
                "zeta".to_string(),
                "admin".to_string(),
                "local".to_string(),
            ])
        });

        let outcome = check_connection(&ConnectionTarget::local(), &probe);

        assert_eq!(
            outcome,
            ConnectionOutcome::Connected {
                databases: vec!["zeta".into(), "admin".into(), "local".into()]
            }
        );
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn server_selection_error_is_timeout() {
        let probe = Scripted::new(|| {
            Err(CheckError::ServerSelection {
                address: "localhost:27017".into(),
                message: "Server selection timeout: No available servers".into(),
            })
        });

        let outcome = check_connection(&ConnectionTarget::local(), &probe);

        assert_eq!(
            outcome,
            ConnectionOutcome::Timeout {
                detail: "Server selection timeout: No available servers".into()
            }
        );
    }

    #[test]
    fn other_errors_are_other() {
        let probe = Scripted::new(|| {
            Err(CheckError::Connection {
                address: "localhost:27017".into(),
                message: "unauthorized".into(),
            })
        });

        match check_connection(&ConnectionTarget::local(), &probe) {
            ConnectionOutcome::Other { detail } => assert!(detail.contains("unauthorized")),
            other => panic!("Expected Other, got {:?}", other),
        }
    }

    #[test]
    fn panicking_attempt_is_other() {
        let probe = Scripted::new(|| panic!("driver bug"));

        match check_connection(&ConnectionTarget::local(), &probe) {
            ConnectionOutcome::Other { detail } => {
                assert!(detail.contains("panicked"));
                assert!(detail.contains("driver bug"));
            }
            other => panic!("Expected Other, got {:?}", other),
        }
        assert_eq!(probe.calls.get(), 1);
    }

    #[test]
    fn panic_with_formatted_message_keeps_text() {
        let probe = Scripted::new(|| panic!("pool {} closed", 3));

        match check_connection(&ConnectionTarget::local(), &probe) {
            ConnectionOutcome::Other { detail } => assert!(detail.contains("pool 3 closed")),
            other => panic!("Expected Other, got {:?}", other),
        }
    }

    #[test]
    fn no_driver_probe_reports_other() {
        match check_connection(&ConnectionTarget::local(), &NoDriverProbe) {
            ConnectionOutcome::Other { detail } => assert!(detail.contains("mongodb")),
            other => panic!("Expected Other, got {:?}", other),
        }
    }
}
