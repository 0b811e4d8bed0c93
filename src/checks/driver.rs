//! Driver availability check.
//!
//! Rust links its dependencies at build time, so "is the driver importable"
//! becomes "was this binary built with the `mongodb` feature". The answer is
//! behind the [`DriverProbe`] trait so the fatal path can be exercised in
//! tests without a second build.

use super::status::DriverStatus;

/// Name the driver is reported under.
pub const DRIVER_NAME: &str = "mongodb";

/// How to get a build with the driver in it.
pub const INSTALL_HINT: &str =
    "Rebuild with the driver enabled: cargo install mongocheck --features mongodb";

/// Capability probe for the client driver.
pub trait DriverProbe {
    /// Report whether the driver can be used.
    fn probe(&self) -> DriverStatus;
}

/// Probe for the driver compiled into this binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedDriver;

impl DriverProbe for LinkedDriver {
    fn probe(&self) -> DriverStatus {
        if cfg!(feature = "mongodb") {
            DriverStatus::Available {
                name: DRIVER_NAME.to_string(),
            }
        } else {
            DriverStatus::Unavailable {
                name: DRIVER_NAME.to_string(),
                install_hint: INSTALL_HINT.to_string(),
            }
        }
    }
}

/// Check that the driver is available.
pub fn check_driver(probe: &dyn DriverProbe) -> DriverStatus {
    let status = probe.probe();
    match &status {
        DriverStatus::Available { name } => tracing::debug!("Driver '{}' is available", name),
        DriverStatus::Unavailable { name, .. } => {
            tracing::warn!("Driver '{}' is not available", name)
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Missing;

    impl DriverProbe for Missing {
        fn probe(&self) -> DriverStatus {
            DriverStatus::Unavailable {
                name: DRIVER_NAME.to_string(),
                install_hint: INSTALL_HINT.to_string(),
            }
        }
    }

    #[test]
    fn linked_driver_follows_feature_flag() {
        let status = check_driver(&LinkedDriver);
        assert_eq!(status.is_available(), cfg!(feature = "mongodb"));
    }

    #[test]
    fn missing_driver_carries_install_hint() {
        match check_driver(&Missing) {
            DriverStatus::Unavailable { name, install_hint } => {
                assert_eq!(name, "mongodb");
                assert!(install_hint.contains("--features mongodb"));
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
}
