//! Environment checks.
//!
//! Each check is independent and returns a status value describing what it
//! found. Printing is left to the [`runner`](crate::runner).
//!
//! # Modules
//!
//! - [`binary`] - Server binary presence check
//! - [`connection`] - Single connection attempt and result classification
//! - [`driver`] - Client driver capability probe
//! - [`status`] - Status types produced by the checks

pub mod binary;
pub mod connection;
pub mod driver;
pub mod status;

pub use binary::{check_server_binary, FileSystem, RealFileSystem};
pub use connection::{check_connection, default_server_probe, NoDriverProbe, ServerProbe};
pub use driver::{check_driver, DriverProbe, LinkedDriver};
pub use status::{BinaryStatus, ConnectionOutcome, DriverStatus};
