//! mongocheck - Verify that a local environment is ready to talk to MongoDB.
//!
//! The check runs three probes in order and prints a pass/fail line for each:
//! the client driver (fatal if missing), the server binary, and a single
//! connection to `localhost:27017`.
//!
//! # Modules
//!
//! - [`checks`] - The individual environment checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`context`] - Platform detection and fixed check targets
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Check orchestration and report lines
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use mongocheck::checks::{LinkedDriver, NoDriverProbe, RealFileSystem};
//! use mongocheck::context::{CheckContext, Platform};
//! use mongocheck::runner::Systemcheck;
//! use mongocheck::ui::MockUI;
//!
//! let ctx = CheckContext::for_platform(Platform::Other);
//! let mut ui = MockUI::new();
//! let check = Systemcheck::new(&ctx, &RealFileSystem, &LinkedDriver, &NoDriverProbe);
//! let report = check.run(&mut ui);
//! assert!(ui.was_cleared());
//! assert!(report.connection.is_none() || report.completed());
//! ```

pub mod checks;
pub mod cli;
pub mod context;
pub mod error;
#[cfg(feature = "mongodb")]
pub mod mongo;
pub mod runner;
pub mod ui;

pub use error::{CheckError, Result};
