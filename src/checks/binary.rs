//! Server binary presence check.
//!
//! On POSIX systems the server binary has a well-known install path, so the
//! check is a plain existence test. Other platforms have no single location
//! worth guessing; there the check is skipped and counts as a pass.
//!
//! Filesystem access goes through the [`FileSystem`] seam so both branches
//! can be exercised without installing anything.
//!
//! # Example
//!
//! ```
//! use mongocheck::checks::binary::{check_server_binary, RealFileSystem};
//! use mongocheck::checks::BinaryStatus;
//! use mongocheck::context::{CheckContext, Platform};
//!
//! let ctx = CheckContext::for_platform(Platform::Other);
//! assert_eq!(check_server_binary(&ctx, &RealFileSystem), BinaryStatus::Skipped);
//! ```

use std::path::Path;

use crate::context::CheckContext;

use super::status::BinaryStatus;

/// Read-only filesystem queries used by the binary check.
pub trait FileSystem {
    /// Whether something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// The machine's real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Check for the server binary.
///
/// Never fails. A missing binary is a report line, not an error.
pub fn check_server_binary(ctx: &CheckContext, fs: &dyn FileSystem) -> BinaryStatus {
    if !ctx.platform.is_posix() {
        tracing::debug!("Skipping server binary check on non-POSIX platform");
        return BinaryStatus::Skipped;
    }

    let Some(path) = ctx.server_binary.as_deref() else {
        return BinaryStatus::Skipped;
    };

    if fs.exists(path) {
        tracing::debug!("Server binary found at {}", path.display());
        BinaryStatus::Found {
            path: path.to_path_buf(),
        }
    } else {
        tracing::debug!("Server binary not found at {}", path.display());
        BinaryStatus::Missing {
            path: path.to_path_buf(),
        }
    }
}
