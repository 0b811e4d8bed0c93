//! Check orchestration.
//!
//! [`Systemcheck`] runs the checks in a fixed order and turns each status
//! into report lines:
//!
//! ```text
//! clear screen → banner → driver (exit 1 if missing) → server binary
//!   → connection (connected | timeout | other) → finished
//! ```
//!
//! Every collaborator is injected, so each branch can be driven from tests
//! without a server, a missing driver, or a particular filesystem.

use crate::checks::{
    check_connection, check_driver, check_server_binary, BinaryStatus, ConnectionOutcome,
    DriverProbe, DriverStatus, FileSystem, ServerProbe,
};
use crate::context::CheckContext;
use crate::ui::UserInterface;

/// Report banner.
pub const BANNER: &str = "MongoDB Systemcheck";

/// Header above the connection check.
pub const CONNECTION_HEADER: &str = "Database Connection Test";

/// Last line of every completed run.
pub const FINISHED: &str = "Finished";

/// Exit code when the driver is unavailable.
pub const EXIT_DRIVER_MISSING: u8 = 1;

/// What a run found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Exit code for the process.
    pub exit_code: u8,
    /// Driver probe result.
    pub driver: DriverStatus,
    /// Binary check result; `None` when the run stopped at the driver check.
    pub binary: Option<BinaryStatus>,
    /// Connection result; `None` when the run stopped at the driver check.
    pub connection: Option<ConnectionOutcome>,
}

impl Report {
    /// Whether the run completed (the connection may still have failed).
    pub fn completed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs every check in order against injected collaborators.
pub struct Systemcheck<'a> {
    ctx: &'a CheckContext,
    fs: &'a dyn FileSystem,
    driver: &'a dyn DriverProbe,
    server: &'a dyn ServerProbe,
}

impl<'a> Systemcheck<'a> {
    /// Create a new run.
    pub fn new(
        ctx: &'a CheckContext,
        fs: &'a dyn FileSystem,
        driver: &'a dyn DriverProbe,
        server: &'a dyn ServerProbe,
    ) -> Self {
        Self {
            ctx,
            fs,
            driver,
            server,
        }
    }

    /// Run all checks, writing the report to `ui`.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Report {
        ui.clear_screen();
        ui.show_header(BANNER);

        let driver = check_driver(self.driver);
        if !show_driver(ui, &driver) {
            return Report {
                exit_code: EXIT_DRIVER_MISSING,
                driver,
                binary: None,
                connection: None,
            };
        }

        let binary = check_server_binary(self.ctx, self.fs);
        show_binary(ui, &binary);

        ui.show_header(CONNECTION_HEADER);
        let connection = check_connection(&self.ctx.target, self.server);
        show_connection(ui, &connection, &self.ctx.target.address());

        ui.show_header(FINISHED);

        Report {
            exit_code: 0,
            driver,
            binary: Some(binary),
            connection: Some(connection),
        }
    }
}

/// Print the driver result. Returns whether the run may continue.
fn show_driver(ui: &mut dyn UserInterface, status: &DriverStatus) -> bool {
    match status {
        DriverStatus::Available { name } => {
            ui.success(&format!("MongoDB driver ({}) is installed and ready.", name));
            true
        }
        DriverStatus::Unavailable { name, install_hint } => {
            ui.failure(&format!("MongoDB driver ({}) NOT found.", name));
            ui.show_hint(install_hint);
            false
        }
    }
}

fn show_binary(ui: &mut dyn UserInterface, status: &BinaryStatus) {
    match status {
        BinaryStatus::Found { .. } => ui.success("MongoDB Server Binary (mongod) found."),
        BinaryStatus::Missing { path } => {
            ui.failure(&format!(
                "MongoDB Server Binary (mongod) NOT found at {}.",
                path.display()
            ));
            ui.show_hint("Please ensure that MongoDB Server is installed.");
        }
        BinaryStatus::Skipped => {
            ui.skipped("MongoDB Server binary check skipped (OS is not Linux).")
        }
    }
}

fn show_connection(ui: &mut dyn UserInterface, outcome: &ConnectionOutcome, address: &str) {
    match outcome {
        ConnectionOutcome::Connected { databases } => {
            ui.success(&format!(
                "Connection to MongoDB Server ({}) successful.",
                address
            ));
            ui.message("");
            ui.info("Available Databases:");
            for name in databases {
                ui.list_item(name);
            }
        }
        ConnectionOutcome::Timeout { detail } => {
            ui.failure("Connection error:");
            ui.show_hint(&format!("The MongoDB Server is NOT running at {}.", address));
            ui.show_hint("Please start the server.");
            ui.show_hint(&format!("Error details: {}", detail));
        }
        ConnectionOutcome::Other { detail } => {
            ui.failure(&format!("An unexpected error occurred: {}", detail));
        }
    }
}
