//! mongocheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use mongocheck::checks::{default_server_probe, LinkedDriver, RealFileSystem};
use mongocheck::cli::Cli;
use mongocheck::context::CheckContext;
use mongocheck::runner::Systemcheck;
use mongocheck::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so they never interleave with the report on stdout.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("mongocheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mongocheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("mongocheck starting with args: {:?}", cli);

    let ctx = CheckContext::detect();
    let server = default_server_probe();
    let mut ui = create_ui(cli.no_color);

    let report =
        Systemcheck::new(&ctx, &RealFileSystem, &LinkedDriver, server.as_ref()).run(ui.as_mut());

    ExitCode::from(report.exit_code)
}
