//! MongoDB-backed server probe.
//!
//! The driver is async; the checks are not. [`MongoServerProbe`] bridges
//! the two with a current-thread runtime that lives only as long as the
//! attempt, so the run stays single-threaded.

use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::Client;

use crate::checks::ServerProbe;
use crate::context::ConnectionTarget;
use crate::error::{CheckError, Result};

/// Application name reported to the server in the handshake.
const APP_NAME: &str = "mongocheck";

/// Server probe using the official MongoDB driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoServerProbe;

impl MongoServerProbe {
    /// Create a new probe.
    pub fn new() -> Self {
        Self
    }
}

impl ServerProbe for MongoServerProbe {
    #[tracing::instrument(skip(self, target), fields(address = %target.address()))]
    fn ping_and_list(&self, target: &ConnectionTarget) -> Result<Vec<String>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CheckError::Runtime(e.to_string()))?;

        runtime.block_on(connect_and_list(target))
    }
}

async fn connect_and_list(target: &ConnectionTarget) -> Result<Vec<String>> {
    let address = target.address();
    let uri = target.uri();

    let mut options = ClientOptions::parse(&uri)
        .await
        .map_err(|e| classify(&address, e))?;
    options.server_selection_timeout = Some(target.server_selection_timeout);
    options.app_name = Some(APP_NAME.to_string());

    let client = Client::with_options(options).map_err(|e| classify(&address, e))?;

    let result = ping_and_list_databases(&client).await;
    client.shutdown().await;

    result.map_err(|e| classify(&address, e))
}

async fn ping_and_list_databases(client: &Client) -> std::result::Result<Vec<String>, MongoError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;
    tracing::debug!("Ping succeeded");

    client.list_database_names().await
}

/// Map a driver error onto the check taxonomy.
fn classify(address: &str, err: MongoError) -> CheckError {
    if matches!(err.kind.as_ref(), ErrorKind::ServerSelection { .. }) {
        CheckError::ServerSelection {
            address: address.to_string(),
            message: err.to_string(),
        }
    } else {
        CheckError::Connection {
            address: address.to_string(),
            message: err.to_string(),
        }
    }
}
