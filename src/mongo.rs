// src/mongo.rs
use crate::error::ProbeError;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::debug;

/// Database used when the connection string has no path, same as the mongo shell.
pub const FALLBACK_DATABASE: &str = "test";

pub async fn parse_options(
    uri: &str,
    server_selection_timeout: Option<Duration>,
) -> Result<ClientOptions, ProbeError> {
    let mut client_options = ClientOptions::parse(uri)
        .await
        .map_err(ProbeError::Connection)?;
    client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
    if let Some(timeout) = server_selection_timeout {
        client_options.server_selection_timeout = Some(timeout);
    }
    Ok(client_options)
}

pub fn database_name(options: &ClientOptions) -> &str {
    options
        .default_database
        .as_deref()
        .unwrap_or(FALLBACK_DATABASE)
}

/// Client construction does no I/O; the first command triggers server selection.
pub fn build_client(options: ClientOptions) -> Result<Client, ProbeError> {
    Client::with_options(options).map_err(ProbeError::Connection)
}

pub async fn ping(db: &Database) -> Result<(), ProbeError> {
    debug!(database = %db.name(), "pinging server");
    db.run_command(doc! { "ping": 1 })
        .await
        .map_err(ProbeError::Connection)?;
    Ok(())
}
