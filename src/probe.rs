// src/probe.rs
use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::mongo::{build_client, database_name, parse_options, ping};
use crate::record::ProbeRecord;

use bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::{Client, Collection};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    pub database: String,
    pub record_id: ObjectId,
    pub deleted_count: u64,
}

/// Connects, writes one record, deletes it again and disconnects.
///
/// Once a client exists it is shut down before returning, whether the probe
/// succeeded or not.
pub async fn run_probe(config: &ProbeConfig) -> Result<ProbeOutcome, ProbeError> {
    println!("🔍 Testing MongoDB connection...");
    println!("MongoDB URI: {}", config);

    let client_options = parse_options(&config.uri, config.server_selection_timeout).await?;
    let db_name = database_name(&client_options).to_string();
    debug!(
        hosts = ?client_options.hosts,
        database = %db_name,
        timeout = ?client_options.server_selection_timeout,
        "parsed connection string"
    );

    let client = build_client(client_options)?;
    let result = exercise(&client, &db_name, config).await;

    debug!("shutting down client");
    client.shutdown().await;
    let outcome = result?;

    println!("✅ MongoDB disconnected successfully!");
    println!("🎉 Backend database connection test passed!");
    Ok(outcome)
}

async fn exercise(
    client: &Client,
    db_name: &str,
    config: &ProbeConfig,
) -> Result<ProbeOutcome, ProbeError> {
    let db = client.database(db_name);
    ping(&db).await?;
    println!("✅ MongoDB connected successfully!");
    println!("📊 Database name: {}", db.name());

    let collection = db.collection::<ProbeRecord>(&config.collection);
    let record = ProbeRecord::new(config.record_name.as_str());

    if config.debug {
        println!("Test document: {}", record.to_extended_json()?);
    }

    collection
        .insert_one(&record)
        .await
        .map_err(ProbeError::Write)?;
    info!(id = %record.id, collection = %config.collection, "inserted test document");
    println!("✅ Test document created successfully!");

    let deleted_count = remove_record(&collection, &record).await?;

    Ok(ProbeOutcome {
        database: db_name.to_string(),
        record_id: record.id,
        deleted_count,
    })
}

/// Deletes `record` by id and reports it. Zero matches is a warning, not an error.
pub async fn remove_record(
    collection: &Collection<ProbeRecord>,
    record: &ProbeRecord,
) -> Result<u64, ProbeError> {
    let deleted = collection
        .delete_one(doc! { "_id": record.id })
        .await
        .map_err(ProbeError::Write)?;

    if deleted.deleted_count == 0 {
        debug!(id = %record.id, "delete matched no documents");
        println!("⚠️  Test document was not found during cleanup");
    } else {
        println!("🧹 Test document cleaned up");
    }
    Ok(deleted.deleted_count)
}
