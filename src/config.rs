// src/config.rs
use crate::cli::Cli;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017/bazar-wheels";
pub const DEFAULT_COLLECTION: &str = "tests";
pub const DEFAULT_RECORD_NAME: &str = "Backend Test";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriSource {
    /// Given on the command line or through `MONGODB_URI`.
    Configured,
    Default,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub uri: String,
    pub uri_source: UriSource,
    pub collection: String,
    pub record_name: String,
    pub server_selection_timeout: Option<Duration>,
    pub debug: bool,
}

impl ProbeConfig {
    /// Config for `uri` (or the local default) with every other knob at its default.
    pub fn with_uri(uri: Option<String>) -> Self {
        let (uri, uri_source) = resolve_uri(uri);
        ProbeConfig {
            uri,
            uri_source,
            collection: DEFAULT_COLLECTION.to_string(),
            record_name: DEFAULT_RECORD_NAME.to_string(),
            server_selection_timeout: None,
            debug: false,
        }
    }
}

impl From<Cli> for ProbeConfig {
    fn from(args: Cli) -> Self {
        let (uri, uri_source) = resolve_uri(args.mongo_uri);
        ProbeConfig {
            uri,
            uri_source,
            collection: args.collection,
            record_name: args.name,
            server_selection_timeout: args.server_selection_timeout_ms.map(Duration::from_millis),
            debug: args.debug,
        }
    }
}

/// An empty value counts as unset, like an empty variable in a `.env` file.
fn resolve_uri(uri: Option<String>) -> (String, UriSource) {
    match uri {
        Some(uri) if !uri.trim().is_empty() => (uri, UriSource::Configured),
        _ => (DEFAULT_URI.to_string(), UriSource::Default),
    }
}

impl fmt::Display for ProbeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uri_source {
            UriSource::Configured => write!(f, "{}", self.uri),
            UriSource::Default => write!(f, "{} (default)", self.uri),
        }
    }
}

/// Loads `dir/.env` if present. Parent directories are not searched.
pub fn load_dotenv(dir: &Path) -> bool {
    dotenvy::from_path(dir.join(".env")).is_ok()
}
