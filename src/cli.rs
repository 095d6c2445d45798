// src/cli.rs
use clap::Parser;

/// Check that a MongoDB database is reachable and writable
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URI")]
    pub mongo_uri: Option<String>,

    /// Collection the throwaway document is written to
    #[arg(long, default_value = "tests")]
    pub collection: String,

    /// Name stored on the throwaway document
    #[arg(long, default_value = "Backend Test")]
    pub name: String,

    /// Server selection timeout in milliseconds (driver default if unset)
    #[arg(long)]
    pub server_selection_timeout_ms: Option<u64>,

    /// Print the inserted document and enable debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::try_parse_from(["mongo-probe"]).unwrap();
        assert_eq!(cli.collection, "tests");
        assert_eq!(cli.name, "Backend Test");
        assert_eq!(cli.server_selection_timeout_ms, None);
        assert!(!cli.debug);
    }

    #[test]
    fn explicit_uri_flag() {
        let cli = Cli::try_parse_from([
            "mongo-probe",
            "--mongo-uri",
            "mongodb://db.internal:27018/shop",
            "--server-selection-timeout-ms",
            "500",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.mongo_uri.as_deref(), Some("mongodb://db.internal:27018/shop"));
        assert_eq!(cli.server_selection_timeout_ms, Some(500));
        assert!(cli.debug);
    }
}
