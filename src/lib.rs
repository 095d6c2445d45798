pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mongo;
pub mod probe;
pub mod record;
pub mod report;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use probe::{run_probe, ProbeOutcome};
