use std::path::PathBuf;
use std::time::Duration;

/// Base URL of the remote vendor service. The percent-encoded MAC address is
/// appended as the last path segment.
pub const DEFAULT_ENDPOINT: &str = "http://api.macvendors.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_DB_PATH: &str = "macfind_local";

#[derive(Debug, Clone)]
pub struct Config {
    /// Flat OUI database consulted before the remote service.
    pub db_path: PathBuf,
    pub endpoint: String,
    /// Upper bound for the whole remote exchange.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
