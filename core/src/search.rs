//! # Vendor Search Service
//!
//! Implements the "MAC to vendor" use case.
//!
//! A search validates the address, then asks the local database (if one was
//! found when the service was built) and finally the remote service. Local
//! failures are logged and skipped. Everything else ends the search.

use macfind_common::config::Config;
use macfind_common::network::mac::MacAddress;
use macfind_common::vendors::{Resolution, Source};
use tracing::{debug, warn};

use crate::error::LookupError;
use crate::vendors::{LocalDatabase, RemoteApi, VendorRepository};

pub struct VendorSearch {
    local: Option<Box<dyn VendorRepository>>,
    remote: Box<dyn VendorRepository>,
}

impl VendorSearch {
    pub fn new(
        local: Option<Box<dyn VendorRepository>>,
        remote: Box<dyn VendorRepository>,
    ) -> Self {
        Self { local, remote }
    }

    /// Builds the default pipeline. Whether the local database exists is
    /// decided here, once, for the lifetime of the service.
    pub fn from_config(cfg: &Config) -> Result<Self, LookupError> {
        let local = LocalDatabase::probe(&cfg.db_path)
            .map(|db| Box::new(db) as Box<dyn VendorRepository>);
        if local.is_none() {
            debug!("no local database at {}, using remote only", cfg.db_path.display());
        }

        let remote = RemoteApi::new(cfg.endpoint.clone(), cfg.timeout)?;
        Ok(Self::new(local, Box::new(remote)))
    }

    pub fn has_local_db(&self) -> bool {
        self.local.is_some()
    }

    /// Resolves `address` to a vendor.
    ///
    /// 1. **Validation**: malformed input fails before any lookup.
    /// 2. **Local database**: a match or a miss is final.
    /// 3. **Remote service**: reached when there is no local database or it
    ///    could not be read.
    pub async fn search(&self, address: &str) -> Result<Resolution, LookupError> {
        let mac: MacAddress = address.parse()?;

        if let Some(local) = &self.local {
            match local.get_vendor(&mac).await {
                Ok(record) => {
                    debug!("{mac} resolved from local database");
                    return Ok(Resolution::new(record, Source::LocalDb));
                }
                Err(e) => warn!("{e}, falling back to remote lookup"),
            }
        }

        let record = self.remote.get_vendor(&mac).await?;
        debug!("{mac} resolved from remote service");
        Ok(Resolution::new(record, Source::RemoteApi))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
