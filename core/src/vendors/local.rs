//! Flat-file OUI database.
//!
//! One record per line, the OUI and the vendor text separated by a tab:
//!
//! ```text
//! FC:F1:CD	Optex-Fa	Optex-Fa Co.,Ltd.
//! ```
//!
//! Everything after the first tab is returned verbatim.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use macfind_common::network::mac::{MacAddress, Oui};
use macfind_common::vendors::VendorRecord;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::LookupError;
use crate::vendors::VendorRepository;

const FIELD_SEPARATOR: char = '\t';

#[derive(Debug, Clone)]
pub struct LocalDatabase {
    path: PathBuf,
}

impl LocalDatabase {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns a repository for `path` only if a regular file exists there.
    pub fn probe(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Some(Self::new(path)),
            Ok(_) => {
                debug!("{} is not a regular file", path.display());
                None
            }
            Err(e) => {
                debug!("local database {} unavailable: {e}", path.display());
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scans the database for `oui`. The file is closed when this returns,
    /// whichever way it returns.
    pub async fn lookup(&self, oui: &Oui) -> Result<VendorRecord, LookupError> {
        let file = File::open(&self.path)
            .await
            .map_err(|e| LookupError::local_db(&self.path, e))?;
        let mut lines = BufReader::new(file).lines();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| LookupError::local_db(&self.path, e))?
        {
            if let Some(vendor) = match_line(&line, oui) {
                return Ok(VendorRecord::Vendor(vendor.to_string()));
            }
        }

        Ok(VendorRecord::Unresolvable)
    }
}

#[async_trait]
impl VendorRepository for LocalDatabase {
    async fn get_vendor(&self, mac: &MacAddress) -> Result<VendorRecord, LookupError> {
        self.lookup(&mac.oui()).await
    }
}

fn match_line<'a>(line: &'a str, oui: &Oui) -> Option<&'a str> {
    let (key, vendor) = line.split_once(FIELD_SEPARATOR)?;
    (key == oui.as_str()).then_some(vendor)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
