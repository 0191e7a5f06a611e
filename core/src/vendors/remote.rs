//! Remote vendor service.
//!
//! `GET <endpoint>/<percent-encoded MAC>` answers `200` with the vendor name as
//! plain text, or `404` for addresses that are not registered.

use std::time::Duration;

use async_trait::async_trait;
use macfind_common::network::mac::MacAddress;
use macfind_common::vendors::VendorRecord;
use reqwest::{Client, StatusCode};
use tokio::time::timeout;
use tracing::debug;
use url::form_urlencoded;

use crate::error::LookupError;
use crate::vendors::VendorRepository;

#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl RemoteApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(concat!("macfind/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LookupError::RemoteRequest)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, mac: &MacAddress) -> String {
        let encoded: String = form_urlencoded::byte_serialize(mac.as_str().as_bytes()).collect();
        format!("{}/{}", self.endpoint.trim_end_matches('/'), encoded)
    }

    /// Queries the service, giving up after the configured timeout.
    ///
    /// The request runs on its own task. When the timeout wins, the task is
    /// left to finish on its own and drops whatever response it gets.
    pub async fn lookup(&self, mac: &MacAddress) -> Result<VendorRecord, LookupError> {
        let url = self.url_for(mac);
        debug!("querying {url}");

        let request = tokio::spawn(fetch(self.client.clone(), url));
        match timeout(self.timeout, request).await {
            Ok(joined) => joined?,
            Err(_elapsed) => Err(LookupError::Timeout(self.timeout)),
        }
    }
}

#[async_trait]
impl VendorRepository for RemoteApi {
    async fn get_vendor(&self, mac: &MacAddress) -> Result<VendorRecord, LookupError> {
        self.lookup(mac).await
    }
}

async fn fetch(client: Client, url: String) -> Result<VendorRecord, LookupError> {
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(LookupError::RemoteRequest)?;

    let status = response.status();
    debug!("{url} answered {status}");

    match status {
        StatusCode::OK => {
            let vendor = response.text().await.map_err(LookupError::RemoteRead)?;
            Ok(VendorRecord::Vendor(vendor))
        }
        StatusCode::NOT_FOUND => Ok(VendorRecord::Unresolvable),
        _ => Err(LookupError::RemoteStatus {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
        }),
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
