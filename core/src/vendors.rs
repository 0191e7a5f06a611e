use async_trait::async_trait;
use macfind_common::network::mac::MacAddress;
use macfind_common::vendors::VendorRecord;

use crate::error::LookupError;

pub mod local;
pub mod remote;

pub use local::LocalDatabase;
pub use remote::RemoteApi;

/// Defines the contract for resolving device manufacturers from MAC addresses.
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Retrieves the vendor for an already validated MAC address.
    ///
    /// # Returns
    /// * `Ok(VendorRecord::Vendor(_))` - The repository knows the vendor.
    /// * `Ok(VendorRecord::Unresolvable)` - The repository has no entry for it.
    /// * `Err(_)` - The repository itself could not be consulted.
    async fn get_vendor(&self, mac: &MacAddress) -> Result<VendorRecord, LookupError>;
}
