//! # macfind core
//!
//! Resolves the vendor behind a MAC address.
//!
//! * **[`vendors`]**: the [`vendors::VendorRepository`] port and its two
//!   adapters, a flat-file database and a remote HTTP service.
//! * **[`search`]**: the pipeline that validates input and consults the
//!   repositories in order.
//! * **[`error`]**: the error kinds a lookup can end with.

pub mod error;
pub mod search;
pub mod vendors;

pub use error::LookupError;
pub use search::VendorSearch;
