use std::fmt;

/// Printed in place of a vendor name when none can be determined. Most of
/// these are randomized (locally administered) addresses.
pub const UNRESOLVABLE: &str = "?(randomized MAC)";

/// Outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorRecord {
    Vendor(String),
    /// Neither source knows the address. Not an error.
    Unresolvable,
}

impl VendorRecord {
    pub fn vendor(&self) -> Option<&str> {
        match self {
            VendorRecord::Vendor(name) => Some(name),
            VendorRecord::Unresolvable => None,
        }
    }

    pub fn is_unresolvable(&self) -> bool {
        matches!(self, VendorRecord::Unresolvable)
    }
}

impl fmt::Display for VendorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorRecord::Vendor(name) => f.write_str(name),
            VendorRecord::Unresolvable => f.write_str(UNRESOLVABLE),
        }
    }
}

/// Where a [`VendorRecord`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    LocalDb,
    RemoteApi,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::LocalDb => f.write_str("db"),
            Source::RemoteApi => f.write_str("api"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: VendorRecord,
    pub source: Source,
}

impl Resolution {
    pub fn new(record: VendorRecord, source: Source) -> Self {
        Self { record, source }
    }
}
