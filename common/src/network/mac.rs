//! # MAC Address Validation
//!
//! Only the colon-separated form is accepted: six groups of exactly two hex
//! digits, e.g. `FC:FB:FB:01:FA:21`. Digits may be upper or lower case and the
//! input casing is kept, since the local database is matched byte for byte.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const OCTETS: usize = 6;
const MAC_LEN: usize = OCTETS * 3 - 1;
const OUI_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address: {0}")]
pub struct InvalidMac(pub String);

/// A syntactically valid MAC address, exactly as the caller wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

/// Organizationally Unique Identifier: the first three octets of a
/// [`MacAddress`] including both separators (`FC:FB:FB`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oui(String);

impl MacAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn oui(&self) -> Oui {
        Oui(self.0[..OUI_LEN].to_string())
    }
}

impl Oui {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MacAddress {
    type Err = InvalidMac;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_valid_mac(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidMac(s.to_string()))
        }
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Oui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validates `address` and returns its OUI.
pub fn parse(address: &str) -> Result<Oui, InvalidMac> {
    address.parse::<MacAddress>().map(|mac| mac.oui())
}

fn is_valid_mac(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != MAC_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(idx, b)| {
        if idx % 3 == 2 {
            *b == b':'
        } else {
            b.is_ascii_hexdigit()
        }
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
