//! INET address values: parsed addresses and text awaiting parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};

/// An INET column value.
///
/// Hosts hand the rules either an address that has already been parsed
/// (for example by a database driver) or raw text that still has to be
/// checked against IPv4/IPv6 grammar. Resolving that distinction at the
/// type level keeps the IP rule free of runtime capability probing.
///
/// # Examples
///
/// ```
/// use parapet::record::domain::InetValue;
/// use std::net::{IpAddr, Ipv4Addr};
///
/// let parsed = InetValue::Address(IpAddr::V4(Ipv4Addr::new(192, 168, 16, 72)));
/// assert!(parsed.is_parsed());
///
/// let textual = InetValue::from("192.168.16.72");
/// assert_eq!(textual.resolve().ok(), Some(IpAddr::V4(Ipv4Addr::new(192, 168, 16, 72))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InetValue {
    /// An address that has already been parsed.
    Address(IpAddr),
    /// Text to be parsed against IPv4/IPv6 grammar.
    Text(String),
}

impl InetValue {
    /// Returns `true` if the value is already a parsed address.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// Resolves the value to a concrete address.
    ///
    /// A parsed address is returned unchanged; textual values are parsed.
    ///
    /// # Errors
    ///
    /// Returns [`AddrParseError`] when the textual form is not a valid IPv4
    /// or IPv6 address.
    pub fn resolve(&self) -> Result<IpAddr, AddrParseError> {
        match self {
            Self::Address(address) => Ok(*address),
            Self::Text(text) => text.parse(),
        }
    }
}

impl fmt::Display for InetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "{address}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<IpAddr> for InetValue {
    fn from(address: IpAddr) -> Self {
        Self::Address(address)
    }
}

impl From<Ipv4Addr> for InetValue {
    fn from(address: Ipv4Addr) -> Self {
        Self::Address(IpAddr::V4(address))
    }
}

impl From<Ipv6Addr> for InetValue {
    fn from(address: Ipv6Addr) -> Self {
        Self::Address(IpAddr::V6(address))
    }
}

impl From<&str> for InetValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for InetValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
