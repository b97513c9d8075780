use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use crate::error::{Family, InvalidAddress};
use crate::presentation::{DefaultPresentation, Presentation};

/// An IPv6 address, stored as its 16-byte binary form.
///
/// Addresses are ordered byte by byte, most significant byte first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddressV6 {
    octets: [u8; 16],
}

impl AddressV6 {
    /// The number of bytes in the binary form.
    pub const BYTES: usize = 16;

    /// Returns the unspecified address, `::`.
    pub const fn any() -> Self {
        Self { octets: [0; 16] }
    }

    /// Creates an address from its 16-byte binary form.
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        Self { octets }
    }

    /// Returns the 16-byte binary form.
    pub const fn octets(&self) -> [u8; 16] {
        self.octets
    }

    /// Parses an IPv6 literal, including `::` compression and an embedded
    /// IPv4 tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipaddr2::AddressV6;
    ///
    /// let addr = AddressV6::parse("2001:0db8::0001").unwrap();
    /// assert_eq!(addr.to_string(), "2001:db8::1");
    /// ```
    pub fn parse(text: &str) -> Result<Self, InvalidAddress> {
        Self::parse_with(&DefaultPresentation::default(), text)
    }

    /// Parses an IPv6 literal with the given converter.
    pub fn parse_with<P: Presentation>(presentation: &P, text: &str) -> Result<Self, InvalidAddress> {
        presentation
            .parse_v6(text)
            .map(Self::from_octets)
            .ok_or_else(|| InvalidAddress::new(text, Some(Family::V6)))
    }

    /// Renders the address with the given converter.
    pub fn format_with<P: Presentation>(&self, presentation: &P) -> String {
        presentation.format_v6(&self.octets)
    }
}

impl Ord for AddressV6 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.octets.as_slice().cmp(other.octets.as_slice())
    }
}

impl PartialOrd for AddressV6 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AddressV6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&DefaultPresentation::default()))
    }
}

impl FromStr for AddressV6 {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AddressV6 {
    type Error = InvalidAddress;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AddressV6 {
    type Error = InvalidAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<[u8; 16]> for AddressV6 {
    fn from(octets: [u8; 16]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv6Addr> for AddressV6 {
    fn from(ip: Ipv6Addr) -> Self {
        Self::from_octets(ip.octets())
    }
}

impl From<AddressV6> for Ipv6Addr {
    fn from(addr: AddressV6) -> Self {
        Ipv6Addr::from(addr.octets)
    }
}
