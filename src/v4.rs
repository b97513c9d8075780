use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::{Family, InvalidAddress};
use crate::presentation::{DefaultPresentation, Presentation};

/// An IPv4 address, stored as 4 bytes in network order.
///
/// Addresses are ordered numerically, so `9.255.255.255 < 10.0.0.1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddressV4 {
    octets: [u8; 4],
}

impl AddressV4 {
    /// The number of bytes in the binary form.
    pub const BYTES: usize = 4;

    /// Returns the unspecified address, `0.0.0.0`.
    pub const fn any() -> Self {
        Self { octets: [0; 4] }
    }

    /// Creates an address from network-order bytes.
    pub const fn from_octets(octets: [u8; 4]) -> Self {
        Self { octets }
    }

    /// Returns the network-order bytes.
    pub const fn octets(&self) -> [u8; 4] {
        self.octets
    }

    /// Parses a dotted-decimal IPv4 literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipaddr2::AddressV4;
    ///
    /// let addr = AddressV4::parse("192.168.1.1").unwrap();
    /// assert_eq!(addr.octets(), [192, 168, 1, 1]);
    /// assert!(AddressV4::parse("2001:db8::1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, InvalidAddress> {
        Self::parse_with(&DefaultPresentation::default(), text)
    }

    /// Parses a dotted-decimal IPv4 literal with the given converter.
    pub fn parse_with<P: Presentation>(presentation: &P, text: &str) -> Result<Self, InvalidAddress> {
        presentation
            .parse_v4(text)
            .map(Self::from_octets)
            .ok_or_else(|| InvalidAddress::new(text, Some(Family::V4)))
    }

    /// Renders the address with the given converter.
    pub fn format_with<P: Presentation>(&self, presentation: &P) -> String {
        presentation.format_v4(&self.octets)
    }

    fn to_bits(self) -> u32 {
        u32::from_be_bytes(self.octets)
    }
}

impl Ord for AddressV4 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_bits().cmp(&other.to_bits())
    }
}

impl PartialOrd for AddressV4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AddressV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with(&DefaultPresentation::default()))
    }
}

impl FromStr for AddressV4 {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for AddressV4 {
    type Error = InvalidAddress;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AddressV4 {
    type Error = InvalidAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<[u8; 4]> for AddressV4 {
    fn from(octets: [u8; 4]) -> Self {
        Self::from_octets(octets)
    }
}

impl From<Ipv4Addr> for AddressV4 {
    fn from(ip: Ipv4Addr) -> Self {
        Self::from_octets(ip.octets())
    }
}

impl From<AddressV4> for Ipv4Addr {
    fn from(addr: AddressV4) -> Self {
        Ipv4Addr::from(addr.octets)
    }
}
