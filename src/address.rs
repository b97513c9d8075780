use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::{Family, InvalidAddress};
use crate::presentation::{DefaultPresentation, Presentation};
use crate::v4::AddressV4;
use crate::v6::AddressV6;

/// Either an IPv4 or an IPv6 address.
///
/// Addresses are totally ordered: within a family they follow that family's
/// ordering, and every IPv4 address sorts before every IPv6 address. An IPv4
/// address never equals an IPv6 address, including its IPv4-mapped form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4(AddressV4),
    V6(AddressV6),
}

impl Address {
    /// Parses an IPv4 or IPv6 literal.
    ///
    /// The text is tried as IPv4 first and as IPv6 second; whichever parser
    /// accepts it decides the family.
    pub fn parse(text: &str) -> Result<Self, InvalidAddress> {
        Self::parse_with(&DefaultPresentation::default(), text)
    }

    /// Parses an IPv4 or IPv6 literal with the given converter.
    pub fn parse_with<P: Presentation>(presentation: &P, text: &str) -> Result<Self, InvalidAddress> {
        if let Some(octets) = presentation.parse_v4(text) {
            return Ok(Address::V4(AddressV4::from_octets(octets)));
        }
        tracing::trace!(input = text, "not an IPv4 literal, trying IPv6");
        if let Some(octets) = presentation.parse_v6(text) {
            return Ok(Address::V6(AddressV6::from_octets(octets)));
        }
        tracing::trace!(input = text, "not an IP literal");
        Err(InvalidAddress::new(text, None))
    }

    /// Returns the family of the held address.
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// Returns `true` if this is an IPv4 address.
    pub fn is_v4(&self) -> bool {
        matches!(self, Address::V4(_))
    }

    /// Returns `true` if this is an IPv6 address.
    pub fn is_v6(&self) -> bool {
        matches!(self, Address::V6(_))
    }

    /// Returns the IPv4 address.
    ///
    /// # Panics
    ///
    /// Panics if the address is an IPv6 address.
    pub fn as_v4(&self) -> AddressV4 {
        match self {
            Address::V4(addr) => *addr,
            Address::V6(addr) => panic!("{addr} is not an IPv4 address"),
        }
    }

    /// Returns the IPv6 address.
    ///
    /// # Panics
    ///
    /// Panics if the address is an IPv4 address.
    pub fn as_v6(&self) -> AddressV6 {
        match self {
            Address::V6(addr) => *addr,
            Address::V4(addr) => panic!("{addr} is not an IPv6 address"),
        }
    }

    /// Renders the address with the given converter.
    pub fn format_with<P: Presentation>(&self, presentation: &P) -> String {
        match self {
            Address::V4(addr) => addr.format_with(presentation),
            Address::V6(addr) => addr.format_with(presentation),
        }
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Address::V4(a), Address::V4(b)) => a.cmp(b),
            (Address::V6(a), Address::V6(b)) => a.cmp(b),
            (Address::V4(_), Address::V6(_)) => Ordering::Less,
            (Address::V6(_), Address::V4(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(addr) => fmt::Display::fmt(addr, f),
            Address::V6(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

impl FromStr for Address {
    type Err = InvalidAddress;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = InvalidAddress;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = InvalidAddress;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<AddressV4> for Address {
    fn from(addr: AddressV4) -> Self {
        Address::V4(addr)
    }
}

impl From<AddressV6> for Address {
    fn from(addr: AddressV6) -> Self {
        Address::V6(addr)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::V4(v4.into()),
            IpAddr::V6(v6) => Address::V6(v6.into()),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(v4) => IpAddr::V4(v4.into()),
            Address::V6(v6) => IpAddr::V6(v6.into()),
        }
    }
}
