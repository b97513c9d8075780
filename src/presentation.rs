//! Conversion between textual and binary address forms.
//!
//! Address types never parse or render text themselves; they delegate to a
//! [`Presentation`] implementation. [`DefaultPresentation`] is used by
//! `parse`, `FromStr` and `Display`, while the `*_with` methods accept any
//! implementation, which makes it possible to plug in a different parser or a
//! fake one in tests.

use std::net::{Ipv4Addr, Ipv6Addr};

/// A pure text<->binary converter for IPv4 and IPv6 addresses.
///
/// Implementations must be deterministic: the same input always yields the
/// same output.
pub trait Presentation {
    /// Parses dotted-decimal IPv4 text into network-order bytes.
    fn parse_v4(&self, text: &str) -> Option<[u8; 4]>;

    /// Parses IPv6 text into its 16-byte form.
    fn parse_v6(&self, text: &str) -> Option<[u8; 16]>;

    /// Renders network-order IPv4 bytes as text.
    fn format_v4(&self, octets: &[u8; 4]) -> String;

    /// Renders a 16-byte IPv6 address as text.
    fn format_v6(&self, octets: &[u8; 16]) -> String;
}

/// Converter backed by the `std::net` parsers and formatters.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdNet;

impl Presentation for StdNet {
    fn parse_v4(&self, text: &str) -> Option<[u8; 4]> {
        text.parse::<Ipv4Addr>().ok().map(|ip| ip.octets())
    }

    fn parse_v6(&self, text: &str) -> Option<[u8; 16]> {
        text.parse::<Ipv6Addr>().ok().map(|ip| ip.octets())
    }

    fn format_v4(&self, octets: &[u8; 4]) -> String {
        Ipv4Addr::from(*octets).to_string()
    }

    fn format_v6(&self, octets: &[u8; 16]) -> String {
        Ipv6Addr::from(*octets).to_string()
    }
}

/// The converter used when none is given explicitly.
///
/// With the `platform` feature on Unix this is [`Inet`](crate::Inet),
/// otherwise [`StdNet`]. Both accept the same text, but renderings can
/// differ: the deprecated IPv4-compatible form `::1.2.3.4` is printed as
/// `::1.2.3.4` by `Inet` and as `::102:304` by `StdNet`, so `Display`
/// output for such addresses depends on the feature.
#[cfg(all(unix, feature = "platform"))]
pub type DefaultPresentation = crate::platform::Inet;

/// The converter used when none is given explicitly.
///
/// See the `platform` variant for how renderings differ between converters.
#[cfg(not(all(unix, feature = "platform")))]
pub type DefaultPresentation = StdNet;
