#![doc = include_str!("../README.md")]

pub(crate) mod address;
pub(crate) mod error;
#[cfg(all(unix, feature = "platform"))]
pub(crate) mod platform;
pub(crate) mod presentation;
pub(crate) mod v4;
pub(crate) mod v6;

pub use address::Address;
pub use error::{Family, InvalidAddress};
#[cfg(all(unix, feature = "platform"))]
pub use platform::{Inet, INET6_ADDRSTRLEN, INET_ADDRSTRLEN};
pub use presentation::{DefaultPresentation, Presentation, StdNet};
pub use v4::AddressV4;
pub use v6::AddressV6;
