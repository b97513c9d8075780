use std::fmt;

/// The two address families an [`Address`](crate::Address) can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    V4,
    V6,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Text that could not be parsed as an address.
///
/// `family` is the family the text was parsed as, or `None` when family
/// detection failed for both IPv4 and IPv6.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {} address {input:?}", label(.family))]
pub struct InvalidAddress {
    input: String,
    family: Option<Family>,
}

fn label(family: &Option<Family>) -> &'static str {
    match family {
        Some(Family::V4) => "IPv4",
        Some(Family::V6) => "IPv6",
        None => "IP",
    }
}

impl InvalidAddress {
    pub(crate) fn new(input: &str, family: Option<Family>) -> Self {
        Self {
            input: input.to_owned(),
            family,
        }
    }

    /// The offending input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The family the input was parsed as, if any.
    pub fn family(&self) -> Option<Family> {
        self.family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InvalidAddress::new("1.2.3", Some(Family::V4));
        assert_eq!(err.to_string(), "invalid IPv4 address \"1.2.3\"");
        let err = InvalidAddress::new("2001::db8::1", Some(Family::V6));
        assert_eq!(err.to_string(), "invalid IPv6 address \"2001::db8::1\"");
        let err = InvalidAddress::new("not-an-ip", None);
        assert_eq!(err.to_string(), "invalid IP address \"not-an-ip\"");
        assert_eq!(err.input(), "not-an-ip");
        assert_eq!(err.family(), None);
    }

    #[test]
    fn test_family_display() {
        assert_eq!(Family::V4.to_string(), "IPv4");
        assert_eq!(Family::V6.to_string(), "IPv6");
    }
}
