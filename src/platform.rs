//! Converter backed by the C library's `inet_pton`/`inet_ntop`.

use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_void};

use libc::{socklen_t, AF_INET, AF_INET6};

use crate::presentation::{Presentation, StdNet};

/// Buffer size for the longest IPv4 text form, including the NUL byte.
pub const INET_ADDRSTRLEN: usize = 16;
/// Buffer size for the longest IPv6 text form, including the NUL byte.
pub const INET6_ADDRSTRLEN: usize = 46;

extern "C" {
    fn inet_pton(af: c_int, src: *const c_char, dst: *mut c_void) -> c_int;
    fn inet_ntop(af: c_int, src: *const c_void, dst: *mut c_char, size: socklen_t)
        -> *const c_char;
}

/// Converter that calls the platform's `inet_pton`/`inet_ntop`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Inet;

impl Inet {
    fn pton<const N: usize>(af: c_int, text: &str) -> Option<[u8; N]> {
        // Interior NUL bytes would silently truncate the input.
        let c_text = CString::new(text).ok()?;
        let mut out = [0u8; N];
        let ret = unsafe { inet_pton(af, c_text.as_ptr(), out.as_mut_ptr() as *mut c_void) };
        if ret == 1 {
            Some(out)
        } else {
            None
        }
    }

    fn ntop<const N: usize, const LEN: usize>(af: c_int, octets: &[u8; N]) -> Option<String> {
        let mut buffer = [0u8; LEN];
        let ret = unsafe {
            inet_ntop(
                af,
                octets.as_ptr() as *const c_void,
                buffer.as_mut_ptr() as *mut c_char,
                LEN as socklen_t,
            )
        };
        if ret.is_null() {
            return None;
        }
        CStr::from_bytes_until_nul(&buffer)
            .ok()?
            .to_str()
            .ok()
            .map(|s| s.to_owned())
    }
}

impl Presentation for Inet {
    fn parse_v4(&self, text: &str) -> Option<[u8; 4]> {
        Self::pton(AF_INET, text)
    }

    fn parse_v6(&self, text: &str) -> Option<[u8; 16]> {
        Self::pton(AF_INET6, text)
    }

    fn format_v4(&self, octets: &[u8; 4]) -> String {
        Self::ntop::<4, INET_ADDRSTRLEN>(AF_INET, octets).unwrap_or_else(|| StdNet.format_v4(octets))
    }

    fn format_v6(&self, octets: &[u8; 16]) -> String {
        Self::ntop::<16, INET6_ADDRSTRLEN>(AF_INET6, octets)
            .unwrap_or_else(|| StdNet.format_v6(octets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pton_v4() {
        assert_eq!(Inet.parse_v4("192.168.1.1"), Some([192, 168, 1, 1]));
        assert_eq!(Inet.parse_v4("0.0.0.0"), Some([0; 4]));
        assert_eq!(Inet.parse_v4("192.168.1"), None);
        assert_eq!(Inet.parse_v4("192.168.1.256"), None);
        assert_eq!(Inet.parse_v4("2001:db8::1"), None);
    }

    #[test]
    fn test_pton_rejects_interior_nul() {
        assert_eq!(Inet.parse_v4("10.0.0.1\0junk"), None);
        assert_eq!(Inet.parse_v6("::1\0junk"), None);
    }

    #[test]
    fn test_ntop() {
        assert_eq!(Inet.format_v4(&[127, 0, 0, 1]), "127.0.0.1");
        assert_eq!(Inet.format_v4(&[255; 4]), "255.255.255.255");
        assert_eq!(Inet.format_v6(&[0u8; 16]), "::");
        let mut loopback = [0u8; 16];
        loopback[15] = 1;
        assert_eq!(Inet.format_v6(&loopback), "::1");
        // Longest possible text form still fits the buffer.
        let longest = Inet.format_v6(&[0xff; 16]);
        assert_eq!(longest, "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff");
        assert!(longest.len() < INET6_ADDRSTRLEN);
    }

    #[test]
    fn test_ntop_embedded_ipv4() {
        let compat = Inet.parse_v6("::1.2.3.4").unwrap();
        assert_eq!(compat[12..], [1, 2, 3, 4]);
        assert_eq!(Inet.format_v6(&compat), "::1.2.3.4");
        let mapped = Inet.parse_v6("::ffff:1.2.3.4").unwrap();
        assert_eq!(Inet.format_v6(&mapped), "::ffff:1.2.3.4");
    }
}
