//! Syntactic validators for SDP addresses and type tokens.

use crate::error::{Error, Result};

/// Validates a network type token; RFC 4566 only defines "IN" (Internet).
pub fn validate_network_type(net_type: &str) -> Result<()> {
    if net_type != "IN" {
        return Err(Error::MalformedInput(format!(
            "invalid network type: {net_type}"
        )));
    }
    Ok(())
}

/// Validates an address type token; RFC 4566 defines "IP4" and "IP6".
pub fn validate_address_type(addr_type: &str) -> Result<()> {
    match addr_type {
        "IP4" | "IP6" => Ok(()),
        _ => Err(Error::MalformedInput(format!(
            "invalid address type: {addr_type}"
        ))),
    }
}

/// Checks whether a string is a syntactically valid dotted-quad IPv4 address.
pub fn is_valid_ipv4(addr: &str) -> bool {
    let segments: Vec<&str> = addr.split('.').collect();
    segments.len() == 4 && segments.iter().all(|s| s.parse::<u8>().is_ok())
}

/// Checks whether a string is a syntactically valid IPv6 address.
pub fn is_valid_ipv6(addr: &str) -> bool {
    let addr = addr
        .strip_prefix('[')
        .and_then(|a| a.strip_suffix(']'))
        .unwrap_or(addr);

    // At most one :: elision
    if addr.matches("::").count() > 1 {
        return false;
    }

    let segments: Vec<&str> = addr.split(':').collect();
    if segments.len() > 8 {
        return false;
    }

    segments.iter().all(|segment| {
        // Empty segments belong to a :: sequence
        segment.is_empty()
            || (segment.len() <= 4 && segment.chars().all(|c| c.is_ascii_hexdigit()))
    })
}

/// Checks whether a string is a syntactically valid DNS hostname.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > 255 {
        return false;
    }

    hostname.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Validates an address against its declared address type; hostnames are
/// accepted for either type.
pub fn is_valid_address(addr: &str, addr_type: &str) -> bool {
    match addr_type {
        "IP4" => {
            // Anything made of digits and dots is an IPv4 literal attempt,
            // not a hostname, so an incomplete quad is rejected
            if addr.chars().all(|c| c.is_ascii_digit() || c == '.') {
                is_valid_ipv4(addr)
            } else {
                is_valid_hostname(addr)
            }
        }
        "IP6" => {
            if addr.contains(':') {
                is_valid_ipv6(addr)
            } else {
                is_valid_hostname(addr)
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_type() {
        assert!(validate_network_type("IN").is_ok());
        assert!(validate_network_type("ATM").is_err());
        assert!(validate_network_type("in").is_err());
    }

    #[test]
    fn test_address_type() {
        assert!(validate_address_type("IP4").is_ok());
        assert!(validate_address_type("IP6").is_ok());
        assert!(validate_address_type("IPX").is_err());
    }

    #[test]
    fn test_ipv4() {
        assert!(is_valid_ipv4("192.168.1.1"));
        assert!(is_valid_ipv4("0.0.0.0"));
        assert!(!is_valid_ipv4("192.168.1"));
        assert!(!is_valid_ipv4("192.168.1.256"));
        assert!(!is_valid_ipv4("192.168.1.x"));
    }

    #[test]
    fn test_ipv6() {
        assert!(is_valid_ipv6("2001:db8::1"));
        assert!(is_valid_ipv6("FF15::101"));
        assert!(is_valid_ipv6("[2001:db8::1]"));
        assert!(!is_valid_ipv6("2001:zzzz::1"));
        assert!(!is_valid_ipv6("1::2::3"));
    }

    #[test]
    fn test_hostname() {
        assert!(is_valid_hostname("example.com"));
        assert!(is_valid_hostname("a-b.example"));
        assert!(!is_valid_hostname(""));
        assert!(!is_valid_hostname("-bad.example"));
        assert!(!is_valid_hostname("bad-.example"));
        assert!(!is_valid_hostname("double..dot"));
    }

    #[test]
    fn test_address_by_type() {
        assert!(is_valid_address("10.47.16.5", "IP4"));
        assert!(is_valid_address("media.example.com", "IP4"));
        assert!(is_valid_address("2001:db8::1", "IP6"));
        assert!(is_valid_address("media.example.com", "IP6"));
        assert!(!is_valid_address("192.168.1", "IP4"));
        assert!(!is_valid_address("anything", "IPX"));
    }
}
