//! Session-level value parsers: origin (o=), connection data (c=),
//! bandwidth (b=), and encryption key (k=).
//!
//! Each parser takes the raw value substring of its line and returns a
//! structured record or fails with a malformed-input error; none of them
//! reads additional lines.

use nom::{
    bytes::complete::{tag, take_until},
    character::complete::digit1,
    IResult,
};

use crate::error::{Error, Result};
use crate::types::sdp::{Bandwidth, ConnectionData, EncryptionKey, Origin};

use super::validation::{is_valid_address, validate_address_type, validate_network_type};

/// Parses an origin line (o=).
///
/// # Format
///
/// ```text
/// o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>
/// ```
///
/// Exactly six whitespace-separated parts; the session version must be
/// numeric, the network type must be "IN", the address type "IP4" or
/// "IP6", and the address must be syntactically valid for its type.
pub fn parse_origin_line(value: &str) -> Result<Origin> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(Error::MalformedInput(format!(
            "invalid origin line format: {value}"
        )));
    }

    let sess_version = parts[2].parse::<u64>().map_err(|_| {
        Error::MalformedInput(format!("invalid origin session version: {}", parts[2]))
    })?;

    let net_type = parts[3];
    let addr_type = parts[4];
    let unicast_address = parts[5];

    validate_network_type(net_type)?;
    validate_address_type(addr_type)?;
    if !is_valid_address(unicast_address, addr_type) {
        return Err(Error::MalformedInput(format!(
            "invalid origin address: {unicast_address}"
        )));
    }

    Ok(Origin {
        username: parts[0].to_string(),
        sess_id: parts[1].to_string(),
        sess_version,
        net_type: net_type.to_string(),
        addr_type: addr_type.to_string(),
        unicast_address: unicast_address.to_string(),
    })
}

/// Parses a connection line (c=).
///
/// # Format
///
/// ```text
/// c=<nettype> <addrtype> <connection-address>
/// ```
///
/// For IP4 multicast, the address may carry a TTL and an address count
/// (`c=IN IP4 224.2.36.42/127/3`); for IP6 the first suffix is the scope.
pub fn parse_connection_line(value: &str) -> Result<ConnectionData> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 3 {
        return Err(Error::MalformedInput(format!(
            "invalid connection line format: {value}"
        )));
    }

    let net_type = parts[0];
    let addr_type = parts[1];
    validate_network_type(net_type)?;
    validate_address_type(addr_type)?;

    let addr_parts: Vec<&str> = parts[2].split('/').collect();
    if addr_parts.len() > 3 {
        return Err(Error::MalformedInput(format!(
            "invalid connection address: {}",
            parts[2]
        )));
    }

    let base_addr = addr_parts[0];
    if !is_valid_address(base_addr, addr_type) {
        return Err(Error::MalformedInput(format!(
            "invalid connection address: {base_addr}"
        )));
    }

    let mut ttl = None;
    let mut address_count = None;
    if addr_parts.len() > 1 {
        ttl = Some(addr_parts[1].parse::<u8>().map_err(|_| {
            Error::MalformedInput(format!("invalid connection TTL: {}", addr_parts[1]))
        })?);
    }
    if addr_parts.len() > 2 {
        address_count = Some(addr_parts[2].parse::<u32>().map_err(|_| {
            Error::MalformedInput(format!("invalid multicast count: {}", addr_parts[2]))
        })?);
    }

    Ok(ConnectionData {
        net_type: net_type.to_string(),
        addr_type: addr_type.to_string(),
        connection_address: base_addr.to_string(),
        ttl,
        address_count,
    })
}

fn bandwidth(input: &str) -> IResult<&str, (&str, u64)> {
    let (input, bw_type) = take_until(":")(input)?;
    let (input, _) = tag(":")(input)?;
    let (input, digits) = digit1(input)?;

    let bw_value = match digits.parse::<u64>() {
        Ok(val) => val,
        Err(_) => {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Digit,
            )))
        }
    };

    Ok((input, (bw_type, bw_value)))
}

/// Parses a bandwidth line (b=).
///
/// # Format
///
/// ```text
/// b=<bwtype>:<bandwidth>
/// ```
///
/// The bwtype is a token such as "AS" or "CT"; the value is in kilobits
/// per second.
pub fn parse_bandwidth_line(value: &str) -> Result<Bandwidth> {
    let (rest, (bw_type, bandwidth)) = bandwidth(value)?;
    if bw_type.is_empty() || !rest.is_empty() {
        return Err(Error::MalformedInput(format!(
            "invalid bandwidth line: {value}"
        )));
    }

    Ok(Bandwidth {
        bw_type: bw_type.to_string(),
        bandwidth,
    })
}

/// Parses an encryption key line (k=).
///
/// # Format
///
/// ```text
/// k=<method>
/// k=<method>:<encryption key>
/// ```
///
/// RFC 4566 defines the methods `clear`, `base64`, `uri` (each carrying a
/// key) and the bare `prompt`; anything else is malformed.
pub fn parse_encryption_key_line(value: &str) -> Result<EncryptionKey> {
    match value.split_once(':') {
        Some(("clear", key)) if !key.is_empty() => Ok(EncryptionKey::Clear(key.to_string())),
        Some(("base64", key)) if !key.is_empty() => Ok(EncryptionKey::Base64(key.to_string())),
        Some(("uri", key)) if !key.is_empty() => Ok(EncryptionKey::Uri(key.to_string())),
        None if value == "prompt" => Ok(EncryptionKey::Prompt),
        _ => Err(Error::MalformedInput(format!(
            "invalid encryption key: {value}"
        ))),
    }
}
