//! Attribute (a=) value parsing.

use crate::error::{Error, Result};
use crate::types::sdp::{Attribute, MediaDirection};

/// Parses an attribute line (a=).
///
/// # Format
///
/// ```text
/// a=<flag>
/// a=<name>:<value>
/// ```
///
/// The direction flags are mapped to [`Attribute::Direction`]; any other
/// bare token becomes a [`Attribute::Flag`], and `name:value` pairs become
/// [`Attribute::Value`] with the value kept verbatim (it may contain
/// further colons).
pub fn parse_attribute(value: &str) -> Result<Attribute> {
    if let Some((name, val)) = value.split_once(':') {
        if name.is_empty() {
            return Err(Error::MalformedInput(format!(
                "attribute with empty name: {value}"
            )));
        }
        Ok(Attribute::Value(name.to_string(), val.to_string()))
    } else {
        match value {
            "sendrecv" => Ok(Attribute::Direction(MediaDirection::SendRecv)),
            "sendonly" => Ok(Attribute::Direction(MediaDirection::SendOnly)),
            "recvonly" => Ok(Attribute::Direction(MediaDirection::RecvOnly)),
            "inactive" => Ok(Attribute::Direction(MediaDirection::Inactive)),
            _ => Ok(Attribute::Flag(value.to_string())),
        }
    }
}
