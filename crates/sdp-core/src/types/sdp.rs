//! Data model for RFC 4566 session descriptions.
//!
//! A [`SessionDescription`] is the structured result of parsing the
//! session-level part of an SDP payload: version, originator, session
//! name, optional connection/bandwidth/timezone/key information, timing
//! entries, and the ordered list of attributes.
//!
//! All types here are plain owned values: a parsed description shares no
//! storage with the input it was parsed from, and parsing the same input
//! twice yields two independent, value-equal results.

use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::parse_sdp;

/// Represents the Origin (o=) field in an SDP message.
///
/// Format: `o=<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// Username of the originator (often "-")
    pub username: String,
    /// Session ID (unique identifier for this session; numeric by
    /// convention but textual by grammar)
    pub sess_id: String,
    /// Session version (increments when the session is modified)
    pub sess_version: u64,
    /// Network type (typically "IN" for Internet)
    pub net_type: String,
    /// Address type ("IP4" or "IP6")
    pub addr_type: String,
    /// Unicast address (hostname or IP address)
    pub unicast_address: String,
}

/// Represents the Connection Data (c=) field in an SDP message.
///
/// Format: `c=<nettype> <addrtype> <connection-address>`
///
/// For IP4 multicast the connection address may carry a TTL and an address
/// count (`224.2.36.42/127/3`); for IP6 the first suffix is the scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionData {
    /// Network type (typically "IN" for Internet)
    pub net_type: String,
    /// Address type ("IP4" or "IP6")
    pub addr_type: String,
    /// Base connection address without the TTL/count suffixes
    pub connection_address: String,
    /// TTL for IP4 multicast addresses (scope for IP6)
    pub ttl: Option<u8>,
    /// Number of consecutive addresses for multicast sessions (1 when absent)
    pub address_count: Option<u32>,
}

/// Represents the Bandwidth (b=) field in an SDP message.
///
/// Format: `b=<bwtype>:<bandwidth>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bandwidth {
    /// Bandwidth type token, usually "AS" or "CT"
    pub bw_type: String,
    /// Bandwidth value in kilobits per second
    pub bandwidth: u64,
}

/// Represents a Time Description (t=) field and its optional repeat (r=).
///
/// Format: `t=<start-time> <stop-time>`
///
/// A repeat line, when present, must immediately follow its timing line;
/// the parser pairs the two into a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDescription {
    /// Start time (NTP timestamp, 0 means the session is permanent)
    pub start_time: u64,
    /// Stop time (NTP timestamp, 0 means open-ended)
    pub stop_time: u64,
    /// Repeat specification from the r= line directly after this t= line
    pub repeat: Option<RepeatTime>,
}

/// Represents a Repeat Times (r=) value.
///
/// Format: `r=<repeat-interval> <active-duration> <offsets from start-time>`
///
/// All values are stored in seconds; typed durations (`7d`, `1h`, `25m`,
/// `30s`) are converted during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatTime {
    /// Interval between repetitions, in seconds
    pub repeat_interval: u64,
    /// How long the session is active at each repetition, in seconds
    pub active_duration: u64,
    /// Offsets from the start time, in seconds (at least one)
    pub offsets: Vec<u64>,
}

/// Represents the Time Zones (z=) field.
///
/// Format: `z=<adjustment-time> <offset> <adjustment-time> <offset> ...`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneInfo {
    /// Adjustment pairs in input order
    pub adjustments: Vec<TimeZoneAdjustment>,
}

/// One `<adjustment-time> <offset>` pair from a z= line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneAdjustment {
    /// NTP timestamp at which the adjustment takes effect
    pub adjustment_time: u64,
    /// Signed offset applied from the adjustment time, in seconds
    pub offset: i64,
}

/// Represents the Encryption Key (k=) field.
///
/// Format: `k=<method>` or `k=<method>:<encryption key>`
///
/// RFC 4566 defines exactly four methods; any other method is rejected as
/// malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncryptionKey {
    /// k=clear:<key>, the key is included untransformed
    Clear(String),
    /// k=base64:<encoded>, the key is base64-encoded
    Base64(String),
    /// k=uri:<uri>, the key is obtained from the given URI
    Uri(String),
    /// k=prompt, the user should be prompted for the key
    Prompt,
}

/// Media direction attributes (a=sendrecv, a=sendonly, a=recvonly, a=inactive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaDirection {
    SendRecv,
    SendOnly,
    RecvOnly,
    Inactive,
}

impl fmt::Display for MediaDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaDirection::SendRecv => write!(f, "sendrecv"),
            MediaDirection::SendOnly => write!(f, "sendonly"),
            MediaDirection::RecvOnly => write!(f, "recvonly"),
            MediaDirection::Inactive => write!(f, "inactive"),
        }
    }
}

/// A parsed session attribute (a=).
///
/// Attributes follow the format `a=<flag>` or `a=<name>:<value>`. The
/// four direction flags are recognized specially; everything else is kept
/// as an uninterpreted flag or name/value pair. Attributes stay in their
/// input order because ordering can be semantically meaningful (e.g. for
/// fmtp/rtpmap groupings interpreted by downstream consumers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    /// One of the media direction flags
    Direction(MediaDirection),
    /// A `name:value` attribute that has no dedicated representation
    Value(String, String),
    /// A bare flag attribute (e.g. a=ice-lite)
    Flag(String),
}

/// Represents a complete session-level SDP description.
///
/// Produced by [`crate::parser::parse_session`] (or the
/// [`FromStr`]/[`crate::parser::parse_sdp`] conveniences) and never observed
/// half-built: a parse either returns a fully populated value or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDescription {
    /// SDP protocol version (v=); RFC 4566 defines only 0
    pub version: u32,
    /// Session origin information (o=)
    pub origin: Origin,
    /// Session name (s=)
    pub session_name: String,
    /// Optional session information (i=)
    pub session_info: Option<String>,
    /// Optional URI pointing to additional session information (u=)
    pub uri: Option<String>,
    /// Optional contact email address (e=)
    pub email: Option<String>,
    /// Optional contact phone number (p=)
    pub phone: Option<String>,
    /// Optional session-level connection data (c=)
    pub connection: Option<ConnectionData>,
    /// Optional bandwidth information (b=)
    pub bandwidth: Option<Bandwidth>,
    /// Timing entries (t= with optional r=), in input order
    pub times: Vec<TimeDescription>,
    /// Optional time zone adjustments (z=)
    pub time_zone: Option<TimeZoneInfo>,
    /// Optional encryption key (k=)
    pub encryption_key: Option<EncryptionKey>,
    /// Session attributes (a=), in input order
    pub attributes: Vec<Attribute>,
}

impl SessionDescription {
    /// Creates a new description with the mandatory origin and session
    /// name; every optional field starts out absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdp_core::{Origin, SessionDescription};
    ///
    /// let origin = Origin {
    ///     username: "-".to_string(),
    ///     sess_id: "1234567890".to_string(),
    ///     sess_version: 2,
    ///     net_type: "IN".to_string(),
    ///     addr_type: "IP4".to_string(),
    ///     unicast_address: "192.168.1.100".to_string(),
    /// };
    ///
    /// let session = SessionDescription::new(origin, "Call");
    /// assert!(session.times.is_empty());
    /// assert!(session.attributes.is_empty());
    /// ```
    pub fn new(origin: Origin, session_name: impl Into<String>) -> Self {
        Self {
            version: 0,
            origin,
            session_name: session_name.into(),
            session_info: None,
            uri: None,
            email: None,
            phone: None,
            connection: None,
            bandwidth: None,
            times: Vec::new(),
            time_zone: None,
            encryption_key: None,
            attributes: Vec::new(),
        }
    }

    /// Gets the value of an attribute by name.
    ///
    /// Returns:
    /// - `Some(Some(value))` for `name:value` attributes
    /// - `Some(None)` for flag attributes
    /// - `None` if no attribute with that name exists
    pub fn attribute_value(&self, name: &str) -> Option<Option<&str>> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Value(k, v) if k.eq_ignore_ascii_case(name) => Some(Some(v.as_str())),
            Attribute::Flag(k) if k.eq_ignore_ascii_case(name) => Some(None),
            _ => None,
        })
    }

    /// Gets the first media direction attribute, if any.
    pub fn direction(&self) -> Option<MediaDirection> {
        self.attributes.iter().find_map(|a| match a {
            Attribute::Direction(d) => Some(*d),
            _ => None,
        })
    }
}

impl FromStr for SessionDescription {
    type Err = crate::error::Error;

    /// Parses an SDP string into a `SessionDescription`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sdp_core::SessionDescription;
    ///
    /// let sdp = "v=0\r\n\
    ///            o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
    ///            s=SDP Seminar\r\n\
    ///            t=2873397496 2873404696\r\n";
    ///
    /// let session: SessionDescription = sdp.parse().unwrap();
    /// assert_eq!(session.origin.username, "jdoe");
    /// assert_eq!(session.times.len(), 1);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        parse_sdp(&Bytes::copy_from_slice(s.as_bytes()))
    }
}
