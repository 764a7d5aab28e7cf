//! Session Description Protocol (RFC 4566) parsing for sdp-core
//!
//! This crate parses the session-level part of an SDP payload into typed
//! values: the mandatory prologue (protocol version, origin, session name),
//! the optional single-valued fields, the timing group, and session-level
//! attributes. Media sections are out of scope; the parser stops at the
//! first `m=` line and leaves the rest of the input to the caller.
//!
//! # Example
//!
//! ```
//! use sdp_core::{parse_sdp, MediaDirection};
//! use bytes::Bytes;
//!
//! let sdp = Bytes::from_static(
//!     b"v=0\r\n\
//!       o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
//!       s=SDP Seminar\r\n\
//!       t=2873397496 2873404696\r\n\
//!       a=recvonly\r\n",
//! );
//!
//! let session = parse_sdp(&sdp).unwrap();
//! assert_eq!(session.session_name, "SDP Seminar");
//! assert_eq!(session.direction(), Some(MediaDirection::RecvOnly));
//! ```

// Declare modules
pub mod error;
pub mod parser;
pub mod types;

// Re-export key public items
pub use error::{Error, Result};
pub use parser::{parse_sdp, parse_session};
pub use types::{
    Attribute,
    Bandwidth,
    ConnectionData,
    EncryptionKey,
    MediaDirection,
    Origin,
    RepeatTime,
    SessionDescription,
    TimeDescription,
    TimeZoneAdjustment,
    TimeZoneInfo,
};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::parser::{parse_sdp, parse_session};
    pub use crate::types::{
        Attribute, Bandwidth, ConnectionData, EncryptionKey, MediaDirection, Origin,
        SessionDescription, TimeDescription,
    };
}
