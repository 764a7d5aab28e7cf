//! Typed representations of RFC 4566 session description fields.

pub mod sdp;

pub use sdp::{
    Attribute, Bandwidth, ConnectionData, EncryptionKey, MediaDirection, Origin, RepeatTime,
    SessionDescription, TimeDescription, TimeZoneAdjustment, TimeZoneInfo,
};
