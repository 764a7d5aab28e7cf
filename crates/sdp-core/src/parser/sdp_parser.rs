//! The session-level field sequencer.
//!
//! This is the core of the crate: a strict, single-pass walk over the
//! fixed RFC 4566 field order
//!
//! ```text
//! v o s  |  i u e p c b  |  (t r?)*  |  z  |  k  |  a*
//! ```
//!
//! with exactly one field of lookahead. The mandatory prologue (`v`, `o`,
//! `s`) must match letter for letter; each optional single is taken when
//! the pending field matches its slot and otherwise left pending for a
//! later slot; the timing group pairs each `t=` line with the `r=` line
//! directly after it; attributes repeat until the letter changes or the
//! stream ends.
//!
//! A pending field that matches no remaining slot ends the walk without
//! error: it typically starts a media section (`m=`), which this parser
//! deliberately does not cover, and callers that need to assert "no
//! leftover input" check the stream themselves after the call returns.

use std::io::BufRead;
use std::str;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::types::sdp::SessionDescription;

use super::attribute_parser::parse_attribute;
use super::line_parser::{next_field, SdpField};
use super::session_parser::{
    parse_bandwidth_line, parse_connection_line, parse_encryption_key_line, parse_origin_line,
};
use super::time_parser::{
    parse_repeat_time_line, parse_time_description_line, parse_time_zone_line,
};

/// One-field lookahead over the tokenizer.
///
/// The cursor always holds the next unconsumed `<type>=<value>` pair (or
/// nothing, at end of stream). Refilling tolerates end of stream but
/// propagates malformed lines immediately.
struct FieldCursor<'a, R: BufRead> {
    reader: &'a mut R,
    pending: Option<SdpField>,
}

impl<'a, R: BufRead> FieldCursor<'a, R> {
    fn new(reader: &'a mut R) -> Result<Self> {
        let pending = next_field(reader)?;
        Ok(Self { reader, pending })
    }

    /// Consumes the pending field, which must match `key` exactly.
    ///
    /// A different letter or end of stream is fatal: mandatory fields
    /// allow no skipping and no reordering.
    fn expect(&mut self, key: char) -> Result<String> {
        match self.pending.take() {
            Some(field) if field.key == key => {
                self.pending = next_field(self.reader)?;
                Ok(field.value)
            }
            Some(field) => Err(Error::MalformedInput(format!(
                "expected {key}= line, found {}= line",
                field.key
            ))),
            None => Err(Error::MalformedInput(format!(
                "unexpected end of input, expected {key}= line"
            ))),
        }
    }

    /// Consumes the pending field only when its letter matches `key`.
    ///
    /// A non-matching field stays pending: it belongs to a later slot in
    /// the fixed field order, not to this one.
    fn take_if(&mut self, key: char) -> Result<Option<String>> {
        let Some(field) = self.pending.take() else {
            return Ok(None);
        };
        if field.key != key {
            self.pending = Some(field);
            return Ok(None);
        }
        self.pending = next_field(self.reader)?;
        Ok(Some(field.value))
    }
}

/// Parses the session-level part of an SDP payload from a line stream.
///
/// The stream is consumed strictly in order, one line at a time, and is
/// left positioned after the last field the parser recognized; a
/// subsequent media section is not read. Any grammar violation aborts the
/// whole parse with [`Error::MalformedInput`] and no partial result.
///
/// # Examples
///
/// ```
/// use sdp_core::parser::parse_session;
///
/// let sdp = "\
/// v=0\r\n\
/// o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
/// s=SDP Seminar\r\n\
/// c=IN IP4 224.2.17.12/127\r\n\
/// t=2873397496 2873404696\r\n\
/// a=recvonly\r\n";
///
/// let session = parse_session(&mut sdp.as_bytes()).unwrap();
/// assert_eq!(session.version, 0);
/// assert_eq!(session.origin.username, "jdoe");
/// assert_eq!(session.connection.unwrap().ttl, Some(127));
/// assert_eq!(session.times.len(), 1);
/// assert_eq!(session.attributes.len(), 1);
/// ```
pub fn parse_session<R: BufRead>(reader: &mut R) -> Result<SessionDescription> {
    let mut cursor = FieldCursor::new(reader)?;

    // Mandatory prologue, fixed order.
    let version = parse_version(&cursor.expect('v')?)?;
    let origin = parse_origin_line(&cursor.expect('o')?)?;
    let session_name = cursor.expect('s')?;

    // Optional single-valued fields, each at most once, fixed relative order.
    let session_info = cursor.take_if('i')?;
    let uri = cursor.take_if('u')?;
    let email = cursor.take_if('e')?;
    let phone = cursor.take_if('p')?;
    let connection = cursor
        .take_if('c')?
        .map(|v| parse_connection_line(&v))
        .transpose()?;
    let bandwidth = cursor
        .take_if('b')?
        .map(|v| parse_bandwidth_line(&v))
        .transpose()?;

    // Timing entries; an r= line pairs with the t= line directly before it
    // and the pairing is never split across iterations.
    let mut times = Vec::new();
    while let Some(value) = cursor.take_if('t')? {
        let mut time_desc = parse_time_description_line(&value)?;
        if let Some(repeat) = cursor.take_if('r')? {
            time_desc.repeat = Some(parse_repeat_time_line(&repeat)?);
        }
        times.push(time_desc);
    }

    let time_zone = cursor
        .take_if('z')?
        .map(|v| parse_time_zone_line(&v))
        .transpose()?;
    let encryption_key = cursor
        .take_if('k')?
        .map(|v| parse_encryption_key_line(&v))
        .transpose()?;

    // Attributes repeat until the letter changes or the stream ends.
    let mut attributes = Vec::new();
    while let Some(value) = cursor.take_if('a')? {
        attributes.push(parse_attribute(&value)?);
    }

    // Assembled exactly once; no half-populated value ever escapes.
    Ok(SessionDescription {
        version,
        origin,
        session_name,
        session_info,
        uri,
        email,
        phone,
        connection,
        bandwidth,
        times,
        time_zone,
        encryption_key,
        attributes,
    })
}

fn parse_version(value: &str) -> Result<u32> {
    value
        .parse::<u32>()
        .map_err(|_| Error::MalformedInput(format!("invalid protocol version: {value}")))
}

/// Parses SDP content from bytes.
///
/// Convenience entry point over [`parse_session`] for callers holding the
/// whole payload in memory; the content must be valid UTF-8.
pub fn parse_sdp(content: &Bytes) -> Result<SessionDescription> {
    let sdp_str = str::from_utf8(content)
        .map_err(|_| Error::MalformedInput("SDP content is not valid UTF-8".to_string()))?;
    parse_session(&mut sdp_str.as_bytes())
}
