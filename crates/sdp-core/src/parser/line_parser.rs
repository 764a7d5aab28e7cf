//! SDP line tokenization.
//!
//! Every SDP line has the shape `<type>=<value>` where the type is a single
//! character (`v`, `o`, `s`, `t`, `a`, ...). The tokenizer reads exactly one
//! line at a time from the caller's stream and splits it into that pair; it
//! never reads ahead, so whatever the sequencer does not consume stays in
//! the stream for the caller.

use std::io::BufRead;

use nom::{
    character::complete::{anychar, char, not_line_ending},
    IResult,
};

use crate::error::{Error, Result};

/// One tokenized `<type>=<value>` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdpField {
    /// The single type character before the `=`
    pub key: char,
    /// Everything after the first `=`, line terminator stripped
    pub value: String,
}

/// Splits an SDP line into its type character and value.
///
/// The key must be exactly one character and the split happens on the first
/// `=`, so values may themselves contain `=` (common in attribute lines).
///
/// # Examples
///
/// ```
/// use sdp_core::parser::parse_sdp_line;
///
/// let (_, (key, value)) = parse_sdp_line("v=0").unwrap();
/// assert_eq!(key, 'v');
/// assert_eq!(value, "0");
///
/// let (_, (key, value)) = parse_sdp_line("a=fmtp:97 apt=96").unwrap();
/// assert_eq!(key, 'a');
/// assert_eq!(value, "fmtp:97 apt=96");
/// ```
pub fn parse_sdp_line(input: &str) -> IResult<&str, (char, &str)> {
    let (input, key) = anychar(input)?;
    let (input, _) = char('=')(input)?;
    let (input, value) = not_line_ending(input)?;

    Ok((input, (key, value.trim())))
}

/// Reads the next `<type>=<value>` field from the stream.
///
/// Advances the stream by exactly one line. Returns `Ok(None)` at end of
/// stream. A line with no `=`, a type part that is not exactly one
/// character, or an empty value is a terminal [`Error::MalformedInput`];
/// there is no resynchronization after a bad line.
pub fn next_field<R: BufRead>(reader: &mut R) -> Result<Option<SdpField>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);

    let (_, (key, value)) = parse_sdp_line(line)
        .map_err(|_| Error::MalformedInput(format!("not a <type>=<value> line: {line:?}")))?;
    if value.is_empty() {
        return Err(Error::MalformedInput(format!("empty value in {key}= line")));
    }

    Ok(Some(SdpField {
        key,
        value: value.to_string(),
    }))
}
