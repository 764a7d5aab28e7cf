//! Time-related value parsers: timing (t=), repeat times (r=), and time
//! zone adjustments (z=).

use nom::{
    character::complete::{digit1, one_of},
    combinator::{map_res, opt},
    IResult,
};

use crate::error::{Error, Result};
use crate::types::sdp::{RepeatTime, TimeDescription, TimeZoneAdjustment, TimeZoneInfo};

fn numeric_time(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s: &str| s.parse::<u64>())(input)
}

/// Parses a typed duration: digits with an optional `s`/`m`/`h`/`d` unit
/// suffix. A bare number is in seconds already.
fn typed_duration(input: &str) -> IResult<&str, (u64, Option<char>)> {
    let (input, value) = numeric_time(input)?;
    let (input, unit) = opt(one_of("smhd"))(input)?;

    Ok((input, (value, unit)))
}

/// Parses a time value with an optional unit (e.g. "7d" for 7 days) into
/// seconds.
pub fn parse_time_with_unit(value: &str) -> Result<u64> {
    let (rest, (magnitude, unit)) = typed_duration(value)?;
    if !rest.is_empty() {
        return Err(Error::MalformedInput(format!("invalid time value: {value}")));
    }

    let multiplier = match unit {
        None | Some('s') => 1,
        Some('m') => 60,
        Some('h') => 60 * 60,
        Some('d') => 60 * 60 * 24,
        Some(_) => unreachable!("one_of limits the unit characters"),
    };

    // The conversion to seconds can exceed u64 even though the digits alone
    // fit; that is malformed input, not a panic
    magnitude
        .checked_mul(multiplier)
        .ok_or_else(|| Error::MalformedInput(format!("time value out of range: {value}")))
}

/// Parses a signed typed duration, as used for time zone offsets ("-1h").
pub fn parse_signed_time_with_unit(value: &str) -> Result<i64> {
    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    let seconds = parse_time_with_unit(magnitude)?;
    let seconds = i64::try_from(seconds).map_err(|_| {
        Error::MalformedInput(format!("time value out of range: {value}"))
    })?;

    Ok(if negative { -seconds } else { seconds })
}

/// Parses a time description line (t=).
///
/// # Format
///
/// ```text
/// t=<start-time> <stop-time>
/// ```
///
/// Both fields are decimal NTP timestamps; 0 means permanent/open-ended.
/// The repeat slot starts out empty; the sequencer fills it when an r=
/// line directly follows.
pub fn parse_time_description_line(value: &str) -> Result<TimeDescription> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(Error::MalformedInput(format!(
            "invalid t= line format: {value}"
        )));
    }

    let start_time = parts[0]
        .parse::<u64>()
        .map_err(|_| Error::MalformedInput(format!("invalid start time: {}", parts[0])))?;
    let stop_time = parts[1]
        .parse::<u64>()
        .map_err(|_| Error::MalformedInput(format!("invalid stop time: {}", parts[1])))?;

    Ok(TimeDescription {
        start_time,
        stop_time,
        repeat: None,
    })
}

/// Parses a repeat time line (r=).
///
/// # Format
///
/// ```text
/// r=<repeat-interval> <active-duration> <offsets from start-time>
/// ```
///
/// At least one offset is required; all three positions accept typed
/// durations ("604800" and "7d" are equivalent).
pub fn parse_repeat_time_line(value: &str) -> Result<RepeatTime> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(Error::MalformedInput(format!(
            "repeat time must have an interval, a duration, and offsets: {value}"
        )));
    }

    let repeat_interval = parse_time_with_unit(parts[0])?;
    let active_duration = parse_time_with_unit(parts[1])?;
    let offsets = parts[2..]
        .iter()
        .map(|p| parse_time_with_unit(p))
        .collect::<Result<Vec<u64>>>()?;

    Ok(RepeatTime {
        repeat_interval,
        active_duration,
        offsets,
    })
}

/// Parses a time zone line (z=).
///
/// # Format
///
/// ```text
/// z=<adjustment-time> <offset> <adjustment-time> <offset> ...
/// ```
///
/// Adjustment times are NTP timestamps; offsets are signed typed
/// durations ("-1h", "0").
pub fn parse_time_zone_line(value: &str) -> Result<TimeZoneInfo> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    if parts.is_empty() || parts.len() % 2 != 0 {
        return Err(Error::MalformedInput(format!(
            "time zone line must hold pairs of adjustment time and offset: {value}"
        )));
    }

    let mut adjustments = Vec::with_capacity(parts.len() / 2);
    for pair in parts.chunks(2) {
        let adjustment_time = pair[0].parse::<u64>().map_err(|_| {
            Error::MalformedInput(format!("invalid adjustment time: {}", pair[0]))
        })?;
        let offset = parse_signed_time_with_unit(pair[1])?;
        adjustments.push(TimeZoneAdjustment {
            adjustment_time,
            offset,
        });
    }

    Ok(TimeZoneInfo { adjustments })
}
