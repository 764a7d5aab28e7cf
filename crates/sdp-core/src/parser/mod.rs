//! SDP parsing.
//!
//! The parser is layered: [`line_parser`] tokenizes the payload into
//! `<type>=<value>` pairs, [`sdp_parser`] walks the pairs in the fixed
//! RFC 4566 field order, and the remaining modules parse individual field
//! values into their typed forms.

pub mod attribute_parser;
pub mod line_parser;
pub mod sdp_parser;
pub mod session_parser;
pub mod time_parser;
pub mod validation;

pub use attribute_parser::parse_attribute;
pub use line_parser::{next_field, parse_sdp_line, SdpField};
pub use sdp_parser::{parse_sdp, parse_session};
pub use session_parser::{
    parse_bandwidth_line, parse_connection_line, parse_encryption_key_line, parse_origin_line,
};
pub use time_parser::{
    parse_repeat_time_line, parse_time_description_line, parse_time_with_unit,
    parse_time_zone_line,
};
pub use validation::{is_valid_address, validate_address_type, validate_network_type};
