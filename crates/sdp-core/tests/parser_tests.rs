// SDP parser tests entry point

use std::str::FromStr;

use sdp_core::parser::next_field;
use sdp_core::{
    parse_sdp, parse_session, Attribute, EncryptionKey, MediaDirection, SessionDescription,
};

use bytes::Bytes;
use proptest::prelude::*;

/// A capture from a Teleste MPH H.264 encoder, session-level fields only.
const TELESTE_SDP: &str = "v=0\r\n\
                           o=Teleste 749719680 2684264576 IN IP4 172.16.200.193\r\n\
                           s=COD_9003-P2-0\r\n\
                           i=Teleste MPH H.264 Encoder - HK01121135\r\n\
                           c=IN IP4 172.16.200.193/16\r\n\
                           t=0 0\r\n";

/// The session-level fields of the worked example in RFC 4566 section 5.
const RFC_EXAMPLE_SDP: &str = "v=0\r\n\
                               o=jdoe 2890844526 2890842807 IN IP4 10.47.16.5\r\n\
                               s=SDP Seminar\r\n\
                               i=A Seminar on the session description protocol\r\n\
                               u=http://www.example.com/seminars/sdp.pdf\r\n\
                               e=j.doe@example.com (Jane Doe)\r\n\
                               c=IN IP4 224.2.17.12/127\r\n\
                               t=2873397496 2873404696\r\n\
                               a=recvonly\r\n";

#[test]
fn test_teleste_capture() {
    let session = parse_sdp(&Bytes::from_static(TELESTE_SDP.as_bytes())).unwrap();

    assert_eq!(session.version, 0);
    assert_eq!(session.origin.username, "Teleste");
    assert_eq!(session.origin.sess_id, "749719680");
    assert_eq!(session.origin.sess_version, 2684264576);
    assert_eq!(session.origin.net_type, "IN");
    assert_eq!(session.origin.addr_type, "IP4");
    assert_eq!(session.origin.unicast_address, "172.16.200.193");
    assert_eq!(session.session_name, "COD_9003-P2-0");
    assert_eq!(
        session.session_info.as_deref(),
        Some("Teleste MPH H.264 Encoder - HK01121135")
    );

    let conn = session.connection.unwrap();
    assert_eq!(conn.connection_address, "172.16.200.193");
    assert_eq!(conn.ttl, Some(16));
    assert!(conn.address_count.is_none());

    assert_eq!(session.times.len(), 1);
    assert_eq!(session.times[0].start_time, 0);
    assert_eq!(session.times[0].stop_time, 0);
}

#[test]
fn test_rfc_example() {
    let session = parse_sdp(&Bytes::from_static(RFC_EXAMPLE_SDP.as_bytes())).unwrap();

    assert_eq!(session.session_name, "SDP Seminar");
    assert_eq!(
        session.uri.as_deref(),
        Some("http://www.example.com/seminars/sdp.pdf")
    );
    assert_eq!(session.direction(), Some(MediaDirection::RecvOnly));
}

#[test]
fn test_from_str_matches_parse_sdp() {
    let via_bytes = parse_sdp(&Bytes::from_static(TELESTE_SDP.as_bytes())).unwrap();
    let via_str = SessionDescription::from_str(TELESTE_SDP).unwrap();
    assert_eq!(via_bytes, via_str);
}

#[test]
fn test_bare_line_feeds_accepted() {
    let input = TELESTE_SDP.replace("\r\n", "\n");
    assert!(SessionDescription::from_str(&input).is_ok());
}

#[test]
fn test_missing_mandatory_fields() {
    assert!(SessionDescription::from_str("").is_err());
    assert!(SessionDescription::from_str("v=0\r\n").is_err());
    assert!(SessionDescription::from_str("v=0\r\ns=no origin\r\n").is_err());
    assert!(SessionDescription::from_str(
        "o=- 1 2 IN IP4 10.0.0.1\r\nv=0\r\ns=swapped\r\n"
    )
    .is_err());
}

#[test]
fn test_line_without_separator_is_fatal() {
    assert!(SessionDescription::from_str("v=0\r\nnonsense\r\ns=X\r\n").is_err());
}

#[test]
fn test_multi_character_type_is_fatal() {
    assert!(SessionDescription::from_str(
        "vv=0\r\no=- 1 2 IN IP4 10.0.0.1\r\ns=X\r\n"
    )
    .is_err());
}

#[test]
fn test_attribute_kinds_and_order() {
    let session = SessionDescription::from_str(
        "v=0\r\n\
         o=- 1 2 IN IP4 10.0.0.1\r\n\
         s=X\r\n\
         t=0 0\r\n\
         a=rtpmap:96 H264/90000\r\n\
         a=sendonly\r\n\
         a=ice-lite\r\n",
    )
    .unwrap();

    assert_eq!(session.attributes.len(), 3);
    assert_eq!(
        session.attribute_value("rtpmap"),
        Some(Some("96 H264/90000"))
    );
    assert_eq!(session.direction(), Some(MediaDirection::SendOnly));
    assert_eq!(
        session.attributes[2],
        Attribute::Flag("ice-lite".to_string())
    );
}

#[test]
fn test_encryption_key_variants() {
    let base = "v=0\r\no=- 1 2 IN IP4 10.0.0.1\r\ns=X\r\nt=0 0\r\n";

    let prompt = SessionDescription::from_str(&format!("{base}k=prompt\r\n")).unwrap();
    assert_eq!(prompt.encryption_key, Some(EncryptionKey::Prompt));

    let clear = SessionDescription::from_str(&format!("{base}k=clear:secret\r\n")).unwrap();
    assert_eq!(
        clear.encryption_key,
        Some(EncryptionKey::Clear("secret".to_string()))
    );

    let uri = SessionDescription::from_str(&format!(
        "{base}k=uri:https://keys.example.com/k1\r\n"
    ))
    .unwrap();
    assert_eq!(
        uri.encryption_key,
        Some(EncryptionKey::Uri("https://keys.example.com/k1".to_string()))
    );

    assert!(SessionDescription::from_str(&format!("{base}k=clear:\r\n")).is_err());
    assert!(SessionDescription::from_str(&format!("{base}k=magic\r\n")).is_err());
}

#[test]
fn test_trailing_media_section_left_in_stream() {
    let input = format!("{TELESTE_SDP}m=video 0 RTP/AVP 96\r\na=rtpmap:96 H264/90000\r\n");
    let mut reader = input.as_bytes();

    let session = parse_session(&mut reader).unwrap();
    assert_eq!(session.session_name, "COD_9003-P2-0");

    // The first a= after the m= line is what remains to be read
    let leftover = next_field(&mut reader).unwrap().unwrap();
    assert_eq!(leftover.key, 'a');
    assert_eq!(leftover.value, "rtpmap:96 H264/90000");
}

#[test]
fn test_serde_round_trip() {
    let session = parse_sdp(&Bytes::from_static(RFC_EXAMPLE_SDP.as_bytes())).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: SessionDescription = serde_json::from_str(&json).unwrap();
    assert_eq!(session, restored);
}

proptest! {
    // Every well-formed attribute line is kept, in input order.
    #[test]
    fn prop_attribute_count_and_order(names in proptest::collection::vec("[a-z]{1,12}", 0..8)) {
        let mut input = String::from("v=0\r\no=- 1 2 IN IP4 10.0.0.1\r\ns=X\r\nt=0 0\r\n");
        for (i, name) in names.iter().enumerate() {
            input.push_str(&format!("a={name}:{i}\r\n"));
        }

        let session = SessionDescription::from_str(&input).unwrap();
        prop_assert_eq!(session.attributes.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(
                &session.attributes[i],
                &Attribute::Value(name.clone(), i.to_string())
            );
        }
    }

    // Parsing the same input twice yields identical values.
    #[test]
    fn prop_parse_is_deterministic(info in "[ -~]{0,40}") {
        let input = format!(
            "v=0\r\no=- 1 2 IN IP4 10.0.0.1\r\ns=X\r\ni={info}\r\nt=0 0\r\n"
        );
        let first = SessionDescription::from_str(&input);
        let second = SessionDescription::from_str(&input);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "parse results disagree"),
        }
    }

    // Every timing entry needs exactly two numeric fields.
    #[test]
    fn prop_timing_pairs(start in 0u64..u64::MAX / 2, stop in 0u64..u64::MAX / 2) {
        let input = format!(
            "v=0\r\no=- 1 2 IN IP4 10.0.0.1\r\ns=X\r\nt={start} {stop}\r\n"
        );
        let session = SessionDescription::from_str(&input).unwrap();
        prop_assert_eq!(session.times.len(), 1);
        prop_assert_eq!(session.times[0].start_time, start);
        prop_assert_eq!(session.times[0].stop_time, stop);
    }
}
