use std::net::{IpAddr, Ipv4Addr};

use dns_packet::message::header::HEADER_LEN;
use dns_packet::message::resource::{a::*, ns::*, *};
use dns_packet::message::{DnsType, RCode};
use dns_packet::{decode, encode, Error, Result};

// A response from 8.8.8.8 to `google.com A`, as captured on the wire.
const GOOGLE_RESPONSE: [u8; 44] = [
    0x86, 0x2a, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // header
    0x06, 0x67, 0x6f, 0x6f, 0x67, 0x6c, 0x65, 0x03, 0x63, 0x6f, 0x6d, 0x00, // google.com
    0x00, 0x01, 0x00, 0x01, // A IN
    0xc0, 0x0c, // pointer to google.com
    0x00, 0x01, 0x00, 0x01, // A IN
    0x00, 0x00, 0x01, 0x2c, // ttl 300
    0x00, 0x04, 0x8e, 0xfa, 0xb9, 0x2e, // 142.250.185.46
];

#[test]
fn test_decode_captured_response() -> Result<()> {
    let m = decode(&GOOGLE_RESPONSE)?;

    assert_eq!(m.header.id, 0x862a);
    assert!(m.header.response);
    assert!(m.header.recursion_desired);
    assert!(m.header.recursion_available);
    assert_eq!(m.header.rcode, RCode::NoError);
    assert_eq!(m.header.questions, 1);
    assert_eq!(m.header.answers, 1);

    assert_eq!(m.questions.len(), 1);
    assert_eq!(m.questions[0].name, "google.com");
    assert_eq!(m.questions[0].typ, DnsType::A);

    assert_eq!(m.answers.len(), 1);
    let answer = &m.answers[0];
    assert_eq!(answer.header.name, "google.com");
    assert_eq!(answer.header.typ, DnsType::A);
    assert_eq!(answer.header.ttl, 300);
    assert_eq!(answer.header.length, 4);
    assert_eq!(
        answer.body,
        ResourceBody::A(AResource {
            a: IpAddr::V4(Ipv4Addr::new(142, 250, 185, 46)),
        })
    );

    assert!(m.authorities.is_empty());
    assert!(m.additionals.is_empty());

    Ok(())
}

#[test]
fn test_reencode_captured_response() -> Result<()> {
    let mut m = decode(&GOOGLE_RESPONSE)?;
    let raw = encode(&mut m)?;

    // Same header and question; the answer name is written out in full
    // instead of as a pointer.
    assert_eq!(&raw[..28], &GOOGLE_RESPONSE[..28]);
    assert_eq!(raw.len(), GOOGLE_RESPONSE.len() - 2 + 12);
    assert_eq!(decode(&raw)?, m);

    Ok(())
}

#[test]
fn test_decode_referral_with_compressed_rdata() -> Result<()> {
    let mut raw = vec![
        0x00, 0x07, 0x80, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, // header
    ];
    // www.example.com A IN
    raw.extend_from_slice(b"\x03www\x07example\x03com\x00\x00\x01\x00\x01");
    // example.com NS IN 172800 -> a.iana-servers.net
    raw.extend_from_slice(&[0xc0, 0x10, 0x00, 0x02, 0x00, 0x01, 0x00, 0x02, 0xa3, 0x00]);
    raw.extend_from_slice(&[0x00, 0x14]);
    let ns_off = raw.len();
    raw.extend_from_slice(b"\x01a\x0ciana-servers\x03net\x00");
    // a.iana-servers.net A IN 60 -> 199.43.135.53
    raw.extend_from_slice(&[0xc0, ns_off as u8, 0x00, 0x01, 0x00, 0x01]);
    raw.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c, 0x00, 0x04, 199, 43, 135, 53]);

    let m = decode(&raw)?;
    assert_eq!(m.questions[0].name, "www.example.com");

    assert_eq!(m.authorities.len(), 1);
    assert_eq!(m.authorities[0].header.name, "example.com");
    assert_eq!(m.authorities[0].header.ttl, 172800);
    assert_eq!(
        m.authorities[0].body,
        ResourceBody::Ns(NsResource {
            ns: "a.iana-servers.net".to_owned(),
        })
    );

    assert_eq!(m.additionals.len(), 1);
    assert_eq!(m.additionals[0].header.name, "a.iana-servers.net");
    assert_eq!(
        m.additionals[0].body,
        ResourceBody::A(AResource {
            a: IpAddr::V4(Ipv4Addr::new(199, 43, 135, 53)),
        })
    );

    Ok(())
}

#[test]
fn test_decode_truncated_section() -> Result<()> {
    // The header promises an additional record whose data runs past the
    // packet.
    let mut padded = GOOGLE_RESPONSE.to_vec();
    padded[HEADER_LEN - 1] = 1;
    padded.resize(512, 0);
    padded[GOOGLE_RESPONSE.len()..GOOGLE_RESPONSE.len() + 11]
        .copy_from_slice(&[0, 0, 99, 0, 1, 0, 0, 0, 0, 0x01, 0xff]);

    assert_eq!(decode(&padded), Err(Error::ErrBufferOutOfRange));

    Ok(())
}
