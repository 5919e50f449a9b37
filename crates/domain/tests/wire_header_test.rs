use dns_relay_domain::wire::{
    compose_header, decode_flags, encode_flags, parse_header, Flags, Header,
};
use dns_relay_domain::DomainError;

#[test]
fn test_decode_flags_8180() {
    let flags = decode_flags(0x8180);

    assert_eq!(
        flags,
        Flags {
            is_response: 1,
            opcode: 0,
            authoritative: 0,
            truncated: 0,
            recursion_desired: 1,
            recursion_available: 1,
            reserved: 0,
            authentic_data: 0,
            checking_disabled: 0,
            response_code: 0,
        }
    );
}

#[test]
fn test_decode_flags_every_field() {
    // QR=1 OPCODE=2 AA=1 TC=0 RD=1 RA=0 Z=1 AD=1 CD=0 RCODE=5
    let word = 0b1_0010_1_0_1_0_1_1_0_0101;
    let flags = decode_flags(word);

    assert_eq!(flags.is_response, 1);
    assert_eq!(flags.opcode, 2);
    assert_eq!(flags.authoritative, 1);
    assert_eq!(flags.truncated, 0);
    assert_eq!(flags.recursion_desired, 1);
    assert_eq!(flags.recursion_available, 0);
    assert_eq!(flags.reserved, 1);
    assert_eq!(flags.authentic_data, 1);
    assert_eq!(flags.checking_disabled, 0);
    assert_eq!(flags.response_code, 5);
}

#[test]
fn test_flags_round_trip_all_words() {
    for word in 0..=u16::MAX {
        assert_eq!(encode_flags(&decode_flags(word)), word, "word {:#06x}", word);
    }
}

#[test]
fn test_flags_round_trip_from_struct() {
    let flags = Flags {
        is_response: 0,
        opcode: 15,
        authoritative: 1,
        truncated: 1,
        recursion_desired: 0,
        recursion_available: 1,
        reserved: 0,
        authentic_data: 0,
        checking_disabled: 1,
        response_code: 9,
    };
    assert_eq!(decode_flags(encode_flags(&flags)), flags);
}

#[test]
fn test_parse_header_fields() {
    let bytes = [
        0x6a, 0xec, 0x81, 0x80, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00,
    ];
    let header = parse_header(&bytes).unwrap();

    assert_eq!(header.id, 0x6aec);
    assert_eq!(header.flags, 0x8180);
    assert_eq!(header.question_count, 1);
    assert_eq!(header.answer_count, 1);
    assert_eq!(header.authority_count, 0);
    assert_eq!(header.additional_count, 0);
    assert_eq!(header.decoded_flags(), decode_flags(0x8180));
}

#[test]
fn test_header_round_trip() {
    let bytes = [
        0xde, 0xad, 0x01, 0x20, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0xff, 0xff,
    ];
    let header = parse_header(&bytes).unwrap();
    assert_eq!(compose_header(&header), bytes);
}

#[test]
fn test_compose_header_big_endian() {
    let header = Header {
        id: 0x0102,
        flags: 0x0304,
        question_count: 0x0506,
        answer_count: 0x0708,
        authority_count: 0x090a,
        additional_count: 0x0b0c,
    };
    assert_eq!(
        compose_header(&header),
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
    );
}

#[test]
fn test_parse_header_ignores_trailing_bytes() {
    let mut bytes = vec![0u8; 12];
    bytes[1] = 7;
    bytes.extend_from_slice(&[0xff; 20]);
    assert_eq!(parse_header(&bytes).unwrap().id, 7);
}

#[test]
fn test_parse_header_truncated() {
    let result = parse_header(&[0x12, 0x34, 0x01]);
    assert_eq!(
        result,
        Err(DomainError::TruncatedMessage {
            needed: 12,
            available: 3
        })
    );
}

#[test]
fn test_parse_header_empty() {
    assert!(matches!(
        parse_header(&[]),
        Err(DomainError::TruncatedMessage { .. })
    ));
}
