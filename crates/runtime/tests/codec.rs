use proptest::prelude::*;
use runtime::codec::{
    ConversionBuffer, integer_to_text, text_to_integer, text_to_unsigned, unsigned_to_text,
};
use runtime::types::{CONVERSION_BUFFER_LEN, FatalError, Radix};

fn buffer() -> ConversionBuffer {
    [0xAA; CONVERSION_BUFFER_LEN]
}

fn radix(r: u32) -> Radix {
    Radix::new(r).unwrap()
}

#[test]
fn test_encode_signed_values() {
    println!("=== Testing Codec: Signed Encode ===");
    let cases: [(i64, Radix, &str); 9] = [
        (0, Radix::DECIMAL, "0"),
        (123, Radix::DECIMAL, "123"),
        (0x12AB, Radix::HEX, "12AB"),
        (2_000_000_000, Radix::DECIMAL, "2000000000"),
        (20_000_000_000, Radix::DECIMAL, "20000000000"),
        (-123, Radix::DECIMAL, "-123"),
        (-0x12AB, Radix::HEX, "-12AB"),
        (-2_000_000_000, Radix::DECIMAL, "-2000000000"),
        (-20_000_000_000, Radix::DECIMAL, "-20000000000"),
    ];

    for (n, r, expected) in cases {
        let mut buf = buffer();
        let text = integer_to_text(n, r, &mut buf);
        println!("  {} (radix {}) -> {}", n, r.get(), text);
        assert_eq!(text, expected);
    }
}

#[test]
fn test_encode_extremes() {
    let mut buf = buffer();
    assert_eq!(
        integer_to_text(i64::MIN, Radix::DECIMAL, &mut buf),
        "-9223372036854775808"
    );

    let mut buf = buffer();
    let text = integer_to_text(i64::MIN, Radix::BINARY, &mut buf);
    assert_eq!(text.len(), 65);
    assert!(text.starts_with("-1"));
    assert!(text[2..].bytes().all(|b| b == b'0'));

    let mut buf = buffer();
    assert_eq!(integer_to_text(i64::MAX, Radix::HEX, &mut buf), "7FFFFFFFFFFFFFFF");

    let mut buf = buffer();
    let text = unsigned_to_text(u64::MAX, Radix::BINARY, &mut buf);
    assert_eq!(text.len(), 64);
    assert!(text.bytes().all(|b| b == b'1'));
}

#[test]
fn test_encode_unsigned_top_bit() {
    let mut buf = buffer();
    assert_eq!(
        unsigned_to_text(0xF000_0000_0000_0000, Radix::HEX, &mut buf),
        "F000000000000000"
    );
    let mut buf = buffer();
    assert_eq!(unsigned_to_text(20_000_000_000, Radix::DECIMAL, &mut buf), "20000000000");
}

#[test]
fn test_text_is_nul_terminated_inside_buffer() {
    let mut buf = buffer();
    let (start, len) = {
        let text = integer_to_text(-42, Radix::DECIMAL, &mut buf);
        (text.as_ptr() as usize, text.len())
    };
    let offset = start - buf.as_ptr() as usize;

    // written back to front: the text ends right before the final NUL
    assert_eq!(offset + len, CONVERSION_BUFFER_LEN - 1);
    assert_eq!(buf[CONVERSION_BUFFER_LEN - 1], 0);
    assert_eq!(&buf[offset..offset + len], b"-42");
    // bytes in front of the text are untouched
    assert!(buf[..offset].iter().all(|&b| b == 0xAA));
}

#[test]
fn test_decode_values() {
    println!("=== Testing Codec: Decode ===");
    assert_eq!(text_to_integer("0", Radix::DECIMAL), Ok(0));
    assert_eq!(text_to_integer("123", Radix::DECIMAL), Ok(123));
    assert_eq!(text_to_integer("123", Radix::HEX), Ok(0x123));
    assert_eq!(text_to_integer("123", Radix::OCTAL), Ok(0o123));
    assert_eq!(text_to_integer("-123", Radix::OCTAL), Ok(-0o123));
    assert_eq!(text_to_integer("-123", Radix::DECIMAL), Ok(-123));
    assert_eq!(text_to_integer("-123", Radix::HEX), Ok(-0x123));
    assert_eq!(
        text_to_integer("-9223372036854775808", Radix::DECIMAL),
        Ok(i64::MIN)
    );
    assert_eq!(
        text_to_unsigned("F000000000000000", Radix::HEX),
        Ok(0xF000_0000_0000_0000)
    );
    println!("✓ Decoded all values");
}

#[test]
fn test_decode_wraps_out_of_range_text() {
    assert_eq!(
        text_to_integer("9223372036854775808", Radix::DECIMAL),
        Ok(i64::MIN)
    );
    assert_eq!(
        text_to_integer("9223372036854775807", Radix::DECIMAL),
        Ok(i64::MAX)
    );
    assert_eq!(text_to_unsigned("18446744073709551616", Radix::DECIMAL), Ok(0));
    assert_eq!(
        text_to_unsigned("18446744073709551615", Radix::DECIMAL),
        Ok(u64::MAX)
    );
}

#[test]
fn test_decode_stops_at_nul() {
    assert_eq!(text_to_integer(b"42\0garbage", Radix::DECIMAL), Ok(42));
    assert_eq!(text_to_unsigned(b"FF\0", Radix::HEX), Ok(255));
}

#[test]
fn test_decode_rejects_invalid_digits() {
    assert_eq!(
        text_to_integer("12G", Radix::HEX),
        Err(FatalError::InvalidDigit {
            position: 2,
            found: Some(b'G')
        })
    );
    assert_eq!(
        text_to_integer("129", Radix::OCTAL),
        Err(FatalError::InvalidDigit {
            position: 2,
            found: Some(b'9')
        })
    );
    assert_eq!(
        text_to_integer("-1x", Radix::DECIMAL),
        Err(FatalError::InvalidDigit {
            position: 2,
            found: Some(b'x')
        })
    );
    // lower case is not in the alphabet
    assert!(text_to_integer("ff", Radix::HEX).is_err());
    // unsigned decode has no sign
    assert!(text_to_unsigned("-1", Radix::DECIMAL).is_err());
}

#[test]
fn test_decode_rejects_empty_digits() {
    assert_eq!(
        text_to_integer("", Radix::DECIMAL),
        Err(FatalError::InvalidDigit {
            position: 0,
            found: None
        })
    );
    assert_eq!(
        text_to_integer("-", Radix::DECIMAL),
        Err(FatalError::InvalidDigit {
            position: 1,
            found: None
        })
    );
    assert!(text_to_integer(b"-\0", Radix::DECIMAL).is_err());
    assert!(text_to_unsigned(b"\0", Radix::HEX).is_err());
}

#[test]
fn test_hex_matches_independent_encoder() {
    for n in [1u64, 0xAB, 0x1234_5678, 0xDEAD_BEEF_CAFE_F00D, u64::MAX] {
        let mut buf = buffer();
        let text = unsigned_to_text(n, Radix::HEX, &mut buf);
        let reference = hex::encode_upper(n.to_be_bytes());
        assert_eq!(text, reference.trim_start_matches('0'));
    }
}

proptest! {
    #[test]
    fn prop_signed_round_trip(n in any::<i64>(), r in 2u32..=16) {
        let mut buf = buffer();
        let text = integer_to_text(n, radix(r), &mut buf);
        prop_assert_eq!(text_to_integer(text, radix(r)), Ok(n));
    }

    #[test]
    fn prop_unsigned_round_trip(n in any::<u64>(), r in 2u32..=16) {
        let mut buf = buffer();
        let text = unsigned_to_text(n, radix(r), &mut buf);
        prop_assert_eq!(text_to_unsigned(text, radix(r)), Ok(n));
    }

    #[test]
    fn prop_decimal_matches_display(n in any::<i64>()) {
        let mut buf = buffer();
        prop_assert_eq!(integer_to_text(n, Radix::DECIMAL, &mut buf), n.to_string());
    }
}
