use num_bigint::BigInt;
use pretty_assertions::assert_eq;
use test_case::test_case;
use test_log::test;

use super::{BigIntAsHex, ParseHexError};

#[test_case(0, "0x0"; "zero")]
#[test_case(42, "0x2a"; "positive")]
#[test_case(-31, "-0x1f"; "negative")]
fn test_hex_text(value: i64, text: &str) {
    let num = BigIntAsHex::from(BigInt::from(value));
    assert_eq!(num.to_string(), text);
    assert_eq!(text.parse::<BigIntAsHex>(), Ok(num));
}

#[test]
fn test_bigint_serde() {
    // Minus the Stark prime.
    let text = "-0x800000000000011000000000000000000000000000000000000000000000001";
    let num: BigIntAsHex = text.parse().unwrap();
    assert_eq!(num.value, -((BigInt::from(1_i32) << 251_usize) + (BigInt::from(17_i32) << 192_usize) + 1_i32));

    let serialized = serde_json::to_string(&num).unwrap();
    assert_eq!(serialized, format!("\"{text}\""));
    assert_eq!(serde_json::from_str::<BigIntAsHex>(&serialized).unwrap(), num);
}

#[test_case("42", ParseHexError::MissingPrefix("42".into()); "decimal")]
#[test_case("0x", ParseHexError::InvalidDigits("0x".into()); "no digits")]
#[test_case("-0xg1", ParseHexError::InvalidDigits("-0xg1".into()); "bad digit")]
fn test_parse_errors(text: &str, error: ParseHexError) {
    assert_eq!(text.parse::<BigIntAsHex>(), Err(error));
    assert!(serde_json::from_str::<BigIntAsHex>(&format!("\"{text}\"")).is_err());
}
