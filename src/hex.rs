//! Conversions between integers and `0x`-prefixed hex quantities

use primitive_types::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    #[error("Hex value \"{0}\" is missing the 0x prefix")]
    MissingPrefix(String),

    #[error("Hex value \"{0}\" has no digits")]
    Empty(String),

    #[error("Hex value \"{0}\" contains a non-hex digit")]
    InvalidDigit(String),

    #[error("Hex value \"{value}\" exceeds {max_bits} bits")]
    Overflow { value: String, max_bits: u32 },
}

/// Encode an unsigned integer as a quantity: lowercase, `0x`-prefixed,
/// no leading zeros (zero is `0x0`).
pub fn number_to_hex<N: Into<U256>>(value: N) -> String {
    format!("0x{:x}", value.into())
}

/// Returns the significant digits of a quantity, without prefix and leading zeros.
fn significant_digits(hex: &str) -> Result<&str, HexError> {
    let digits = hex
        .strip_prefix("0x")
        .ok_or_else(|| HexError::MissingPrefix(hex.to_string()))?;

    if digits.is_empty() {
        return Err(HexError::Empty(hex.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HexError::InvalidDigit(hex.to_string()));
    }

    Ok(digits.trim_start_matches('0'))
}

fn check_width(hex: &str, digits: &str, max_bits: u32) -> Result<(), HexError> {
    if digits.len() * 4 > max_bits as usize {
        return Err(HexError::Overflow {
            value: hex.to_string(),
            max_bits,
        });
    }
    Ok(())
}

/// Decode a quantity into a `u64`.
///
/// Values wider than 64 bits are rejected with [`HexError::Overflow`]
/// rather than truncated; use [`hex_to_u256`] for wide quantities.
pub fn hex_to_number(hex: &str) -> Result<u64, HexError> {
    let digits = significant_digits(hex)?;
    if digits.is_empty() {
        return Ok(0);
    }
    check_width(hex, digits, 64)?;
    u64::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit(hex.to_string()))
}

/// Decode a quantity into a `u128`.
pub fn hex_to_u128(hex: &str) -> Result<u128, HexError> {
    let digits = significant_digits(hex)?;
    if digits.is_empty() {
        return Ok(0);
    }
    check_width(hex, digits, 128)?;
    u128::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit(hex.to_string()))
}

/// Decode a quantity of up to 256 bits.
pub fn hex_to_u256(hex: &str) -> Result<U256, HexError> {
    let digits = significant_digits(hex)?;
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    check_width(hex, digits, 256)?;
    U256::from_str_radix(digits, 16).map_err(|_| HexError::InvalidDigit(hex.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_to_hex() {
        assert_eq!(number_to_hex(0u64), "0x0");
        assert_eq!(number_to_hex(5u64), "0x5");
        assert_eq!(number_to_hex(255u8), "0xff");
        assert_eq!(number_to_hex(4660u64), "0x1234");
        assert_eq!(number_to_hex(u64::MAX), "0xffffffffffffffff");
        assert_eq!(
            number_to_hex(U256::MAX),
            format!("0x{}", "f".repeat(64))
        );
    }

    #[test]
    fn test_number_to_hex_has_no_leading_zeros() {
        for n in [1u64, 0x10, 0x100, 0x0fff, 1 << 40] {
            let hex = number_to_hex(n);
            assert!(!hex[2..].starts_with('0'), "{} has a leading zero", hex);
        }
    }

    #[test]
    fn test_round_trip() {
        for n in [0u64, 1, 15, 16, 21000, 0xdead_beef, u64::MAX - 1, u64::MAX] {
            assert_eq!(hex_to_number(&number_to_hex(n)).unwrap(), n);
        }

        let wide = U256::from(u128::MAX) * U256::from(1_000_003u64);
        assert_eq!(hex_to_u256(&number_to_hex(wide)).unwrap(), wide);
        assert_eq!(hex_to_u128(&number_to_hex(u128::MAX)).unwrap(), u128::MAX);
    }

    #[test]
    fn test_hex_to_number_accepts_padding_and_uppercase() {
        assert_eq!(hex_to_number("0x0000000000000000000010"), Ok(16));
        assert_eq!(hex_to_number("0xDE0B6B3A7640000"), Ok(1_000_000_000_000_000_000));
        assert_eq!(hex_to_number("0x0"), Ok(0));
        assert_eq!(hex_to_number("0x000"), Ok(0));
    }

    #[test]
    fn test_hex_to_number_overflow() {
        let err = hex_to_number("0x10000000000000000").unwrap_err();
        assert_eq!(
            err,
            HexError::Overflow {
                value: "0x10000000000000000".to_string(),
                max_bits: 64
            }
        );
        assert!(hex_to_u128("0x10000000000000000").is_ok());
        assert!(matches!(
            hex_to_u256(&format!("0x1{}", "0".repeat(64))),
            Err(HexError::Overflow { max_bits: 256, .. })
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(hex_to_number("1234"), Err(HexError::MissingPrefix("1234".into())));
        assert_eq!(hex_to_number("0x"), Err(HexError::Empty("0x".into())));
        assert_eq!(hex_to_number("0xzz"), Err(HexError::InvalidDigit("0xzz".into())));
        assert_eq!(hex_to_number("0x+1"), Err(HexError::InvalidDigit("0x+1".into())));
    }
}
