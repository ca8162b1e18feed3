//! Hexadecimal quantity encoding.
//!
//! The node transmits integer values as `0x`-prefixed hexadecimal strings
//! without leading zeros (zero itself is `0x0`). Hex digits may use either
//! case; the prefix is mandatory.

use ethprim::{AsU256 as _, U256};
use std::num::IntErrorKind;
use thiserror::Error;

/// An error decoding a quantity string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseQuantityError {
    /// The mandatory `0x` prefix is missing. Some nodes are known to emit
    /// bare hex in malformed responses; those must not be accepted.
    #[error("quantity missing '0x' prefix")]
    MissingPrefix,
    /// A non-hexadecimal character, or no digits at all after the prefix.
    #[error("invalid hexadecimal digit in quantity")]
    InvalidDigit,
    /// The value does not fit the target integer type.
    #[error("quantity out of range for target type")]
    Overflow,
}

/// An integer that converts to and from the quantity encoding.
pub trait Quantity: Sized {
    /// Encodes the value without leading zeros; zero encodes as `0x0`.
    fn to_hex(&self) -> String;

    /// Decodes a `0x`-prefixed hexadecimal string.
    fn from_hex(s: &str) -> Result<Self, ParseQuantityError>;
}

fn digits(s: &str) -> Result<&str, ParseQuantityError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or(ParseQuantityError::MissingPrefix)?;
    if digits.is_empty() {
        return Err(ParseQuantityError::InvalidDigit);
    }
    Ok(digits)
}

macro_rules! impl_quantity {
    ($($t:ty,)*) => {$(
        impl Quantity for $t {
            fn to_hex(&self) -> String {
                format!("{self:#x}")
            }

            fn from_hex(s: &str) -> Result<Self, ParseQuantityError> {
                Self::from_str_radix(digits(s)?, 16).map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        ParseQuantityError::Overflow
                    }
                    _ => ParseQuantityError::InvalidDigit,
                })
            }
        }
    )*};
}

impl_quantity! {
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    u128,
}

impl Quantity for U256 {
    fn to_hex(&self) -> String {
        format!("{self:#x}")
    }

    fn from_hex(s: &str) -> Result<Self, ParseQuantityError> {
        let digits = digits(s)?.trim_start_matches('0');
        if digits.len() > 64 {
            return Err(ParseQuantityError::Overflow);
        }

        let (hi, lo) = digits.split_at(digits.len().saturating_sub(32));
        let parse = |half: &str| -> Result<u128, ParseQuantityError> {
            if half.is_empty() {
                return Ok(0);
            }
            u128::from_str_radix(half, 16).map_err(|_| ParseQuantityError::InvalidDigit)
        };

        Ok((parse(hi)?.as_u256() << 128) | parse(lo)?.as_u256())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethprim::AsU256 as _;

    #[test]
    fn encodes_without_leading_zeros() {
        assert_eq!(0_u64.to_hex(), "0x0");
        assert_eq!(1_u64.to_hex(), "0x1");
        assert_eq!(0x17c081_u64.to_hex(), "0x17c081");
        assert_eq!(1024_i32.to_hex(), "0x400");
    }

    #[test]
    fn round_trips_64_bit_values() {
        for n in [0_u64, 1, 0x41, 0x17c081, u64::MAX] {
            assert_eq!(u64::from_hex(&n.to_hex()).unwrap(), n);
        }
    }

    #[test]
    fn digit_case_is_insignificant() {
        assert_eq!(u64::from_hex("0x17C081").unwrap(), 0x17c081);
        assert_eq!(u64::from_hex("0x17c081").unwrap(), 0x17c081);
        assert_eq!(
            i64::from_hex("0x491C86A7F255B000").unwrap(),
            5268233720000000000,
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        for input in ["1307", "x1307", "0y1307", ""] {
            assert_eq!(
                u64::from_hex(input).unwrap_err(),
                ParseQuantityError::MissingPrefix,
            );
        }
        assert_eq!(
            i32::from_hex("1307").unwrap_err(),
            ParseQuantityError::MissingPrefix,
        );
        assert_eq!(
            i64::from_hex("1307").unwrap_err(),
            ParseQuantityError::MissingPrefix,
        );
        assert_eq!(
            U256::from_hex("1307").unwrap_err(),
            ParseQuantityError::MissingPrefix,
        );
    }

    #[test]
    fn rejects_invalid_digits() {
        assert_eq!(
            u64::from_hex("0x").unwrap_err(),
            ParseQuantityError::InvalidDigit,
        );
        assert_eq!(
            u64::from_hex("0x13g7").unwrap_err(),
            ParseQuantityError::InvalidDigit,
        );
    }

    #[test]
    fn guards_overflow_on_narrow_targets() {
        assert_eq!(
            i32::from_hex("0x80000000").unwrap_err(),
            ParseQuantityError::Overflow,
        );
        assert_eq!(i32::from_hex("0x7fffffff").unwrap(), i32::MAX);
        // The same value widens fine.
        assert_eq!(i64::from_hex("0x80000000").unwrap(), 0x80000000);
    }

    #[test]
    fn decodes_wide_values() {
        assert_eq!(U256::from_hex("0x0").unwrap(), 0_u64.as_u256());
        assert_eq!(
            U256::from_hex("0x4547a918a1c230a1").unwrap(),
            0x4547a918a1c230a1_u64.as_u256(),
        );
        assert_eq!(
            U256::from_hex("0x100000000000000000000000000000000").unwrap(),
            1_u128.as_u256() << 128,
        );
        assert_eq!(
            U256::from_hex(&format!("0x{}", "f".repeat(64))).unwrap(),
            U256::MAX,
        );
        assert_eq!(
            U256::from_hex(&format!("0x1{}", "0".repeat(64))).unwrap_err(),
            ParseQuantityError::Overflow,
        );
    }
}
