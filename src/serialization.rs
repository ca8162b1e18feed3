//! JSON serialization helpers.

#![allow(dead_code)]

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a `[u8]` as a `0x`-prefixed hex string.
pub mod bytes {
    use super::*;
    use std::{borrow::Cow, fmt::Write as _};

    #[doc(hidden)]
    pub fn encode(bytes: &[u8]) -> String {
        let mut buffer = String::with_capacity(2 + bytes.len() * 2);
        buffer.push_str("0x");
        for byte in bytes {
            write!(&mut buffer, "{byte:02x}").unwrap();
        }
        buffer
    }

    #[doc(hidden)]
    pub fn decode<E>(hex: &str) -> Result<Vec<u8>, E>
    where
        E: de::Error,
    {
        let mut bytes = vec![0; (hex.len() / 2).saturating_sub(1)];
        decode_into(hex, &mut bytes)?;
        Ok(bytes)
    }

    #[doc(hidden)]
    pub fn decode_into<E>(hex: &str, bytes: &mut [u8]) -> Result<(), E>
    where
        E: de::Error,
    {
        let hex = hex
            .strip_prefix("0x")
            .ok_or_else(|| de::Error::custom("bytes missing '0x' prefix"))?;

        if hex.len() % 2 != 0 {
            return Err(de::Error::custom("odd number of characters in hex string"));
        }
        if hex.len() != bytes.len() * 2 {
            return Err(de::Error::custom("hex string length mismatch"));
        }

        let nibble = |x: u8| -> Result<u8, E> {
            match x {
                b'0'..=b'9' => Ok(x - b'0'),
                b'a'..=b'f' => Ok(x - b'a' + 0xa),
                b'A'..=b'F' => Ok(x - b'A' + 0xa),
                _ => Err(de::Error::custom(format!("invalid hex ASCII digit {x:#04x}"))),
            }
        };

        for (byte, chunk) in bytes.iter_mut().zip(hex.as_bytes().chunks_exact(2)) {
            *byte = (nibble(chunk[0])? << 4) + nibble(chunk[1])?;
        }

        Ok(())
    }

    #[doc(hidden)]
    pub fn serialize<T, S>(value: T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        encode(value.as_ref()).serialize(serializer)
    }

    #[doc(hidden)]
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        Ok(decode(&Cow::<str>::deserialize(deserializer)?)?.into())
    }
}

/// Serialize an `Option<[u8]>`, mapping `None` to JSON `null`.
pub mod option_bytes {
    use super::{
        bytes::{decode, encode},
        *,
    };
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        let bytes = match value {
            Some(value) => value.as_ref(),
            None => return serializer.serialize_none(),
        };

        serializer.serialize_some(&encode(bytes))
    }

    #[doc(hidden)]
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: From<Vec<u8>>,
        D: Deserializer<'de>,
    {
        let hex = match Option::<Cow<str>>::deserialize(deserializer)? {
            Some(value) => value,
            None => return Ok(None),
        };

        Ok(Some(decode(&hex)?.into()))
    }
}

/// Serialize a fixed size `[u8; N]`.
pub mod bytearray {
    use super::*;
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<const N: usize, S>(value: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bytes::serialize(value, serializer)
    }

    #[doc(hidden)]
    pub fn deserialize<'de, const N: usize, D>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut bytes = [0; N];
        bytes::decode_into(&Cow::<str>::deserialize(deserializer)?, &mut bytes)?;
        Ok(bytes)
    }
}

/// Serialize `0x`-prefixed hex quantities.
pub mod num {
    use super::*;
    use crate::quantity::Quantity;
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Quantity,
        S: Serializer,
    {
        value.to_hex().serialize(serializer)
    }

    #[doc(hidden)]
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Quantity,
        D: Deserializer<'de>,
    {
        T::from_hex(&Cow::<str>::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

/// Serialize an `Option` of a `0x`-prefixed hex quantity.
pub mod option_num {
    use super::*;
    use crate::quantity::Quantity;
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Quantity,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.to_hex()),
            None => serializer.serialize_none(),
        }
    }

    #[doc(hidden)]
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Quantity,
        D: Deserializer<'de>,
    {
        match Option::<Cow<str>>::deserialize(deserializer)? {
            Some(hex) => Ok(Some(T::from_hex(&hex).map_err(de::Error::custom)?)),
            None => Ok(None),
        }
    }
}

/// Serialize a single `0x`-prefixed byte string parameter.
pub mod param_bytes {
    use super::*;
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<S>(value: &(Vec<u8>,), serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (bytes::encode(&value.0),).serialize(serializer)
    }

    #[doc(hidden)]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<(Vec<u8>,), D::Error>
    where
        D: Deserializer<'de>,
    {
        let (hex,) = <(Cow<str>,)>::deserialize(deserializer)?;
        Ok((bytes::decode(&hex)?,))
    }
}

/// Serialize `eth_sign` parameters.
pub mod param_eth_sign {
    use super::*;
    use ethprim::Address;
    use std::borrow::Cow;

    #[doc(hidden)]
    pub fn serialize<S>(value: &(Address, Vec<u8>), serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&value.0, bytes::encode(&value.1)).serialize(serializer)
    }

    #[doc(hidden)]
    pub fn deserialize<'de, D>(deserializer: D) -> Result<(Address, Vec<u8>), D::Error>
    where
        D: Deserializer<'de>,
    {
        let (address, hex) = <(Address, Cow<str>)>::deserialize(deserializer)?;
        Ok((address, bytes::decode(&hex)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn encodes_bytes_as_prefixed_hex() {
        assert_eq!(bytes::encode(&[]), "0x");
        assert_eq!(bytes::encode(&[0xc0, 0xff, 0xee]), "0xc0ffee");
    }

    #[test]
    fn decodes_bytes_in_either_case() {
        let decoded: Vec<u8> = bytes::decode::<serde_json::Error>("0xC0ffEE").unwrap();
        assert_eq!(decoded, vec![0xc0, 0xff, 0xee]);
    }

    #[test]
    fn rejects_bytes_without_prefix() {
        assert!(bytes::decode::<serde_json::Error>("c0ffee").is_err());
        assert!(bytes::decode::<serde_json::Error>("0xc0f").is_err());
    }

    #[test]
    fn sign_params_serialize_in_wire_order() {
        let address = ethprim::address!("0x9008D19f58AAbD9eD0D60971565AA8510560ab41");
        let params = param_eth_sign::serialize(
            &(address, vec![0xde, 0xad, 0xbe, 0xef]),
            serde_json::value::Serializer,
        )
        .unwrap();
        assert_eq!(params, json!([address, "0xdeadbeef"]));
    }
}
