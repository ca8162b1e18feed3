//! Module containing serializable JSON RPC data types.

use crate::method::Method;
use serde::{
    de::{self, Deserializer},
    Deserialize, Serialize,
};
use serde_json::Value;
use std::fmt::{self, Formatter};
use thiserror::Error;

/// The outcome of a single RPC exchange: either the node produced a typed
/// result, or it reported a structured error. Local faults (malformed
/// responses, transport failures) are not represented here; they abort the
/// call through the surrounding error type instead.
pub type RpcResult<T> = Result<T, Error>;

/// Executes a JSON RPC call with the provided roundtrip implementation.
///
/// Exactly one request is serialized and handed to `roundtrip`; the response
/// body is parsed as a generic envelope and then decoded into the method's
/// result type. A populated `error` field is authoritative and the raw
/// `result` value is never inspected in that case.
pub fn call<M, F, E>(
    method: M,
    params: M::Params,
    id: Id,
    roundtrip: F,
) -> Result<RpcResult<M::Result>, E>
where
    M: Method + Serialize,
    F: FnOnce(String) -> Result<String, E>,
    E: From<serde_json::Error>,
{
    let request = serde_json::to_string(&Request {
        jsonrpc: Version::V2,
        method,
        params,
        id,
    })?;
    let body = roundtrip(request)?;
    let response = serde_json::from_str::<Response>(&body)?;
    match response.payload {
        Ok(result) => Ok(Ok(M::deserialize_result(result)?)),
        Err(error) => Ok(Err(error)),
    }
}

/// JSON RPC supported version.
#[derive(Debug, Deserialize, Serialize)]
pub enum Version {
    /// Version 2.0 of the JSON RPC specification.
    #[serde(rename = "2.0")]
    V2,
}

/// Request and response ID.
///
/// Note that `u32` is used. This is so it always fits in a `f64` and obeys the
/// "SHOULD NOT have fractional parts" rule from the specification. Since the
/// ID is set by the client, we shouldn't run into issues where a numerical ID
/// does not fit into this value or a string ID is used.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, Eq, Hash, PartialEq)]
#[serde(transparent)]
pub struct Id(pub u32);

/// A request object.
#[derive(Debug, Serialize)]
pub struct Request<M>
where
    M: Method,
{
    pub jsonrpc: Version,
    pub method: M,
    #[serde(serialize_with = "M::serialize_params")]
    pub params: M::Params,
    pub id: Id,
}

/// A response object, parsed up to the point where the result payload is
/// still raw JSON.
///
/// Deferring result decoding keeps the error/result precedence rule in one
/// place: `payload` holds the node's error whenever one was reported, no
/// matter what the `result` field contained.
#[derive(Debug)]
pub struct Response {
    pub jsonrpc: Version,
    pub payload: Result<Value, Error>,
    pub id: Option<Id>,
}

impl<'de> Deserialize<'de> for Response {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum Key {
            JsonRpc,
            Result,
            Error,
            Id,
        }

        struct Visitor;

        impl<'de> de::Visitor<'de> for Visitor {
            type Value = Response;

            fn expecting(&self, f: &mut Formatter) -> fmt::Result {
                f.write_str("JSON RPC response")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
            where
                V: de::MapAccess<'de>,
            {
                let mut jsonrpc = None;
                let mut result = None;
                let mut error = None;
                let mut id = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Key::JsonRpc => {
                            if jsonrpc.is_some() {
                                return Err(de::Error::duplicate_field("jsonrpc"));
                            }
                            jsonrpc = Some(map.next_value()?);
                        }
                        Key::Result => {
                            if result.is_some() {
                                return Err(de::Error::duplicate_field("result"));
                            }
                            result = Some(map.next_value::<Value>()?);
                        }
                        Key::Error => {
                            if error.is_some() {
                                return Err(de::Error::duplicate_field("error"));
                            }
                            error = Some(map.next_value()?);
                        }
                        Key::Id => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            // Error responses are allowed to carry a `null` id.
                            id = Some(map.next_value::<Option<Id>>()?);
                        }
                    }
                }

                Ok(Response {
                    jsonrpc: jsonrpc.ok_or_else(|| de::Error::missing_field("jsonrpc"))?,
                    payload: match (error, result) {
                        (Some(error), _) => Err(error),
                        (None, Some(result)) => Ok(result),
                        (None, None) => {
                            return Err(de::Error::custom("missing 'result' or 'error' field"))
                        }
                    },
                    id: id.flatten(),
                })
            }
        }

        deserializer.deserialize_struct(
            "Response",
            &["jsonrpc", "result", "error", "id"],
            Visitor,
        )
    }
}

/// An RPC error that may be produced on a response.
#[derive(Clone, Debug, Deserialize, Error, Serialize)]
#[error("{code}: {message}")]
#[serde(deny_unknown_fields)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

/// An error code.
#[derive(Clone, Copy, Debug, Deserialize, Error, Serialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    #[error("parse error")]
    ParseError,
    #[error("invalid request")]
    InvalidRequest,
    #[error("method not found")]
    MethodNotFound,
    #[error("invalid params")]
    InvalidParams,
    #[error("internal error")]
    InternalError,
    #[error("server error ({0})")]
    ServerError(i32),
    #[error("reserved ({0})")]
    Reserved(i32),
    #[error("{0}")]
    Other(i32),
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        #[allow(clippy::match_overlapping_arm)]
        match code {
            -32700 => Self::ParseError,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            -32099..=-32000 => Self::ServerError(code),
            -32768..=-32100 => Self::Reserved(code),
            _ => Self::Other(code),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::ServerError(code) => code,
            ErrorCode::Reserved(code) => code,
            ErrorCode::Other(code) => code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eth, types::*, web3};
    use ethprim::{Address, AsU256 as _};
    use serde_json::json;

    #[test]
    fn serializes_request_with_positional_params() {
        let address: Address = "0x1f2e3994505ea24642d94d00a4bcf0159ed1a617"
            .parse()
            .unwrap();
        let request = serde_json::to_value(Request {
            jsonrpc: Version::V2,
            method: eth::GetBalance,
            params: (address, BlockSpec::from(0x17c081_u64)),
            id: Id(1),
        })
        .unwrap();

        assert_eq!(
            request,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": [address, "0x17c081"],
                "id": 1,
            }),
        );
    }

    #[test]
    fn serializes_submit_work_params() {
        use hex_literal::hex;

        let pow_hash: Digest = "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
            .parse()
            .unwrap();
        let mix_digest: Digest =
            "0xd1fe5700000000000000000000000000d1fe5700000000000000000000000000"
                .parse()
                .unwrap();
        let request = serde_json::to_value(Request {
            jsonrpc: Version::V2,
            method: eth::SubmitWork,
            params: (PowNonce(hex!("0000000000000001")), pow_hash, mix_digest),
            id: Id(73),
        })
        .unwrap();

        assert_eq!(
            request,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_submitWork",
                "params": ["0x0000000000000001", pow_hash, mix_digest],
                "id": 73,
            }),
        );
    }

    #[test]
    fn get_balance_roundtrip() {
        let address: Address = "0x1f2e3994505ea24642d94d00a4bcf0159ed1a617"
            .parse()
            .unwrap();
        let outcome = call(
            eth::GetBalance,
            (address, BlockSpec::from(0x17c081_u64)),
            Id(1),
            |request| {
                let request = serde_json::from_str::<Value>(&request)?;
                assert_eq!(request["method"], "eth_getBalance");
                assert_eq!(request["params"][1], "0x17c081");
                Ok::<_, serde_json::Error>(
                    r#"{"jsonrpc":"2.0","id":1,"result":"0x491C86A7F255B000"}"#.to_owned(),
                )
            },
        )
        .unwrap();

        assert_eq!(outcome.unwrap(), 5268233720000000000_u64.as_u256());
    }

    #[test]
    fn sha3_error_reported_as_failed_outcome() {
        let body = r#"{
            "jsonrpc": "2.0",
            "id": 7,
            "error": {"code": -32602, "message": "invalid argument 0: hex string without 0x prefix"}
        }"#;
        let outcome = call(web3::Sha3, (vec![0x68, 0x69],), Id(7), |_| {
            Ok::<_, serde_json::Error>(body.to_owned())
        })
        .unwrap();

        let error = outcome.unwrap_err();
        assert_eq!(i32::from(error.code), -32602);
        assert_eq!(error.message, "invalid argument 0: hex string without 0x prefix");
    }

    #[test]
    fn error_takes_precedence_over_result() {
        for body in [
            r#"{"jsonrpc":"2.0","id":0,"result":"0x10","error":{"code":-32000,"message":"boom"}}"#,
            r#"{"jsonrpc":"2.0","id":0,"error":{"code":-32000,"message":"boom"},"result":"0x10"}"#,
            // An error next to an undecodable result must still win.
            r#"{"jsonrpc":"2.0","id":0,"result":{"bogus":[]},"error":{"code":-32000,"message":"boom"}}"#,
        ] {
            let outcome = call(eth::BlockNumber, Empty, Id(0), |_| {
                Ok::<_, serde_json::Error>(body.to_owned())
            })
            .unwrap();
            assert_eq!(outcome.unwrap_err().message, "boom");
        }
    }

    #[test]
    fn response_without_result_or_error_is_malformed() {
        let result = call(eth::BlockNumber, Empty, Id(0), |_| {
            Ok::<_, serde_json::Error>(r#"{"jsonrpc":"2.0","id":0}"#.to_owned())
        });
        assert!(result.is_err());
    }

    #[test]
    fn response_with_wrong_version_is_malformed() {
        let result = call(eth::BlockNumber, Empty, Id(0), |_| {
            Ok::<_, serde_json::Error>(r#"{"jsonrpc":"1.0","id":0,"result":"0x10"}"#.to_owned())
        });
        assert!(result.is_err());
    }

    #[test]
    fn null_result_decodes_for_optional_methods() {
        let digest = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"
            .parse()
            .unwrap();
        let outcome = call(eth::GetTransactionByHash, (digest,), Id(0), |_| {
            Ok::<_, serde_json::Error>(r#"{"jsonrpc":"2.0","id":0,"result":null}"#.to_owned())
        })
        .unwrap();
        assert_eq!(outcome.unwrap(), None);
    }

    #[test]
    fn undecodable_result_aborts_the_call() {
        let result = call(eth::BlockNumber, Empty, Id(0), |_| {
            Ok::<_, serde_json::Error>(r#"{"jsonrpc":"2.0","id":0,"result":"10"}"#.to_owned())
        });
        assert!(result.is_err());
    }
}
