//! HTTP JSON RPC client implemented with curl.

use crate::{
    jsonrpc::{self, Id, RpcResult},
    method::Method,
    types::Empty,
};
pub use curl;
use curl::easy::{Easy, List};
use serde::Serialize;
use std::{
    cell::{Cell, RefCell},
    env,
    io::{Read, Write},
    string::FromUtf8Error,
};
use thiserror::Error;

/// An Ethereum RPC HTTP client.
///
/// Each call performs exactly one blocking roundtrip on the wrapped handle;
/// nothing is retried or cached.
pub struct Client {
    handle: RefCell<Easy>,
    id: Cell<u32>,
}

impl Client {
    /// Creates a new JSON RPC HTTP client for the specified URL with the
    /// default HTTP client.
    pub fn new(url: impl AsRef<str>) -> Result<Self, Error> {
        let mut handle = Easy::new();
        handle.url(url.as_ref())?;
        handle.http_headers({
            let mut list = List::new();
            list.append("Content-Type: application/json")?;
            list
        })?;
        Ok(Self::with_handle(handle))
    }

    /// Creates a new JSON RPC HTTP client for the specified curl
    /// [`curl::easy::Easy`] handle instance.
    ///
    /// This method assumes that the `url` has been set.
    pub fn with_handle(handle: Easy) -> Self {
        Self {
            handle: RefCell::new(handle),
            id: Cell::new(0),
        }
    }

    /// Creates a new JSON RPC HTTP client from the environment. This method
    /// uses the `ETHNODE_URL` environment variable. This is useful for
    /// testing.
    ///
    /// # Panics
    ///
    /// This method panics if the environment variable is not present, or if
    /// it is not a valid HTTP url.
    pub fn from_env() -> Self {
        Self::new(env::var("ETHNODE_URL").expect("missing ETHNODE_URL environment variable"))
            .unwrap()
    }

    fn next_id(&self) -> Id {
        let id = self.id.get();
        self.id.set(id.wrapping_add(1));
        Id(id)
    }

    fn roundtrip(&self, request: String) -> Result<String, Error> {
        let mut handle = self
            .handle
            .try_borrow_mut()
            .expect("unexpected sharing of curl handle");

        tracing::trace!(request = %request, "sending JSON RPC request");

        let mut request = request.as_bytes();
        let mut response = Vec::new();
        {
            let mut transfer = handle.transfer();
            transfer.read_function(|chunk| Ok(request.read(chunk).unwrap()))?;
            transfer.write_function(|chunk| Ok(response.write(chunk).unwrap()))?;
            transfer.perform()?;
        }

        let status = handle.response_code()?;
        let response = String::from_utf8(response)?;
        tracing::trace!(status, response = %response, "received JSON RPC response");

        if !(200..300).contains(&status) {
            return Err(Error::Status(status, response));
        }

        Ok(response)
    }

    /// Executes a JSON RPC call.
    ///
    /// The outer error reports local faults (transport failures, malformed
    /// responses); the inner [`RpcResult`] carries the error the node
    /// reported, if any.
    pub fn call<M>(&self, method: M, params: M::Params) -> Result<RpcResult<M::Result>, Error>
    where
        M: Method + Serialize,
    {
        jsonrpc::call(method, params, self.next_id(), |request| {
            self.roundtrip(request)
        })
    }

    /// Executes a JSON RPC call with empty parameters.
    pub fn exec<M>(&self, method: M) -> Result<RpcResult<M::Result>, Error>
    where
        M: Method<Params = Empty> + Serialize,
    {
        self.call(method, Empty)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] curl::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("HTTP {0} error: {1}")]
    Status(u32, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{eth, types::*, web3};

    #[test]
    #[ignore]
    fn connect_to_node() {
        let client = Client::from_env();
        let version = client.exec(web3::ClientVersion).unwrap().unwrap();
        println!("client version: {version}");
    }

    #[test]
    #[ignore]
    fn query_latest_block() {
        let client = Client::from_env();
        let block = client
            .call(eth::GetBlockByNumber, (BlockTag::Latest.into(), Hydrated::No))
            .unwrap()
            .unwrap()
            .unwrap();
        println!("latest block: {:?}", block.header.number);
    }
}
