//! Ethereum RPC types.

use crate::{debug, serialization};
use ethprim::AsU256 as _;
use serde::{
    de::{self, Deserializer},
    ser::Serializer,
    Deserialize, Serialize,
};
use std::fmt::{self, Debug, Formatter};

pub use arrayvec::ArrayVec;
pub use ethprim::{Address, Digest, U256};

/// Empty JSON RPC parameters.
pub struct Empty;

impl Serialize for Empty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [(); 0].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <[(); 0]>::deserialize(deserializer)?;
        Ok(Empty)
    }
}

/// Block number or tag.
///
/// This is the single block-selector representation shared by every method
/// that accepts a "default block" parameter; heights encode as quantities and
/// tags as their literal names.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// Block by number.
    Number(U256),
    /// Block by tag.
    Tag(BlockTag),
}

impl Default for BlockSpec {
    fn default() -> Self {
        Self::Tag(Default::default())
    }
}

impl From<U256> for BlockSpec {
    fn from(number: U256) -> Self {
        Self::Number(number)
    }
}

impl From<u64> for BlockSpec {
    fn from(number: u64) -> Self {
        number.as_u256().into()
    }
}

impl From<BlockTag> for BlockSpec {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

/// Block tag.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The lowest numbered block the client has available.
    Earliest,
    /// The most recent block in the canonical chain observed by the client.
    #[default]
    Latest,
    /// A sample next block built by the client on top of [`BlockTag::Latest`]
    /// from the set of transactions usually taken from the local mempool.
    Pending,
}

/// Whether block transactions should be hydrated.
#[derive(Clone, Copy, Debug, Default)]
pub enum Hydrated {
    /// Only fetch transaction hashes for blocks.
    #[default]
    No,
    /// Fetch full transaction data for blocks.
    Yes,
}

impl Hydrated {
    fn from_bool(value: bool) -> Self {
        match value {
            false => Self::No,
            true => Self::Yes,
        }
    }

    fn as_bool(&self) -> bool {
        match self {
            Self::No => false,
            Self::Yes => true,
        }
    }
}

impl Serialize for Hydrated {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_bool().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hydrated {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::from_bool)
    }
}

/// A log, block, transaction, or whisper filter identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FilterId(U256);

impl FilterId {
    /// Creates a filter from a raw ID. The caller must make sure that this is
    /// a valid ID, otherwise filter ID RPC methods will fail.
    pub fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Gets the raw underlying ID for the filter.
    pub fn into_raw(self) -> U256 {
        self.0
    }
}

/// A value used for filtering.
///
/// The wildcard variant serializes to the explicit `null` the protocol uses
/// for "match anything" positions.
#[derive(Clone, Debug, Default)]
pub enum FilterValue<T> {
    /// A filter that accepts all values.
    #[default]
    Any,
    /// A filter that only accepts a single value.
    Exact(T),
    /// A filter that accepts any one of the specified values.
    OneOf(Vec<T>),
}

impl<T> FilterValue<T> {
    fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<T> Serialize for FilterValue<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Any => serializer.serialize_unit(),
            Self::Exact(value) => value.serialize(serializer),
            Self::OneOf(values) => values.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for FilterValue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Value<T> {
            Exact(T),
            OneOf(Vec<T>),
        }

        match <Option<Value<T>>>::deserialize(deserializer)? {
            None => Ok(Self::Any),
            Some(Value::Exact(value)) => Ok(Self::Exact(value)),
            Some(Value::OneOf(values)) => Ok(Self::OneOf(values)),
        }
    }
}

/// A filter for querying logs from a node, and the options object accepted by
/// `eth_newFilter`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogFilter {
    /// The first block to fetch logs for.
    pub from_block: BlockSpec,
    /// The last block to fetch logs for.
    pub to_block: BlockSpec,
    /// The contract addresses to fetch logs for.
    #[serde(skip_serializing_if = "FilterValue::is_any")]
    pub address: FilterValue<Address>,
    /// The log topics to filter for.
    pub topics: ArrayVec<FilterValue<Digest>, 4>,
}

/// Filter changes.
///
/// Block and pending-transaction filters poll as arrays of hashes, log
/// filters as arrays of log objects; the element shape decides which. An
/// array of anything else fails to decode.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FilterChanges {
    /// New block or transaction hashes.
    Hashes(Vec<Digest>),
    /// New logs.
    Logs(Vec<Log>),
}

/// An Ethereum log.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    /// Whether or not the log was removed because of a re-org.
    pub removed: bool,
    /// The index of the log within the block.
    #[serde(with = "serialization::num")]
    pub log_index: u32,
    /// The index of the transaction that emitted this log within the block.
    #[serde(with = "serialization::num")]
    pub transaction_index: u32,
    /// The hash of the transaction that emitted this log.
    pub transaction_hash: Digest,
    /// The hash of the block containing the log.
    pub block_hash: Digest,
    /// The height of the block containing the log.
    #[serde(with = "serialization::num")]
    pub block_number: u64,
    /// The address of the contract that emitted the log.
    pub address: Address,
    /// The data emitted with the log.
    #[serde(with = "serialization::bytes")]
    pub data: Vec<u8>,
    /// The topics emitted with the log.
    pub topics: ArrayVec<Digest, 4>,
}

impl Debug for Log {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Log")
            .field("removed", &self.removed)
            .field("log_index", &self.log_index)
            .field("transaction_index", &self.transaction_index)
            .field("transaction_hash", &self.transaction_hash)
            .field("block_hash", &self.block_hash)
            .field("block_number", &self.block_number)
            .field("address", &self.address)
            .field("data", &debug::Hex(&self.data))
            .field("topics", &self.topics)
            .finish()
    }
}

/// Syncing progress.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncingProgress {
    /// The block the sync started at.
    pub starting_block: U256,
    /// Current block.
    pub current_block: U256,
    /// Highest known block.
    pub highest_block: U256,
    /// Total number of known state entries.
    pub known_states: U256,
    /// Number of state entries downloaded so far.
    pub pulled_states: U256,
}

/// Syncing status.
///
/// The node answers `eth_syncing` with either the literal `false` or a
/// progress object; `true` is not a valid answer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SyncingStatus {
    /// Syncing is in progress.
    Syncing(SyncingProgress),
    /// Not syncing.
    NotSyncing,
}

impl Serialize for SyncingStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Syncing(progress) => SyncingProgress::serialize(progress, serializer),
            Self::NotSyncing => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for SyncingStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Inner {
            Syncing(SyncingProgress),
            NotSyncing(bool),
        }

        match Inner::deserialize(deserializer)? {
            Inner::Syncing(progress) => Ok(Self::Syncing(progress)),
            Inner::NotSyncing(false) => Ok(Self::NotSyncing),
            Inner::NotSyncing(true) => Err(de::Error::custom("unexpected `true` value")),
        }
    }
}

/// A bloom filter over the logs of a block or receipt.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Bloom(pub [u8; 256]);

impl Default for Bloom {
    fn default() -> Self {
        Self([0; 256])
    }
}

impl Debug for Bloom {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Bloom").field(&debug::Hex(&self.0)).finish()
    }
}

impl Serialize for Bloom {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::bytearray::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Bloom {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::bytearray::deserialize(deserializer).map(Self)
    }
}

/// An Ethereum block header.
///
/// This is the complete result shape for the uncle queries: uncle headers
/// carry neither a transaction nor an uncle list of their own. The `hash`,
/// `number`, `nonce`, and `logsBloom` fields are `null` for the pending
/// block.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    /// The block hash.
    pub hash: Option<Digest>,
    /// The parent block hash.
    pub parent_hash: Digest,
    /// The SHA3 of the uncles data in the block.
    pub sha3_uncles: Digest,
    /// The address that received the block rewards.
    pub miner: Address,
    /// The state root.
    pub state_root: Digest,
    /// The transactions root.
    pub transactions_root: Digest,
    /// The transaction receipts root.
    pub receipts_root: Digest,
    /// The log bloom filter.
    pub logs_bloom: Option<Bloom>,
    /// The difficulty.
    pub difficulty: U256,
    /// The block height.
    pub number: Option<U256>,
    /// The gas limit.
    pub gas_limit: U256,
    /// The total gas used by all transactions.
    pub gas_used: U256,
    /// The timestamp (in seconds).
    pub timestamp: U256,
    /// Extra data.
    #[serde(with = "serialization::bytes")]
    pub extra_data: Vec<u8>,
    /// The proof-of-work nonce.
    #[serde(default, with = "serialization::option_num")]
    pub nonce: Option<U256>,
    /// The total difficulty of the chain up to this block.
    pub total_difficulty: U256,
    /// The size of the block in bytes.
    pub size: U256,
}

impl Debug for BlockHeader {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BlockHeader")
            .field("hash", &self.hash)
            .field("parent_hash", &self.parent_hash)
            .field("sha3_uncles", &self.sha3_uncles)
            .field("miner", &self.miner)
            .field("state_root", &self.state_root)
            .field("transactions_root", &self.transactions_root)
            .field("receipts_root", &self.receipts_root)
            .field("logs_bloom", &self.logs_bloom)
            .field("difficulty", &self.difficulty)
            .field("number", &self.number)
            .field("gas_limit", &self.gas_limit)
            .field("gas_used", &self.gas_used)
            .field("timestamp", &self.timestamp)
            .field("extra_data", &debug::Hex(&self.extra_data))
            .field("nonce", &self.nonce)
            .field("total_difficulty", &self.total_difficulty)
            .field("size", &self.size)
            .finish()
    }
}

/// Transactions included in a block.
///
/// The node reports either plain hashes or full transaction records depending
/// on the hydration flag of the query; the element shape decides which
/// variant applies.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockTransactions {
    /// Transaction hashes that were part of a block.
    Hashes(Vec<Digest>),
    /// Full transaction data.
    Full(Vec<Transaction>),
}

/// An Ethereum block object.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Block {
    /// The block header data.
    #[serde(flatten)]
    pub header: BlockHeader,
    /// Block transactions.
    pub transactions: BlockTransactions,
    /// Uncle hashes.
    pub uncles: Vec<Digest>,
}

/// An Ethereum transaction object as included in a block.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The hash of the transaction.
    pub hash: Digest,
    /// The transaction nonce.
    #[serde(with = "serialization::num")]
    pub nonce: u64,
    /// The hash of the block containing the transaction, [`None`] when
    /// pending.
    pub block_hash: Option<Digest>,
    /// The height of the block containing the transaction, [`None`] when
    /// pending.
    pub block_number: Option<U256>,
    /// The index of the transaction within its block, [`None`] when pending.
    #[serde(default, with = "serialization::option_num")]
    pub transaction_index: Option<u64>,
    /// Address of transaction sender.
    pub from: Address,
    /// The transaction recipient, [`None`] for contract creation.
    pub to: Option<Address>,
    /// The Ether value associated with the transaction.
    pub value: U256,
    /// Gas price paid by the sender.
    pub gas_price: U256,
    /// The limit in gas units for the transaction.
    #[serde(with = "serialization::num")]
    pub gas: u64,
    /// The calldata associated with the transaction.
    #[serde(with = "serialization::bytes")]
    pub input: Vec<u8>,
}

impl Debug for Transaction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("Transaction")
            .field("hash", &self.hash)
            .field("nonce", &self.nonce)
            .field("block_hash", &self.block_hash)
            .field("block_number", &self.block_number)
            .field("transaction_index", &self.transaction_index)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("value", &self.value)
            .field("gas_price", &self.gas_price)
            .field("gas", &self.gas)
            .field("input", &debug::Hex(&self.input))
            .finish()
    }
}

/// A transaction call object, used for calls, gas estimation, and submitting
/// transactions.
///
/// All fields are optional; absent fields are omitted from the wire.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionCall {
    /// The account sending the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// The transaction recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// The limit in gas units for the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    /// The gas price willing to be paid by the sender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// The Ether value associated with the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// The calldata associated with the transaction.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub data: Option<Vec<u8>>,
    /// The transaction nonce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<U256>,
}

impl Debug for TransactionCall {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TransactionCall")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("gas", &self.gas)
            .field("gas_price", &self.gas_price)
            .field("value", &self.value)
            .field("data", &self.data.as_deref().map(debug::Hex))
            .field("nonce", &self.nonce)
            .finish()
    }
}

/// An Ethereum transaction receipt.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    /// The hash of the transaction.
    pub transaction_hash: Digest,
    /// The index of the transaction within the block it was included in.
    pub transaction_index: U256,
    /// The hash of the block containing the transaction.
    pub block_hash: Digest,
    /// The height of the block containing the transaction.
    pub block_number: U256,
    /// The sum of gas used by this transaction and all preceding transactions
    /// in the same block.
    pub cumulative_gas_used: U256,
    /// The amount of gas used by this specific transaction alone.
    pub gas_used: U256,
    /// Contract address created, or [`None`] if not a deployment.
    pub contract_address: Option<Address>,
    /// Logs emitted by the transaction.
    pub logs: Vec<Log>,
    /// The log bloom filter.
    pub logs_bloom: Bloom,
    /// The post-transaction state root. Only reported for transactions
    /// included before the Byzantium upgrade.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<Digest>,
    /// The transaction status, indicating whether it succeeded or reverted.
    /// Not reported for pre-Byzantium transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TransactionReceiptStatus>,
}

impl Debug for TransactionReceipt {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("TransactionReceipt")
            .field("transaction_hash", &self.transaction_hash)
            .field("transaction_index", &self.transaction_index)
            .field("block_hash", &self.block_hash)
            .field("block_number", &self.block_number)
            .field("cumulative_gas_used", &self.cumulative_gas_used)
            .field("gas_used", &self.gas_used)
            .field("contract_address", &self.contract_address)
            .field("logs", &self.logs)
            .field("logs_bloom", &self.logs_bloom)
            .field("root", &self.root)
            .field("status", &self.status)
            .finish()
    }
}

/// The status of a [`TransactionReceipt`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum TransactionReceiptStatus {
    /// Status of a failed transaction.
    #[serde(rename = "0x0")]
    Failure,
    /// Status of a successful transaction.
    #[serde(rename = "0x1")]
    Success,
}

/// A proof-of-work package as returned by `eth_getWork`: the current block
/// header pow-hash, the seed hash for the DAG, and the boundary condition
/// ("target").
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Work(pub Digest, pub Digest, pub Digest);

/// A proof-of-work nonce.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct PowNonce(pub [u8; 8]);

impl Debug for PowNonce {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("PowNonce")
            .field(&debug::Hex(&self.0))
            .finish()
    }
}

impl Serialize for PowNonce {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::bytearray::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for PowNonce {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::bytearray::deserialize(deserializer).map(Self)
    }
}

/// A whisper topic.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct Topic(pub [u8; 4]);

impl Debug for Topic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Topic").field(&debug::Hex(&self.0)).finish()
    }
}

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialization::bytearray::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serialization::bytearray::deserialize(deserializer).map(Self)
    }
}

/// A whisper message to post via `shh_post`.
#[derive(Clone, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct WhisperPost {
    /// The identity of the sender.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub from: Option<Vec<u8>>,
    /// The identity of the receiver.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub to: Option<Vec<u8>>,
    /// Topics to identify the message by.
    pub topics: Vec<Topic>,
    /// The message payload.
    #[serde(with = "serialization::bytes")]
    pub payload: Vec<u8>,
    /// The priority of the message, in a range from low to high.
    #[serde(with = "serialization::num")]
    pub priority: u32,
    /// The time to live of the message in seconds.
    #[serde(with = "serialization::num")]
    pub ttl: u32,
}

impl Debug for WhisperPost {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("WhisperPost")
            .field("from", &self.from.as_deref().map(debug::Hex))
            .field("to", &self.to.as_deref().map(debug::Hex))
            .field("topics", &self.topics)
            .field("payload", &debug::Hex(&self.payload))
            .field("priority", &self.priority)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// A filter for whisper messages.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct WhisperFilter {
    /// Only receive messages sent to this identity.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub to: Option<Vec<u8>>,
    /// Topics to subscribe to, with `null` wildcard positions.
    pub topics: Vec<FilterValue<Topic>>,
}

impl Debug for WhisperFilter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("WhisperFilter")
            .field("to", &self.to.as_deref().map(debug::Hex))
            .field("topics", &self.topics)
            .finish()
    }
}

/// A whisper message received from a poll.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhisperMessage {
    /// The hash of the message.
    pub hash: Digest,
    /// The identity of the sender, [`None`] for anonymous messages.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub from: Option<Vec<u8>>,
    /// The identity of the receiver, [`None`] for broadcast messages.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serialization::option_bytes"
    )]
    pub to: Option<Vec<u8>>,
    /// Unix timestamp at which the message should expire.
    #[serde(with = "serialization::num")]
    pub expiry: u32,
    /// The time the message should float in the system, in seconds.
    #[serde(with = "serialization::num")]
    pub ttl: u32,
    /// Unix timestamp at which the message was sent.
    #[serde(with = "serialization::num")]
    pub sent: u32,
    /// Topics the message was identified by.
    pub topics: Vec<Topic>,
    /// The message payload.
    #[serde(with = "serialization::bytes")]
    pub payload: Vec<u8>,
    /// The work this message required before it was sent.
    #[serde(with = "serialization::num")]
    pub work_proved: u32,
}

impl Debug for WhisperMessage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("WhisperMessage")
            .field("hash", &self.hash)
            .field("from", &self.from.as_deref().map(debug::Hex))
            .field("to", &self.to.as_deref().map(debug::Hex))
            .field("expiry", &self.expiry)
            .field("ttl", &self.ttl)
            .field("sent", &self.sent)
            .field("topics", &self.topics)
            .field("payload", &debug::Hex(&self.payload))
            .field("work_proved", &self.work_proved)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethprim::AsU256 as _;
    use serde_json::{json, Value};

    fn block_fixture(transactions: Value) -> Value {
        json!({
            "number": "0x1b4",
            "hash": "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
            "parentHash": "0xe99e022112df268087ea7eafaf4790497fd21dbeeb6bd7a1721df161a6657a54",
            "nonce": "0x4547a918a1c230a1",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "stateRoot": "0xd5855eb08b3387c0af375e9cdb6acfc05eb8f519e419b874b6ff2ffda7ed1dff",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "miner": "0x4e65fda2159562a496f9f3522f89122a3088497a",
            "difficulty": "0x27f07",
            "totalDifficulty": "0x27f07",
            "extraData": "0x",
            "size": "0x27f07",
            "gasLimit": "0x9f759",
            "gasUsed": "0x9f759",
            "timestamp": "0x54e34e8e",
            "transactions": transactions,
            "uncles": [],
        })
    }

    fn transaction_fixture() -> Value {
        json!({
            "hash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
            "nonce": "0x0",
            "blockHash": "0xbeab0aa2411b7ab17f30a99d3cb9c6ef2fc5426d6ad6fd9e2a26a6aed1d1055b",
            "blockNumber": "0x15df",
            "transactionIndex": "0x1",
            "from": "0x407d73d8a49eeb85d32cf465507dd71d507100c1",
            "to": "0x407d73d8a49eeb85d32cf465507dd71d507100c2",
            "value": "0x7f110",
            "gas": "0x7f110",
            "gasPrice": "0x9184e72a000",
            "input": "0x603880600c6000396000f300603880600c6000396000f3603880600c6000396000f3",
        })
    }

    #[test]
    fn empty_params_serialize_to_empty_array() {
        assert_eq!(serde_json::to_value(Empty).unwrap(), json!([]));
    }

    #[test]
    fn block_spec_encoding() {
        assert_eq!(
            serde_json::to_value(BlockSpec::default()).unwrap(),
            json!("latest"),
        );
        assert_eq!(
            serde_json::to_value(BlockSpec::from(BlockTag::Earliest)).unwrap(),
            json!("earliest"),
        );
        assert_eq!(
            serde_json::to_value(BlockSpec::from(BlockTag::Pending)).unwrap(),
            json!("pending"),
        );
        assert_eq!(
            serde_json::to_value(BlockSpec::from(0x17c081_u64)).unwrap(),
            json!("0x17c081"),
        );
    }

    #[test]
    fn hydrated_encodes_as_bool() {
        assert_eq!(serde_json::to_value(Hydrated::No).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(Hydrated::Yes).unwrap(), json!(true));
    }

    #[test]
    fn transaction_call_omits_absent_fields() {
        let to: Address = "0x407d73d8a49eeb85d32cf465507dd71d507100c1"
            .parse()
            .unwrap();
        let call = TransactionCall {
            to: Some(to),
            data: Some(vec![0xf6, 0x98, 0xda, 0x25]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&call).unwrap(),
            json!({"to": to, "data": "0xf698da25"}),
        );
    }

    #[test]
    fn log_filter_serializes_null_wildcards() {
        let topic: Digest = "0x000000000000000000000000a94f5374fce5edbc8e2a8697c15331677e6ebf0b"
            .parse()
            .unwrap();
        let filter = LogFilter {
            from_block: BlockSpec::from(1_u64),
            topics: [FilterValue::Any, FilterValue::Exact(topic)]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "fromBlock": "0x1",
                "toBlock": "latest",
                "topics": [null, topic],
            }),
        );
    }

    #[test]
    fn syncing_status_false_means_not_syncing() {
        assert_eq!(
            serde_json::from_value::<SyncingStatus>(json!(false)).unwrap(),
            SyncingStatus::NotSyncing,
        );
    }

    #[test]
    fn syncing_status_true_is_rejected() {
        assert!(serde_json::from_value::<SyncingStatus>(json!(true)).is_err());
    }

    #[test]
    fn syncing_status_object_decodes_progress() {
        let status = serde_json::from_value::<SyncingStatus>(json!({
            "startingBlock": "0x384",
            "currentBlock": "0x386",
            "highestBlock": "0x454",
            "knownStates": "0x1366",
            "pulledStates": "0x1307",
        }))
        .unwrap();
        assert_eq!(
            status,
            SyncingStatus::Syncing(SyncingProgress {
                starting_block: 0x384_u64.as_u256(),
                current_block: 0x386_u64.as_u256(),
                highest_block: 0x454_u64.as_u256(),
                known_states: 4966_u64.as_u256(),
                pulled_states: 4871_u64.as_u256(),
            }),
        );
    }

    #[test]
    fn block_with_full_transactions() {
        let block = serde_json::from_value::<Block>(block_fixture(json!([transaction_fixture()])))
            .unwrap();

        assert_eq!(block.header.nonce, Some(0x4547a918a1c230a1_u64.as_u256()));
        let transactions = match &block.transactions {
            BlockTransactions::Full(transactions) => transactions,
            other => panic!("expected full transactions, got {other:?}"),
        };
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].nonce, 0);
        assert_eq!(transactions[0].gas, 0x7f110);
    }

    #[test]
    fn block_with_transaction_hashes() {
        let block = serde_json::from_value::<Block>(block_fixture(json!([
            "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
        ])))
        .unwrap();

        assert!(matches!(
            block.transactions,
            BlockTransactions::Hashes(ref hashes) if hashes.len() == 1,
        ));
    }

    #[test]
    fn block_with_unrecognized_transaction_shape_fails() {
        assert!(serde_json::from_value::<Block>(block_fixture(json!([42]))).is_err());
    }

    #[test]
    fn uncle_header_decodes_without_transaction_lists() {
        let mut fixture = block_fixture(Value::Null);
        let object = fixture.as_object_mut().unwrap();
        object.remove("transactions");
        object.remove("uncles");

        let header = serde_json::from_value::<BlockHeader>(fixture).unwrap();
        assert_eq!(header.nonce, Some(0x4547a918a1c230a1_u64.as_u256()));
        assert_eq!(header.number, Some(0x1b4_u64.as_u256()));
    }

    #[test]
    fn filter_changes_resolve_element_shape() {
        let hashes = serde_json::from_value::<FilterChanges>(json!([
            "0xdc0818cf78f21a8e70579cb46a43643f78291264dda342ae31049421c82d21ae",
        ]))
        .unwrap();
        assert!(matches!(hashes, FilterChanges::Hashes(ref h) if h.len() == 1));

        let logs = serde_json::from_value::<FilterChanges>(json!([{
            "removed": false,
            "logIndex": "0x1",
            "transactionIndex": "0x0",
            "transactionHash": "0xdf829c5a142f1fccd7d8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcf47",
            "blockHash": "0x8216c5785ac562ff41e2dcfdf5785ac562ff41e2dcfdf829c5a142f1fccd7d82",
            "blockNumber": "0x1b4",
            "address": "0x16c5785ac562ff41e2dcfdf829c5a142f1fccd7d",
            "data": "0x0000000000000000000000000000000000000000000000000000000000000000",
            "topics": ["0x59ebeb90bc63057b6515673c3ecf9438e5058bca0f92585014eced636878c9a5"],
        }]))
        .unwrap();
        let entries = match &logs {
            FilterChanges::Logs(entries) => entries,
            other => panic!("expected logs, got {other:?}"),
        };
        assert_eq!(entries[0].log_index, 1);
        assert_eq!(entries[0].block_number, 0x1b4);
        assert_eq!(entries[0].topics.len(), 1);
    }

    #[test]
    fn work_decodes_from_three_element_array() {
        let work = serde_json::from_value::<Work>(json!([
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
            "0x5eed00000000000000000000000000005eed0000000000000000000000000000",
            "0xd1ff1c01710000000000000000000000d1ff1c01710000000000000000000000",
        ]))
        .unwrap();
        let seed: Digest = "0x5eed00000000000000000000000000005eed0000000000000000000000000000"
            .parse()
            .unwrap();
        assert_eq!(work.1, seed);
    }

    #[test]
    fn whisper_message_decodes() {
        let message = serde_json::from_value::<WhisperMessage>(json!({
            "hash": "0x33eb2da77bf3527e28f8bf493650b1879b08c4f2a362beae4ba2f71bafcd91f9",
            "from": null,
            "to": null,
            "expiry": "0x54caa50a",
            "sent": "0x54ca9ea2",
            "ttl": "0x64",
            "topics": ["0x6578616d"],
            "payload": "0x7b2274797065223a226d657373616765227d",
            "workProved": "0x0",
        }))
        .unwrap();
        assert_eq!(message.ttl, 100);
        assert_eq!(message.from, None);
        assert_eq!(message.topics, vec![Topic(*b"exam")]);
    }

    #[test]
    fn receipt_decodes_with_status() {
        let receipt = serde_json::from_value::<TransactionReceipt>(json!({
            "transactionHash": "0xc6ef2fc5426d6ad6fd9e2a26abeab0aa2411b7ab17f30a99d3cb96aed1d1055b",
            "transactionIndex": "0x1",
            "blockHash": "0xbeab0aa2411b7ab17f30a99d3cb9c6ef2fc5426d6ad6fd9e2a26a6aed1d1055b",
            "blockNumber": "0xb",
            "cumulativeGasUsed": "0x33bc",
            "gasUsed": "0x4dc",
            "contractAddress": "0xb60e8dd61c5d32be8058bb8eb970870f07233155",
            "logs": [],
            "logsBloom": format!("0x{}", "00".repeat(256)),
            "status": "0x1",
        }))
        .unwrap();
        assert_eq!(receipt.status, Some(TransactionReceiptStatus::Success));
        assert_eq!(receipt.root, None);
        assert!(receipt.contract_address.is_some());
    }
}
