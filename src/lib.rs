//! A typed client for the Ethereum node JSON RPC surface.
//!
//! Documentation for the APIs can be found here:
//! <https://ethereum.org/en/developers/docs/apis/json-rpc/>

#[cfg(feature = "curl")]
pub mod curl;
pub mod jsonrpc;
#[macro_use]
pub mod method;
mod debug;
pub mod quantity;
mod serialization;
pub mod types;

use self::types::*;

pub use self::jsonrpc::RpcResult;

module! {
    /// The `web3` namespace.
    pub mod web3 {
        /// Returns the current client version.
        pub struct ClientVersion as "web3_clientVersion"
            Empty => String;

        /// Returns the Keccak-256 hash of the given data.
        pub struct Sha3 as "web3_sha3"
            (Vec<u8>,) [serialization::param_bytes] => Digest;
    }
}

module! {
    /// The `net` namespace.
    pub mod net {
        /// Returns the current network ID. This is usually equivalent to the
        /// chain ID, but may differ from it for some legacy networks or
        /// special testnets.
        pub struct Version as "net_version"
            Empty => U256 [ethprim::num::serde::decimal];

        /// Returns the number of peers currently connected to the client.
        pub struct PeerCount as "net_peerCount"
            Empty => U256;

        /// Returns whether the client is actively listening for network
        /// connections.
        pub struct Listening as "net_listening"
            Empty => bool;
    }
}

module! {
    /// The `eth` namespace.
    pub mod eth {
        /// Returns the current Ethereum protocol version.
        pub struct ProtocolVersion as "eth_protocolVersion"
            Empty => String;

        /// Returns an object with data about the sync status or false.
        pub struct Syncing as "eth_syncing"
            Empty => SyncingStatus;

        /// Returns the client coinbase address.
        pub struct Coinbase as "eth_coinbase"
            Empty => Address;

        /// Returns whether the client is actively mining new blocks.
        pub struct Mining as "eth_mining"
            Empty => bool;

        /// Returns the number of hashes per second that the node is mining
        /// with.
        pub struct Hashrate as "eth_hashrate"
            Empty => U256;

        /// Returns the current price per gas in wei.
        pub struct GasPrice as "eth_gasPrice"
            Empty => U256;

        /// Returns a list of addresses owned by client.
        pub struct Accounts as "eth_accounts"
            Empty => Vec<Address>;

        /// Returns the number of most recent block.
        pub struct BlockNumber as "eth_blockNumber"
            Empty => U256;

        /// Returns the balance of the account of given address.
        pub struct GetBalance as "eth_getBalance"
            (Address, BlockSpec) => U256;

        /// Returns the value from a storage position at a given address.
        pub struct GetStorageAt as "eth_getStorageAt"
            (Address, U256, BlockSpec) => [u8; 32] [serialization::bytearray];

        /// Returns the number of transactions sent from an address.
        pub struct GetTransactionCount as "eth_getTransactionCount"
            (Address, BlockSpec) => U256;

        /// Returns the number of transactions in a block from a block matching
        /// the given block hash.
        pub struct GetBlockTransactionCountByHash as "eth_getBlockTransactionCountByHash"
            (Digest,) => Option<U256>;

        /// Returns the number of transactions in a block matching the given
        /// block number.
        pub struct GetBlockTransactionCountByNumber as "eth_getBlockTransactionCountByNumber"
            (BlockSpec,) => Option<U256>;

        /// Returns the number of uncles in a block from a block matching the
        /// given block hash.
        pub struct GetUncleCountByBlockHash as "eth_getUncleCountByBlockHash"
            (Digest,) => Option<U256>;

        /// Returns the number of uncles in a block from a block matching the
        /// given block number.
        pub struct GetUncleCountByBlockNumber as "eth_getUncleCountByBlockNumber"
            (BlockSpec,) => Option<U256>;

        /// Returns code at a given address.
        pub struct GetCode as "eth_getCode"
            (Address, BlockSpec) => Vec<u8> [serialization::bytes];

        /// Returns a signature over the provided data by the specified
        /// account.
        pub struct Sign as "eth_sign"
            (Address, Vec<u8>) [serialization::param_eth_sign] => Vec<u8> [serialization::bytes];

        /// Signs and submits a transaction.
        pub struct SendTransaction as "eth_sendTransaction"
            (TransactionCall,) => Digest;

        /// Submits a raw, already signed transaction.
        pub struct SendRawTransaction as "eth_sendRawTransaction"
            (Vec<u8>,) [serialization::param_bytes] => Digest;

        /// Executes a new message call immediately without creating a
        /// transaction on the block chain.
        pub struct Call as "eth_call"
            (TransactionCall, BlockSpec) => Vec<u8> [serialization::bytes];

        /// Generates and returns an estimate of how much gas is necessary to
        /// allow the transaction to complete.
        pub struct EstimateGas as "eth_estimateGas"
            (TransactionCall,) => U256;

        /// Returns information about a block by hash.
        pub struct GetBlockByHash as "eth_getBlockByHash"
            (Digest, Hydrated) => Option<Block>;

        /// Returns information about a block by number.
        pub struct GetBlockByNumber as "eth_getBlockByNumber"
            (BlockSpec, Hydrated) => Option<Block>;

        /// Returns the information about a transaction requested by
        /// transaction hash.
        pub struct GetTransactionByHash as "eth_getTransactionByHash"
            (Digest,) => Option<Transaction>;

        /// Returns information about a transaction by block hash and
        /// transaction index position.
        pub struct GetTransactionByBlockHashAndIndex as "eth_getTransactionByBlockHashAndIndex"
            (Digest, U256) => Option<Transaction>;

        /// Returns information about a transaction by block number and
        /// transaction index position.
        pub struct GetTransactionByBlockNumberAndIndex as "eth_getTransactionByBlockNumberAndIndex"
            (BlockSpec, U256) => Option<Transaction>;

        /// Returns the receipt of a transaction by transaction hash.
        pub struct GetTransactionReceipt as "eth_getTransactionReceipt"
            (Digest,) => Option<TransactionReceipt>;

        /// Returns information about an uncle of a block by hash and uncle
        /// index position.
        pub struct GetUncleByBlockHashAndIndex as "eth_getUncleByBlockHashAndIndex"
            (Digest, U256) => Option<BlockHeader>;

        /// Returns information about an uncle of a block by number and uncle
        /// index position.
        pub struct GetUncleByBlockNumberAndIndex as "eth_getUncleByBlockNumberAndIndex"
            (BlockSpec, U256) => Option<BlockHeader>;

        /// Installs a log filter in the node, allowing for later polling.
        /// Registers client interest in logs matching the filter, and returns
        /// an identifier.
        pub struct NewFilter as "eth_newFilter"
            (LogFilter,) => FilterId;

        /// Creates a filter in the node, allowing for later polling.
        /// Registers client interest in new blocks, and returns an identifier.
        pub struct NewBlockFilter as "eth_newBlockFilter"
            Empty => FilterId;

        /// Creates a filter in the node, allowing for later polling.
        /// Registers client interest in new pending transactions, and returns
        /// an identifier.
        pub struct NewPendingTransactionFilter as "eth_newPendingTransactionFilter"
            Empty => FilterId;

        /// Uninstalls a filter with given id. Should always be called when
        /// watching is no longer needed.
        pub struct UninstallFilter as "eth_uninstallFilter"
            (FilterId,) => bool;

        /// Polling method for the filter with the given ID (created using
        /// `eth_newFilter`). Returns an array of logs, block hashes, or
        /// transaction hashes since last poll, depending on the installed
        /// filter.
        pub struct GetFilterChanges as "eth_getFilterChanges"
            (FilterId,) => FilterChanges;

        /// Returns an array of all logs matching the log filter with the
        /// given ID.
        pub struct GetFilterLogs as "eth_getFilterLogs"
            (FilterId,) => Vec<Log>;

        /// Returns an array of all logs matching the specified filter.
        pub struct GetLogs as "eth_getLogs"
            (LogFilter,) => Vec<Log>;

        /// Returns the hash of the current block, the seed hash, and the
        /// boundary condition to be met.
        pub struct GetWork as "eth_getWork"
            Empty => Work;

        /// Submits a proof-of-work solution.
        pub struct SubmitWork as "eth_submitWork"
            (PowNonce, Digest, Digest) => bool;

        /// Submits the mining hashrate of an external miner.
        pub struct SubmitHashrate as "eth_submitHashrate"
            (U256, Digest) => bool;
    }
}

module! {
    /// The `shh` whisper namespace.
    pub mod shh {
        /// Returns the current whisper protocol version.
        pub struct Version as "shh_version"
            Empty => String;

        /// Sends a whisper message.
        pub struct Post as "shh_post"
            (WhisperPost,) => bool;

        /// Creates a new whisper identity in the client and returns its
        /// public key.
        pub struct NewIdentity as "shh_newIdentity"
            Empty => Vec<u8> [serialization::bytes];

        /// Returns whether the client holds the private keys for a given
        /// identity.
        pub struct HasIdentity as "shh_hasIdentity"
            (Vec<u8>,) [serialization::param_bytes] => bool;

        /// Creates a new group and returns its address.
        pub struct NewGroup as "shh_newGroup"
            Empty => Vec<u8> [serialization::bytes];

        /// Adds an identity to a group.
        pub struct AddToGroup as "shh_addToGroup"
            (Vec<u8>,) [serialization::param_bytes] => bool;

        /// Creates a filter to notify when the client receives a whisper
        /// message matching the filter options, and returns an identifier.
        pub struct NewFilter as "shh_newFilter"
            (WhisperFilter,) => FilterId;

        /// Uninstalls a whisper filter with the given id. Should always be
        /// called when watching is no longer needed.
        pub struct UninstallFilter as "shh_uninstallFilter"
            (FilterId,) => bool;

        /// Polling method for a whisper filter. Returns new messages since
        /// the last call of this method.
        pub struct GetFilterChanges as "shh_getFilterChanges"
            (FilterId,) => Vec<WhisperMessage>;

        /// Returns all messages matching a filter.
        pub struct GetMessages as "shh_getMessages"
            (FilterId,) => Vec<WhisperMessage>;
    }
}
