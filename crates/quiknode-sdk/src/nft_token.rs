//! The NFT And Token RPC API V2 — QuickNode's gated `qn_*` namespace.
//!
//! Every method funnels through one [`NftTokenApi::dispatch`] path:
//! add-on gate, then schema validation, then a single transport
//! round-trip with `{method, params: [args]}`. The first two steps run
//! synchronously; a call that fails either never touches the network.
//! Responses come back verbatim as [`serde_json::Value`] — the SDK does
//! not validate response shapes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use quiknode_core::error::{QuickNodeError, TransportError};
use quiknode_core::request::JsonRpcRequest;
use quiknode_core::transport::RpcTransport;
use quiknode_core::validate::Schema;

use crate::config::QuickNodeConfig;
use crate::schemas;
use crate::types::*;

const ADD_ON_HUMAN_NAME: &str = "NFT And Token RPC API V2";
const ADD_ON_CONFIG_NAME: &str = "nftTokenV2";

/// Dispatcher for the NFT/token namespace, bound to one transport and
/// one immutable add-on configuration.
pub struct NftTokenApi {
    transport: Arc<dyn RpcTransport>,
    enabled: bool,
    request_id: AtomicU64,
}

impl NftTokenApi {
    pub(crate) fn new(transport: Arc<dyn RpcTransport>, config: &QuickNodeConfig) -> Self {
        Self {
            transport,
            enabled: config.add_ons.nft_token_v2,
            request_id: AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The shared dispatch path: gate, validate, forward.
    async fn dispatch(
        &self,
        method: &'static str,
        schema: &Schema,
        args: Value,
    ) -> Result<Value, QuickNodeError> {
        if !self.enabled {
            return Err(QuickNodeError::AddOnNotEnabled {
                human_name: ADD_ON_HUMAN_NAME,
                config_name: ADD_ON_CONFIG_NAME,
            });
        }
        schema.validate(&args)?;

        tracing::debug!(method, "dispatching NFT/token RPC call");
        let req = JsonRpcRequest::new(self.next_id(), method, vec![args]);
        let resp = self
            .transport
            .send(req)
            .await
            .map_err(QuickNodeError::Transport)?;
        resp.into_result()
            .map_err(|e| QuickNodeError::Transport(TransportError::Rpc(e)))
    }

    async fn call<I: Serialize>(
        &self,
        method: &'static str,
        schema: &Schema,
        input: &I,
    ) -> Result<Value, QuickNodeError> {
        let args = serde_json::to_value(input)
            .map_err(|e| QuickNodeError::Transport(TransportError::Json(e)))?;
        self.dispatch(method, schema, args).await
    }

    /// Fetch NFTs held by a wallet (`qn_fetchNFTs`).
    pub async fn fetch_nfts(&self, input: &FetchNftsInput) -> Result<Value, QuickNodeError> {
        self.call("qn_fetchNFTs", &schemas::FETCH_NFTS, input).await
    }

    /// Fetch collection details (`qn_fetchNFTCollectionDetails`).
    pub async fn fetch_nft_collection_details(
        &self,
        input: &FetchNftCollectionDetailsInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_fetchNFTCollectionDetails",
            &schemas::FETCH_NFT_COLLECTION_DETAILS,
            input,
        )
        .await
    }

    /// Fetch NFTs belonging to a collection (`qn_fetchNFTsByCollection`).
    pub async fn fetch_nfts_by_collection(
        &self,
        input: &FetchNftsByCollectionInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_fetchNFTsByCollection",
            &schemas::FETCH_NFTS_BY_COLLECTION,
            input,
        )
        .await
    }

    /// Fetch transfers for a single NFT (`qn_getTransfersByNFT`).
    pub async fn get_transfers_by_nft(
        &self,
        input: &GetTransfersByNftInput,
    ) -> Result<Value, QuickNodeError> {
        self.call("qn_getTransfersByNFT", &schemas::GET_TRANSFERS_BY_NFT, input)
            .await
    }

    /// Verify NFT ownership for a wallet (`qn_verifyNFTsOwner`).
    pub async fn verify_nfts_owner(
        &self,
        input: &VerifyNftsOwnerInput,
    ) -> Result<Value, QuickNodeError> {
        self.call("qn_verifyNFTsOwner", &schemas::VERIFY_NFTS_OWNER, input)
            .await
    }

    /// Token metadata by contract address (`qn_getTokenMetadataByContractAddress`).
    pub async fn get_token_metadata_by_contract_address(
        &self,
        input: &GetTokenMetadataByContractAddressInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_getTokenMetadataByContractAddress",
            &schemas::GET_TOKEN_METADATA_BY_CONTRACT_ADDRESS,
            input,
        )
        .await
    }

    /// Token metadata by symbol (`qn_getTokenMetadataBySymbol`).
    pub async fn get_token_metadata_by_symbol(
        &self,
        input: &GetTokenMetadataBySymbolInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_getTokenMetadataBySymbol",
            &schemas::GET_TOKEN_METADATA_BY_SYMBOL,
            input,
        )
        .await
    }

    /// Transactions involving an address (`qn_getTransactionsByAddress`).
    pub async fn get_transactions_by_address(
        &self,
        input: &GetTransactionsByAddressInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_getTransactionsByAddress",
            &schemas::GET_TRANSACTIONS_BY_ADDRESS,
            input,
        )
        .await
    }

    /// ERC-20 balances for a wallet (`qn_getWalletTokenBalance`).
    pub async fn get_wallet_token_balance(
        &self,
        input: &GetWalletTokenBalanceInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_getWalletTokenBalance",
            &schemas::GET_WALLET_TOKEN_BALANCE,
            input,
        )
        .await
    }

    /// ERC-20 transfers between a wallet and a contract
    /// (`qn_getWalletTokenTransactions`).
    pub async fn get_wallet_token_transactions(
        &self,
        input: &GetWalletTokenTransactionsInput,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "qn_getWalletTokenTransactions",
            &schemas::GET_WALLET_TOKEN_TRANSACTIONS,
            input,
        )
        .await
    }
}
