//! The `Core` client facade.
//!
//! `Core` binds one endpoint URL to one chain (derived from the hostname
//! unless given explicitly), owns the transport, and exposes both the
//! standard Ethereum read methods and the gated NFT/token namespace as a
//! single surface. Nothing on a constructed `Core` is mutated afterwards;
//! independent instances share no state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use quiknode_core::chain::{derive_chain_from_url, Chain};
use quiknode_core::error::{QuickNodeError, TransportError};
use quiknode_core::request::JsonRpcRequest;
use quiknode_core::transport::RpcTransport;
use quiknode_http::HttpRpcClient;

use crate::config::QuickNodeConfig;
use crate::nft_token::NftTokenApi;

/// Block selector for the standard read methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    Latest,
    Earliest,
    Pending,
    Number(u64),
}

impl std::fmt::Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Earliest => write!(f, "earliest"),
            Self::Pending => write!(f, "pending"),
            Self::Number(n) => write!(f, "0x{n:x}"),
        }
    }
}

impl From<u64> for BlockTag {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// Construction options for [`Core`].
#[derive(Debug, Clone, Default)]
pub struct CoreArgs {
    pub endpoint_url: String,
    /// Explicit chain override; skips endpoint-based derivation.
    pub chain: Option<&'static Chain>,
    pub config: QuickNodeConfig,
}

/// A QuickNode client bound to one endpoint.
pub struct Core {
    endpoint_url: String,
    chain: &'static Chain,
    transport: Arc<dyn RpcTransport>,
    nft_token: NftTokenApi,
    request_id: AtomicU64,
}

impl Core {
    /// Build a client with the default HTTP transport.
    pub fn new(args: CoreArgs) -> Result<Self, QuickNodeError> {
        let transport = Arc::new(HttpRpcClient::default_for(args.endpoint_url.clone()));
        Self::with_transport(args, transport)
    }

    /// Build a client over a caller-supplied transport.
    pub fn with_transport(
        args: CoreArgs,
        transport: Arc<dyn RpcTransport>,
    ) -> Result<Self, QuickNodeError> {
        let chain = match args.chain {
            Some(chain) => chain,
            None => derive_chain_from_url(&args.endpoint_url)?,
        };
        let nft_token = NftTokenApi::new(Arc::clone(&transport), &args.config);
        Ok(Self {
            endpoint_url: args.endpoint_url,
            chain,
            transport,
            nft_token,
            request_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// The chain this client is bound to.
    pub fn chain(&self) -> &'static Chain {
        self.chain
    }

    /// The NFT And Token RPC API V2 namespace.
    pub fn nft_token(&self) -> &NftTokenApi {
        &self.nft_token
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<T, QuickNodeError> {
        let req = JsonRpcRequest::new(self.next_id(), method, params);
        let resp = self
            .transport
            .send(req)
            .await
            .map_err(QuickNodeError::Transport)?;
        let value = resp
            .into_result()
            .map_err(|e| QuickNodeError::Transport(TransportError::Rpc(e)))?;
        serde_json::from_value(value).map_err(|e| QuickNodeError::Transport(TransportError::Json(e)))
    }

    // ── Standard Ethereum reads ──────────────────────────────────

    /// Latest block number (`eth_blockNumber`).
    pub async fn block_number(&self) -> Result<u64, QuickNodeError> {
        let hex: String = self.call("eth_blockNumber", vec![]).await?;
        parse_quantity(&hex)
    }

    /// The chain ID the node reports (`eth_chainId`).
    pub async fn chain_id(&self) -> Result<u64, QuickNodeError> {
        let hex: String = self.call("eth_chainId", vec![]).await?;
        parse_quantity(&hex)
    }

    /// Current gas price in wei (`eth_gasPrice`).
    pub async fn gas_price(&self) -> Result<u128, QuickNodeError> {
        let hex: String = self.call("eth_gasPrice", vec![]).await?;
        parse_wide_quantity(&hex)
    }

    /// Account balance in wei (`eth_getBalance`).
    pub async fn get_balance(
        &self,
        address: &str,
        block: BlockTag,
    ) -> Result<u128, QuickNodeError> {
        let hex: String = self
            .call("eth_getBalance", vec![json!(address), json!(block.to_string())])
            .await?;
        parse_wide_quantity(&hex)
    }

    /// Account nonce (`eth_getTransactionCount`).
    pub async fn get_transaction_count(
        &self,
        address: &str,
        block: BlockTag,
    ) -> Result<u64, QuickNodeError> {
        let hex: String = self
            .call(
                "eth_getTransactionCount",
                vec![json!(address), json!(block.to_string())],
            )
            .await?;
        parse_quantity(&hex)
    }

    /// Block by number (`eth_getBlockByNumber`), raw response.
    pub async fn get_block_by_number(
        &self,
        block: BlockTag,
        full_transactions: bool,
    ) -> Result<Value, QuickNodeError> {
        self.call(
            "eth_getBlockByNumber",
            vec![json!(block.to_string()), json!(full_transactions)],
        )
        .await
    }

    /// Transaction by hash (`eth_getTransactionByHash`), raw response.
    pub async fn get_transaction_by_hash(&self, hash: &str) -> Result<Value, QuickNodeError> {
        self.call("eth_getTransactionByHash", vec![json!(hash)]).await
    }

    /// Transaction receipt (`eth_getTransactionReceipt`), raw response.
    pub async fn get_transaction_receipt(&self, hash: &str) -> Result<Value, QuickNodeError> {
        self.call("eth_getTransactionReceipt", vec![json!(hash)]).await
    }

    /// Logs matching a filter object (`eth_getLogs`), raw response.
    pub async fn get_logs(&self, filter: Value) -> Result<Value, QuickNodeError> {
        self.call("eth_getLogs", vec![filter]).await
    }
}

fn parse_quantity(hex: &str) -> Result<u64, QuickNodeError> {
    u64::from_str_radix(hex.trim_start_matches("0x"), 16)
        .map_err(|_| bad_quantity(hex))
}

fn parse_wide_quantity(hex: &str) -> Result<u128, QuickNodeError> {
    u128::from_str_radix(hex.trim_start_matches("0x"), 16)
        .map_err(|_| bad_quantity(hex))
}

fn bad_quantity(hex: &str) -> QuickNodeError {
    QuickNodeError::Transport(TransportError::Other(format!(
        "invalid hex quantity in response: {hex:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiknode_core::chain;
    use quiknode_core::request::JsonRpcResponse;

    struct CannedTransport {
        result: Value,
    }

    #[async_trait]
    impl RpcTransport for CannedTransport {
        async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
            Ok(JsonRpcResponse {
                jsonrpc: "2.0".into(),
                id: req.id,
                result: Some(self.result.clone()),
                error: None,
            })
        }
        fn url(&self) -> &str {
            "mock"
        }
    }

    fn core_with(result: Value) -> Core {
        Core::with_transport(
            CoreArgs {
                endpoint_url: "https://foo.bsc.quiknode.pro/token/".into(),
                ..Default::default()
            },
            Arc::new(CannedTransport { result }),
        )
        .unwrap()
    }

    #[test]
    fn chain_is_derived_from_endpoint() {
        let core = core_with(Value::Null);
        assert_eq!(core.chain().id, 56);
        assert_eq!(core.endpoint_url(), "https://foo.bsc.quiknode.pro/token/");
    }

    #[test]
    fn explicit_chain_skips_derivation() {
        // The endpoint would not resolve, but the override wins.
        let core = Core::with_transport(
            CoreArgs {
                endpoint_url: "https://custom.rpc.example.com".into(),
                chain: Some(&chain::POLYGON),
                ..Default::default()
            },
            Arc::new(CannedTransport { result: Value::Null }),
        )
        .unwrap();
        assert_eq!(core.chain().id, 137);
    }

    #[test]
    fn invalid_endpoint_without_override_fails_construction() {
        // Matched on the Result: Core itself carries no Debug impl.
        let result = Core::with_transport(
            CoreArgs {
                endpoint_url: "not a url".into(),
                ..Default::default()
            },
            Arc::new(CannedTransport { result: Value::Null }),
        );
        assert!(matches!(result, Err(QuickNodeError::InvalidEndpointUrl)));
    }

    #[tokio::test]
    async fn block_number_parses_hex_quantity() {
        let core = core_with(json!("0x112a880"));
        assert_eq!(core.block_number().await.unwrap(), 18_000_000);
    }

    #[tokio::test]
    async fn malformed_quantity_is_a_transport_error() {
        let core = core_with(json!("0xnothex"));
        let err = core.block_number().await.unwrap_err();
        assert!(matches!(
            err,
            QuickNodeError::Transport(TransportError::Other(_))
        ));
    }

    #[test]
    fn block_tags_render_to_wire_form() {
        assert_eq!(BlockTag::Latest.to_string(), "latest");
        assert_eq!(BlockTag::Pending.to_string(), "pending");
        assert_eq!(BlockTag::from(255).to_string(), "0xff");
    }
}
