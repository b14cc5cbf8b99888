//! The `RpcTransport` trait — the seam between the SDK and the network.
//!
//! Everything above this trait is synchronous bookkeeping: chain
//! resolution, add-on gating and input validation all run before `send`
//! is ever awaited. The transport itself performs exactly one HTTP
//! round-trip per call; retries, timeouts and cancellation belong to the
//! transport implementation or its caller, never to the SDK layer.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// An async JSON-RPC transport.
///
/// Object-safe by construction: the SDK stores transports as
/// `Arc<dyn RpcTransport>` so tests can substitute in-memory mocks.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send a single JSON-RPC request and return the raw response.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// The transport's identifier (endpoint URL or name).
    fn url(&self) -> &str;
}
