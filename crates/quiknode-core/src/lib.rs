//! quiknode-core — foundation types for the QuickNode SDK.
//!
//! # Overview
//!
//! The core crate defines everything the SDK layers share:
//!
//! - [`RpcTransport`] — the async trait every transport implements
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`] — wire types
//! - [`TransportError`] / [`QuickNodeError`] — the error taxonomy
//! - [`chain`] module — supported chains and endpoint-to-chain derivation
//! - [`validate`] module — the collect-all-violations input validator

pub mod chain;
pub mod error;
pub mod request;
pub mod transport;
pub mod validate;

pub use chain::{derive_chain_from_url, Chain, NativeCurrency};
pub use error::{QuickNodeError, TransportError};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use transport::RpcTransport;
pub use validate::{Schema, ValidationError, Violation};
