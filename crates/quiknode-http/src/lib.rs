//! quiknode-http — HTTP JSON-RPC transport for the QuickNode SDK.

pub mod client;

pub use client::{HttpClientConfig, HttpRpcClient};
