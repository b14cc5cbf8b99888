//! Error taxonomy for the SDK.
//!
//! Four of the five kinds are raised synchronously before any network
//! activity (`InvalidEndpointUrl`, `ChainNotSupported`, `AddOnNotEnabled`,
//! `Validation`), so callers can distinguish "never sent" from "sent but
//! failed". `Transport` wraps whatever the transport reported, unchanged.

use thiserror::Error;

use crate::request::JsonRpcError;
use crate::validate::ValidationError;

/// Errors that can occur during an RPC transport operation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, timeout, non-2xx status).
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON-RPC protocol-level error returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// Request or response JSON could not be converted.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

/// Top-level error type for the QuickNode SDK.
#[derive(Debug, Error)]
pub enum QuickNodeError {
    /// The endpoint URL does not follow the QuickNode hostname convention.
    #[error("endpoint URL is not in a valid QuickNode URL format, please check the URL and try again")]
    InvalidEndpointUrl,

    /// The endpoint URL parses but names a chain the SDK does not know.
    #[error("the chain for endpoint URL {0} is not currently supported by the QuickNode SDK")]
    ChainNotSupported(String),

    /// A gated method was called without enabling its add-on namespace.
    #[error("{human_name} is not set as enabled, please ensure the add-on is enabled on your QuickNode endpoint and enable {config_name} in the client configuration")]
    AddOnNotEnabled {
        human_name: &'static str,
        config_name: &'static str,
    },

    /// One or more input-shape violations; never reaches the network.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Opaque failure from the transport, propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
