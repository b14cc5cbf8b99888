//! Per-client configuration.

/// Add-on namespaces enabled on the endpoint.
///
/// Add-ons are provisioned per endpoint on the QuickNode side; the flags
/// here only switch on the client-side precondition checks. They are
/// fixed for the lifetime of a constructed client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOns {
    /// The NFT And Token RPC API V2 (`qn_*` methods).
    pub nft_token_v2: bool,
}

/// Client construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuickNodeConfig {
    pub add_ons: AddOns,
}

impl QuickNodeConfig {
    /// Config with the NFT/token namespace enabled.
    pub fn with_nft_token_v2() -> Self {
        Self {
            add_ons: AddOns { nft_token_v2: true },
        }
    }
}
