//! quiknode-sdk — client SDK for QuickNode endpoints.
//!
//! # Quick start
//! ```rust,no_run
//! use quiknode_sdk::{Core, CoreArgs, QuickNodeConfig};
//! use quiknode_sdk::types::FetchNftsInput;
//!
//! # async fn run() -> Result<(), quiknode_core::QuickNodeError> {
//! let core = Core::new(CoreArgs {
//!     endpoint_url: "https://some-label.discover.quiknode.pro/token/".into(),
//!     chain: None,
//!     config: QuickNodeConfig::with_nft_token_v2(),
//! })?;
//!
//! let nfts = core
//!     .nft_token()
//!     .fetch_nfts(&FetchNftsInput {
//!         wallet: "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045".into(),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{nfts}");
//! # Ok(())
//! # }
//! ```
//!
//! The chain is derived from the endpoint hostname unless overridden;
//! inputs are validated locally (all violations collected) before any
//! network call; responses are returned verbatim.

pub mod config;
pub mod core;
pub mod nft_token;
pub mod schemas;
pub mod types;

pub use config::{AddOns, QuickNodeConfig};
pub use core::{BlockTag, Core, CoreArgs};
pub use nft_token::NftTokenApi;

pub use quiknode_core::error::{QuickNodeError, TransportError};
pub use quiknode_core::validate::ValidationError;
