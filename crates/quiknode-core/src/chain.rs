//! Supported chains and endpoint-to-chain derivation.
//!
//! QuickNode endpoints encode the target network in the hostname:
//! `<label>.<network>.quiknode.pro/<token>` in the ordinary case, or
//! `<label>.discover.<network>.quiknode.pro/<token>` for discover-hosted
//! endpoints. Ethereum mainnet endpoints omit the network segment
//! entirely, so `foo.quiknode.pro` (3 segments) and
//! `foo.discover.quiknode.pro` (4 segments) both mean mainnet. The two
//! forms use different segment counts for the same condition on purpose;
//! they are not aliases of each other.

use url::Url;

use crate::error::QuickNodeError;

/// Network segment used when the hostname omits an explicit chain.
pub const ETH_MAINNET_NETWORK: &str = "ethereum-mainnet";

const PROVIDER_MARKER: &str = "quiknode";
const DISCOVER_MARKER: &str = "discover";

/// Native currency of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

/// Static metadata for a supported chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// EIP-155 chain ID.
    pub id: u64,
    /// Human-readable chain name.
    pub name: &'static str,
    /// Canonical network key.
    pub network: &'static str,
    pub native_currency: NativeCurrency,
    pub testnet: bool,
}

pub const ARBITRUM: Chain = Chain {
    id: 42161,
    name: "Arbitrum One",
    network: "arbitrum",
    native_currency: ETHER,
    testnet: false,
};

pub const ARBITRUM_GOERLI: Chain = Chain {
    id: 421_613,
    name: "Arbitrum Goerli",
    network: "arbitrum-goerli",
    native_currency: ETHER,
    testnet: true,
};

pub const AVALANCHE: Chain = Chain {
    id: 43114,
    name: "Avalanche",
    network: "avalanche",
    native_currency: NativeCurrency {
        name: "Avalanche",
        symbol: "AVAX",
        decimals: 18,
    },
    testnet: false,
};

pub const AVALANCHE_FUJI: Chain = Chain {
    id: 43113,
    name: "Avalanche Fuji",
    network: "avalanche-fuji",
    native_currency: NativeCurrency {
        name: "Avalanche Fuji",
        symbol: "AVAX",
        decimals: 18,
    },
    testnet: true,
};

pub const BASE: Chain = Chain {
    id: 8453,
    name: "Base",
    network: "base",
    native_currency: ETHER,
    testnet: false,
};

pub const BASE_GOERLI: Chain = Chain {
    id: 84531,
    name: "Base Goerli",
    network: "base-goerli",
    native_currency: ETHER,
    testnet: true,
};

pub const BASE_SEPOLIA: Chain = Chain {
    id: 84532,
    name: "Base Sepolia",
    network: "base-sepolia",
    native_currency: ETHER,
    testnet: true,
};

pub const BSC: Chain = Chain {
    id: 56,
    name: "BNB Smart Chain",
    network: "bsc",
    native_currency: NativeCurrency {
        name: "BNB",
        symbol: "BNB",
        decimals: 18,
    },
    testnet: false,
};

pub const BSC_TESTNET: Chain = Chain {
    id: 97,
    name: "Binance Smart Chain Testnet",
    network: "bsc-testnet",
    native_currency: NativeCurrency {
        name: "BNB",
        symbol: "tBNB",
        decimals: 18,
    },
    testnet: true,
};

pub const CELO: Chain = Chain {
    id: 42220,
    name: "Celo",
    network: "celo",
    native_currency: NativeCurrency {
        name: "CELO",
        symbol: "CELO",
        decimals: 18,
    },
    testnet: false,
};

pub const FANTOM: Chain = Chain {
    id: 250,
    name: "Fantom",
    network: "fantom",
    native_currency: NativeCurrency {
        name: "Fantom",
        symbol: "FTM",
        decimals: 18,
    },
    testnet: false,
};

pub const GNOSIS: Chain = Chain {
    id: 100,
    name: "Gnosis",
    network: "gnosis",
    native_currency: NativeCurrency {
        name: "Gnosis",
        symbol: "xDAI",
        decimals: 18,
    },
    testnet: false,
};

pub const GOERLI: Chain = Chain {
    id: 5,
    name: "Goerli",
    network: "goerli",
    native_currency: NativeCurrency {
        name: "Goerli Ether",
        symbol: "ETH",
        decimals: 18,
    },
    testnet: true,
};

pub const HARMONY_ONE: Chain = Chain {
    id: 1_666_600_000,
    name: "Harmony One",
    network: "harmony",
    native_currency: NativeCurrency {
        name: "Harmony",
        symbol: "ONE",
        decimals: 18,
    },
    testnet: false,
};

pub const MAINNET: Chain = Chain {
    id: 1,
    name: "Ethereum",
    network: "homestead",
    native_currency: ETHER,
    testnet: false,
};

pub const OPTIMISM: Chain = Chain {
    id: 10,
    name: "OP Mainnet",
    network: "optimism",
    native_currency: ETHER,
    testnet: false,
};

pub const OPTIMISM_GOERLI: Chain = Chain {
    id: 420,
    name: "Optimism Goerli",
    network: "optimism-goerli",
    native_currency: NativeCurrency {
        name: "Goerli Ether",
        symbol: "ETH",
        decimals: 18,
    },
    testnet: true,
};

pub const POLYGON: Chain = Chain {
    id: 137,
    name: "Polygon",
    network: "matic",
    native_currency: NativeCurrency {
        name: "MATIC",
        symbol: "MATIC",
        decimals: 18,
    },
    testnet: false,
};

pub const POLYGON_MUMBAI: Chain = Chain {
    id: 80001,
    name: "Polygon Mumbai",
    network: "maticmum",
    native_currency: NativeCurrency {
        name: "MATIC",
        symbol: "MATIC",
        decimals: 18,
    },
    testnet: true,
};

pub const POLYGON_ZKEVM: Chain = Chain {
    id: 1101,
    name: "Polygon zkEVM",
    network: "polygon-zkevm",
    native_currency: ETHER,
    testnet: false,
};

pub const POLYGON_ZKEVM_TESTNET: Chain = Chain {
    id: 1442,
    name: "Polygon zkEVM Testnet",
    network: "polygon-zkevm-testnet",
    native_currency: ETHER,
    testnet: true,
};

pub const SEPOLIA: Chain = Chain {
    id: 11_155_111,
    name: "Sepolia",
    network: "sepolia",
    native_currency: NativeCurrency {
        name: "Sepolia Ether",
        symbol: "SEP",
        decimals: 18,
    },
    testnet: true,
};

pub const HOLESKY: Chain = Chain {
    id: 17000,
    name: "Holesky",
    network: "holesky",
    native_currency: ETHER,
    testnet: true,
};

/// Every network segment the resolver accepts, in table order.
///
/// Both canonical and colloquial names are listed; `matic` and `polygon`
/// map to the same chain, as do `xdai` and `gnosis`.
pub const SUPPORTED_NETWORKS: &[&str] = &[
    "arbitrum-mainnet",
    "arbitrum-goerli",
    "avalanche-mainnet",
    "avalanche-testnet",
    "base-goerli",
    "base-sepolia",
    "base-mainnet",
    "bsc",
    "bsc-testnet",
    "celo-mainnet",
    "fantom",
    "xdai",
    "gnosis",
    "ethereum-goerli",
    "harmony-mainnet",
    "ethereum-mainnet",
    "optimism",
    "optimism-goerli",
    "matic",
    "polygon",
    "matic-testnet",
    "zkevm-mainnet",
    "zkevm-testnet",
    "ethereum-sepolia",
    "ethereum-holesky",
];

/// Look up chain metadata by QuickNode network segment.
pub fn lookup(network: &str) -> Option<&'static Chain> {
    match network {
        "arbitrum-mainnet" => Some(&ARBITRUM),
        "arbitrum-goerli" => Some(&ARBITRUM_GOERLI),
        "avalanche-mainnet" => Some(&AVALANCHE),
        "avalanche-testnet" => Some(&AVALANCHE_FUJI),
        "base-goerli" => Some(&BASE_GOERLI),
        "base-sepolia" => Some(&BASE_SEPOLIA),
        "base-mainnet" => Some(&BASE),
        "bsc" => Some(&BSC),
        "bsc-testnet" => Some(&BSC_TESTNET),
        "celo-mainnet" => Some(&CELO),
        "fantom" => Some(&FANTOM),
        "xdai" | "gnosis" => Some(&GNOSIS),
        "ethereum-goerli" => Some(&GOERLI),
        "harmony-mainnet" => Some(&HARMONY_ONE),
        "ethereum-mainnet" => Some(&MAINNET),
        "optimism" => Some(&OPTIMISM),
        "optimism-goerli" => Some(&OPTIMISM_GOERLI),
        "matic" | "polygon" => Some(&POLYGON),
        "matic-testnet" => Some(&POLYGON_MUMBAI),
        "zkevm-mainnet" => Some(&POLYGON_ZKEVM),
        "zkevm-testnet" => Some(&POLYGON_ZKEVM_TESTNET),
        "ethereum-sepolia" => Some(&SEPOLIA),
        "ethereum-holesky" => Some(&HOLESKY),
        _ => None,
    }
}

/// Extract the network segment from a QuickNode endpoint URL.
///
/// Fails with [`QuickNodeError::InvalidEndpointUrl`] when the URL does not
/// parse, the second-to-last hostname segment is not `quiknode`, or the
/// name-bearing segment is absent or empty.
pub fn chain_name_from_endpoint(endpoint_url: &str) -> Result<String, QuickNodeError> {
    let parsed = Url::parse(endpoint_url).map_err(|_| QuickNodeError::InvalidEndpointUrl)?;
    let host = parsed
        .host_str()
        .ok_or(QuickNodeError::InvalidEndpointUrl)?;
    let segments: Vec<&str> = host.split('.').collect();

    let marker = nth_from_end(&segments, 2);
    let chain_or_discover = nth_from_end(&segments, 3);
    let (Some(marker), Some(chain_or_discover)) = (marker, chain_or_discover) else {
        return Err(QuickNodeError::InvalidEndpointUrl);
    };
    if marker != PROVIDER_MARKER || chain_or_discover.is_empty() {
        return Err(QuickNodeError::InvalidEndpointUrl);
    }

    // Discover-hosted endpoints insert a `discover` segment, shifting the
    // network name one position left and the "no explicit network means
    // mainnet" hostname length from 3 to 4.
    let discover = chain_or_discover == DISCOVER_MARKER;
    let name_position = if discover { 4 } else { 3 };
    let mainnet_len = if discover { 4 } else { 3 };

    if segments.len() == mainnet_len {
        return Ok(ETH_MAINNET_NETWORK.to_string());
    }
    match nth_from_end(&segments, name_position) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(QuickNodeError::InvalidEndpointUrl),
    }
}

/// Derive the chain for an endpoint URL.
///
/// Fails with [`QuickNodeError::ChainNotSupported`] when the hostname
/// parses but names a network absent from the static table.
pub fn derive_chain_from_url(endpoint_url: &str) -> Result<&'static Chain, QuickNodeError> {
    let chain_name = chain_name_from_endpoint(endpoint_url)?;
    match lookup(&chain_name) {
        Some(chain) => {
            tracing::debug!(network = %chain_name, chain_id = chain.id, "derived chain from endpoint");
            Ok(chain)
        }
        None => Err(QuickNodeError::ChainNotSupported(endpoint_url.to_string())),
    }
}

fn nth_from_end<'a>(segments: &[&'a str], n: usize) -> Option<&'a str> {
    segments.len().checked_sub(n).map(|i| segments[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_network_resolves() {
        for network in SUPPORTED_NETWORKS {
            let url = format!("https://foo.{network}.quiknode.pro/abcd1234/");
            let chain = derive_chain_from_url(&url)
                .unwrap_or_else(|_| panic!("{network} should resolve"));
            assert_eq!(chain, lookup(network).unwrap());
        }
    }

    #[test]
    fn aliases_share_metadata() {
        assert_eq!(lookup("matic"), lookup("polygon"));
        assert_eq!(lookup("xdai"), lookup("gnosis"));
    }

    #[test]
    fn three_segment_hostname_is_mainnet() {
        let chain = derive_chain_from_url("https://foo.quiknode.pro").unwrap();
        assert_eq!(chain.id, 1);
    }

    #[test]
    fn discover_four_segment_hostname_is_mainnet() {
        let chain = derive_chain_from_url("https://foo.discover.quiknode.pro").unwrap();
        assert_eq!(chain.id, 1);
    }

    #[test]
    fn discover_with_explicit_network() {
        let chain = derive_chain_from_url("https://foo.discover.polygon.quiknode.pro").unwrap();
        assert_eq!(chain.id, 137);
    }

    #[test]
    fn three_segment_discover_is_invalid() {
        // `discover` sits where the network name would be, but the discover
        // form needs at least 4 segments.
        let err = derive_chain_from_url("https://discover.quiknode.pro").unwrap_err();
        assert!(matches!(err, QuickNodeError::InvalidEndpointUrl));
    }

    #[test]
    fn unparseable_url_is_invalid() {
        let err = derive_chain_from_url("not a url").unwrap_err();
        assert!(matches!(err, QuickNodeError::InvalidEndpointUrl));
    }

    #[test]
    fn wrong_provider_marker_is_invalid() {
        let err = derive_chain_from_url("https://foo.polygon.othernode.pro").unwrap_err();
        assert!(matches!(err, QuickNodeError::InvalidEndpointUrl));
    }

    #[test]
    fn too_few_segments_is_invalid() {
        let err = derive_chain_from_url("https://quiknode.pro").unwrap_err();
        assert!(matches!(err, QuickNodeError::InvalidEndpointUrl));
    }

    #[test]
    fn unknown_network_is_unsupported() {
        let url = "https://foo.unknownchain.quiknode.pro";
        let err = derive_chain_from_url(url).unwrap_err();
        match err {
            QuickNodeError::ChainNotSupported(reported) => assert_eq!(reported, url),
            other => panic!("expected ChainNotSupported, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_token_path_is_ignored() {
        let chain =
            derive_chain_from_url("https://billowing-cool-hexagon.bsc.quiknode.pro/token123/")
                .unwrap();
        assert_eq!(chain.id, 56);
    }
}
