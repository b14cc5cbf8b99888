//! Input schemas for the NFT And Token RPC API V2.
//!
//! One static [`Schema`] per `qn_*` method. All schemas are strict:
//! unrecognized keys are rejected. Field names here are the wire names
//! (camelCase), matching what the endpoint expects inside `params[0]`.

use quiknode_core::validate::{Field, FieldKind, Schema, Violation};
use serde_json::{Map, Value};

const fn required(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        nullish: false,
    }
}

const fn nullish(name: &'static str, kind: FieldKind) -> Field {
    Field {
        name,
        kind,
        nullish: true,
    }
}

pub static FETCH_NFTS: Schema = Schema {
    fields: &[
        required("wallet", FieldKind::EvmAddress),
        nullish("contracts", FieldKind::EvmAddressArray),
        nullish("omitFields", FieldKind::StringArray),
    ],
    with_pagination: true,
    refinements: &[],
};

pub static FETCH_NFT_COLLECTION_DETAILS: Schema = Schema {
    fields: &[required("contracts", FieldKind::EvmAddressArray)],
    with_pagination: false,
    refinements: &[],
};

pub static FETCH_NFTS_BY_COLLECTION: Schema = Schema {
    fields: &[
        required("collection", FieldKind::EvmAddress),
        nullish("tokens", FieldKind::StringArray),
        nullish("omitFields", FieldKind::StringArray),
    ],
    with_pagination: true,
    refinements: &[],
};

pub static GET_TRANSFERS_BY_NFT: Schema = Schema {
    fields: &[
        required("collection", FieldKind::EvmAddress),
        required("collectionTokenId", FieldKind::Str),
    ],
    with_pagination: true,
    refinements: &[],
};

// TODO: tighten `contracts` to enforce the `address:tokenId` format.
pub static VERIFY_NFTS_OWNER: Schema = Schema {
    fields: &[
        required("wallet", FieldKind::EvmAddress),
        required("contracts", FieldKind::StringArray),
    ],
    with_pagination: false,
    refinements: &[],
};

pub static GET_TOKEN_METADATA_BY_CONTRACT_ADDRESS: Schema = Schema {
    fields: &[required("contract", FieldKind::EvmAddress)],
    with_pagination: false,
    refinements: &[],
};

pub static GET_TOKEN_METADATA_BY_SYMBOL: Schema = Schema {
    fields: &[required("symbol", FieldKind::Str)],
    with_pagination: true,
    refinements: &[],
};

pub static GET_TRANSACTIONS_BY_ADDRESS: Schema = Schema {
    fields: &[
        required("address", FieldKind::EvmAddress),
        nullish("fromBlock", FieldKind::PositiveNumber),
        nullish("toBlock", FieldKind::PositiveNumber),
    ],
    with_pagination: true,
    refinements: &[from_block_before_to_block],
};

pub static GET_WALLET_TOKEN_BALANCE: Schema = Schema {
    fields: &[
        required("wallet", FieldKind::EvmAddress),
        nullish("contracts", FieldKind::EvmAddressArray),
    ],
    with_pagination: true,
    refinements: &[],
};

pub static GET_WALLET_TOKEN_TRANSACTIONS: Schema = Schema {
    fields: &[
        required("address", FieldKind::EvmAddress),
        required("contract", FieldKind::EvmAddress),
        nullish("fromBlock", FieldKind::PositiveNumber),
        nullish("toBlock", FieldKind::PositiveNumber),
    ],
    with_pagination: true,
    refinements: &[],
};

/// When both range bounds are given, the lower must be strictly smaller.
fn from_block_before_to_block(obj: &Map<String, Value>) -> Option<Violation> {
    let from = obj.get("fromBlock").and_then(Value::as_f64)?;
    let to = obj.get("toBlock").and_then(Value::as_f64)?;
    (from >= to).then(|| Violation::root("fromBlock must be less than toBlock"))
}

/// Schema registry keyed by RPC method name.
pub fn schema_for(method: &str) -> Option<&'static Schema> {
    match method {
        "qn_fetchNFTs" => Some(&FETCH_NFTS),
        "qn_fetchNFTCollectionDetails" => Some(&FETCH_NFT_COLLECTION_DETAILS),
        "qn_fetchNFTsByCollection" => Some(&FETCH_NFTS_BY_COLLECTION),
        "qn_getTransfersByNFT" => Some(&GET_TRANSFERS_BY_NFT),
        "qn_verifyNFTsOwner" => Some(&VERIFY_NFTS_OWNER),
        "qn_getTokenMetadataByContractAddress" => Some(&GET_TOKEN_METADATA_BY_CONTRACT_ADDRESS),
        "qn_getTokenMetadataBySymbol" => Some(&GET_TOKEN_METADATA_BY_SYMBOL),
        "qn_getTransactionsByAddress" => Some(&GET_TRANSACTIONS_BY_ADDRESS),
        "qn_getWalletTokenBalance" => Some(&GET_WALLET_TOKEN_BALANCE),
        "qn_getWalletTokenTransactions" => Some(&GET_WALLET_TOKEN_TRANSACTIONS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address() -> String {
        format!("0x{}", "12".repeat(20))
    }

    #[test]
    fn inverted_block_range_is_rejected_with_exact_message() {
        let input = json!({"address": address(), "fromBlock": 100, "toBlock": 50});
        let err = GET_TRANSACTIONS_BY_ADDRESS.validate(&input).unwrap_err();
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].path, "");
        assert_eq!(
            err.violations()[0].message,
            "fromBlock must be less than toBlock"
        );
    }

    #[test]
    fn ordered_block_range_passes() {
        let input = json!({"address": address(), "fromBlock": 50, "toBlock": 100});
        assert!(GET_TRANSACTIONS_BY_ADDRESS.validate(&input).is_ok());
    }

    #[test]
    fn half_open_block_range_passes() {
        let input = json!({"address": address(), "fromBlock": 50});
        assert!(GET_TRANSACTIONS_BY_ADDRESS.validate(&input).is_ok());
    }

    #[test]
    fn equal_block_bounds_are_rejected() {
        let input = json!({"address": address(), "fromBlock": 50, "toBlock": 50});
        assert!(GET_TRANSACTIONS_BY_ADDRESS.validate(&input).is_err());
    }

    #[test]
    fn wallet_token_transactions_has_no_range_refinement() {
        // Mirrors the upstream API: only qn_getTransactionsByAddress
        // enforces the block-range ordering.
        let input = json!({
            "address": address(),
            "contract": address(),
            "fromBlock": 100,
            "toBlock": 50,
        });
        assert!(GET_WALLET_TOKEN_TRANSACTIONS.validate(&input).is_ok());
    }

    #[test]
    fn pagination_is_declared_where_merged() {
        let input = json!({"symbol": "USDC", "perPage": 10, "page": 1});
        assert!(GET_TOKEN_METADATA_BY_SYMBOL.validate(&input).is_ok());

        // Methods without pagination treat the keys as unrecognized.
        let input = json!({"contract": address(), "perPage": 10});
        assert!(GET_TOKEN_METADATA_BY_CONTRACT_ADDRESS
            .validate(&input)
            .is_err());
    }

    #[test]
    fn registry_knows_all_ten_methods() {
        let methods = [
            "qn_fetchNFTs",
            "qn_fetchNFTCollectionDetails",
            "qn_fetchNFTsByCollection",
            "qn_getTransfersByNFT",
            "qn_verifyNFTsOwner",
            "qn_getTokenMetadataByContractAddress",
            "qn_getTokenMetadataBySymbol",
            "qn_getTransactionsByAddress",
            "qn_getWalletTokenBalance",
            "qn_getWalletTokenTransactions",
        ];
        for method in methods {
            assert!(schema_for(method).is_some(), "{method} missing from registry");
        }
        assert!(schema_for("eth_blockNumber").is_none());
    }
}
