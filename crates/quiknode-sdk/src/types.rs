//! Typed inputs for the NFT And Token RPC API V2.
//!
//! These serialize to the camelCase wire shape the endpoint expects;
//! optional fields are omitted entirely when `None`. Serialization runs
//! before validation, so a hand-built struct with a malformed address
//! still fails the schema check rather than reaching the network.

use serde::Serialize;

/// Shared pagination options (`perPage`, `page`).
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Input for `qn_fetchNFTs`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNftsInput {
    pub wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_fields: Option<Vec<String>>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_fetchNFTCollectionDetails`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNftCollectionDetailsInput {
    pub contracts: Vec<String>,
}

/// Input for `qn_fetchNFTsByCollection`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNftsByCollectionInput {
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub omit_fields: Option<Vec<String>>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_getTransfersByNFT`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransfersByNftInput {
    pub collection: String,
    pub collection_token_id: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_verifyNFTsOwner`.
///
/// `contracts` entries use the `address:tokenId` form.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyNftsOwnerInput {
    pub wallet: String,
    pub contracts: Vec<String>,
}

/// Input for `qn_getTokenMetadataByContractAddress`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenMetadataByContractAddressInput {
    pub contract: String,
}

/// Input for `qn_getTokenMetadataBySymbol`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenMetadataBySymbolInput {
    pub symbol: String,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_getTransactionsByAddress`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionsByAddressInput {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<u64>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_getWalletTokenBalance`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWalletTokenBalanceInput {
    pub wallet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contracts: Option<Vec<String>>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Input for `qn_getWalletTokenTransactions`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWalletTokenTransactionsInput {
    pub address: String,
    pub contract: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_block: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_block: Option<u64>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn none_fields_are_omitted() {
        let input = FetchNftsInput {
            wallet: "0xabc".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"wallet": "0xabc"}));
    }

    #[test]
    fn pagination_flattens_to_camel_case() {
        let input = GetTokenMetadataBySymbolInput {
            symbol: "USDC".into(),
            pagination: Pagination {
                per_page: Some(20),
                page: Some(2),
            },
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"symbol": "USDC", "perPage": 20, "page": 2}));
    }

    #[test]
    fn block_range_uses_camel_case_keys() {
        let input = GetTransactionsByAddressInput {
            address: "0xabc".into(),
            from_block: Some(1),
            to_block: Some(2),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["fromBlock"], 1);
        assert_eq!(value["toBlock"], 2);
    }
}
