/// Asset lookup table and raw asset-metadata summarization
///
/// `AssetInfo` is the per-mint entry the filter evaluator resolves token
/// symbols and NFT names against. `summarize_asset` builds those entries from
/// raw asset-metadata records fetched upstream (DAS getAssetBatch shape);
/// fetching itself lives outside this crate.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ActivityResult;
use crate::logger::{self, LogTag};

/// Lookup table consumed by the filter evaluator, keyed by mint / asset id
pub type AssetCatalog = HashMap<String, AssetInfo>;

/// What the pipeline knows about one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AssetInfo {
    #[serde(rename = "fungibleToken")]
    FungibleToken {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Missing for some tokens upstream; symbol filters fail closed then
        #[serde(default, skip_serializing_if = "Option::is_none")]
        symbol: Option<String>,
        decimals: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
    #[serde(rename = "NFT")]
    Nft {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
}

// ============================================================================
// RAW ASSET METADATA (upstream shape)
// ============================================================================

/// One raw asset record from an asset-metadata batch. Field coverage is
/// intentionally partial: only what the summary needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAsset {
    /// "FungibleToken", "V1_NFT", ... Everything non-fungible maps to NFT.
    pub interface: String,
    /// Mint address for tokens, asset id for NFTs
    pub id: String,
    pub content: RawAssetContent,
    #[serde(default)]
    pub token_info: Option<RawTokenInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssetContent {
    #[serde(default)]
    pub files: Vec<RawAssetFile>,
    #[serde(default)]
    pub metadata: RawAssetMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAssetFile {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub cdn_uri: Option<String>,
    #[serde(default)]
    pub mime: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAssetMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub decimals: u32,
}

// ============================================================================
// SUMMARIZATION
// ============================================================================

/// Reduce one raw asset record to the catalog entry the filters need.
///
/// Fungible tokens take their symbol from content metadata, falling back to
/// token info. The image is the cdn URI of the first plain-image file.
pub fn summarize_asset(asset: &RawAsset) -> AssetInfo {
    let image = asset
        .content
        .files
        .iter()
        .find(|f| {
            matches!(
                f.mime.as_deref(),
                Some("image/jpeg") | Some("image/png") | Some("image/gif")
            )
        })
        .and_then(|f| f.cdn_uri.clone());

    if asset.interface == "FungibleToken" {
        let symbol = asset
            .content
            .metadata
            .symbol
            .clone()
            .or_else(|| asset.token_info.as_ref().and_then(|t| t.symbol.clone()));

        AssetInfo::FungibleToken {
            name: asset.content.metadata.name.clone(),
            symbol,
            decimals: asset.token_info.as_ref().map(|t| t.decimals).unwrap_or(0),
            image,
        }
    } else {
        AssetInfo::Nft {
            name: asset.content.metadata.name.clone().unwrap_or_default(),
            image,
        }
    }
}

/// Summarize a whole batch into the catalog, keyed by asset id
pub fn asset_catalog(batch: &[RawAsset]) -> AssetCatalog {
    let mut catalog = AssetCatalog::new();
    for asset in batch {
        catalog.insert(asset.id.clone(), summarize_asset(asset));
    }

    logger::debug(
        LogTag::Assets,
        &format!("asset catalog built with {} entries", catalog.len()),
    );

    catalog
}

/// Decode a JSON asset-metadata batch
pub fn parse_asset_batch(json: &str) -> ActivityResult<Vec<RawAsset>> {
    Ok(serde_json::from_str(json)?)
}
