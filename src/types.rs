/// Raw enhanced-transaction wire model
///
/// Mirrors the parsed transaction shape returned by the upstream history API,
/// one entry per transaction. Only the fields the summarizer consumes are
/// modeled; everything arrives pre-parsed (transfers split out, instruction
/// tree flattened to one level of inner instructions, balance changes per
/// account). The crate only ever reads these records.

use serde::{Deserialize, Serialize};

use crate::error::ActivityResult;

/// One parsed transaction from a history page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedTransaction {
    #[serde(default)]
    pub description: String,

    /// Originating program/marketplace as reported upstream (e.g. "JUPITER").
    /// Free-form: sources outside the known-app table are kept as-is.
    #[serde(default)]
    pub source: String,

    /// Transaction fee in lamports, charged to `fee_payer`
    pub fee: u64,

    pub fee_payer: String,

    pub signature: String,

    /// Unix timestamp in seconds
    pub timestamp: i64,

    /// Error blob for failed transactions, absent on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_error: Option<serde_json::Value>,

    #[serde(default)]
    pub native_transfers: Vec<NativeTransfer>,

    #[serde(default)]
    pub token_transfers: Vec<TokenTransfer>,

    #[serde(default)]
    pub account_data: Vec<AccountData>,

    #[serde(default)]
    pub instructions: Vec<Instruction>,

    #[serde(default)]
    pub events: TransactionEvents,
}

impl EnhancedTransaction {
    /// Whether the transaction executed without an on-chain error
    pub fn succeeded(&self) -> bool {
        self.transaction_error.is_none()
    }
}

/// Plain SOL movement between two accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
    #[serde(default)]
    pub from_user_account: String,
    #[serde(default)]
    pub to_user_account: String,
    /// Lamports moved
    pub amount: u64,
}

/// SPL token movement, including NFTs (distinguished by `token_standard`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(default)]
    pub from_user_account: String,
    #[serde(default)]
    pub to_user_account: String,
    #[serde(default)]
    pub from_token_account: String,
    #[serde(default)]
    pub to_token_account: String,
    /// Decimal-adjusted amount as reported upstream; the summarizer works from
    /// `account_data` raw amounts instead, so this is informational only
    #[serde(default)]
    pub token_amount: f64,
    pub mint: String,
    #[serde(default)]
    pub token_standard: TokenStandard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum TokenStandard {
    Fungible,
    NonFungible,
    ProgrammableNonFungible,
    /// Anything else upstream reports (FungibleAsset, UnknownStandard, ...)
    #[default]
    Unknown,
}

impl From<String> for TokenStandard {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Fungible" => TokenStandard::Fungible,
            "NonFungible" => TokenStandard::NonFungible,
            "ProgrammableNonFungible" => TokenStandard::ProgrammableNonFungible,
            _ => TokenStandard::Unknown,
        }
    }
}

/// Per-account balance effects of one transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountData {
    pub account: String,
    /// Signed lamport delta for this account. For the fee payer this already
    /// includes the fee.
    #[serde(default)]
    pub native_balance_change: i64,
    #[serde(default)]
    pub token_balance_changes: Vec<TokenBalanceChange>,
}

/// Signed raw-unit token delta for one token account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBalanceChange {
    /// Owner wallet of the token account
    pub user_account: String,
    pub token_account: String,
    pub raw_token_amount: RawTokenAmount,
    pub mint: String,
}

/// Raw token amount in smallest units, stringified upstream to survive
/// 64-bit-unsafe JSON consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTokenAmount {
    pub token_amount: String,
    pub decimals: u32,
}

/// Top-level instruction with one level of inner (CPI) instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(default)]
    pub accounts: Vec<String>,
    /// Base58-encoded instruction payload
    #[serde(default)]
    pub data: String,
    pub program_id: String,
    #[serde(default)]
    pub inner_instructions: Vec<InnerInstruction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerInstruction {
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub data: String,
    pub program_id: String,
}

/// Enriched event section of a parsed transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionEvents {
    #[serde(default)]
    pub compressed: Vec<CompressedNftEvent>,
}

/// Compressed-NFT leaf ownership change. Owners can be absent (mint has no
/// old owner, burn has no new owner).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedNftEvent {
    pub asset_id: String,
    #[serde(default)]
    pub old_leaf_owner: Option<String>,
    #[serde(default)]
    pub new_leaf_owner: Option<String>,
}

/// Decode one JSON history page into transaction records
pub fn parse_transaction_page(json: &str) -> ActivityResult<Vec<EnhancedTransaction>> {
    Ok(serde_json::from_str(json)?)
}
