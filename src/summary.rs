/// Transaction Summarization
///
/// Reduces one enhanced transaction into a short list of events relative to a
/// single observed address: "received 3 SOL from X", "sent an NFT to Y".
/// The raw record carries several overlapping views of the same movement
/// (native transfers, account-level balance deltas, per-token balance changes,
/// compressed NFT ownership changes) and this module reconciles them:
/// - SOL movement comes from the observed account's net delta, fee-adjusted,
///   with rent deposits for accounts created in the transaction stripped out
/// - fungible token movement is netted per mint across all balance changes
/// - NFT movement comes from transfer records and compressed leaf events
///
/// Summarization is a pure function. It never fails for well-formed input and
/// classifies every transaction as successful; failed transactions are
/// expected to be routed elsewhere by the caller before summarization.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::logger::{self, LogTag};
use crate::rent::detect_rent_costs;
use crate::types::{EnhancedTransaction, TokenStandard};

// ============================================================================
// KNOWN APPS
// ============================================================================

/// Source labels we surface to the user. Anything else shows no app.
static KNOWN_APPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("EXCHANGE_ART", "Exchange Art"),
        ("SOLANART", "Solanart"),
        ("MAGIC_EDEN", "Magic Eden"),
        ("HYPERSPACE", "Hyperspace"),
        ("TENSOR", "Tensor"),
        ("JUPITER", "Jupiter"),
        ("METAPLEX", "Metaplex"),
        ("RAYDIUM", "Raydium"),
    ])
});

/// Human label for a transaction source, if it is one we recognize
pub fn known_app_label(source: &str) -> Option<&'static str> {
    KNOWN_APPS.get(source).copied()
}

// ============================================================================
// EVENT MODEL
// ============================================================================

/// Event tag on its own, so filters can match a kind without a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    ReceivedSol,
    SentSol,
    ReceivedToken,
    SentToken,
    ReceivedNft,
    SentNft,
}

/// One thing that happened to the observed address in a transaction.
///
/// Amounts are integers in the smallest unit (lamports for SOL, raw units for
/// tokens) so no precision is lost. Sent/received is always relative to the
/// observed address the summary was built for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionEvent {
    ReceivedSol {
        lamports: u64,
        from: Vec<String>,
    },
    SentSol {
        lamports: u64,
        to: Vec<String>,
    },
    ReceivedToken {
        mint: String,
        #[serde(rename = "unitAmount")]
        unit_amount: u64,
        decimals: u32,
        from: Vec<String>,
    },
    SentToken {
        mint: String,
        #[serde(rename = "unitAmount")]
        unit_amount: u64,
        decimals: u32,
        to: Vec<String>,
    },
    ReceivedNft {
        #[serde(rename = "assetId")]
        asset_id: String,
        /// Absent when the sender is unknown, e.g. compressed receives where
        /// the observed address paid the fee itself
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
    },
    SentNft {
        #[serde(rename = "assetId")]
        asset_id: String,
        to: String,
    },
}

impl TransactionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TransactionEvent::ReceivedSol { .. } => EventKind::ReceivedSol,
            TransactionEvent::SentSol { .. } => EventKind::SentSol,
            TransactionEvent::ReceivedToken { .. } => EventKind::ReceivedToken,
            TransactionEvent::SentToken { .. } => EventKind::SentToken,
            TransactionEvent::ReceivedNft { .. } => EventKind::ReceivedNft,
            TransactionEvent::SentNft { .. } => EventKind::SentNft,
        }
    }
}

/// Everything the presentation and filtering layers need from one transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub success: bool,
    pub fee_payer: String,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_app: Option<String>,
    pub timestamp: i64,
    pub events: Vec<TransactionEvent>,
}

/// Running per-mint totals while scanning one transaction
struct FungibleFlow {
    unit_amount: i128,
    decimals: u32,
    from_addresses: Vec<String>,
    to_addresses: Vec<String>,
}

// ============================================================================
// SUMMARIZATION
// ============================================================================

/// Summarize one transaction relative to `observed_address`
pub fn summarize(
    transaction: &EnhancedTransaction,
    observed_address: &str,
) -> TransactionSummary {
    let mut events: Vec<TransactionEvent> = Vec::new();

    // The fee is a cost only to the payer, so add it back before deciding
    // whether real value moved
    let fee_for_address = if transaction.fee_payer == observed_address {
        transaction.fee as i64
    } else {
        0
    };

    let native_balance_change = transaction
        .account_data
        .iter()
        .find(|account| account.account == observed_address)
        .map(|account| account.native_balance_change + fee_for_address)
        .unwrap_or(0);

    if native_balance_change > 0 {
        // Received SOL
        let mut from_addresses: Vec<String> = transaction
            .native_transfers
            .iter()
            .filter(|transfer| transfer.to_user_account == observed_address)
            .map(|transfer| transfer.from_user_account.clone())
            .collect();

        if from_addresses.is_empty() {
            // No explicit transfer. Fall back to the first account that lost
            // the matching amount.
            if let Some(matching) = transaction
                .account_data
                .iter()
                .find(|account| account.native_balance_change == -native_balance_change)
            {
                from_addresses = vec![matching.account.clone()];
            }
        }

        events.push(TransactionEvent::ReceivedSol {
            lamports: native_balance_change as u64,
            from: from_addresses,
        });
    } else if native_balance_change < 0 {
        // Sent SOL. Transfers that only fund rent for accounts created in
        // this transaction are deposits, not payments, so strip them out.
        let rent_costs = detect_rent_costs(&transaction.instructions);

        let mut rent_adjusted_lamports = native_balance_change.unsigned_abs();
        let mut to_addresses: Vec<String> = Vec::new();

        for transfer in &transaction.native_transfers {
            if transfer.from_user_account != observed_address {
                continue;
            }
            if rent_costs.get(&transfer.to_user_account) == Some(&transfer.amount) {
                rent_adjusted_lamports = rent_adjusted_lamports.saturating_sub(transfer.amount);
            } else {
                to_addresses.push(transfer.to_user_account.clone());
            }
        }

        if rent_adjusted_lamports > 0 {
            events.push(TransactionEvent::SentSol {
                lamports: rent_adjusted_lamports,
                to: to_addresses,
            });
        }
    }

    // Net fungible movement per mint across every balance change belonging
    // to the observed address. The first record's decimals stick.
    let mut fungible_flows: BTreeMap<String, FungibleFlow> = BTreeMap::new();

    for account in &transaction.account_data {
        for change in &account.token_balance_changes {
            if change.user_account != observed_address {
                continue;
            }
            let amount = parse_unit_amount(&change.raw_token_amount.token_amount);
            if let Some(flow) = fungible_flows.get_mut(&change.mint) {
                flow.unit_amount += amount;
            } else {
                fungible_flows.insert(
                    change.mint.clone(),
                    FungibleFlow {
                        unit_amount: amount,
                        decimals: change.raw_token_amount.decimals,
                        from_addresses: Vec::new(),
                        to_addresses: Vec::new(),
                    },
                );
            }
        }
    }

    // Counterparties come from the transfer records. NFT transfers turn
    // straight into events on this same pass.
    for transfer in &transaction.token_transfers {
        match transfer.token_standard {
            TokenStandard::Fungible => {
                if let Some(flow) = fungible_flows.get_mut(&transfer.mint) {
                    if transfer.from_user_account == observed_address {
                        flow.to_addresses.push(transfer.to_user_account.clone());
                    }
                    if transfer.to_user_account == observed_address {
                        flow.from_addresses.push(transfer.from_user_account.clone());
                    }
                }
            }
            TokenStandard::NonFungible | TokenStandard::ProgrammableNonFungible => {
                if transfer.to_user_account == observed_address {
                    let from = if transfer.from_user_account.is_empty() {
                        None
                    } else {
                        Some(transfer.from_user_account.clone())
                    };
                    events.push(TransactionEvent::ReceivedNft {
                        asset_id: transfer.mint.clone(),
                        from,
                    });
                }
                if transfer.from_user_account == observed_address {
                    events.push(TransactionEvent::SentNft {
                        asset_id: transfer.mint.clone(),
                        to: transfer.to_user_account.clone(),
                    });
                }
            }
            TokenStandard::Unknown => {}
        }
    }

    // One net event per mint; a mint that nets to zero emits nothing
    for (mint, flow) in &fungible_flows {
        if flow.unit_amount > 0 {
            events.push(TransactionEvent::ReceivedToken {
                mint: mint.clone(),
                unit_amount: flow.unit_amount as u64,
                decimals: flow.decimals,
                from: flow.from_addresses.clone(),
            });
        }
        if flow.unit_amount < 0 {
            events.push(TransactionEvent::SentToken {
                mint: mint.clone(),
                unit_amount: flow.unit_amount.unsigned_abs() as u64,
                decimals: flow.decimals,
                to: flow.to_addresses.clone(),
            });
        }
    }

    // Compressed NFT movement is recorded as leaf ownership changes
    for compressed in &transaction.events.compressed {
        let old_owner = compressed.old_leaf_owner.as_deref();
        let new_owner = compressed.new_leaf_owner.as_deref();

        if old_owner == Some(observed_address) && new_owner != Some(observed_address) {
            // A burn has no new owner and emits nothing
            if let Some(to) = new_owner {
                events.push(TransactionEvent::SentNft {
                    asset_id: compressed.asset_id.clone(),
                    to: to.to_string(),
                });
            }
        }
        if new_owner == Some(observed_address) && old_owner != Some(observed_address) {
            // Compressed events carry no authority, so the fee payer is the
            // best attribution available
            let from = if transaction.fee_payer != observed_address {
                Some(transaction.fee_payer.clone())
            } else {
                None
            };
            events.push(TransactionEvent::ReceivedNft {
                asset_id: compressed.asset_id.clone(),
                from,
            });
        }
    }

    logger::debug(
        LogTag::Summary,
        &format!(
            "summarized {} into {} event(s) for {}",
            transaction.signature,
            events.len(),
            observed_address
        ),
    );

    TransactionSummary {
        success: true,
        fee_payer: transaction.fee_payer.clone(),
        signature: transaction.signature.clone(),
        known_app: known_app_label(&transaction.source).map(str::to_string),
        timestamp: transaction.timestamp,
        events,
    }
}

/// Summarize a page of transactions, keeping the page order
pub fn summarize_all(
    transactions: &[EnhancedTransaction],
    observed_address: &str,
) -> Vec<TransactionSummary> {
    transactions
        .iter()
        .map(|transaction| summarize(transaction, observed_address))
        .collect()
}

/// Raw token amounts arrive as strings. Parse to integer units, truncating
/// the occasional float-formatted value; anything unparseable counts as zero.
fn parse_unit_amount(raw: &str) -> i128 {
    if let Ok(units) = raw.parse::<i128>() {
        return units;
    }
    match raw.parse::<f64>() {
        Ok(value) => value.trunc() as i128,
        Err(_) => 0,
    }
}
