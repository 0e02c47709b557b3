/// Declarative filtering over transaction summaries
///
/// A filter is an ordered list of conditions, each scoped either to the whole
/// transaction (fee payer tag, known app, timestamp window) or to individual
/// events (kind, counterparty tags, asset symbol or NFT name). A summary is
/// kept when every condition in the list holds; an event condition holds when
/// at least one of the summary's events satisfies all of its sub-predicates.
///
/// The filter shape is a JSON contract produced by an external
/// text-to-filter translator, so the field names here are fixed. Conditions
/// referencing addresses or assets missing from the lookup tables fail
/// closed: they exclude rather than error.

use serde::{Deserialize, Serialize};

use crate::accounts::AddressBook;
use crate::assets::{AssetCatalog, AssetInfo};
use crate::error::ActivityResult;
use crate::logger::{self, LogTag};
use crate::summary::{EventKind, TransactionEvent, TransactionSummary};

// ============================================================================
// FILTER MODEL (wire format)
// ============================================================================

/// A full filter: every condition must hold for a summary to pass
pub type Filter = Vec<FilterCondition>;

/// One condition, tagged by scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FilterCondition {
    #[serde(rename = "event")]
    Event { conditions: EventConditions },
    #[serde(rename = "transaction")]
    Transaction { conditions: TransactionConditions },
    /// Condition types we don't recognize match nothing
    #[serde(other)]
    Unknown,
}

/// Predicates over a single event; absent predicates always pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventKind>,
    /// Tag required on the sending side of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_tag: Option<String>,
    /// Tag required on the receiving side of the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_condition: Option<AssetCondition>,
}

/// Match an event's asset against the asset catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AssetCondition {
    /// Token symbol, case insensitive ("USDC", "BONK")
    #[serde(rename = "token")]
    Token { symbol: String },
    /// Substring of an NFT name, case insensitive
    #[serde(rename = "NFT")]
    Nft {
        #[serde(rename = "nameContains")]
        name_contains: String,
    },
}

/// Predicates over the whole transaction; absent predicates always pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionConditions {
    /// Tag required on the transaction's fee payer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_address_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<TimestampCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_app: Option<String>,
}

/// Inclusive unix-second bounds; each side is independently optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimestampCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<i64>,
}

/// Decode a filter from its JSON wire form
pub fn parse_filter(json: &str) -> ActivityResult<Filter> {
    Ok(serde_json::from_str(json)?)
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Keep the summaries for which every filter condition holds, preserving
/// their original order
pub fn apply_filter(
    summaries: &[TransactionSummary],
    filter: &[FilterCondition],
    addresses: &AddressBook,
    assets: &AssetCatalog,
) -> Vec<TransactionSummary> {
    let kept: Vec<TransactionSummary> = summaries
        .iter()
        .filter(|summary| {
            filter
                .iter()
                .all(|condition| check_condition(summary, condition, addresses, assets))
        })
        .cloned()
        .collect();

    logger::debug(
        LogTag::Filtering,
        &format!(
            "filter with {} condition(s) kept {}/{} summaries",
            filter.len(),
            kept.len(),
            summaries.len()
        ),
    );

    kept
}

fn check_condition(
    summary: &TransactionSummary,
    condition: &FilterCondition,
    addresses: &AddressBook,
    assets: &AssetCatalog,
) -> bool {
    match condition {
        // Keep transactions where any event meets all event conditions
        FilterCondition::Event { conditions } => summary.events.iter().any(|event| {
            check_event_conditions(event, conditions, addresses, assets, &summary.fee_payer)
        }),
        FilterCondition::Transaction { conditions } => {
            check_transaction_conditions(summary, conditions, addresses)
        }
        FilterCondition::Unknown => false,
    }
}

fn check_event_conditions(
    event: &TransactionEvent,
    conditions: &EventConditions,
    addresses: &AddressBook,
    assets: &AssetCatalog,
    fee_payer: &str,
) -> bool {
    check_event_kind(event, conditions.kind)
        && check_from_tag(event, conditions.from_tag.as_deref(), addresses, fee_payer)
        && check_to_tag(event, conditions.to_tag.as_deref(), addresses, fee_payer)
        && check_asset_condition(event, conditions.asset_condition.as_ref(), assets)
}

fn check_event_kind(event: &TransactionEvent, kind: Option<EventKind>) -> bool {
    match kind {
        Some(kind) => event.kind() == kind,
        None => true,
    }
}

/// True when the address is in the book and carries the tag
fn has_tag(addresses: &AddressBook, address: &str, tag: &str) -> bool {
    addresses
        .get(address)
        .map(|info| info.has_tag(tag))
        .unwrap_or(false)
}

fn check_from_tag(
    event: &TransactionEvent,
    from_tag: Option<&str>,
    addresses: &AddressBook,
    fee_payer: &str,
) -> bool {
    let from_tag = match from_tag {
        Some(tag) => tag,
        None => return true,
    };

    match event {
        TransactionEvent::ReceivedNft { from, .. } => match from {
            Some(from) => has_tag(addresses, from, from_tag),
            None => false,
        },
        TransactionEvent::ReceivedSol { from, .. }
        | TransactionEvent::ReceivedToken { from, .. } => from
            .iter()
            .any(|address| has_tag(addresses, address, from_tag)),
        // For anything the observed address sent, the sender is the fee payer
        TransactionEvent::SentSol { .. }
        | TransactionEvent::SentToken { .. }
        | TransactionEvent::SentNft { .. } => has_tag(addresses, fee_payer, from_tag),
    }
}

fn check_to_tag(
    event: &TransactionEvent,
    to_tag: Option<&str>,
    addresses: &AddressBook,
    fee_payer: &str,
) -> bool {
    let to_tag = match to_tag {
        Some(tag) => tag,
        None => return true,
    };

    match event {
        TransactionEvent::SentNft { to, .. } => !to.is_empty() && has_tag(addresses, to, to_tag),
        TransactionEvent::SentSol { to, .. } | TransactionEvent::SentToken { to, .. } => to
            .iter()
            .any(|address| has_tag(addresses, address, to_tag)),
        // For anything the observed address received, it is the recipient,
        // and it paid the fee
        TransactionEvent::ReceivedSol { .. }
        | TransactionEvent::ReceivedToken { .. }
        | TransactionEvent::ReceivedNft { .. } => has_tag(addresses, fee_payer, to_tag),
    }
}

fn check_asset_condition(
    event: &TransactionEvent,
    condition: Option<&AssetCondition>,
    assets: &AssetCatalog,
) -> bool {
    let condition = match condition {
        Some(condition) => condition,
        None => return true,
    };

    match condition {
        AssetCondition::Token { symbol } => {
            // Only token events involve a fungible token
            let mint = match event {
                TransactionEvent::ReceivedToken { mint, .. }
                | TransactionEvent::SentToken { mint, .. } => mint,
                _ => return false,
            };
            match assets.get(mint) {
                Some(AssetInfo::FungibleToken {
                    symbol: Some(asset_symbol),
                    ..
                }) if !asset_symbol.is_empty() => asset_symbol.eq_ignore_ascii_case(symbol),
                // Missing entry, wrong asset kind, or symbolless token
                _ => false,
            }
        }
        AssetCondition::Nft { name_contains } => {
            let asset_id = match event {
                TransactionEvent::ReceivedNft { asset_id, .. }
                | TransactionEvent::SentNft { asset_id, .. } => asset_id,
                _ => return false,
            };
            match assets.get(asset_id) {
                Some(AssetInfo::Nft { name, .. }) => name
                    .to_lowercase()
                    .contains(&name_contains.to_lowercase()),
                _ => false,
            }
        }
    }
}

fn check_transaction_conditions(
    summary: &TransactionSummary,
    conditions: &TransactionConditions,
    addresses: &AddressBook,
) -> bool {
    // Check the fee payer carries the requested tag
    if let Some(tag) = &conditions.for_address_tag {
        if !has_tag(addresses, &summary.fee_payer, tag) {
            return false;
        }
    }

    // Check the known app label matches
    if let Some(known_app) = &conditions.known_app {
        match &summary.known_app {
            Some(app) if app.eq_ignore_ascii_case(known_app) => {}
            _ => return false,
        }
    }

    // Check timestamp bounds, both inclusive
    if let Some(timestamp) = &conditions.timestamp {
        if let Some(gt) = timestamp.gt {
            if summary.timestamp < gt {
                return false;
            }
        }
        if let Some(lt) = timestamp.lt {
            if summary.timestamp > lt {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AddressInfo;

    const PAYER: &str = "FeePayer111111111111111111111111111111111111";
    const EXCHANGE: &str = "ExchangeHot111111111111111111111111111111111";
    const USDC_MINT: &str = "UsdcMint111111111111111111111111111111111111";
    const NFT_ASSET: &str = "MadLadAsset111111111111111111111111111111111";

    fn summary_with_events(signature: &str, events: Vec<TransactionEvent>) -> TransactionSummary {
        TransactionSummary {
            success: true,
            fee_payer: PAYER.to_string(),
            signature: signature.to_string(),
            known_app: None,
            timestamp: 1_700_000_000,
            events,
        }
    }

    fn address_book(entries: &[(&str, &[&str])]) -> AddressBook {
        entries
            .iter()
            .map(|(address, tags)| {
                (
                    address.to_string(),
                    AddressInfo {
                        label: address.to_string(),
                        tags: tags.iter().map(|tag| tag.to_string()).collect(),
                    },
                )
            })
            .collect()
    }

    fn usdc_catalog(symbol: &str) -> AssetCatalog {
        AssetCatalog::from([(
            USDC_MINT.to_string(),
            AssetInfo::FungibleToken {
                name: Some("USD Coin".to_string()),
                symbol: Some(symbol.to_string()),
                decimals: 6,
                image: None,
            },
        )])
    }

    fn sent_usdc_event() -> TransactionEvent {
        TransactionEvent::SentToken {
            mint: USDC_MINT.to_string(),
            unit_amount: 50_000_000,
            decimals: 6,
            to: vec![EXCHANGE.to_string()],
        }
    }

    fn event_condition(conditions: EventConditions) -> FilterCondition {
        FilterCondition::Event { conditions }
    }

    fn transaction_condition(conditions: TransactionConditions) -> FilterCondition {
        FilterCondition::Transaction { conditions }
    }

    #[test]
    fn test_symbol_match_is_case_insensitive() {
        let summaries = vec![summary_with_events("Sig1", vec![sent_usdc_event()])];
        let filter = vec![event_condition(EventConditions {
            kind: Some(EventKind::SentToken),
            asset_condition: Some(AssetCondition::Token {
                symbol: "USDC".to_string(),
            }),
            ..Default::default()
        })];

        // Catalog reports the symbol in lowercase
        let kept = apply_filter(&summaries, &filter, &AddressBook::new(), &usdc_catalog("usdc"));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_asset_condition_fails_without_lookup() {
        let summaries = vec![summary_with_events("Sig1", vec![sent_usdc_event()])];
        let filter = vec![event_condition(EventConditions {
            asset_condition: Some(AssetCondition::Token {
                symbol: "USDC".to_string(),
            }),
            ..Default::default()
        })];

        let kept = apply_filter(&summaries, &filter, &AddressBook::new(), &AssetCatalog::new());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_asset_condition_rejects_symbolless_token() {
        let summaries = vec![summary_with_events("Sig1", vec![sent_usdc_event()])];
        let filter = vec![event_condition(EventConditions {
            asset_condition: Some(AssetCondition::Token {
                symbol: "USDC".to_string(),
            }),
            ..Default::default()
        })];

        let catalog = AssetCatalog::from([(
            USDC_MINT.to_string(),
            AssetInfo::FungibleToken {
                name: None,
                symbol: None,
                decimals: 6,
                image: None,
            },
        )]);
        assert!(apply_filter(&summaries, &filter, &AddressBook::new(), &catalog).is_empty());
    }

    #[test]
    fn test_nft_name_contains() {
        let summaries = vec![summary_with_events(
            "Sig1",
            vec![TransactionEvent::ReceivedNft {
                asset_id: NFT_ASSET.to_string(),
                from: Some(EXCHANGE.to_string()),
            }],
        )];
        let catalog = AssetCatalog::from([(
            NFT_ASSET.to_string(),
            AssetInfo::Nft {
                name: "Mad Lad #1234".to_string(),
                image: None,
            },
        )]);
        let filter_for = |needle: &str| {
            vec![event_condition(EventConditions {
                asset_condition: Some(AssetCondition::Nft {
                    name_contains: needle.to_string(),
                }),
                ..Default::default()
            })]
        };

        let book = AddressBook::new();
        assert_eq!(apply_filter(&summaries, &filter_for("mad lad"), &book, &catalog).len(), 1);
        assert!(apply_filter(&summaries, &filter_for("punk"), &book, &catalog).is_empty());
    }

    #[test]
    fn test_nft_condition_rejects_fungible_entry() {
        // Catalog says this id is a token, so an NFT condition cannot match it
        let summaries = vec![summary_with_events(
            "Sig1",
            vec![TransactionEvent::SentNft {
                asset_id: USDC_MINT.to_string(),
                to: EXCHANGE.to_string(),
            }],
        )];
        let filter = vec![event_condition(EventConditions {
            asset_condition: Some(AssetCondition::Nft {
                name_contains: "usd".to_string(),
            }),
            ..Default::default()
        })];

        let kept = apply_filter(&summaries, &filter, &AddressBook::new(), &usdc_catalog("USDC"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_from_tag_resolution() {
        let book = address_book(&[(EXCHANGE, &["exchange", "hot"]), (PAYER, &["me"])]);
        let catalog = AssetCatalog::new();

        // Received events resolve their explicit from list
        let received = summary_with_events(
            "Sig1",
            vec![TransactionEvent::ReceivedSol {
                lamports: 1_000,
                from: vec![EXCHANGE.to_string()],
            }],
        );
        let exchange_from = vec![event_condition(EventConditions {
            from_tag: Some("Hot".to_string()),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&[received.clone()], &exchange_from, &book, &catalog).len(), 1);

        // Sent events resolve via the fee payer
        let sent = summary_with_events(
            "Sig2",
            vec![TransactionEvent::SentSol {
                lamports: 1_000,
                to: vec![EXCHANGE.to_string()],
            }],
        );
        let me_from = vec![event_condition(EventConditions {
            from_tag: Some("me".to_string()),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&[sent.clone()], &me_from, &book, &catalog).len(), 1);
        assert!(apply_filter(&[sent], &exchange_from, &book, &catalog).is_empty());

        // A receive with nobody in the from list cannot carry a tag
        let anonymous = summary_with_events(
            "Sig3",
            vec![TransactionEvent::ReceivedSol {
                lamports: 1_000,
                from: vec![],
            }],
        );
        assert!(apply_filter(&[anonymous], &exchange_from, &book, &catalog).is_empty());
    }

    #[test]
    fn test_to_tag_resolution() {
        let book = address_book(&[(EXCHANGE, &["exchange"]), (PAYER, &["me"])]);
        let catalog = AssetCatalog::new();

        let sent_nft = summary_with_events(
            "Sig1",
            vec![TransactionEvent::SentNft {
                asset_id: NFT_ASSET.to_string(),
                to: EXCHANGE.to_string(),
            }],
        );
        let to_exchange = vec![event_condition(EventConditions {
            to_tag: Some("exchange".to_string()),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&[sent_nft], &to_exchange, &book, &catalog).len(), 1);

        // Received events resolve the recipient via the fee payer
        let received = summary_with_events(
            "Sig2",
            vec![TransactionEvent::ReceivedToken {
                mint: USDC_MINT.to_string(),
                unit_amount: 1,
                decimals: 6,
                from: vec![EXCHANGE.to_string()],
            }],
        );
        let to_me = vec![event_condition(EventConditions {
            to_tag: Some("ME".to_string()),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&[received], &to_me, &book, &catalog).len(), 1);
    }

    #[test]
    fn test_received_nft_without_sender_fails_from_tag() {
        let book = address_book(&[(EXCHANGE, &["exchange"])]);
        let summaries = vec![summary_with_events(
            "Sig1",
            vec![TransactionEvent::ReceivedNft {
                asset_id: NFT_ASSET.to_string(),
                from: None,
            }],
        )];
        let filter = vec![event_condition(EventConditions {
            from_tag: Some("exchange".to_string()),
            ..Default::default()
        })];

        assert!(apply_filter(&summaries, &filter, &book, &AssetCatalog::new()).is_empty());
    }

    #[test]
    fn test_kind_must_match_some_event() {
        let summaries = vec![summary_with_events("Sig1", vec![sent_usdc_event()])];
        let book = AddressBook::new();
        let catalog = AssetCatalog::new();

        let wants_received = vec![event_condition(EventConditions {
            kind: Some(EventKind::ReceivedToken),
            ..Default::default()
        })];
        assert!(apply_filter(&summaries, &wants_received, &book, &catalog).is_empty());

        let wants_sent = vec![event_condition(EventConditions {
            kind: Some(EventKind::SentToken),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&summaries, &wants_sent, &book, &catalog).len(), 1);
    }

    #[test]
    fn test_empty_event_condition_needs_an_event() {
        // No sub-predicates, but the summary still needs at least one event
        let with_event = summary_with_events("Sig1", vec![sent_usdc_event()]);
        let without_events = summary_with_events("Sig2", vec![]);
        let filter = vec![event_condition(EventConditions::default())];

        let kept = apply_filter(
            &[with_event, without_events],
            &filter,
            &AddressBook::new(),
            &AssetCatalog::new(),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].signature, "Sig1");
    }

    #[test]
    fn test_for_address_tag_excludes_untagged_payer() {
        let book = address_book(&[(PAYER, &["hot", "trading"])]);
        let summaries = vec![summary_with_events("Sig1", vec![])];
        let filter = vec![transaction_condition(TransactionConditions {
            for_address_tag: Some("defi".to_string()),
            ..Default::default()
        })];

        assert!(apply_filter(&summaries, &filter, &book, &AssetCatalog::new()).is_empty());
    }

    #[test]
    fn test_known_app_condition() {
        let mut summary = summary_with_events("Sig1", vec![]);
        summary.known_app = Some("Jupiter".to_string());
        let book = AddressBook::new();
        let catalog = AssetCatalog::new();

        let wants_jupiter = vec![transaction_condition(TransactionConditions {
            known_app: Some("jupiter".to_string()),
            ..Default::default()
        })];
        assert_eq!(apply_filter(&[summary.clone()], &wants_jupiter, &book, &catalog).len(), 1);

        let wants_tensor = vec![transaction_condition(TransactionConditions {
            known_app: Some("Tensor".to_string()),
            ..Default::default()
        })];
        assert!(apply_filter(&[summary.clone()], &wants_tensor, &book, &catalog).is_empty());

        // A summary without a known app never matches an app condition
        summary.known_app = None;
        assert!(apply_filter(&[summary], &wants_jupiter, &book, &catalog).is_empty());
    }

    #[test]
    fn test_timestamp_bounds_are_inclusive() {
        let summary = summary_with_events("Sig1", vec![]);
        let book = AddressBook::new();
        let catalog = AssetCatalog::new();
        let filter_for = |gt: Option<i64>, lt: Option<i64>| {
            vec![transaction_condition(TransactionConditions {
                timestamp: Some(TimestampCondition { gt, lt }),
                ..Default::default()
            })]
        };

        let at = summary.timestamp;
        assert_eq!(
            apply_filter(&[summary.clone()], &filter_for(Some(at), Some(at)), &book, &catalog)
                .len(),
            1
        );
        assert!(
            apply_filter(&[summary.clone()], &filter_for(Some(at + 1), None), &book, &catalog)
                .is_empty()
        );
        assert!(
            apply_filter(&[summary], &filter_for(None, Some(at - 1)), &book, &catalog).is_empty()
        );
    }

    #[test]
    fn test_and_composition_matches_sequential_application() {
        let book = address_book(&[(PAYER, &["me"])]);
        let catalog = usdc_catalog("USDC");
        let summaries = vec![
            summary_with_events("Sig1", vec![sent_usdc_event()]),
            summary_with_events("Sig2", vec![]),
        ];

        let event = event_condition(EventConditions {
            kind: Some(EventKind::SentToken),
            ..Default::default()
        });
        let transaction = transaction_condition(TransactionConditions {
            for_address_tag: Some("me".to_string()),
            ..Default::default()
        });

        let combined = apply_filter(
            &summaries,
            &[event.clone(), transaction.clone()],
            &book,
            &catalog,
        );
        let sequential = apply_filter(
            &apply_filter(&summaries, &[event], &book, &catalog),
            &[transaction],
            &book,
            &catalog,
        );
        assert_eq!(combined, sequential);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let summaries = vec![
            summary_with_events("Sig1", vec![]),
            summary_with_events("Sig2", vec![sent_usdc_event()]),
            summary_with_events("Sig3", vec![]),
        ];

        let kept = apply_filter(&summaries, &[], &AddressBook::new(), &AssetCatalog::new());
        let signatures: Vec<&str> = kept.iter().map(|s| s.signature.as_str()).collect();
        assert_eq!(signatures, vec!["Sig1", "Sig2", "Sig3"]);
    }

    #[test]
    fn test_unknown_condition_type_excludes_everything() {
        let json = r#"[{"type": "regex", "conditions": {"pattern": ".*"}}]"#;
        let filter = parse_filter(json).unwrap();
        assert_eq!(filter, vec![FilterCondition::Unknown]);

        let summaries = vec![summary_with_events("Sig1", vec![sent_usdc_event()])];
        assert!(apply_filter(&summaries, &filter, &AddressBook::new(), &AssetCatalog::new())
            .is_empty());
    }

    #[test]
    fn test_filter_wire_shape_round_trip() {
        let json = r#"[
            {
                "type": "event",
                "conditions": {
                    "kind": "sent_token",
                    "fromTag": "me",
                    "toTag": "exchange",
                    "assetCondition": {"kind": "token", "symbol": "USDC"}
                }
            },
            {
                "type": "transaction",
                "conditions": {
                    "forAddressTag": "defi",
                    "timestamp": {"gt": 1700000000, "lt": 1700003600},
                    "knownApp": "Jupiter"
                }
            }
        ]"#;

        let filter = parse_filter(json).unwrap();
        assert_eq!(
            filter,
            vec![
                FilterCondition::Event {
                    conditions: EventConditions {
                        kind: Some(EventKind::SentToken),
                        from_tag: Some("me".to_string()),
                        to_tag: Some("exchange".to_string()),
                        asset_condition: Some(AssetCondition::Token {
                            symbol: "USDC".to_string(),
                        }),
                    },
                },
                FilterCondition::Transaction {
                    conditions: TransactionConditions {
                        for_address_tag: Some("defi".to_string()),
                        timestamp: Some(TimestampCondition {
                            gt: Some(1_700_000_000),
                            lt: Some(1_700_003_600),
                        }),
                        known_app: Some("Jupiter".to_string()),
                    },
                },
            ]
        );

        // Field names cross a service boundary, so serialization must match
        let round_tripped = serde_json::to_value(&filter).unwrap();
        let event_json = &round_tripped[0];
        assert_eq!(event_json["type"], "event");
        assert_eq!(event_json["conditions"]["fromTag"], "me");
        assert_eq!(event_json["conditions"]["assetCondition"]["kind"], "token");
        let tx_json = &round_tripped[1];
        assert_eq!(tx_json["type"], "transaction");
        assert_eq!(tx_json["conditions"]["forAddressTag"], "defi");
        assert_eq!(tx_json["conditions"]["timestamp"]["gt"], 1_700_000_000i64);

        let nft_condition = AssetCondition::Nft {
            name_contains: "Mad Lad".to_string(),
        };
        let nft_json = serde_json::to_value(&nft_condition).unwrap();
        assert_eq!(nft_json["kind"], "NFT");
        assert_eq!(nft_json["nameContains"], "Mad Lad");
    }
}
