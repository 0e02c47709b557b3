#![allow(warnings)]

//! Wallet-relative transaction activity: summarization and filtering.
//!
//! Two-stage pipeline over parsed Solana transaction history. `summarize`
//! reduces one raw transaction to the events that matter to a single observed
//! address (SOL moved net of rent deposits, per-mint token flows, NFT and
//! compressed-NFT ownership changes); `apply_filter` evaluates a declarative
//! condition list against the resulting summaries, resolving address tags and
//! asset symbols/names through injected lookup tables. Both stages are pure;
//! fetching, persistence, and rendering live outside this crate.

pub mod accounts;
pub mod assets;
pub mod constants;
pub mod error; // Structured error handling
pub mod filtering;
pub mod logger;
pub mod rent; // Rent deposit detection for SOL adjustment
pub mod summary;
pub mod types; // Enhanced transaction wire types

pub use accounts::{address_book, AddressBook, AddressInfo, TrackedAccount};
pub use assets::{asset_catalog, summarize_asset, AssetCatalog, AssetInfo};
pub use error::{ActivityError, ActivityResult};
pub use filtering::{apply_filter, Filter, FilterCondition};
pub use summary::{summarize, summarize_all, TransactionEvent, TransactionSummary};
pub use types::EnhancedTransaction;
