/// Global constants used across the crate
///
/// This module contains chain-level constants that are not configurable
/// and are used across multiple modules.

// ============================================================================
// SOLANA BLOCKCHAIN CONSTANTS
// ============================================================================

/// System program ID (owner of native SOL accounts, handles account creation)
pub const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

/// Lamports per SOL (10^9)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Rent-exempt reserve for a standard SPL associated token account, in lamports.
/// The most common create-account rent cost seen in transfer transactions.
pub const ATA_RENT_LAMPORTS: u64 = 2_039_280;

// ============================================================================
// SYSTEM PROGRAM INSTRUCTION LAYOUT
// ============================================================================

/// Instruction discriminant for CreateAccount (little-endian u32 in data[0..4])
pub const CREATE_ACCOUNT_TAG: u32 = 0;

/// Full CreateAccount payload length: tag (4) + lamports (8) + space (8) + owner (32)
pub const CREATE_ACCOUNT_DATA_LEN: usize = 52;
