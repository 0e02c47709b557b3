/// Rent deposit detection for system-program account creation
///
/// Sending a token to a wallet that never held it creates the destination
/// token account, and the rent-exempt deposit for that account shows up as an
/// extra native transfer from the sender. This module scans a transaction's
/// instructions for system-program CreateAccount calls and reports how many
/// lamports went into each created account, so the summarizer can keep those
/// deposits out of the sent-SOL totals.

use std::collections::HashMap;

use crate::constants::{CREATE_ACCOUNT_DATA_LEN, CREATE_ACCOUNT_TAG, SYSTEM_PROGRAM};
use crate::logger::{self, LogTag};
use crate::types::Instruction;

// ============================================================================
// DETECTION
// ============================================================================

/// Map each account created in this transaction to its rent-exempt deposit.
///
/// Walks top-level and inner instructions. Anything that does not decode as a
/// system-program CreateAccount is skipped; a malformed instruction never
/// fails the scan. When the same account is created twice the later
/// instruction wins.
pub fn detect_rent_costs(instructions: &[Instruction]) -> HashMap<String, u64> {
    let mut rent_costs = HashMap::new();

    for instruction in flatten_instructions(instructions) {
        // Check program
        if instruction.program_id != SYSTEM_PROGRAM {
            continue;
        }

        // Check payload decodes and is long enough for CreateAccount
        let data = match bs58::decode(&instruction.data).into_vec() {
            Ok(data) => data,
            Err(_) => continue,
        };
        if data.len() < CREATE_ACCOUNT_DATA_LEN {
            continue;
        }

        // Check discriminant
        let tag = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        if tag != CREATE_ACCOUNT_TAG {
            continue;
        }

        // Check the created account is present (funder, new account)
        let created = match instruction.accounts.get(1) {
            Some(account) => account.clone(),
            None => continue,
        };

        let lamports = u64::from_le_bytes([
            data[4], data[5], data[6], data[7], data[8], data[9], data[10], data[11],
        ]);

        rent_costs.insert(created, lamports);
    }

    if !rent_costs.is_empty() {
        logger::debug(
            LogTag::Rent,
            &format!("detected {} rent deposit(s): {:?}", rent_costs.len(), rent_costs),
        );
    }

    rent_costs
}

/// Top-level instructions followed by every inner instruction, in order
fn flatten_instructions(instructions: &[Instruction]) -> Vec<Instruction> {
    let mut flat = Vec::new();
    for instruction in instructions {
        flat.push(Instruction {
            accounts: instruction.accounts.clone(),
            data: instruction.data.clone(),
            program_id: instruction.program_id.clone(),
            inner_instructions: Vec::new(),
        });
        for inner in &instruction.inner_instructions {
            flat.push(Instruction {
                accounts: inner.accounts.clone(),
                data: inner.data.clone(),
                program_id: inner.program_id.clone(),
                inner_instructions: Vec::new(),
            });
        }
    }
    flat
}
