use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Consumed nonce account
 *
 * One entry of a principal's nonce set. The account existing with
 * consumed = true means the nonce can never authorize another claim for
 * that principal, in any round.
 *
 * Derivation: ["nonce", config_key, receiver, nonce]
 *
 * Lifecycle:
 * 1. Created on the claim presenting it (using init_if_needed)
 * 2. Marked consumed when that claim commits
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Whether a committed claim has spent this nonce
    pub consumed: bool,

    /// Unix timestamp of consumption
    pub consumed_at: i64,
}

impl NonceState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();

    pub fn ensure_unused(&self) -> Result<()> {
        require!(!self.consumed, TokenEconomyError::NonceConsumed);
        Ok(())
    }
}
