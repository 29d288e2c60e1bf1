use anchor_lang::prelude::*;
use crate::error::*;
use super::NonceState;

/**
 * Individual claim status account
 *
 * Tracks whether a receiver has claimed their entitlement in one airdrop
 * round. Claims are all-or-nothing: the first successful claim moves the
 * record from unclaimed to claimed and no transition leaves that state.
 *
 * Derivation: ["claim", round_key, receiver]
 *
 * Lifecycle:
 * 1. Created on first claim attempt (using init_if_needed), unclaimed
 * 2. Marked claimed by commit_claim
 * 3. Never closed, so the record cannot be recreated unclaimed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether the entitlement has been claimed
    pub claimed: bool,

    /// Entitlement amount issued by the claim
    pub claimed_amount: u64,

    /// Unix timestamp of the claim
    pub claimed_at: i64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.claimed, TokenEconomyError::AlreadyClaimed);
        Ok(())
    }
}

/**
 * Moves a claim from unclaimed to claimed and spends its nonce
 *
 * Both records are checked before either is written, so a rejected claim
 * leaves both untouched. Must run after the signature and proof checks and
 * before any issuance.
 */
pub fn commit_claim(
    claim_status: &mut ClaimStatus,
    nonce_state: &mut NonceState,
    amount: u64,
    now: i64,
) -> Result<()> {
    claim_status.ensure_unclaimed()?;
    nonce_state.ensure_unused()?;

    claim_status.claimed = true;
    claim_status.claimed_amount = amount;
    claim_status.claimed_at = now;

    nonce_state.consumed = true;
    nonce_state.consumed_at = now;

    Ok(())
}
