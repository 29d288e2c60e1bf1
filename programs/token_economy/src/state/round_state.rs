use anchor_lang::prelude::*;

/**
 * Airdrop round account
 *
 * Holds the commitment root of one distribution. A round is created with its
 * root and there is no instruction that changes it afterwards; a corrected
 * distribution is published as a new round.
 *
 * Derivation: ["round", config_key, round_id]
 *
 * Merkle Tree Structure:
 * - Each leaf: sha256(sha256(claimant_pubkey + amount))
 * - Intermediate nodes: sha256(left_child + right_child) with lexicographic ordering
 */
#[account]
#[derive(Default, Debug)]
pub struct AirdropRound {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Sequential round number, starting at 1
    pub round_id: u32,

    /// Airdrop supply category the claimed collectibles are issued from
    pub category: Pubkey,

    /// Merkle root over every (claimant, amount) entitlement of this round
    pub merkle_root: [u8; 32],

    /// Admin who published the root
    pub publisher: Pubkey,

    /// Unix timestamp of publication
    pub published_at: i64,

    /// Total units claimed in this round by all claimants
    pub total_claimed: u64,
}

impl AirdropRound {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AirdropRound>();
}
