use anchor_lang::prelude::*;
use crate::error::*;

/**
 * Program configuration account
 *
 * Singleton holding the admin key, the earning token mint and the run-time
 * parameters the earn and staking gates read.
 *
 * Derivation: ["config"]
 *
 * Lifecycle:
 * 1. Created during initialize instruction
 * 2. total_earned updated on every earn
 * 3. round_count incremented on every publish_root
 */
#[account]
#[derive(Default, Debug)]
pub struct EconomyConfig {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed of the mint authority PDA
    /// - Saved to avoid recomputation when signing mint_to
    pub mint_authority_bump: u8,

    /// Admin who creates categories, collections and airdrop rounds
    pub admin: Pubkey,

    /// Earning token mint
    /// - Minted by earn, held balance gates mint_staked
    pub earn_mint: Pubkey,

    /// Amount of earning tokens minted per successful earn
    pub earn_amount: u64,

    /// Seconds a principal must wait between two earns
    pub cooldown_period: i64,

    /// Minimum earning token balance required to call mint_staked
    pub stake_threshold: u64,

    /// Total earning tokens minted through earn
    pub total_earned: u64,

    /// Number of airdrop rounds published so far
    /// - The next round id is round_count + 1
    pub round_count: u32,
}

impl EconomyConfig {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<EconomyConfig>();

    /// Staking gate of mint_staked. A balance equal to the threshold passes.
    pub fn ensure_stake(&self, balance: u64) -> Result<()> {
        if balance < self.stake_threshold {
            msg!("Stake {} below threshold {}", balance, self.stake_threshold);
            return err!(TokenEconomyError::Unauthorized);
        }
        Ok(())
    }

    /// Id the next published round receives
    pub fn next_round_id(&self) -> Result<u32> {
        self.round_count
            .checked_add(1)
            .ok_or_else(|| error!(TokenEconomyError::ArithmeticOverflow))
    }
}
