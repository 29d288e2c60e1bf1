use anchor_lang::prelude::*;
use crate::error::*;

/// What a supply category may be issued through
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryKind {
    /// Passes sold for earning tokens via purchase
    #[default]
    Sale,
    /// Collectibles minted via mint_staked
    Staked,
    /// Collectibles minted via claim
    Airdrop,
}

/**
 * Supply category account
 *
 * The supply ledger entry for one category of units. Owns a 0-decimal mint
 * and the counter of units ever issued from it.
 *
 * Derivation: ["category", config_key, category_id]
 *
 * Invariants:
 * - minted <= cap after every operation
 * - minted only ever increases, and only through record_issue
 * - reconfigure never touches minted
 */
#[account]
#[derive(Default, Debug)]
pub struct SupplyCategory {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Admin chosen identifier, part of the PDA seeds
    pub category_id: u32,

    /// Which entry point may issue from this category
    pub kind: CategoryKind,

    /// Mint of the units in this category
    pub mint: Pubkey,

    /// Price per unit in earning tokens (Sale categories only)
    pub price: u64,

    /// Maximum number of units that can ever be issued
    pub cap: u64,

    /// Number of units issued so far
    pub minted: u64,
}

impl SupplyCategory {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<SupplyCategory>();

    /// Replaces price and cap, keeping the issued counter.
    pub fn reconfigure(&mut self, price: u64, cap: u64) -> Result<()> {
        require!(cap >= self.minted, TokenEconomyError::InvalidConfiguration);
        self.price = price;
        self.cap = cap;
        Ok(())
    }

    /// Units still available under the cap
    pub fn remaining(&self) -> u64 {
        self.cap.saturating_sub(self.minted)
    }

    /// Returns the counter value issuing `quantity` more units would produce.
    pub fn ensure_capacity(&self, quantity: u64) -> Result<u64> {
        require!(quantity > 0, TokenEconomyError::InvalidAmount);
        let new_minted = self
            .minted
            .checked_add(quantity)
            .ok_or(TokenEconomyError::ArithmeticOverflow)?;
        require!(new_minted <= self.cap, TokenEconomyError::SupplyExceeded);
        Ok(new_minted)
    }

    /// Books `quantity` units as issued. Callers mint only after this succeeds.
    pub fn record_issue(&mut self, quantity: u64) -> Result<()> {
        self.minted = self.ensure_capacity(quantity)?;
        Ok(())
    }

    pub fn require_kind(&self, kind: CategoryKind) -> Result<()> {
        require!(self.kind == kind, TokenEconomyError::CategoryKindMismatch);
        Ok(())
    }

    /// Total price of `quantity` units
    pub fn cost_of(&self, quantity: u64) -> Result<u64> {
        require!(self.price > 0, TokenEconomyError::NotForSale);
        self.price
            .checked_mul(quantity)
            .ok_or_else(|| error!(TokenEconomyError::ArithmeticOverflow))
    }
}
