use anchor_lang::prelude::*;
use crate::constants::FIRST_ITEM_ID;
use crate::error::*;

/**
 * Event collection account
 *
 * A capped set of collectibles redeemable one-for-one against passes from a
 * Sale category. Items are numbered from FIRST_ITEM_ID to max_supply
 * inclusive, so exactly max_supply items can be redeemed.
 *
 * Derivation: ["collection", config_key, collection_id]
 */
#[account]
#[derive(Default, Debug)]
pub struct Collection {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Admin chosen identifier, part of the PDA seeds
    pub collection_id: u32,

    /// Mint of the pass burned on redemption
    pub pass_mint: Pubkey,

    /// Mint of the collectible issued on redemption
    pub item_mint: Pubkey,

    /// Highest valid item id
    pub max_supply: u64,

    /// Id the next redemption receives
    /// - Starts at FIRST_ITEM_ID, sold out once it passes max_supply
    pub next_item_id: u64,
}

impl Collection {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Collection>();

    /// Number of items redeemed so far
    pub fn redeemed(&self) -> u64 {
        self.next_item_id.saturating_sub(FIRST_ITEM_ID)
    }

    /// Redemption gate: the redeemer must hold at least one pass.
    pub fn ensure_pass_holder(&self, pass_balance: u64) -> Result<()> {
        require!(pass_balance >= 1, TokenEconomyError::Unauthorized);
        Ok(())
    }

    pub fn is_sold_out(&self) -> bool {
        self.next_item_id > self.max_supply
    }

    /// Claims the next item id, advancing the cursor.
    pub fn take_next_item(&mut self) -> Result<u64> {
        require!(!self.is_sold_out(), TokenEconomyError::SupplyExceeded);
        let item_id = self.next_item_id;
        self.next_item_id = item_id
            .checked_add(1)
            .ok_or(TokenEconomyError::ArithmeticOverflow)?;
        Ok(item_id)
    }

    /// Changes max_supply without touching the cursor.
    pub fn resize(&mut self, max_supply: u64) -> Result<()> {
        require!(
            max_supply > 0 && max_supply >= self.redeemed(),
            TokenEconomyError::InvalidConfiguration
        );
        self.max_supply = max_supply;
        Ok(())
    }
}
