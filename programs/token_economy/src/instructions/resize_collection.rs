use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/// Changes a collection's max supply. The redemption cursor is kept, so items
/// already redeemed stay counted.
#[event_cpi]
#[derive(Accounts)]
#[instruction(collection_id: u32)]
pub struct ResizeCollection<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    #[account(
        mut,
        seeds = [COLLECTION_SEED.as_bytes(), config.key().as_ref(), collection_id.to_le_bytes().as_ref()],
        bump = collection.bump
    )]
    pub collection: Account<'info, Collection>,

    #[account(constraint = admin.key() == config.admin @ TokenEconomyError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_resize_collection(
    ctx: Context<ResizeCollection>,
    _collection_id: u32,
    max_supply: u64,
) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    collection.resize(max_supply)?;

    emit_cpi!(CollectionResized {
        collection: collection.key(),
        max_supply,
        redeemed: collection.redeemed(),
    });

    Ok(())
}
