use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating an event collection
 *
 * A collection turns passes of a Sale category into numbered collectibles.
 * Its item mint is owned by the program PDA and only minted through redeem.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(collection_id: u32)]
pub struct CreateCollection<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// Sale category whose passes are redeemed
    #[account(
        seeds = [CATEGORY_SEED.as_bytes(), config.key().as_ref(), pass_category.category_id.to_le_bytes().as_ref()],
        bump = pass_category.bump
    )]
    pub pass_category: Account<'info, SupplyCategory>,

    /// - Derived from: ["collection", config_key, collection_id]
    #[account(
        init,
        payer = admin,
        space = Collection::LEN,
        seeds = [COLLECTION_SEED.as_bytes(), config.key().as_ref(), collection_id.to_le_bytes().as_ref()],
        bump
    )]
    pub collection: Account<'info, Collection>,

    /// - Derived from: ["item_mint", collection_key]
    #[account(
        init,
        payer = admin,
        mint::decimals = 0,
        mint::authority = mint_authority,
        mint::token_program = token_program,
        seeds = [ITEM_MINT_SEED.as_bytes(), collection.key().as_ref()],
        bump
    )]
    pub item_mint: InterfaceAccount<'info, Mint>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = admin.key() == config.admin @ TokenEconomyError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,

    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_create_collection(
    ctx: Context<CreateCollection>,
    collection_id: u32,
    max_supply: u64,
) -> Result<()> {
    ctx.accounts.pass_category.require_kind(CategoryKind::Sale)?;
    require!(max_supply > 0, TokenEconomyError::InvalidConfiguration);

    let collection = &mut ctx.accounts.collection;
    collection.bump = ctx.bumps.collection;
    collection.collection_id = collection_id;
    collection.pass_mint = ctx.accounts.pass_category.mint;
    collection.item_mint = ctx.accounts.item_mint.key();
    collection.max_supply = max_supply;
    collection.next_item_id = FIRST_ITEM_ID;

    emit_cpi!(CollectionCreated {
        collection: collection.key(),
        collection_id,
        pass_mint: collection.pass_mint,
        item_mint: collection.item_mint,
        max_supply,
    });

    Ok(())
}
