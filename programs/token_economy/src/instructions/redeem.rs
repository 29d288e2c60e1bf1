use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{burn_token, mint_token};

/**
 * Account context for redeeming a pass
 *
 * Burns one pass and mints the next numbered collectible of the collection.
 *
 * Access Control: Any pass holder
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(collection_id: u32)]
pub struct Redeem<'info> {
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

    #[account(
        mut,
        address = collection.pass_mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub pass_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        address = collection.item_mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub item_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = pass_mint,
        token::authority = redeemer,
        token::token_program = token_program,
    )]
    pub redeemer_pass_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = item_mint,
        token::authority = redeemer,
        token::token_program = token_program,
    )]
    pub redeemer_item_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub redeemer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Redeems one pass for the next collectible
 *
 * The item id is taken (and the cursor advanced) before either token
 * movement, so a sold-out collection rejects the redemption without burning.
 */
pub fn handle_redeem(ctx: Context<Redeem>, _collection_id: u32) -> Result<()> {
    // ===== VALIDATION PHASE =====
    ctx.accounts
        .collection
        .ensure_pass_holder(ctx.accounts.redeemer_pass_account.amount)?;

    // ===== EFFECTS PHASE =====
    let collection = &mut ctx.accounts.collection;
    let item_id = collection.take_next_item()?;
    let collection_key = collection.key();

    msg!(
        "Redeeming item {} of {} in collection {}",
        item_id,
        collection.max_supply,
        collection.collection_id
    );

    // ===== INTERACTIONS PHASE =====
    burn_token(
        ctx.accounts.redeemer.to_account_info(),
        ctx.accounts.pass_mint.to_account_info(),
        ctx.accounts.redeemer_pass_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
    )?;

    let config = &ctx.accounts.config;
    let config_key = config.key();
    let seeds = &[
        MINT_AUTHORITY_SEED.as_bytes(),
        config_key.as_ref(),
        &[config.mint_authority_bump],
    ];
    let signer = &[&seeds[..]];

    mint_token(
        ctx.accounts.mint_authority.to_account_info(),
        ctx.accounts.item_mint.to_account_info(),
        ctx.accounts.redeemer_item_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        1,
        signer,
    )?;

    emit_cpi!(CollectibleRedeemed {
        collection: collection_key,
        redeemer: ctx.accounts.redeemer.key(),
        item_id,
    });

    Ok(())
}
