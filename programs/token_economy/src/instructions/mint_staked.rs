use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::issue;

/**
 * Account context for the staking-gated mint
 *
 * A staker holding at least the configured threshold of earning tokens may
 * mint collectibles of a Staked category to any recipient. The balance is
 * only read for the gate; it never determines how much is minted.
 *
 * Access Control: Any signer whose earning token balance passes the threshold
 */
#[event_cpi]
#[derive(Accounts)]
pub struct MintStaked<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    #[account(
        mut,
        seeds = [CATEGORY_SEED.as_bytes(), config.key().as_ref(), category.category_id.to_le_bytes().as_ref()],
        bump = category.bump
    )]
    pub category: Account<'info, SupplyCategory>,

    #[account(
        mut,
        address = category.mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub category_mint: InterfaceAccount<'info, Mint>,

    /// Staker's earning token account, read for the threshold check
    #[account(
        token::mint = config.earn_mint,
        token::authority = staker,
        token::token_program = token_program,
    )]
    pub staker_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Owner of the receiving token account
    /// CHECK: Only used to constrain recipient_token_account
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = category_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub staker: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Mints `amount` staked collectibles to the recipient
 *
 * Validation Process:
 * 1. Category must be of kind Staked
 * 2. Staker's earning token balance must reach stake_threshold
 * 3. Issuance books the units against the category cap, then mints
 */
pub fn handle_mint_staked(ctx: Context<MintStaked>, amount: u64) -> Result<()> {
    let config = &ctx.accounts.config;

    // ===== VALIDATION PHASE =====
    ctx.accounts.category.require_kind(CategoryKind::Staked)?;

    let stake_balance = ctx.accounts.staker_token_account.amount;
    config.ensure_stake(stake_balance)?;

    let config_key = config.key();
    let seeds = &[
        MINT_AUTHORITY_SEED.as_bytes(),
        config_key.as_ref(),
        &[config.mint_authority_bump],
    ];
    let signer = &[&seeds[..]];

    // ===== ISSUANCE =====
    issue(
        &mut ctx.accounts.category,
        ctx.accounts.category_mint.to_account_info(),
        ctx.accounts.recipient_token_account.to_account_info(),
        ctx.accounts.mint_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        signer,
    )?;

    emit_cpi!(StakedMinted {
        category: ctx.accounts.category.key(),
        staker: ctx.accounts.staker.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
        stake_balance,
    });

    Ok(())
}
