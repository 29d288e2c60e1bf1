use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{burn_token, issue};

/**
 * Account context for buying passes of a Sale category
 *
 * The buyer pays price * quantity earning tokens, which are burned, and
 * receives `quantity` passes. The sale is capped by the category's supply
 * ledger.
 *
 * Access Control: Any signer
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(category_id: u32)]
pub struct Purchase<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    #[account(
        mut,
        seeds = [CATEGORY_SEED.as_bytes(), config.key().as_ref(), category_id.to_le_bytes().as_ref()],
        bump = category.bump
    )]
    pub category: Account<'info, SupplyCategory>,

    #[account(
        mut,
        address = category.mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub category_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        address = config.earn_mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub earn_mint: InterfaceAccount<'info, Mint>,

    /// Buyer's earning token account, debited by the burn
    #[account(
        mut,
        token::mint = earn_mint,
        token::authority = buyer,
        token::token_program = token_program,
    )]
    pub buyer_earn_account: InterfaceAccount<'info, TokenAccount>,

    /// Buyer's pass account, credited by the mint
    #[account(
        mut,
        token::mint = category_mint,
        token::authority = buyer,
        token::token_program = token_program,
    )]
    pub buyer_pass_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub buyer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_purchase(ctx: Context<Purchase>, _category_id: u32, quantity: u64) -> Result<()> {
    // ===== VALIDATION PHASE =====
    let category = &ctx.accounts.category;
    category.require_kind(CategoryKind::Sale)?;
    let cost = category.cost_of(quantity)?;
    category.ensure_capacity(quantity)?;
    require!(
        ctx.accounts.buyer_earn_account.amount >= cost,
        TokenEconomyError::InvalidAmount
    );

    // ===== PAYMENT =====
    burn_token(
        ctx.accounts.buyer.to_account_info(),
        ctx.accounts.earn_mint.to_account_info(),
        ctx.accounts.buyer_earn_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        cost,
    )?;

    let config = &ctx.accounts.config;
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
        ctx.accounts.buyer_pass_account.to_account_info(),
        ctx.accounts.mint_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        quantity,
        signer,
    )?;

    emit_cpi!(PassesPurchased {
        category: ctx.accounts.category.key(),
        buyer: ctx.accounts.buyer.key(),
        quantity,
        cost,
        minted: ctx.accounts.category.minted,
    });

    Ok(())
}
