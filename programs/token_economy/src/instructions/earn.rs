use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::mint_token;

/**
 * Account context for earning tokens
 *
 * Mints the configured earn amount to the signer, at most once per cooldown
 * period per signer.
 *
 * Access Control: Any signer, rate limited per principal
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Earn<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// Cooldown timer of this principal
    /// - Derived from: ["cooldown", config_key, principal]
    #[account(
        init_if_needed,
        payer = principal,
        space = CooldownState::LEN,
        seeds = [COOLDOWN_SEED.as_bytes(), config.key().as_ref(), principal.key().as_ref()],
        bump
    )]
    pub cooldown: Account<'info, CooldownState>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = config.earn_mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub earn_mint: InterfaceAccount<'info, Mint>,

    /// Principal's earning token account
    #[account(
        mut,
        token::mint = earn_mint,
        token::authority = principal,
        token::token_program = token_program,
    )]
    pub principal_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub principal: Signer<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_earn(ctx: Context<Earn>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;

    // ===== COOLDOWN GATE =====
    let cooldown_period = config.cooldown_period;
    ctx.accounts.cooldown.try_consume(now, cooldown_period)?;

    // ===== EFFECTS =====
    let earn_amount = config.earn_amount;
    config.total_earned = config
        .total_earned
        .checked_add(earn_amount)
        .ok_or(TokenEconomyError::ArithmeticOverflow)?;

    let config_key = config.key();
    let seeds = &[
        MINT_AUTHORITY_SEED.as_bytes(),
        config_key.as_ref(),
        &[config.mint_authority_bump],
    ];
    let signer = &[&seeds[..]];

    // ===== INTERACTIONS =====
    mint_token(
        ctx.accounts.mint_authority.to_account_info(),
        ctx.accounts.earn_mint.to_account_info(),
        ctx.accounts.principal_token_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        earn_amount,
        signer,
    )?;

    emit_cpi!(TokensEarned {
        principal: ctx.accounts.principal.key(),
        amount: earn_amount,
        next_earn_at: now.saturating_add(cooldown_period),
    });

    Ok(())
}
