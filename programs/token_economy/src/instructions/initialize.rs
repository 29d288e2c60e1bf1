use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the economy
 *
 * Creates the singleton config, the mint authority PDA and the earning token
 * mint controlled by it. The signer becomes the admin.
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(decimals: u8)]
pub struct Initialize<'info> {
    /// Singleton configuration account
    /// - Derived from: ["config"]
    #[account(
        init,
        payer = admin,
        space = EconomyConfig::LEN,
        seeds = [CONFIG_SEED.as_bytes()],
        bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// PDA signing every mint issued by the program
    /// - Derived from: ["mint_authority", config_key]
    /// CHECK: Holds no data, only used as a signer
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Earning token mint
    /// - Derived from: ["earn_mint", config_key]
    #[account(
        init,
        payer = admin,
        mint::decimals = decimals,
        mint::authority = mint_authority,
        mint::token_program = token_program,
        seeds = [EARN_MINT_SEED.as_bytes(), config.key().as_ref()],
        bump
    )]
    pub earn_mint: InterfaceAccount<'info, Mint>,

    /// Admin of the economy, pays for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Initializes the economy
 *
 * @param ctx - The account context containing config, mint and admin accounts
 * @param decimals - Decimals of the earning token
 * @param earn_amount - Earning tokens minted per earn
 * @param cooldown_period - Seconds between two earns of one principal
 * @param stake_threshold - Earning token balance required by mint_staked
 */
pub fn handle_initialize(
    ctx: Context<Initialize>,
    _decimals: u8,
    earn_amount: u64,
    cooldown_period: i64,
    stake_threshold: u64,
) -> Result<()> {
    require!(earn_amount > 0, TokenEconomyError::InvalidConfiguration);
    require!(
        cooldown_period > 0 && cooldown_period <= MAX_COOLDOWN_PERIOD,
        TokenEconomyError::InvalidConfiguration
    );
    require!(stake_threshold > 0, TokenEconomyError::InvalidConfiguration);

    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.mint_authority_bump = ctx.bumps.mint_authority;
    config.admin = ctx.accounts.admin.key();
    config.earn_mint = ctx.accounts.earn_mint.key();
    config.earn_amount = earn_amount;
    config.cooldown_period = cooldown_period;
    config.stake_threshold = stake_threshold;
    // Note: total_earned and round_count start at 0

    msg!("Economy initialized, earn mint {}", config.earn_mint);

    emit_cpi!(EconomyInitialized {
        config: config.key(),
        admin: config.admin,
        earn_mint: config.earn_mint,
        earn_amount,
        cooldown_period,
        stake_threshold,
    });

    Ok(())
}
