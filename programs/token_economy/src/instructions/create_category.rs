use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a supply category
 *
 * Creates the category's ledger entry and its 0-decimal mint, whose mint
 * authority is the program PDA. Units of the category can only be created
 * through the issuance path, so the ledger counter always equals the mint's
 * supply.
 *
 * Access Control: Admin only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(category_id: u32)]
pub struct CreateCategory<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// Supply ledger entry
    /// - Derived from: ["category", config_key, category_id]
    #[account(
        init,
        payer = admin,
        space = SupplyCategory::LEN,
        seeds = [CATEGORY_SEED.as_bytes(), config.key().as_ref(), category_id.to_le_bytes().as_ref()],
        bump
    )]
    pub category: Account<'info, SupplyCategory>,

    /// Mint of the category's units
    /// - Derived from: ["category_mint", category_key]
    #[account(
        init,
        payer = admin,
        mint::decimals = 0,
        mint::authority = mint_authority,
        mint::token_program = token_program,
        seeds = [CATEGORY_MINT_SEED.as_bytes(), category.key().as_ref()],
        bump
    )]
    pub category_mint: InterfaceAccount<'info, Mint>,

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

/**
 * Creates a supply category
 *
 * @param category_id - Identifier used in the category PDA seeds
 * @param kind - Entry point allowed to issue from this category
 * @param price - Price per unit in earning tokens, 0 disables purchase
 * @param cap - Maximum units ever issued, must be positive
 */
pub fn handle_create_category(
    ctx: Context<CreateCategory>,
    category_id: u32,
    kind: CategoryKind,
    price: u64,
    cap: u64,
) -> Result<()> {
    require!(cap > 0, TokenEconomyError::InvalidConfiguration);

    let category = &mut ctx.accounts.category;
    category.bump = ctx.bumps.category;
    category.category_id = category_id;
    category.kind = kind;
    category.mint = ctx.accounts.category_mint.key();
    category.price = price;
    category.cap = cap;
    category.minted = 0;

    emit_cpi!(CategoryCreated {
        category: category.key(),
        category_id,
        kind: kind as u8,
        mint: category.mint,
        price,
        cap,
    });

    Ok(())
}
