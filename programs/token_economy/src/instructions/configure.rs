use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for reconfiguring a supply category
 *
 * Access Control: Admin only
 *
 * Business Logic:
 * - Price and cap can be changed at any time
 * - The cap can never drop below the units already issued
 * - The issued counter is never reset, so lowering then raising the cap
 *   cannot re-open units that were already sold
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(category_id: u32)]
pub struct Configure<'info> {
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

    #[account(constraint = admin.key() == config.admin @ TokenEconomyError::OnlyAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_configure(
    ctx: Context<Configure>,
    category_id: u32,
    price: u64,
    cap: u64,
) -> Result<()> {
    let category = &mut ctx.accounts.category;
    category.reconfigure(price, cap)?;

    msg!(
        "Category {} configured: price={}, cap={}, minted={}",
        category_id,
        price,
        cap,
        category.minted
    );

    emit_cpi!(CategoryConfigured {
        category: category.key(),
        category_id,
        price,
        cap,
        minted: category.minted,
    });

    Ok(())
}
