use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::SupplyCategory;
use super::mint_token;

/**
 * Issues `quantity` units of a supply category to `recipient_account`
 *
 * The caller is responsible for every eligibility gate (stake threshold,
 * claim authorization, payment). This only books the units against the
 * category cap and then mints them, in that order.
 */
pub fn issue<'a>(
    category: &mut SupplyCategory,
    mint: AccountInfo<'a>,
    recipient_account: AccountInfo<'a>,
    mint_authority: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    quantity: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    require_keys_eq!(mint.key(), category.mint, TokenEconomyError::TokenMintMismatch);

    category.record_issue(quantity)?;
    msg!(
        "Category {} issued {} ({} remaining)",
        category.category_id,
        quantity,
        category.remaining()
    );

    mint_token(
        mint_authority,
        mint,
        recipient_account,
        token_program,
        quantity,
        signer_seeds,
    )
}
