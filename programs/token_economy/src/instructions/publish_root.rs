use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for publishing an airdrop root
 *
 * Every publication opens a new round with its own PDA and claim records.
 * Round ids are assigned from the config's round counter, the same way the
 * distributor nonce is assigned per owner.
 *
 * Access Control: Admin only
 *
 * Business Logic:
 * - Each leaf in the merkle tree represents a (claimant, amount) pair
 * - The root of a round can never be replaced; a new distribution needs a new round
 * - Claims of a round issue units of the round's Airdrop category
 */
#[event_cpi]
#[derive(Accounts)]
pub struct PublishRoot<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// The new round
    /// - Derived from: ["round", config_key, round_count + 1]
    #[account(
        init,
        payer = admin,
        space = AirdropRound::LEN,
        seeds = [
            ROUND_SEED.as_bytes(),
            config.key().as_ref(),
            config.round_count.saturating_add(1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub round: Account<'info, AirdropRound>,

    #[account(
        seeds = [CATEGORY_SEED.as_bytes(), config.key().as_ref(), category.category_id.to_le_bytes().as_ref()],
        bump = category.bump
    )]
    pub category: Account<'info, SupplyCategory>,

    #[account(
        mut,
        constraint = admin.key() == config.admin @ TokenEconomyError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/**
 * Publishes the merkle root of a new airdrop round
 *
 * @param merkle_root - 32-byte root over every (claimant, amount) leaf
 *
 * Validation Rules:
 * - Merkle root cannot be all zeros
 * - Category must be of kind Airdrop
 */
pub fn handle_publish_root(ctx: Context<PublishRoot>, merkle_root: [u8; 32]) -> Result<()> {
    require!(merkle_root != [0; 32], TokenEconomyError::InvalidMerkleRoot);
    ctx.accounts.category.require_kind(CategoryKind::Airdrop)?;

    let config = &mut ctx.accounts.config;
    let round_id = config.next_round_id()?;
    config.round_count = round_id;

    let round = &mut ctx.accounts.round;
    round.bump = ctx.bumps.round;
    round.round_id = round_id;
    round.category = ctx.accounts.category.key();
    round.merkle_root = merkle_root;
    round.publisher = ctx.accounts.admin.key();
    round.published_at = Clock::get()?.unix_timestamp;
    // Note: total_claimed starts at 0

    msg!("Published airdrop round {}", round_id);

    emit_cpi!(RootPublished {
        round: round.key(),
        round_id,
        category: round.category,
        merkle_root,
    });

    Ok(())
}
