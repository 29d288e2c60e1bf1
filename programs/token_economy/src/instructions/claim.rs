use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{
    authenticate_claim, issue, load_signature_instruction, verify_entitlement, ClaimMessage,
};

/**
 * Account context for claiming an airdrop entitlement
 *
 * The receiver signs the claim off-chain; anyone (a relayer) may submit it.
 * The transaction must carry an ed25519 program instruction verifying the
 * receiver's signature over the claim digest, placed directly before this
 * instruction.
 *
 * Access Control: Any relayer carrying a valid receiver signature and merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(amount: u64, nonce: u64)]
pub struct Claim<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, EconomyConfig>,

    /// The round holding the commitment root
    /// - Will be modified to update total_claimed
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), config.key().as_ref(), round.round_id.to_le_bytes().as_ref()],
        bump = round.bump
    )]
    pub round: Account<'info, AirdropRound>,

    /// Airdrop category the round issues from
    #[account(
        mut,
        address = round.category
    )]
    pub category: Account<'info, SupplyCategory>,

    #[account(
        mut,
        address = category.mint @ TokenEconomyError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub category_mint: InterfaceAccount<'info, Mint>,

    /// Claim record of the receiver in this round
    /// - Derived from: ["claim", round_key, receiver]
    #[account(
        init_if_needed,
        payer = relayer,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), round.key().as_ref(), receiver.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Nonce set entry of the receiver
    /// - Derived from: ["nonce", config_key, receiver, nonce]
    #[account(
        init_if_needed,
        payer = relayer,
        space = NonceState::LEN,
        seeds = [NONCE_SEED.as_bytes(), config.key().as_ref(), receiver.key().as_ref(), nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub nonce_state: Account<'info, NonceState>,

    /// The entitled principal, who signed the claim
    /// CHECK: Authorization is established by the ed25519 signature check
    pub receiver: UncheckedAccount<'info>,

    /// Receiver's token account for the claimed collectibles
    /// - Must be owned by the receiver, so a relayer cannot redirect the claim
    #[account(
        mut,
        token::mint = category_mint,
        token::authority = receiver,
        token::token_program = token_program,
    )]
    pub receiver_token_account: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA mint authority, validated by seeds
    #[account(
        seeds = [MINT_AUTHORITY_SEED.as_bytes(), config.key().as_ref()],
        bump = config.mint_authority_bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    /// Submitter of the transaction, pays for the claim and nonce records
    #[account(mut)]
    pub relayer: Signer<'info>,

    /// CHECK: Instructions sysvar, validated by address
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,

    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Runs every claim gate in order and commits the claim records
 *
 * Order:
 * 1. Authenticate: receiver signed (round, receiver, amount, nonce, deadline)
 * 2. Verify merkle proof for (receiver, amount) against the round root
 * 3. Check supply capacity, the claim record and the nonce
 * 4. Commit claim record and nonce
 *
 * Each step short-circuits, and nothing is written before step 4, so a
 * rejected claim leaves every record as it was. Issuance is left to the
 * caller and must happen after this returns.
 */
#[allow(clippy::too_many_arguments)]
pub fn authorize_claim(
    signature_ix: &Instruction,
    message: &ClaimMessage,
    signature: &[u8; 64],
    program_id: &Pubkey,
    proof: &[[u8; 32]],
    merkle_root: [u8; 32],
    category: &SupplyCategory,
    claim_status: &mut ClaimStatus,
    nonce_state: &mut NonceState,
    now: i64,
) -> Result<()> {
    // ===== SIGNATURE AUTHENTICATION =====
    authenticate_claim(signature_ix, message, signature, program_id, now)?;

    // ===== MERKLE PROOF VERIFICATION =====
    // The amount comes from the signed, committed leaf, never from a balance
    verify_entitlement(proof, merkle_root, &message.receiver, message.amount)?;

    // ===== CLAIM STATE MACHINE =====
    category.ensure_capacity(message.amount)?;
    commit_claim(claim_status, nonce_state, message.amount, now)
}

/**
 * Processes an airdrop claim
 *
 * @param amount - Entitlement amount committed in the merkle leaf
 * @param nonce - Single-use value bound into the signature
 * @param deadline - Unix timestamp after which the signature is void
 * @param proof - Array of 32-byte hashes forming the merkle proof
 * @param signature - Receiver's ed25519 signature over the claim digest
 *
 * Validation Process:
 * 1. Authenticate: receiver signed (round, receiver, amount, nonce, deadline)
 * 2. Verify merkle proof for (receiver, amount) against the round root
 * 3. Check the claim record, nonce and supply cap
 * 4. Commit claim record and nonce, then issue
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    amount: u64,
    nonce: u64,
    deadline: i64,
    proof: Vec<[u8; 32]>,
    signature: [u8; 64],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let round_key = ctx.accounts.round.key();
    let receiver_key = ctx.accounts.receiver.key();

    require!(amount > 0, TokenEconomyError::InvalidAmount);

    let message = ClaimMessage {
        round: round_key,
        receiver: receiver_key,
        amount,
        nonce,
        deadline,
    };
    let signature_ix =
        load_signature_instruction(&ctx.accounts.instructions_sysvar.to_account_info())?;
    let merkle_root = ctx.accounts.round.merkle_root;

    authorize_claim(
        &signature_ix,
        &message,
        &signature,
        ctx.program_id,
        &proof,
        merkle_root,
        &ctx.accounts.category,
        &mut ctx.accounts.claim_status,
        &mut ctx.accounts.nonce_state,
        now,
    )?;

    // ===== ROUND ACCOUNTING =====

    let round = &mut ctx.accounts.round;
    round.total_claimed = round
        .total_claimed
        .checked_add(amount)
        .ok_or(TokenEconomyError::ArithmeticOverflow)?;
    let total_claimed = round.total_claimed;

    // ===== INTERACTIONS PHASE (Issuance) =====

    let config = &ctx.accounts.config;
    let config_key = config.key();
    let seeds = &[
        MINT_AUTHORITY_SEED.as_bytes(),
        config_key.as_ref(),
        &[config.mint_authority_bump],
    ];
    let signer = &[&seeds[..]];

    issue(
        &mut ctx.accounts.category,
        ctx.accounts.category_mint.to_account_info(),
        ctx.accounts.receiver_token_account.to_account_info(),
        ctx.accounts.mint_authority.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        signer,
    )?;

    emit_cpi!(EntitlementClaimed {
        round: round_key,
        receiver: receiver_key,
        relayer: ctx.accounts.relayer.key(),
        amount,
        nonce,
        total_claimed,
    });

    Ok(())
}
