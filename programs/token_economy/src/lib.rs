use anchor_lang::prelude::*;

declare_id!("KLFtGzJCwaBf2bU6syM39E9ECkETyPDYGvHdKP7KGrw");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::CategoryKind;

/**
 * Token Economy Program
 *
 * A Solana program for an earning token and the collectibles issued against it.
 *
 * Key Features:
 * - Earning token minted on demand, rate limited per principal
 * - Staking-gated collectible mint (earning token balance threshold)
 * - Delegated airdrop claims: merkle commitment plus receiver ed25519 signature,
 *   submitted by any relayer, claimable exactly once per round
 * - Capped pass sales paid in earning tokens
 * - Event collections redeeming passes for numbered collectibles
 *
 * Architecture:
 * - Config PDA: admin, earning token mint and run-time parameters
 * - Supply Category PDAs: per-category issued counter and cap, each owning a mint
 * - Cooldown PDAs: one timer per principal
 * - Airdrop Round PDAs: immutable commitment root per distribution
 * - Claim Status / Nonce PDAs: per-receiver claim record and consumed nonces
 * - Collection PDAs: item cursor over [1, max_supply]
 *
 * Claim Workflow:
 * 1. Admin creates an Airdrop category and publishes a root for it
 * 2. Receiver signs (round, receiver, amount, nonce, deadline)
 * 3. Relayer submits [ed25519 verify, claim] in one transaction
 * 4. Program authenticates, verifies the proof, commits the record, then mints
 */
#[program]
pub mod token_economy {
    use super::*;

    /**
     * Initializes the economy
     *
     * Creates the config, the mint authority PDA and the earning token mint.
     *
     * Access Control: First caller becomes admin
     */
    pub fn initialize(
        ctx: Context<Initialize>,
        decimals: u8,
        earn_amount: u64,
        cooldown_period: i64,
        stake_threshold: u64,
    ) -> Result<()> {
        handle_initialize(ctx, decimals, earn_amount, cooldown_period, stake_threshold)
    }

    /**
     * Mints the configured earn amount to the caller
     *
     * Access Control: Any signer, once per cooldown period per principal
     */
    pub fn earn(ctx: Context<Earn>) -> Result<()> {
        handle_earn(ctx)
    }

    /**
     * Creates a supply category and its mint
     *
     * Access Control: Admin only
     */
    pub fn create_category(
        ctx: Context<CreateCategory>,
        category_id: u32,
        kind: CategoryKind,
        price: u64,
        cap: u64,
    ) -> Result<()> {
        handle_create_category(ctx, category_id, kind, price, cap)
    }

    /**
     * Changes a category's price and cap
     *
     * The cap cannot drop below the units already issued and the issued
     * counter is never reset.
     *
     * Access Control: Admin only
     */
    pub fn configure(ctx: Context<Configure>, category_id: u32, price: u64, cap: u64) -> Result<()> {
        handle_configure(ctx, category_id, price, cap)
    }

    /**
     * Mints collectibles of a Staked category to a recipient
     *
     * Access Control: Signers holding at least stake_threshold earning tokens
     */
    pub fn mint_staked(ctx: Context<MintStaked>, amount: u64) -> Result<()> {
        handle_mint_staked(ctx, amount)
    }

    /**
     * Buys passes of a Sale category, burning price * quantity earning tokens
     *
     * Access Control: Any signer
     */
    pub fn purchase(ctx: Context<Purchase>, category_id: u32, quantity: u64) -> Result<()> {
        handle_purchase(ctx, category_id, quantity)
    }

    /**
     * Opens a new airdrop round with the given merkle root
     *
     * Access Control: Admin only
     */
    pub fn publish_root(ctx: Context<PublishRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_publish_root(ctx, merkle_root)
    }

    /**
     * Claims an airdrop entitlement on behalf of its receiver
     *
     * @param amount - Entitlement amount committed in the merkle leaf
     * @param nonce - Single-use value signed by the receiver
     * @param deadline - Signature expiry (unix timestamp)
     * @param proof - Array of 32-byte hashes forming the merkle proof
     * @param signature - Receiver's ed25519 signature over the claim digest
     *
     * Access Control: Any relayer with a valid receiver signature and proof
     */
    pub fn claim(
        ctx: Context<Claim>,
        amount: u64,
        nonce: u64,
        deadline: i64,
        proof: Vec<[u8; 32]>,
        signature: [u8; 64],
    ) -> Result<()> {
        handle_claim(ctx, amount, nonce, deadline, proof, signature)
    }

    /**
     * Creates an event collection redeemable with passes of a Sale category
     *
     * Access Control: Admin only
     */
    pub fn create_collection(
        ctx: Context<CreateCollection>,
        collection_id: u32,
        max_supply: u64,
    ) -> Result<()> {
        handle_create_collection(ctx, collection_id, max_supply)
    }

    /**
     * Changes a collection's max supply, never below the items redeemed
     *
     * Access Control: Admin only
     */
    pub fn resize_collection(
        ctx: Context<ResizeCollection>,
        collection_id: u32,
        max_supply: u64,
    ) -> Result<()> {
        handle_resize_collection(ctx, collection_id, max_supply)
    }

    /**
     * Burns one pass and mints the next collectible of the collection
     *
     * Access Control: Any pass holder
     */
    pub fn redeem(ctx: Context<Redeem>, collection_id: u32) -> Result<()> {
        handle_redeem(ctx, collection_id)
    }
}
