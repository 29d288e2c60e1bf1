use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, claim digest domain and the fixed bounds the gates check against.
 * Run-time economics (earn amount, cooldown period, stake threshold) live in
 * the EconomyConfig account instead.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the singleton config PDA
/// - Used in: ["config"]
#[constant]
pub const CONFIG_SEED: &str = "config";

/// Seed for the mint authority PDA
/// - Used in: ["mint_authority", config_key]
/// - Signs every mint_to issued by the program
#[constant]
pub const MINT_AUTHORITY_SEED: &str = "mint_authority";

/// Seed for the earning token mint PDA
/// - Used in: ["earn_mint", config_key]
#[constant]
pub const EARN_MINT_SEED: &str = "earn_mint";

/// Seed for supply category PDA derivation
/// - Used in: ["category", config_key, category_id]
#[constant]
pub const CATEGORY_SEED: &str = "category";

/// Seed for the mint owned by a supply category
/// - Used in: ["category_mint", category_key]
#[constant]
pub const CATEGORY_MINT_SEED: &str = "category_mint";

/// Seed for per-principal cooldown PDA derivation
/// - Used in: ["cooldown", config_key, principal]
/// - One timer per principal, never a shared one
#[constant]
pub const COOLDOWN_SEED: &str = "cooldown";

/// Seed for airdrop round PDA derivation
/// - Used in: ["round", config_key, round_id]
#[constant]
pub const ROUND_SEED: &str = "round";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", round_key, receiver]
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// Seed for consumed nonce PDA derivation
/// - Used in: ["nonce", config_key, receiver, nonce]
/// - Spans all rounds: a nonce is spent for its principal forever
#[constant]
pub const NONCE_SEED: &str = "nonce";

/// Seed for collection PDA derivation
/// - Used in: ["collection", config_key, collection_id]
#[constant]
pub const COLLECTION_SEED: &str = "collection";

/// Seed for the collectible item mint of a collection
/// - Used in: ["item_mint", collection_key]
#[constant]
pub const ITEM_MINT_SEED: &str = "item_mint";

/// ===== CLAIM AUTHORIZATION CONSTANTS =====

/// Domain tag prefixed to every signed claim digest
#[constant]
pub const CLAIM_DOMAIN_SEPARATOR: &str = "token_economy:claim:v1";

/// Upper bound on merkle proof length (supports 2^32 leaves)
#[constant]
pub const MAX_PROOF_LEN: u8 = 32;

/// ===== SUPPLY CONSTANTS =====

/// Index of the first collectible in every collection
/// - Valid item ids are the closed interval [FIRST_ITEM_ID, max_supply]
#[constant]
pub const FIRST_ITEM_ID: u64 = 1;

/// ===== TIMING CONSTANTS =====

/// Longest cooldown the admin can configure (30 days)
#[constant]
pub const MAX_COOLDOWN_PERIOD: i64 = 30 * 24 * 60 * 60;
