use anchor_lang::prelude::*;

/// Event emitted when the economy is initialized
#[event]
pub struct EconomyInitialized {
    /// The config account public key
    pub config: Pubkey,
    /// Admin of the economy
    pub admin: Pubkey,
    /// Earning token mint
    pub earn_mint: Pubkey,
    /// Earning tokens minted per earn
    pub earn_amount: u64,
    /// Seconds between two earns of the same principal
    pub cooldown_period: i64,
    /// Earning token balance required by mint_staked
    pub stake_threshold: u64,
}

/// Event emitted when a principal earns
#[event]
pub struct TokensEarned {
    /// Principal who earned
    pub principal: Pubkey,
    /// Amount minted
    pub amount: u64,
    /// Earliest time this principal may earn again
    pub next_earn_at: i64,
}

/// Event emitted when a supply category is created
#[event]
pub struct CategoryCreated {
    pub category: Pubkey,
    pub category_id: u32,
    pub kind: u8,
    pub mint: Pubkey,
    pub price: u64,
    pub cap: u64,
}

/// Event emitted when a supply category is reconfigured
#[event]
pub struct CategoryConfigured {
    pub category: Pubkey,
    pub category_id: u32,
    pub price: u64,
    pub cap: u64,
    /// Issued counter, unchanged by the reconfiguration
    pub minted: u64,
}

/// Event emitted when collectibles are minted against a stake
#[event]
pub struct StakedMinted {
    pub category: Pubkey,
    /// Staker whose balance passed the threshold
    pub staker: Pubkey,
    /// Owner of the receiving token account
    pub recipient: Pubkey,
    pub amount: u64,
    /// Staker balance observed by the gate
    pub stake_balance: u64,
}

/// Event emitted when passes are purchased
#[event]
pub struct PassesPurchased {
    pub category: Pubkey,
    pub buyer: Pubkey,
    pub quantity: u64,
    /// Earning tokens burned as payment
    pub cost: u64,
    pub minted: u64,
}

/// Event emitted when an airdrop root is published
#[event]
pub struct RootPublished {
    pub round: Pubkey,
    pub round_id: u32,
    pub category: Pubkey,
    pub merkle_root: [u8; 32],
}

/// Event emitted when an entitlement is claimed
#[event]
pub struct EntitlementClaimed {
    pub round: Pubkey,
    /// Principal who signed and receives the claim
    pub receiver: Pubkey,
    /// Account that submitted the transaction
    pub relayer: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    /// Total claimed in the round by all receivers
    pub total_claimed: u64,
}

/// Event emitted when a collection is created
#[event]
pub struct CollectionCreated {
    pub collection: Pubkey,
    pub collection_id: u32,
    pub pass_mint: Pubkey,
    pub item_mint: Pubkey,
    pub max_supply: u64,
}

/// Event emitted when a collection's max supply changes
#[event]
pub struct CollectionResized {
    pub collection: Pubkey,
    pub max_supply: u64,
    pub redeemed: u64,
}

/// Event emitted when a pass is redeemed for a collectible
#[event]
pub struct CollectibleRedeemed {
    pub collection: Pubkey,
    pub redeemer: Pubkey,
    pub item_id: u64,
}
