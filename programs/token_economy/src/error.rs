use anchor_lang::prelude::*;

#[error_code]
pub enum TokenEconomyError {
    // Access control errors
    #[msg("Only admin can perform this action")]
    OnlyAdmin,
    #[msg("Eligibility precondition not met")]
    Unauthorized,

    // Rate limiting errors
    #[msg("Cooldown has not elapsed for this principal")]
    RateLimited,

    // Claim authorization errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Invalid claim signature")]
    InvalidSignature,
    #[msg("Claim signature has expired")]
    Expired,
    #[msg("Entitlement already claimed")]
    AlreadyClaimed,
    #[msg("Nonce already consumed")]
    NonceConsumed,

    // Supply errors
    #[msg("Supply cap exceeded")]
    SupplyExceeded,
    #[msg("Invalid configuration")]
    InvalidConfiguration,
    #[msg("Category kind does not allow this operation")]
    CategoryKindMismatch,
    #[msg("Category is not for sale")]
    NotForSale,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the expected mint")]
    TokenMintMismatch,
}
