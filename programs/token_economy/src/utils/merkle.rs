use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::constants::MAX_PROOF_LEN;
use crate::error::*;

/// Leaf commitment for a (claimant, amount) entitlement.
///
/// Hashed twice so a leaf preimage (32 bytes) can never be confused with an
/// interior node preimage (64 bytes).
pub fn leaf_hash(claimant: &Pubkey, amount: u64) -> [u8; 32] {
    let inner = hashv(&[&claimant.to_bytes(), &amount.to_le_bytes()]);
    hashv(&[&inner.to_bytes()]).to_bytes()
}

/// Interior node over two children, in lexicographic order.
pub fn node_hash(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    if a <= b {
        hashv(&[a, b]).to_bytes()
    } else {
        hashv(&[b, a]).to_bytes()
    }
}

/// Folds `proof` onto `leaf` in order and compares against `root`.
pub fn verify(proof: &[[u8; 32]], root: [u8; 32], leaf: [u8; 32]) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| node_hash(&node, sibling));
    computed == root
}

/**
 * Checks that (claimant, amount) is committed under `root`
 *
 * `amount` must be the value the leaf was built from. Passing a live token
 * balance instead yields a different leaf and fails with InvalidProof.
 */
pub fn verify_entitlement(
    proof: &[[u8; 32]],
    root: [u8; 32],
    claimant: &Pubkey,
    amount: u64,
) -> Result<()> {
    require!(proof.len() <= usize::from(MAX_PROOF_LEN), TokenEconomyError::InvalidProof);
    require!(
        verify(proof, root, leaf_hash(claimant, amount)),
        TokenEconomyError::InvalidProof
    );
    Ok(())
}
