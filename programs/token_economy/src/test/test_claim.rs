#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use anchor_lang::prelude::*;
    use crate::error::TokenEconomyError;
    use crate::instructions::authorize_claim;
    use crate::state::*;
    use crate::test::assert_error;
    use crate::test::test_merkle::{Entitlement, EntitlementTree};
    use crate::test::test_signature::ed25519_instruction;
    use crate::utils::ClaimMessage;

    const NOW: i64 = 1_700_000_000;
    const SIGNATURE: [u8; 64] = [9u8; 64];

    /// In-memory stand-in for the claim and nonce PDAs of one economy
    struct Ledger {
        category: SupplyCategory,
        claims: HashMap<(Pubkey, Pubkey), ClaimStatus>,
        nonces: HashMap<(Pubkey, u64), NonceState>,
    }

    impl Ledger {
        fn new(cap: u64) -> Self {
            Self {
                category: SupplyCategory {
                    bump: 255,
                    category_id: 3,
                    kind: CategoryKind::Airdrop,
                    mint: Pubkey::new_unique(),
                    price: 0,
                    cap,
                    minted: 0,
                },
                claims: HashMap::new(),
                nonces: HashMap::new(),
            }
        }

        /// Receiver signs `message`, a relayer submits it with `proof`
        fn claim(&mut self, message: ClaimMessage, root: [u8; 32], proof: &[[u8; 32]]) -> Result<()> {
            let ix = ed25519_instruction(&message.receiver, &SIGNATURE, &message.digest(&crate::ID));
            self.submit(&ix, message, root, proof)
        }

        fn submit(
            &mut self,
            ix: &anchor_lang::solana_program::instruction::Instruction,
            message: ClaimMessage,
            root: [u8; 32],
            proof: &[[u8; 32]],
        ) -> Result<()> {
            let claim_status = self
                .claims
                .entry((message.round, message.receiver))
                .or_default();
            let nonce_state = self
                .nonces
                .entry((message.receiver, message.nonce))
                .or_default();

            authorize_claim(
                ix,
                &message,
                &SIGNATURE,
                &crate::ID,
                proof,
                root,
                &self.category,
                claim_status,
                nonce_state,
                NOW,
            )?;
            self.category.record_issue(message.amount)
        }

        fn claimed(&self, round: Pubkey, receiver: Pubkey) -> bool {
            self.claims
                .get(&(round, receiver))
                .map(|c| c.claimed)
                .unwrap_or(false)
        }

        fn nonce_consumed(&self, receiver: Pubkey, nonce: u64) -> bool {
            self.nonces
                .get(&(receiver, nonce))
                .map(|n| n.consumed)
                .unwrap_or(false)
        }
    }

    struct Round {
        key: Pubkey,
        tree: EntitlementTree,
    }

    fn round(entitlements: &[Entitlement]) -> Round {
        Round {
            key: Pubkey::new_unique(),
            tree: EntitlementTree::new(entitlements),
        }
    }

    fn message(round: &Round, receiver: Pubkey, amount: u64, nonce: u64) -> ClaimMessage {
        ClaimMessage {
            round: round.key,
            receiver,
            amount,
            nonce,
            deadline: NOW + 600,
        }
    }

    #[test]
    fn test_claim_uses_committed_amount_not_live_balance() {
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let r = round(&[
            Entitlement { claimant: alice, amount: 1 },
            Entitlement { claimant: bob, amount: 3 },
        ]);
        let mut ledger = Ledger::new(100);
        let proof = r.tree.proof(0).unwrap();

        // Alice holds 5 tokens by now, but the root committed 1
        let live_balance = 5;
        assert_error(
            ledger.claim(message(&r, alice, live_balance, 1), r.tree.root(), &proof),
            TokenEconomyError::InvalidProof,
        );
        assert!(!ledger.claimed(r.key, alice));
        assert!(!ledger.nonce_consumed(alice, 1));
        assert_eq!(ledger.category.minted, 0);

        ledger
            .claim(message(&r, alice, 1, 1), r.tree.root(), &proof)
            .unwrap();
        assert!(ledger.claimed(r.key, alice));
        assert!(ledger.nonce_consumed(alice, 1));
        assert_eq!(ledger.category.minted, 1);
        assert_eq!(ledger.claims[&(r.key, alice)].claimed_amount, 1);
        assert_eq!(ledger.claims[&(r.key, alice)].claimed_at, NOW);
    }

    #[test]
    fn test_second_claim_rejected_even_with_fresh_nonce() {
        let alice = Pubkey::new_unique();
        let r = round(&[
            Entitlement { claimant: alice, amount: 4 },
            Entitlement { claimant: Pubkey::new_unique(), amount: 2 },
        ]);
        let mut ledger = Ledger::new(100);
        let proof = r.tree.proof(0).unwrap();

        ledger
            .claim(message(&r, alice, 4, 10), r.tree.root(), &proof)
            .unwrap();

        assert_error(
            ledger.claim(message(&r, alice, 4, 10), r.tree.root(), &proof),
            TokenEconomyError::AlreadyClaimed,
        );
        assert_error(
            ledger.claim(message(&r, alice, 4, 11), r.tree.root(), &proof),
            TokenEconomyError::AlreadyClaimed,
        );
        assert!(!ledger.nonce_consumed(alice, 11));
        assert_eq!(ledger.category.minted, 4);
    }

    #[test]
    fn test_nonce_cannot_be_replayed_in_later_round() {
        let alice = Pubkey::new_unique();
        let first = round(&[Entitlement { claimant: alice, amount: 2 }]);
        let second = round(&[Entitlement { claimant: alice, amount: 7 }]);
        let mut ledger = Ledger::new(100);

        ledger
            .claim(message(&first, alice, 2, 5), first.tree.root(), &first.tree.proof(0).unwrap())
            .unwrap();

        let proof = second.tree.proof(0).unwrap();
        assert_error(
            ledger.claim(message(&second, alice, 7, 5), second.tree.root(), &proof),
            TokenEconomyError::NonceConsumed,
        );
        // The rejected attempt must not have marked the second round claimed
        assert!(!ledger.claimed(second.key, alice));

        ledger
            .claim(message(&second, alice, 7, 6), second.tree.root(), &proof)
            .unwrap();
        assert_eq!(ledger.category.minted, 9);
    }

    #[test]
    fn test_supply_cap_rejects_claim_before_any_write() {
        let alice = Pubkey::new_unique();
        let r = round(&[Entitlement { claimant: alice, amount: 50 }]);
        let mut ledger = Ledger::new(49);
        let proof = r.tree.proof(0).unwrap();

        assert_error(
            ledger.claim(message(&r, alice, 50, 1), r.tree.root(), &proof),
            TokenEconomyError::SupplyExceeded,
        );
        assert!(!ledger.claimed(r.key, alice));
        assert!(!ledger.nonce_consumed(alice, 1));
        assert_eq!(ledger.category.minted, 0);

        // Raising the cap lets the same signed claim through
        ledger.category.reconfigure(0, 50).unwrap();
        ledger
            .claim(message(&r, alice, 50, 1), r.tree.root(), &proof)
            .unwrap();
        assert_eq!(ledger.category.remaining(), 0);
    }

    #[test]
    fn test_claim_for_someone_else_rejected() {
        let alice = Pubkey::new_unique();
        let mallory = Pubkey::new_unique();
        let r = round(&[
            Entitlement { claimant: alice, amount: 8 },
            Entitlement { claimant: mallory, amount: 1 },
        ]);
        let mut ledger = Ledger::new(100);
        let alice_proof = r.tree.proof(0).unwrap();

        // Mallory signs a claim naming Alice's leaf for herself
        assert_error(
            ledger.claim(message(&r, mallory, 8, 1), r.tree.root(), &alice_proof),
            TokenEconomyError::InvalidProof,
        );

        // Mallory signs for Alice's identity
        let target = message(&r, alice, 8, 1);
        let ix = ed25519_instruction(&mallory, &SIGNATURE, &target.digest(&crate::ID));
        assert_error(
            ledger.submit(&ix, target, r.tree.root(), &alice_proof),
            TokenEconomyError::InvalidSignature,
        );

        assert!(!ledger.claimed(r.key, alice));
        assert!(!ledger.claimed(r.key, mallory));
        assert_eq!(ledger.category.minted, 0);
    }

    #[test]
    fn test_expired_claim_writes_nothing() {
        let alice = Pubkey::new_unique();
        let r = round(&[Entitlement { claimant: alice, amount: 3 }]);
        let mut ledger = Ledger::new(100);

        let stale = ClaimMessage {
            deadline: NOW - 1,
            ..message(&r, alice, 3, 1)
        };
        assert_error(
            ledger.claim(stale, r.tree.root(), &r.tree.proof(0).unwrap()),
            TokenEconomyError::Expired,
        );
        assert!(!ledger.claimed(r.key, alice));
        assert!(!ledger.nonce_consumed(alice, 1));
    }
}
