#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use crate::constants::FIRST_ITEM_ID;
    use crate::error::TokenEconomyError;
    use crate::state::*;
    use crate::test::assert_error;

    fn category(kind: CategoryKind, price: u64, cap: u64) -> SupplyCategory {
        SupplyCategory {
            bump: 255,
            category_id: 1,
            kind,
            mint: Pubkey::new_unique(),
            price,
            cap,
            minted: 0,
        }
    }

    fn collection(max_supply: u64) -> Collection {
        Collection {
            bump: 255,
            collection_id: 1,
            pass_mint: Pubkey::new_unique(),
            item_mint: Pubkey::new_unique(),
            max_supply,
            next_item_id: FIRST_ITEM_ID,
        }
    }

    #[test]
    fn test_issue_up_to_cap_inclusive() {
        let mut c = category(CategoryKind::Sale, 10, 5);

        c.record_issue(3).unwrap();
        c.record_issue(2).unwrap();
        assert_eq!(c.minted, 5);
        assert_eq!(c.remaining(), 0);

        assert_error(c.record_issue(1), TokenEconomyError::SupplyExceeded);
        assert_eq!(c.minted, 5);
    }

    #[test]
    fn test_issue_rejects_overshoot_without_partial_booking() {
        let mut c = category(CategoryKind::Staked, 0, 5);
        c.record_issue(4).unwrap();

        assert_error(c.record_issue(2), TokenEconomyError::SupplyExceeded);
        assert_eq!(c.minted, 4);
        assert_error(c.record_issue(0), TokenEconomyError::InvalidAmount);
        assert_error(c.record_issue(u64::MAX), TokenEconomyError::ArithmeticOverflow);
        assert_eq!(c.minted, 4);
    }

    #[test]
    fn test_reconfigure_keeps_counter() {
        let mut c = category(CategoryKind::Sale, 10, 100);
        c.record_issue(40).unwrap();

        c.reconfigure(25, 40).unwrap();
        assert_eq!((c.price, c.cap, c.minted), (25, 40, 40));
        assert_error(c.record_issue(1), TokenEconomyError::SupplyExceeded);

        c.reconfigure(25, 60).unwrap();
        assert_eq!(c.minted, 40);
        assert_eq!(c.remaining(), 20);
    }

    #[test]
    fn test_reconfigure_below_counter_rejected() {
        let mut c = category(CategoryKind::Sale, 10, 100);
        c.record_issue(40).unwrap();

        assert_error(c.reconfigure(10, 39), TokenEconomyError::InvalidConfiguration);
        assert_eq!((c.price, c.cap, c.minted), (10, 100, 40));
    }

    #[test]
    fn test_counter_never_exceeds_cap_across_operations() {
        let mut c = category(CategoryKind::Sale, 1, 7);
        // (is_issue, value, succeeds)
        let ops: [(bool, u64, bool); 8] = [
            (true, 3, true),
            (false, 5, true),
            (true, 3, false),
            (false, 2, false),
            (true, 2, true),
            (false, 9, true),
            (true, 4, true),
            (true, 1, false),
        ];

        for (step, (is_issue, value, succeeds)) in ops.into_iter().enumerate() {
            let before = (c.minted, c.cap);
            let result = if is_issue {
                c.record_issue(value)
            } else {
                c.reconfigure(c.price, value)
            };
            assert_eq!(result.is_ok(), succeeds, "step {} outcome", step);
            if !succeeds {
                assert_eq!((c.minted, c.cap), before, "step {} left state dirty", step);
            }
            assert!(c.minted <= c.cap);
            assert!(c.minted >= before.0);
        }
        assert_eq!(c.minted, 9);
        assert_eq!(c.cap, 9);
    }

    #[test]
    fn test_cost_and_kind_checks() {
        let sale = category(CategoryKind::Sale, 15, 10);
        assert_eq!(sale.cost_of(4).unwrap(), 60);
        assert!(sale.require_kind(CategoryKind::Sale).is_ok());
        assert_error(
            sale.require_kind(CategoryKind::Airdrop),
            TokenEconomyError::CategoryKindMismatch,
        );

        let unpriced = category(CategoryKind::Sale, 0, 10);
        assert_error(unpriced.cost_of(1), TokenEconomyError::NotForSale);

        let expensive = category(CategoryKind::Sale, u64::MAX, 10);
        assert_error(expensive.cost_of(2), TokenEconomyError::ArithmeticOverflow);
    }

    #[test]
    fn test_collection_allows_exactly_max_supply_redemptions() {
        let max_supply = 3;
        let mut col = collection(max_supply);

        let ids: Vec<u64> = (0..max_supply).map(|_| col.take_next_item().unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(col.is_sold_out());
        assert_eq!(col.redeemed(), max_supply);

        assert_error(col.take_next_item(), TokenEconomyError::SupplyExceeded);
        assert_eq!(col.redeemed(), max_supply);
    }

    #[test]
    fn test_collection_of_one_is_redeemable() {
        let mut col = collection(1);
        assert!(!col.is_sold_out());
        assert_eq!(col.take_next_item().unwrap(), 1);
        assert_error(col.take_next_item(), TokenEconomyError::SupplyExceeded);
    }

    #[test]
    fn test_redeem_requires_a_pass() {
        let col = collection(3);
        assert!(col.ensure_pass_holder(1).is_ok());
        assert!(col.ensure_pass_holder(u64::MAX).is_ok());
        assert_error(col.ensure_pass_holder(0), TokenEconomyError::Unauthorized);
    }

    #[test]
    fn test_collection_resize_keeps_cursor() {
        let mut col = collection(5);
        col.take_next_item().unwrap();
        col.take_next_item().unwrap();

        assert_error(col.resize(1), TokenEconomyError::InvalidConfiguration);
        assert_error(col.resize(0), TokenEconomyError::InvalidConfiguration);

        col.resize(2).unwrap();
        assert!(col.is_sold_out());
        assert_error(col.take_next_item(), TokenEconomyError::SupplyExceeded);

        col.resize(3).unwrap();
        assert_eq!(col.take_next_item().unwrap(), 3);
        assert!(col.is_sold_out());
    }
}
