//! Property tests for the scoring rule (pure domain).

use proptest::prelude::*;

use crate::domain::scoring::score;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: an exact bid always earns 10 + bid on top of the prior
    /// score.
    #[test]
    fn prop_exact_bid_scores_ten_plus_bid(
        k in 0u8..=8u8,
        prior in 0i32..=10_000,
    ) {
        let (new_score, round_score) = score(k, k, prior);
        prop_assert_eq!(round_score, 10 + k as i32);
        prop_assert_eq!(new_score, prior + 10 + k as i32);
    }

    /// Property: a missed bid never changes the running score.
    #[test]
    fn prop_missed_bid_is_score_neutral(
        bid in 0u8..=8u8,
        tricks in 0u8..=8u8,
        prior in 0i32..=10_000,
    ) {
        prop_assume!(bid != tricks);
        let (new_score, round_score) = score(bid, tricks, prior);
        prop_assert_eq!(round_score, 0);
        prop_assert_eq!(new_score, prior);
    }
}
