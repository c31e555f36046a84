//! Property tests for the round scheduler.

use proptest::prelude::*;

use crate::domain::rules::{normalized_card_count, ROUNDS_PER_SET};
use crate::domain::schedule::RoundSchedule;
use crate::domain::state::Direction;
use crate::domain::test_prelude;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ascending), Just(Direction::Descending)]
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: however many advances happen, round stays in 1..=8 and
    /// card count stays in [1, 8] and matches the normalization formula.
    #[test]
    fn prop_schedule_stays_in_bounds(
        dir in direction(),
        steps in 0usize..200,
    ) {
        let mut s = RoundSchedule::new(dir);
        for _ in 0..steps {
            s.advance();
        }
        prop_assert!((1..=ROUNDS_PER_SET).contains(&s.round));
        prop_assert!((1..=ROUNDS_PER_SET).contains(&s.card_count));
        prop_assert_eq!(s.card_count, normalized_card_count(s.round, dir));
    }

    /// Property: a set is exactly eight rounds — the set counter after n
    /// advances is 1 + n / 8.
    #[test]
    fn prop_set_counter_advances_every_eight_rounds(
        dir in direction(),
        steps in 0usize..200,
    ) {
        let mut s = RoundSchedule::new(dir);
        for _ in 0..steps {
            s.advance();
        }
        prop_assert_eq!(s.set as usize, 1 + steps / ROUNDS_PER_SET as usize);
        prop_assert_eq!(s.round as usize, 1 + steps % ROUNDS_PER_SET as usize);
    }
}
