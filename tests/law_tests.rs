//! Property-based tests for the monad laws of both containers.
//!
//! These tests use proptest to verify the laws hold across
//! many randomly generated values and step lists.

use monad_patterns::logged::{double, increment, square, Logged};
use monad_patterns::optional::{add_forty_two, divide, Optional};
use proptest::prelude::*;
use std::cell::RefCell;

type LoggedFn = fn(i64) -> Logged<i64>;

prop_compose! {
    fn arbitrary_logged_step()(variant in 0..3u8) -> LoggedFn {
        match variant {
            0 => square,
            1 => double,
            _ => increment,
        }
    }
}

prop_compose! {
    fn arbitrary_history()(entries in prop::collection::vec("[a-z]{1,6}", 0..4)) -> Vec<String> {
        entries
    }
}

proptest! {
    #[test]
    fn lift_has_empty_log(value in any::<i64>()) {
        let logged = Logged::lift(value);
        prop_assert_eq!(*logged.value(), value);
        prop_assert!(logged.logs().is_empty());
    }

    #[test]
    fn optional_lift_is_present(value in any::<i64>()) {
        prop_assert_eq!(Optional::lift(value), Optional::Present(value));
    }

    #[test]
    fn logged_fold_matches_manual_chain(
        value in any::<i64>(),
        steps in prop::collection::vec(arbitrary_logged_step(), 0..8)
    ) {
        let folded = Logged::lift(value).chain_all(steps.iter().copied());

        let mut manual = Logged::lift(value);
        for step in &steps {
            manual = manual.chain(step);
        }

        prop_assert_eq!(folded.value(), manual.value());
        prop_assert_eq!(folded.logs(), manual.logs());
    }

    #[test]
    fn logged_chain_is_associative(
        value in any::<i64>(),
        history in arbitrary_history(),
        f in arbitrary_logged_step(),
        g in arbitrary_logged_step()
    ) {
        let m = Logged::new(value, history);

        let left = m.clone().chain(f).chain(g);
        let right = m.chain(|x| f(x).chain(g));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn logged_left_identity(value in any::<i64>(), f in arbitrary_logged_step()) {
        prop_assert_eq!(Logged::lift(value).chain(f), f(value));
    }

    #[test]
    fn logged_right_identity(value in any::<i64>(), history in arbitrary_history()) {
        let m = Logged::new(value, history);
        prop_assert_eq!(m.clone().chain(Logged::lift), m);
    }

    #[test]
    fn logged_entries_keep_step_order(
        value in any::<i64>(),
        labels in prop::collection::vec("[a-z]{1,6}", 0..6)
    ) {
        let steps: Vec<Box<dyn Fn(i64) -> Logged<i64>>> = labels
            .iter()
            .cloned()
            .map(|label| {
                Box::new(move |x: i64| Logged::with_entry(x, label.clone()))
                    as Box<dyn Fn(i64) -> Logged<i64>>
            })
            .collect();

        let logged = Logged::lift(value).chain_all(steps);
        prop_assert_eq!(logged.logs(), labels.as_slice());
    }

    #[test]
    fn optional_absence_absorbs_remaining_steps(
        value in any::<i64>(),
        absent_flags in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        let calls = RefCell::new(Vec::new());
        let steps: Vec<Box<dyn Fn(i64) -> Optional<i64> + '_>> = absent_flags
            .iter()
            .enumerate()
            .map(|(index, &vanish)| {
                let calls = &calls;
                Box::new(move |x: i64| {
                    calls.borrow_mut().push(index);
                    if vanish {
                        Optional::Absent
                    } else {
                        Optional::Present(x)
                    }
                }) as Box<dyn Fn(i64) -> Optional<i64> + '_>
            })
            .collect();

        let result = Optional::lift(value).chain_all(steps);
        let called = calls.into_inner();

        match absent_flags.iter().position(|&vanish| vanish) {
            Some(k) => {
                prop_assert!(result.is_absent());
                prop_assert_eq!(called, (0..=k).collect::<Vec<_>>());
            }
            None => {
                prop_assert_eq!(result, Optional::Present(value));
                prop_assert_eq!(called, (0..absent_flags.len()).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn optional_fold_matches_manual_chain(
        dividend in any::<i32>(),
        divisor in -5i32..5
    ) {
        let dividend = f64::from(dividend);
        let divisor = f64::from(divisor);

        let steps: Vec<Box<dyn Fn(f64) -> Optional<f64>>> = vec![
            Box::new(divide(divisor)),
            Box::new(divide(divisor)),
            Box::new(add_forty_two),
        ];
        let folded = Optional::lift(dividend).chain_all(steps);

        let manual = Optional::lift(dividend)
            .chain(divide(divisor))
            .chain(divide(divisor))
            .chain(add_forty_two);

        prop_assert_eq!(folded, manual);
        prop_assert_eq!(manual.is_absent(), divisor == 0.0);
    }

    #[test]
    fn optional_chain_is_associative(value in any::<i32>(), divisor in -5i32..5) {
        let m = Optional::lift(f64::from(value));
        let f = divide(f64::from(divisor));

        let left = m.chain(&f).chain(add_forty_two);
        let right = m.chain(|x| f(x).chain(add_forty_two));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn optional_left_identity(value in any::<i32>(), divisor in -5i32..5) {
        let value = f64::from(value);
        let f = divide(f64::from(divisor));
        prop_assert_eq!(Optional::lift(value).chain(&f), f(value));
    }

    #[test]
    fn optional_right_identity(value in any::<i64>(), present in any::<bool>()) {
        let m = if present { Optional::lift(value) } else { Optional::absent() };
        prop_assert_eq!(m.chain(Optional::lift), m);
    }

    #[test]
    fn zero_dividend_stays_present(divisor in 1i32..100) {
        let result = Optional::lift(0.0).chain(divide(f64::from(divisor)));
        prop_assert_eq!(result, Optional::Present(0.0));
    }
}
