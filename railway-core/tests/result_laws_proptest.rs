// Property-based tests for the Result combinator laws

use futures::executor::block_on;
use proptest::prelude::*;
use railway_core::{BuiltIn, ErrorCombiner, Error, ErrorTypeSet, Fallible, Result, ResultFutureExt};
use std::cell::Cell;

// Strategy for generating a single error of any built-in type
fn error_strategy() -> impl Strategy<Value = Error> {
    (
        0..BuiltIn::VARIANTS.len(),
        "[a-zA-Z0-9 ]{1,40}",
        proptest::option::of("[A-Z]{1,3}[0-9]{1,3}"),
    )
        .prop_map(|(index, message, code)| {
            let error = Error::custom(BuiltIn::VARIANTS[index]).with_message(message);
            match code {
                Some(code) => error.with_code(code),
                None => error,
            }
        })
}

fn errors_strategy() -> impl Strategy<Value = Vec<Error>> {
    prop::collection::vec(error_strategy(), 1..6)
}

// Strategy for generating either state
fn result_strategy() -> impl Strategy<Value = Result<i64>> {
    prop_oneof![
        any::<i64>().prop_map(Result::success),
        errors_strategy().prop_map(|errors| Result::failures(errors).unwrap()),
    ]
}

// Property: no then_* callback runs once the result has failed
proptest! {
    #[test]
    fn test_then_short_circuits_on_failure(errors in errors_strategy()) {
        let calls = Cell::new(0);
        let failed: Result<i64> = Result::failures(errors.clone()).unwrap();

        let result = failed
            .then_run(|| calls.set(calls.get() + 1))
            .then_do(|_| calls.set(calls.get() + 1))
            .then_map(|x| { calls.set(calls.get() + 1); x + 1 })
            .then_bind(|x| { calls.set(calls.get() + 1); Result::success(x) })
            .then_with(|| { calls.set(calls.get() + 1); Result::success(0_i64) });

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(result.errors(), errors.as_slice());
    }
}

// Property: no else_* callback runs for a successful result
proptest! {
    #[test]
    fn test_else_skips_success(value in any::<i64>()) {
        let calls = Cell::new(0);
        let result = Result::success(value)
            .else_run(|| calls.set(calls.get() + 1))
            .else_do(|_| calls.set(calls.get() + 1))
            .else_do_all(|_| calls.set(calls.get() + 1));

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(result, Result::success(value));
    }
}

// Property: mapping with the identity leaves the result unchanged
proptest! {
    #[test]
    fn test_identity_law(result in result_strategy()) {
        prop_assert_eq!(result.clone().then_map(|x| x), result);
    }
}

// Property: binding a success equals applying the function directly
proptest! {
    #[test]
    fn test_flatten_law(value in any::<i64>(), fail in any::<bool>(), error in error_strategy()) {
        let f = |x: i64| {
            if fail {
                Result::failure(error.clone())
            } else {
                Result::success(x.wrapping_mul(3))
            }
        };
        prop_assert_eq!(Result::success(value).then_bind(f), f(value));
    }
}

// Property: equality follows the value or the ordered error sequence
proptest! {
    #[test]
    fn test_equality_law(a in any::<i64>(), b in any::<i64>(), errors in errors_strategy()) {
        prop_assert_eq!(Result::success(a) == Result::success(b), a == b);

        let left: Result<i64> = Result::failures(errors.clone()).unwrap();
        let right: Result<i64> = Result::failures(errors.clone()).unwrap();
        prop_assert_eq!(&left, &right);

        let mut reversed = errors.clone();
        reversed.reverse();
        let flipped: Result<i64> = Result::failures(reversed.clone()).unwrap();
        prop_assert_eq!(left == flipped, errors == reversed);
    }
}

// Property: match_with runs exactly one branch
proptest! {
    #[test]
    fn test_match_runs_one_branch(result in result_strategy()) {
        let success = result.is_success();
        let first = result.errors().first().cloned();
        let branch = result.match_with(|_| "success", |error| {
            assert_eq!(Some(error), first);
            "failure"
        });
        prop_assert_eq!(branch, if success { "success" } else { "failure" });
    }
}

// Property: combining concatenates in order, after the seed
proptest! {
    #[test]
    fn test_combiner_concatenates(
        seed in prop::collection::vec(error_strategy(), 0..3),
        outcomes in prop::collection::vec(result_strategy(), 0..5)
    ) {
        let refs: Vec<&dyn Fallible> = outcomes.iter().map(|r| r as &dyn Fallible).collect();
        let combined = ErrorCombiner::combine_with(seed.clone(), &refs);

        let mut expected = seed;
        for outcome in &outcomes {
            expected.extend(outcome.errors().iter().cloned());
        }
        prop_assert_eq!(combined, expected);
    }
}

// Property: pending chains agree with resolved chains
proptest! {
    #[test]
    fn test_pending_chain_matches_resolved(result in result_strategy(), delta in -1000i64..1000) {
        let resolved = result
            .clone()
            .then_map(|x| x.wrapping_add(delta))
            .then_bind(|x| if x % 2 == 0 { Result::success(x) } else { Result::failure(Error::conflict()) });

        let pending = block_on(
            futures::future::ready(result)
                .then_map(|x| x.wrapping_add(delta))
                .then_bind(|x| if x % 2 == 0 { Result::success(x) } else { Result::failure(Error::conflict()) }),
        );

        prop_assert_eq!(pending, resolved);
    }
}
