use super::*;
use crate::error_type::ErrorType;
use crate::success::{Success, UnitResult};
use std::cell::{Cell, RefCell};

fn not_found() -> Error {
    Error::not_found().with_message("user 7 not found")
}

fn validation(code: &str) -> Error {
    Error::validation().with_code(code)
}

fn failed() -> Result<i32> {
    Result::failure(not_found())
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_state() {
        let result = Result::success(42);
        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.value(), Some(&42));
        assert!(result.errors().is_empty());
        assert_eq!(result.into_value(), Some(42));
    }

    #[test]
    fn test_failure_state() {
        let result = failed();
        assert!(result.is_failure());
        assert_eq!(result.value(), None);
        assert_eq!(result.errors(), &[not_found()]);
        assert_eq!(result.value_or_default(), 0);
    }

    #[test]
    fn test_failures_preserve_order_and_duplicates() {
        let errors = vec![validation("a"), validation("b"), validation("a")];
        let result: Result<String> = Result::failures(errors.clone()).unwrap();
        assert_eq!(result.into_errors(), errors);
    }

    #[test]
    fn test_empty_error_collection_is_rejected() {
        let result = Result::<i32>::failures(Vec::new());
        assert_eq!(result, Err(RailwayError::EmptyFailure));

        let converted = Result::<i32>::try_from(Vec::new());
        assert_eq!(converted, Err(RailwayError::EmptyFailure));
    }

    #[test]
    fn test_from_errors_or() {
        assert_eq!(Result::from_errors_or(Vec::new(), 5), Result::success(5));

        let result = Result::from_errors_or(vec![not_found()], 5);
        assert_eq!(result, failed());

        let result: Result<i32> =
            Result::from_errors_or_else(vec![not_found()], || panic!("must not be computed"));
        assert!(result.is_failure());
    }

    #[test]
    fn test_conversions() {
        let from_error: Result<i32> = not_found().into();
        assert_eq!(from_error, failed());

        let from_std: Result<i32> = Ok::<_, Error>(3).into();
        assert_eq!(from_std, 3.into_success());

        let from_err: Result<i32> = Err(not_found()).into();
        assert_eq!(from_err, failed());

        let back: std::result::Result<i32, Vec<Error>> = failed().into();
        assert_eq!(back, Err(vec![not_found()]));
        assert_eq!(Result::success(1).into_std(), Ok(1));
    }
}

mod access {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_error_on_failure() {
        let result: Result<i32> = Result::failures(vec![validation("a"), not_found()]).unwrap();
        assert_eq!(result.first_error(), Ok(&validation("a")));
    }

    #[test]
    fn test_first_error_on_success_is_invalid() {
        let result = Result::success("value");
        assert_eq!(
            result.first_error(),
            Err(RailwayError::InvalidOperation {
                operation: "first_error".to_string(),
                reason: "The result is successful.".to_string(),
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Result::success(1).to_string(), "Success");
        let result: Result<i32> = Error::validation()
            .with_message("bad input")
            .with_code("E1")
            .into();
        assert_eq!(result.to_string(), "(E1) bad input");
    }

    #[test]
    fn test_equality_is_ordered() {
        let forward: Result<i32> = Result::failures(vec![validation("a"), validation("b")]).unwrap();
        let backward: Result<i32> =
            Result::failures(vec![validation("b"), validation("a")]).unwrap();
        assert_ne!(forward, backward);
        assert_eq!(forward.clone(), forward);
        assert_ne!(Result::success(1), Result::success(2));
        assert_eq!(Result::success(1), Result::success(1));
    }
}

mod ensure {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    #[test]
    fn test_success_passes_through() {
        let result = Result::success(Success::VALUE).ensure_success();
        assert_eq!(result, Ok(UnitResult::success(Success::VALUE)));
    }

    #[test]
    fn test_failure_uses_type_name() {
        let fault = failed().ensure_success().unwrap_err();
        assert_eq!(fault.to_string(), "NotFound result");
        assert_eq!(fault.result_error(), Some(&not_found()));
    }

    #[test]
    #[traced_test]
    fn test_conversion_is_logged() {
        let _ = failed().ensure_success();
        assert!(logs_contain("Converting failed result into a fault"));
        assert!(logs_contain("error_type=NotFound"));
        assert!(logs_contain("fault=NotFound result"));
    }

    #[test]
    fn test_failure_with_explicit_message() {
        let result: Result<i32> = Result::failures(vec![Error::locked(), not_found()]).unwrap();
        let fault = result.ensure_success_with("row is busy").unwrap_err();
        assert_eq!(
            fault,
            RailwayError::failure_result(Error::custom(ErrorType::LOCKED), "row is busy")
        );
    }
}

mod then {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_then_map_on_success() {
        assert_eq!(42.into_success().then_map(|x| x + 1), Result::success(43));
    }

    #[test]
    fn test_then_map_on_failure_keeps_errors() {
        let result = failed().then_map(|x| x + 1);
        assert_eq!(result.errors(), &[not_found()]);
    }

    #[test]
    fn test_then_map_changes_type() {
        let result = 7.into_success().then_map(|x| format!("#{}", x));
        assert_eq!(result, Result::success("#7".to_string()));
    }

    #[test]
    fn test_then_bind_flattens() {
        let half = |x: i32| {
            if x % 2 == 0 {
                Result::success(x / 2)
            } else {
                Result::failure(validation("odd"))
            }
        };
        assert_eq!(8.into_success().then_bind(half), Result::success(4));
        assert_eq!(
            7.into_success().then_bind(half),
            Result::failure(validation("odd"))
        );
    }

    #[test]
    fn test_then_with_ignores_value() {
        let result = 1.into_success().then_with(|| Result::success("next"));
        assert_eq!(result, Result::success("next"));
    }

    #[test]
    fn test_side_effects_only_on_success() {
        let calls = Cell::new(0);
        let seen = RefCell::new(Vec::new());

        let result = 5
            .into_success()
            .then_run(|| calls.set(calls.get() + 1))
            .then_do(|value| seen.borrow_mut().push(*value));
        assert_eq!(result, Result::success(5));
        assert_eq!(calls.get(), 1);
        assert_eq!(*seen.borrow(), vec![5]);

        let result = failed()
            .then_run(|| calls.set(calls.get() + 1))
            .then_do(|value| seen.borrow_mut().push(*value));
        assert_eq!(result, failed());
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_chain_stops_at_first_failure() {
        let reached = Cell::new(false);
        let result = 1
            .into_success()
            .then_bind(|_| Result::<i32>::failure(Error::conflict()))
            .then_map(|x| {
                reached.set(true);
                x * 10
            })
            .then_run(|| reached.set(true));
        assert!(!reached.get());
        assert_eq!(result, Result::failure(Error::conflict()));
    }
}

mod otherwise {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_else_callbacks_skip_success() {
        let calls = Cell::new(0);
        let result = 3
            .into_success()
            .else_run(|| calls.set(calls.get() + 1))
            .else_do(|_| calls.set(calls.get() + 1))
            .else_do_all(|_| calls.set(calls.get() + 1));
        assert_eq!(result, Result::success(3));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_else_callbacks_see_errors() {
        let first = RefCell::new(None);
        let all = RefCell::new(Vec::new());
        let ran = Cell::new(false);

        let result: Result<i32> = Result::failures(vec![validation("a"), validation("b")]).unwrap();
        let returned = result
            .clone()
            .else_run(|| ran.set(true))
            .else_do(|error| *first.borrow_mut() = Some(error.clone()))
            .else_do_all(|errors| all.borrow_mut().extend_from_slice(errors));

        assert_eq!(returned, result);
        assert!(ran.get());
        assert_eq!(*first.borrow(), Some(validation("a")));
        assert_eq!(*all.borrow(), vec![validation("a"), validation("b")]);
    }
}

mod matching {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_with() {
        let describe = |result: Result<i32>| {
            result.match_with(|x| format!("value {}", x), |e| format!("error {}", e.error_type()))
        };
        assert_eq!(describe(Result::success(2)), "value 2");
        assert_eq!(describe(failed()), "error NotFound");
    }

    #[test]
    fn test_match_all_receives_every_error() {
        let result: Result<i32> = Result::failures(vec![validation("a"), not_found()]).unwrap();
        let count = result.match_all(|_| 0, |errors| errors.len());
        assert_eq!(count, 2);
    }

    #[test]
    fn test_switch_runs_exactly_one_branch() {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);

        Result::success(1).switch(
            |_| success_calls.set(success_calls.get() + 1),
            |_| failure_calls.set(failure_calls.get() + 1),
        );
        failed().switch_all(
            |_| success_calls.set(success_calls.get() + 1),
            |errors| failure_calls.set(failure_calls.get() + errors.len()),
        );

        assert_eq!(success_calls.get(), 1);
        assert_eq!(failure_calls.get(), 1);
    }
}

mod asynchronous {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_then_map_async() {
        let result = 20
            .into_success()
            .then_map_async(|x| async move { x + 1 })
            .await;
        assert_eq!(result, Result::success(21));

        let result = failed().then_map_async(|x| async move { x + 1 }).await;
        assert_eq!(result, failed());
    }

    #[tokio::test]
    async fn test_then_bind_and_with_async() {
        let result = 3
            .into_success()
            .then_bind_async(|x| async move { Result::success(x * 3) })
            .await
            .then_with_async(|| async { Result::<i32>::failure(Error::unavailable()) })
            .await;
        assert_eq!(result, Result::failure(Error::unavailable()));
    }

    #[tokio::test]
    async fn test_then_side_effects_async() {
        let seen = &RefCell::new(Vec::new());
        let result = 9
            .into_success()
            .then_run_async(move || async move { seen.borrow_mut().push(0) })
            .await
            .then_do_async(move |value| {
                let value = *value;
                async move { seen.borrow_mut().push(value) }
            })
            .await;
        assert_eq!(result, Result::success(9));
        assert_eq!(*seen.borrow(), vec![0, 9]);

        let skipped = failed()
            .then_run_async(move || async move { seen.borrow_mut().push(-1) })
            .await;
        assert_eq!(skipped, failed());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_else_async() {
        let seen = &RefCell::new(Vec::new());
        let result = failed()
            .else_run_async(move || async move { seen.borrow_mut().push("run".to_string()) })
            .await
            .else_do_async(move |error| {
                let name = error.error_type().name().to_string();
                async move { seen.borrow_mut().push(name) }
            })
            .await
            .else_do_all_async(move |errors| {
                let count = errors.len().to_string();
                async move { seen.borrow_mut().push(count) }
            })
            .await;
        assert_eq!(result, failed());
        assert_eq!(*seen.borrow(), vec!["run", "NotFound", "1"]);
    }

    #[tokio::test]
    async fn test_match_and_switch_async() {
        let value = Result::success(4)
            .match_with_async(|x| async move { x * 2 }, |_| async { -1 })
            .await;
        assert_eq!(value, 8);

        let count = failed()
            .match_all_async(|_| async { 0 }, |errors| async move { errors.len() })
            .await;
        assert_eq!(count, 1);

        let hit = &Cell::new("");
        failed()
            .switch_async(
                move |_| async move { hit.set("success") },
                move |_| async move { hit.set("failure") },
            )
            .await;
        assert_eq!(hit.get(), "failure");

        Result::success(1)
            .switch_all_async(
                move |_| async move { hit.set("success") },
                move |_| async move { hit.set("failure") },
            )
            .await;
        assert_eq!(hit.get(), "success");
    }
}
