use std::future::Future;

use crate::error::Error;

/// A discriminated union of a success value `T` or a domain [`Error`].
///
/// A result is in exactly one of its two states for its whole lifetime.
/// [`fold`](Result::fold) and [`visit`](Result::visit) are the preferred ways
/// to get at the contents; the [`value`](Result::value) and
/// [`error`](Result::error) accessors panic when read in the wrong state.
#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum Result<T> {
    Success(T),
    Failure(Error),
}

impl<T> Result<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: Error) -> Self {
        Self::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// If `self` is a failure. Reaching this panic is a bug in the caller,
    /// not a recoverable condition; prefer [`fold`](Result::fold).
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("result does not hold a success value"),
        }
    }

    /// The error.
    ///
    /// # Panics
    ///
    /// If `self` is a success, as with [`value`](Result::value).
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Success(_) => panic!("result does not hold an error value"),
            Self::Failure(error) => error,
        }
    }

    /// Collapses `self` by applying exactly one of the two branches.
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// [`fold`](Result::fold) for side effects: borrows `self` and returns
    /// nothing.
    pub fn visit(&self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&Error)) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Chains a further fallible computation onto a success, propagating an
    /// existing failure untouched. `transform` is invoked at most once and
    /// never on the failure path.
    pub fn and_then<R>(self, transform: impl FnOnce(T) -> Result<R>) -> Result<R> {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// [`and_then`](Result::and_then) with a suspending transform. The
    /// failure branch holds no await point, so the returned future is ready
    /// on its first poll.
    pub async fn and_then_async<R, F, Fut>(self, transform: F) -> Result<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<R>>,
    {
        match self {
            Self::Success(value) => transform(value).await,
            Self::Failure(error) => Result::Failure(error),
        }
    }
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use futures::FutureExt as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_state() {
        let res = Result::success(4);
        assert!(res.is_success());
        assert!(!res.is_failure());
        assert_eq!(*res.value(), 4);
    }

    #[test]
    #[should_panic(expected = "does not hold an error value")]
    fn error_read_on_success() {
        let _ = Result::success(4).error();
    }

    #[test]
    fn failure_state() {
        let err = Error::new("test err");
        let res = Result::<i32>::failure(err.clone());
        assert!(!res.is_success());
        assert!(res.is_failure());
        assert_eq!(*res.error(), err);
    }

    #[test]
    #[should_panic(expected = "does not hold a success value")]
    fn value_read_on_failure() {
        let _ = Result::<i32>::failure(Error::new("test err")).value();
    }

    #[test]
    fn fold_takes_one_branch() {
        assert_eq!(Result::success(4).fold(|n| n, |_| -1), 4);
        assert_eq!(
            Result::<i32>::failure(Error::not_found("missing"))
                .fold(|_| "ok".to_string(), |err| err.code().to_string()),
            "NotFoundError",
        );
    }

    #[test]
    fn visit_success() {
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        Result::success(4).visit(
            |&n| {
                assert_eq!(n, 4);
                successes.set(successes.get() + 1);
            },
            |_| failures.set(failures.get() + 1),
        );
        assert_eq!(successes.get(), 1);
        assert_eq!(failures.get(), 0);
    }

    #[test]
    fn visit_failure() {
        let err = Error::new("test err");
        let successes = Cell::new(0);
        let failures = Cell::new(0);
        Result::<i32>::failure(err.clone()).visit(
            |_| successes.set(successes.get() + 1),
            |observed| {
                assert_eq!(*observed, err);
                failures.set(failures.get() + 1);
            },
        );
        assert_eq!(successes.get(), 0);
        assert_eq!(failures.get(), 1);
    }

    #[test]
    fn and_then_success() {
        let res = Result::success(4).and_then(|n| Result::success(n.to_string()));
        assert_eq!(res, Result::success("4".to_string()));
    }

    #[test]
    fn and_then_chains() {
        let res = Result::success(4)
            .and_then(|n| Result::success(n.to_string()))
            .and_then(|s| Result::success(s.len()));
        assert_eq!(res, Result::success(1));
    }

    #[test]
    fn and_then_transform_failure() {
        let err = Error::new("no luck");
        let res = Result::success(4).and_then(|_| Result::<String>::failure(err.clone()));
        assert_eq!(res, Result::failure(err));
    }

    #[test]
    fn and_then_short_circuits() {
        let err = Error::new("test err");
        let calls = Cell::new(0);
        let res = Result::<i32>::failure(err.clone()).and_then(|n| {
            calls.set(calls.get() + 1);
            Result::success(n.to_string())
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(res, Result::failure(err));
    }

    #[tokio::test]
    async fn and_then_async_success() {
        let res = Result::success(4)
            .and_then_async(|n| async move { Result::success(n.to_string()) })
            .await;
        assert_eq!(res, Result::success("4".to_string()));
    }

    #[test]
    fn and_then_async_failure_is_immediately_ready() {
        let err = Error::new("test err");
        let calls = Cell::new(0);
        let res = Result::<i32>::failure(err.clone())
            .and_then_async(|n| {
                calls.set(calls.get() + 1);
                async move { Result::success(n) }
            })
            .now_or_never()
            .expect("failure path must not suspend");
        assert_eq!(calls.get(), 0);
        assert_eq!(res, Result::failure(err));
    }
}
