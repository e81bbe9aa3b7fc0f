use super::errors::{ConstructionError, Error};

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Success(T),
    Failure(Error),
}

/// Result of an operation that either produced a value or failed with a
/// catalog [`Error`]. Business failures travel as data in this type instead
/// of being returned through `Err` or panicking.
///
/// Exactly one payload is held. The state is private, so the factories
/// below are the only way to build one.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    state: State<T>,
}

impl<T> Outcome<T> {
    /// Wraps `value` as is. For an `Option` payload this means `None` is a
    /// valid success value that reaches the wire as `"Value": null`; use
    /// [`Outcome::try_success`] when a missing value must be rejected.
    pub fn success(value: T) -> Self {
        Self {
            state: State::Success(value),
        }
    }

    pub fn failure(error: Error) -> Self {
        Self {
            state: State::Failure(error),
        }
    }

    /// Builds a success from a value that may be missing.
    ///
    /// # Errors
    /// Returns [`ConstructionError::MissingValue`] when `value` is `None`.
    pub fn try_success(value: Option<T>) -> Result<Self, ConstructionError> {
        value
            .map(Self::success)
            .ok_or(ConstructionError::MissingValue)
    }

    /// Builds a failure from an error that may be missing.
    ///
    /// # Errors
    /// Returns [`ConstructionError::MissingError`] when `error` is `None`.
    pub fn try_failure(error: Option<Error>) -> Result<Self, ConstructionError> {
        error
            .map(Self::failure)
            .ok_or(ConstructionError::MissingError)
    }

    pub fn is_error(&self) -> bool {
        matches!(self.state, State::Failure(_))
    }

    /// The success value, `None` in the failure state.
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            State::Success(value) => Some(value),
            State::Failure(_) => None,
        }
    }

    /// The failure error, `None` in the success state.
    pub fn error(&self) -> Option<&Error> {
        match &self.state {
            State::Success(_) => None,
            State::Failure(error) => Some(error),
        }
    }

    pub fn map<U, F>(self, op: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Success(value) => Outcome::success(op(value)),
            State::Failure(error) => Outcome::failure(error),
        }
    }

    pub fn into_result(self) -> Result<T, Error> {
        match self.state {
            State::Success(value) => Ok(value),
            State::Failure(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, Error>> for Outcome<T> {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Error> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
