use crate::{error::Error, result::Result};

// Bare `T` -> success has no `From` impl: it would collide with the error
// conversions below at `T = Error`. `Result::success` is the named factory.

impl<T> From<Error> for Result<T> {
    fn from(error: Error) -> Self {
        Self::Failure(error)
    }
}

impl<T> From<Vec<Error>> for Result<T> {
    fn from(errors: Vec<Error>) -> Self {
        Self::Failure(Error::aggregate(errors))
    }
}

impl<T, const N: usize> From<[Error; N]> for Result<T> {
    fn from(errors: [Error; N]) -> Self {
        Self::Failure(Error::aggregate(errors))
    }
}

impl Error {
    /// Lifts this error into a failure [`Result`], leaving `T` to be named
    /// by the caller or inferred at the use site.
    pub fn into_result<T>(self) -> Result<T> {
        Result::Failure(self)
    }
}
