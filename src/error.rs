use std::borrow::Cow;

use derive_more::Display;

/// A single field-level violation carried by a validation error.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display(fmt = "{}: {}", key, message)]
pub struct FieldError {
    pub key: String,
    pub message: String,
    pub error_code: Option<String>,
}

impl FieldError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            error_code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }
}

/// A domain error: an expected, recoverable failure passed by value.
///
/// Each variant carries a stable categorical `code` which defaults to the
/// variant's canonical name but may be overridden at construction with
/// [`with_code`](Error::with_code). [`Aggregate`](Error::Aggregate) is the
/// exception: its code is fixed and it has no single message.
#[derive(thiserror::Error, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("{message}")]
    Generic {
        message: String,
        code: Cow<'static, str>,
    },

    #[error("{message}")]
    Failure {
        message: String,
        code: Cow<'static, str>,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        code: Cow<'static, str>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        field_errors: Vec<FieldError>,
        code: Cow<'static, str>,
    },

    #[error("aggregate of {} errors", .errors.len())]
    Aggregate { errors: Vec<Error> },
}

impl Error {
    pub fn new(message: impl Into<String>) -> Self {
        Self::Generic {
            message: message.into(),
            code: Cow::Borrowed("Error"),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            code: Cow::Borrowed("FailureError"),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            code: Cow::Borrowed("NotFoundError"),
        }
    }

    /// A failed validation. `field_errors` keeps the order it is given in.
    pub fn validation(
        message: impl Into<String>,
        field_errors: impl IntoIterator<Item = FieldError>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            field_errors: field_errors.into_iter().collect(),
            code: Cow::Borrowed("ValidationError"),
        }
    }

    /// Wraps `errors` as one error. An empty sequence is legal and means
    /// there are no underlying errors.
    pub fn aggregate(errors: impl IntoIterator<Item = Error>) -> Self {
        Self::Aggregate {
            errors: errors.into_iter().collect(),
        }
    }

    /// Overrides this error's default code.
    ///
    /// # Panics
    ///
    /// If `self` is [`Aggregate`](Error::Aggregate), whose code cannot be
    /// overridden.
    #[track_caller]
    pub fn with_code(self, new_code: impl Into<Cow<'static, str>>) -> Self {
        match self {
            Self::Generic { message, .. } => Self::Generic {
                message,
                code: new_code.into(),
            },
            Self::Failure { message, .. } => Self::Failure {
                message,
                code: new_code.into(),
            },
            Self::NotFound { message, .. } => Self::NotFound {
                message,
                code: new_code.into(),
            },
            Self::Validation {
                message,
                field_errors,
                ..
            } => Self::Validation {
                message,
                field_errors,
                code: new_code.into(),
            },
            Self::Aggregate { .. } => panic!("the code of an aggregate error is fixed"),
        }
    }

    /// The human-readable description.
    ///
    /// # Panics
    ///
    /// If `self` is [`Aggregate`](Error::Aggregate): an aggregate holds no
    /// single message, unwrap its `errors` instead.
    #[track_caller]
    pub fn message(&self) -> &str {
        match self {
            Self::Generic { message, .. }
            | Self::Failure { message, .. }
            | Self::NotFound { message, .. }
            | Self::Validation { message, .. } => message,
            Self::Aggregate { .. } => {
                panic!("unsupported operation: an aggregate error holds no single message")
            }
        }
    }

    /// The stable categorical identifier of this error.
    pub fn code(&self) -> &str {
        match self {
            Self::Generic { code, .. }
            | Self::Failure { code, .. }
            | Self::NotFound { code, .. }
            | Self::Validation { code, .. } => code,
            Self::Aggregate { .. } => "AggregateError",
        }
    }
}
