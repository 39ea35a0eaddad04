//! Error type for path resolution and interpolation.
//!
//! Every failure in the resolv crates is an [`Error`] tagged with an
//! [`ErrorKind`]. Wrapping an error with [`Error::context`] keeps the kind
//! of the wrapped error, so callers can always branch on `kind()` no matter
//! how many layers of context were added on the way up.

use std::fmt;
use std::io;

/// Result alias used throughout the resolv crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a resolution failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed path, filter, or interpolation token; depth exceeded.
    BadPath,
    /// Missing key, index, filter match, variable, or file.
    NotFound,
    /// Access denied by the underlying source.
    Forbidden,
    /// Anything a resolver reports that does not fit the kinds above
    /// (I/O failures, undecodable documents, custom resolver errors).
    Other,
}

impl ErrorKind {
    /// Short name used as the message prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadPath => "bad path",
            Self::NotFound => "not found",
            Self::Forbidden => "forbidden",
            Self::Other => "error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolution error: a kind, a message and an optional cause.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl Error {
    /// Create an error of `kind`.
    ///
    /// The message is prefixed with the kind name, except for
    /// [`ErrorKind::Other`] whose messages stand on their own.
    pub fn new(kind: ErrorKind, message: impl fmt::Display) -> Self {
        let message = match kind {
            ErrorKind::Other => message.to_string(),
            _ => format!("{kind}: {message}"),
        };
        Error {
            kind,
            message,
            source: None,
        }
    }

    pub fn bad_path(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::BadPath, message)
    }

    pub fn not_found(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn forbidden(message: impl fmt::Display) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// Wrap a foreign error as [`ErrorKind::Other`], keeping it as the source.
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error {
            kind: ErrorKind::Other,
            message: error.to_string(),
            source: Some(Box::new(error)),
        }
    }

    /// Attach `source` as the cause of this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Wrap this error with a context line.
    ///
    /// The result has the same kind, displays as `"{context}: {self}"`,
    /// and reports `self` as its `source()`.
    #[must_use]
    pub fn context(self, context: impl fmt::Display) -> Self {
        Error {
            kind: self.kind,
            message: format!("{context}: {}", self.message),
            source: Some(Box::new(self)),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns `true` if this error is of `kind`.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The innermost error in the context chain that is not itself an [`Error`].
    ///
    /// Returns `None` if the chain bottoms out in an `Error` created without
    /// a foreign cause.
    pub fn root_cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let mut current: &(dyn std::error::Error + 'static) = self;
        loop {
            match current.downcast_ref::<Error>() {
                Some(err) => match &err.source {
                    Some(source) => current = source.as_ref(),
                    None => return None,
                },
                None => return Some(current),
            }
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::Forbidden,
            _ => ErrorKind::Other,
        };
        Error::new(kind, &err).with_source(err)
    }
}
