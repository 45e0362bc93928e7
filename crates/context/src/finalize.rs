//! Finalize errors that can hand the session back
//!
//! A context refuses a session it did not start without touching its own
//! pending operation. The refused session is returned with the error so the
//! caller can still finalize it on the context that owns it.

use core::fmt;
use eccel_api::{Error, Status};

/// Result of a finalize over session type `S`
pub type FinalizeResult<T, S> = core::result::Result<T, FinalizeError<S>>;

/// A finalize that produced no result
#[derive(Debug)]
pub struct FinalizeError<S> {
    error: Error,
    session: Option<S>,
}

impl<S> FinalizeError<S> {
    /// The context refused `session` before collecting anything
    pub fn refused(error: Error, session: S) -> Self {
        Self {
            error,
            session: Some(session),
        }
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn status(&self) -> Status {
        self.error.status()
    }

    /// The session, if the operation it refers to is still pending elsewhere
    pub fn session(&self) -> Option<&S> {
        self.session.as_ref()
    }

    pub fn into_session(self) -> Option<S> {
        self.session
    }

    pub fn into_parts(self) -> (Error, Option<S>) {
        (self.error, self.session)
    }

    /// Convert the carried session, e.g. a raw ticket into a typed session
    pub fn map_session<U>(self, f: impl FnOnce(S) -> U) -> FinalizeError<U> {
        FinalizeError {
            error: self.error,
            session: self.session.map(f),
        }
    }
}

impl<S> From<Error> for FinalizeError<S> {
    fn from(error: Error) -> Self {
        Self {
            error,
            session: None,
        }
    }
}

impl<S> From<FinalizeError<S>> for Error {
    fn from(err: FinalizeError<S>) -> Self {
        err.error
    }
}

impl<S> PartialEq<Error> for FinalizeError<S> {
    fn eq(&self, other: &Error) -> bool {
        self.error == *other
    }
}

impl<S> fmt::Display for FinalizeError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.session {
            Some(_) => write!(f, "{} (session returned)", self.error),
            None => fmt::Display::fmt(&self.error, f),
        }
    }
}

#[cfg(feature = "std")]
impl<S: fmt::Debug> std::error::Error for FinalizeError<S> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
