//! Context shared between threads

use crate::context::Context;
use eccel_api::Accelerator;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A [`Context`] behind a mutex, cloneable across threads
///
/// The lock serializes callers; it does not queue operations. A start made
/// while another caller's operation is pending still fails with a sequence
/// error.
pub struct SharedContext<A> {
    inner: Arc<Mutex<Context<A>>>,
}

impl<A> Clone for SharedContext<A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: Accelerator> SharedContext<A> {
    pub fn new(context: Context<A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(context)),
        }
    }

    /// Lock the context
    ///
    /// A panic while holding the lock does not corrupt the state machine, so
    /// poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, Context<A>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with the context locked
    pub fn with<T>(&self, f: impl FnOnce(&mut Context<A>) -> T) -> T {
        f(&mut self.lock())
    }

    /// Recover the context once no other handle is alive
    pub fn try_unwrap(self) -> Result<Context<A>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}
