// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Explicit session state shared with the HTTP transport.
//!
//! The session has a defined lifecycle: `login` creates it, `logout`
//! destroys it, and a 401 response from the backend tears it down. The
//! handle is passed by reference to the client at construction rather
//! than read from ambient global state, so ownership of the lifecycle is
//! visible at every call site.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// An authenticated session.
#[derive(Debug, Clone)]
struct Session {
    token: String,
}

/// A shared, clonable handle to the current session.
///
/// All clones observe the same session: a logout or a 401 teardown through
/// any clone is visible to every client holding one.
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionHandle {
    /// Creates a handle with no active session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Establishes a session from a bearer token.
    pub fn login(&self, token: impl Into<String>) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Session {
            token: token.into(),
        });
        info!("session established");
    }

    /// Destroys the current session.
    pub fn logout(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        info!("session closed");
    }

    /// Tears the session down after the backend reported it expired.
    pub(crate) fn expire(&self) {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            warn!("session expired by backend");
        }
    }

    /// Returns the current bearer token, if a session is active.
    #[must_use]
    pub fn bearer_token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|session| session.token.clone())
    }

    /// Returns true if a session is active.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
