//! Fixed identity provider.

use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{domain::UserProfile, ports::IdentityProvider};

/// Identity provider returning a configurable signed-in user.
///
/// Clones share the same session, so signing out through one handle is
/// visible to services holding another.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    user: Arc<RwLock<Option<UserProfile>>>,
}

impl StaticIdentityProvider {
    /// Creates a provider with `user` signed in.
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self {
            user: Arc::new(RwLock::new(Some(user))),
        }
    }

    /// Creates a provider with nobody signed in.
    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Replaces the signed-in user.
    ///
    /// The session holds a single value, so a lock poisoned by a panicking
    /// holder is recovered rather than leaving the old user in place.
    pub fn sign_in(&self, user: UserProfile) {
        self.replace(Some(user));
    }

    /// Clears the signed-in user.
    pub fn sign_out(&self) {
        self.replace(None);
    }

    fn replace(&self, user: Option<UserProfile>) {
        let mut guard = self.user.write().unwrap_or_else(PoisonError::into_inner);
        *guard = user;
        self.user.clear_poison();
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn current_user(&self) -> Option<UserProfile> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
