//! Identity provider port exposing the signed-in user.

use crate::task::domain::UserProfile;

/// Source of the currently authenticated user.
pub trait IdentityProvider: Send + Sync {
    /// Returns the signed-in user's profile, or `None` when signed out.
    fn current_user(&self) -> Option<UserProfile>;
}
