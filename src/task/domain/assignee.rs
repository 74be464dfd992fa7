//! Identity attributed to an engaged task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile of the signed-in user as reported by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    display_name: Option<String>,
    email: Option<String>,
}

impl UserProfile {
    /// Creates an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            display_name: None,
            email: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Returns the email address, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Name recorded in `assignedTo` when a task is engaged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignee(String);

impl Assignee {
    /// Fallback used when the profile carries neither a display name nor
    /// a usable email address.
    pub const UNKNOWN: &'static str = "Unknown";

    /// Creates an assignee from a raw name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Resolves the assignee for a signed-in user.
    ///
    /// Prefers the display name, then the local part of the email address
    /// (everything before the first `@`), then [`Self::UNKNOWN`]. Blank
    /// candidates are skipped; a chosen candidate is kept exactly as given.
    #[must_use]
    pub fn resolve(profile: &UserProfile) -> Self {
        let is_blank = |candidate: &&str| candidate.trim().is_empty();
        let from_display_name = profile.display_name().filter(|name| !is_blank(name));
        let from_email = || {
            profile
                .email()
                .and_then(|email| email.split('@').next())
                .filter(|local| !is_blank(local))
        };

        let name = from_display_name
            .or_else(from_email)
            .unwrap_or(Self::UNKNOWN);
        Self(name.to_owned())
    }

    /// Returns the assignee name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the assignee and returns the owned name.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&UserProfile> for Assignee {
    fn from(profile: &UserProfile) -> Self {
        Self::resolve(profile)
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
