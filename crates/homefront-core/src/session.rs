//! Session collaborator contract
//!
//! The header only reads the current user and asks for a logout. How the
//! session is established or persisted belongs to the provider.

use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// Signed-in user as exposed by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read-only view of the session plus the logout action
pub trait SessionProvider {
    fn user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool;

    /// Fire-and-forget from the header's point of view
    fn logout(&self) -> Result<(), SessionError>;
}

/// In-memory session, used by the CLI preview and in tests
#[derive(Debug, Default)]
pub struct StaticSession {
    user: RefCell<Option<User>>,
    logout_calls: Cell<usize>,
    fail_logout: bool,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(name: impl Into<String>) -> Self {
        Self {
            user: RefCell::new(Some(User::new(name))),
            ..Self::default()
        }
    }

    /// A session whose logout always reports failure and keeps the user
    pub fn with_failing_logout(mut self) -> Self {
        self.fail_logout = true;
        self
    }

    pub fn logout_calls(&self) -> usize {
        self.logout_calls.get()
    }
}

impl SessionProvider for StaticSession {
    fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    fn logout(&self) -> Result<(), SessionError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        if self.fail_logout {
            return Err(SessionError::LogoutFailed {
                message: "logout rejected".to_string(),
            });
        }
        if self.user.borrow_mut().take().is_none() {
            return Err(SessionError::NotAuthenticated);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_session_logout_clears_user() {
        let session = StaticSession::signed_in("Ayman");
        assert!(session.is_authenticated());

        session.logout().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
        assert_eq!(session.logout_calls(), 1);
    }

    #[test]
    fn test_logout_when_anonymous() {
        let session = StaticSession::anonymous();
        assert_eq!(session.logout(), Err(SessionError::NotAuthenticated));
    }

    #[test]
    fn test_failing_logout_keeps_user() {
        let session = StaticSession::signed_in("Rana").with_failing_logout();
        assert!(session.logout().is_err());
        assert!(session.is_authenticated());
    }
}
