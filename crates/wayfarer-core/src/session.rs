//! Signed-in user state.
//!
//! The session only remembers who is signed in. There is no authentication
//! backend: [`AuthSession::login`] accepts any non-blank credentials.

use log::info;

use crate::{
    error::{Result, WayfarerError},
    models::User,
    params::{EditProfile, Login},
};

/// Holds the currently signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    current_user: Option<User>,
}

impl AuthSession {
    /// Create a signed-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current user. `None` signs out.
    pub fn set_user(&mut self, user: Option<User>) {
        match &user {
            Some(user) => info!("Signed in as {}", user.username),
            None => info!("Signed out"),
        }
        self.current_user = user;
    }

    /// Validate the sign-in form and make its user current.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::InvalidInput` - when the username or password is blank;
    ///   the session is left unchanged
    pub fn login(&mut self, params: &Login) -> Result<User> {
        let user = params.validate()?;
        self.set_user(Some(user.clone()));
        Ok(user)
    }

    /// Apply a profile edit to the signed-in user.
    ///
    /// # Errors
    ///
    /// * `WayfarerError::NotSignedIn` - when nobody is signed in
    /// * `WayfarerError::InvalidInput` - when the edit does not validate; the
    ///   session is left unchanged
    pub fn update_profile(&mut self, params: &EditProfile) -> Result<User> {
        let current = self.current_user.as_ref().ok_or(WayfarerError::NotSignedIn)?;
        let user = params.validate(current)?;
        info!("Profile updated for user {}", user.id);
        self.current_user = Some(user.clone());
        Ok(user)
    }

    /// Clear the current user. Signing out twice is harmless.
    pub fn logout(&mut self) {
        self.set_user(None);
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// True exactly when a user is set.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_form(username: &str, password: &str) -> Login {
        Login {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_new_session_is_signed_out() {
        let session = AuthSession::new();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_set_user_then_logout() {
        let mut session = AuthSession::new();
        session.set_user(Some(User::new("1", "a")));
        assert!(session.is_authenticated());
        assert_eq!(session.current_user().map(|u| u.username.as_str()), Some("a"));

        session.logout();
        assert!(!session.is_authenticated());
        session.logout();
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_set_user_none_signs_out() {
        let mut session = AuthSession::new();
        session.set_user(Some(User::new("1", "a")));
        session.set_user(None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_sets_user() {
        let mut session = AuthSession::new();
        let user = session.login(&login_form("alice", "pw")).unwrap();
        assert_eq!(user, User::new("1", "alice"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_previous_user() {
        let mut session = AuthSession::new();
        session.set_user(Some(User::new("1", "alice")));

        let result = session.login(&login_form("", "pw"));
        assert!(matches!(
            result,
            Err(WayfarerError::InvalidInput { ref field, .. }) if field == "username"
        ));
        assert_eq!(
            session.current_user().map(|u| u.username.as_str()),
            Some("alice")
        );
    }

    #[test]
    fn test_update_profile_requires_user() {
        let mut session = AuthSession::new();
        let result = session.update_profile(&EditProfile {
            username: Some("bob".to_string()),
            avatar: None,
        });
        assert!(matches!(result, Err(WayfarerError::NotSignedIn)));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_update_profile_changes_current_user() {
        let mut session = AuthSession::new();
        session.login(&login_form("alice", "pw")).unwrap();

        let user = session
            .update_profile(&EditProfile {
                username: None,
                avatar: Some("https://img.example/alice.png".to_string()),
            })
            .unwrap();
        assert_eq!(session.current_user(), Some(&user));
        assert_eq!(user.username, "alice");
        assert_eq!(user.avatar.as_deref(), Some("https://img.example/alice.png"));

        let failed = session.update_profile(&EditProfile {
            username: Some(String::new()),
            avatar: None,
        });
        assert!(failed.is_err());
        assert_eq!(session.current_user(), Some(&user));
    }
}
