//! Session and credential management.
//!
//! Credentials are validated against the `users` collection by exact,
//! case-sensitive comparison of both fields; plaintext comparison is the
//! stored contract. The session is a sanitized copy of the matched user,
//! persisted under its own storage key.

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::access::Role;
use crate::store::{SessionUser, Store, StoreError, User};

/// Why an auth operation failed. Display strings are the exact messages the
/// UI shows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Same message whether the email was unknown or the password wrong, so
    /// error text cannot be used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User already exists")]
    UserAlreadyExists,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Signup form payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    /// Defaults to customer when the form does not pick one.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Validates credentials against the store and owns the session lifecycle.
#[derive(Clone)]
pub struct AuthManager {
    store: Store,
}

impl AuthManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Exact-match login. On success the sanitized user becomes the session.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let user = self
            .store
            .read::<User>()
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = SessionUser::from(user);
        self.store.set_session(&session)?;
        info!("User {} logged in as {}", session.id, session.role);
        Ok(session)
    }

    /// Register a new account and log it in.
    ///
    /// Fails if the email already matches a user record. The new id is the
    /// current time in milliseconds, probed forward past any id already in
    /// use so it is unique versus all prior ids.
    pub fn signup(&self, new_user: NewUser) -> Result<SessionUser, AuthError> {
        let mut users = self.store.read::<User>();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: allocate_id(&users),
            email: new_user.email,
            password: new_user.password,
            role: new_user
                .role
                .unwrap_or_else(|| Role::Customer.as_str().to_string()),
            name: new_user.name,
            phone: new_user.phone,
            address: new_user.address,
            department: None,
            status: None,
        };

        let session = SessionUser::from(user.clone());
        users.push(user);
        self.store.write(users)?;
        self.store.set_session(&session)?;
        info!("New {} account {} created", session.role, session.id);
        Ok(session)
    }

    /// Drop the session. The document is untouched.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.clear_session()
    }

    /// The stored session, if present and parseable.
    pub fn current_session(&self) -> Option<SessionUser> {
        self.store.session()
    }

    /// True iff a session exists and its role matches `required` exactly.
    pub fn has_role(&self, required: Role) -> bool {
        self.current_session()
            .is_some_and(|user| user.role == required.as_str())
    }
}

fn allocate_id(users: &[User]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    loop {
        let id = candidate.to_string();
        if !users.iter().any(|u| u.id == id) {
            return id;
        }
        candidate += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_auth() -> AuthManager {
        let store = Store::in_memory();
        store.initialize().unwrap();
        AuthManager::new(store)
    }

    #[test]
    fn test_login_succeeds_for_every_seeded_user() {
        let store = Store::in_memory();
        store.initialize().unwrap();
        let auth = AuthManager::new(store.clone());

        for user in store.read::<User>() {
            let session = auth.login(&user.email, &user.password).unwrap();
            assert_eq!(session.id, user.id);
            assert_eq!(session.role, user.role);
        }
    }

    #[test]
    fn test_login_result_has_no_password() {
        let auth = seeded_auth();
        let session = auth.login("afrin@example.com", "password").unwrap();
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_login_failures_share_one_message() {
        let auth = seeded_auth();

        let wrong_password = auth.login("afrin@example.com", "nope").unwrap_err();
        let unknown_email = auth.login("nobody@example.com", "password").unwrap_err();

        assert_eq!(wrong_password.to_string(), "Invalid credentials");
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[test]
    fn test_login_is_case_sensitive() {
        let auth = seeded_auth();
        assert!(matches!(
            auth.login("Afrin@example.com", "password"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("afrin@example.com", "Password"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_failed_login_leaves_no_session() {
        let auth = seeded_auth();
        let _ = auth.login("afrin@example.com", "nope");
        assert_eq!(auth.current_session(), None);
    }

    #[test]
    fn test_signup_rejects_existing_email() {
        let auth = seeded_auth();
        let err = auth
            .signup(NewUser {
                email: "afrin@example.com".into(),
                password: "different".into(),
                name: "Someone Else".into(),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists");
    }

    #[test]
    fn test_signup_appends_one_record_with_unique_id() {
        let store = Store::in_memory();
        store.initialize().unwrap();
        let auth = AuthManager::new(store.clone());

        let before = store.read::<User>();
        let session = auth
            .signup(NewUser {
                email: "ravi@example.com".into(),
                password: "hunter2".into(),
                name: "Ravi Teja".into(),
                phone: Some("+91-9876543299".into()),
                ..Default::default()
            })
            .unwrap();

        let after = store.read::<User>();
        assert_eq!(after.len(), before.len() + 1);
        assert!(before.iter().all(|u| u.id != session.id));
        assert_eq!(after.last().unwrap().id, session.id);
    }

    #[test]
    fn test_signup_defaults_role_to_customer() {
        let auth = seeded_auth();
        let session = auth
            .signup(NewUser {
                email: "ravi@example.com".into(),
                password: "hunter2".into(),
                name: "Ravi Teja".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.role, "customer");
    }

    #[test]
    fn test_signup_honors_explicit_role() {
        let auth = seeded_auth();
        let session = auth
            .signup(NewUser {
                email: "lead@example.com".into(),
                password: "hunter2".into(),
                name: "Team Lead".into(),
                role: Some("manager".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.role, "manager");
        assert!(auth.has_role(Role::Manager));
    }

    #[test]
    fn test_rapid_signups_get_distinct_ids() {
        let auth = seeded_auth();
        let a = auth
            .signup(NewUser {
                email: "a@example.com".into(),
                password: "pw".into(),
                name: "A".into(),
                ..Default::default()
            })
            .unwrap();
        let b = auth
            .signup(NewUser {
                email: "b@example.com".into(),
                password: "pw".into(),
                name: "B".into(),
                ..Default::default()
            })
            .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_signed_up_user_can_log_back_in() {
        let auth = seeded_auth();
        auth.signup(NewUser {
            email: "ravi@example.com".into(),
            password: "hunter2".into(),
            name: "Ravi Teja".into(),
            ..Default::default()
        })
        .unwrap();
        auth.logout().unwrap();

        let session = auth.login("ravi@example.com", "hunter2").unwrap();
        assert_eq!(session.email, "ravi@example.com");
    }

    #[test]
    fn test_logout_clears_session_and_keeps_users() {
        let store = Store::in_memory();
        store.initialize().unwrap();
        let auth = AuthManager::new(store.clone());

        auth.login("admin@test.com", "password").unwrap();
        assert!(auth.current_session().is_some());

        let users_before = store.read::<User>();
        auth.logout().unwrap();
        assert_eq!(auth.current_session(), None);
        assert_eq!(store.read::<User>(), users_before);
    }

    #[test]
    fn test_has_role_matches_exactly() {
        let auth = seeded_auth();
        assert!(!auth.has_role(Role::Admin));

        auth.login("admin@test.com", "password").unwrap();
        assert!(auth.has_role(Role::Admin));
        assert!(!auth.has_role(Role::Manager));
        assert!(!auth.has_role(Role::Customer));
    }
}
