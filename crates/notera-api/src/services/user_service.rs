//! User domain service: registration, login, profile, logout.

use std::sync::Arc;

use tracing::{debug, info};

use notera_core::validation;
use notera_core::{
    Error, LoginUserRequest, RegisterUserRequest, Result, UpdateUserRequest, User, UserResponse,
    UserStore,
};

/// Login failures are deliberately indistinguishable: the caller cannot tell
/// an unknown username from a wrong password.
const LOGIN_FAILED: &str = "Username or password is wrong";

/// Stateless user service holding the credential store as an explicit
/// dependency.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// The password is hashed before it ever reaches the store; the returned
    /// profile carries neither hash nor token.
    pub async fn register(&self, req: RegisterUserRequest) -> Result<UserResponse> {
        validation::validate_register(&req)?;

        if self.store.find_by_username(&req.username).await?.is_some() {
            return Err(Error::Conflict(format!(
                "Username {} is already taken",
                req.username
            )));
        }

        let password_hash =
            notera_crypto::hash_password(&req.password).map_err(|e| Error::Internal(e.to_string()))?;

        let user = User {
            username: req.username,
            name: req.name,
            password_hash,
            session_token: None,
        };
        self.store.insert(&user).await?;

        info!(
            subsystem = "api",
            component = "user_service",
            op = "register",
            username = %user.username,
            "User registered"
        );
        Ok(UserResponse::from_user(&user))
    }

    /// Log a user in, issuing a fresh opaque session token.
    pub async fn login(&self, req: LoginUserRequest) -> Result<UserResponse> {
        validation::validate_login(&req)?;

        let user = match self.store.find_by_username(&req.username).await? {
            Some(user) => user,
            None => return Err(Error::Unauthorized(LOGIN_FAILED.to_string())),
        };

        let verified = notera_crypto::verify_password(&req.password, &user.password_hash)
            .map_err(|e| Error::Internal(e.to_string()))?;
        if !verified {
            return Err(Error::Unauthorized(LOGIN_FAILED.to_string()));
        }

        let token = notera_crypto::generate_session_token();
        self.store.set_token(&user.username, Some(&token)).await?;

        info!(
            subsystem = "api",
            component = "user_service",
            op = "login",
            username = %user.username,
            "User logged in"
        );
        Ok(UserResponse::with_token(&user, token))
    }

    /// Public profile of the already-authenticated user. No store round-trip;
    /// the guard already resolved the record.
    pub fn current(&self, user: &User) -> UserResponse {
        UserResponse::from_user(user)
    }

    /// Partially update name and/or password; omitted fields are unchanged.
    pub async fn update(&self, user: &User, req: UpdateUserRequest) -> Result<UserResponse> {
        validation::validate_update_user(&req)?;

        let password_hash = match &req.password {
            Some(password) => Some(
                notera_crypto::hash_password(password)
                    .map_err(|e| Error::Internal(e.to_string()))?,
            ),
            None => None,
        };

        let updated = self
            .store
            .update_profile(&user.username, req.name.as_deref(), password_hash.as_deref())
            .await?;

        debug!(
            subsystem = "api",
            component = "user_service",
            op = "update",
            username = %user.username,
            "Profile updated"
        );
        Ok(UserResponse::from_user(&updated))
    }

    /// Revoke the session token. Re-using the old token afterwards fails at
    /// the guard with Unauthorized, which also makes a second logout fail.
    pub async fn logout(&self, user: &User) -> Result<bool> {
        self.store.set_token(&user.username, None).await?;

        info!(
            subsystem = "api",
            component = "user_service",
            op = "logout",
            username = %user.username,
            "Session token revoked"
        );
        Ok(true)
    }

    /// Resolve a bearer token to its user, if any. Used by the guard.
    pub async fn resolve_token(&self, token: &str) -> Result<Option<User>> {
        self.store.find_by_token(token).await
    }
}
