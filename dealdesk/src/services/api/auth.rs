//! # Authentication Endpoints
//!
//! Sign-up, sign-in and sign-out against the API, plus the local session
//! state derived from the stored token.
//!
//! ## Session states
//!
//! ```text
//! no token ───────────────────────────────► Anonymous
//! token, payload decodes ─────────────────► Authenticated(user)
//! token, payload undecodable ── evict ────► Anonymous
//! ```
//!
//! Sign-out removes the stored token only after the server call succeeds; a
//! failed sign-out leaves the token in place.

use lib_auth::decode_unverified;
use shared::{AuthResponse, LoginRequest, SignupRequest, User};

use super::client::{ApiClient, RequestOptions};
use crate::core::error::ApiError;
use crate::services::session::SessionStore;

pub const SIGNUP_PATH: &str = "/api/v1/users/signup";
pub const LOGIN_PATH: &str = "/api/v1/users/login";
pub const SIGNOUT_PATH: &str = "/auth/signout";

/// Local view of the session, derived from the session store alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    /// Derive the state from `store`, evicting a token whose payload cannot be read.
    ///
    /// The identity comes from an unverified token payload and is only fit
    /// for display.
    pub fn resolve(store: &dyn SessionStore) -> Self {
        let token = match store.token() {
            Some(token) if !token.is_empty() => token,
            _ => return SessionState::Anonymous,
        };

        match decode_unverified(&token) {
            Ok(claims) => SessionState::Authenticated(User {
                id: claims.sub,
                name: claims.name,
                email: claims.email,
                token: Some(token),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Evicting unreadable session token");
                store.clear();
                SessionState::Anonymous
            }
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Sign up a new user and persist the returned token.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_up(
    client: &ApiClient,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    tracing::info!("Attempting sign-up");

    let request = SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: AuthResponse = client
        .request(SIGNUP_PATH, RequestOptions::post().json(&request)?)
        .await?;

    Ok(start_session(client, response))
}

/// Sign in with email and password and persist the returned token.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn sign_in(client: &ApiClient, email: &str, password: &str) -> Result<User, ApiError> {
    tracing::info!("Attempting sign-in");

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response: AuthResponse = client
        .request(LOGIN_PATH, RequestOptions::post().json(&request)?)
        .await?;

    Ok(start_session(client, response))
}

fn start_session(client: &ApiClient, response: AuthResponse) -> User {
    client.session().set_token(&response.token);
    tracing::info!(user_id = %response.user.id, "Session started");
    response.into_user()
}

/// End the session on the server, then drop the stored token.
#[tracing::instrument(skip(client))]
pub async fn sign_out(client: &ApiClient) -> Result<(), ApiError> {
    client
        .request_unit(SIGNOUT_PATH, RequestOptions::post())
        .await?;
    client.session().clear();
    tracing::info!("Signed out");
    Ok(())
}

/// The user the stored token claims to be. No network call, no signature check.
pub fn unverified_local_user(client: &ApiClient) -> Option<User> {
    SessionState::resolve(client.session()).into_user()
}
