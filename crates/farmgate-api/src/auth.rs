//! Authentication service.

use crate::envelope::extract_error_message;
use crate::ApiError;
use farmgate_auth::{AuthToken, User};
use farmgate_data::{FetchClient, Response, Transport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Token grant as the auth endpoints serve it.
///
/// Unlike the resource endpoints, the token sits at the top level of the
/// body rather than under `data`.
#[derive(Debug, Deserialize)]
struct TokenGrant {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    user: Option<User>,
}

/// A successful login: the granted token plus the user it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSession {
    /// Bearer token for subsequent requests.
    pub token: AuthToken,
    /// The logged-in user.
    pub user: User,
}

/// Typed access to the auth endpoints.
pub struct AuthService<T: Transport> {
    client: FetchClient<T>,
}

impl<T: Transport> AuthService<T> {
    /// Create the service over a configured client.
    pub fn new(client: FetchClient<T>) -> Self {
        Self { client }
    }

    /// Log in with email and password (`POST /auth/login`).
    pub fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        let response = self
            .client
            .post("/auth/login")
            .json(&LoginRequest { email, password })?
            .send()?;
        let (token, grant) = self.parse_grant(response)?;
        let user = grant
            .user
            .ok_or_else(|| ApiError::Decode("login response carried no user".to_string()))?;
        Ok(LoginSession { token, user })
    }

    /// Invalidate the current token (`POST /auth/logout`).
    ///
    /// Callers clear their local session regardless of the result; this
    /// only tells the backend to revoke the token.
    pub fn logout(&self, token: &AuthToken) -> Result<(), ApiError> {
        let response = self
            .client
            .post("/auth/logout")
            .bearer_auth(token.bearer())
            .send()?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: response.status,
                message: extract_error_message(&response),
            })
        }
    }

    /// Exchange the current token for a fresh one (`POST /auth/refresh`).
    pub fn refresh(&self, token: &AuthToken) -> Result<AuthToken, ApiError> {
        let response = self
            .client
            .post("/auth/refresh")
            .bearer_auth(token.bearer())
            .send()?;
        let (token, _) = self.parse_grant(response)?;
        Ok(token)
    }

    /// Fetch the user behind a token (`GET /auth/me`).
    pub fn me(&self, token: &AuthToken) -> Result<User, ApiError> {
        let response = self
            .client
            .get("/auth/me")
            .bearer_auth(token.bearer())
            .send()?;
        if !response.is_success() {
            return Err(ApiError::Rejected {
                status: response.status,
                message: extract_error_message(&response),
            });
        }

        #[derive(Deserialize)]
        struct MeBody {
            user: Option<User>,
        }
        let body: MeBody = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        body.user
            .ok_or_else(|| ApiError::Decode("me response carried no user".to_string()))
    }

    fn parse_grant(&self, response: Response) -> Result<(AuthToken, TokenGrant), ApiError> {
        if !response.is_success() {
            return Err(ApiError::Rejected {
                status: response.status,
                message: extract_error_message(&response),
            });
        }
        let status = response.status;
        let grant: TokenGrant = response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let granted = grant.access_token.clone().filter(|_| grant.success);
        let Some(access_token) = granted else {
            return Err(ApiError::Rejected {
                status,
                message: grant
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| "Authentication failed".to_string()),
            });
        };

        let token = match grant.expires_in {
            Some(expires_in) => AuthToken::with_expiry(access_token, current_timestamp(), expires_in),
            None => AuthToken::new(access_token),
        };
        Ok((token, grant))
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
