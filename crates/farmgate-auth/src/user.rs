//! User types.

use farmgate_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated customer, as reported by the auth backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Mobile number.
    pub phone: String,
    /// Whether the mobile number passed OTP verification.
    #[serde(default)]
    pub phone_verified: bool,
}
