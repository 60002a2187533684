//! Wire models for the AlgoCDK marketplace backend.
//!
//! Field names and formats follow what the backend actually serializes,
//! quirks included (`member_ship_type`, the plain `YYYY-MM-DD HH:MM:SS`
//! user timestamps next to RFC 3339 everywhere else).

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Serde adapter for the backend's plain `YYYY-MM-DD HH:MM:SS` timestamps.
///
/// User records carry this format; bots and transactions use RFC 3339.
pub mod plain_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

// --- Roles ---

/// Account role, which also selects the realtime notification channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Map a role tag from the backend onto a [`Role`].
    ///
    /// The backend is loose about casing (`USER`, `User`, `SuperAdmin`),
    /// and anything unrecognized lands on the admin channel, matching the
    /// server's own routing.
    pub fn parse(tag: &str) -> Role {
        match tag.to_ascii_lowercase().as_str() {
            "superadmin" => Role::SuperAdmin,
            "user" => Role::User,
            _ => Role::Admin,
        }
    }

    /// Server-relative path of this role's websocket endpoint.
    pub fn channel_path(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "/api/superadmin/ws",
            Role::User => "/api/user/ws",
            Role::Admin => "/api/admin/ws",
        }
    }
}

// --- Accounts ---

/// A user account as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Only present in login and registration responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(with = "plain_timestamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "plain_timestamp")]
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub total_profits: u64,
    #[serde(default)]
    pub active_bots: u64,
    #[serde(default)]
    pub total_trades: u64,
    /// Membership tier (free, silver, gold). The wire name is the backend's.
    #[serde(rename = "member_ship_type", default)]
    pub membership: String,
    #[serde(default)]
    pub subscription_expiry: Option<DateTime<Utc>>,
    #[serde(default)]
    pub upgrade_request_status: Option<String>,
}

/// Abbreviated account shape embedded in login responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// An admin record, with its linked account and payout details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Admin {
    pub id: u64,
    pub person_id: u64,
    pub person: User,
    #[serde(default)]
    pub bank_code: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub paystack_subaccount_code: String,
    #[serde(default)]
    pub kyc_status: String,
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- Marketplace ---

/// A trading bot listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bot {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub html_file: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    #[serde(default)]
    pub rent_price: f64,
    #[serde(default)]
    pub strategy: String,
    pub owner_id: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub subscription_type: String,
    #[serde(default)]
    pub subscription_expiry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub version: String,
}

/// A user's favorite, joined with the account and the bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: u64,
    pub user_id: u64,
    pub bot_id: u64,
    pub user: User,
    pub bot: Bot,
}

/// A recorded payment, with the revenue split between platform and admin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub user_id: u64,
    #[serde(default)]
    pub admin_id: u64,
    pub bot_id: u64,
    pub amount: f64,
    #[serde(default)]
    pub company_share: f64,
    #[serde(default)]
    pub admin_share: f64,
    #[serde(default)]
    pub reference: String,
    /// "pending", "success" or "failed".
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub payment_channel: String,
    /// "purchase" or "rent".
    #[serde(default)]
    pub payment_type: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// --- Request payloads ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateUserRequest {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(
        rename = "member_ship_type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub membership: Option<String>,
}

/// Body of `DELETE /api/superadmin/delete-user` (the id travels in the
/// body, not the path).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteUserRequest {
    pub id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateAdminRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAdminRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
}

/// Payload for creating or updating a marketplace bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotRequest {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub rent_price: f64,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subscription_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordTransactionRequest {
    pub user_id: u64,
    pub bot_id: u64,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input to `POST /api/user/paystack/init`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentInitRequest {
    pub amount: f64,
    pub admin_id: u64,
    pub bot_id: u64,
    /// "purchase" or "rent".
    pub payment_type: String,
    #[serde(default)]
    pub description: String,
}

// --- Response envelopes ---

/// Plain acknowledgement body used by most mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a successful login or registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub user: Option<UserSummary>,
}

/// `GET /api/user/me` and `GET /api/superadmin/profile` build this by hand
/// on the server side, so everything past the identity fields is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub membership: Option<String>,
    #[serde(default)]
    pub upgrade_status: Option<String>,
}

/// Frame pushed over the realtime channel by the notification hub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_is_case_insensitive_and_defaults_to_admin() {
        assert_eq!(Role::parse("SuperAdmin"), Role::SuperAdmin);
        assert_eq!(Role::parse("USER"), Role::User);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("anything-else"), Role::Admin);
    }

    #[test]
    fn channel_paths_match_backend_routes() {
        assert_eq!(Role::SuperAdmin.channel_path(), "/api/superadmin/ws");
        assert_eq!(Role::User.channel_path(), "/api/user/ws");
        assert_eq!(Role::Admin.channel_path(), "/api/admin/ws");
    }

    #[test]
    fn user_timestamps_use_the_plain_format() {
        let json = r#"{
            "id": 7,
            "name": "Ada",
            "email": "ada@example.com",
            "role": "USER",
            "created_at": "2025-03-01 09:30:00",
            "updated_at": "2025-03-02 10:00:00"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.created_at.format("%H:%M").to_string(), "09:30");

        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["created_at"], "2025-03-01 09:30:00");
        assert_eq!(out["member_ship_type"], "");
    }

    #[test]
    fn login_response_tolerates_minimal_bodies() {
        // Superadmin login returns only a message and a token.
        let resp: LoginResponse =
            serde_json::from_str(r#"{"message":"login successful","token":"jwt"}"#).unwrap();
        assert_eq!(resp.token, "jwt");
        assert!(resp.user.is_none());
    }

    #[test]
    fn optional_request_fields_are_omitted() {
        let req = UpdateUserRequest {
            id: 3,
            name: Some("New Name".into()),
            email: None,
            password: None,
            role: None,
            membership: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"New Name"}"#);
    }
}
