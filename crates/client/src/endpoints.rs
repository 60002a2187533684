//! One wrapper per backend endpoint.
//!
//! Each method forwards a fixed path and verb to the gateway in
//! [`crate::api_client`]; none carries logic of its own. Dashboards and a
//! few create/update responses are hand-built JSON on the server side, so
//! those return [`serde_json::Value`] and leave the shape to the caller.

use algocdk_shared::{
    Admin, ApiError, Bot, BotRequest, CreateAdminRequest, CreateUserRequest, DeleteUserRequest,
    Favorite, LoginRequest, LoginResponse, MessageResponse, PaymentInitRequest, Profile,
    RecordTransactionRequest, RegisterRequest, Transaction, UpdateAdminRequest, UpdateUserRequest,
    User,
};

use crate::api_client::ApiClient;

// --- Auth ---

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/api/auth/login", &body).await
    }

    pub async fn register(&self, user: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/api/auth/register", user).await
    }
}

// --- User ---

impl ApiClient {
    pub async fn profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/api/user/me").await
    }

    pub async fn favorites(&self) -> Result<Vec<Favorite>, ApiError> {
        self.get_json("/api/user/me/favorites").await
    }

    /// Add or remove a bot from the caller's favorites.
    pub async fn toggle_favorite(&self, bot_id: u64) -> Result<MessageResponse, ApiError> {
        self.post_empty(&format!("/api/user/favorites/{bot_id}")).await
    }

    pub async fn request_upgrade(&self) -> Result<MessageResponse, ApiError> {
        self.post_empty("/api/user/request-upgrade").await
    }
}

// --- Marketplace & bots ---

impl ApiClient {
    /// Public listing; works without credentials.
    pub async fn marketplace(&self) -> Result<Vec<Bot>, ApiError> {
        self.get_json("/marketplace").await
    }

    pub async fn admin_bots(&self) -> Result<Vec<Bot>, ApiError> {
        self.get_json("/api/admin/bots").await
    }

    pub async fn create_bot(&self, bot: &BotRequest) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/admin/create-bot", bot).await
    }

    pub async fn update_bot(
        &self,
        bot_id: u64,
        bot: &BotRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.put_json(&format!("/api/admin/update-bot/{bot_id}"), bot)
            .await
    }

    pub async fn delete_bot(&self, bot_id: u64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/admin/delete-bot/{bot_id}")).await
    }
}

// --- Admin transactions ---

impl ApiClient {
    pub async fn admin_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/api/admin/transactions").await
    }

    pub async fn record_transaction(
        &self,
        transaction: &RecordTransactionRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/admin/transactions", transaction).await
    }
}

// --- Superadmin ---

impl ApiClient {
    pub async fn superadmin_login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.post_json("/api/superadmin/login", credentials).await
    }

    pub async fn superadmin_register(
        &self,
        user: &RegisterRequest,
    ) -> Result<LoginResponse, ApiError> {
        self.post_json("/api/superadmin/register", user).await
    }

    pub async fn superadmin_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/api/superadmin/profile").await
    }

    pub async fn users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/superadmin/users").await
    }

    pub async fn create_user(
        &self,
        user: &CreateUserRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/superadmin/create-user", user).await
    }

    pub async fn update_user(
        &self,
        user: &UpdateUserRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/superadmin/update-user", user).await
    }

    /// The id travels in the request body, not the path.
    pub async fn delete_user(&self, user_id: u64) -> Result<MessageResponse, ApiError> {
        self.delete_json("/api/superadmin/delete-user", &DeleteUserRequest { id: user_id })
            .await
    }

    /// Users with a pending admin-upgrade request.
    pub async fn pending_requests(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/api/superadmin/pending-requests").await
    }

    pub async fn approve_upgrade(&self, user_id: u64) -> Result<MessageResponse, ApiError> {
        self.post_empty(&format!("/api/superadmin/promote/{user_id}"))
            .await
    }

    pub async fn reject_upgrade(&self, user_id: u64) -> Result<MessageResponse, ApiError> {
        self.post_empty(&format!("/api/superadmin/reject/{user_id}"))
            .await
    }

    pub async fn admins(&self) -> Result<Vec<Admin>, ApiError> {
        self.get_json("/api/superadmin/admins").await
    }

    pub async fn create_admin(
        &self,
        admin: &CreateAdminRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/superadmin/create-admin", admin).await
    }

    pub async fn update_admin(
        &self,
        admin_id: u64,
        admin: &UpdateAdminRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.put_json(&format!("/api/superadmin/update-admin/{admin_id}"), admin)
            .await
    }

    /// Flip an admin between active and suspended.
    pub async fn toggle_admin_status(&self, admin_id: u64) -> Result<MessageResponse, ApiError> {
        self.patch_empty(&format!("/api/superadmin/toggle-admin/{admin_id}"))
            .await
    }

    pub async fn delete_admin(&self, admin_id: u64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/api/superadmin/delete-admin/{admin_id}"))
            .await
    }

    pub async fn superadmin_bots(&self) -> Result<Vec<Bot>, ApiError> {
        self.get_json("/api/superadmin/bots").await
    }

    /// Re-scan every uploaded bot and refresh its marketplace status.
    pub async fn scan_all_bots(&self) -> Result<serde_json::Value, ApiError> {
        self.post_empty("/api/superadmin/scan-bots").await
    }

    pub async fn all_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json("/api/superadmin/transactions").await
    }
}

// --- Payments ---

impl ApiClient {
    pub async fn initialize_payment(
        &self,
        payment: &PaymentInitRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/api/user/paystack/init", payment).await
    }

    pub async fn verify_payment(&self, reference: &str) -> Result<serde_json::Value, ApiError> {
        let path = format!(
            "/api/user/paystack/verify?reference={}",
            urlencoding::encode(reference)
        );
        self.get_json(&path).await
    }
}

// --- Dashboards ---

impl ApiClient {
    pub async fn admin_dashboard(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/admin/dashboard").await
    }

    pub async fn superadmin_dashboard(&self) -> Result<serde_json::Value, ApiError> {
        self.get_json("/api/superadmin/dashboard").await
    }
}
