//! Endpoint wrappers against a mock backend: fixed paths, verbs and
//! payloads, decoded into the shared models.

use std::sync::Arc;

use algocdk_client::{ApiClient, StaticCredentials};
use algocdk_shared::{LoginRequest, PaymentInitRequest, UpdateAdminRequest};
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new()
        .with_base_url(server.base_url())
        .with_credentials(Arc::new(StaticCredentials::new("test-token")))
}

#[tokio::test]
async fn login_posts_credentials_and_decodes_the_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/auth/login")
            .json_body(json!({"email": "ada@example.com", "password": "pw"}));
        then.status(200).json_body(json!({
            "message": "login successful",
            "token": "jwt-1",
            "role": "User",
            "membership": "free",
            "user": {"id": 1, "name": "Ada", "email": "ada@example.com"}
        }));
    });

    let resp = client(&server).login("ada@example.com", "pw").await.unwrap();
    assert_eq!(resp.token, "jwt-1");
    assert_eq!(resp.user.unwrap().name, "Ada");
    mock.assert();
}

#[tokio::test]
async fn marketplace_decodes_the_bot_listing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/marketplace");
        then.status(200).json_body(json!([{
            "id": 3,
            "name": "Digit Differ",
            "price": 49.99,
            "rent_price": 9.99,
            "strategy": "digit",
            "owner_id": 2,
            "created_at": "2025-04-01T12:00:00Z",
            "updated_at": "2025-04-02T08:30:00Z",
            "status": "active",
            "category": "digit"
        }]));
    });

    let bots = client(&server).marketplace().await.unwrap();
    assert_eq!(bots.len(), 1);
    assert_eq!(bots[0].name, "Digit Differ");
    assert_eq!(bots[0].price, 49.99);
}

#[tokio::test]
async fn users_decode_with_plain_timestamps() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/superadmin/users");
        then.status(200).json_body(json!([{
            "id": 5,
            "name": "Grace",
            "email": "grace@example.com",
            "role": "USER",
            "created_at": "2025-01-15 08:00:00",
            "updated_at": "2025-01-16 09:00:00",
            "member_ship_type": "gold"
        }]));
    });

    let users = client(&server).users().await.unwrap();
    assert_eq!(users[0].membership, "gold");
}

#[tokio::test]
async fn toggle_favorite_posts_to_the_bot_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST).path("/api/user/favorites/42");
        then.status(200).json_body(json!({"message": "added to favorites"}));
    });

    let resp = client(&server).toggle_favorite(42).await.unwrap();
    assert_eq!(resp.message, "added to favorites");
    mock.assert();
}

#[tokio::test]
async fn delete_user_sends_the_id_in_the_body() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::DELETE)
            .path("/api/superadmin/delete-user")
            .header("content-type", "application/json")
            .json_body(json!({"id": 9}));
        then.status(200).json_body(json!({"message": "User deleted successfully"}));
    });

    client(&server).delete_user(9).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn update_admin_puts_to_the_id_path() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PUT)
            .path("/api/superadmin/update-admin/4")
            .json_body(json!({"name": "New Name"}));
        then.status(200).json_body(json!({"message": "updated"}));
    });

    let update = UpdateAdminRequest {
        name: Some("New Name".into()),
        email: None,
        bank_code: None,
        account_number: None,
        account_name: None,
    };
    let _ = client(&server).update_admin(4, &update).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn toggle_admin_status_uses_patch() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::PATCH).path("/api/superadmin/toggle-admin/7");
        then.status(200).json_body(json!({"message": "admin suspended"}));
    });

    client(&server).toggle_admin_status(7).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn superadmin_login_accepts_a_minimal_response() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::POST).path("/api/superadmin/login");
        then.status(200)
            .json_body(json!({"message": "login successful", "token": "root-jwt"}));
    });

    let credentials = LoginRequest {
        email: "root@algocdk.com".into(),
        password: "pw".into(),
    };
    let resp = client(&server).superadmin_login(&credentials).await.unwrap();
    assert_eq!(resp.token, "root-jwt");
    assert!(resp.role.is_none());
}

#[tokio::test]
async fn verify_payment_encodes_the_reference() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::GET)
            .path("/api/user/paystack/verify")
            .query_param("reference", "ref 42/a");
        then.status(200).json_body(json!({"status": "success"}));
    });

    let resp = client(&server).verify_payment("ref 42/a").await.unwrap();
    assert_eq!(resp["status"], "success");
    mock.assert();
}

#[tokio::test]
async fn initialize_payment_posts_the_full_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(Method::POST)
            .path("/api/user/paystack/init")
            .json_body(json!({
                "amount": 120.0,
                "admin_id": 2,
                "bot_id": 3,
                "payment_type": "purchase",
                "description": "Digit Differ purchase"
            }));
        then.status(200)
            .json_body(json!({"authorization_url": "https://paystack.test/pay"}));
    });

    let payment = PaymentInitRequest {
        amount: 120.0,
        admin_id: 2,
        bot_id: 3,
        payment_type: "purchase".into(),
        description: "Digit Differ purchase".into(),
    };
    let resp = client(&server).initialize_payment(&payment).await.unwrap();
    assert_eq!(resp["authorization_url"], "https://paystack.test/pay");
    mock.assert();
}

#[tokio::test]
async fn dashboards_return_caller_defined_json() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/superadmin/dashboard");
        then.status(200).json_body(json!({
            "message": "Welcome to the SuperAdmin Dashboard",
            "user": {"id": 1, "name": "Root"}
        }));
    });

    let dash = client(&server).superadmin_dashboard().await.unwrap();
    assert_eq!(dash["user"]["name"], "Root");
}

#[tokio::test]
async fn errors_surface_uniformly_across_wrappers() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/api/admin/bots");
        then.status(401).json_body(json!({"error": "unauthorized"}));
    });

    let err = client(&server).admin_bots().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
}
