mod common;

use af_platform::models::auth::PlatformRole;
use af_platform::models::user::{AccessRecord, AccountRecord, CompanyMemberRecord};
use af_platform::repositories::{InMemoryUserDirectory, UserDirectory};
use af_platform::utils::errors::{AppError, AppResult};
use async_trait::async_trait;
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::*;
use serde_json::json;
use std::sync::Arc;

fn account(uid: &str, first: &str, last: &str, account_type: &str) -> AccountRecord {
    AccountRecord {
        uid: uid.to_string(),
        email: Some(format!("{}@example.com", uid)),
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        phone_number: None,
        account_type: account_type.to_string(),
        created_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()),
    }
}

fn directory() -> InMemoryUserDirectory {
    InMemoryUserDirectory::new(
        vec![
            account("staff-1", "Aina", "Yusof", "staff"),
            account("cust-1", "Ben", "Ong", "company"),
            account("cust-2", "Chloe", "Kumar", "company"),
            account("staff-2", "Dev", "Abdullah", "staff"),
        ],
        vec![
            AccessRecord {
                uid: "staff-1".to_string(),
                valid_access: Some(true),
                last_login: Some(Utc.with_ymd_and_hms(2026, 10, 14, 8, 0, 0).unwrap()),
            },
            AccessRecord {
                uid: "cust-1".to_string(),
                valid_access: Some(true),
                last_login: None,
            },
        ],
        vec![CompanyMemberRecord {
            uid: "cust-1".to_string(),
            company_id: Some("CO-88".to_string()),
            role: Some("manager".to_string()),
        }],
    )
}

fn app() -> axum::Router {
    // el directorio no llama al servicio de embarques
    create_test_app("http://127.0.0.1:9", Arc::new(directory()))
}

#[tokio::test]
async fn test_list_users_merged_and_ordered() {
    let token = token_for("staff-1", PlatformRole::Staff);
    let (status, body) = send(&app(), "GET", "/api/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let users = body["data"].as_array().unwrap();
    let order: Vec<&str> = users.iter().map(|u| u["uid"].as_str().unwrap()).collect();
    assert_eq!(order, vec!["cust-2", "cust-1", "staff-2", "staff-1"]);

    let cust_1 = &users[1];
    assert_eq!(cust_1["company_id"], "CO-88");
    assert_eq!(cust_1["role"], "manager");
    assert_eq!(cust_1["valid_access"], true);
    assert_eq!(cust_1["account_type"], "company");

    let cust_2 = &users[0];
    assert_eq!(cust_2["company_id"], json!(null));
    assert_eq!(cust_2["role"], "unknown");
    assert_eq!(cust_2["valid_access"], false);
    assert_eq!(cust_2["last_login"], json!(null));
    assert_eq!(cust_2["phone_number"], "");
}

#[tokio::test]
async fn test_customer_cannot_list_users() {
    let token = token_for("cust-1", PlatformRole::Customer);
    let (_, body) = send(&app(), "GET", "/api/users", Some(&token), None).await;

    assert_eq!(body, json!({ "success": false, "error": "Unauthorized" }));
}

#[tokio::test]
async fn test_get_user_by_uid() {
    let token = token_for("staff-2", PlatformRole::Admin);
    let (_, body) = send(&app(), "GET", "/api/users/staff-1", Some(&token), None).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["last_name"], "Yusof");
    assert_eq!(body["data"]["last_login"], "2026-10-14T08:00:00Z");
    assert_eq!(body["data"]["role"], "unknown");
}

#[tokio::test]
async fn test_get_unknown_user_is_failure() {
    let token = token_for("staff-2", PlatformRole::Admin);
    let (_, body) = send(&app(), "GET", "/api/users/ghost", Some(&token), None).await;

    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User with id 'ghost' not found");
}

#[tokio::test]
async fn test_profile_returns_own_record() {
    let token = token_for("cust-1", PlatformRole::Customer);
    let (_, body) = send(&app(), "GET", "/api/profile", Some(&token), None).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["uid"], "cust-1");
    assert_eq!(body["data"]["first_name"], "Ben");
}

#[tokio::test]
async fn test_site_and_health_are_public() {
    let (status, body) = send(&app(), "GET", "/api/site/services", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.as_array().unwrap().is_empty());

    let (status, body) = send(&app(), "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, body) = send(&app(), "GET", "/api/nothing-here", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_company_profile_is_public() {
    let (status, body) = send(&app(), "GET", "/api/site/company", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "AcceleFreight");
    assert_eq!(body["contact_email"], "enquiries@accelefreight.com");
    assert!(!body["offices"].as_array().unwrap().is_empty());
}

// Directorio cuyo registro de accesos no responde
struct AccessOutage {
    inner: InMemoryUserDirectory,
}

#[async_trait]
impl UserDirectory for AccessOutage {
    async fn accounts(&self) -> AppResult<Vec<AccountRecord>> {
        self.inner.accounts().await
    }

    async fn access_records(&self) -> AppResult<Vec<AccessRecord>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn company_members(&self) -> AppResult<Vec<CompanyMemberRecord>> {
        self.inner.company_members().await
    }

    async fn account(&self, uid: &str) -> AppResult<Option<AccountRecord>> {
        self.inner.account(uid).await
    }

    async fn access_record(&self, _uid: &str) -> AppResult<Option<AccessRecord>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn company_member(&self, uid: &str) -> AppResult<Option<CompanyMemberRecord>> {
        self.inner.company_member(uid).await
    }
}

#[tokio::test]
async fn test_failed_fetch_fails_the_whole_merge() {
    let app = create_test_app(
        "http://127.0.0.1:9",
        Arc::new(AccessOutage {
            inner: directory(),
        }),
    );
    let token = token_for("staff-1", PlatformRole::Staff);

    let (status, body) = send(&app, "GET", "/api/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to read from the user directory" })
    );

    let (_, body) = send(&app, "GET", "/api/users/cust-1", Some(&token), None).await;
    assert_eq!(
        body,
        json!({ "success": false, "error": "Failed to read from the user directory" })
    );
}
