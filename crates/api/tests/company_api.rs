//! HTTP-level integration tests for companies and users.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, create, delete, get, post_json, put_json};
use serde_json::json;
use skillcheck_db::store::MemoryStore;

async fn create_recruiter(store: &MemoryStore, email: &str, company_id: i64) -> serde_json::Value {
    create(
        store,
        "/api/users",
        json!({
            "firstName": "Rita",
            "lastName": "Recruiter",
            "email": email,
            "role": "RECRUITER",
            "companyId": company_id,
        }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Company CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_company_returns_201() {
    let store = MemoryStore::new();
    let response = post_json(
        common::build_test_app(store),
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "C-100"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["companyNumber"], "C-100");
    assert!(json["id"].is_number());
}

#[tokio::test]
async fn test_duplicate_company_number_returns_409() {
    let store = MemoryStore::new();
    create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "C-100"}),
    )
    .await;

    let response = post_json(
        common::build_test_app(store.clone()),
        "/api/companies",
        json!({"companyName": "Acme2", "companyNumber": "C-100"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");

    let list = body_json(get(common::build_test_app(store), "/api/companies").await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_blank_company_name_returns_400() {
    let response = post_json(
        common::build_test_app(MemoryStore::new()),
        "/api/companies",
        json!({"companyName": "   ", "companyNumber": "C-1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_missing_company_field_is_client_error() {
    let response = post_json(
        common::build_test_app(MemoryStore::new()),
        "/api/companies",
        json!({"companyName": "Acme"}),
    )
    .await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_get_company_by_number_embeds_recruiters() {
    let store = MemoryStore::new();
    let company = create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "C-100"}),
    )
    .await;
    let id = company["id"].as_i64().unwrap();
    let rita = create_recruiter(&store, "rita@acme.io", id).await;

    let response = get(common::build_test_app(store.clone()), "/api/companies/number/C-100").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["recruiters"], json!([rita]));

    let recruiters = body_json(
        get(
            common::build_test_app(store),
            &format!("/api/companies/{id}/recruiters"),
        )
        .await,
    )
    .await;
    assert_eq!(recruiters, json!([rita]));
}

#[tokio::test]
async fn test_get_unknown_company_returns_empty_404() {
    let store = MemoryStore::new();

    let response = get(common::build_test_app(store.clone()), "/api/companies/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(response).await.is_empty());

    let response = get(common::build_test_app(store), "/api/companies/number/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_company_is_partial() {
    let store = MemoryStore::new();
    let company = create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "C-100"}),
    )
    .await;
    let id = company["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(store),
        &format!("/api/companies/{id}"),
        json!({"id": 777, "companyName": "Acme Ltd"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["companyName"], "Acme Ltd");
    assert_eq!(json["companyNumber"], "C-100");
}

#[tokio::test]
async fn test_delete_company_removes_its_recruiters() {
    let store = MemoryStore::new();
    let acme = create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "1"}),
    )
    .await;
    let other = create(
        &store,
        "/api/companies",
        json!({"companyName": "Other", "companyNumber": "2"}),
    )
    .await;
    let acme_id = acme["id"].as_i64().unwrap();
    create_recruiter(&store, "a@acme.io", acme_id).await;
    let kept = create_recruiter(&store, "b@other.io", other["id"].as_i64().unwrap()).await;

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/companies/{acme_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let users = body_json(get(common::build_test_app(store.clone()), "/api/users").await).await;
    assert_eq!(users, json!([kept]));

    let response = get(
        common::build_test_app(store),
        &format!("/api/companies/{acme_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_candidate_attached_to_company_is_listed_and_deleted_with_it() {
    let store = MemoryStore::new();
    let company = create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "C-7"}),
    )
    .await;
    let id = company["id"].as_i64().unwrap();
    let casey = create(
        &store,
        "/api/users",
        json!({
            "firstName": "Casey",
            "lastName": "Candidate",
            "email": "casey@acme.io",
            "role": "CANDIDATE",
            "companyId": id,
        }),
    )
    .await;

    let json = body_json(
        get(
            common::build_test_app(store.clone()),
            &format!("/api/companies/{id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["recruiters"], json!([casey]));

    let by_company = body_json(
        get(
            common::build_test_app(store.clone()),
            &format!("/api/users/company/{id}"),
        )
        .await,
    )
    .await;
    assert_eq!(by_company, json!([casey]));

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/companies/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let users = body_json(get(common::build_test_app(store), "/api/users").await).await;
    assert_eq!(users, json!([]));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_user_lookup_by_email() {
    let store = MemoryStore::new();
    let casey = create(
        &store,
        "/api/users",
        json!({
            "firstName": "Casey",
            "lastName": "Candidate",
            "email": "casey@example.com",
            "role": "CANDIDATE",
        }),
    )
    .await;
    assert!(casey["companyId"].is_null());

    let response = get(
        common::build_test_app(store.clone()),
        "/api/users/email/casey@example.com",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, casey);

    let response = get(common::build_test_app(store), "/api/users/email/nobody@example.com").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_with_unknown_role_returns_400() {
    let response = post_json(
        common::build_test_app(MemoryStore::new()),
        "/api/users",
        json!({
            "firstName": "Ada",
            "lastName": "Admin",
            "email": "ada@example.com",
            "role": "ADMIN",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_email_returns_409() {
    let store = MemoryStore::new();
    let company = create(
        &store,
        "/api/companies",
        json!({"companyName": "Acme", "companyNumber": "1"}),
    )
    .await;
    let company_id = company["id"].as_i64().unwrap();
    create_recruiter(&store, "rita@acme.io", company_id).await;

    let response = post_json(
        common::build_test_app(store),
        "/api/users",
        json!({
            "firstName": "Rita",
            "lastName": "Again",
            "email": "rita@acme.io",
            "role": "RECRUITER",
            "companyId": company_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
