mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext, TEST_ADMIN_KEY};
use serde_json::json;

#[tokio::test]
async fn test_team_create_requires_admin_key() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let payload = json!({
        "name": "Northlight Agency",
        "slug": "northlight",
        "admin_email": "admin@northlight.test"
    });

    let req = test::TestRequest::post()
        .uri("/team/create")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/team/create")
        .insert_header(("Authorization", "Bearer wrong-key"))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/team/create")
        .insert_header(("Authorization", format!("Bearer {}", TEST_ADMIN_KEY)))
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "northlight");
    assert!(!body["invite_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_slug_conflicts() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_team("northlight").await;

    let req = test::TestRequest::post()
        .uri("/team/create")
        .insert_header(("Authorization", format!("Bearer {}", TEST_ADMIN_KEY)))
        .set_json(json!({
            "name": "Another Northlight",
            "slug": "northlight",
            "admin_email": "other@northlight.test"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_invite_lifecycle() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, admin_bearer) = client.seed_team_with_admin("northlight").await;

    // Create a member invitation.
    let req = test::TestRequest::post()
        .uri(&format!("/team/{}/invite", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .set_json(json!({"email": "new@northlight.test", "role": "member"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let invite_token = body["token"].as_str().unwrap().to_string();

    // It shows up as pending.
    let req = test::TestRequest::get()
        .uri(&format!("/team/{}/invites", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["email"], "new@northlight.test");
    assert_eq!(body[0]["role"], "member");

    // Revoke it.
    let req = test::TestRequest::delete()
        .uri(&format!("/team/{}/invite/{}", team.id, invite_token))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // A revoked token classifies as not_found.
    let req = test::TestRequest::get()
        .uri(&format!("/join/{}", invite_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["state"], "invalid");
    assert_eq!(body["reason"], "not_found");

    // And the pending list is empty again.
    let req = test::TestRequest::get()
        .uri(&format!("/team/{}/invites", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_plain_member_cannot_manage_invites() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, _admin_bearer) = client.seed_team_with_admin("northlight").await;
    let (_member_id, member_bearer) = client.seed_member(team.id, "Plain Member").await;

    let req = test::TestRequest::post()
        .uri(&format!("/team/{}/invite", team.id))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .set_json(json!({"email": "friend@northlight.test", "role": "member"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Members can still see the pending list.
    let req = test::TestRequest::get()
        .uri(&format!("/team/{}/invites", team.id))
        .insert_header(("Authorization", format!("Bearer {}", member_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_owner_role_is_not_invitable() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, admin_bearer) = client.seed_team_with_admin("northlight").await;

    let req = test::TestRequest::post()
        .uri(&format!("/team/{}/invite", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .set_json(json!({"email": "boss@northlight.test", "role": "owner"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_members_listing() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, admin_bearer) = client.seed_team_with_admin("northlight").await;
    client.seed_member(team.id, "Plain Member").await;

    let req = test::TestRequest::get()
        .uri(&format!("/team/{}/members", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 2);
    let roles: Vec<&str> = members
        .iter()
        .map(|member| member["role"].as_str().unwrap())
        .collect();
    assert!(roles.contains(&"admin"));
    assert!(roles.contains(&"member"));
}

#[tokio::test]
async fn test_deactivated_team_rejects_new_invites() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, admin_bearer) = client.seed_team_with_admin("northlight").await;

    let req = test::TestRequest::post()
        .uri(&format!("/team/{}/deactivate", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/team/{}/invite", team.id))
        .insert_header(("Authorization", format!("Bearer {}", admin_bearer)))
        .set_json(json!({"email": "late@northlight.test", "role": "member"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
