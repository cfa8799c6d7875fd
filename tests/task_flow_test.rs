mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};
use serde_json::json;

#[tokio::test]
async fn test_task_crud_flow() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, admin_id, bearer) = client.seed_team_with_admin("northlight").await;

    // Create
    let req = test::TestRequest::post()
        .uri("/task")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({
            "team_id": team.id,
            "title": "Chase the overdue royalty statement",
            "description": "Publisher promised it last Friday",
            "assignee": admin_id
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let task_id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["completed"], false);

    // List
    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", team.id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Complete it
    let req = test::TestRequest::patch()
        .uri(&format!("/task/{}", task_id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({"completed": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["completed"], true);

    // Delete
    let req = test::TestRequest::delete()
        .uri(&format!("/task/{}", task_id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", team.id))
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_tasks_require_authentication() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, _bearer) = client.seed_team_with_admin("northlight").await;

    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", team.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", team.id))
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_member_cannot_touch_team_tasks() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, bearer) = client.seed_team_with_admin("northlight").await;
    let (other_team, _other_admin, other_bearer) = client.seed_team_with_admin("rivals").await;

    let req = test::TestRequest::post()
        .uri("/task")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({"team_id": team.id, "title": "Internal plans"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let task_id = body["id"].as_str().unwrap().to_string();

    // The rival admin is authenticated but not a member here.
    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", team.id))
        .insert_header(("Authorization", format!("Bearer {}", other_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri(&format!("/task/{}", task_id))
        .insert_header(("Authorization", format!("Bearer {}", other_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // And their own team sees nothing.
    let req = test::TestRequest::get()
        .uri(&format!("/task/team/{}", other_team.id))
        .insert_header(("Authorization", format!("Bearer {}", other_bearer)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_assignee_must_be_a_member() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (team, _admin_id, bearer) = client.seed_team_with_admin("northlight").await;
    let outsider = client.create_test_user("Outsider", "5555").await;

    let req = test::TestRequest::post()
        .uri("/task")
        .insert_header(("Authorization", format!("Bearer {}", bearer)))
        .set_json(json!({
            "team_id": team.id,
            "title": "Misassigned work",
            "assignee": outsider
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
