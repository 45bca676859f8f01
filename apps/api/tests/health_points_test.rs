#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_health_submissions_merge() {
    let db = common::test_db().await;
    let (_, bearer) = common::seed_user(&db, "13812345678", "alice").await;
    let app = spawn_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/health/records")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({"record_date": "2026-03-01", "steps": 5000}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["updated_fields"], 1);

    let req = test::TestRequest::post()
        .uri("/api/v1/health/records")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({"record_date": "2026-03-01", "sleep_score": 80, "sleep_start_time": "23:05"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/health/records?days=7")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["steps"], 5000);
    assert_eq!(records[0]["sleep_score"], 80);
    assert_eq!(records[0]["sleep_start_time"], "23:05");
    assert_eq!(records[0]["current_mood"], -1);
    assert_eq!(records[0]["steps_goal"], 10000);

    // Nothing to merge is still a success
    let req = test::TestRequest::post()
        .uri("/api/v1/health/records")
        .insert_header(("Authorization", bearer))
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["updated_fields"], 0);
}

#[actix_web::test]
async fn test_overview_defaults_without_data() {
    let db = common::test_db().await;
    let (_, bearer) = common::seed_user(&db, "13812345678", "alice").await;
    let app = spawn_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/health/overview")
        .insert_header(("Authorization", bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["steps"], 0);
    assert_eq!(body["data"]["mood"], -1);
}

#[actix_web::test]
async fn test_unknown_trend_metric_is_rejected() {
    let db = common::test_db().await;
    let (_, bearer) = common::seed_user(&db, "13812345678", "alice").await;
    let app = spawn_app!(db);

    let req = test::TestRequest::get()
        .uri("/api/v1/health/trends/weight")
        .insert_header(("Authorization", bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/health/trends/sleep")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_step_rewards_accrue_difference() {
    let db = common::test_db().await;
    let (_, bearer) = common::seed_user(&db, "13812345678", "alice").await;
    let app = spawn_app!(db);

    let mut deltas = Vec::new();
    for steps in [5000, 12000] {
        let req = test::TestRequest::post()
            .uri("/api/v1/points/steps")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(json!({"steps": steps, "record_date": "2026-03-01"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        deltas.push((
            body["data"]["points_earned_delta"].as_i64().unwrap(),
            body["data"]["total_points"].as_i64().unwrap(),
        ));
    }
    assert_eq!(deltas, vec![(10, 10), (14, 24)]);

    let req = test::TestRequest::get()
        .uri("/api/v1/points/history")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_manual_points_and_rankings() {
    let db = common::test_db().await;
    let (_, alice) = common::seed_user(&db, "13812345678", "alice").await;
    let (_, bob) = common::seed_user(&db, "13912345678", "bob").await;
    let app = spawn_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/v1/points")
        .insert_header(("Authorization", alice.clone()))
        .set_json(json!({"points": 50, "source_category": "manual", "source_note": "welcome bonus"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total_points"], 50);

    let req = test::TestRequest::get()
        .uri("/api/v1/points/balance")
        .insert_header(("Authorization", bob.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total_points"], 0);

    let req = test::TestRequest::post()
        .uri("/api/v1/points")
        .insert_header(("Authorization", bob.clone()))
        .set_json(json!({"points": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/rankings/points?limit=5")
        .insert_header(("Authorization", bob.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let ranking = body["data"].as_array().unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0]["username"], "alice");
    assert_eq!(ranking[0]["rank"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/rankings/steps")
        .insert_header(("Authorization", bob))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[actix_web::test]
async fn test_realtime_samples_roundtrip() {
    let db = common::test_db().await;
    let (_, bearer) = common::seed_user(&db, "13812345678", "alice").await;
    let app = spawn_app!(db);

    for (ts, value) in [("2026-03-01 08:00", 70.0), ("2026-03-01 08:00", 72.0), ("2026-03-01 09:30", 88.0)] {
        let req = test::TestRequest::post()
            .uri("/api/v1/realtime/samples")
            .insert_header(("Authorization", bearer.clone()))
            .set_json(json!({"timestamp": ts, "metric_type": "heart_rate", "value": value}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/realtime/samples")
        .insert_header(("Authorization", bearer.clone()))
        .set_json(json!({"timestamp": "25:00", "metric_type": "heart_rate", "value": 1.0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/realtime/samples?date=2026-03-01&metric_type=heart_rate")
        .insert_header(("Authorization", bearer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let values: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["value"].as_f64().unwrap())
        .collect();
    assert_eq!(values, vec![88.0, 72.0]);
}
