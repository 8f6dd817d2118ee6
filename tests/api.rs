use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::web::Data;
use actix_web::App;
use hrms_lite::{
    config::Config,
    db::init_db,
    routes,
    service::{AttendanceLedger, EmployeeDirectory},
};
use serde_json::{Value, json};
use std::net::SocketAddr;

/// Full route table over a fresh in-memory database.
macro_rules! test_app {
    () => {{
        let pool = init_db("sqlite::memory:", 1)
            .await
            .expect("in-memory database");
        let config = Config::default();
        test::init_service(
            App::new()
                .app_data(Data::new(EmployeeDirectory::new(pool.clone())))
                .app_data(Data::new(AttendanceLedger::new(pool)))
                .configure(|cfg| routes::configure(cfg, &config)),
        )
        .await
    }};
}

// the rate limiter keys on the peer address
fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

fn post(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).peer_addr(peer()).set_json(body)
}

fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri).peer_addr(peer())
}

fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri).peer_addr(peer())
}

fn ann() -> Value {
    json!({
        "emp_id": "EMP001",
        "full_name": "Ann Lee",
        "email": "ann@co.com",
        "department": "Eng"
    })
}

#[actix_web::test]
async fn add_and_list_employees() {
    let app = test_app!();

    let resp = test::call_service(&app, post("/employees", ann()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["emp_id"], "EMP001");
    assert_eq!(created["full_name"], "Ann Lee");
    assert!(created["id"].is_i64());

    let listed: Value = test::call_and_read_body_json(&app, get("/employees").to_request()).await;
    assert_eq!(listed, json!([created]));
}

#[actix_web::test]
async fn duplicate_emp_id_is_400_and_directory_keeps_one() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;

    let mut other = ann();
    other["full_name"] = json!("Different Name");
    let resp = test::call_service(&app, post("/employees", other).to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Employee ID 'EMP001' already exists");

    let listed: Value = test::call_and_read_body_json(&app, get("/employees").to_request()).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0]["full_name"], "Ann Lee");
}

#[actix_web::test]
async fn missing_or_blank_fields_are_400() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        post("/employees", json!({ "emp_id": "EMP001", "full_name": "Ann Lee" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "email is required");

    let mut bad_email = ann();
    bad_email["email"] = json!("not-an-email");
    let resp = test::call_service(&app, post("/employees", bad_email).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Invalid email address");
}

#[actix_web::test]
async fn malformed_json_is_400_with_detail() {
    let app = test_app!();

    let req = TestRequest::post()
        .uri("/employees")
        .peer_addr(peer())
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_web::test]
async fn get_employee_by_emp_id() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;

    let found: Value =
        test::call_and_read_body_json(&app, get("/employees/EMP001").to_request()).await;
    assert_eq!(found["email"], "ann@co.com");

    let resp = test::call_service(&app, get("/employees/EMP404").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn attendance_history_is_newest_first() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;

    let resp = test::call_service(
        &app,
        post(
            "/attendance",
            json!({ "employee_id": "EMP001", "date": "2024-01-10", "status": "Present" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let record: Value = test::read_body_json(resp).await;
    assert_eq!(record["employee_id"], "EMP001");
    assert_eq!(record["status"], "Present");

    let resp = test::call_service(
        &app,
        post(
            "/attendance",
            json!({ "employee_id": "EMP001", "date": "2024-01-11", "status": "Absent" }),
        )
        .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let history: Value =
        test::call_and_read_body_json(&app, get("/attendance/EMP001").to_request()).await;
    assert_eq!(
        history,
        json!([
            { "date": "2024-01-11", "status": "Absent" },
            { "date": "2024-01-10", "status": "Present" }
        ])
    );

    let summary: Value =
        test::call_and_read_body_json(&app, get("/attendance/EMP001/summary").to_request()).await;
    assert_eq!(
        summary,
        json!({ "emp_id": "EMP001", "total": 2, "present": 1, "absent": 1 })
    );
}

#[actix_web::test]
async fn marking_unknown_employee_is_400_and_writes_nothing() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        post(
            "/attendance",
            json!({ "employee_id": "EMP999", "date": "2024-01-10", "status": "Present" }),
        )
        .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Employee 'EMP999' does not exist");

    let history: Value =
        test::call_and_read_body_json(&app, get("/attendance/EMP999").to_request()).await;
    assert_eq!(history, json!([]));
}

#[actix_web::test]
async fn invalid_status_or_date_is_400() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;

    for (date, status) in [("2024-01-10", "Late"), ("2024/01/10", "Present"), ("", "Absent")] {
        let resp = test::call_service(
            &app,
            post(
                "/attendance",
                json!({ "employee_id": "EMP001", "date": date, "status": status }),
            )
            .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{date} / {status}");
    }
}

#[actix_web::test]
async fn same_day_twice_is_400() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;
    let mark = json!({ "employee_id": "EMP001", "date": "2024-01-10", "status": "Present" });

    let first = test::call_service(&app, post("/attendance", mark.clone()).to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test::call_service(&app, post("/attendance", mark).to_request()).await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(second).await;
    assert_eq!(body["detail"], "Attendance already marked for EMP001 on 2024-01-10");
}

#[actix_web::test]
async fn delete_cascades_to_attendance() {
    let app = test_app!();
    test::call_service(&app, post("/employees", ann()).to_request()).await;
    for (date, status) in [("2024-01-10", "Present"), ("2024-01-11", "Absent")] {
        test::call_service(
            &app,
            post(
                "/attendance",
                json!({ "employee_id": "EMP001", "date": date, "status": status }),
            )
            .to_request(),
        )
        .await;
    }

    let resp = test::call_service(&app, delete("/employees/EMP001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Employee and records deleted");
    assert_eq!(body["attendance_records_deleted"], 2);

    let history: Value =
        test::call_and_read_body_json(&app, get("/attendance/EMP001").to_request()).await;
    assert_eq!(history, json!([]));

    let listed: Value = test::call_and_read_body_json(&app, get("/employees").to_request()).await;
    assert_eq!(listed, json!([]));
}

#[actix_web::test]
async fn delete_unknown_employee_is_404() {
    let app = test_app!();

    let resp = test::call_service(&app, delete("/employees/EMP001").to_request()).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Employee 'EMP001' not found");
}

#[actix_web::test]
async fn configured_origin_gets_cors_headers() {
    let pool = init_db("sqlite::memory:", 1).await.expect("in-memory database");
    let config = Config::default();
    let app = test::init_service(
        App::new()
            .wrap(routes::cors(&config.cors_allowed_origins))
            .app_data(Data::new(EmployeeDirectory::new(pool.clone())))
            .app_data(Data::new(AttendanceLedger::new(pool)))
            .configure(|cfg| routes::configure(cfg, &config)),
    )
    .await;

    let resp = test::call_service(
        &app,
        get("/employees")
            .insert_header(("origin", "http://localhost:5173"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let preflight = test::call_service(
        &app,
        TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/attendance")
            .peer_addr(peer())
            .insert_header(("origin", "http://localhost:5173"))
            .insert_header(("access-control-request-method", "POST"))
            .to_request(),
    )
    .await;
    assert!(preflight.status().is_success());

    let foreign = test::try_call_service(
        &app,
        get("/employees")
            .insert_header(("origin", "https://elsewhere.example"))
            .to_request(),
    )
    .await;
    if let Ok(resp) = foreign {
        assert!(resp.headers().get("access-control-allow-origin").is_none());
    }
}
