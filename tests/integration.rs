//! Integration tests for the salary ledger API.
//!
//! This test suite drives the HTTP router end to end:
//! - Record creation and derived fields
//! - Field-level validation errors
//! - Listing and filtering
//! - Advance replacement
//! - Deletion
//! - Live preview

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use salary_ledger::api::{AppState, create_router};
use salary_ledger::config::ConfigLoader;
use salary_ledger::store::InMemorySalaryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/salary-ledger.yaml")
        .expect("Failed to load config")
        .into_config();
    create_router(AppState::new(InMemorySalaryStore::new(), config))
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

fn salary_request(employee_id: &str, month: &str, year: i32, total: Value, advance: Value) -> Value {
    json!({
        "employee_id": employee_id,
        "employee_name": format!("Employee {}", employee_id),
        "month": month,
        "year": year,
        "payment_date": format!("{}-01-31", year),
        "total_monthly_salary": total,
        "advance_amount_paid": advance
    })
}

async fn create_salary(router: &Router, body: Value) -> (StatusCode, Value) {
    send(router, "POST", "/salaries", Some(body)).await
}

fn assert_error(body: &Value, code: &str, field: Option<&str>) {
    assert_eq!(body["code"], code, "unexpected error body: {}", body);
    match field {
        Some(field) => assert_eq!(body["field"], field, "unexpected error body: {}", body),
        None => assert!(body.get("field").is_none(), "unexpected field in {}", body),
    }
}

// =============================================================================
// SECTION 1: Creation scenarios
// =============================================================================

#[tokio::test]
async fn test_partial_advance_is_partially_paid() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(5000), json!(2000)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["total_monthly_salary"], "5000.00");
    assert_eq!(body["advance_amount_paid"], "2000.00");
    assert_eq!(body["remaining_salary_payable"], "3000.00");
    assert_eq!(body["payment_status"], "Partially Paid");
    assert!(body["calculated_at"].is_string());
    assert!(body["id"].is_string());
}

#[tokio::test]
async fn test_full_advance_is_paid() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(4000), json!(4000)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["remaining_salary_payable"], "0.00");
    assert_eq!(body["payment_status"], "Paid");
    assert_eq!(body["advance_percentage"], "100.00");
}

#[tokio::test]
async fn test_no_advance_is_pending() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(3000), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["remaining_salary_payable"], "3000.00");
    assert_eq!(body["payment_status"], "Pending");
    assert_eq!(body["display"]["remaining_salary_payable"], "$3,000.00");
}

#[tokio::test]
async fn test_two_place_amounts() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(3333.33), json!(1111.11)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["remaining_salary_payable"], "2222.22");
    assert_eq!(body["advance_percentage"], "33.33");
}

#[tokio::test]
async fn test_zero_salary_zero_advance_is_paid() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(0), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment_status"], "Paid");
    assert_eq!(body["advance_percentage"], "0.00");
}

#[tokio::test]
async fn test_missing_advance_defaults_to_zero() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        json!({
            "employee_id": "EMP001",
            "employee_name": "Asha Rao",
            "month": "Feb",
            "year": 2025,
            "total_monthly_salary": 1200
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["month"], "February");
    assert_eq!(body["payment_status"], "Pending");
    assert!(body["payment_date"].is_string());
}

#[tokio::test]
async fn test_derived_fields_in_request_are_ignored() {
    let router = create_router_for_test();
    let mut request = salary_request("EMP001", "January", 2025, json!(5000), json!(2000));
    request["remaining_salary_payable"] = json!(1);
    request["payment_status"] = json!("Paid");

    let (status, body) = create_salary(&router, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["remaining_salary_payable"], "3000.00");
    assert_eq!(body["payment_status"], "Partially Paid");
}

// =============================================================================
// SECTION 2: Validation errors
// =============================================================================

#[tokio::test]
async fn test_advance_exceeding_total_rejected() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(3000), json!(5000)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "ADVANCE_EXCEEDS_TOTAL", Some("advance_amount_paid"));

    // No record is produced.
    let (_, list) = send(&router, "GET", "/salaries", None).await;
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn test_negative_total_reported_before_comparison() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(-100), json!(50)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "NEGATIVE_AMOUNT", Some("total_monthly_salary"));
    assert_eq!(body["message"], "Total monthly salary cannot be negative");
}

#[tokio::test]
async fn test_negative_advance_rejected() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(100), json!(-1)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "NEGATIVE_AMOUNT", Some("advance_amount_paid"));
}

#[tokio::test]
async fn test_three_decimal_places_rejected() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(100.125), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "EXCESS_PRECISION", Some("total_monthly_salary"));
}

#[tokio::test]
async fn test_string_amount_is_type_mismatch() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(5000), json!("2000")),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "TYPE_MISMATCH", Some("advance_amount_paid"));
}

#[tokio::test]
async fn test_missing_total_rejected() {
    let router = create_router_for_test();
    let mut request = salary_request("EMP001", "January", 2025, json!(0), json!(0));
    request.as_object_mut().unwrap().remove("total_monthly_salary");

    let (status, body) = create_salary(&router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "MISSING_FIELD", Some("total_monthly_salary"));
}

#[tokio::test]
async fn test_unknown_month_rejected() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "Thirteenth", 2025, json!(10), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "INVALID_FIELD", Some("month"));
}

#[tokio::test]
async fn test_mistyped_year_and_payment_date_name_their_field() {
    let router = create_router_for_test();

    let mut request = salary_request("EMP001", "January", 2025, json!(10), json!(0));
    request["year"] = json!("2025");
    let (status, body) = create_salary(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "INVALID_FIELD", Some("year"));

    let mut request = salary_request("EMP001", "January", 2025, json!(10), json!(0));
    request["payment_date"] = json!(true);
    let (status, body) = create_salary(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "INVALID_FIELD", Some("payment_date"));
}

#[tokio::test]
async fn test_amount_above_maximum_rejected() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(1e29), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "AMOUNT_OUT_OF_RANGE", Some("total_monthly_salary"));
}

#[tokio::test]
async fn test_sub_cent_advance_matches_preview() {
    let router = create_router_for_test();
    let (status, body) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(10), json!(0.0009)),
    )
    .await;
    let (_, preview) = send(
        &router,
        "POST",
        "/salaries/preview",
        Some(json!({ "total_monthly_salary": 10, "advance_amount_paid": 0.0009 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment_status"], "Partially Paid");
    assert_eq!(body["remaining_salary_payable"], "10.00");
    assert_eq!(preview["status_label"], body["payment_status"]);
}

#[tokio::test]
async fn test_duplicate_period_conflicts() {
    let router = create_router_for_test();
    let request = salary_request("EMP001", "March", 2025, json!(5000), json!(0));

    let (first, _) = create_salary(&router, request.clone()).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = create_salary(&router, request).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_error(&body, "DUPLICATE_RECORD", None);
}

// =============================================================================
// SECTION 3: Listing
// =============================================================================

async fn seed(router: &Router) {
    let records = [
        ("EMP001", "January", 2025, 3000, 0),
        ("EMP001", "February", 2025, 3000, 1000),
        ("EMP002", "January", 2025, 4000, 4000),
        ("EMP002", "December", 2024, 4000, 500),
        ("EMP003", "January", 2025, 2500, 2500),
    ];
    for (employee, month, year, total, advance) in records {
        let (status, body) = create_salary(
            router,
            salary_request(employee, month, year, json!(total), json!(advance)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "seed failed: {}", body);
    }
}

#[tokio::test]
async fn test_list_all_newest_first() {
    let router = create_router_for_test();
    seed(&router).await;

    let (status, body) = send(&router, "GET", "/salaries", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
    assert_eq!(body["limit"], 50);
    assert_eq!(body["skip"], 0);
    let records = body["records"].as_array().unwrap();
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["month"], "February");
    assert_eq!(records[4]["year"], 2024);
}

#[tokio::test]
async fn test_list_filter_by_employee() {
    let router = create_router_for_test();
    seed(&router).await;

    let (_, body) = send(&router, "GET", "/salaries?employee_id=EMP002", None).await;

    assert_eq!(body["total"], 2);
    for record in body["records"].as_array().unwrap() {
        assert_eq!(record["employee_id"], "EMP002");
    }
}

#[tokio::test]
async fn test_list_filter_by_month_and_year() {
    let router = create_router_for_test();
    seed(&router).await;

    let (_, body) = send(&router, "GET", "/salaries?month=January&year=2025", None).await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_list_filter_by_status() {
    let router = create_router_for_test();
    seed(&router).await;

    let (_, body) = send(&router, "GET", "/salaries?payment_status=Paid", None).await;
    assert_eq!(body["total"], 2);

    let (_, body) = send(
        &router,
        "GET",
        "/salaries?payment_status=Partially%20Paid",
        None,
    )
    .await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_list_limit_and_skip() {
    let router = create_router_for_test();
    seed(&router).await;

    let (_, body) = send(&router, "GET", "/salaries?limit=2&skip=1", None).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["limit"], 2);
    assert_eq!(body["skip"], 1);
    assert_eq!(body["records"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_limit_is_capped() {
    let router = create_router_for_test();
    let (_, body) = send(&router, "GET", "/salaries?limit=100000", None).await;
    assert_eq!(body["limit"], 500);
}

#[tokio::test]
async fn test_list_invalid_filters() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/salaries?payment_status=Overdue", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "INVALID_FIELD", Some("payment_status"));

    let (status, body) = send(&router, "GET", "/salaries?year=twenty", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUERY");
}

// =============================================================================
// SECTION 4: Lookup, advance replacement and deletion
// =============================================================================

#[tokio::test]
async fn test_get_by_id() {
    let router = create_router_for_test();
    let (_, created) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(5000), json!(2000)),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&router, "GET", &format!("/salaries/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["remaining_salary_payable"], "3000.00");
}

#[tokio::test]
async fn test_get_unknown_id() {
    let router = create_router_for_test();
    let (status, body) = send(
        &router,
        "GET",
        "/salaries/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "RECORD_NOT_FOUND");
}

#[tokio::test]
async fn test_replace_advance_rederives_status() {
    let router = create_router_for_test();
    let (_, created) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(4000), json!(0)),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let uri = format!("/salaries/{}/advance", id);

    let (status, body) = send(&router, "PUT", &uri, Some(json!({ "advance_amount_paid": 1500 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["remaining_salary_payable"], "2500.00");
    assert_eq!(body["payment_status"], "Partially Paid");

    let (status, body) = send(&router, "PUT", &uri, Some(json!({ "advance_amount_paid": 4000 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payment_status"], "Paid");

    let (_, stored) = send(&router, "GET", &format!("/salaries/{}", id), None).await;
    assert_eq!(stored["payment_status"], "Paid");
    assert_eq!(stored["remaining_salary_payable"], "0.00");
}

#[tokio::test]
async fn test_replace_advance_rejected_leaves_record() {
    let router = create_router_for_test();
    let (_, created) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(4000), json!(1000)),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &router,
        "PUT",
        &format!("/salaries/{}/advance", id),
        Some(json!({ "advance_amount_paid": 4000.01 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, "ADVANCE_EXCEEDS_TOTAL", Some("advance_amount_paid"));

    let (_, stored) = send(&router, "GET", &format!("/salaries/{}", id), None).await;
    assert_eq!(stored["advance_amount_paid"], "1000.00");
    assert_eq!(stored["payment_status"], "Partially Paid");
}

#[tokio::test]
async fn test_replace_advance_unknown_record() {
    let router = create_router_for_test();
    let (status, _) = send(
        &router,
        "PUT",
        "/salaries/00000000-0000-0000-0000-000000000000/advance",
        Some(json!({ "advance_amount_paid": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_record() {
    let router = create_router_for_test();
    let (_, created) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(4000), json!(1000)),
    )
    .await;
    let uri = format!("/salaries/{}", created["id"].as_str().unwrap());

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_period_can_be_recreated() {
    let router = create_router_for_test();
    let request = salary_request("EMP001", "January", 2025, json!(4000), json!(0));
    let (_, created) = create_salary(&router, request.clone()).await;

    send(
        &router,
        "DELETE",
        &format!("/salaries/{}", created["id"].as_str().unwrap()),
        None,
    )
    .await;

    let (status, _) = create_salary(&router, request).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// SECTION 5: Live preview
// =============================================================================

#[tokio::test]
async fn test_preview_matches_created_record() {
    let router = create_router_for_test();

    let (_, preview) = send(
        &router,
        "POST",
        "/salaries/preview",
        Some(json!({ "total_monthly_salary": "3333.33", "advance_amount_paid": 1111.11 })),
    )
    .await;
    let (_, created) = create_salary(
        &router,
        salary_request("EMP001", "January", 2025, json!(3333.33), json!(1111.11)),
    )
    .await;

    assert_eq!(preview["valid"], true);
    assert_eq!(preview["remaining_salary_payable"], created["remaining_salary_payable"]);
    assert_eq!(preview["status_label"], created["payment_status"]);
    assert_eq!(preview["remaining_display"], "$2,222.22");
}

#[tokio::test]
async fn test_preview_advance_exceeds_total() {
    let router = create_router_for_test();
    let (status, preview) = send(
        &router,
        "POST",
        "/salaries/preview",
        Some(json!({ "total_monthly_salary": 3000, "advance_amount_paid": 5000 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["status_label"], "Invalid — advance exceeds total");
    assert_eq!(preview["valid"], false);
    assert!(preview["remaining_salary_payable"].is_null());
}

#[tokio::test]
async fn test_preview_partial_input() {
    let router = create_router_for_test();
    let (status, preview) = send(
        &router,
        "POST",
        "/salaries/preview",
        Some(json!({ "total_monthly_salary": "12" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(preview["status_label"], "Pending");
}
