//! Integration tests for the employee dashboard.
//!
//! This test suite runs the HTTP API against the sample snapshot in
//! `data/sample` and covers:
//! - Department listing
//! - Gender counts, including the current-salary filter
//! - Average salary, including empty departments
//! - Salary histogram bucketing and totals
//! - Department summaries and chart series
//! - Unknown departments and startup error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tower::ServiceExt;

use employee_dashboard::api::{AppState, create_router};
use employee_dashboard::config::ConfigLoader;
use employee_dashboard::error::DashboardError;
use employee_dashboard::store::SnapshotLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn snapshot_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn create_test_state() -> AppState {
    let store = SnapshotLoader::load("./data/sample", snapshot_date()).expect("Failed to load snapshot");
    AppState::new(store)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn histogram_total(histogram: &Value) -> u64 {
    histogram
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["frequency"].as_u64().unwrap())
        .sum()
}

fn histogram_frequency(histogram: &Value, gender: &str, bucket_start: i64) -> u64 {
    histogram
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["gender"] == gender && entry["bucket_start"] == bucket_start)
        .map(|entry| entry["frequency"].as_u64().unwrap())
        .unwrap_or(0)
}

fn series_x(series: &Value) -> Vec<i64> {
    series
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["x"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Departments
// =============================================================================

#[tokio::test]
async fn test_departments_lists_all_with_names() {
    let (status, json) = get_json(create_router_for_test(), "/departments").await;

    assert_eq!(status, StatusCode::OK);
    let departments = json.as_array().unwrap();
    assert_eq!(departments.len(), 3);
    assert_eq!(departments[0]["dept_no"], "d001");
    assert_eq!(departments[0]["dept_name"], "Marketing");
    assert_eq!(departments[2]["dept_name"], "Human Resources");
}

// =============================================================================
// Gender counts
// =============================================================================

#[tokio::test]
async fn test_gender_counts_exclude_expired_salaries() {
    // 10003 in d001 has only an expired salary.
    let (status, json) = get_json(create_router_for_test(), "/departments/d001/gender-counts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "male": 1, "female": 1 }));
}

#[tokio::test]
async fn test_gender_counts_exclude_members_without_employee() {
    // d002 lists emp_no 99999, which has no employees row.
    let (_, json) = get_json(create_router_for_test(), "/departments/d002/gender-counts").await;

    assert_eq!(json, serde_json::json!({ "male": 2, "female": 2 }));
}

#[tokio::test]
async fn test_gender_counts_of_unknown_department_is_empty() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d999/gender-counts").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({}));
}

// =============================================================================
// Average salary
// =============================================================================

#[tokio::test]
async fn test_average_salary_of_marketing() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d001/average-salary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["dept_no"], "d001");
    // (60117 + 65828) / 2
    assert_eq!(
        decimal(json["average_salary"].as_str().unwrap()),
        decimal("62972.5")
    );
}

#[tokio::test]
async fn test_average_salary_counts_salary_ending_on_snapshot_date() {
    let (_, json) = get_json(create_router_for_test(), "/departments/d002/average-salary").await;

    // (40054 + 94692 + 59755 + 59100) / 4, 10004's salary ends on the snapshot date
    assert_eq!(
        decimal(json["average_salary"].as_str().unwrap()),
        decimal("63400.25")
    );
}

#[tokio::test]
async fn test_average_salary_of_department_without_current_salaries_is_zero() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d003/average-salary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(json["average_salary"].as_str().unwrap()), Decimal::ZERO);
}

#[tokio::test]
async fn test_average_salary_of_unknown_department_is_zero() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d999/average-salary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(decimal(json["average_salary"].as_str().unwrap()), Decimal::ZERO);
}

// =============================================================================
// Salary histogram
// =============================================================================

#[tokio::test]
async fn test_histogram_of_finance() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d002/salary-histogram").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(histogram_frequency(&json, "male", 40_000), 1);
    assert_eq!(histogram_frequency(&json, "male", 94_000), 1);
    assert_eq!(histogram_frequency(&json, "female", 59_000), 2);
}

#[tokio::test]
async fn test_histogram_total_matches_headcount() {
    for dept_no in ["d001", "d002", "d003", "d999"] {
        let router = create_router_for_test();
        let (_, histogram) =
            get_json(router.clone(), &format!("/departments/{}/salary-histogram", dept_no)).await;
        let (_, counts) = get_json(router, &format!("/departments/{}/gender-counts", dept_no)).await;

        let headcount: u64 = counts
            .as_object()
            .unwrap()
            .values()
            .map(|v| v.as_u64().unwrap())
            .sum();
        assert_eq!(histogram_total(&histogram), headcount, "department {}", dept_no);
    }
}

#[tokio::test]
async fn test_histogram_entries_carry_bucket_start() {
    let (_, json) = get_json(create_router_for_test(), "/departments/d001/salary-histogram").await;

    for entry in json.as_array().unwrap() {
        let interval = entry["interval"].as_i64().unwrap();
        assert_eq!(entry["bucket_start"].as_i64().unwrap(), interval * 1000);
    }
}

#[tokio::test]
async fn test_histogram_of_empty_department_is_empty() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d003/salary-histogram").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

// =============================================================================
// Summary
// =============================================================================

#[tokio::test]
async fn test_summary_of_finance() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d002/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["department"]["dept_name"], "Finance");
    assert_eq!(json["headcount"], 4);
    assert_eq!(json["headcount_display"], "4");
    assert_eq!(json["average_salary_display"], "$63,400");
    assert_eq!(json["gender_balance"]["male"], 2);
    assert_eq!(json["gender_balance"]["female"], 2);
    assert_eq!(
        series_x(&json["salary_distribution"]["male"]),
        vec![40_000, 94_000]
    );
    assert_eq!(series_x(&json["salary_distribution"]["female"]), vec![59_000]);
    assert_eq!(json["salary_distribution"]["female"][0]["y"], 2);
}

#[tokio::test]
async fn test_summary_of_empty_department_defaults_to_zero() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d003/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["headcount"], 0);
    assert_eq!(json["gender_balance"]["male"], 0);
    assert_eq!(json["gender_balance"]["female"], 0);
    assert_eq!(json["average_salary_display"], "$0");
    assert_eq!(json["salary_distribution"]["male"], serde_json::json!([]));
}

#[tokio::test]
async fn test_summary_of_unknown_department_returns_404() {
    let (status, json) = get_json(create_router_for_test(), "/departments/d999/summary").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "DEPARTMENT_NOT_FOUND");
}

#[tokio::test]
async fn test_summary_is_idempotent() {
    let router = create_router_for_test();
    let (_, first) = get_json(router.clone(), "/departments/d002/summary").await;
    let (_, second) = get_json(router, "/departments/d002/summary").await;

    assert_eq!(first, second);
}

// =============================================================================
// Snapshot date
// =============================================================================

#[tokio::test]
async fn test_later_snapshot_date_drops_expiring_salary() {
    // One day later, 10004's salary (to_date 2026-10-15) is no longer current.
    let later = snapshot_date().succ_opt().unwrap();
    let store = SnapshotLoader::load("./data/sample", later).unwrap();
    let router = create_router(AppState::new(store));

    let (_, json) = get_json(router, "/departments/d002/gender-counts").await;
    assert_eq!(json, serde_json::json!({ "male": 1, "female": 2 }));
}

#[tokio::test]
async fn test_health_reports_snapshot_date() {
    let (status, json) = get_json(create_router_for_test(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_date"], "2026-10-15");
    assert_eq!(json["snapshot"]["orphan_dept_emp"], 1);
    assert_eq!(json["snapshot"]["orphan_salaries"], 1);
}

// =============================================================================
// Startup
// =============================================================================

#[test]
fn test_sample_configuration_points_at_sample_snapshot() {
    let config = ConfigLoader::load("./config/dashboard.yaml").unwrap();
    let store = SnapshotLoader::load(config.snapshot_dir(), config.snapshot_date()).unwrap();

    assert_eq!(store.current_date(), snapshot_date());
    assert_eq!(store.default_department().unwrap().dept_no, "d001");
}

#[test]
fn test_missing_snapshot_fails_startup() {
    let result = SnapshotLoader::load("./data/does-not-exist", snapshot_date());
    assert!(matches!(result, Err(DashboardError::SnapshotNotFound { .. })));
}
