//! Integration tests for the payroll engine.
//!
//! This suite drives the HTTP router end to end:
//! - Shift pricing across the rate windows
//! - Deductions and income tax for both tax years
//! - Annual forecast and annual summary
//! - Month summary with payslip comparison
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/tax_years").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Posts and returns the envelope's `result`, asserting success.
async fn calculate(uri: &str, body: Value) -> Value {
    let (status, json) = post_json(uri, body).await;
    assert_eq!(status, StatusCode::OK, "unexpected response: {}", json);
    json["result"].clone()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .unwrap_or_else(|| panic!("expected a decimal string, got {}", value));
    assert_eq!(
        decimal(actual),
        decimal(expected),
        "expected {}, got {}",
        expected,
        actual
    );
}

fn shift(kind: &str, date: &str) -> Value {
    json!({ "type": kind, "date": date })
}

fn minus_shift(date: &str, start: &str, end: &str) -> Value {
    json!({ "type": "minus", "date": date, "start_time": start, "end_time": end })
}

// =============================================================================
// Shift pay
// =============================================================================

#[tokio::test]
async fn test_plus_shift_weekday() {
    let result = calculate("/shift-pay", json!({ "shifts": [shift("plus", "2026-03-04")] })).await;
    let priced = &result["shifts"][0];

    assert_eq!(priced["kind"], "timed");
    assert_decimal(&priced["total_hours"], "24");
    assert_decimal(&priced["breakdown"]["regular"], "1350");
    assert_decimal(&priced["breakdown"]["rest"], "225");
    assert_decimal(&priced["meal_allowance"], "120");
    assert_decimal(&priced["total_pay"], "1695");
}

#[tokio::test]
async fn test_plus_shift_friday_enters_weekend() {
    let result = calculate("/shift-pay", json!({ "shifts": [shift("plus", "2026-03-06")] })).await;
    let breakdown = &result["shifts"][0]["breakdown"];

    assert_decimal(&breakdown["regular"], "750");
    assert_decimal(&breakdown["weekend"], "900");
    assert_decimal(&breakdown["weekend_rest"], "337.5");
}

#[tokio::test]
async fn test_plus_shift_saturday() {
    let result = calculate("/shift-pay", json!({ "shifts": [shift("plus", "2026-03-07")] })).await;
    let breakdown = &result["shifts"][0]["breakdown"];

    assert_decimal(&breakdown["weekend"], "2025");
    assert_decimal(&breakdown["weekend_rest"], "337.5");
    assert_decimal(&breakdown["regular"], "0");
}

#[tokio::test]
async fn test_training_and_vacation_totals() {
    let result = calculate(
        "/shift-pay",
        json!({ "shifts": [shift("training", "2026-03-04"), shift("vacation", "2026-03-05")] }),
    )
    .await;

    assert_decimal(&result["shifts"][0]["total_hours"], "14");
    assert_decimal(&result["shifts"][0]["total_pay"], "1110");
    assert_eq!(result["shifts"][1]["kind"], "flat_rate");
    assert_decimal(&result["shifts"][1]["total_pay"], "1750");
    assert_decimal(&result["total_pay"], "2860");
}

#[tokio::test]
async fn test_minus_shift_over_midnight_with_overrides() {
    let result = calculate(
        "/shift-pay",
        json!({
            "shifts": [minus_shift("2026-03-04", "22:00:00", "06:00:00")],
            "rates": { "base_rate": "100" }
        }),
    )
    .await;
    let priced = &result["shifts"][0];

    // 2h @ 100 + 6h @ 50, plus one meal allowance
    assert_decimal(&priced["breakdown"]["regular"], "200");
    assert_decimal(&priced["breakdown"]["rest"], "300");
    assert_decimal(&priced["total_pay"], "530");
}

#[tokio::test]
async fn test_bonus_is_reported_and_included() {
    let body = json!({ "shifts": [{ "type": "training", "date": "2026-03-04", "has_bonus": true }] });
    let result = calculate("/shift-pay", body).await;

    assert_decimal(&result["shifts"][0]["bonus_applied"], "3500");
    assert_decimal(&result["shifts"][0]["total_pay"], "4610");
}

// =============================================================================
// Deductions and income tax
// =============================================================================

#[tokio::test]
async fn test_deductions_on_10000() {
    let result = calculate("/deductions", json!({ "gross": "10000" })).await;

    assert_decimal(&result["employee"]["pension"], "600");
    assert_decimal(&result["employee"]["study"], "250");
    assert_decimal(&result["employee"]["ni_tier1"], "30.81");
    assert_decimal(&result["employee"]["ni_tier2"], "160.79");
    assert_decimal(&result["employee"]["total"], "1395.25");
    assert_decimal(&result["net"], "8604.76");
    assert_decimal(&result["employer"]["total"], "2000");
}

#[tokio::test]
async fn test_deductions_toggles_off() {
    let body = json!({
        "gross": "10000",
        "toggles": { "pension": false, "study": false, "ni": false }
    });
    let result = calculate("/deductions", body).await;

    assert_decimal(&result["employee"]["total"], "0");
    assert_decimal(&result["employer"]["total"], "0");
    assert_decimal(&result["net"], "10000");
}

#[tokio::test]
async fn test_income_tax_on_15000() {
    let result = calculate("/income-tax", json!({ "gross": "15000", "credit_points": "2.25" })).await;

    assert_decimal(&result["gross_tax"], "2116");
    assert_decimal(&result["credit_amount"], "544.5");
    assert_decimal(&result["final_tax"], "1571.5");
    assert_decimal(&result["effective_rate"], "10.48");
    assert_eq!(result["tiers"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_income_tax_credits_exceed_tax() {
    let result = calculate("/income-tax", json!({ "gross": "5000" })).await;
    assert_decimal(&result["final_tax"], "0");
}

#[tokio::test]
async fn test_income_tax_2025_by_flag() {
    let result = calculate("/income-tax", json!({ "gross": "15000", "use_2025": true })).await;
    assert_decimal(&result["gross_tax"], "2134.6");
}

// =============================================================================
// Forecast and annual summary
// =============================================================================

#[tokio::test]
async fn test_forecast_projects_remaining_months() {
    let body = json!({
        "records": [
            { "month": 0, "gross": "15000", "source": "auto" },
            { "month": 1, "gross": "15000", "source": "auto" }
        ],
        "current_month_gross": "15000"
    });
    let result = calculate("/forecast", body).await;

    assert_eq!(result["months_with_data"], 2);
    assert_decimal(&result["estimated_annual_gross"], "180000");
    assert_decimal(&result["predicted_annual_tax"], "18858");
}

#[tokio::test]
async fn test_forecast_uses_payslip_baseline() {
    let body = json!({
        "records": [
            { "month": 2, "gross": "16000", "source": "manual", "cumulative_gross_tax": "47000" }
        ],
        "projected_monthly_gross": "15000"
    });
    let result = calculate("/forecast", body).await;

    assert_eq!(result["months_with_data"], 3);
    assert_decimal(&result["estimated_annual_gross"], "182000");
}

#[tokio::test]
async fn test_annual_summary_from_records() {
    let body = json!({
        "records": [
            { "month": 0, "gross": "10000", "income_tax": "575.1", "ni": "545.25", "pension": "600", "study": "250", "source": "auto" },
            { "month": 1, "gross": "12000", "income_tax": "900", "ni": "700", "source": "manual" },
            { "month": 2 }
        ]
    });
    let result = calculate("/annual-summary", body).await;

    assert_decimal(&result["total_gross"], "22000");
    assert_decimal(&result["total_deductions"], "3570.35");
    assert_decimal(&result["total_net"], "18429.65");
    assert_eq!(result["reported_months"], 2);
    assert_eq!(result["cumulative"]["manual_months"], 1);
    assert_decimal(&result["cumulative"]["cumulative_tax_base"], "12000");
}

#[tokio::test]
async fn test_annual_summary_from_months() {
    let body = json!({
        "months": [
            { "shifts": [shift("vacation", "2026-01-05"), shift("sick", "2026-01-06")] },
            { "payslip": { "gross": "11000", "income_tax": "600", "national_insurance": "200", "health_insurance": "400" } }
        ]
    });
    let result = calculate("/annual-summary", body).await;
    let months = result["months"].as_array().unwrap();

    assert_eq!(months.len(), 12);
    assert_eq!(months[0]["source"], "auto");
    // 2 × 1750 + 509.68
    assert_decimal(&months[0]["gross"], "4009.68");
    assert_eq!(months[1]["source"], "manual");
    assert_decimal(&months[1]["ni"], "600");
    assert_eq!(months[2]["source"], "empty");
    assert_decimal(&result["total_gross"], "15009.68");
}

// =============================================================================
// Month summary
// =============================================================================

#[tokio::test]
async fn test_month_summary_with_comparison() {
    let body = json!({
        "shifts": [shift("plus", "2026-03-04"), shift("training", "2026-03-05")],
        "payslip": { "gross": "3314.68", "actual_net": "3000" }
    });
    let result = calculate("/month-summary", body).await;
    let summary = &result["summary"];

    assert_eq!(summary["shift_count"], 2);
    assert_decimal(&summary["fixed_additions"], "509.68");
    // 1695 + 1110 + 509.68
    assert_decimal(&summary["gross"], "3314.68");
    assert_decimal(&summary["average_pay_per_shift"], "1402.5");

    let comparison = result["comparison"].as_array().unwrap();
    assert_eq!(comparison.len(), 7);
    assert_eq!(comparison[0]["item"], "gross");
    assert_eq!(comparison[0]["status"], "match");
}

#[tokio::test]
async fn test_month_summary_without_payslip_omits_comparison() {
    let result = calculate("/month-summary", json!({ "shifts": [] })).await;
    assert!(result.get("comparison").is_none());
    assert_decimal(&result["summary"]["gross"], "0");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shift-pay")
                .header("Content-Type", "application/json")
                .body(Body::from("{invalid json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_unknown_shift_type_is_rejected() {
    let (status, json) = post_json("/shift-pay", json!({ "shifts": [shift("night", "2026-03-04")] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_month_index_out_of_range() {
    let body = json!({ "records": [{ "month": 12, "gross": "1000" }] });
    let (status, json) = post_json("/annual-summary", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_overflowing_forecast_is_rejected() {
    let body = json!({ "projected_monthly_gross": "79228162514264337593543950335" });
    let (status, json) = post_json("/forecast", body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_tax_year() {
    let (status, json) = post_json("/forecast", json!({ "tax_year": 2019 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "TAX_YEAR_NOT_FOUND");
}
