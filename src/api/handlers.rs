//! HTTP request handlers for the payroll API.
//!
//! Every handler parses its body, validates shifts and month indices at the
//! boundary, runs the engine and wraps the result in a [`CalculationEnvelope`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    build_year_records, calculate_annual_summary, calculate_deductions, calculate_income_tax,
    calculate_shift_pay, compare_payslip, month_shift_gross, predict_annual_tax,
    projected_monthly_gross, summarize_month,
};
use crate::config::{PayrollProfile, RateConfig, TaxTables};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AnnualSummary, DeductionResult, MonthlyRecord, Shift, ShiftResult, TaxForecast, TaxResult,
    YtdBaseline,
};

use super::request::{
    AnnualSummaryRequest, DeductionsRequest, ForecastRequest, IncomeTaxRequest, MonthSummaryRequest,
    ShiftPayRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, CalculationEnvelope, MonthSummaryResponse, ShiftPayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shift-pay", post(shift_pay_handler))
        .route("/deductions", post(deductions_handler))
        .route("/income-tax", post(income_tax_handler))
        .route("/forecast", post(forecast_handler))
        .route("/annual-summary", post(annual_summary_handler))
        .route("/month-summary", post(month_summary_handler))
        .with_state(state)
}

/// Maps a body rejection onto an API error.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

fn error_response(error: ApiErrorResponse) -> Response {
    (
        error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error.error),
    )
        .into_response()
}

/// Wraps the outcome of a calculation in the envelope, or maps its error.
fn respond<T: Serialize>(
    correlation_id: Uuid,
    endpoint: &'static str,
    started: Instant,
    outcome: EngineResult<T>,
) -> Response {
    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                endpoint,
                duration_us = started.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(CalculationEnvelope::new(correlation_id, result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                endpoint,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

fn validate_shifts(shifts: &[Shift]) -> EngineResult<()> {
    shifts.iter().try_for_each(Shift::validate)
}

fn validate_months(records: &[MonthlyRecord]) -> EngineResult<()> {
    match records.iter().find(|r| r.month > 11) {
        Some(record) => Err(EngineError::InvalidMonth { month: record.month }),
        None => Ok(()),
    }
}

fn price_shifts(shifts: &[Shift], rates: &RateConfig) -> Vec<ShiftResult> {
    shifts.iter().map(|s| calculate_shift_pay(s, rates)).collect()
}

macro_rules! parse_body {
    ($payload:expr, $correlation_id:expr) => {
        match $payload {
            Ok(Json(request)) => request,
            Err(rejection) => return error_response(rejection_error(rejection, $correlation_id)),
        }
    };
}

/// Handler for POST /shift-pay.
async fn shift_pay_handler(
    payload: Result<Json<ShiftPayRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift pay request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome = perform_shift_pay(&request);
    if let Ok(response) = &outcome {
        info!(
            correlation_id = %correlation_id,
            shifts_count = response.shifts.len(),
            total_pay = %response.total_pay,
            "Shifts priced"
        );
    }
    respond(correlation_id, "/shift-pay", started, outcome)
}

fn perform_shift_pay(request: &ShiftPayRequest) -> EngineResult<ShiftPayResponse> {
    validate_shifts(&request.shifts)?;
    let rates = RateConfig::from_overrides(&request.rates);
    let shifts = price_shifts(&request.shifts, &rates);
    let total_pay = shifts.iter().map(ShiftResult::total_pay).sum::<Decimal>();
    Ok(ShiftPayResponse { shifts, total_pay })
}

/// Handler for POST /deductions.
async fn deductions_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeductionsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing deductions request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome: EngineResult<DeductionResult> =
        calculate_deductions(request.gross, &request.toggles, state.tables());
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            gross = %request.gross,
            net = %result.net,
            "Deductions calculated"
        );
    }
    respond(correlation_id, "/deductions", started, outcome)
}

/// Handler for POST /income-tax.
async fn income_tax_handler(
    State(state): State<AppState>,
    payload: Result<Json<IncomeTaxRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing income tax request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome: EngineResult<TaxResult> = calculate_income_tax(
        request.gross,
        request.credit_points,
        request.year(),
        state.tables(),
    );
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            gross = %request.gross,
            final_tax = %result.final_tax,
            "Income tax calculated"
        );
    }
    respond(correlation_id, "/income-tax", started, outcome)
}

/// Handler for POST /forecast.
async fn forecast_handler(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome = perform_forecast(&request, state.tables());
    if let Ok(result) = &outcome {
        info!(
            correlation_id = %correlation_id,
            months_with_data = result.months_with_data,
            estimated_annual_gross = %result.estimated_annual_gross,
            "Annual tax forecast"
        );
    }
    respond(correlation_id, "/forecast", started, outcome)
}

fn perform_forecast(request: &ForecastRequest, tables: &TaxTables) -> EngineResult<TaxForecast> {
    validate_months(&request.records)?;
    let projected = request
        .projected_monthly_gross
        .unwrap_or_else(|| projected_monthly_gross(request.current_month_gross, &request.records));
    let ytd = request
        .ytd
        .or_else(|| YtdBaseline::from_records(&request.records));
    predict_annual_tax(
        &request.records,
        projected,
        request.credit_points,
        request.tax_year,
        ytd,
        tables,
    )
}

/// Handler for POST /annual-summary.
async fn annual_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnnualSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annual summary request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome = perform_annual_summary(request, state.tables());
    if let Ok(summary) = &outcome {
        info!(
            correlation_id = %correlation_id,
            reported_months = summary.reported_months,
            total_gross = %summary.total_gross,
            "Annual summary calculated"
        );
    }
    respond(correlation_id, "/annual-summary", started, outcome)
}

fn perform_annual_summary(request: AnnualSummaryRequest, tables: &TaxTables) -> EngineResult<AnnualSummary> {
    if request.months.is_empty() {
        validate_months(&request.records)?;
        return Ok(calculate_annual_summary(&request.records));
    }

    if request.months.len() > 12 {
        return Err(EngineError::InvalidMonth {
            month: request.months.len() as u32 - 1,
        });
    }

    let profile: PayrollProfile = request.profile.into();
    let mut shift_gross = Vec::with_capacity(request.months.len());
    let mut payslips = Vec::with_capacity(request.months.len());
    for month in request.months {
        validate_shifts(&month.shifts)?;
        let results = price_shifts(&month.shifts, &profile.rates);
        shift_gross.push(month_shift_gross(&results, &profile.fixed_additions));
        payslips.push(month.payslip);
    }

    let records = build_year_records(
        &shift_gross,
        &payslips,
        &profile.toggles,
        profile.credit_points,
        tables,
    )?;
    Ok(calculate_annual_summary(&records))
}

/// Handler for POST /month-summary.
async fn month_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month summary request");
    let request = parse_body!(payload, correlation_id);

    let started = Instant::now();
    let outcome = perform_month_summary(request, state.tables());
    if let Ok(response) = &outcome {
        info!(
            correlation_id = %correlation_id,
            shifts_count = response.summary.shift_count,
            gross = %response.summary.gross,
            net = %response.summary.net,
            "Month summarized"
        );
    }
    respond(correlation_id, "/month-summary", started, outcome)
}

fn perform_month_summary(
    request: MonthSummaryRequest,
    tables: &TaxTables,
) -> EngineResult<MonthSummaryResponse> {
    validate_shifts(&request.shifts)?;
    let profile: PayrollProfile = request.profile.into();
    let results = price_shifts(&request.shifts, &profile.rates);
    let summary = summarize_month(&results, &profile, tables)?;
    let comparison = request
        .payslip
        .filter(|p| p.gross > Decimal::ZERO)
        .map(|p| compare_payslip(&summary, &p));
    Ok(MonthSummaryResponse { summary, comparison })
}
