//! Response types for the payroll API.
//!
//! Successful responses wrap the engine output in a [`CalculationEnvelope`];
//! failures return an [`ApiError`] body with a machine-readable code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{ComparisonLine, MonthSummary, ShiftResult};

/// Envelope around every successful calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationEnvelope<T> {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The calculation output.
    pub result: T,
}

impl<T> CalculationEnvelope<T> {
    /// Wraps `result` under the given calculation id.
    pub fn new(calculation_id: Uuid, result: T) -> Self {
        Self {
            calculation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            result,
        }
    }
}

/// Result of `POST /shift-pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayResponse {
    /// One result per requested shift, in request order.
    pub shifts: Vec<ShiftResult>,
    /// Sum of all shift pay.
    pub total_pay: Decimal,
}

/// Result of `POST /month-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummaryResponse {
    /// The month estimate.
    pub summary: MonthSummary,
    /// Estimate versus payslip, when a payslip with a gross was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Vec<ComparisonLine>>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a tax year not found error response.
    pub fn tax_year_not_found(year: u16) -> Self {
        Self::with_details(
            "TAX_YEAR_NOT_FOUND",
            format!("Tax year not found: {}", year),
            format!("No tax table is configured for {}", year),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TaxYearNotFound { year } => {
                ApiErrorResponse::bad_request(ApiError::tax_year_not_found(year))
            }
            err @ EngineError::InvalidShift { .. } => ApiErrorResponse::bad_request(ApiError::with_details(
                "VALIDATION_ERROR",
                err.to_string(),
                "The shift type is unknown or missing data it requires",
            )),
            err @ (EngineError::InvalidMonth { .. } | EngineError::AmountOutOfRange { .. }) => {
                ApiErrorResponse::bad_request(ApiError::validation_error(err.to_string()))
            }
        }
    }
}
