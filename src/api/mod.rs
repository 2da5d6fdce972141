//! HTTP API for the payroll engine.
//!
//! A thin adapter for an external presentation layer: plain-data JSON in,
//! engine results out. The calculation core itself performs no I/O.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AnnualSummaryRequest, DeductionsRequest, ForecastRequest, IncomeTaxRequest, MonthInput,
    MonthSummaryRequest, ProfileRequest, ShiftPayRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CalculationEnvelope, MonthSummaryResponse, ShiftPayResponse,
};
pub use state::AppState;
