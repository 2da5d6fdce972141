//! Performance benchmarks for the payroll engine.
//!
//! Covers the hot paths:
//! - Pricing a single 24-hour shift (1440 minute ticks)
//! - Pricing and summarizing a full month of shifts
//! - The monthly bracket walk and the annual forecast
//! - A month summary through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use shift_payroll::api::{AppState, create_router};
use shift_payroll::calculation::{
    calculate_income_tax, calculate_shift_pay, predict_annual_tax, summarize_month,
};
use shift_payroll::config::{PayrollProfile, RateConfig, TaxTables, TaxYear};
use shift_payroll::models::{MonthlyRecord, RecordSource, Shift, ShiftResult, ShiftType};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn start_of_march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

/// Builds a month's roster cycling through plus, training and minus shifts.
fn create_month_of_shifts(shift_count: usize) -> Vec<Shift> {
    let start = NaiveTime::from_hms_opt(14, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

    (0..shift_count)
        .map(|i| {
            let date = start_of_march() + Duration::days((i % 31) as i64);
            match i % 3 {
                0 => Shift::new(ShiftType::Plus, date),
                1 => Shift::new(ShiftType::Training, date),
                _ => Shift::minus(date, start, end),
            }
        })
        .collect()
}

fn price(shifts: &[Shift], rates: &RateConfig) -> Vec<ShiftResult> {
    shifts.iter().map(|s| calculate_shift_pay(s, rates)).collect()
}

/// Benchmark: One 24-hour shift.
fn bench_plus_shift(c: &mut Criterion) {
    let rates = RateConfig::default();
    // Friday, so the walk crosses into the weekend window
    let shift = Shift::new(ShiftType::Plus, NaiveDate::from_ymd_opt(2026, 3, 6).unwrap());

    c.bench_function("plus_shift", |b| {
        b.iter(|| black_box(calculate_shift_pay(black_box(&shift), &rates)))
    });
}

/// Benchmark: Pricing and summarizing rosters of increasing size.
fn bench_month_summary(c: &mut Criterion) {
    let profile = PayrollProfile::default();
    let tables = TaxTables::builtin();

    let mut group = c.benchmark_group("month_summary");
    for shift_count in [1, 8, 16, 31] {
        let shifts = create_month_of_shifts(shift_count);

        group.throughput(Throughput::Elements(shift_count as u64));
        group.bench_with_input(BenchmarkId::new("shifts", shift_count), &shifts, |b, shifts| {
            b.iter(|| {
                let results = price(shifts, &profile.rates);
                black_box(summarize_month(&results, &profile, &tables).unwrap())
            })
        });
    }
    group.finish();
}

/// Benchmark: Monthly income tax on a gross reaching the top bracket.
fn bench_income_tax(c: &mut Criterion) {
    let tables = TaxTables::builtin();
    let gross = Decimal::new(7_000_000, 2);
    let credit_points = Decimal::new(225, 2);

    c.bench_function("income_tax_top_bracket", |b| {
        b.iter(|| {
            black_box(calculate_income_tax(black_box(gross), credit_points, TaxYear::Y2026, &tables).unwrap())
        })
    });
}

/// Benchmark: Annual forecast over a half-filled year.
fn bench_annual_forecast(c: &mut Criterion) {
    let tables = TaxTables::builtin();
    let records: Vec<MonthlyRecord> = (0..6)
        .map(|month| MonthlyRecord {
            gross: Decimal::new(15_000 + 250 * month as i64, 0),
            source: RecordSource::Auto,
            ..MonthlyRecord::empty(month)
        })
        .collect();

    c.bench_function("annual_forecast", |b| {
        b.iter(|| {
            black_box(
                predict_annual_tax(
                    black_box(&records),
                    Decimal::new(15_000, 0),
                    Decimal::new(225, 2),
                    TaxYear::Y2026,
                    None,
                    &tables,
                )
                .unwrap(),
            )
        })
    });
}

/// Benchmark: Month summary request through the router.
fn bench_month_summary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::default());
    let body = serde_json::json!({
        "shifts": create_month_of_shifts(12),
        "payslip": { "gross": "15000" }
    })
    .to_string();

    c.bench_function("month_summary_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/month-summary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_plus_shift,
    bench_month_summary,
    bench_income_tax,
    bench_annual_forecast,
    bench_month_summary_endpoint,
);
criterion_main!(benches);
