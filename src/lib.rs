//! Shift payroll engine
//!
//! This crate prices shifts across regular, weekend and night-rest rate windows,
//! computes pension, study fund and national/health insurance deductions,
//! progressive income tax with credit points, and annual forecasts and totals
//! for a single employee under Israeli payroll rules.
//!
//! The calculation core is pure: configuration is passed into every call and
//! statutory constants are year-keyed data. The [`api`] module exposes the
//! engine over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
