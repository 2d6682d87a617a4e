//! Core library for the `covid` CLI.
//!
//! This crate defines:
//! - Parsing of JHU CSSE daily reports (both historical column layouts)
//! - Per-country and worldwide aggregation
//! - Parsing and lookup of the confirmed-cases time series
//! - The fetch abstraction, its HTTP implementation and configuration
//!
//! Parsers and aggregators are pure functions over text and records; only
//! [`ReportService`] touches the network.

pub mod aggregate;
pub mod config;
pub mod daily;
pub mod endpoints;
pub mod error;
pub mod model;
pub mod service;
pub mod source;
pub mod timeseries;

pub use aggregate::{aggregate_country, aggregate_global};
pub use config::Config;
pub use daily::{Schema, parse_daily_report};
pub use endpoints::{Endpoints, default_report_date};
pub use error::{Error, Result};
pub use model::{BriefTotals, Count, CountryTimeSeries, CountryTotals, DailyRecord, TimeSeriesPoint};
pub use service::ReportService;
pub use source::{CsvSource, HttpSource};
pub use timeseries::{lookup_country_series, parse_time_series};
