//! # Arealens
//!
//! Query-driven analytics over real-estate area price and demand trends.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Query string ("Analyze Wakad")              │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [classifier: ordered rules]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Intent (compare | price growth | area profile | none)  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [analysis branch]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Per-year means over the shared read-only Dataset     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │        Analysis { summary, chart, table } → JSON         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The dataset is loaded once at process start and shared read-only across
//! all requests; answering a query is a pure function of (dataset, query).

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod query;
pub mod web;

// Re-exports for convenient usage
pub use analysis::{Analysis, Analyzer, Chart, NamedSeries};
pub use dataset::{CellValue, ColumnSpec, Dataset, Record};
pub use query::Intent;
