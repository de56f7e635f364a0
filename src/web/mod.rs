//! Web transport for arealens.
//!
//! One JSON endpoint; every query resolves to a success response.

mod server;

pub use server::{router, serve, AppState};
