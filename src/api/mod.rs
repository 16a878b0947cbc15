//! HTTP API module for the Attendance Classification Engine.
//!
//! This module provides the REST endpoint for analyzing one file's worth
//! of extracted punch rows in a single one-shot batch.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, ApiError};
pub use state::AppState;
