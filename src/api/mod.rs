//! HTTP API module for the rostering engine.
//!
//! This module provides the REST API endpoint for generating staff
//! schedules from a roster, leave rows, and a planning horizon.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ScheduleRequest;
pub use response::ApiError;
pub use state::AppState;
