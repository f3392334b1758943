//! Application state for the rostering API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::SchedulePolicy;

/// Shared application state.
///
/// Holds the policy loaded at startup; requests may still override it
/// per run.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<SchedulePolicy>,
}

impl AppState {
    /// Creates a new application state with the given default policy.
    pub fn new(policy: SchedulePolicy) -> Self {
        Self { policy: Arc::new(policy) }
    }

    /// Returns the default policy.
    pub fn policy(&self) -> &SchedulePolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
