// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Backend**: Service address and request timeout
//! - **Progress**: Estimated progress cadence

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Address of a locally running thumbnail service.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Longest request timeout accepted from the config file (seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;

/// Shortest request timeout accepted from the config file (seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

// ==========================================================================
// Progress Defaults
// ==========================================================================

/// Percent added on every estimated-progress tick.
pub const DEFAULT_ESTIMATED_STEP: u8 = 10;

/// Delay between estimated-progress ticks (milliseconds).
pub const DEFAULT_ESTIMATED_INTERVAL_MS: u64 = 300;

/// Minimum delay between estimated-progress ticks (milliseconds).
pub const MIN_ESTIMATED_INTERVAL_MS: u64 = 50;

/// Maximum delay between estimated-progress ticks (milliseconds).
pub const MAX_ESTIMATED_INTERVAL_MS: u64 = 5000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_default_is_within_bounds() {
        assert!((MIN_ESTIMATED_INTERVAL_MS..=MAX_ESTIMATED_INTERVAL_MS)
            .contains(&DEFAULT_ESTIMATED_INTERVAL_MS));
        assert_eq!(DEFAULT_ESTIMATED_INTERVAL_MS, 300);
        assert_eq!(DEFAULT_ESTIMATED_STEP, 10);
    }
}
