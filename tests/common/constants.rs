//! Shared constants for end-to-end tests
//!
//! When the seeded catalog changes (track IDs, titles, feature values),
//! update only this file and fixtures.rs.

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// Track ID for "Bohemian Rhapsody" by Queen
pub const TRACK_1_ID: &str = "T1";

/// Track ID for "Somebody to Love" by Queen
pub const TRACK_2_ID: &str = "T2";

/// Track ID for "Hotel California" by Eagles
pub const TRACK_3_ID: &str = "T3";

/// Track ID for "New Kid in Town" by Eagles
pub const TRACK_4_ID: &str = "T4";

/// Track ID for "Take It Easy" by Eagles
pub const TRACK_5_ID: &str = "T5";

// ============================================================================
// Test Catalog Metadata
// ============================================================================

/// Track 1 title
pub const TRACK_1_TITLE: &str = "Bohemian Rhapsody";

/// Track 3 title
pub const TRACK_3_TITLE: &str = "Hotel California";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
