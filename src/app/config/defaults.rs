// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast lifecycle**: Enter, hold, and exit phase durations
//! - **Toast layout**: Distance from the top edge of the window
//! - **Ticking**: Animation frame interval and idle polling interval

// ==========================================================================
// Toast Lifecycle Defaults
// ==========================================================================

/// Default duration of the enter phase (in milliseconds).
pub const DEFAULT_ENTER_MS: u64 = 300;

/// Default duration of the hold phase (in milliseconds).
pub const DEFAULT_HOLD_MS: u64 = 2000;

/// Default duration of the exit phase (in milliseconds).
pub const DEFAULT_EXIT_MS: u64 = 300;

/// Maximum duration of an enter or exit animation (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5_000;

/// Maximum duration of the hold phase (in milliseconds).
pub const MAX_HOLD_MS: u64 = 60_000;

// ==========================================================================
// Toast Layout Defaults
// ==========================================================================

/// Default offset of the toast stack from the top edge (in pixels).
pub const DEFAULT_TOP_INSET: f32 = 20.0;

/// Maximum offset of the toast stack from the top edge (in pixels).
pub const MAX_TOP_INSET: f32 = 400.0;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default animation tick interval while toasts are visible (~60 fps).
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Minimum animation tick interval (in milliseconds).
pub const MIN_FRAME_INTERVAL_MS: u64 = 4;

/// Maximum animation tick interval (in milliseconds).
pub const MAX_FRAME_INTERVAL_MS: u64 = 100;

/// Default polling interval for bridge requests when no toast is visible.
pub const DEFAULT_IDLE_POLL_MS: u64 = 100;

/// Minimum idle polling interval (in milliseconds).
pub const MIN_IDLE_POLL_MS: u64 = 16;

/// Maximum idle polling interval (in milliseconds).
pub const MAX_IDLE_POLL_MS: u64 = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ENTER_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_EXIT_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_HOLD_MS <= MAX_HOLD_MS);
    assert!(DEFAULT_FRAME_INTERVAL_MS >= MIN_FRAME_INTERVAL_MS);
    assert!(DEFAULT_FRAME_INTERVAL_MS <= MAX_FRAME_INTERVAL_MS);
    assert!(DEFAULT_IDLE_POLL_MS >= MIN_IDLE_POLL_MS);
    assert!(DEFAULT_IDLE_POLL_MS <= MAX_IDLE_POLL_MS);
};
