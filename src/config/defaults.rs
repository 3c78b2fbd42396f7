// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the widget. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Magnification percentage bounds
//! - **Focal point**: Percentage range of the pan position
//! - **Timing**: Settle delay, fade-in and loading timeout
//! - **Layout**: Placeholder sizing while loading

use std::time::Duration;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default magnification applied as background size (200% = twice the element width).
pub const DEFAULT_ZOOM_PERCENT: f32 = 200.0;

/// Minimum allowed magnification. Below 100% the magnified view would not cover the element.
pub const MIN_ZOOM_PERCENT: f32 = 100.0;

/// Maximum allowed magnification.
pub const MAX_ZOOM_PERCENT: f32 = 1000.0;

// ==========================================================================
// Focal Point Defaults
// ==========================================================================

/// Lower bound of a focal point coordinate.
pub const FOCAL_MIN_PERCENT: f32 = 0.0;

/// Upper bound of a focal point coordinate.
pub const FOCAL_MAX_PERCENT: f32 = 100.0;

/// Focal point coordinate of the element centre.
pub const FOCAL_CENTER_PERCENT: f32 = 50.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Pause between a successful decode and showing the image (in milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 200;

/// Maximum configurable settle delay (in milliseconds).
pub const MAX_SETTLE_DELAY_MS: u64 = 5_000;

/// Duration of the image fade-in once loaded (in milliseconds).
pub const DEFAULT_FADE_IN_MS: u64 = 200;

/// Maximum configurable fade-in duration (in milliseconds).
pub const MAX_FADE_IN_MS: u64 = 5_000;

/// Time after which a pending load is reported as slow.
pub const LOADING_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval of the animation tick driving the spinner and fade-in.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Minimum height of the loading placeholder (in logical pixels).
pub const LOADING_MIN_HEIGHT: f32 = 200.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_PERCENT > 0.0);
    assert!(MIN_ZOOM_PERCENT <= DEFAULT_ZOOM_PERCENT);
    assert!(MAX_ZOOM_PERCENT > DEFAULT_ZOOM_PERCENT);

    assert!(FOCAL_MIN_PERCENT < FOCAL_CENTER_PERCENT);
    assert!(FOCAL_CENTER_PERCENT < FOCAL_MAX_PERCENT);

    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    assert!(DEFAULT_FADE_IN_MS <= MAX_FADE_IN_MS);

    assert!(LOADING_MIN_HEIGHT > 0.0);
};
