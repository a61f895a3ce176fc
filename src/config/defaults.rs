// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the toast lifecycle and geometry.
//!
//! This module serves as the single source of truth for the timing and
//! layout constants used across the crate. Constants are organized by
//! category.
//!
//! # Categories
//!
//! - **Dwell**: How long the toast stays fully visible
//! - **Animation**: Durations of the enter/exit/cleanup animations
//! - **Geometry**: Margins, padding, and corner radius of the card
//! - **Typography**: Default message font

use std::time::Duration;

// ==========================================================================
// Dwell Defaults
// ==========================================================================

/// Default time the toast stays fully visible before auto-dismissing,
/// used when a request does not specify a dwell.
pub const DEFAULT_DWELL: Duration = Duration::from_secs(5);

/// Default dwell in seconds, for the configuration file.
pub const DEFAULT_DWELL_SECS: f32 = 5.0;

/// Minimum configurable dwell (in seconds).
pub const MIN_DWELL_SECS: f32 = 0.0;

/// Maximum configurable dwell (in seconds).
pub const MAX_DWELL_SECS: f32 = 60.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of the overlay fade-in, which runs concurrently with the
/// start of the slide-up.
pub const ENTER_FADE: Duration = Duration::from_millis(300);

/// Duration of the spring-eased slide-up that brings the card into view.
/// The dwell timer starts only once this completes.
pub const ENTER_SLIDE: Duration = Duration::from_millis(1000);

/// Duration of the spring-eased slide-down and overlay fade-out.
/// The completion handler fires when this completes.
pub const EXIT_SLIDE: Duration = Duration::from_millis(800);

/// Duration of the cosmetic transitional animation between the completion
/// handler and the final teardown.
pub const CLEANUP: Duration = Duration::from_millis(200);

/// Target opacity of the full-screen dimming layer.
pub const OVERLAY_OPACITY: f32 = 0.5;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Horizontal margin between the card and each screen edge (in points).
pub const OUTER_MARGIN: f32 = 20.0;

/// Horizontal padding between the card edge and the message text
/// (in points, each side).
pub const INNER_PADDING: f32 = 10.0;

/// Vertical padding between the card edge and the message text
/// (in points, top and bottom).
pub const VERTICAL_PADDING: f32 = 16.0;

/// Distance between the resting card and the bottom of the viewport
/// (in points). Also the extra travel needed to slide fully off-screen.
pub const BOTTOM_INSET: f32 = 20.0;

/// Corner radius of the card (in points).
pub const CORNER_RADIUS: f32 = 8.0;

// ==========================================================================
// Typography Defaults
// ==========================================================================

/// Default message font size (in points).
pub const DEFAULT_FONT_SIZE: f32 = 15.0;
