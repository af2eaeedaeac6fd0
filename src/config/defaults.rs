// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toast timing**: Display and fade durations and their bounds

use crate::ui::notifications::toast::{DEFAULT_COUNTDOWN, DEFAULT_FADE_OUT_DURATION_MS, MS_PER_TICK};

// ==========================================================================
// Toast Timing Defaults
// ==========================================================================

/// Default total visible duration of a toast, fade included (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u32 = DEFAULT_COUNTDOWN * MS_PER_TICK;

/// Minimum display duration (in milliseconds).
pub const MIN_DISPLAY_DURATION_MS: u32 = 1_000;

/// Maximum display duration (in milliseconds).
pub const MAX_DISPLAY_DURATION_MS: u32 = 60_000;

/// Default fade-out duration (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u32 = DEFAULT_FADE_OUT_DURATION_MS;

/// Maximum fade-out duration (in milliseconds).
pub const MAX_FADE_DURATION_MS: u32 = 5_000;

/// Display duration of the "brief" demo toast (in milliseconds).
pub const BRIEF_DISPLAY_DURATION_MS: u32 = 2_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_duration_matches_widget_default() {
        assert_eq!(DEFAULT_DISPLAY_DURATION_MS, 6_000);
    }

    #[test]
    fn display_bounds_are_ordered() {
        assert!(MIN_DISPLAY_DURATION_MS < DEFAULT_DISPLAY_DURATION_MS);
        assert!(DEFAULT_DISPLAY_DURATION_MS < MAX_DISPLAY_DURATION_MS);
        assert!(BRIEF_DISPLAY_DURATION_MS >= MIN_DISPLAY_DURATION_MS);
    }

    #[test]
    fn default_fade_within_bounds() {
        assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
        assert!(DEFAULT_FADE_DURATION_MS < MIN_DISPLAY_DURATION_MS);
    }
}
