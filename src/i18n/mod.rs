// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded from `assets/i18n/` at compile time.
//!
//! # Features
//!
//! - Locale selection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to `en-US` when no preferred locale is available

pub mod fluent;
