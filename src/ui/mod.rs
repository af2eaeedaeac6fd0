// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! screen exposes `view`, a `Message` enum, and an `update` that turns
//! messages into `Event`s for the application to act on.
//!
//! # Screens
//!
//! - [`home`] - Buttons that request toasts
//! - [`about`] - Application name and version
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast widget and the collection manager
//! - [`navbar`] - Navigation bar switching between screens
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod theming;
