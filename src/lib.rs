// SPDX-License-Identifier: MPL-2.0
//! `toast_shell` is a small desktop shell built with the Iced GUI framework.
//!
//! It demonstrates transient toast notifications with a timed countdown, a
//! fade-out phase and manual dismissal, plus Fluent localization and user
//! preference management.

#![doc(html_root_url = "https://docs.rs/toast_shell/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
