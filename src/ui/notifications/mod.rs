// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for transient user feedback.
//!
//! Toasts appear at the bottom-left of the window, count down for a fixed
//! number of ticks, fade out over the last part of their lifetime and then
//! disappear. Pressing the close button skips straight to the fade.
//!
//! # Components
//!
//! - [`toast`] - The opaque `Toast` value, its lifecycle `Message`s and `update`
//! - [`view`] - Per-style templates and the anchored list
//! - `manager` - [`Manager`], the ordered collection of live toasts
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Style, Toast};
//!
//! let mut manager = Manager::new();
//! manager.show(Toast::init().set_title("Saved").set_style(Style::Success));
//!
//! // In the application:
//! // subscription: manager.subscription().map(Message::Toast)
//! // update:       Message::Toast(msg) => manager.route(msg)
//! // view:         manager.view().map(Message::Toast)
//! ```

mod manager;
pub mod toast;
pub mod view;

pub use manager::{Manager, ID_PREFIX};
pub use toast::{
    get_id, get_id_from_toast_message, update, Attribute, Content, Message, Never, Outcome, Style,
    Toast,
};
