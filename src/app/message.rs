// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::{self, Toast};

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Lifecycle message for one toast, routed to the manager.
    Toast(notifications::Message),
    /// Display a configured toast.
    ShowToast(Toast),
    /// Close the most recent toast (Escape key or home screen button).
    DismissNewestToast,
    SwitchScreen(Screen),
    Navbar(navbar::Message),
    Home(home::Message),
    About(about::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_SHELL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Screen shown on startup.
    pub screen: Option<Screen>,
}
