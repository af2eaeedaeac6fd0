// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens and toasts.
//!
//! The `App` struct owns the toast collection, the active screen, the loaded
//! configuration and localization. It translates messages into state changes
//! and re-derives the toast subscriptions from the current collection after
//! every update.

mod message;
pub mod paths;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Style};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    /// Directory given with `--config-dir`, if any.
    config_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Live toasts, newest first.
    toasts: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("toasts", &self.toasts.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            config: Config::default(),
            config_dir: None,
            theme_mode: ThemeMode::System,
            toasts: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from the flags received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, load_error) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let mut app = App {
            i18n,
            screen: flags.screen.unwrap_or_default(),
            theme_mode: config.general.theme_mode,
            config,
            config_dir,
            toasts: notifications::Manager::new(),
        };

        if let Some(error) = load_error {
            log::warn!("using default settings: {error}");
            let title = app.i18n.tr("notification-config-load-error");
            let body = app.i18n.tr(error.i18n_key());
            app.notify(Style::Failure, title, body);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.toasts.is_empty() {
            self.i18n.tr("window-title")
        } else {
            let count = self.toasts.len().to_string();
            self.i18n
                .tr_with_args("window-title-with-count", &[("count", count.as_str())])
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let toast_sub = subscription::create_toast_subscription(&self.toasts);
        let keyboard_sub = subscription::create_keyboard_subscription(!self.toasts.is_empty());

        Subscription::batch([toast_sub, keyboard_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            config_dir: self.config_dir.as_deref(),
            toasts: &mut self.toasts,
        };

        match message {
            Message::Toast(toast_message) => update::handle_toast_message(&mut ctx, toast_message),
            Message::ShowToast(toast) => update::handle_show_toast(&mut ctx, toast),
            Message::DismissNewestToast => update::handle_dismiss_newest(&mut ctx),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::About(about_message) => update::handle_about_message(&mut ctx, about_message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            toasts: &self.toasts,
        })
    }

    /// Shows a text toast with the configured timing.
    fn notify(&mut self, style: Style, title: String, body: String) {
        update::notify(&mut self.toasts, &self.config.toasts, style, title, body);
    }
}
