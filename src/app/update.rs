// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each `handle_*` function covers one top-level message family. Screen
//! events are turned into state changes or follow-up messages here; the
//! toast collection is only ever changed through the [`Manager`].

use super::{persistence, Message, Screen};
use crate::config::{Config, ToastConfig};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::{self, Content, Manager, Style, Toast};
use iced::Task;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a Path>,
    pub toasts: &'a mut Manager,
}

/// Shows a text toast with the configured timing. An empty `body` shows the
/// title alone.
pub fn notify(
    toasts: &mut Manager,
    timing: &ToastConfig,
    style: Style,
    title: String,
    body: String,
) {
    let content = if body.is_empty() {
        Content::none()
    } else {
        Content::text(body)
    };
    toasts.show(
        timing
            .toast()
            .set_style(style)
            .set_title(title)
            .set_content(content),
    );
}

/// Forwards a toast lifecycle message to the manager.
pub fn handle_toast_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    ctx.toasts.route(message);
    Task::none()
}

pub fn handle_show_toast(ctx: &mut UpdateContext<'_>, toast: Toast) -> Task<Message> {
    ctx.toasts.show(toast);
    Task::none()
}

/// Starts the fade of the most recent toast, if any.
pub fn handle_dismiss_newest(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(newest) = ctx.toasts.newest().cloned() {
        ctx.toasts.route(notifications::Message::UserClose(newest));
    }
    Task::none()
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen != target {
        log::debug!("switching screen {} -> {target}", *ctx.screen);
        *ctx.screen = target;
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(&message, *ctx.screen) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(target) => handle_screen_switch(ctx, target),
        navbar::Event::ChangeLanguage(locale) => handle_language_change(ctx, locale),
    }
}

/// Switches the UI language and saves it. A failed save keeps the new
/// language for this session and reports the error as a toast.
pub fn handle_language_change(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    match persistence::apply_language_change(ctx.i18n, ctx.config, ctx.config_dir, locale) {
        Ok(true) => log::debug!("language set to {}", ctx.i18n.current_locale()),
        Ok(false) => {}
        Err(error) => {
            log::warn!("failed to save settings: {error}");
            notify(
                ctx.toasts,
                &ctx.config.toasts,
                Style::Failure,
                ctx.i18n.tr("notification-config-save-error"),
                ctx.i18n.tr(error.i18n_key()),
            );
        }
    }
    Task::none()
}

/// Home screen requests are dispatched as follow-up messages so that every
/// toast enters the collection through the same path.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match home::update(&message, ctx.i18n, &ctx.config.toasts) {
        home::Event::ShowToast(toast) => Task::done(Message::ShowToast(toast)),
        home::Event::DismissNewest => Task::done(Message::DismissNewestToast),
    }
}

pub fn handle_about_message(
    ctx: &mut UpdateContext<'_>,
    message: about::Message,
) -> Task<Message> {
    match about::update(&message) {
        about::Event::BackToHome => handle_screen_switch(ctx, Screen::Home),
    }
}
