// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! A row of buttons at the top of every screen. The button of the active
//! screen is highlighted, and the right-hand side lists the available
//! languages with the current one highlighted.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Vertical,
    widget::{button, container, Container, Row, Space, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenHome,
    OpenAbout,
    SelectLanguage(LanguageIdentifier),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    ChangeLanguage(LanguageIdentifier),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the screen that is already active yields [`Event::None`].
#[must_use]
pub fn update(message: &Message, current: Screen) -> Event {
    let target = match message {
        Message::OpenHome => Screen::Home,
        Message::OpenAbout => Screen::About,
        Message::SelectLanguage(locale) => return Event::ChangeLanguage(locale.clone()),
    };
    if target == current {
        Event::None
    } else {
        Event::Navigate(target)
    }
}

/// Render the navigation bar.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(nav_button(
            ctx.i18n.tr("navbar-home-button"),
            Message::OpenHome,
            ctx.screen == Screen::Home,
        ))
        .push(nav_button(
            ctx.i18n.tr("navbar-about-button"),
            Message::OpenAbout,
            ctx.screen == Screen::About,
        ))
        .push(Space::new().width(Length::Fill));

    for locale in &ctx.i18n.available_locales {
        bar = bar.push(nav_button(
            locale.to_string(),
            Message::SelectLanguage(locale.clone()),
            locale == ctx.i18n.current_locale(),
        ));
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .style(container::bordered_box)
        .into()
}

fn nav_button<'a>(label: String, message: Message, active: bool) -> Element<'a, Message> {
    let style = if active { button::primary } else { button::text };
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .style(style)
        .into()
}
