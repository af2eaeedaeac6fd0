// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits below the navbar; the toast list is stacked on
//! top of both.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications::Manager;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub toasts: &'a Manager,
}

/// Renders the current application view based on the active screen.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        screen: ctx.screen,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext {
            i18n: ctx.i18n,
            active_toasts: ctx.toasts.len(),
        })
        .map(Message::Home),
        Screen::About => about::view(about::ViewContext { i18n: ctx.i18n }).map(Message::About),
    };

    let column = Column::new().push(navbar).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = ctx.toasts.view().map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column)
        .push(toasts)
        .into()
}
