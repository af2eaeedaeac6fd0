// SPDX-License-Identifier: MPL-2.0
//! Home screen: a set of buttons that each request a toast.
//!
//! The screen never touches the toast collection. It builds a configured
//! [`Toast`] and hands it to the parent as an [`Event`].

use crate::config::{ToastConfig, BRIEF_DISPLAY_DURATION_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{Attribute, Content, Style, Toast};
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, Column, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active_toasts: usize,
}

/// Messages emitted by the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ShowSuccess,
    ShowFailure,
    ShowBrief,
    ShowStyled,
    DismissNewest,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ShowToast(Toast),
    DismissNewest,
}

/// Process a home screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message, i18n: &I18n, timing: &ToastConfig) -> Event {
    let base = timing.toast();

    match message {
        Message::ShowSuccess => Event::ShowToast(
            base.set_style(Style::Success)
                .set_title(i18n.tr("toast-success-title"))
                .set_content(Content::text(i18n.tr("toast-success-content"))),
        ),
        Message::ShowFailure => Event::ShowToast(
            base.set_style(Style::Failure)
                .set_title(i18n.tr("toast-failure-title"))
                .set_content(Content::text(i18n.tr("toast-failure-content"))),
        ),
        Message::ShowBrief => Event::ShowToast(
            base.set_display_duration(BRIEF_DISPLAY_DURATION_MS)
                .set_title(i18n.tr("toast-brief-title")),
        ),
        Message::ShowStyled => Event::ShowToast(
            base.set_title(i18n.tr("toast-styled-title"))
                .set_content(Content::text(i18n.tr("toast-styled-content")))
                .set_attributes(vec![
                    Attribute::BorderColor(palette::INFO_500),
                    Attribute::Padding(spacing::LG),
                ]),
        ),
        Message::DismissNewest => Event::DismissNewest,
    }
}

/// Render the home screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG);
    let description = Text::new(ctx.i18n.tr("home-description")).size(typography::BODY);

    let count = ctx.active_toasts.to_string();
    let active = Text::new(
        ctx.i18n
            .tr_with_args("home-active-count", &[("count", count.as_str())]),
    )
    .size(typography::CAPTION);

    let show_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new(ctx.i18n.tr("home-show-success-button"))).on_press(Message::ShowSuccess))
        .push(
            button(Text::new(ctx.i18n.tr("home-show-failure-button")))
                .on_press(Message::ShowFailure)
                .style(button::danger),
        )
        .push(
            button(Text::new(ctx.i18n.tr("home-show-brief-button")))
                .on_press(Message::ShowBrief)
                .style(button::secondary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("home-show-styled-button")))
                .on_press(Message::ShowStyled)
                .style(button::secondary),
        );

    let dismiss = button(Text::new(ctx.i18n.tr("home-dismiss-newest-button")))
        .on_press_maybe((ctx.active_toasts > 0).then_some(Message::DismissNewest))
        .style(button::text);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(title)
        .push(description)
        .push(show_buttons)
        .push(dismiss)
        .push(active);

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_DISPLAY_DURATION_MS, DEFAULT_FADE_DURATION_MS};
    use crate::ui::notifications::toast::ms_to_ticks;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    fn shown(event: Event) -> Toast {
        match event {
            Event::ShowToast(toast) => toast,
            Event::DismissNewest => panic!("expected ShowToast"),
        }
    }

    #[test]
    fn success_button_builds_success_toast_with_configured_timing() {
        let toast = shown(update(&Message::ShowSuccess, &english(), &ToastConfig::default()));

        assert_eq!(toast.style(), Style::Success);
        assert_eq!(toast.title(), "Operation completed");
        assert!(!toast.content().is_empty());
        assert_eq!(toast.countdown(), ms_to_ticks(DEFAULT_DISPLAY_DURATION_MS));
        assert_eq!(toast.fade_out_duration_ms(), DEFAULT_FADE_DURATION_MS);
        assert_eq!(toast.id(), "");
    }

    #[test]
    fn failure_button_builds_failure_toast() {
        let toast = shown(update(&Message::ShowFailure, &english(), &ToastConfig::default()));
        assert_eq!(toast.style(), Style::Failure);
        assert_eq!(toast.title(), "Operation failed");
    }

    #[test]
    fn configured_durations_are_applied() {
        let timing = ToastConfig {
            display_duration_ms: Some(3_000),
            fade_out_duration_ms: Some(1_000),
        };
        let toast = shown(update(&Message::ShowSuccess, &english(), &timing));
        assert_eq!(toast.countdown(), 30);
        assert_eq!(toast.fade_out_ticks(), 10);
    }

    #[test]
    fn brief_toast_is_shorter() {
        let toast = shown(update(&Message::ShowBrief, &english(), &ToastConfig::default()));
        assert_eq!(toast.countdown(), ms_to_ticks(BRIEF_DISPLAY_DURATION_MS));
        assert!(toast.content().is_empty());
    }

    #[test]
    fn styled_toast_carries_attributes() {
        let toast = shown(update(&Message::ShowStyled, &english(), &ToastConfig::default()));
        assert_eq!(toast.attributes().len(), 2);
    }

    #[test]
    fn dismiss_newest_is_forwarded() {
        let event = update(&Message::DismissNewest, &english(), &ToastConfig::default());
        assert!(matches!(event, Event::DismissNewest));
    }
}
