// SPDX-License-Identifier: MPL-2.0
//! Rendering of toasts.
//!
//! Each [`Style`] has its own template. The success template spells out its
//! whole look inline; the failure template relies on the theme's bordered
//! box and declares nothing else. Fading scales every color of the finished
//! style by a factor derived from the remaining fade ticks.

use super::toast::{Attribute, Message, Never, Style, Toast};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{Background, Border, Color, Element, Length, Shadow, Theme};

/// Renders a single toast.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let alpha = fade_factor(toast);
    let custom = Customization::from_attributes(toast.attributes());

    let template = match toast.style() {
        Style::Success => success_template(toast, alpha, custom),
        Style::Failure => failure_template(toast, alpha, custom),
    };

    custom.apply_layout(template).into()
}

/// Renders every toast, in collection order, in a fixed-width column
/// anchored to the bottom-left corner of the window.
pub fn view_list(toasts: &[Toast]) -> Element<'_, Message> {
    let column = Column::with_children(toasts.iter().map(view))
        .spacing(spacing::XS)
        .width(Length::Fixed(sizing::TOAST_WIDTH));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Opacity multiplier for the current countdown.
///
/// Fully opaque outside the fade window, then linear down to zero over the
/// fade window.
pub(crate) fn fade_factor(toast: &Toast) -> f32 {
    if !toast.is_fading() {
        return opacity::OPAQUE;
    }

    let window = toast.fade_out_ticks();
    if window == 0 {
        return opacity::TRANSPARENT;
    }

    (toast.countdown() as f32 / window as f32).clamp(opacity::TRANSPARENT, opacity::OPAQUE)
}

fn success_template(toast: &Toast, alpha: f32, custom: Customization) -> Container<'_, Message> {
    let icon = Container::new(Text::new("✓").size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(Horizontal::Center);

    let title = Text::new(toast.title())
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(with_alpha(theme.palette().text, alpha)),
        });

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill).push(title);
    if let Some(fragment) = content_fragment(toast) {
        body = body.push(fragment);
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icon)
        .push(body)
        .push(close_button(toast, alpha));

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| fade(custom.apply_style(success_style(theme)), alpha))
}

fn failure_template(toast: &Toast, alpha: f32, custom: Customization) -> Container<'_, Message> {
    let icon = Text::new("!").size(typography::TITLE_SM);
    let title = Text::new(toast.title()).size(typography::BODY_LG);

    let mut body = Column::new().width(Length::Fill).push(title);
    if let Some(fragment) = content_fragment(toast) {
        body = body.push(fragment);
    }

    let row = Row::new()
        .spacing(spacing::SM)
        .push(icon)
        .push(body)
        .push(close_button(toast, alpha));

    Container::new(row).style(move |theme: &Theme| {
        fade(custom.apply_style(container::bordered_box(theme)), alpha)
    })
}

/// Inline style of the success template.
fn success_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        border: Border {
            color: palette::SUCCESS_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

fn close_button(toast: &Toast, alpha: f32) -> Element<'_, Message> {
    button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::UserClose(toast.clone()))
        .padding(spacing::XXS)
        .style(move |theme: &Theme, status| close_button_style(theme, status, alpha))
        .into()
}

/// Text button look with its glyph faded along with the toast.
fn close_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let style = button::text(theme, status);
    button::Style {
        text_color: with_alpha(style.text_color, alpha),
        ..style
    }
}

fn content_fragment(toast: &Toast) -> Option<Element<'_, Message>> {
    toast.content().view().map(|fragment| fragment.map(absurd))
}

fn absurd(never: Never) -> Message {
    match never {}
}

/// Scales the alpha channel of every color in `style`.
fn fade(style: container::Style, alpha: f32) -> container::Style {
    if alpha >= opacity::OPAQUE {
        return style;
    }

    container::Style {
        background: style.background.map(|background| match background {
            Background::Color(color) => Background::Color(with_alpha(color, alpha)),
            other => other,
        }),
        border: Border {
            color: with_alpha(style.border.color, alpha),
            ..style.border
        },
        shadow: Shadow {
            color: with_alpha(style.shadow.color, alpha),
            ..style.shadow
        },
        text_color: style.text_color.map(|color| with_alpha(color, alpha)),
        ..style
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Attribute list folded into its effective values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Customization {
    padding: Option<f32>,
    width: Option<f32>,
    background: Option<Color>,
    border_color: Option<Color>,
    border_radius: Option<f32>,
}

impl Customization {
    fn from_attributes(attributes: &[Attribute]) -> Self {
        attributes
            .iter()
            .fold(Self::default(), |mut custom, attribute| {
                match *attribute {
                    Attribute::Padding(value) => custom.padding = Some(value),
                    Attribute::Width(value) => custom.width = Some(value),
                    Attribute::Background(color) => custom.background = Some(color),
                    Attribute::BorderColor(color) => custom.border_color = Some(color),
                    Attribute::BorderRadius(value) => custom.border_radius = Some(value),
                }
                custom
            })
    }

    fn apply_layout<'a>(self, container: Container<'a, Message>) -> Container<'a, Message> {
        let container = match self.padding {
            Some(padding) => container.padding(padding),
            None => container,
        };
        match self.width {
            Some(width) => container.width(Length::Fixed(width)),
            None => container,
        }
    }

    fn apply_style(self, mut style: container::Style) -> container::Style {
        if let Some(color) = self.background {
            style.background = Some(Background::Color(color));
        }
        if let Some(color) = self.border_color {
            style.border.color = color;
        }
        if let Some(value) = self.border_radius {
            style.border.radius = value.into();
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Content;

    #[test]
    fn success_style_uses_success_accent() {
        let style = success_style(&Theme::Dark);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
        assert!(style.text_color.is_some());
    }

    #[test]
    fn fresh_toast_is_opaque() {
        assert_eq!(fade_factor(&Toast::init()), opacity::OPAQUE);
    }

    #[test]
    fn fade_factor_decreases_through_the_window() {
        let start = Toast::init().set_display_duration(500);
        let middle = Toast::init().set_display_duration(300);
        let end = Toast::init().set_display_duration(100);

        assert_eq!(fade_factor(&start), 1.0);
        assert!(fade_factor(&middle) < fade_factor(&start));
        assert!(fade_factor(&end) < fade_factor(&middle));
        assert!(fade_factor(&end) > 0.0);
    }

    #[test]
    fn zero_fade_window_is_transparent_once_fading() {
        let toast = Toast::init()
            .set_fade_out_duration(0)
            .set_display_duration(0);
        assert_eq!(fade_factor(&toast), opacity::TRANSPARENT);
    }

    #[test]
    fn fade_scales_every_color() {
        let faded = fade(success_style(&Theme::Light), 0.5);
        let base = success_style(&Theme::Light);

        assert_eq!(faded.border.color.a, base.border.color.a * 0.5);
        assert_eq!(faded.shadow.color.a, base.shadow.color.a * 0.5);
        match (faded.background, base.background) {
            (Some(Background::Color(f)), Some(Background::Color(o))) => {
                assert_eq!(f.a, o.a * 0.5);
            }
            _ => panic!("expected color backgrounds"),
        }
    }

    #[test]
    fn opaque_fade_is_identity() {
        let style = success_style(&Theme::Dark);
        assert_eq!(fade(style, 1.0), style);
    }

    #[test]
    fn later_attributes_override_earlier_ones() {
        let custom = Customization::from_attributes(&[
            Attribute::Padding(4.0),
            Attribute::BorderColor(palette::ERROR_500),
            Attribute::Padding(10.0),
        ]);
        assert_eq!(custom.padding, Some(10.0));
        assert_eq!(custom.border_color, Some(palette::ERROR_500));
        assert_eq!(custom.width, None);
    }

    #[test]
    fn attributes_override_template_style() {
        let custom = Customization::from_attributes(&[
            Attribute::Background(palette::WHITE),
            Attribute::BorderColor(palette::INFO_500),
        ]);
        let style = custom.apply_style(success_style(&Theme::Dark));

        assert_eq!(style.background, Some(Background::Color(palette::WHITE)));
        assert_eq!(style.border.color, palette::INFO_500);
    }

    #[test]
    fn close_glyph_fades_with_the_toast() {
        for status in [button::Status::Active, button::Status::Hovered] {
            let base = button::text(&Theme::Light, status);
            let faded = close_button_style(&Theme::Light, status, 0.4);

            assert_eq!(faded.text_color.a, base.text_color.a * 0.4);
            assert_eq!(faded.background, base.background);
        }
    }

    #[test]
    fn opaque_close_glyph_keeps_theme_color() {
        let base = button::text(&Theme::Dark, button::Status::Active);
        let style = close_button_style(&Theme::Dark, button::Status::Active, opacity::OPAQUE);
        assert_eq!(style.text_color, base.text_color);
    }

    #[test]
    fn fading_failure_toast_renders_translucent_next_to_opaque_success() {
        let toasts = [
            Toast::init().set_title("Saved"),
            Toast::init()
                .set_title("Failed")
                .set_style(Style::Failure)
                .set_content(Content::text("details"))
                .set_display_duration(300),
        ];

        assert_eq!(fade_factor(&toasts[0]), opacity::OPAQUE);
        let failure_alpha = fade_factor(&toasts[1]);
        assert!(failure_alpha < opacity::OPAQUE);
        assert_eq!(failure_alpha, 3.0 / 5.0);

        let faded = fade(container::bordered_box(&Theme::Light), failure_alpha);
        let base = container::bordered_box(&Theme::Light);
        assert_eq!(faded.border.color.a, base.border.color.a * failure_alpha);
    }
}
