// SPDX-License-Identifier: MPL-2.0
//! Toast values and their tick-driven lifecycle.
//!
//! A [`Toast`] is an opaque value: callers configure it through the setter
//! chain, hand it to the [`Manager`](super::Manager), and from then on it only
//! changes through [`update`]. Time is measured in ticks at a fixed rate of
//! [`TICKS_PER_SECOND`]; setters accept milliseconds and convert.

use crate::ui::design_tokens::typography;
use iced::widget::text;
use iced::{time, Color, Element, Subscription};
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::time::Duration;

/// Number of countdown ticks per second.
pub const TICKS_PER_SECOND: u32 = 10;

/// Milliseconds covered by one tick.
pub const MS_PER_TICK: u32 = 1000 / TICKS_PER_SECOND;

/// Interval between two ticks of a live toast.
pub const TICK_PERIOD: Duration = Duration::from_millis(MS_PER_TICK as u64);

/// Countdown of a freshly initialized toast (about six seconds).
pub const DEFAULT_COUNTDOWN: u32 = 60;

/// Fade duration of a freshly initialized toast.
pub const DEFAULT_FADE_OUT_DURATION_MS: u32 = 500;

/// Message type of content fragments. It has no values, so content can
/// never emit a message.
pub type Never = Infallible;

/// Converts a duration in milliseconds to whole ticks, rounding down.
#[must_use]
pub const fn ms_to_ticks(ms: u32) -> u32 {
    ms / MS_PER_TICK
}

/// Number of trailing ticks during which a toast with the given fade
/// duration renders as fading.
#[must_use]
pub const fn fade_out_ticks(fade_out_duration_ms: u32) -> u32 {
    ms_to_ticks(fade_out_duration_ms)
}

/// Visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Success,
    Failure,
}

/// Customization applied to the outer container of a toast.
///
/// Attributes are applied in order, so a later entry of the same kind
/// overrides an earlier one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attribute {
    /// Inner padding in logical pixels.
    Padding(f32),
    /// Fixed width in logical pixels.
    Width(f32),
    /// Background color (before fading).
    Background(Color),
    /// Border color (before fading).
    BorderColor(Color),
    /// Border corner radius.
    BorderRadius(f32),
}

type ContentBuilder = dyn Fn() -> Element<'static, Never> + Send + Sync;

/// Render-only fragment shown below the title.
///
/// The fragment is produced on demand by a shared builder. Two contents are
/// equal when they are both empty or share the same builder.
#[derive(Clone, Default)]
pub struct Content(Option<Arc<ContentBuilder>>);

impl Content {
    /// Content that renders nothing.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// Wraps a builder that produces the fragment each time the toast is drawn.
    pub fn new<F>(build: F) -> Self
    where
        F: Fn() -> Element<'static, Never> + Send + Sync + 'static,
    {
        Self(Some(Arc::new(build)))
    }

    /// A single paragraph of body text.
    pub fn text(body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(move || text(body.clone()).size(typography::BODY).into())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Builds the fragment, or `None` for empty content.
    #[must_use]
    pub fn view(&self) -> Option<Element<'static, Never>> {
        self.0.as_ref().map(|build| build())
    }
}

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Content(none)")
        } else {
            f.write_str("Content(..)")
        }
    }
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: String,
    countdown: u32,
    fade_out_duration_ms: u32,
    title: String,
    content: Content,
    attributes: Vec<Attribute>,
    style: Style,
}

impl Default for Toast {
    fn default() -> Self {
        Self {
            id: String::new(),
            countdown: DEFAULT_COUNTDOWN,
            fade_out_duration_ms: DEFAULT_FADE_OUT_DURATION_MS,
            title: String::new(),
            content: Content::none(),
            attributes: Vec::new(),
            style: Style::default(),
        }
    }
}

// Subscriptions are keyed by toast identity, so only the id is hashed.
// Equal toasts always share an id, which keeps this consistent with `Eq`.
impl Hash for Toast {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Toast {
    /// Creates a toast with the default countdown, fade duration and style,
    /// and an empty id, title and content.
    #[must_use]
    pub fn init() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn set_content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    #[must_use]
    pub fn set_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn set_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets how long the fade transition lasts, in milliseconds.
    #[must_use]
    pub fn set_fade_out_duration(mut self, ms: u32) -> Self {
        self.fade_out_duration_ms = ms;
        self
    }

    /// Sets the total visible lifetime, fade included, in milliseconds.
    #[must_use]
    pub fn set_display_duration(mut self, ms: u32) -> Self {
        self.countdown = ms_to_ticks(ms);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Remaining lifetime in ticks.
    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    #[must_use]
    pub fn fade_out_duration_ms(&self) -> u32 {
        self.fade_out_duration_ms
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    /// Length of the fade window in ticks.
    #[must_use]
    pub fn fade_out_ticks(&self) -> u32 {
        fade_out_ticks(self.fade_out_duration_ms)
    }

    /// Whether the toast is inside its fade window.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.countdown <= self.fade_out_ticks()
    }
}

/// Lifecycle messages. Each carries the toast it applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// One countdown step.
    Tick(Toast),
    /// The user pressed the close button.
    UserClose(Toast),
}

impl Message {
    /// Identifier of the toast this message targets.
    #[must_use]
    pub fn toast_id(&self) -> &str {
        match self {
            Message::Tick(toast) | Message::UserClose(toast) => toast.id(),
        }
    }

    /// The same message, carrying `toast` instead.
    #[must_use]
    pub fn with_toast(&self, toast: Toast) -> Self {
        match self {
            Message::Tick(_) => Message::Tick(toast),
            Message::UserClose(_) => Message::UserClose(toast),
        }
    }
}

/// Identifier of `toast`.
#[must_use]
pub fn get_id(toast: &Toast) -> &str {
    toast.id()
}

/// Identifier of the toast targeted by `message`.
#[must_use]
pub fn get_id_from_toast_message(message: &Message) -> &str {
    message.toast_id()
}

/// Result of applying a [`Message`] to a toast.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The toast lives on with this new state.
    Continue(Toast),
    /// The toast has expired and must be dropped.
    Remove,
}

/// Applies a lifecycle message.
///
/// A tick removes the toast when its countdown would reach zero (or already
/// has), so a toast is never drawn with an exhausted countdown and a fresh
/// toast of `DEFAULT_COUNTDOWN` ticks is removed by exactly its 60th tick.
/// A tick on countdown 1 returns `Remove`, not `Continue` at 0. Closing
/// never removes synchronously: it moves the countdown to the start of the
/// fade window and lets subsequent ticks finish the job.
#[must_use]
pub fn update(message: Message) -> Outcome {
    match message {
        Message::Tick(toast) => {
            if toast.countdown <= 1 {
                Outcome::Remove
            } else {
                Outcome::Continue(Toast {
                    countdown: toast.countdown - 1,
                    ..toast
                })
            }
        }
        Message::UserClose(toast) => {
            let countdown = toast.fade_out_ticks();
            Outcome::Continue(Toast { countdown, ..toast })
        }
    }
}

/// Periodic tick for one live toast.
///
/// The toast embedded in each tick is the one seen when the subscription
/// was first created. Consumers must re-bind it to the current value before
/// calling [`update`]; the manager does this when routing.
pub fn subscription(toast: &Toast) -> Subscription<Message> {
    time::every(TICK_PERIOD)
        .with(toast.clone())
        .map(|(toast, _)| Message::Tick(toast))
}
