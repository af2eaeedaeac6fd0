// SPDX-License-Identifier: MPL-2.0
//! Collection of live toasts.
//!
//! The `Manager` is the only owner of the collection. It mints identifiers,
//! routes lifecycle messages to the matching toast, drops toasts whose
//! lifecycle ends, and batches the per-toast tick subscriptions.

use super::toast::{self, Message, Outcome, Toast};
use super::view;
use iced::{Element, Subscription};

/// Prefix of identifiers minted by [`Manager::show`].
pub const ID_PREFIX: &str = "main-app-toast-";

/// Ordered collection of live toasts, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manager {
    toasts: Vec<Toast>,
    /// Next identifier suffix.
    counter: u64,
}

impl Manager {
    /// Creates an empty manager whose first toast will be `main-app-toast-0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager that continues numbering from `counter`.
    #[must_use]
    pub fn with_counter(counter: u64) -> Self {
        Self {
            toasts: Vec::new(),
            counter,
        }
    }

    /// Displays a configured toast.
    ///
    /// Any id already set on `toast` is replaced by a freshly minted one,
    /// which is returned.
    pub fn show(&mut self, toast: Toast) -> String {
        let id = format!("{ID_PREFIX}{}", self.counter);
        self.counter += 1;

        log::debug!("showing toast {id} ({:?}, {} ticks)", toast.style(), toast.countdown());
        self.toasts.insert(0, toast.set_id(id.clone()));
        id
    }

    /// Applies a lifecycle message to the toast it targets.
    ///
    /// The message is re-bound to the toast's current state first, so a tick
    /// carrying an outdated copy still counts down from the live value.
    /// Messages for unknown ids are ignored.
    pub fn route(&mut self, message: Message) {
        let target = toast::get_id_from_toast_message(&message).to_owned();
        let mut matched = false;

        self.toasts = std::mem::take(&mut self.toasts)
            .into_iter()
            .filter_map(|current| {
                if current.id() != target {
                    return Some(current);
                }
                matched = true;
                match toast::update(message.with_toast(current)) {
                    Outcome::Continue(updated) => Some(updated),
                    Outcome::Remove => {
                        log::debug!("removing toast {target}");
                        None
                    }
                }
            })
            .collect();

        if !matched {
            log::trace!("ignoring message for unknown toast {target:?}");
        }
    }

    /// One tick subscription per live toast, batched.
    ///
    /// Must be recomputed from the current collection after every update;
    /// removed toasts then drop out and their timers stop.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            return Subscription::none();
        }
        Subscription::batch(self.toasts.iter().map(toast::subscription))
    }

    /// Renders the toast list.
    pub fn view(&self) -> Element<'_, Message> {
        view::view_list(&self.toasts)
    }

    /// Live toasts in display order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Newest live toast, if any.
    #[must_use]
    pub fn newest(&self) -> Option<&Toast> {
        self.toasts.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Suffix the next identifier will use.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Style;

    fn ids(manager: &Manager) -> Vec<&str> {
        manager.toasts().iter().map(Toast::id).collect()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.counter(), 0);
        assert!(manager.newest().is_none());
    }

    #[test]
    fn show_mints_sequential_ids_newest_first() {
        let mut manager = Manager::new();
        let first = manager.show(Toast::init().set_title("first"));
        let second = manager.show(Toast::init().set_title("second"));

        assert_eq!(first, "main-app-toast-0");
        assert_eq!(second, "main-app-toast-1");
        assert_eq!(ids(&manager), vec!["main-app-toast-1", "main-app-toast-0"]);
        assert_eq!(manager.counter(), 2);
        assert_eq!(manager.newest().map(Toast::title), Some("second"));
    }

    #[test]
    fn show_overwrites_existing_id() {
        let mut manager = Manager::with_counter(7);
        manager.show(Toast::init().set_id("caller-chosen"));
        assert_eq!(ids(&manager), vec!["main-app-toast-7"]);
    }

    #[test]
    fn route_to_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        manager.show(Toast::init());
        manager.show(Toast::init().set_style(Style::Failure));
        let before = manager.clone();

        manager.route(Message::Tick(Toast::init().set_id("missing")));
        manager.route(Message::UserClose(Toast::init().set_id("missing")));

        assert_eq!(manager, before);
    }

    #[test]
    fn tick_decrements_only_the_target() {
        let mut manager = Manager::new();
        manager.show(Toast::init());
        manager.show(Toast::init());
        let target = manager.toasts()[1].clone();

        manager.route(Message::Tick(target));

        assert_eq!(manager.toasts()[0].countdown(), 60);
        assert_eq!(manager.toasts()[1].countdown(), 59);
    }

    #[test]
    fn tick_on_exhausted_toast_removes_only_that_entry() {
        let mut manager = Manager::new();
        manager.show(Toast::init().set_title("a"));
        manager.show(Toast::init().set_title("b").set_display_duration(0));
        manager.show(Toast::init().set_title("c"));
        let doomed = manager.toasts()[1].clone();
        assert_eq!(doomed.countdown(), 0);

        manager.route(Message::Tick(doomed));

        assert_eq!(ids(&manager), vec!["main-app-toast-2", "main-app-toast-0"]);
        assert_eq!(manager.toasts()[0].countdown(), 60);
        assert_eq!(manager.toasts()[1].countdown(), 60);
    }

    #[test]
    fn stale_ticks_count_down_from_the_live_value() {
        let mut manager = Manager::new();
        manager.show(Toast::init());
        let stale = manager.toasts()[0].clone();

        for _ in 0..10 {
            manager.route(Message::Tick(stale.clone()));
        }

        assert_eq!(manager.toasts()[0].countdown(), 50);
    }

    #[test]
    fn close_fades_then_ticks_remove() {
        let mut manager = Manager::new();
        manager.show(Toast::init());
        let shown = manager.toasts()[0].clone();

        manager.route(Message::UserClose(shown.clone()));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.toasts()[0].countdown(), 5);
        assert!(manager.toasts()[0].is_fading());

        for _ in 0..4 {
            manager.route(Message::Tick(shown.clone()));
            assert_eq!(manager.len(), 1);
        }
        manager.route(Message::Tick(shown));
        assert!(manager.is_empty());
    }

    #[test]
    fn full_lifetime_takes_sixty_ticks() {
        let mut manager = Manager::new();
        manager.show(Toast::init());
        let shown = manager.toasts()[0].clone();

        for _ in 0..59 {
            manager.route(Message::Tick(shown.clone()));
        }
        assert_eq!(manager.len(), 1);

        manager.route(Message::Tick(shown));
        assert!(manager.is_empty());
    }
}
