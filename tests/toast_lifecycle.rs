// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks of the toast lifecycle through the public API.

use tempfile::tempdir;
use toast_shell::config::{self, Config, ToastConfig};
use toast_shell::i18n::fluent::I18n;
use toast_shell::ui::notifications::{
    self, Attribute, Content, Manager, Message, Outcome, Style, Toast, ID_PREFIX,
};

fn tick_all(manager: &mut Manager) {
    let snapshot: Vec<Toast> = manager.toasts().to_vec();
    for toast in snapshot {
        manager.route(Message::Tick(toast));
    }
}

#[test]
fn default_toast_lives_for_sixty_ticks() {
    let mut manager = Manager::new();
    manager.show(Toast::init().set_title("Saved"));

    for _ in 0..59 {
        tick_all(&mut manager);
    }
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.toasts()[0].countdown(), 1);

    tick_all(&mut manager);
    assert!(manager.is_empty());
}

#[test]
fn ids_are_unique_and_sequential() {
    let mut manager = Manager::new();
    let ids: Vec<String> = (0..3).map(|_| manager.show(Toast::init())).collect();

    assert_eq!(
        ids,
        vec![
            format!("{ID_PREFIX}0"),
            format!("{ID_PREFIX}1"),
            format!("{ID_PREFIX}2"),
        ]
    );
    assert_eq!(manager.newest().map(Toast::id), Some(ids[2].as_str()));
}

#[test]
fn closing_fades_then_removes() {
    let mut manager = Manager::new();
    manager.show(Toast::init().set_fade_out_duration(300));
    let shown = manager.toasts()[0].clone();

    manager.route(Message::UserClose(shown));
    assert_eq!(manager.toasts()[0].countdown(), 3);
    assert!(manager.toasts()[0].is_fading());

    tick_all(&mut manager);
    tick_all(&mut manager);
    assert_eq!(manager.len(), 1);
    tick_all(&mut manager);
    assert!(manager.is_empty());
}

#[test]
fn stale_ticks_count_down_from_the_live_value() {
    let mut manager = Manager::new();
    manager.show(Toast::init());
    let first_seen = manager.toasts()[0].clone();

    for _ in 0..10 {
        manager.route(Message::Tick(first_seen.clone()));
    }

    assert_eq!(manager.toasts()[0].countdown(), 50);
}

#[test]
fn messages_for_other_toasts_leave_the_rest_untouched() {
    let mut manager = Manager::new();
    manager.show(Toast::init().set_title("older"));
    manager.show(Toast::init().set_title("newer"));
    let older = manager.toasts()[1].clone();

    manager.route(Message::UserClose(older));

    assert_eq!(manager.toasts()[0].countdown(), 60);
    assert!(manager.toasts()[1].is_fading());

    manager.route(Message::Tick(Toast::init().set_id("main-app-toast-99")));
    assert_eq!(manager.len(), 2);
}

#[test]
fn update_is_pure_and_reports_removal() {
    let toast = Toast::init().set_id("t").set_display_duration(100);
    assert_eq!(toast.countdown(), 1);
    assert_eq!(
        notifications::update(Message::Tick(toast.clone())),
        Outcome::Remove
    );
    assert_eq!(toast.countdown(), 1);
}

#[test]
fn toast_builders_keep_configuration() {
    let toast = Toast::init()
        .set_style(Style::Failure)
        .set_title("Failed")
        .set_content(Content::text("details"))
        .set_attributes(vec![Attribute::Width(200.0)]);

    assert_eq!(toast.style(), Style::Failure);
    assert_eq!(toast.title(), "Failed");
    assert!(!toast.content().is_empty());
    assert_eq!(toast.attributes(), &[Attribute::Width(200.0)]);
}

#[test]
fn saved_timing_drives_new_toasts() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut saved = Config::default();
    saved.toasts = ToastConfig {
        display_duration_ms: Some(1_500),
        fade_out_duration_ms: Some(200),
    };
    config::save_with_override(&saved, Some(temp_dir.path().to_path_buf()))
        .expect("failed to save config");

    let (loaded, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
    assert!(warning.is_none());

    let toast = Toast::init()
        .set_display_duration(loaded.toasts.display_duration())
        .set_fade_out_duration(loaded.toasts.fade_out_duration());
    assert_eq!(toast.countdown(), 15);
    assert_eq!(toast.fade_out_ticks(), 2);
}

#[test]
fn configured_language_is_used_for_messages() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(None, &config);

    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert!(!i18n.tr("toast-success-title").starts_with("MISSING"));
}
