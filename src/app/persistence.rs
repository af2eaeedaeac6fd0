// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! User choices made in the UI are applied to the live state and then
//! written back to `settings.toml`.

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// Returns `Ok(false)` without touching the file when the locale is already
/// active or has no bundle.
pub fn apply_language_change(
    i18n: &mut I18n,
    config: &mut Config,
    config_dir: Option<&Path>,
    locale: LanguageIdentifier,
) -> Result<bool> {
    if i18n.current_locale() == &locale {
        return Ok(false);
    }

    i18n.set_locale(locale.clone());
    if i18n.current_locale() != &locale {
        log::debug!("no bundle for locale {locale}");
        return Ok(false);
    }

    config.general.language = Some(locale.to_string());
    config::save_with_override(config, config_dir.map(Path::to_path_buf))?;
    Ok(true)
}
