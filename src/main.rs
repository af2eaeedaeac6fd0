// SPDX-License-Identifier: MPL-2.0
use toast_shell::app::{self, Flags, Screen};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let screen = args
        .opt_value_from_fn("--screen", str::parse::<Screen>)
        .unwrap_or_else(|err| {
            log::warn!("ignoring --screen: {err}");
            None
        });

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unknown arguments: {rest:?}");
    }

    app::run(Flags {
        lang,
        config_dir,
        screen,
    })
}
