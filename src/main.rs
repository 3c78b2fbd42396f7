// SPDX-License-Identifier: MPL-2.0
use iced_zoom::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --lang");
        None
    });
    let zoom: Option<f32> = args.opt_value_from_str("--zoom").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring --zoom");
        None
    });
    let config_dir: Option<PathBuf> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring --config-dir");
            None
        });

    let sources = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok())
        .collect();

    app::run(Flags {
        lang,
        zoom,
        config_dir,
        sources,
    })
}
