// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo gallery.

use crate::ui::image_zoom;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the zoom widget at the given gallery position.
    Zoom(usize, image_zoom::Message),
    /// Animation frame shared by every widget that is loading or fading in.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Magnification percentage overriding the configured one.
    pub zoom: Option<f32>,
    /// Directory holding `settings.toml`, instead of the platform default.
    pub config_dir: Option<PathBuf>,
    /// Image paths or URLs, displayed in order.
    pub sources: Vec<String>,
}
