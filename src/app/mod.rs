// SPDX-License-Identifier: MPL-2.0
//! Demo application: a scrollable gallery of zoomable images.
//!
//! The `App` struct owns one zoom widget per command-line source, shares a
//! single scroll flag between them and the surrounding scrollable, and
//! reports widget effects through `tracing`.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::image_zoom::{self, Effect, Options};
use crate::ui::state::ScrollFlag;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// One gallery position.
#[derive(Debug)]
pub enum Entry {
    Widget(image_zoom::State),
    /// A source rejected before loading.
    Invalid { src: String, error: Error },
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    entries: Vec<Entry>,
    scroll_flag: ScrollFlag,
    /// i18n key of a config loading problem, shown above the gallery.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("entries", &self.entries.len())
            .field("scroll_locked", &self.scroll_flag.is_locked())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 300;
pub const MIN_WINDOW_WIDTH: u32 = 300;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the gallery and starts loading every image.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut zoom_config = config.zoom.clone();
        if let Some(percent) = flags.zoom {
            zoom_config.percent = Some(percent);
        }

        let scroll_flag = ScrollFlag::new();
        let mut entries = Vec::with_capacity(flags.sources.len());
        let mut tasks = Vec::with_capacity(flags.sources.len());

        for (index, src) in flags.sources.into_iter().enumerate() {
            let options = Options::new(src.clone())
                .with_config(&zoom_config)
                .id(format!("image-{index}"))
                .scroll_lock(scroll_flag.as_lock());

            match image_zoom::State::new(options) {
                Ok((widget, task)) => {
                    tasks.push(task.map(move |msg| Message::Zoom(index, msg)));
                    entries.push(Entry::Widget(widget));
                }
                Err(error) => {
                    tracing::error!(index, %error, "rejected image source");
                    entries.push(Entry::Invalid { src, error });
                }
            }
        }

        tracing::info!(
            images = entries.len(),
            locale = %i18n.current_locale(),
            "gallery started"
        );

        let app = Self {
            i18n,
            config,
            entries,
            scroll_flag,
            config_warning,
        };
        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.is_animating())
    }

    fn is_animating(&self) -> bool {
        self.widgets().any(image_zoom::State::needs_tick)
    }

    fn widgets(&self) -> impl Iterator<Item = &image_zoom::State> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Widget(widget) => Some(widget),
            Entry::Invalid { .. } => None,
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Zoom(index, msg) => {
                if let Some(Entry::Widget(widget)) = self.entries.get_mut(index) {
                    let effect = widget.handle(msg);
                    report_effect(index, effect);
                }
            }
            Message::Tick(now) => {
                for (index, entry) in self.entries.iter_mut().enumerate() {
                    if let Entry::Widget(widget) = entry {
                        if widget.needs_tick() {
                            let effect = widget.handle(image_zoom::Message::Tick(now));
                            report_effect(index, effect);
                        }
                    }
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            entries: &self.entries,
            config_warning: self.config_warning.as_deref(),
            scroll_flag: &self.scroll_flag,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

fn report_effect(index: usize, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Loaded { width, height } => {
            tracing::info!(index, width, height, "image ready");
        }
        Effect::LoadFailed(error) => {
            tracing::error!(index, %error, "image unavailable");
        }
        Effect::ZoomChanged(mode) => {
            tracing::debug!(index, mode = mode.class_name(), "zoom toggled");
        }
        Effect::LoadingSlow => {
            tracing::info!(index, "image still loading");
        }
    }
}
