// SPDX-License-Identifier: MPL-2.0
//! Zoom widget component orchestrating the loading, interaction and error
//! sub-components.

use super::figure::Figure;
use super::subcomponents::{error_state, interaction, loading};
use crate::config::{ZoomConfig, DEFAULT_FADE_IN_MS, DEFAULT_SETTLE_DELAY_MS, LOADING_MIN_HEIGHT};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{load_image, ImageData, ImageSource};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::state::{FocalPoint, ScrollLock, ZoomMode, ZoomPercent};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{column, container, image, mouse_area, text, Canvas, Stack};
use iced::{mouse, Element, Length, Task};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// i18n key of the default alternative text.
pub const DEFAULT_ALT_KEY: &str = "image-zoom-alt-default";

/// Construction options of a zoom widget.
#[derive(Debug, Clone)]
pub struct Options {
    src: String,
    zoom: ZoomPercent,
    alt: Option<String>,
    width: Length,
    height: Length,
    id: Option<String>,
    class_name: Option<String>,
    error_content: Option<String>,
    settle_delay: Duration,
    fade_in: Duration,
    scroll_lock: Option<Arc<dyn ScrollLock>>,
}

impl Options {
    /// Options for the image at `src` (file path or `http(s)` URL).
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            zoom: ZoomPercent::default(),
            alt: None,
            width: Length::Fill,
            height: Length::Shrink,
            id: None,
            class_name: None,
            error_content: None,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            fade_in: Duration::from_millis(DEFAULT_FADE_IN_MS),
            scroll_lock: None,
        }
    }

    /// Applies the zoom percentage and timings from the user configuration.
    #[must_use]
    pub fn with_config(self, config: &ZoomConfig) -> Self {
        let zoom = config
            .percent
            .map_or_else(ZoomPercent::default, ZoomPercent::new);
        self.zoom(zoom)
            .settle_delay(config.settle_delay())
            .fade_in(config.fade_in())
    }

    #[must_use]
    pub fn zoom(mut self, zoom: ZoomPercent) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    /// Identifier attached to log records of this widget.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Caller class appended to [`State::classes`].
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Text rendered in place of the image when loading fails.
    #[must_use]
    pub fn error_content(mut self, content: impl Into<String>) -> Self {
        self.error_content = Some(content.into());
        self
    }

    #[must_use]
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    #[must_use]
    pub fn fade_in(mut self, duration: Duration) -> Self {
        self.fade_in = duration;
        self
    }

    /// Capability used to suspend page scrolling while a finger drags.
    #[must_use]
    pub fn scroll_lock(mut self, lock: Arc<dyn ScrollLock>) -> Self {
        self.scroll_lock = Some(lock);
        self
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn zoom_percent(&self) -> ZoomPercent {
        self.zoom
    }
}

/// What the widget currently displays.
#[derive(Debug, Clone)]
enum Phase {
    Loading,
    Ready(ImageData),
    Failed(error_state::State),
}

/// Complete zoom widget state.
#[derive(Debug)]
pub struct State {
    options: Options,
    source: ImageSource,
    phase: Phase,
    /// Identifies the current load; results carrying another value are stale.
    generation: u64,
    loading: loading::State,
    interaction: interaction::State,
}

/// Messages for the zoom widget.
#[derive(Debug, Clone)]
pub enum Message {
    /// A load finished.
    Loaded {
        generation: u64,
        result: std::result::Result<ImageData, Error>,
    },
    Interaction(interaction::Message),
    Error(error_state::Message),
    /// Animation frame for the spinner and the fade-in.
    Tick(Instant),
}

/// Effects reported to the host application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The image finished loading.
    Loaded { width: u32, height: u32 },
    /// The image could not be loaded. Reported once per load.
    LoadFailed(Error),
    /// The display mode changed.
    ZoomChanged(ZoomMode),
    /// Loading is taking longer than expected.
    LoadingSlow,
}

impl State {
    /// Creates the widget and the task loading its image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] when the source is empty, before any
    /// load is attempted.
    pub fn new(options: Options) -> Result<(Self, Task<Message>)> {
        let source = ImageSource::parse(&options.src)?;
        let mut state = Self {
            loading: loading::State::new(options.fade_in),
            interaction: interaction::State::new(options.scroll_lock.clone()),
            options,
            source,
            phase: Phase::Loading,
            generation: 0,
        };
        let task = state.begin_load(Instant::now());
        Ok((state, task))
    }

    /// Switches to another image, discarding the current one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] when `src` is empty; the widget is
    /// left untouched in that case.
    pub fn set_source(&mut self, src: impl Into<String>) -> Result<Task<Message>> {
        let src = src.into();
        let source = ImageSource::parse(&src)?;
        self.options.src = src;
        self.source = source;
        Ok(self.begin_load(Instant::now()))
    }

    pub fn set_zoom(&mut self, zoom: ZoomPercent) {
        self.options.zoom = zoom;
    }

    fn begin_load(&mut self, now: Instant) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Loading;
        self.interaction.reset();
        self.loading.handle(loading::Message::StartLoading(now));

        tracing::debug!(
            id = self.log_id(),
            source = %self.source,
            generation = self.generation,
            "loading image"
        );

        let generation = self.generation;
        let source = self.source.clone();
        let settle_delay = self.options.settle_delay;
        Task::perform(load_settled(source, settle_delay), move |result| {
            Message::Loaded { generation, result }
        })
    }

    /// Handle a widget message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Loaded { generation, result } => self.finish_load(generation, result),
            Message::Interaction(msg) => {
                if !self.is_loaded() {
                    return Effect::None;
                }
                match self.interaction.handle(msg) {
                    interaction::Effect::ModeChanged(mode) => {
                        tracing::trace!(
                            id = self.log_id(),
                            mode = mode.class_name(),
                            focal = %self.focal().to_css(),
                            "zoom changed"
                        );
                        Effect::ZoomChanged(mode)
                    }
                    interaction::Effect::None => Effect::None,
                }
            }
            Message::Error(msg) => {
                if let Phase::Failed(error) = &mut self.phase {
                    error.handle(msg);
                }
                Effect::None
            }
            Message::Tick(now) => match self.loading.handle(loading::Message::Tick(now)) {
                loading::Effect::LoadingTimedOut => {
                    tracing::warn!(id = self.log_id(), source = %self.source, "image is slow to load");
                    Effect::LoadingSlow
                }
                loading::Effect::None => Effect::None,
            },
        }
    }

    fn finish_load(
        &mut self,
        generation: u64,
        result: std::result::Result<ImageData, Error>,
    ) -> Effect {
        if generation != self.generation || !matches!(self.phase, Phase::Loading) {
            tracing::debug!(id = self.log_id(), generation, "discarding stale load result");
            return Effect::None;
        }

        match result {
            Ok(image) => {
                tracing::info!(
                    id = self.log_id(),
                    source = %self.source,
                    width = image.width,
                    height = image.height,
                    "image loaded"
                );
                let effect = Effect::Loaded {
                    width: image.width,
                    height: image.height,
                };
                self.interaction.reset();
                self.loading
                    .handle(loading::Message::Loaded(Instant::now()));
                self.phase = Phase::Ready(image);
                effect
            }
            Err(error) => {
                tracing::warn!(
                    id = self.log_id(),
                    source = %self.source,
                    %error,
                    "image failed to load"
                );
                self.loading.handle(loading::Message::Failed);
                self.phase = Phase::Failed(error_state::State::new(
                    error.clone(),
                    self.options.error_content.clone(),
                ));
                Effect::LoadFailed(error)
            }
        }
    }

    fn log_id(&self) -> &str {
        self.options.id.as_deref().unwrap_or("-")
    }

    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn focal(&self) -> FocalPoint {
        self.interaction.focal()
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomPercent {
        self.options.zoom
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, Phase::Ready(_))
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        matches!(self.phase, Phase::Failed(_))
    }

    #[must_use]
    pub fn error(&self) -> Option<&Error> {
        match &self.phase {
            Phase::Failed(error) => Some(error.error()),
            _ => None,
        }
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.phase {
            Phase::Ready(image) => Some(image),
            _ => None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.options.id.as_deref()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.interaction.is_scroll_locked()
    }

    /// Whether the host should keep sending [`Message::Tick`].
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.loading.needs_tick()
    }

    /// Presentation classes: load state, display mode, then the caller class.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        let load = if self.is_loaded() { "loaded" } else { "loading" };
        let mut classes = vec![load.to_string(), self.mode().class_name().to_string()];
        if let Some(class_name) = &self.options.class_name {
            classes.push(class_name.clone());
        }
        classes
    }

    /// Alternative text, or the localized default.
    #[must_use]
    pub fn alt_text(&self, i18n: &I18n) -> String {
        self.options
            .alt
            .clone()
            .unwrap_or_else(|| i18n.tr(DEFAULT_ALT_KEY))
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        match &self.phase {
            Phase::Loading => self.view_loading(i18n),
            Phase::Ready(image) => self.view_image(image),
            Phase::Failed(error) => self.view_error(error, i18n),
        }
    }

    fn view_loading(&self, i18n: &I18n) -> Element<'_, Message> {
        let height = match self.options.height {
            Length::Shrink => Length::Fixed(LOADING_MIN_HEIGHT),
            other => other,
        };
        let spinner =
            AnimatedSpinner::new(palette::GRAY_600, self.loading.spinner_rotation()).into_element();

        let content = column![
            spinner,
            text(i18n.tr("image-zoom-loading"))
                .size(typography::CAPTION)
                .color(palette::GRAY_600),
        ]
        .spacing(spacing::XS)
        .align_x(iced::Alignment::Center);

        container(content)
            .center_x(self.options.width)
            .center_y(height)
            .style(styles::container::loading_placeholder)
            .into()
    }

    fn view_image<'a>(&'a self, data: &'a ImageData) -> Element<'a, Message> {
        let mode = self.mode();
        let picture_opacity = if mode.is_zoomed_in() {
            opacity::TRANSPARENT
        } else {
            self.loading.image_opacity()
        };

        let picture = image(data.handle.clone())
            .width(self.options.width)
            .height(self.options.height)
            .opacity(picture_opacity);

        let figure = Canvas::new(Figure {
            handle: data.handle.clone(),
            image_aspect: data.aspect_ratio(),
            zoom: self.options.zoom,
            mode,
            focal: self.focal(),
        })
        .width(Length::Fill)
        .height(Length::Fill);

        container(Stack::new().push(picture).push(figure))
            .clip(true)
            .into()
    }

    fn view_error<'a>(&'a self, error: &error_state::State, i18n: &I18n) -> Element<'a, Message> {
        let toggle_key = if error.show_details() {
            "image-zoom-error-hide-details"
        } else {
            "image-zoom-error-show-details"
        };

        let mut content = column![
            text(error.friendly_text(i18n)).size(typography::BODY),
            text(i18n.tr(toggle_key))
                .size(typography::CAPTION)
                .color(palette::GRAY_600),
        ]
        .spacing(spacing::XS);

        if error.show_details() {
            content = content
                .push(text(self.alt_text(i18n)).size(typography::CAPTION))
                .push(text(error.details(i18n)).size(typography::CAPTION));
        }

        mouse_area(
            container(content)
                .padding(spacing::MD)
                .width(self.options.width)
                .style(styles::container::error_panel),
        )
        .on_press(Message::Error(error_state::Message::ToggleDetails))
        .interaction(mouse::Interaction::Pointer)
        .into()
    }
}

/// Loads `source`, then holds a successful result back for `delay`.
/// Failures are returned as soon as they happen.
async fn load_settled(source: ImageSource, delay: Duration) -> Result<ImageData> {
    let result = load_image(&source).await;
    if result.is_ok() && !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::state::ScrollFlag;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    const SETTLE: Duration = Duration::from_millis(800);

    fn write_png(dir: &std::path::Path) -> ImageSource {
        let path = dir.join("settled.png");
        let mut bytes = Cursor::new(Vec::new());
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]))
            .write_to(&mut bytes, ImageFormat::Png)
            .expect("encode png");
        std::fs::write(&path, bytes.into_inner()).expect("write png");
        ImageSource::Path(path)
    }

    fn sample() -> ImageData {
        ImageData::from_rgba(2, 1, vec![255; 8])
    }

    fn new_state(options: Options) -> State {
        let (state, _task) = State::new(options).expect("valid source");
        state
    }

    fn loaded(options: Options) -> State {
        let mut state = new_state(options);
        let generation = state.generation();
        state.handle(Message::Loaded {
            generation,
            result: Ok(sample()),
        });
        state
    }

    fn press(at: FocalPoint) -> Message {
        Message::Interaction(interaction::Message::Pressed(at))
    }

    #[test]
    fn empty_source_fails_before_loading() {
        assert!(matches!(
            State::new(Options::new("")),
            Err(Error::MissingSource)
        ));
        assert!(matches!(
            State::new(Options::new("   ")),
            Err(Error::MissingSource)
        ));
    }

    #[test]
    fn starts_loading_zoomed_out() {
        let state = new_state(Options::new("photo.png"));
        assert!(!state.is_loaded());
        assert!(state.needs_tick());
        assert_eq!(state.mode(), ZoomMode::ZoomedOut);
        assert_eq!(state.classes(), vec!["loading", "fullView"]);
    }

    #[test]
    fn successful_load_is_zoomed_out_and_centered() {
        let mut state = new_state(Options::new("photo.png"));
        let generation = state.generation();
        let effect = state.handle(Message::Loaded {
            generation,
            result: Ok(sample()),
        });

        assert_eq!(effect, Effect::Loaded { width: 2, height: 1 });
        assert!(state.is_loaded());
        assert_eq!(state.mode(), ZoomMode::ZoomedOut);
        assert!(state.focal().is_centered());
        assert!(state.image().is_some());
    }

    #[test]
    fn failed_load_reports_once_and_shows_fallback() {
        let mut state = new_state(Options::new("missing.png"));
        let generation = state.generation();
        let failure = Error::Io("not found".into());

        let first = state.handle(Message::Loaded {
            generation,
            result: Err(failure.clone()),
        });
        assert_eq!(first, Effect::LoadFailed(failure.clone()));
        assert!(state.has_error());
        assert_eq!(state.error(), Some(&failure));

        let second = state.handle(Message::Loaded {
            generation,
            result: Err(failure),
        });
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn stale_results_are_ignored() {
        let mut state = new_state(Options::new("first.png"));
        let stale = state.generation();
        let _task = state.set_source("second.png").expect("valid source");

        let effect = state.handle(Message::Loaded {
            generation: stale,
            result: Ok(sample()),
        });
        assert_eq!(effect, Effect::None);
        assert!(!state.is_loaded());
        assert_eq!(state.source(), &ImageSource::Path("second.png".into()));
    }

    #[test]
    fn interaction_is_ignored_until_loaded() {
        let mut state = new_state(Options::new("photo.png"));
        let effect = state.handle(press(FocalPoint::new(10.0, 10.0)));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.mode(), ZoomMode::ZoomedOut);
    }

    #[test]
    fn click_zooms_and_updates_classes() {
        let mut state = loaded(Options::new("photo.png").class_name("hero"));
        let effect = state.handle(press(FocalPoint::new(30.0, 70.0)));

        assert_eq!(effect, Effect::ZoomChanged(ZoomMode::ZoomedIn));
        assert_eq!(state.focal(), FocalPoint::new(30.0, 70.0));
        assert_eq!(state.classes(), vec!["loaded", "zoomed", "hero"]);
    }

    #[test]
    fn toggling_twice_restores_centered_view() {
        let mut state = loaded(Options::new("photo.png"));
        state.handle(press(FocalPoint::new(5.0, 95.0)));
        state.handle(press(FocalPoint::new(5.0, 95.0)));
        assert_eq!(state.mode(), ZoomMode::ZoomedOut);
        assert!(state.focal().is_centered());
    }

    #[test]
    fn set_source_resets_view_and_releases_lock() {
        let flag = ScrollFlag::new();
        let mut state = loaded(Options::new("photo.png").scroll_lock(flag.as_lock()));
        state.handle(Message::Interaction(interaction::Message::TouchStarted(
            FocalPoint::new(20.0, 20.0),
        )));
        assert!(flag.is_locked());

        let _task = state.set_source("other.png").expect("valid source");
        assert!(!flag.is_locked());
        assert!(!state.is_loaded());
        assert_eq!(state.mode(), ZoomMode::ZoomedOut);
        assert!(state.focal().is_centered());
    }

    #[test]
    fn invalid_new_source_keeps_current_image() {
        let mut state = loaded(Options::new("photo.png"));
        let generation = state.generation();
        assert_eq!(state.set_source(" ").err(), Some(Error::MissingSource));
        assert!(state.is_loaded());
        assert_eq!(state.generation(), generation);
    }

    #[test]
    fn dropping_mid_drag_releases_lock() {
        let flag = ScrollFlag::new();
        let mut state = loaded(Options::new("photo.png").scroll_lock(flag.as_lock()));
        state.handle(Message::Interaction(interaction::Message::TouchStarted(
            FocalPoint::CENTER,
        )));
        assert!(state.is_scroll_locked());
        drop(state);
        assert!(!flag.is_locked());
    }

    #[test]
    fn error_details_toggle() {
        let mut state = new_state(Options::new("broken.png").error_content("No image"));
        let generation = state.generation();
        state.handle(Message::Loaded {
            generation,
            result: Err(Error::Decode("truncated".into())),
        });
        state.handle(Message::Error(error_state::Message::ToggleDetails));

        match &state.phase {
            Phase::Failed(error) => assert!(error.show_details()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn slow_load_is_reported() {
        let mut state = new_state(Options::new("photo.png"));
        let late = Instant::now() + crate::config::LOADING_TIMEOUT + Duration::from_secs(1);
        assert_eq!(state.handle(Message::Tick(late)), Effect::LoadingSlow);
    }

    #[test]
    fn set_zoom_keeps_current_view() {
        let mut state = loaded(Options::new("photo.png"));
        state.handle(press(FocalPoint::new(40.0, 60.0)));
        state.set_zoom(ZoomPercent::new(5000.0));

        assert_eq!(state.zoom().value(), crate::config::MAX_ZOOM_PERCENT);
        assert_eq!(state.mode(), ZoomMode::ZoomedIn);
        assert_eq!(state.focal(), FocalPoint::new(40.0, 60.0));
    }

    #[test]
    fn options_follow_config() {
        let config = ZoomConfig {
            percent: Some(350.0),
            settle_delay_ms: Some(0),
            fade_in_ms: Some(50),
        };
        let options = Options::new("photo.png").with_config(&config);
        assert_eq!(options.zoom_percent(), ZoomPercent::new(350.0));
        assert_eq!(options.settle_delay, Duration::ZERO);
        assert_eq!(options.fade_in, Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn successful_load_waits_for_settle_delay() {
        let dir = tempdir().expect("temp dir");
        let source = write_png(dir.path());

        let started = tokio::time::Instant::now();
        let image = load_settled(source, SETTLE).await.expect("png loads");

        assert_eq!((image.width, image.height), (3, 2));
        assert!(started.elapsed() >= SETTLE);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_load_skips_settle_delay() {
        let dir = tempdir().expect("temp dir");
        let source = ImageSource::Path(dir.path().join("missing.png"));

        let started = tokio::time::Instant::now();
        let result = load_settled(source, SETTLE).await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(started.elapsed() < SETTLE);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_settle_delay_does_not_sleep() {
        let dir = tempdir().expect("temp dir");
        let source = write_png(dir.path());

        let started = tokio::time::Instant::now();
        let result = load_settled(source, Duration::ZERO).await;

        assert!(result.is_ok());
        assert!(started.elapsed() < SETTLE);
    }

    #[test]
    fn alt_text_defaults_to_localized_label() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let state = new_state(Options::new("photo.png"));
        assert_eq!(state.alt_text(&i18n), "This is an imageZoom image");

        let state = new_state(Options::new("photo.png").alt("A cat"));
        assert_eq!(state.alt_text(&i18n), "A cat");
    }
}
