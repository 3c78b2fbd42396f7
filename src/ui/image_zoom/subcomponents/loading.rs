// SPDX-License-Identifier: MPL-2.0
//! Loading state sub-component with animated spinner and image fade-in.

use crate::config::{DEFAULT_FADE_IN_MS, LOADING_TIMEOUT};
use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per second (one turn every two seconds).
const SPINNER_SPEED: f32 = std::f32::consts::PI;

/// Loading state for the zoom widget.
#[derive(Debug, Clone)]
pub struct State {
    /// Whether the image is currently being loaded.
    is_loading: bool,
    /// When loading started (for timeout detection).
    started_at: Option<Instant>,
    /// Last animation tick, used to advance the spinner.
    last_tick: Option<Instant>,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    /// Whether the slow-load effect was already reported for this load.
    timed_out: bool,
    /// When the fade-in started, while it is running.
    fade_started_at: Option<Instant>,
    /// Duration of the fade-in.
    fade_in: Duration,
    /// Current image opacity (0.0 to 1.0).
    opacity: f32,
}

/// Messages for the loading state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new load started.
    StartLoading(Instant),
    /// The image is available; begin the fade-in.
    Loaded(Instant),
    /// The load failed; stop the spinner without fading.
    Failed,
    /// Animate the spinner and the fade-in.
    Tick(Instant),
}

/// Effects produced by the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Loading has taken longer than expected. Reported once per load.
    LoadingTimedOut,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_FADE_IN_MS))
    }
}

impl State {
    #[must_use]
    pub fn new(fade_in: Duration) -> Self {
        Self {
            is_loading: false,
            started_at: None,
            last_tick: None,
            spinner_rotation: 0.0,
            timed_out: false,
            fade_started_at: None,
            fade_in,
            opacity: 0.0,
        }
    }

    /// Handle a loading state message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::StartLoading(now) => {
                self.is_loading = true;
                self.started_at = Some(now);
                self.last_tick = Some(now);
                self.spinner_rotation = 0.0;
                self.timed_out = false;
                self.fade_started_at = None;
                self.opacity = 0.0;
                Effect::None
            }
            Message::Loaded(now) => {
                self.stop();
                if self.fade_in.is_zero() {
                    self.opacity = 1.0;
                } else {
                    self.fade_started_at = Some(now);
                    self.opacity = 0.0;
                }
                Effect::None
            }
            Message::Failed => {
                self.stop();
                self.opacity = 0.0;
                Effect::None
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    fn stop(&mut self) {
        self.is_loading = false;
        self.started_at = None;
        self.last_tick = None;
        self.spinner_rotation = 0.0;
    }

    fn tick(&mut self, now: Instant) -> Effect {
        if let Some(fade_started) = self.fade_started_at {
            let elapsed = now.duration_since(fade_started);
            self.opacity = (elapsed.as_secs_f32() / self.fade_in.as_secs_f32()).min(1.0);
            if self.opacity >= 1.0 {
                self.fade_started_at = None;
            }
        }

        if !self.is_loading {
            return Effect::None;
        }

        if let Some(last) = self.last_tick {
            let delta = now.duration_since(last).as_secs_f32();
            self.spinner_rotation =
                (self.spinner_rotation + SPINNER_SPEED * delta) % std::f32::consts::TAU;
        }
        self.last_tick = Some(now);

        if let Some(started) = self.started_at {
            if !self.timed_out && now.duration_since(started) > LOADING_TIMEOUT {
                self.timed_out = true;
                return Effect::LoadingTimedOut;
            }
        }
        Effect::None
    }

    /// Get the current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Check if currently loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the fade-in is still running.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.fade_started_at.is_some()
    }

    /// Opacity of the loaded image.
    #[must_use]
    pub fn image_opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether the host should keep sending animation ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.is_loading || self.is_fading()
    }

    /// Get when loading started (if currently loading).
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }
}
