// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the zoom interaction model:
//! - Magnification percentage applied while zoomed in
//! - The two display modes and their transition table
//! - Geometry of the magnified view

pub use crate::config::{DEFAULT_ZOOM_PERCENT, MAX_ZOOM_PERCENT, MIN_ZOOM_PERCENT};

use super::focal::FocalPoint;
use iced::{Rectangle, Size};

/// Magnification percentage, guaranteed to be within valid range (100%–1000%).
///
/// The magnified image is `percent` of the element width, like a CSS
/// `background-size` expressed in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPercent(f32);

impl ZoomPercent {
    /// Creates a new zoom percentage, clamping the value to the valid range.
    /// Non-finite values fall back to the default.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if !percent.is_finite() {
            return Self::default();
        }
        Self(percent.clamp(MIN_ZOOM_PERCENT, MAX_ZOOM_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the zoom as a multiplier (e.g., 200% → 2.0).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 / 100.0
    }
}

impl Default for ZoomPercent {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_PERCENT)
    }
}

/// The two display states of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Normal view, the whole image is visible.
    #[default]
    ZoomedOut,
    /// Magnified view tracking the pointer.
    ZoomedIn,
}

/// Pointer input relevant to the zoom state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Primary click or touch start at the given focal point.
    Press(FocalPoint),
    /// Pointer or finger moved to the given focal point.
    Move(FocalPoint),
    /// Pointer left the element, or the touch ended.
    Leave,
}

/// Outcome of feeding an [`Input`] to a [`ZoomMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub mode: ZoomMode,
    pub focal: FocalPoint,
}

impl ZoomMode {
    /// Transition table of the zoom interaction.
    ///
    /// | From      | Input    | To        | Focal     |
    /// |-----------|----------|-----------|-----------|
    /// | ZoomedOut | Press(p) | ZoomedIn  | p         |
    /// | ZoomedIn  | Press(_) | ZoomedOut | centre    |
    /// | ZoomedIn  | Move(p)  | ZoomedIn  | p         |
    /// | ZoomedOut | Move(_)  | ZoomedOut | unchanged |
    /// | any       | Leave    | ZoomedOut | centre    |
    #[must_use]
    pub fn next(self, focal: FocalPoint, input: Input) -> Transition {
        let (mode, focal) = match (self, input) {
            (ZoomMode::ZoomedOut, Input::Press(at)) => (ZoomMode::ZoomedIn, at),
            (ZoomMode::ZoomedIn, Input::Press(_)) | (_, Input::Leave) => {
                (ZoomMode::ZoomedOut, FocalPoint::CENTER)
            }
            (ZoomMode::ZoomedIn, Input::Move(at)) => (ZoomMode::ZoomedIn, at),
            (ZoomMode::ZoomedOut, Input::Move(_)) => (ZoomMode::ZoomedOut, focal),
        };
        Transition { mode, focal }
    }

    #[must_use]
    pub fn is_zoomed_in(self) -> bool {
        self == ZoomMode::ZoomedIn
    }

    /// Presentation class reflecting the mode.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            ZoomMode::ZoomedOut => "fullView",
            ZoomMode::ZoomedIn => "zoomed",
        }
    }
}

/// Computes where the magnified image is drawn inside `bounds`.
///
/// The image is scaled to `zoom` percent of the element width, keeping its
/// aspect ratio (`image_aspect` = height / width), then offset so that the
/// focal point of the image lines up with the same point of the element:
/// `offset = (element - magnified) * focal / 100`.
#[must_use]
pub fn magnified_bounds(
    bounds: Rectangle,
    image_aspect: f32,
    zoom: ZoomPercent,
    focal: FocalPoint,
) -> Rectangle {
    let width = bounds.width * zoom.as_factor();
    let aspect = if image_aspect.is_finite() && image_aspect > 0.0 {
        image_aspect
    } else {
        1.0
    };
    let size = Size::new(width, width * aspect);

    let x = bounds.x + (bounds.width - size.width) * focal.x() / 100.0;
    let y = bounds.y + (bounds.height - size.height) * focal.y() / 100.0;

    Rectangle::new(iced::Point::new(x, y), size)
}
