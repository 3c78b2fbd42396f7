// SPDX-License-Identifier: MPL-2.0
//! Focal point of the magnified view.
//!
//! The focal point is the `(x%, y%)` position of the image kept under the
//! pointer while zoomed in. It works like a CSS `background-position`
//! expressed in percentages.

use crate::config::{FOCAL_CENTER_PERCENT, FOCAL_MAX_PERCENT, FOCAL_MIN_PERCENT};
use iced::{Point, Size};

/// Pan position in percent, each axis guaranteed to be within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocalPoint {
    x: f32,
    y: f32,
}

impl FocalPoint {
    /// The element centre `(50%, 50%)`.
    pub const CENTER: Self = Self {
        x: FOCAL_CENTER_PERCENT,
        y: FOCAL_CENTER_PERCENT,
    };

    /// Creates a focal point, clamping both axes. Non-finite values map to the centre.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Maps a position relative to the element's top-left corner onto the
    /// element's size.
    ///
    /// Positions outside the element clamp to the nearest edge. A collapsed
    /// axis (zero or negative length) yields the centre on that axis.
    #[must_use]
    pub fn from_position(position: Point, size: Size) -> Self {
        Self::new(
            axis_percent(position.x, size.width),
            axis_percent(position.y, size.height),
        )
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Whether this is the centre position.
    #[must_use]
    pub fn is_centered(self) -> bool {
        self == Self::CENTER
    }

    /// CSS-style representation, e.g. `"25% 75%"`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("{}% {}%", self.x, self.y)
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

fn axis_percent(offset: f32, length: f32) -> f32 {
    if length.is_nan() || length <= 0.0 || length.is_infinite() {
        return FOCAL_CENTER_PERCENT;
    }
    offset / length * 100.0
}

fn clamp_percent(value: f32) -> f32 {
    if !value.is_finite() {
        return FOCAL_CENTER_PERCENT;
    }
    value.clamp(FOCAL_MIN_PERCENT, FOCAL_MAX_PERCENT)
}
