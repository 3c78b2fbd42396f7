// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`image_zoom`] - The zoomable image widget
//! - [`state`] - Zoom mode, focal point and scroll lock
//! - [`widgets`] - Custom Iced widgets (spinner, scroll gate)
//! - [`styles`] - Container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod image_zoom;
pub mod state;
pub mod styles;
pub mod widgets;
