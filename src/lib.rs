// SPDX-License-Identifier: MPL-2.0
//! `iced_zoom` is an image widget for the Iced GUI framework that magnifies
//! on click or touch and pans with the pointer.
//!
//! It ships with a small gallery application, demonstrates internationalization
//! with Fluent, and keeps user preferences in a TOML file.

#![doc(html_root_url = "https://docs.rs/iced_zoom/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
