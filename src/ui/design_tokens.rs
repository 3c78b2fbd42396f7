// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the zoom widget and its demo.
//!
//! - **Palette**: Base colors (placeholder, spinner, fallback text)
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border** / **Radius**: Fallback box outline

use iced::Color;

pub mod palette {
    use super::Color;

    /// Loading placeholder background (`#eee`).
    pub const GRAY_50: Color = Color::from_rgb(0.933, 0.933, 0.933);
    /// Fallback box outline (`#f8f8f8`).
    pub const GRAY_25: Color = Color::from_rgb(0.973, 0.973, 0.973);
    /// Fallback message text (`#555`).
    pub const GRAY_600: Color = Color::from_rgb(0.333, 0.333, 0.333);
    /// Spinner stroke (`#333`).
    pub const GRAY_800: Color = Color::from_rgb(0.2, 0.2, 0.2);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Track behind the spinner arc.
    pub const SPINNER_TRACK: f32 = 0.25;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Loading spinner diameter.
    pub const SPINNER: f32 = 50.0;
    /// Spinner stroke width.
    pub const SPINNER_STROKE: f32 = 5.0;
}

pub mod typography {
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

const _: () = {
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);
    assert!(opacity::SPINNER_TRACK > opacity::TRANSPARENT);
    assert!(opacity::SPINNER_TRACK < opacity::OPAQUE);
    assert!(sizing::SPINNER > sizing::SPINNER_STROKE * 2.0);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
