// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Neutral surface shown while the image is loading.
pub fn loading_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_50)),
        ..Default::default()
    }
}

/// Fallback panel shown when the image cannot be loaded.
pub fn error_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_25)),
        text_color: Some(palette::GRAY_800),
        border: Border {
            color: palette::GRAY_50,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Frame around each gallery entry in the demo application.
pub fn gallery_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_uses_neutral_gray() {
        let style = loading_placeholder(&Theme::Light);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_50)));
    }

    #[test]
    fn error_panel_has_rounded_border() {
        let style = error_panel(&Theme::Dark);
        assert_eq!(style.border.width, border::WIDTH_SM);
        assert_eq!(style.text_color, Some(palette::GRAY_800));
    }
}
