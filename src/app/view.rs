// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo gallery.

use super::{Entry, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::state::ScrollFlag;
use crate::ui::styles;
use crate::ui::widgets::scroll_gate;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Length};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub entries: &'a [Entry],
    pub config_warning: Option<&'a str>,
    pub scroll_flag: &'a ScrollFlag,
}

/// Renders every gallery entry in a scrollable column.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill);

    if let Some(key) = ctx.config_warning {
        column = column.push(
            text(ctx.i18n.tr(key))
                .size(typography::CAPTION)
                .color(palette::GRAY_600),
        );
    }

    if ctx.entries.is_empty() {
        column = column.push(text(ctx.i18n.tr("demo-empty")).size(typography::TITLE_SM));
    } else {
        column = column.push(text(ctx.i18n.tr("demo-hint")).size(typography::BODY));
    }

    for (index, entry) in ctx.entries.iter().enumerate() {
        column = column.push(view_entry(index, entry, ctx.i18n));
    }

    scroll_gate(
        scrollable(column).width(Length::Fill).height(Length::Fill),
        ctx.scroll_flag.clone(),
    )
    .into()
}

fn view_entry<'a>(index: usize, entry: &'a Entry, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match entry {
        Entry::Widget(widget) => widget
            .view(i18n)
            .map(move |msg| Message::Zoom(index, msg)),
        Entry::Invalid { src, error } => {
            text(format!("{src}: {}", i18n.tr(error.i18n_key())))
                .size(typography::BODY)
                .into()
        }
    };

    container(content)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::gallery_card)
        .into()
}
