// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that suspends scrolling of its content while a
//! [`ScrollFlag`] is held, typically by a zoom widget during a touch drag.
//!
//! Wheel events are swallowed while locked; every other event passes
//! through so the widgets inside keep receiving pointer and touch input.

use crate::ui::state::ScrollFlag;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size};

/// A widget that wraps scrollable content and blocks wheel scrolling while locked.
pub struct ScrollGate<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    flag: ScrollFlag,
}

impl<'a, Message, Theme, Renderer> ScrollGate<'a, Message, Theme, Renderer> {
    /// Creates a new `ScrollGate` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, flag: ScrollFlag) -> Self {
        Self {
            content: content.into(),
            flag,
        }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScrollGate<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if should_block(event, &self.flag) {
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }
}

impl<'a, Message, Theme, Renderer> From<ScrollGate<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(gate: ScrollGate<'a, Message, Theme, Renderer>) -> Self {
        Self::new(gate)
    }
}

/// Helper function to create a scroll gate around scrollable content.
pub fn scroll_gate<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    flag: ScrollFlag,
) -> ScrollGate<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    ScrollGate::new(content, flag)
}

fn should_block(event: &Event, flag: &ScrollFlag) -> bool {
    flag.is_locked() && matches!(event, Event::Mouse(mouse::Event::WheelScrolled { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ScrollLock;

    fn wheel() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    #[test]
    fn wheel_passes_while_unlocked() {
        let flag = ScrollFlag::new();
        assert!(!should_block(&wheel(), &flag));
    }

    #[test]
    fn wheel_is_blocked_while_locked() {
        let flag = ScrollFlag::new();
        flag.acquire();
        assert!(should_block(&wheel(), &flag));
        flag.release();
        assert!(!should_block(&wheel(), &flag));
    }

    #[test]
    fn other_events_always_pass() {
        let flag = ScrollFlag::new();
        flag.acquire();
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(!should_block(&press, &flag));
        let resize = Event::Window(iced::window::Event::Resized(Size::new(100.0, 50.0)));
        assert!(!should_block(&resize, &flag));
    }
}
