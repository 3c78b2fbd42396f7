// SPDX-License-Identifier: MPL-2.0
//! Canvas layer of the zoom widget.
//!
//! Translates pointer and touch events into interaction messages and draws
//! the magnified image while zoomed in.

use super::subcomponents::interaction;
use super::Message;
use crate::ui::state::{magnified_bounds, FocalPoint, ZoomMode, ZoomPercent};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::{image, Action};
use iced::{mouse, touch, Point, Rectangle, Renderer, Theme};

/// Snapshot of the widget needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Figure {
    pub handle: image::Handle,
    pub image_aspect: f32,
    pub zoom: ZoomPercent,
    pub mode: ZoomMode,
    pub focal: FocalPoint,
}

/// Pointer tracking kept by the canvas between events.
#[derive(Debug, Default)]
pub struct Pointer {
    hovered: bool,
    finger: Option<touch::Finger>,
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl Figure {
    fn focal_at(position: Point, bounds: Rectangle) -> FocalPoint {
        FocalPoint::from_position(position, bounds.size())
    }

    fn on_mouse(
        &self,
        pointer: &mut Pointer,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<interaction::Message> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position_in(bounds)?;
                pointer.hovered = true;
                Some(interaction::Message::Pressed(Self::focal_at(
                    position, bounds,
                )))
            }
            mouse::Event::CursorMoved { .. } => match cursor.position_in(bounds) {
                Some(position) => {
                    pointer.hovered = true;
                    if self.mode.is_zoomed_in() {
                        Some(interaction::Message::Moved(Self::focal_at(
                            position, bounds,
                        )))
                    } else {
                        None
                    }
                }
                None if pointer.hovered => {
                    pointer.hovered = false;
                    Some(interaction::Message::Left)
                }
                None => None,
            },
            mouse::Event::CursorLeft if pointer.hovered => {
                pointer.hovered = false;
                Some(interaction::Message::Left)
            }
            _ => None,
        }
    }

    fn on_touch(
        pointer: &mut Pointer,
        event: &touch::Event,
        bounds: Rectangle,
    ) -> Option<interaction::Message> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                if pointer.finger.is_some() || !bounds.contains(position) {
                    return None;
                }
                pointer.finger = Some(id);
                Some(interaction::Message::TouchStarted(Self::focal_at(
                    relative(position, bounds),
                    bounds,
                )))
            }
            touch::Event::FingerMoved { id, position } if pointer.finger == Some(id) => {
                Some(interaction::Message::TouchMoved(Self::focal_at(
                    relative(position, bounds),
                    bounds,
                )))
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }
                if pointer.finger == Some(id) =>
            {
                pointer.finger = None;
                Some(interaction::Message::TouchEnded)
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for Figure {
    type State = Pointer;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let msg = match event {
            iced::Event::Mouse(mouse_event) => self.on_mouse(state, mouse_event, bounds, cursor),
            iced::Event::Touch(touch_event) => Self::on_touch(state, touch_event, bounds),
            _ => None,
        }?;
        Some(Action::publish(Message::Interaction(msg)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        if !self.mode.is_zoomed_in() {
            return Vec::new();
        }

        let mut frame = Frame::new(renderer, bounds.size());
        let target = magnified_bounds(
            Rectangle::with_size(bounds.size()),
            self.image_aspect,
            self.zoom,
            self.focal,
        );
        frame.draw_image(target, canvas::Image::new(self.handle.clone()));

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !cursor.is_over(bounds) {
            return mouse::Interaction::default();
        }
        match self.mode {
            ZoomMode::ZoomedOut => mouse::Interaction::ZoomIn,
            ZoomMode::ZoomedIn => mouse::Interaction::ZoomOut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::canvas::Program;
    use iced::Size;

    fn figure(mode: ZoomMode) -> Figure {
        Figure {
            handle: image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]),
            image_aspect: 1.0,
            zoom: ZoomPercent::default(),
            mode,
            focal: FocalPoint::CENTER,
        }
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(100.0, 50.0), Size::new(200.0, 100.0))
    }

    #[test]
    fn press_inside_reports_focal_point() {
        let mut pointer = Pointer::default();
        let cursor = mouse::Cursor::Available(Point::new(150.0, 75.0));
        let action = figure(ZoomMode::ZoomedOut).on_mouse(
            &mut pointer,
            &mouse::Event::ButtonPressed(mouse::Button::Left),
            bounds(),
            cursor,
        );
        assert_eq!(
            action,
            Some(interaction::Message::Pressed(FocalPoint::new(25.0, 25.0)))
        );
    }

    #[test]
    fn press_outside_is_ignored() {
        let mut pointer = Pointer::default();
        let cursor = mouse::Cursor::Available(Point::new(10.0, 10.0));
        let action = figure(ZoomMode::ZoomedOut).on_mouse(
            &mut pointer,
            &mouse::Event::ButtonPressed(mouse::Button::Left),
            bounds(),
            cursor,
        );
        assert!(action.is_none());
    }

    #[test]
    fn moving_out_after_hover_reports_leave() {
        let mut pointer = Pointer::default();
        let fig = figure(ZoomMode::ZoomedIn);
        let moved = mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        };

        let inside = mouse::Cursor::Available(Point::new(200.0, 100.0));
        let action = fig.on_mouse(&mut pointer, &moved, bounds(), inside);
        assert_eq!(
            action,
            Some(interaction::Message::Moved(FocalPoint::CENTER))
        );

        let outside = mouse::Cursor::Available(Point::new(0.0, 0.0));
        let action = fig.on_mouse(&mut pointer, &moved, bounds(), outside);
        assert_eq!(action, Some(interaction::Message::Left));

        let action = fig.on_mouse(&mut pointer, &moved, bounds(), outside);
        assert!(action.is_none());
    }

    #[test]
    fn leaving_after_a_still_click_reports_leave() {
        let mut pointer = Pointer::default();
        let fig = figure(ZoomMode::ZoomedOut);
        let inside = mouse::Cursor::Available(Point::new(150.0, 75.0));

        let pressed = fig.on_mouse(
            &mut pointer,
            &mouse::Event::ButtonPressed(mouse::Button::Left),
            bounds(),
            inside,
        );
        assert!(pressed.is_some());
        assert!(pointer.hovered);

        let left = fig.on_mouse(
            &mut pointer,
            &mouse::Event::CursorLeft,
            bounds(),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(left, Some(interaction::Message::Left));
    }

    #[test]
    fn moves_are_not_published_while_zoomed_out() {
        let mut pointer = Pointer::default();
        let cursor = mouse::Cursor::Available(Point::new(150.0, 75.0));
        let action = figure(ZoomMode::ZoomedOut).on_mouse(
            &mut pointer,
            &mouse::Event::CursorMoved {
                position: Point::ORIGIN,
            },
            bounds(),
            cursor,
        );
        assert!(action.is_none());
        assert!(pointer.hovered);
    }

    #[test]
    fn touch_tracks_a_single_finger() {
        let mut pointer = Pointer::default();
        let first = touch::Finger(1);
        let second = touch::Finger(2);

        let start = Figure::on_touch(
            &mut pointer,
            &touch::Event::FingerPressed {
                id: first,
                position: Point::new(250.0, 100.0),
            },
            bounds(),
        );
        assert_eq!(
            start,
            Some(interaction::Message::TouchStarted(FocalPoint::new(
                75.0, 50.0
            )))
        );

        let other = Figure::on_touch(
            &mut pointer,
            &touch::Event::FingerMoved {
                id: second,
                position: Point::new(120.0, 60.0),
            },
            bounds(),
        );
        assert!(other.is_none());

        let dragged_out = Figure::on_touch(
            &mut pointer,
            &touch::Event::FingerMoved {
                id: first,
                position: Point::new(0.0, 0.0),
            },
            bounds(),
        );
        assert_eq!(
            dragged_out,
            Some(interaction::Message::TouchMoved(FocalPoint::new(0.0, 0.0)))
        );

        let end = Figure::on_touch(
            &mut pointer,
            &touch::Event::FingerLifted {
                id: first,
                position: Point::new(0.0, 0.0),
            },
            bounds(),
        );
        assert_eq!(end, Some(interaction::Message::TouchEnded));
        assert!(pointer.finger.is_none());
    }

    #[test]
    fn cursor_matches_mode() {
        let inside = mouse::Cursor::Available(Point::new(150.0, 75.0));
        let state = Pointer::default();
        assert_eq!(
            figure(ZoomMode::ZoomedOut).mouse_interaction(&state, bounds(), inside),
            mouse::Interaction::ZoomIn
        );
        assert_eq!(
            figure(ZoomMode::ZoomedIn).mouse_interaction(&state, bounds(), inside),
            mouse::Interaction::ZoomOut
        );
        assert_eq!(
            figure(ZoomMode::ZoomedIn).mouse_interaction(
                &state,
                bounds(),
                mouse::Cursor::Unavailable
            ),
            mouse::Interaction::default()
        );
    }
}
