// SPDX-License-Identifier: MPL-2.0
//! Pointer and touch interaction sub-component.
//!
//! Drives the [`ZoomMode`] transition table and owns the scroll lock held
//! during a touch drag.

use crate::ui::state::{FocalPoint, Input, ScrollLock, ScrollLockGuard, ZoomMode};
use std::sync::Arc;

/// Interaction sub-component state.
#[derive(Debug, Default)]
pub struct State {
    mode: ZoomMode,
    focal: FocalPoint,
    /// Capability used to suspend page scrolling during touch drags.
    scroll_lock: Option<Arc<dyn ScrollLock>>,
    /// Present while a touch drag holds the scroll lock.
    guard: Option<ScrollLockGuard>,
}

/// Messages for the interaction sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Primary button pressed at the given point.
    Pressed(FocalPoint),
    /// Cursor moved over the element.
    Moved(FocalPoint),
    /// Cursor left the element.
    Left,
    /// Finger touched the element.
    TouchStarted(FocalPoint),
    /// Tracked finger moved.
    TouchMoved(FocalPoint),
    /// Tracked finger lifted or lost.
    TouchEnded,
}

/// Effects produced by interaction changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The display mode changed.
    ModeChanged(ZoomMode),
}

impl State {
    #[must_use]
    pub fn new(scroll_lock: Option<Arc<dyn ScrollLock>>) -> Self {
        Self {
            scroll_lock,
            ..Self::default()
        }
    }

    /// Handle an interaction message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed(at) => {
                let effect = self.apply(Input::Press(at));
                if !self.mode.is_zoomed_in() {
                    self.release_scroll();
                }
                effect
            }
            Message::Moved(at) | Message::TouchMoved(at) => self.apply(Input::Move(at)),
            Message::Left => {
                self.release_scroll();
                self.apply(Input::Leave)
            }
            Message::TouchStarted(at) => {
                self.acquire_scroll();
                self.apply(Input::Press(at))
            }
            Message::TouchEnded => {
                self.release_scroll();
                self.apply(Input::Leave)
            }
        }
    }

    /// Returns to the zoomed-out, centred state and releases the scroll lock.
    pub fn reset(&mut self) {
        self.mode = ZoomMode::ZoomedOut;
        self.focal = FocalPoint::CENTER;
        self.release_scroll();
    }

    fn apply(&mut self, input: Input) -> Effect {
        let previous = self.mode;
        let transition = self.mode.next(self.focal, input);
        self.mode = transition.mode;
        self.focal = transition.focal;

        if previous == self.mode {
            Effect::None
        } else {
            Effect::ModeChanged(self.mode)
        }
    }

    fn acquire_scroll(&mut self) {
        if self.guard.is_some() {
            return;
        }
        if let Some(lock) = &self.scroll_lock {
            self.guard = Some(ScrollLockGuard::acquire(Arc::clone(lock)));
        }
    }

    fn release_scroll(&mut self) {
        self.guard = None;
    }

    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    #[must_use]
    pub fn focal(&self) -> FocalPoint {
        self.focal
    }

    /// Whether this widget currently holds the scroll lock.
    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.guard.is_some()
    }
}
