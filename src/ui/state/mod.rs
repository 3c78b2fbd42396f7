// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state shared by the zoom widget: magnification and display mode,
//! focal point, and the scroll lock capability. Nothing here depends on
//! a running iced application, which keeps it easy to test.

pub mod focal;
pub mod scroll_lock;
pub mod zoom;

// Re-export commonly used types for convenience
pub use focal::FocalPoint;
pub use scroll_lock::{ScrollFlag, ScrollLock, ScrollLockGuard};
pub use zoom::{magnified_bounds, Input, Transition, ZoomMode, ZoomPercent};
