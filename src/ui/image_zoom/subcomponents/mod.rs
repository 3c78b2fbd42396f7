// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the zoom widget.
//!
//! Each sub-component has its own State, Message, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── loading      - Spinner, slow-load detection, fade-in
//!     ├── interaction  - Zoom mode, focal point, scroll lock
//!     └── error_state  - Fallback content and details toggle
//! ```

pub mod error_state;
pub mod interaction;
pub mod loading;
