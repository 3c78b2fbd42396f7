// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod scroll_gate;

pub use animated_spinner::AnimatedSpinner;
pub use scroll_gate::{scroll_gate, ScrollGate};
