// SPDX-License-Identifier: MPL-2.0
//! Image widget that magnifies on click or touch and pans with the pointer.
//!
//! The host owns a [`State`] per image, forwards [`Message`]s to
//! [`State::handle`] and reacts to the returned [`Effect`].

pub mod component;
mod figure;
pub mod subcomponents;

pub use component::{Effect, Message, Options, State};
