// SPDX-License-Identifier: MPL-2.0
//! Centralised styles for the zoom widget and the demo gallery.

pub mod container;
