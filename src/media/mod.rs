// SPDX-License-Identifier: MPL-2.0
//! Image sources and loading for the zoom widget.

pub mod image;

pub use image::{decode_raster, decode_svg, load_image, ImageData, ImageSource};
