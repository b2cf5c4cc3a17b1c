// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Rendering of classified entropy tokens as SVG cell grids.
//!
//! Each byte of a token's normalized core becomes one 2:1 [`layout::Cell`]:
//! the nucleus color encodes the high nibble and the six edge rects encode
//! the low six bits. [`render::render`] assembles the grid and a caption
//! into a standalone SVG document.

#![deny(missing_docs)]

pub mod colors;
pub mod layout;
pub mod logging;
pub mod render;
pub mod shapes;
