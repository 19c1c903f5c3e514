//! Rendering module for sigma.
//!
//! Canvases, font handling, text layout, and image compositing.

mod bitmap;
mod canvas;
mod compose;
mod font;
mod text;

pub use canvas::Canvas;
pub use compose::{load_image, overlay_image, resize_image, Fit};
pub use font::{Face, Font, FontBook, DEFAULT_FONT_SIZE, SMALL_FONT_SIZE};
pub use text::{
    centered_origin, draw_text_centered, draw_text_wrapped, layout_wrapped, measure_text,
    wrap_lines, Placement, TextBlock, TextLine, DEFAULT_LINE_SPACING,
};
