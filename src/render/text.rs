//! Text layout: centered placement and greedy word wrap.
//!
//! Offsets use floor division so layouts are reproducible pixel for pixel.

use crate::types::Colour;

use super::canvas::Canvas;
use super::font::Font;

/// Default gap between wrapped lines, in pixels.
pub const DEFAULT_LINE_SPACING: u32 = 8;

/// A positioned line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// How a text block is placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Centered on the canvas, shifted down by `offset` (negative moves up).
    Centered { offset: i64 },
    /// Wrapped to `max_width`, starting at `position`.
    Wrapped {
        max_width: u32,
        position: (i64, i64),
        line_spacing: u32,
    },
}

/// Text with a font, colour, and placement.
#[derive(Debug, Clone)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub font: Font,
    pub colour: Colour,
    pub placement: Placement,
}

impl<'a> TextBlock<'a> {
    /// A block centered on the canvas.
    pub fn centered(text: &'a str, font: Font, colour: Colour) -> Self {
        Self {
            text,
            font,
            colour,
            placement: Placement::Centered { offset: 0 },
        }
    }

    /// A block wrapped to `max_width` with its first line at `position`.
    pub fn wrapped(text: &'a str, font: Font, colour: Colour, max_width: u32, position: (i64, i64)) -> Self {
        Self {
            text,
            font,
            colour,
            placement: Placement::Wrapped {
                max_width,
                position,
                line_spacing: DEFAULT_LINE_SPACING,
            },
        }
    }

    /// Shift a centered block vertically. No effect on wrapped blocks.
    pub fn offset(mut self, offset: i64) -> Self {
        if let Placement::Centered { .. } = self.placement {
            self.placement = Placement::Centered { offset };
        }
        self
    }

    /// Draw onto `canvas`, returning the lines placed.
    pub fn draw(&self, canvas: &mut Canvas) -> Vec<TextLine> {
        match self.placement {
            Placement::Centered { offset } => {
                vec![draw_text_centered(canvas, self.text, self.colour, &self.font, offset)]
            }
            Placement::Wrapped {
                max_width,
                position,
                line_spacing,
            } => draw_text_wrapped(
                canvas,
                self.text,
                max_width,
                position,
                self.colour,
                &self.font,
                line_spacing,
            ),
        }
    }
}

/// Bounding box `(width, height)` of `text` in `font`.
pub fn measure_text(text: &str, font: &Font) -> (u32, u32) {
    font.measure(text)
}

/// Top-left origin that centers a `text` box in a `canvas` box.
pub fn centered_origin(canvas: (u32, u32), text: (u32, u32), offset: i64) -> (i64, i64) {
    let x = (canvas.0 as i64 - text.0 as i64).div_euclid(2);
    let y = (canvas.1 as i64 - text.1 as i64).div_euclid(2) + offset;
    (x, y)
}

/// Draw `text` centered on the canvas without wrapping.
///
/// Text wider than the canvas overflows both edges.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    text: &str,
    colour: Colour,
    font: &Font,
    offset: i64,
) -> TextLine {
    let (width, height) = font.measure(text);
    let (x, y) = centered_origin(canvas.size(), (width, height), offset);
    font.draw(canvas.image_mut(), text, x, y, colour);

    TextLine {
        text: text.to_string(),
        x,
        y,
        width,
        height,
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Words are whitespace-separated. A word wider than `max_width` gets a line
/// of its own and is never split.
pub fn wrap_lines(text: &str, max_width: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Lay out wrapped lines from `position`, each advancing by its own height
/// plus `line_spacing`.
pub fn layout_wrapped(
    text: &str,
    max_width: u32,
    position: (i64, i64),
    font: &Font,
    line_spacing: u32,
) -> Vec<TextLine> {
    let (x, mut y) = position;

    wrap_lines(text, max_width, |s| font.measure(s).0)
        .into_iter()
        .map(|line| {
            let (width, height) = font.measure(&line);
            let placed = TextLine {
                text: line,
                x,
                y,
                width,
                height,
            };
            y += height as i64 + line_spacing as i64;
            placed
        })
        .collect()
}

/// Draw `text` word-wrapped to `max_width`, top-down from `position`.
///
/// Empty text draws nothing and returns no lines.
pub fn draw_text_wrapped(
    canvas: &mut Canvas,
    text: &str,
    max_width: u32,
    position: (i64, i64),
    colour: Colour,
    font: &Font,
    line_spacing: u32,
) -> Vec<TextLine> {
    let lines = layout_wrapped(text, max_width, position, font, line_spacing);
    for line in &lines {
        font.draw(canvas.image_mut(), &line.text, line.x, line.y, colour);
    }
    lines
}
