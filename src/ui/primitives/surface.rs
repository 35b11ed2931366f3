//! Drawing surface abstraction
//!
//! Primitives render through [`Surface`] so the layout logic stays
//! independent of the canvas backend.

use iced::widget::canvas::{Frame, LineCap, Path, Stroke};
use iced::{Color, Point};

/// Something that can draw rounded-cap line segments
pub trait Surface {
    /// Draw a segment from `from` to `to` with semicircular end-caps
    ///
    /// A zero-length segment is a dot of diameter `thickness`.
    fn draw_rounded_line(&mut self, from: Point, to: Point, thickness: f32, color: Color);
}

impl Surface for Frame {
    fn draw_rounded_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        if thickness <= 0.0 {
            return;
        }

        if from == to {
            // Stroking a zero-length path is backend dependent, fill instead
            self.fill(&Path::circle(from, thickness / 2.0), color);
        } else {
            self.stroke(
                &Path::line(from, to),
                Stroke::default()
                    .with_width(thickness)
                    .with_color(color)
                    .with_line_cap(LineCap::Round),
            );
        }
    }
}

/// A draw call captured by [`RecordingSurface`]
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub from: Point,
    pub to: Point,
    pub thickness: f32,
    pub color: Color,
}

/// Surface that records draw calls instead of rasterizing
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn draw_rounded_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.calls.push(DrawCall {
            from,
            to,
            thickness,
            color,
        });
    }
}
