//! Derived bar geometry
//!
//! Everything here is recomputed from the surface size on each render and
//! never cached across resizes.

use iced::{Point, Size};

/// A rounded-cap line segment
///
/// `from == to` describes a dot of diameter `thickness`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    pub from: Point,
    pub to: Point,
    pub thickness: f32,
}

/// How the filled part of the bar is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillShape {
    /// Nothing visible (zero progress or degenerate surface)
    Empty,
    /// Full-thickness segment starting at the left cap
    Bar(Capsule),
    /// Low-progress dot whose diameter grows with the value
    Dot(Capsule),
}

impl FillShape {
    pub fn capsule(&self) -> Option<Capsule> {
        match self {
            FillShape::Empty => None,
            FillShape::Bar(capsule) | FillShape::Dot(capsule) => Some(*capsule),
        }
    }
}

/// Geometry for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub radius: f32,
    pub center_y: f32,
    pub track: Option<Capsule>,
    pub fill: FillShape,
}

impl BarGeometry {
    /// Lay out the track and fill for `progress` (0-100) on a surface of `size`
    pub fn compute(size: Size, progress: f32, compensate_low_progress: bool) -> Self {
        let width = sanitize(size.width);
        let height = sanitize(size.height);
        let radius = width.min(height) / 2.0;
        let center_y = height / 2.0;

        if radius <= 0.0 {
            return Self {
                radius: 0.0,
                center_y,
                track: None,
                fill: FillShape::Empty,
            };
        }

        let fraction = progress.clamp(0.0, 100.0) / 100.0;
        let track = Capsule {
            from: Point::new(radius, center_y),
            to: Point::new(width - radius, center_y),
            thickness: 2.0 * radius,
        };

        let fill = if compensate_low_progress {
            compensated_fill(width, radius, center_y, fraction)
        } else {
            let end_x = radius + (width - 2.0 * radius) * fraction;
            if fraction > 0.0 {
                FillShape::Bar(Capsule {
                    from: Point::new(radius, center_y),
                    to: Point::new(end_x, center_y),
                    thickness: 2.0 * radius,
                })
            } else {
                FillShape::Empty
            }
        };

        Self {
            radius,
            center_y,
            track: Some(track),
            fill,
        }
    }
}

/// Fill with low-progress compensation
///
/// Uses `width - radius` as the x-scale. At or below one radius the fill is a
/// dot centered on the end point with diameter `2 * end_x`.
fn compensated_fill(width: f32, radius: f32, center_y: f32, fraction: f32) -> FillShape {
    let compensation_region = radius;
    let end_x = (width - radius) * fraction;

    if end_x > compensation_region {
        FillShape::Bar(Capsule {
            from: Point::new(radius, center_y),
            to: Point::new(end_x, center_y),
            thickness: 2.0 * radius,
        })
    } else if end_x > 0.0 {
        let center = Point::new(end_x, center_y);
        FillShape::Dot(Capsule {
            from: center,
            to: center,
            thickness: 2.0 * end_x,
        })
    } else {
        FillShape::Empty
    }
}

fn sanitize(extent: f32) -> f32 {
    if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}
