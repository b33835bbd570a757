//! A canvas that records what would have been drawn, in device space.
//!
//! Keeps the dial geometry checkable without a display: every operation is
//! mapped through an explicit [`TransformStack`] and stored as a [`DrawOp`].

use super::canvas::{Canvas, Paint, TextMetrics};
use super::geometry::{DialGeometry, Point};
use super::transform::TransformStack;
use palette::Srgba;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("restore without a matching save")]
    UnbalancedRestore,
}

/// Text metrics where every character advances `font_size * ratio`.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    pub ratio: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { ratio: 0.6 }
    }
}

impl TextMetrics for FixedAdvance {
    fn text_width(&self, text: &str, paint: &Paint) -> f64 {
        text.chars().count() as f64 * paint.font_size * self.ratio
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        center: Point,
        radius: f64,
        color: Srgba<f64>,
    },
    Line {
        from: Point,
        to: Point,
        color: Srgba<f64>,
    },
    Text {
        text: String,
        origin: Point,
        /// Clockwise rotation of the baseline, degrees in `[0, 360)`.
        rotation: f64,
        color: Srgba<f64>,
    },
}

impl DrawOp {
    /// Same kind, same content, positions within `tolerance` pixels and
    /// rotations within `tolerance` degrees.
    pub fn approx_eq(&self, other: &DrawOp, tolerance: f64) -> bool {
        match (self, other) {
            (
                Self::Circle {
                    center,
                    radius,
                    color,
                },
                Self::Circle {
                    center: c2,
                    radius: r2,
                    color: col2,
                },
            ) => {
                center.distance(*c2) <= tolerance
                    && (radius - r2).abs() <= tolerance
                    && color == col2
            }
            (
                Self::Line { from, to, color },
                Self::Line {
                    from: f2,
                    to: t2,
                    color: col2,
                },
            ) => {
                from.distance(*f2) <= tolerance
                    && to.distance(*t2) <= tolerance
                    && color == col2
            }
            (
                Self::Text {
                    text,
                    origin,
                    rotation,
                    color,
                },
                Self::Text {
                    text: t2,
                    origin: o2,
                    rotation: r2,
                    color: col2,
                },
            ) => {
                text == t2
                    && origin.distance(*o2) <= tolerance
                    && DialGeometry::angle_difference(*rotation, *r2) <= tolerance
                    && color == col2
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    stack: TransformStack,
    metrics: FixedAdvance,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(metrics: FixedAdvance) -> Self {
        Self {
            stack: TransformStack::new(),
            metrics,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Saves still outstanding.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl TextMetrics for RecordingCanvas {
    fn text_width(&self, text: &str, paint: &Paint) -> f64 {
        self.metrics.text_width(text, paint)
    }
}

impl Canvas for RecordingCanvas {
    type Error = SceneError;

    fn save(&mut self) -> Result<(), SceneError> {
        self.stack.push();
        Ok(())
    }

    fn restore(&mut self) -> Result<(), SceneError> {
        self.stack.pop().map(|_| ()).ok_or(SceneError::UnbalancedRestore)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.stack.translate(dx, dy);
    }

    fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.stack.rotate_about(degrees, pivot);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint) -> Result<(), SceneError> {
        let ctm = self.stack.current();
        self.ops.push(DrawOp::Circle {
            center: ctm.apply(center),
            radius: radius * ctm.scale(),
            color: paint.color,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), SceneError> {
        self.ops.push(DrawOp::Line {
            from: self.stack.map(from),
            to: self.stack.map(to),
            color: paint.color,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> Result<(), SceneError> {
        let ctm = self.stack.current();
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin: ctm.apply(origin),
            rotation: ctm.rotation_degrees(),
            color: paint.color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::PaintStyle;

    fn paint() -> Paint {
        Paint::new(Srgba::new(1.0, 1.0, 1.0, 1.0), PaintStyle::Stroke)
    }

    #[test]
    fn test_restore_without_save_fails() {
        let mut canvas = RecordingCanvas::default();
        assert_eq!(canvas.restore(), Err(SceneError::UnbalancedRestore));
    }

    #[test]
    fn test_ops_are_recorded_in_device_space() {
        let mut canvas = RecordingCanvas::default();
        canvas.save().unwrap();
        canvas.translate(10.0, 20.0);
        canvas.draw_line(Point::new(0.0, 0.0), Point::new(5.0, 0.0), &paint()).unwrap();
        canvas.restore().unwrap();
        canvas.draw_text("x", Point::new(1.0, 1.0), &paint()).unwrap();

        assert_eq!(canvas.depth(), 0);
        assert_eq!(
            canvas.ops()[0],
            DrawOp::Line {
                from: Point::new(10.0, 20.0),
                to: Point::new(15.0, 20.0),
                color: paint().color,
            }
        );
        assert!(matches!(
            &canvas.ops()[1],
            DrawOp::Text {
                origin, rotation, ..
            } if *origin == Point::new(1.0, 1.0) && *rotation == 0.0
        ));
    }

    #[test]
    fn test_fixed_advance_width() {
        let metrics = FixedAdvance { ratio: 0.5 };
        assert_eq!(metrics.text_width("abcd", &paint().with_font_size(10.0)), 20.0);
    }
}
