use super::geometry::Point;
use cairo::{Context, Format, ImageSurface};
use palette::Srgba;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
    FillAndStroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Srgba<f64>,
    pub style: PaintStyle,
    pub stroke_width: f64,
    pub font_size: f64,
}

impl Paint {
    pub fn new(color: Srgba<f64>, style: PaintStyle) -> Self {
        Self {
            color,
            style,
            stroke_width: 1.0,
            font_size: 12.0,
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}

pub trait TextMetrics {
    /// Horizontal advance of `text` drawn with `paint`.
    fn text_width(&self, text: &str, paint: &Paint) -> f64;
}

/// Drawing surface with a save/restore transform stack.
///
/// Coordinates passed to the draw calls are in the current user space;
/// `translate` and `rotate_about` compose onto the current transform.
pub trait Canvas: TextMetrics {
    type Error;

    fn save(&mut self) -> Result<(), Self::Error>;
    fn restore(&mut self) -> Result<(), Self::Error>;
    fn translate(&mut self, dx: f64, dy: f64);
    fn rotate_about(&mut self, degrees: f64, pivot: Point);

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint)
    -> Result<(), Self::Error>;
    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), Self::Error>;
    /// `origin` is the left end of the baseline.
    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> Result<(), Self::Error>;
}

pub struct CairoCanvas {
    cr: Context,
}

impl CairoCanvas {
    pub fn new(cr: &Context) -> Self {
        Self { cr: cr.clone() }
    }

    /// A 1x1 surface, enough to measure text before any real surface exists.
    pub fn offscreen() -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)?;
        Ok(Self {
            cr: Context::new(&surface)?,
        })
    }

    fn set_source(&self, paint: &Paint) {
        let (r, g, b, a) = paint.color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    fn select_font(&self, paint: &Paint) {
        self.cr
            .select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.cr.set_font_size(paint.font_size);
    }
}

impl TextMetrics for CairoCanvas {
    fn text_width(&self, text: &str, paint: &Paint) -> f64 {
        self.select_font(paint);
        match self.cr.text_extents(text) {
            Ok(ext) => ext.x_advance(),
            Err(e) => {
                log::warn!("Failed to measure {:?}: {}", text, e);
                0.0
            }
        }
    }
}

impl Canvas for CairoCanvas {
    type Error = cairo::Error;

    fn save(&mut self) -> Result<(), cairo::Error> {
        self.cr.save()
    }

    fn restore(&mut self) -> Result<(), cairo::Error> {
        self.cr.restore()
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cr.translate(dx, dy);
    }

    fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.cr.translate(pivot.x, pivot.y);
        self.cr.rotate(degrees.to_radians());
        self.cr.translate(-pivot.x, -pivot.y);
    }

    fn fill_circle(
        &mut self,
        center: Point,
        radius: f64,
        paint: &Paint,
    ) -> Result<(), cairo::Error> {
        self.set_source(paint);
        self.cr.new_path();
        self.cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        match paint.style {
            PaintStyle::Fill => self.cr.fill(),
            PaintStyle::Stroke => {
                self.cr.set_line_width(paint.stroke_width);
                self.cr.stroke()
            }
            PaintStyle::FillAndStroke => {
                self.cr.fill_preserve()?;
                self.cr.set_line_width(paint.stroke_width);
                self.cr.stroke()
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) -> Result<(), cairo::Error> {
        self.set_source(paint);
        self.cr.set_line_width(paint.stroke_width);
        self.cr.new_path();
        self.cr.move_to(from.x, from.y);
        self.cr.line_to(to.x, to.y);
        self.cr.stroke()
    }

    fn draw_text(&mut self, text: &str, origin: Point, paint: &Paint) -> Result<(), cairo::Error> {
        self.set_source(paint);
        self.select_font(paint);
        self.cr.new_path();
        self.cr.move_to(origin.x, origin.y);
        self.cr.show_text(text)
    }
}
