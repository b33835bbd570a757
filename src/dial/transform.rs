use super::geometry::Point;

/// 2D affine transform in cairo's layout:
/// `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            e: dx,
            f: dy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `degrees`, clockwise on a y-down surface.
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn rotation_about(degrees: f64, pivot: Point) -> Self {
        Self::translation(pivot.x, pivot.y)
            .then(Self::rotation(degrees))
            .then(Self::translation(-pivot.x, -pivot.y))
    }

    /// `self` applied after `inner`.
    pub fn then(self, inner: Affine) -> Self {
        Self {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Rotation component in degrees, normalized to `[0, 360)`.
    pub fn rotation_degrees(&self) -> f64 {
        self.b.atan2(self.a).to_degrees().rem_euclid(360.0)
    }

    /// Uniform scale factor; exact for rigid transforms.
    pub fn scale(&self) -> f64 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }
}

/// Current transform plus the saved ones beneath it.
#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Affine {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn push(&mut self) {
        self.saved.push(self.current);
    }

    /// Returns `None` when there is nothing left to restore.
    pub fn pop(&mut self) -> Option<Affine> {
        let restored = self.saved.pop()?;
        self.current = restored;
        Some(restored)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current = self.current.then(Affine::translation(dx, dy));
    }

    pub fn rotate_about(&mut self, degrees: f64, pivot: Point) {
        self.current = self.current.then(Affine::rotation_about(degrees, pivot));
    }

    pub fn map(&self, p: Point) -> Point {
        self.current.apply(p)
    }
}
