#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Where the dial sits inside a `width` x `height` drawing area.
///
/// Center and radius are whole pixels: the halves are taken with integer
/// division so odd sizes land on the same pixel grid every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center: Point,
    pub radius: f64,
}

impl DialGeometry {
    pub fn new(width: i32, height: i32) -> Self {
        let (px, py) = (width / 2, height / 2);
        Self {
            center: Point::new(px as f64, py as f64),
            radius: px.min(py) as f64,
        }
    }

    /// Topmost point of the dial's rim.
    pub fn top(&self) -> Point {
        Point::new(self.center.x, self.center.y - self.radius)
    }

    pub fn angle_difference(a: f64, b: f64) -> f64 {
        // shortest way around, in degrees
        ((a - b + 180.0).rem_euclid(360.0) - 180.0).abs()
    }
}
