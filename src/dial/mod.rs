pub mod canvas;
pub mod geometry;
pub mod model;
pub mod scene;
pub mod transform;
pub mod view;

pub use canvas::{Canvas, CairoCanvas, Paint, PaintStyle, TextMetrics};
pub use geometry::{DialGeometry, Point};
pub use model::{
    Cardinal, CardinalLabels, Dial, DialResources, LabelText, SizeConstraint, TickLabel, measure,
};
pub use view::draw;

pub const DEFAULT_SIDE: u32 = 200; // side when the layout imposes no bound
pub const TICK_COUNT: u32 = 24;
pub const TICK_STEP: f64 = 360.0 / TICK_COUNT as f64;
pub const TICK_LENGTH: f64 = 10.0;
pub const ARROW_HALF_WIDTH: f64 = 5.0;
pub const MAX_TEXT_LENGTH: usize = 500; // accessibility text cap
