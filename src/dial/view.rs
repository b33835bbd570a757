use super::canvas::Canvas;
use super::geometry::{DialGeometry, Point};
use super::model::{Cardinal, Dial, TickLabel};
use super::{ARROW_HALF_WIDTH, TICK_COUNT, TICK_LENGTH, TICK_STEP};

/// Paints `dial` into a `width` x `height` area.
///
/// The face is turned by `-bearing` so the current heading sits under the
/// fixed top of the widget. Saves and restores are balanced on success.
pub fn draw<C: Canvas>(
    canvas: &mut C,
    dial: &Dial,
    width: i32,
    height: i32,
) -> Result<(), C::Error> {
    let geometry = DialGeometry::new(width, height);

    canvas.fill_circle(geometry.center, geometry.radius, dial.circle_paint())?;

    canvas.save()?;
    canvas.rotate_about(-f64::from(dial.bearing()), geometry.center);

    TickRenderer::new(canvas, dial, geometry).draw_all()?;

    canvas.restore()
}

struct TickRenderer<'a, C: Canvas> {
    canvas: &'a mut C,
    dial: &'a Dial,
    geometry: DialGeometry,
    cardinal_x: f64,
    label_y: f64,
}

impl<'a, C: Canvas> TickRenderer<'a, C> {
    fn new(canvas: &'a mut C, dial: &'a Dial, geometry: DialGeometry) -> Self {
        // all cardinals share the width of "W" so they sit on one column
        let w_width = canvas.text_width("W", dial.text_paint()).trunc();
        let cardinal_x = geometry.center.x - (w_width / 2.0).trunc();
        let label_y = geometry.top().y + dial.text_height();

        Self {
            canvas,
            dial,
            geometry,
            cardinal_x,
            label_y,
        }
    }

    fn draw_all(&mut self) -> Result<(), C::Error> {
        for i in 0..TICK_COUNT {
            self.draw_tick()?;

            self.canvas.save()?;
            self.canvas.translate(0.0, self.dial.text_height());
            match TickLabel::classify(i) {
                TickLabel::Cardinal(cardinal) => self.draw_cardinal(cardinal)?,
                TickLabel::Angle(degrees) => self.draw_angle(degrees)?,
                TickLabel::None => {}
            }
            self.canvas.restore()?;

            self.canvas.rotate_about(TICK_STEP, self.geometry.center);
        }
        Ok(())
    }

    fn draw_tick(&mut self) -> Result<(), C::Error> {
        let top = self.geometry.top();
        self.canvas.draw_line(
            top,
            Point::new(top.x, top.y + TICK_LENGTH),
            self.dial.marker_paint(),
        )
    }

    fn draw_cardinal(&mut self, cardinal: Cardinal) -> Result<(), C::Error> {
        if cardinal == Cardinal::North {
            self.draw_north_arrow()?;
        }
        self.canvas.draw_text(
            self.dial.label(cardinal),
            Point::new(self.cardinal_x, self.label_y),
            self.dial.text_paint(),
        )
    }

    fn draw_north_arrow(&mut self) -> Result<(), C::Error> {
        let top = self.geometry.top();
        let tip = Point::new(top.x, top.y + 2.0 * self.dial.text_height());
        let base_y = top.y + 3.0 * self.dial.text_height();
        for dx in [-ARROW_HALF_WIDTH, ARROW_HALF_WIDTH] {
            self.canvas
                .draw_line(tip, Point::new(tip.x + dx, base_y), self.dial.marker_paint())?;
        }
        Ok(())
    }

    fn draw_angle(&mut self, degrees: u32) -> Result<(), C::Error> {
        let text = degrees.to_string();
        let width = self.canvas.text_width(&text, self.dial.text_paint());
        let x = (self.geometry.center.x - width / 2.0).trunc();
        self.canvas
            .draw_text(&text, Point::new(x, self.label_y.trunc()), self.dial.text_paint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dial::scene::{DrawOp, FixedAdvance, RecordingCanvas};

    fn dial_at(bearing: f32) -> Dial {
        let mut dial = Dial::new(Config::default().resources(), &FixedAdvance::default());
        dial.set_bearing(bearing);
        dial
    }

    fn record(bearing: f32, side: i32) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        draw(&mut canvas, &dial_at(bearing), side, side).unwrap();
        canvas
    }

    #[test]
    fn test_draws_background_circle_first() {
        let canvas = record(0.0, 200);
        match &canvas.ops()[0] {
            DrawOp::Circle { center, radius, .. } => {
                assert_eq!(*center, Point::new(100.0, 100.0));
                assert_eq!(*radius, 100.0);
            }
            other => panic!("expected circle, got {:?}", other),
        }
    }

    #[test]
    fn test_transform_stack_is_balanced() {
        assert_eq!(record(123.0, 200).depth(), 0);
    }

    #[test]
    fn test_label_and_tick_counts() {
        let canvas = record(0.0, 200);
        let texts: Vec<_> = canvas.texts().collect();

        assert_eq!(texts, vec!["N", "45", "E", "135", "S", "225", "W", "315"]);
        // 24 ticks + 2 arrow strokes under north
        assert_eq!(canvas.line_count(), 26);
    }

    #[test]
    fn test_north_is_upright_at_zero_bearing() {
        let canvas = record(0.0, 200);
        let north = canvas
            .ops()
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == "N"))
            .unwrap();

        match north {
            DrawOp::Text { origin, rotation, .. } => {
                assert_eq!(*rotation, 0.0);
                assert!(origin.y < 100.0, "north drawn at {:?}", origin);
                // "W" is 7.2 wide -> 7, half truncated to 3
                assert_eq!(origin.x, 97.0);
                // text height 14, plus the per-tick 14 shift
                assert_eq!(origin.y, 28.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_north_arrow_hangs_below_the_label() {
        let canvas = record(0.0, 200);
        let marker = Config::default().resources().marker;

        // tip at 2 text heights, plus the per-tick shift of one more
        let tip = Point::new(100.0, 42.0);
        for end in [Point::new(95.0, 56.0), Point::new(105.0, 56.0)] {
            let stroke = DrawOp::Line {
                from: tip,
                to: end,
                color: marker,
            };
            assert!(
                canvas.ops().iter().any(|op| op.approx_eq(&stroke, 1e-9)),
                "missing {:?}",
                stroke
            );
        }
    }

    #[test]
    fn test_angle_label_is_centered_on_its_own_width() {
        // at bearing 45 the "45" tick points straight up
        let canvas = record(45.0, 200);
        let (origin, rotation) = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text {
                    text,
                    origin,
                    rotation,
                    ..
                } if text == "45" => Some((*origin, *rotation)),
                _ => None,
            })
            .unwrap();

        // "45" is 14.4 wide: 100 - 7.2 truncates to 92
        assert!(origin.distance(Point::new(92.0, 28.0)) < 1e-9, "{:?}", origin);
        assert!(DialGeometry::angle_difference(rotation, 0.0) < 1e-9);
    }

    #[test]
    fn test_bearing_turns_face_the_other_way() {
        let canvas = record(90.0, 200);
        let east = canvas
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, rotation, .. } if text == "E" => Some(*rotation),
                _ => None,
            })
            .unwrap();

        // facing east, "E" ends up on top
        assert!(DialGeometry::angle_difference(east, 0.0) < 1e-9);
    }

    #[test]
    fn test_full_turn_is_identical() {
        for bearing in [0.0_f32, 17.5, 45.0, 300.0, -30.0] {
            let a = record(bearing, 240).into_ops();
            let b = record(bearing + 360.0, 240).into_ops();

            assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(&b) {
                assert!(x.approx_eq(y, 1e-3), "{:?} != {:?} at bearing {}", x, y, bearing);
            }
        }
    }

    #[test]
    fn test_ticks_are_fifteen_degrees_apart() {
        let canvas = record(0.0, 200);
        let center = Point::new(100.0, 100.0);
        let starts: Vec<_> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, .. } if (from.distance(center) - 100.0).abs() < 1e-6 => {
                    Some(clock_angle(*from, center))
                }
                _ => None,
            })
            .collect();

        assert_eq!(starts.len(), 24);
        for (i, angle) in starts.iter().enumerate() {
            let expected = i as f64 * 15.0;
            assert!(
                DialGeometry::angle_difference(*angle, expected) < 1e-6,
                "tick {} at {}",
                i,
                angle
            );
        }
    }

    // clockwise from 12 o'clock
    fn clock_angle(p: Point, center: Point) -> f64 {
        (p.x - center.x)
            .atan2(center.y - p.y)
            .to_degrees()
            .rem_euclid(360.0)
    }
}
