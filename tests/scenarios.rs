use compass::config::Config;
use compass::dial::scene::{DrawOp, FixedAdvance, RecordingCanvas};
use compass::dial::{self, Dial, Point, SizeConstraint};
use compass::gui::host::HostState;

fn new_dial() -> Dial {
    Dial::new(Config::default().resources(), &FixedAdvance::default())
}

#[test]
fn test_default_square_render() {
    let side = dial::measure(SizeConstraint::Unspecified, SizeConstraint::Unspecified);
    assert_eq!(side, 200);

    let dial = new_dial();
    let mut canvas = RecordingCanvas::default();
    dial::draw(&mut canvas, &dial, side as i32, side as i32).unwrap();

    let ops = canvas.ops();
    assert_eq!(
        ops[0],
        DrawOp::Circle {
            center: Point::new(100.0, 100.0),
            radius: 100.0,
            color: Config::default().resources().background,
        }
    );

    let (origin, rotation) = ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Text {
                text,
                origin,
                rotation,
                ..
            } if text == "N" => Some((*origin, *rotation)),
            _ => None,
        })
        .unwrap();
    assert_eq!(rotation, 0.0);
    assert!(origin.y < 50.0);
    assert!((origin.x - 100.0).abs() < 10.0);
}

#[test]
fn test_tap_then_render_shows_turned_dial() {
    let mut state = HostState::new(new_dial());
    state.tap();
    assert_eq!(state.dial.bearing(), 45.0);
    assert_eq!(state.caption, "123456789-10-11");

    let mut canvas = RecordingCanvas::default();
    dial::draw(&mut canvas, &state.dial, 200, 200).unwrap();

    // the "45" label now sits at the top, upright
    let rotation = canvas
        .ops()
        .iter()
        .find_map(|op| match op {
            DrawOp::Text { text, rotation, .. } if text == "45" => Some(*rotation),
            _ => None,
        })
        .unwrap();
    assert!(rotation.min(360.0 - rotation) < 1e-9);
}

#[test]
fn test_custom_labels_are_drawn() {
    let mut config = Config::default();
    config.labels.north = "Nord".to_string().into();
    config.labels.west = "Ouest".to_string().into();

    let dial = Dial::new(config.resources(), &FixedAdvance::default());
    let mut canvas = RecordingCanvas::default();
    dial::draw(&mut canvas, &dial, 300, 180).unwrap();

    let texts: Vec<_> = canvas.texts().collect();
    assert!(texts.contains(&"Nord"));
    assert!(texts.contains(&"Ouest"));
    assert!(!texts.contains(&"N"));
}
