use super::canvas::{Paint, PaintStyle, TextMetrics};
use super::{DEFAULT_SIDE, MAX_TEXT_LENGTH};
use derive_more::{Deref, From};
use palette::Srgba;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// How much room the layout offers along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    Exact(u32),
    AtMost(u32),
    Unspecified,
}

impl SizeConstraint {
    pub fn resolve(self) -> u32 {
        match self {
            Self::Exact(n) | Self::AtMost(n) => n,
            Self::Unspecified => DEFAULT_SIDE,
        }
    }
}

/// Side of the square the dial wants: it fills as much space as the tighter
/// axis allows.
pub fn measure(width: SizeConstraint, height: SizeConstraint) -> u32 {
    width.resolve().min(height.resolve())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Cardinal {
    North,
    East,
    South,
    West,
}

impl Cardinal {
    /// Tick index (0..24) at which this direction sits.
    pub fn tick(&self) -> u32 {
        *self as u32 * 6
    }
}

/// What gets drawn next to a tick besides the tick itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLabel {
    Cardinal(Cardinal),
    Angle(u32),
    None,
}

impl TickLabel {
    pub fn classify(index: u32) -> Self {
        // multiples of 6 are also multiples of 3; test them first
        if index % 6 == 0 {
            Cardinal::iter()
                .nth((index / 6) as usize % 4)
                .map_or(Self::None, Self::Cardinal)
        } else if index % 3 == 0 {
            Self::Angle(index * 15)
        } else {
            Self::None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Deref, From)]
#[serde(transparent)]
pub struct LabelText(String);

crate::impl_string_newtype!(LabelText);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardinalLabels {
    pub north: LabelText,
    pub east: LabelText,
    pub south: LabelText,
    pub west: LabelText,
}

impl Default for CardinalLabels {
    fn default() -> Self {
        Self {
            north: LabelText::new("N"),
            east: LabelText::new("E"),
            south: LabelText::new("S"),
            west: LabelText::new("W"),
        }
    }
}

impl CardinalLabels {
    pub fn get(&self, cardinal: Cardinal) -> &LabelText {
        match cardinal {
            Cardinal::North => &self.north,
            Cardinal::East => &self.east,
            Cardinal::South => &self.south,
            Cardinal::West => &self.west,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialResources {
    pub labels: CardinalLabels,
    pub background: Srgba<f64>,
    pub text: Srgba<f64>,
    pub marker: Srgba<f64>,
    pub text_size: f64,
}

type ContentChanged = Box<dyn Fn(&Dial)>;

/// State behind one compass dial. Only the bearing changes after
/// construction.
pub struct Dial {
    bearing: f32,
    labels: CardinalLabels,
    marker_paint: Paint,
    text_paint: Paint,
    circle_paint: Paint,
    text_height: f64,
    content_changed: Option<ContentChanged>,
}

impl Dial {
    pub fn new<M: TextMetrics>(resources: DialResources, metrics: &M) -> Self {
        let circle_paint = Paint::new(resources.background, PaintStyle::FillAndStroke);
        let text_paint =
            Paint::new(resources.text, PaintStyle::Fill).with_font_size(resources.text_size);
        let marker_paint = Paint::new(resources.marker, PaintStyle::Stroke);

        // line spacing is taken from the width of "yY"
        let text_height = metrics.text_width("yY", &text_paint).trunc();

        Self {
            bearing: 0.0,
            labels: resources.labels,
            marker_paint,
            text_paint,
            circle_paint,
            text_height,
            content_changed: None,
        }
    }

    pub fn bearing(&self) -> f32 {
        self.bearing
    }

    /// Stores the bearing as given; no wrapping into `[0, 360)`.
    pub fn set_bearing(&mut self, bearing: f32) {
        self.bearing = bearing;
        log::trace!("bearing set to {}", bearing);
        if let Some(notify) = &self.content_changed {
            notify(&*self);
        }
    }

    /// Registers the accessibility hook fired on every bearing change,
    /// replacing any previous one.
    pub fn connect_content_changed(&mut self, f: impl Fn(&Dial) + 'static) {
        self.content_changed = Some(Box::new(f));
    }

    pub fn describe_for_accessibility(&self, shown: bool) -> Option<String> {
        shown.then(|| describe_bearing(self.bearing))
    }

    pub fn label(&self, cardinal: Cardinal) -> &str {
        self.labels.get(cardinal)
    }

    pub fn text_height(&self) -> f64 {
        self.text_height
    }

    pub fn marker_paint(&self) -> &Paint {
        &self.marker_paint
    }

    pub fn text_paint(&self) -> &Paint {
        &self.text_paint
    }

    pub fn circle_paint(&self) -> &Paint {
        &self.circle_paint
    }
}

/// Bearing as spoken text, capped at the accessibility limit.
///
/// Plain decimals (`45.0`) for magnitudes in `[1e-3, 1e7)`, otherwise
/// computerized scientific notation (`1.0E7`, `-2.5E-4`).
fn describe_bearing(bearing: f32) -> String {
    let magnitude = bearing.abs();
    let text = if bearing.is_nan() {
        "NaN".to_string()
    } else if bearing.is_infinite() {
        if bearing > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        format!("{:?}", bearing)
    } else {
        let sci = format!("{:e}", bearing);
        match sci.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => sci,
        }
    };
    text.chars().take(MAX_TEXT_LENGTH).collect()
}
