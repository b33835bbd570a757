use crate::dial::DialResources;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

/// Dial colors after consulting the GTK theme. A theme may define
/// `@define-color compass_background_color ...` (and the text/marker
/// counterparts); anything it leaves out comes from the resource file.
pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub text: Srgba<f64>,
    pub marker: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext, fallback: &DialResources) -> Self {
        Self {
            background: Self::lookup_color(
                context,
                "compass_background_color",
                fallback.background,
            ),
            text: Self::lookup_color(context, "compass_text_color", fallback.text),
            marker: Self::lookup_color(context, "compass_marker_color", fallback.marker),
        }
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }

    pub fn apply(self, resources: DialResources) -> DialResources {
        DialResources {
            background: self.background,
            text: self.text,
            marker: self.marker,
            ..resources
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.compass-dial {
    background: none;
}

.compass-caption {
    font-family: monospace;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
