use crate::dial::{self, CairoCanvas, SizeConstraint};
use gtk::gio;
use gtk::prelude::*;
use gtk4 as gtk;
use std::cell::RefCell;
use std::rc::Rc;

use super::host::{DescriptionSink, HostState, sync_description};

/// Header menu with the single "Settings" entry, bound to `win.settings`.
pub fn settings_menu() -> gio::Menu {
    let menu = gio::Menu::new();
    menu.append(Some("Settings"), Some("win.settings"));
    menu
}

pub fn install_settings_action(window: &gtk::ApplicationWindow, on_activate: impl Fn() + 'static) {
    let action = gio::SimpleAction::new("settings", None);
    action.connect_activate(move |_, _| on_activate());
    window.add_action(&action);
}

/// Paints the dial centered in whatever the area was allocated.
pub fn install_draw_func(area: &gtk::DrawingArea, state: Rc<RefCell<HostState>>) {
    area.set_draw_func(move |_, cr, width, height| {
        let side = dial::measure(
            SizeConstraint::Exact(width.max(0) as u32),
            SizeConstraint::Exact(height.max(0) as u32),
        ) as i32;

        cr.translate(((width - side) / 2) as f64, ((height - side) / 2) as f64);

        let mut canvas = CairoCanvas::new(cr);
        if let Err(e) = dial::draw(&mut canvas, &state.borrow().dial, side, side) {
            log::error!("Drawing error: {}", e);
        }
    });
}

struct AreaDescription(gtk::glib::WeakRef<gtk::DrawingArea>);

impl DescriptionSink for AreaDescription {
    fn is_shown(&self) -> bool {
        self.0.upgrade().is_some_and(|area| area.is_mapped())
    }

    fn set_description(&self, text: &str) {
        if let Some(area) = self.0.upgrade() {
            area.update_property(&[gtk::accessible::Property::Description(text)]);
        }
    }
}

/// Keeps the area's accessible description in step with the bearing,
/// including changes made while the area was not mapped.
pub fn connect_accessibility(state: &Rc<RefCell<HostState>>, area: &gtk::DrawingArea) {
    state
        .borrow_mut()
        .attach_description(AreaDescription(area.downgrade()));

    let state = Rc::downgrade(state);
    area.connect_map(move |area| {
        let Some(state) = state.upgrade() else {
            return;
        };
        sync_description(&state.borrow().dial, &AreaDescription(area.downgrade()));
    });
}
