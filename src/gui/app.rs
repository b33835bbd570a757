use crate::config::Config;
use crate::dial::{CairoCanvas, DEFAULT_SIDE, Dial};
use crate::gui::host::HostState;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppInit {
    pub config: Config,
    pub bearing: f32,
    /// Measures label text while the dial is being built.
    pub metrics: CairoCanvas,
}

pub struct AppModel {
    pub state: Rc<RefCell<HostState>>,
    pub root: gtk::ApplicationWindow,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Tap,
    Settings,
    Close,
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Compass"),
            set_default_size: (360, 420),

            #[wrap(Some)]
            set_titlebar = &gtk::HeaderBar {
                pack_end = &gtk::MenuButton {
                    set_icon_name: "open-menu-symbolic",
                    set_menu_model: Some(&menu),
                }
            },

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Close);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,
                set_margin_all: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: DEFAULT_SIDE as i32,
                    set_content_height: DEFAULT_SIDE as i32,
                    set_hexpand: true,
                    set_vexpand: true,
                    set_focusable: true,
                    add_css_class: "compass-dial",

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, _, _| {
                            sender.input(AppMsg::Tap);
                        }
                    }
                },

                gtk::Label {
                    add_css_class: "compass-caption",
                    #[watch]
                    set_label: &model.state.borrow().caption,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            bearing,
            metrics,
        } = init;

        theme::load_css();

        let colors = ThemeColors::from_context(&root.style_context(), &config.resources());
        let resources = colors.apply(config.resources());
        log::debug!("Dial resources: {:?}", resources);

        let mut dial = Dial::new(resources, &metrics);
        dial.set_bearing(bearing);
        let state = Rc::new(RefCell::new(HostState::new(dial)));

        let menu = window::settings_menu();

        let model = AppModel {
            state: state.clone(),
            root: root.clone(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        window::connect_accessibility(&state, &model.drawing_area);
        window::install_draw_func(&model.drawing_area, state);

        let settings_sender = sender.clone();
        window::install_settings_action(&root, move || {
            settings_sender.input(AppMsg::Settings);
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Tap => {
                let bearing = {
                    let mut state = self.state.borrow_mut();
                    state.tap();
                    state.dial.bearing()
                };
                log::info!("Dial tapped, bearing now {}", bearing);
                self.drawing_area.queue_draw();
            }
            AppMsg::Settings => {
                log::debug!("Settings selected");
            }
            AppMsg::Close => {
                self.root.close();
            }
        }
    }
}
