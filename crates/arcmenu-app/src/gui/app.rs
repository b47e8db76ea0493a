use crate::config::{self, AppConfig, ItemLabel};
use crate::events::AppEvent;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::view;
use crate::source::{ChannelDelegate, ConfigSource};
use arcmenu::{CircularMenu, Point, Size};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

pub struct AppModel {
    pub menu: Rc<RefCell<CircularMenu<ItemLabel>>>,
    pub source: Rc<ConfigSource>,
    pub delegate: Rc<ChannelDelegate>,
    pub config_path: PathBuf,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    DragBegin(Point),
    DragUpdate(Point),
    DragEnd,
    Click(Point),
    ItemSelected(usize),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::ItemSelected(i) => AppMsg::ItemSelected(i),
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        AppConfig,
        PathBuf,
        async_channel::Sender<AppEvent>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("arcmenu"),
            set_default_width: 480,
            set_default_height: 240,

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "arcmenu-drawing-area",

                add_controller = gtk::GestureDrag {
                    connect_drag_begin[sender] => move |_, x, y| {
                        sender.input(AppMsg::DragBegin(Point::new(x, y)));
                    },
                    connect_drag_update[sender] => move |gesture, dx, dy| {
                        if let Some((x, y)) = gesture.start_point() {
                            sender.input(AppMsg::DragUpdate(Point::new(x + dx, y + dy)));
                        }
                    },
                    connect_drag_end[sender] => move |_, _, _| {
                        sender.input(AppMsg::DragEnd);
                    },
                    connect_cancel[sender] => move |_, _| {
                        sender.input(AppMsg::DragEnd);
                    },
                },

                add_controller = gtk::GestureClick {
                    connect_released[sender] => move |_, _, x, y| {
                        sender.input(AppMsg::Click(Point::new(x, y)));
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, tx, rx) = init;

        theme::load_css();

        let source = Rc::new(ConfigSource::new(&config));
        let delegate = Rc::new(ChannelDelegate::new(tx));
        let mut menu = CircularMenu::new(config.menu);
        menu.set_data_source(&source);
        menu.set_delegate(&delegate);

        let model = AppModel {
            menu: Rc::new(RefCell::new(menu)),
            source,
            delegate,
            config_path,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let menu_draw = model.menu.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let mut menu = menu_draw.borrow_mut();
                menu.resize(Size::new(width as f64, height as f64));
                menu.layout_if_needed();

                let colors = ThemeColors::from_context(&drawing_area.style_context());
                if let Err(e) = view::draw(cr, &menu, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::DragBegin(point) => {
                let mut menu = self.menu.borrow_mut();
                if menu.ring().contains(point) {
                    menu.drag_began(point);
                }
            }
            AppMsg::DragUpdate(point) => {
                if self.menu.borrow_mut().drag_moved(point).rotated() {
                    self.drawing_area.queue_draw();
                }
            }
            AppMsg::DragEnd => {
                self.menu.borrow_mut().drag_ended();
            }
            AppMsg::Click(point) => {
                let menu = self.menu.borrow();
                if let Some(index) = menu.item_at(point) {
                    menu.tap(index);
                }
            }
            AppMsg::ItemSelected(index) => match self.source.label(index) {
                Some(label) => log::info!("Selected '{}'", label),
                None => log::warn!("Selection of unknown item {}", index),
            },
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.source = Rc::new(ConfigSource::new(&new_config));
                    let mut menu = self.menu.borrow_mut();
                    menu.set_data_source(&self.source);
                    menu.set_delegate(&self.delegate);
                    menu.set_config(new_config.menu);
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
