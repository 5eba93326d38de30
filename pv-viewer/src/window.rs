use std::cell::RefCell;
use std::rc::Rc;

use gtk::glib;
use gtk::prelude::*;
use gtk4 as gtk;
use log::debug;
use pv_common::{
    PlaybackStatus, Project, Schedule, Transport, ViewerConfig, ViewerController, ViewerError,
};

use crate::pipeline::GstPipeline;

const PLAY_ICON: &str = "media-playback-start";
const PAUSE_ICON: &str = "media-playback-pause";

const TOOLBAR: [(&str, Transport); 6] = [
    ("media-skip-backward", Transport::GoToStart),
    ("media-seek-backward", Transport::SeekBackward),
    (PAUSE_ICON, Transport::TogglePlay),
    ("media-seek-forward", Transport::SeekForward),
    ("media-skip-forward", Transport::GoToEnd),
    ("media-playback-stop", Transport::Stop),
];

fn sync_play_button(button: &gtk::Button, status: PlaybackStatus) {
    match status {
        PlaybackStatus::Playing => button.set_icon_name(PAUSE_ICON),
        PlaybackStatus::Paused | PlaybackStatus::Stopped => button.set_icon_name(PLAY_ICON),
    }
}

/// Stops polling and brings the pipeline down. Safe to call repeatedly.
fn dispose(
    controller: &RefCell<ViewerController<GstPipeline>>,
    poll_source: &RefCell<Option<glib::SourceId>>,
) {
    if !controller.borrow_mut().dispose() {
        return;
    }

    debug!("Disposing viewer window");
    if let Some(source_id) = poll_source.borrow_mut().take() {
        source_id.remove();
    }
}

/// Preview window: a drawing area above a row of transport buttons.
#[derive(Clone)]
pub struct ViewerWindow {
    window: gtk::ApplicationWindow,
    controller: Rc<RefCell<ViewerController<GstPipeline>>>,
    poll_source: Rc<RefCell<Option<glib::SourceId>>>,
}

impl ViewerWindow {
    pub fn new(
        app: &gtk::Application,
        project: &Project,
        config: &ViewerConfig,
    ) -> Result<Self, ViewerError> {
        let video_area = gtk::Picture::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let controller = Rc::new(RefCell::new(ViewerController::initialize(
            GstPipeline::new(),
            video_area.clone(),
            config,
        )?));

        let main_vbox = gtk::Box::new(gtk::Orientation::Vertical, 0);
        main_vbox.append(&video_area);

        let toolbar = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .halign(gtk::Align::Center)
            .build();

        let play_button = gtk::Button::from_icon_name(PAUSE_ICON);
        for (icon, transport) in TOOLBAR {
            let button = match transport {
                Transport::TogglePlay => play_button.clone(),
                _ => gtk::Button::from_icon_name(icon),
            };
            button.connect_clicked(glib::clone!(
                #[weak]
                controller,
                #[weak]
                play_button,
                move |_| {
                    let mut controller = controller.borrow_mut();
                    controller.handle(transport);
                    sync_play_button(&play_button, controller.status());
                }
            ));
            toolbar.append(&button);
        }
        let progress = gtk::Label::builder()
            .label(controller.borrow().progress())
            .margin_start(10)
            .build();
        toolbar.append(&progress);
        main_vbox.append(&toolbar);

        let window = gtk::ApplicationWindow::builder()
            .application(app)
            .title(project.viewer_title())
            .default_width(config.default_width)
            .default_height(config.default_height)
            .child(&main_vbox)
            .build();

        let poll_source: Rc<RefCell<Option<glib::SourceId>>> = Rc::new(RefCell::new(None));
        let source_id = glib::timeout_add_local(
            config.poll_interval,
            glib::clone!(
                #[weak]
                controller,
                #[weak]
                poll_source,
                #[weak]
                play_button,
                #[weak]
                progress,
                #[upgrade_or]
                glib::ControlFlow::Break,
                move || {
                    let mut controller = controller.borrow_mut();
                    match controller.poll_tick() {
                        Schedule::Continue => {
                            sync_play_button(&play_button, controller.status());
                            progress.set_label(&controller.progress());
                            glib::ControlFlow::Continue
                        }
                        Schedule::Break => {
                            // The source is gone once we return `Break`.
                            drop(poll_source.borrow_mut().take());
                            glib::ControlFlow::Break
                        }
                    }
                }
            ),
        );
        *poll_source.borrow_mut() = Some(source_id);

        window.connect_close_request(glib::clone!(
            #[strong]
            controller,
            #[strong]
            poll_source,
            move |_| {
                dispose(&controller, &poll_source);
                glib::Propagation::Proceed
            }
        ));

        Ok(Self {
            window,
            controller,
            poll_source,
        })
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn dispose(&self) {
        dispose(&self.controller, &self.poll_source);
    }
}
