use clap::Parser;
use gtk::prelude::*;
use gtk::{glib, Application};
use gtk4 as gtk;
use log::{debug, error};
use pv_common::{Project, ViewerConfig};
use pv_viewer::cli::Cli;
use pv_viewer::ViewerWindow;

fn build_ui(app: &Application, project: &Project, config: &ViewerConfig) {
    debug!("Building UI");

    let viewer = match ViewerWindow::new(app, project, config) {
        Ok(viewer) => viewer,
        Err(err) => {
            error!("Failed to create viewer window: {err}");
            app.quit();
            return;
        }
    };

    viewer.present();

    app.connect_shutdown(move |_| {
        debug!("Shutting down");
        viewer.dispose();
    });
}

fn main() -> glib::ExitCode {
    env_logger::Builder::from_default_env()
        .filter_module("pv_viewer", log::LevelFilter::Debug)
        .filter_module("pv_common", log::LevelFilter::Debug)
        .init();

    let cli = Cli::parse();

    if let Err(err) = gst::init() {
        error!("Failed to initialize GStreamer: {err}");
        return glib::ExitCode::FAILURE;
    }
    if let Err(err) = gst_gtk4::plugin_register_static() {
        error!("Failed to register gtk4 plugin: {err}");
        return glib::ExitCode::FAILURE;
    }

    let project = cli.project();
    let config = cli.config();

    let app = Application::builder()
        .application_id("org.pitivi.Viewer")
        .build();

    app.connect_activate(move |app| build_ui(app, &project, &config));

    debug!("Starting app");

    // Arguments were consumed by clap.
    app.run_with_args::<&str>(&[])
}
