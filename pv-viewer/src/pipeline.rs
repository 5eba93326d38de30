use std::time::Duration;

use gst::prelude::*;
use gtk::gdk;
use gtk4 as gtk;
use log::{debug, error, warn};
use pv_common::{MediaPipeline, RunState, ViewerError};

pub fn to_gst_state(state: RunState) -> gst::State {
    match state {
        RunState::Null => gst::State::Null,
        RunState::Ready => gst::State::Ready,
        RunState::Paused => gst::State::Paused,
        RunState::Playing => gst::State::Playing,
    }
}

pub fn from_gst_state(state: gst::State) -> RunState {
    match state {
        gst::State::Ready => RunState::Ready,
        gst::State::Paused => RunState::Paused,
        gst::State::Playing => RunState::Playing,
        _ => RunState::Null,
    }
}

/// A `gst::Pipeline` holding the viewer's source and sink.
pub struct GstPipeline {
    inner: gst::Pipeline,
}

impl GstPipeline {
    pub fn new() -> Self {
        Self {
            inner: gst::Pipeline::with_name("pipeline"),
        }
    }
}

impl Default for GstPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaPipeline for GstPipeline {
    type Element = gst::Element;
    type Surface = gtk::Picture;

    fn make_element(&self, factory: &str, name: &str) -> Result<gst::Element, ViewerError> {
        gst::ElementFactory::make(factory)
            .name(name)
            .build()
            .map_err(|err| {
                debug!("{err}");
                ViewerError::ElementCreation {
                    factory: factory.to_owned(),
                }
            })
    }

    fn add(&self, element: &gst::Element) -> Result<(), ViewerError> {
        self.inner
            .add(element)
            .map_err(|err| ViewerError::Pipeline(err.to_string()))
    }

    fn link(&self, src: &gst::Element, dest: &gst::Element) -> Result<(), ViewerError> {
        src.link(dest)
            .map_err(|err| ViewerError::Pipeline(err.to_string()))
    }

    fn set_run_state(&self, state: RunState) -> Result<(), ViewerError> {
        self.inner
            .set_state(to_gst_state(state))
            .map(|_| ())
            .map_err(|_| ViewerError::StateChange { state })
    }

    fn run_state(&self) -> RunState {
        from_gst_state(self.inner.current_state())
    }

    fn is_transitioning(&self) -> bool {
        self.inner.pending_state() != gst::State::VoidPending
    }

    fn attach_surface(&self, sink: &gst::Element, surface: &gtk::Picture) {
        // Sinks without a paintable render into a window of their own.
        if sink.find_property("paintable").is_none() {
            return;
        }

        let paintable = sink.property::<gdk::Paintable>("paintable");
        if surface.paintable().as_ref() != Some(&paintable) {
            debug!("Binding sink paintable to the video area");
            surface.set_paintable(Some(&paintable));
        }
    }

    fn iterate(&self) {
        let Some(bus) = self.inner.bus() else {
            return;
        };

        while let Some(msg) = bus.pop() {
            use gst::MessageView;

            match msg.view() {
                MessageView::Eos(..) => debug!("Reached EOS"),
                MessageView::Error(err) => {
                    error!(
                        "Error from {:?}: {} ({:?})",
                        err.src().map(|s| s.path_string()),
                        err.error(),
                        err.debug()
                    );
                }
                MessageView::Warning(warning) => {
                    warn!(
                        "Warning from {:?}: {} ({:?})",
                        warning.src().map(|s| s.path_string()),
                        warning.error(),
                        warning.debug()
                    );
                }
                MessageView::StateChanged(state_changed) => {
                    if state_changed.src() == Some(self.inner.upcast_ref()) {
                        debug!(
                            "Pipeline state changed {:?} -> {:?}",
                            state_changed.old(),
                            state_changed.current()
                        );
                    }
                }
                _ => (),
            }
        }
    }

    fn position(&self) -> Option<Duration> {
        self.inner
            .query_position::<gst::ClockTime>()
            .map(|t| Duration::from_nanos(t.nseconds()))
    }

    fn duration(&self) -> Option<Duration> {
        self.inner
            .query_duration::<gst::ClockTime>()
            .map(|t| Duration::from_nanos(t.nseconds()))
    }

    fn seek(&self, position: Duration) -> Result<(), ViewerError> {
        let nseconds = u64::try_from(position.as_nanos())
            .ok()
            .filter(|ns| *ns <= gst::ClockTime::MAX.nseconds())
            .ok_or_else(|| ViewerError::Pipeline(format!("Seek position {position:?} out of range")))?;

        self.inner
            .seek_simple(
                gst::SeekFlags::ACCURATE | gst::SeekFlags::FLUSH,
                gst::ClockTime::from_nseconds(nseconds),
            )
            .map_err(|err| ViewerError::Pipeline(err.to_string()))
    }
}
