use log::{debug, error, warn};

use crate::seek::SeekTarget;
use crate::timecode;
use crate::{MediaPipeline, PlaybackStatus, RunState, Transport, ViewerConfig, ViewerError};

const SOURCE_NAME: &str = "video_source";
const SINK_NAME: &str = "video_display";

/// What the host loop should do with the poll callback after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Break,
}

/// Playback status and the source → sink chain behind a viewer window.
pub struct ViewerController<P: MediaPipeline> {
    pipeline: P,
    sink: P::Element,
    surface: P::Surface,
    status: PlaybackStatus,
    seek_step: std::time::Duration,
    surface_bound: bool,
    dispose_has_run: bool,
}

impl<P: MediaPipeline> ViewerController<P> {
    /// Builds the chain and starts it.
    ///
    /// Only element creation and bin membership are fatal. A failed link is
    /// logged and the viewer is left with a pipeline that will not preroll.
    pub fn initialize(
        pipeline: P,
        surface: P::Surface,
        config: &ViewerConfig,
    ) -> Result<Self, ViewerError> {
        let source = pipeline.make_element(&config.source_factory, SOURCE_NAME)?;
        let sink = pipeline.make_element(&config.sink_factory, SINK_NAME)?;

        pipeline.add(&source)?;
        pipeline.add(&sink)?;

        if let Err(err) = pipeline.link(&source, &sink) {
            error!(
                "Could not link `{}` to `{}`: {err}",
                config.source_factory, config.sink_factory
            );
        }

        debug!("Setting pipeline to `Playing`");
        if let Err(err) = pipeline.set_run_state(RunState::Playing) {
            error!("{err}");
        }

        Ok(Self {
            pipeline,
            sink,
            surface,
            status: PlaybackStatus::Playing,
            seek_step: config.seek_step,
            surface_bound: false,
            dispose_has_run: false,
        })
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn surface_bound(&self) -> bool {
        self.surface_bound
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose_has_run
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn handle(&mut self, transport: Transport) {
        if self.dispose_has_run {
            debug!("Ignoring {transport:?}, viewer is disposed");
            return;
        }

        match transport {
            Transport::Play => self.play(),
            Transport::TogglePlay => self.toggle_play(),
            Transport::Pause => self.pause(),
            Transport::Stop => self.stop(),
            Transport::SeekBackward => self.seek_backward(),
            Transport::SeekForward => self.seek_forward(),
            Transport::GoToStart => self.seek(SeekTarget::Start),
            Transport::GoToEnd => self.seek(SeekTarget::End),
        }
    }

    pub fn play(&mut self) {
        debug!("video_play");
        self.set_status(self.status.play());
    }

    pub fn toggle_play(&mut self) {
        match self.status {
            PlaybackStatus::Playing => debug!("video_pause"),
            _ => debug!("video_play"),
        }
        self.set_status(self.status.toggle());
    }

    pub fn pause(&mut self) {
        debug!("video_pause");
        self.set_status(self.status.pause());
    }

    pub fn stop(&mut self) {
        debug!("video_stop");
        self.set_status(self.status.stop());
    }

    pub fn seek_backward(&mut self) {
        debug!("video_backward");
        self.seek(SeekTarget::Backward(self.seek_step));
    }

    pub fn seek_forward(&mut self) {
        debug!("video_forward");
        self.seek(SeekTarget::Forward(self.seek_step));
    }

    /// Position / duration readout for the toolbar.
    pub fn progress(&self) -> String {
        timecode::format_progress(self.pipeline.position(), self.pipeline.duration())
    }

    /// One turn of the host loop.
    pub fn poll_tick(&mut self) -> Schedule {
        if self.dispose_has_run {
            return Schedule::Break;
        }

        self.sync_with_pipeline();

        if self.pipeline.run_state() == RunState::Playing {
            self.pipeline.attach_surface(&self.sink, &self.surface);
            self.surface_bound = true;
            self.pipeline.iterate();
        }

        Schedule::Continue
    }

    /// Tears the pipeline down. Returns `false` if it already ran.
    pub fn dispose(&mut self) -> bool {
        if self.dispose_has_run {
            return false;
        }
        self.dispose_has_run = true;

        debug!("Shutting down pipeline");
        if let Err(err) = self.pipeline.set_run_state(RunState::Null) {
            error!("{err}");
        }

        true
    }

    /// Follows the pipeline once it settled somewhere the status does not expect.
    fn sync_with_pipeline(&mut self) {
        if self.pipeline.is_transitioning() {
            return;
        }

        let actual = PlaybackStatus::from_run_state(self.pipeline.run_state());
        if actual != self.status {
            warn!(
                "Pipeline settled in {:?} while status was {:?}",
                self.pipeline.run_state(),
                self.status
            );
            self.status = actual;
        }
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if status == self.status && self.pipeline.run_state() == status.run_state() {
            return;
        }
        self.status = status;

        if let Err(err) = self.pipeline.set_run_state(status.run_state()) {
            warn!("Pipeline refused transition for {status:?}: {err}");
        }
    }

    fn seek(&mut self, target: SeekTarget) {
        let Some(position) = target.resolve(self.pipeline.position(), self.pipeline.duration())
        else {
            error!("Failed to resolve seek target {target:?}");
            return;
        };

        if let Err(err) = self.pipeline.seek(position) {
            error!("Failed to seek to={position:?}: {err}");
        }
    }
}
