use crate::capture::artifact::{ArtifactHandle, ArtifactStore, ClipBlob};
use crate::encode::recorder::{
    CLIP_MIME, CaptureCapability, Recorder, RecorderConfig, RecorderState,
};
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::ChaseResult;
use crate::render::backend::FrameRGBA;
use crate::scene::info;

/// Length of every clip, in milliseconds.
pub const CLIP_DURATION_MS: f64 = 7_000.0;

/// Nominal rate of the captured stream.
pub const CAPTURE_FPS: Fps = Fps { num: 60, den: 1 };

/// Result of [`CaptureController::start`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session is recording.
    Started,
    /// Ignored: a session is already recording.
    AlreadyRecording,
    /// Ignored: the host cannot capture.
    Unsupported,
    /// Ignored: the capability refused to open a recorder.
    OpenFailed,
}

struct Session {
    recorder: Box<dyn Recorder>,
    chunks: Vec<Vec<u8>>,
    deadline_ms: f64,
    frames: u64,
}

impl Session {
    fn collect(&mut self, chunks: Vec<Vec<u8>>) {
        self.chunks
            .extend(chunks.into_iter().filter(|c| !c.is_empty()));
    }
}

/// Records rendered frames into one downloadable clip of fixed length.
///
/// Idle until [`CaptureController::start`]; a session ends when its one-shot timer fires
/// (checked by [`CaptureController::on_frame`] and [`CaptureController::poll`]) or on an explicit
/// [`CaptureController::stop`]. Finishing a session replaces the previously published clip.
pub struct CaptureController<S: ArtifactStore> {
    store: S,
    session: Option<Session>,
    artifact: Option<ArtifactHandle>,
    last_frames: u64,
    bg_rgba: [u8; 4],
}

/// Snapshot of the record control and the download link.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureStatus<'a> {
    /// A session is recording.
    pub recording: bool,
    /// When the armed timer fires.
    pub deadline_ms: Option<f64>,
    /// Label for the record control.
    pub label: &'static str,
    /// The clip currently offered for download.
    pub artifact: Option<&'a ArtifactHandle>,
}

impl<S: ArtifactStore> CaptureController<S> {
    /// Idle controller publishing into `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: None,
            artifact: None,
            last_frames: 0,
            bg_rgba: [0, 0, 0, 255],
        }
    }

    /// Background used to flatten transparent pixels before encoding.
    pub fn with_background(mut self, bg_rgba: [u8; 4]) -> Self {
        self.bg_rgba = bg_rgba;
        self
    }

    /// Begin recording frames of size `canvas` and arm the clip timer.
    #[tracing::instrument(skip(self, capability))]
    pub fn start(
        &mut self,
        now_ms: f64,
        canvas: Canvas,
        capability: &dyn CaptureCapability,
    ) -> StartOutcome {
        if self.session.is_some() {
            tracing::warn!("capture already in progress; ignoring start");
            return StartOutcome::AlreadyRecording;
        }
        if !capability.is_available() {
            tracing::warn!("clip capture is not supported on this host");
            return StartOutcome::Unsupported;
        }

        let cfg = RecorderConfig {
            canvas,
            fps: CAPTURE_FPS,
            bg_rgba: self.bg_rgba,
        };
        let recorder = match capability.open(&cfg) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "failed to open recorder");
                return StartOutcome::OpenFailed;
            }
        };

        self.session = Some(Session {
            recorder,
            chunks: Vec::new(),
            deadline_ms: now_ms + CLIP_DURATION_MS,
            frames: 0,
        });
        tracing::info!(duration_ms = CLIP_DURATION_MS, "capture started");
        StartOutcome::Started
    }

    /// Feed a freshly rendered frame. Fires the timer first when it is due.
    ///
    /// Returns `true` when this call finished the clip. A frame the recorder rejects aborts
    /// the session without publishing.
    pub fn on_frame(&mut self, now_ms: f64, frame: &FrameRGBA) -> ChaseResult<bool> {
        if self.poll(now_ms)? {
            return Ok(true);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(false);
        };
        if let Err(e) = session.recorder.write_frame(frame) {
            self.abort();
            return Err(e);
        }
        session.frames += 1;
        let chunks = session.recorder.take_chunks();
        session.collect(chunks);
        Ok(false)
    }

    /// Fire the clip timer if it is due. Returns `true` when the clip was finished.
    pub fn poll(&mut self, now_ms: f64) -> ChaseResult<bool> {
        let due = self
            .session
            .as_ref()
            .is_some_and(|s| now_ms >= s.deadline_ms);
        if !due {
            return Ok(false);
        }
        self.stop()?;
        Ok(true)
    }

    /// Finish the current session and publish the clip, then release the previous one.
    ///
    /// A failed release is logged; the new clip stays published.
    ///
    /// No-op when idle, so a timer racing an explicit stop finalizes only once.
    pub fn stop(&mut self) -> ChaseResult<Option<&ArtifactHandle>> {
        let Some(mut session) = self.session.take() else {
            return Ok(None);
        };
        if session.recorder.state() == RecorderState::Recording {
            let tail = session.recorder.stop()?;
            session.collect(tail);
        }
        let frames = session.frames;
        self.last_frames = frames;
        let clip = ClipBlob::from_chunks(CLIP_MIME, session.chunks);

        let handle = self.store.publish(clip)?;
        if let Some(previous) = self.artifact.take()
            && let Err(e) = self.store.revoke(previous)
        {
            tracing::warn!(error = %e, "failed to release previous clip");
        }
        tracing::info!(
            frames,
            bytes = handle.len(),
            location = handle.location(),
            "clip ready"
        );
        self.artifact = Some(handle);
        Ok(self.artifact.as_ref())
    }

    /// Stop any session without publishing and release the current clip.
    pub fn teardown(&mut self) {
        self.abort();
        if let Some(handle) = self.artifact.take()
            && let Err(e) = self.store.revoke(handle)
        {
            tracing::warn!(error = %e, "failed to release clip");
        }
    }

    fn abort(&mut self) {
        if let Some(mut session) = self.session.take()
            && session.recorder.state() == RecorderState::Recording
            && let Err(e) = session.recorder.stop()
        {
            tracing::warn!(error = %e, "recorder failed while aborting");
        }
    }

    /// `true` while a session is recording.
    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// When the armed timer fires, if recording.
    pub fn deadline_ms(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.deadline_ms)
    }

    /// Frames written in the current session, or in the last finished one when idle.
    pub fn frames_recorded(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(self.last_frames, |s| s.frames)
    }

    /// The last published clip.
    pub fn artifact(&self) -> Option<&ArtifactHandle> {
        self.artifact.as_ref()
    }

    /// Label for the record control.
    pub fn record_label(&self) -> &'static str {
        info::record_label(self.is_recording())
    }

    /// Everything the record control and download link need to render.
    pub fn status(&self) -> CaptureStatus<'_> {
        CaptureStatus {
            recording: self.is_recording(),
            deadline_ms: self.deadline_ms(),
            label: self.record_label(),
            artifact: self.artifact(),
        }
    }

    /// Borrow the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/controller.rs"]
mod tests;
