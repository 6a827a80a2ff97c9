use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{ChaseError, ChaseResult};
use crate::render::backend::FrameRGBA;

/// MIME type of recorded clips.
pub const CLIP_MIME: &str = "video/webm";

/// Whether a recorder still accepts frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecorderState {
    /// Frames are accepted.
    Recording,
    /// Stopped; no further frames or chunks.
    Inactive,
}

/// Parameters for opening a recorder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Frame size in device pixels.
    pub canvas: Canvas,
    /// Nominal capture rate.
    pub fps: Fps,
    /// Background used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
}

impl RecorderConfig {
    /// Validate dimensions for 4:2:0 video output.
    pub fn validate(&self) -> ChaseResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ChaseError::validation(
                "recorder width/height must be non-zero",
            ));
        }
        if self.fps.num == 0 || self.fps.den == 0 {
            return Err(ChaseError::validation("recorder fps must be non-zero"));
        }
        if !self.canvas.width.is_multiple_of(2) || !self.canvas.height.is_multiple_of(2) {
            return Err(ChaseError::validation(
                "recorder width/height must be even (required for yuv420p output)",
            ));
        }
        Ok(())
    }
}

/// A live encoding session over a stream of frames.
///
/// Contract: frames arrive in presentation order; [`Recorder::take_chunks`] returns data emitted
/// since the previous call; [`Recorder::stop`] flushes the encoder, returns the remaining chunks
/// and leaves the recorder [`RecorderState::Inactive`].
pub trait Recorder: Send {
    /// Current state.
    fn state(&self) -> RecorderState;
    /// Encode one frame.
    fn write_frame(&mut self, frame: &FrameRGBA) -> ChaseResult<()>;
    /// Chunks emitted so far and not yet taken.
    fn take_chunks(&mut self) -> Vec<Vec<u8>>;
    /// Finish encoding and return the trailing chunks.
    fn stop(&mut self) -> ChaseResult<Vec<Vec<u8>>>;
}

/// Platform capability able to open recorders.
pub trait CaptureCapability {
    /// Cheap availability probe, checked before any session is opened.
    fn is_available(&self) -> bool;
    /// Open a recorder for the given configuration.
    fn open(&self, cfg: &RecorderConfig) -> ChaseResult<Box<dyn Recorder>>;
}

/// Capability for hosts without any capture support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl CaptureCapability for NoCapture {
    fn is_available(&self) -> bool {
        false
    }

    fn open(&self, _cfg: &RecorderConfig) -> ChaseResult<Box<dyn Recorder>> {
        Err(ChaseError::capture("capture is not supported on this host"))
    }
}
