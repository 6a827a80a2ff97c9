//! A looping, procedurally drawn chase scene: a boy sprints through a parallax jungle while a
//! pack of wolves closes in and fireflies drift overhead.
//!
//! - Mount an [`AnimationDriver`] on a [`Platform`] (e.g. [`HeadlessPlatform`])
//! - Deliver frame callbacks with [`AnimationDriver::tick`], drawing onto any [`DrawSurface`]
//!   ([`CpuCanvas`] rasterizes with `vello_cpu`)
//! - Optionally capture a 7 second WebM clip with a [`CaptureController`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Clip capture and published artifacts.
pub mod capture;
/// Drawing surface and shape primitives.
pub mod draw;
/// Animation driver, host platform and canvas layout.
pub mod driver;
/// Clip encoders.
pub mod encode;
/// Raster output.
pub mod render;
/// Scene model: entities, clock, state and composer.
pub mod scene;
/// Viewer settings.
pub mod settings;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Color, Fps, FrameIndex, LOGICAL_HEIGHT, LOGICAL_WIDTH, Point, Rect,
    Vec2,
};
pub use crate::foundation::error::{ChaseError, ChaseResult};
pub use crate::foundation::math::Rng64;

pub use crate::capture::artifact::{
    ArtifactHandle, ArtifactStore, CLIP_FILE_NAME, ClipBlob, FileArtifactStore,
    MemoryArtifactStore,
};
pub use crate::capture::controller::{
    CAPTURE_FPS, CLIP_DURATION_MS, CaptureController, CaptureStatus, StartOutcome,
};
pub use crate::draw::surface::{DrawOp, DrawSurface, NullSurface, Paint, RecordingSurface};
pub use crate::driver::animation::{AnimationDriver, DriverState};
pub use crate::driver::headless::FrameStepper;
pub use crate::driver::layout::CanvasLayout;
pub use crate::driver::platform::{FrameRequestId, HeadlessPlatform, ListenerId, Platform};
pub use crate::encode::ffmpeg::{FfmpegCapability, FfmpegRecorder, is_ffmpeg_on_path};
pub use crate::encode::recorder::{
    CaptureCapability, NoCapture, Recorder, RecorderConfig, RecorderState,
};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{CpuCanvas, CpuCanvasOpts};
pub use crate::scene::composer::{DRAW_ORDER, DrawStage, compose_frame};
pub use crate::scene::entities::{AmbientParticle, PursuingActor, RandomSource};
pub use crate::scene::state::SceneState;
pub use crate::settings::ViewerSettings;
