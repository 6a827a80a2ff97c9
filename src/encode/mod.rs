//! Clip encoding.
//!
//! A [`recorder::Recorder`] consumes rendered frames and emits encoded data chunks that the
//! capture controller accumulates into a single clip.

/// `ffmpeg`-based WebM/VP9 recorder (system `ffmpeg`).
pub mod ffmpeg;
/// Recorder contract.
pub mod recorder;
