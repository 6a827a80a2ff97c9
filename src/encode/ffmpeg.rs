use crate::encode::recorder::{CaptureCapability, Recorder, RecorderConfig, RecorderState};
use crate::foundation::error::{ChaseError, ChaseResult};
use crate::foundation::math::mul_div255_u16;
use crate::render::backend::FrameRGBA;
use std::io::Read;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc;
use std::thread::JoinHandle;

const STDOUT_CHUNK_BYTES: usize = 64 * 1024;

/// Capture capability backed by the system `ffmpeg`.
#[derive(Clone, Copy, Debug)]
pub struct FfmpegCapability {
    available: bool,
}

impl FfmpegCapability {
    /// Probe `PATH` for a runnable `ffmpeg`.
    pub fn detect() -> Self {
        Self {
            available: is_ffmpeg_on_path(),
        }
    }
}

impl CaptureCapability for FfmpegCapability {
    fn is_available(&self) -> bool {
        self.available
    }

    fn open(&self, cfg: &RecorderConfig) -> ChaseResult<Box<dyn Recorder>> {
        Ok(Box::new(FfmpegRecorder::spawn(cfg)?))
    }
}

/// Recorder that pipes raw frames into `ffmpeg` and reads WebM/VP9 back from its stdout.
///
/// Stdout is drained on a thread into data chunks; stderr is drained on another so a chatty
/// encoder can never block on a full pipe.
pub struct FfmpegRecorder {
    cfg: RecorderConfig,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    chunks: mpsc::Receiver<Vec<u8>>,
    stdout_drain: Option<JoinHandle<std::io::Result<()>>>,
    stderr_drain: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
}

impl FfmpegRecorder {
    /// Validate `cfg` and start `ffmpeg`.
    pub fn spawn(cfg: &RecorderConfig) -> ChaseResult<Self> {
        cfg.validate()?;

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // Input: raw RGBA8, flattened to opaque before it reaches stdin.
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.canvas.width, cfg.canvas.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libvpx-vp9",
            "-pix_fmt",
            "yuv420p",
            "-deadline",
            "realtime",
            "-f",
            "webm",
            "pipe:1",
        ]);

        let mut child = cmd.spawn().map_err(|e| {
            ChaseError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| ChaseError::encode("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| ChaseError::encode("failed to open ffmpeg stdout (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| ChaseError::encode("failed to open ffmpeg stderr (unexpected)"))?;

        let (tx, chunks) = mpsc::channel();
        let stdout_drain = std::thread::spawn(move || {
            let mut buf = vec![0u8; STDOUT_CHUNK_BYTES];
            loop {
                let n = stdout.read(&mut buf)?;
                if n == 0 {
                    return Ok(());
                }
                if tx.send(buf[..n].to_vec()).is_err() {
                    return Ok(());
                }
            }
        });
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        tracing::debug!(
            width = cfg.canvas.width,
            height = cfg.canvas.height,
            "ffmpeg recorder started"
        );

        Ok(Self {
            scratch: vec![0u8; (cfg.canvas.width * cfg.canvas.height * 4) as usize],
            cfg: *cfg,
            child: Some(child),
            stdin: Some(stdin),
            chunks,
            stdout_drain: Some(stdout_drain),
            stderr_drain: Some(stderr_drain),
        })
    }
}

impl Recorder for FfmpegRecorder {
    fn state(&self) -> RecorderState {
        if self.child.is_some() {
            RecorderState::Recording
        } else {
            RecorderState::Inactive
        }
    }

    fn write_frame(&mut self, frame: &FrameRGBA) -> ChaseResult<()> {
        if frame.width != self.cfg.canvas.width || frame.height != self.cfg.canvas.height {
            return Err(ChaseError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.canvas.width, self.cfg.canvas.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(ChaseError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        flatten_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.cfg.bg_rgba,
        )?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(ChaseError::encode("ffmpeg recorder is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            ChaseError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn take_chunks(&mut self) -> Vec<Vec<u8>> {
        self.chunks.try_iter().collect()
    }

    fn stop(&mut self) -> ChaseResult<Vec<Vec<u8>>> {
        drop(self.stdin.take());
        let Some(mut child) = self.child.take() else {
            return Ok(Vec::new());
        };

        let status = child.wait().map_err(|e| {
            ChaseError::encode(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;
        if let Some(handle) = self.stdout_drain.take() {
            handle
                .join()
                .map_err(|_| ChaseError::encode("ffmpeg stdout drain thread panicked"))?
                .map_err(|e| ChaseError::encode(format!("ffmpeg stdout read failed: {e}")))?;
        }
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| ChaseError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| ChaseError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(ChaseError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        Ok(self.take_chunks())
    }
}

impl Drop for FfmpegRecorder {
    fn drop(&mut self) {
        if self.child.is_some() {
            drop(self.stdin.take());
            if let Some(mut child) = self.child.take() {
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

fn flatten_to_opaque_rgba8(
    dst: &mut [u8],
    src: &[u8],
    src_is_premul: bool,
    bg_rgba: [u8; 4],
) -> ChaseResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ChaseError::validation(
            "flatten_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - a;
        let (r, g, b) = if src_is_premul {
            (
                s[0] as u16 + mul_div255_u16(bg_r, inv),
                s[1] as u16 + mul_div255_u16(bg_g, inv),
                s[2] as u16 + mul_div255_u16(bg_b, inv),
            )
        } else {
            (
                mul_div255_u16(s[0] as u16, a) + mul_div255_u16(bg_r, inv),
                mul_div255_u16(s[1] as u16, a) + mul_div255_u16(bg_g, inv),
                mul_div255_u16(s[2] as u16, a) + mul_div255_u16(bg_b, inv),
            )
        };

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
