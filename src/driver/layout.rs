use crate::foundation::core::{Canvas, LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// Display and backing sizes of the scene canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanvasLayout {
    /// Display width (the container width).
    pub display_width: f64,
    /// Display height, keeping the 16:9 logical aspect.
    pub display_height: f64,
    /// Device pixel ratio the backing store was sized for.
    pub device_pixel_ratio: f64,
    /// Backing store in device pixels.
    pub backing: Canvas,
}

impl CanvasLayout {
    /// Size the canvas for a container of `container_width` on a `device_pixel_ratio` display.
    ///
    /// Non-finite or non-positive ratios fall back to 1.
    pub fn compute(container_width: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        let display_width = if container_width.is_finite() {
            container_width.max(0.0)
        } else {
            0.0
        };
        Self {
            display_width,
            display_height: display_width / LOGICAL_WIDTH * LOGICAL_HEIGHT,
            device_pixel_ratio: dpr,
            backing: Canvas {
                width: ((LOGICAL_WIDTH * dpr).floor() as u32).max(1),
                height: ((LOGICAL_HEIGHT * dpr).floor() as u32).max(1),
            },
        }
    }

    /// Uniform scale from logical units to backing pixels.
    pub fn scale(&self) -> f64 {
        self.device_pixel_ratio
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/layout.rs"]
mod tests;
