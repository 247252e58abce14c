//! Canvas sizing

use game_core::Viewport;

/// Highest device pixel ratio the backing store is scaled by
pub const MAX_DPR: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub css_width: f64,
    pub css_height: f64,
    pub dpr: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl CanvasSize {
    pub fn compute(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Self {
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio.min(MAX_DPR)
        } else {
            1.0
        };
        let css_width = css_width.max(0.0);
        let css_height = css_height.max(0.0);

        Self {
            css_width,
            css_height,
            dpr,
            backing_width: (css_width * dpr).floor() as u32,
            backing_height: (css_height * dpr).floor() as u32,
        }
    }

    /// Game geometry is laid out in CSS pixels
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.css_width as f32, self.css_height as f32)
    }

    pub fn is_empty(&self) -> bool {
        self.backing_width == 0 || self.backing_height == 0
    }
}

#[cfg(target_arch = "wasm32")]
pub fn fit(window: &web_sys::Window, canvas: &web_sys::HtmlCanvasElement) -> CanvasSize {
    let css_width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let css_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let size = CanvasSize::compute(css_width, css_height, window.device_pixel_ratio());
    canvas.set_width(size.backing_width);
    canvas.set_height(size.backing_height);
    size
}
