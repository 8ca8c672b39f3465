use crate::graphics::{CpuRenderer, Renderer2d};
use crate::surface::SurfaceSize;

use pixels::Pixels;

/// Windowed presenter built on `pixels`.
///
/// The pixel buffer stays at the logical canvas size; `pixels` scales it to whatever the window
/// surface currently is, so window resizes never touch game coordinates.
pub struct PixelsRenderer2d {
    pixels: Pixels,
    canvas: SurfaceSize,
}

impl PixelsRenderer2d {
    pub fn new(mut pixels: Pixels, canvas: SurfaceSize) -> Result<Self, pixels::Error> {
        pixels.resize_buffer(canvas.width, canvas.height)?;
        Ok(Self { pixels, canvas })
    }

    pub fn resize_window(&mut self, window: SurfaceSize) -> Result<(), pixels::Error> {
        if window.is_empty() {
            return Ok(());
        }
        self.pixels.resize_surface(window.width, window.height)?;
        Ok(())
    }

    pub fn draw_frame<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut dyn Renderer2d) -> R,
    {
        let mut cpu = CpuRenderer::new(self.pixels.frame_mut(), self.canvas);
        cpu.begin_frame(self.canvas);
        f(&mut cpu)
    }

    pub fn present(&mut self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }
}
