use crate::graphics::{Color, CpuRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel size of a `cols x rows` block grid drawn at `block_size` pixels per cell.
    ///
    /// Saturates at `u32::MAX` instead of wrapping.
    pub const fn for_blocks(cols: usize, rows: usize, block_size: u32) -> Self {
        Self {
            width: clamp_u32(cols).saturating_mul(block_size),
            height: clamp_u32(rows).saturating_mul(block_size),
        }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

const fn clamp_u32(n: usize) -> u32 {
    if n > u32::MAX as usize {
        u32::MAX
    } else {
        n as u32
    }
}

/// Something that owns an RGBA frame.
///
/// Windowed and offscreen runs both go through this, so game code never needs to know which one
/// it is painting into.
pub trait Surface {
    fn size(&self) -> SurfaceSize;
    fn frame_mut(&mut self) -> &mut [u8];

    fn renderer(&mut self) -> CpuRenderer<'_> {
        let size = self.size();
        CpuRenderer::new(self.frame_mut(), size)
    }
}

/// In-memory RGBA surface for headless execution and tests.
#[derive(Debug, Clone)]
pub struct RgbaBufferSurface {
    size: SurfaceSize,
    buf: Vec<u8>,
}

impl RgbaBufferSurface {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            buf: vec![0u8; size.rgba_len()],
        }
    }

    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    /// Out-of-bounds reads return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = ((y as usize) * (self.size.width as usize) + x as usize) * 4;
        let px = self.buf.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl Surface for RgbaBufferSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn frame_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{Rect, Renderer2d};

    #[test]
    fn block_surface_size_scales_by_block() {
        let size = SurfaceSize::for_blocks(5, 12, 30);
        assert_eq!(size, SurfaceSize::new(150, 360));
        assert_eq!(size.rgba_len(), 150 * 360 * 4);
        assert!(!size.is_empty());
        assert!(SurfaceSize::new(0, 10).is_empty());
    }

    #[test]
    fn block_surface_size_saturates() {
        let size = SurfaceSize::for_blocks(5, 12, 2_000_000_000);
        assert_eq!(size, SurfaceSize::new(u32::MAX, u32::MAX));
        assert_eq!(SurfaceSize::for_blocks(usize::MAX, 1, 1).width, u32::MAX);
    }

    #[test]
    fn renderer_writes_into_buffer() {
        let mut surface = RgbaBufferSurface::new(SurfaceSize::new(4, 4));
        surface
            .renderer()
            .fill_rect(Rect::new(1, 1, 2, 2), [9, 8, 7, 255]);

        assert_eq!(surface.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(1, 1), Some([9, 8, 7, 255]));
        assert_eq!(surface.pixel(2, 2), Some([9, 8, 7, 255]));
        assert_eq!(surface.pixel(3, 3), Some([0, 0, 0, 0]));
        assert_eq!(surface.pixel(4, 0), None);
    }
}
