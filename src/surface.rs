use std::path::Path;

use bytemuck::cast_slice;
use image::RgbaImage;

use crate::error::{Error, Result};

// 완성된 프레임을 받아서 보여주는 쪽. 창이든 파일이든 상관 없음
pub trait DisplaySurface {
    fn present(&mut self, width: u32, height: u32, pixels: &[u32]);
}

// 마지막으로 받은 프레임만 들고 있음
#[derive(Debug, Default)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    presented: u32,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    // 지금까지 present가 불린 횟수
    pub fn presented(&self) -> u32 {
        self.presented
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        // 빨강이 최하위 바이트라 리틀 엔디언에서는 그대로 RGBA 바이트가 됨
        let bytes: Vec<u8> = if cfg!(target_endian = "little") {
            cast_slice::<u32, u8>(self.pixels.as_slice()).to_vec()
        } else {
            self.pixels.iter().flat_map(|pixel| pixel.to_le_bytes()).collect()
        };
        let len = bytes.len();

        let image = RgbaImage::from_raw(self.width, self.height, bytes).ok_or(Error::InvalidImage {
            width: self.width,
            height: self.height,
            len,
        })?;
        image.save(&path)?;

        log::info!("Saved {}x{} frame to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}

impl DisplaySurface for MemorySurface {
    fn present(&mut self, width: u32, height: u32, pixels: &[u32]) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplaySurface, MemorySurface};

    #[test]
    fn present_keeps_latest_frame() {
        let mut surface = MemorySurface::new();
        surface.present(2, 1, &[1, 2]);
        surface.present(1, 1, &[3]);

        assert_eq!(surface.size(), (1, 1));
        assert_eq!(surface.pixels(), &[3]);
        assert_eq!(surface.presented(), 2);
    }

    #[test]
    fn save_png_writes_rgba_bytes() {
        let mut surface = MemorySurface::new();
        surface.present(2, 1, &[0xFF0000FF, 0x80FF0000]);

        let path = std::env::temp_dir().join(format!("lumen-surface-{}.png", std::process::id()));
        surface.save_png(&path).unwrap();

        let saved = image::open(&path).unwrap().into_rgba8();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(saved.dimensions(), (2, 1));
        assert_eq!(saved.get_pixel(0, 0).0, [0xFF, 0x00, 0x00, 0xFF]);
        assert_eq!(saved.get_pixel(1, 0).0, [0x00, 0x00, 0xFF, 0x80]);
    }
}
