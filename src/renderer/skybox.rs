use std::f32::consts::PI;
use std::path::Path;

use image::io::Reader;
use nalgebra::{Vector3, Vector4};

use crate::color::{argb_to_vec4, rgba_bytes_to_argb};
use crate::error::{Error, Result};

// 스카이박스가 없을 때 하늘색
pub const FALLBACK_SKY_COLOR: [f32; 4] = [0.6, 0.7, 0.9, 1.0];

#[derive(Debug, Clone, Default)]
pub struct Skybox {
    pub width: u32,
    pub height: u32,
    // 행 우선, A<<24 | R<<16 | G<<8 | B
    pub data: Vec<u32>,
    pub loaded: bool,
}

impl Skybox {
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if expected == 0 || rgba.len() != expected {
            return Err(Error::InvalidImage {
                width,
                height,
                len: rgba.len(),
            });
        }

        let data = rgba
            .chunks_exact(4)
            .map(|pixel| rgba_bytes_to_argb([pixel[0], pixel[1], pixel[2], pixel[3]]))
            .collect();

        Ok(Self {
            width,
            height,
            data,
            loaded: true,
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading skybox from {}", path.display());

        let decoded = Reader::open(path)?.with_guessed_format()?.decode()?.into_rgba8();
        let (width, height) = decoded.dimensions();
        let skybox = Self::from_rgba(width, height, decoded.as_raw())?;

        log::info!("Skybox loaded, width = {}, height = {}", width, height);
        Ok(skybox)
    }

    // 불러오기에 실패해도 렌더링은 계속함. 기본 하늘색으로 대체
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(&path) {
            Ok(skybox) => skybox,
            Err(error) => {
                log::warn!(
                    "Failed to load skybox {}: {}. Falling back to the default sky color",
                    path.as_ref().display(),
                    error
                );
                Self::default()
            }
        }
    }

    // 등장방형(equirectangular) 매핑
    pub fn sample(&self, direction: &Vector3<f32>) -> Vector4<f32> {
        // 필드를 직접 채운 경우도 있으니 크기가 안 맞으면 안 불러온 것으로 봄
        let pixels = self.width as usize * self.height as usize;
        if !self.loaded || pixels == 0 || self.data.len() < pixels {
            return Vector4::from(FALLBACK_SKY_COLOR);
        }

        let direction = direction.normalize();
        let u = 0.5 + direction.z.atan2(direction.x) / (2.0 * PI);
        let v = 0.5 - direction.y.asin() / PI;

        let x = ((u * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as usize;
        let y = ((v * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as usize;

        argb_to_vec4(self.data[x + y * self.width as usize])
    }
}
