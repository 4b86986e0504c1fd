use nalgebra::Vector4;
use rayon::prelude::*;

use crate::camera::CameraView;
use crate::error::{Error, Result};
use crate::renderer::frame::commit;
use crate::renderer::integrator::PathIntegrator;
use crate::renderer::scene::Scene;
use crate::surface::DisplaySurface;

pub use frame::FrameBuffer;

mod frame;
pub mod integrator;
pub mod ray;
pub mod scene;
pub mod skybox;

#[derive(Debug, Clone)]
pub struct Settings {
    // 끄면 매 프레임 새로 시작함
    pub accumulate: bool,
    pub multithreaded: bool,
    pub bounces: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            accumulate: true,
            multithreaded: true,
            bounces: 5,
        }
    }
}

pub struct Renderer {
    frame: FrameBuffer,
    pub settings: Settings,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        log::info!("Creating renderer for a {}x{} viewport", width, height);

        Self {
            frame: FrameBuffer::new(width, height),
            settings: Default::default(),
        }
    }

    pub fn with_settings(width: u32, height: u32, settings: Settings) -> Self {
        Self {
            settings,
            ..Self::new(width, height)
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.frame.resize(width, height);
    }

    // 카메라가 움직이거나 장면이 바뀌면 호출해야 함
    pub fn reset_frame_index(&mut self) {
        log::debug!(
            "Resetting accumulation at frame {}",
            self.frame.frame_index()
        );
        self.frame.reset_frame_index();
    }

    pub fn frame_index(&self) -> u32 {
        self.frame.frame_index()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn image(&self) -> &[u32] {
        self.frame.image()
    }

    // 픽셀마다 자기 칸만 건드리니 잠금 없이 행 단위로 병렬 처리함.
    // 장면 수정은 프레임 사이에서만
    pub fn render<C, S>(&mut self, scene: &Scene, camera: &C, surface: &mut S) -> Result<()>
    where
        C: CameraView + Sync + ?Sized,
        S: DisplaySurface + ?Sized,
    {
        let expected = self.frame.pixel_count();
        let actual = camera.ray_directions().len();
        if expected != actual {
            return Err(Error::ViewportMismatch { expected, actual });
        }

        let width = self.frame.width();
        let height = self.frame.height();

        self.frame.begin_frame();

        if expected > 0 {
            let frame_index = self.frame.frame_index();
            let integrator = PathIntegrator::new(self.settings.bounces);
            let (accumulation, image) = self.frame.slots_mut();

            let render_row = |(y, (sums, pixels)): (usize, (&mut [Vector4<f32>], &mut [u32]))| {
                for (x, (sum, pixel)) in sums.iter_mut().zip(pixels.iter_mut()).enumerate() {
                    let color =
                        integrator.per_pixel(x as u32, y as u32, width, camera, scene, frame_index);
                    commit(sum, pixel, &color, frame_index);
                }
            };

            let row = width as usize;
            if self.settings.multithreaded {
                accumulation
                    .par_chunks_mut(row)
                    .zip(image.par_chunks_mut(row))
                    .enumerate()
                    .for_each(render_row);
            } else {
                accumulation
                    .chunks_mut(row)
                    .zip(image.chunks_mut(row))
                    .enumerate()
                    .for_each(render_row);
            }

            surface.present(width, height, self.frame.image());
        }

        log::trace!("Frame {} done", self.frame.frame_index());
        self.frame.end_frame(self.settings.accumulate);

        Ok(())
    }
}
