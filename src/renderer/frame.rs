use nalgebra::Vector4;

use crate::color::vec4_to_rgba;

// 누적 버퍼와 화면 버퍼는 언제나 현재 뷰포트 크기와 같음
pub struct FrameBuffer {
    width: u32,
    height: u32,
    // HDR 범위 그대로 더해 나감
    accumulation: Vec<Vector4<f32>>,
    image: Vec<u32>,
    frame_index: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = width as usize * height as usize;

        Self {
            width,
            height,
            accumulation: vec![Vector4::zeros(); pixels],
            image: vec![0; pixels],
            frame_index: 1,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }

        log::debug!(
            "Resizing frame buffer from {}x{} to {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        // 크기가 바뀌면 이전 누적값은 의미가 없으니 세션도 새로 시작
        *self = Self::new(width, height);
    }

    // frame_index가 1이면 새 세션. 이전 누적값을 버림
    pub fn begin_frame(&mut self) {
        if self.frame_index == 1 {
            self.accumulation.fill(Vector4::zeros());
        }
    }

    pub fn commit_pixel(&mut self, x: u32, y: u32, color: &Vector4<f32>) {
        let index = (x + y * self.width) as usize;
        commit(
            &mut self.accumulation[index],
            &mut self.image[index],
            color,
            self.frame_index,
        );
    }

    pub fn end_frame(&mut self, accumulate: bool) {
        if accumulate {
            self.frame_index += 1;
        } else {
            self.frame_index = 1;
        }
    }

    pub fn reset_frame_index(&mut self) {
        self.frame_index = 1;
    }

    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.image.len()
    }

    pub fn image(&self) -> &[u32] {
        &self.image
    }

    pub fn accumulation(&self) -> &[Vector4<f32>] {
        &self.accumulation
    }

    // 픽셀마다 겹치지 않는 칸을 나눠 주기 위해 두 버퍼를 동시에 빌려줌
    pub(crate) fn slots_mut(&mut self) -> (&mut [Vector4<f32>], &mut [u32]) {
        (&mut self.accumulation, &mut self.image)
    }
}

// 픽셀 하나의 누적과 화면 값 갱신. 다른 픽셀과 공유하는 상태가 없음
pub(crate) fn commit(
    accumulated: &mut Vector4<f32>,
    pixel: &mut u32,
    color: &Vector4<f32>,
    frame_index: u32,
) {
    *accumulated += color;

    let estimate = (*accumulated / frame_index as f32).map(|channel| channel.clamp(0.0, 1.0));
    *pixel = vec4_to_rgba(&estimate);
}
