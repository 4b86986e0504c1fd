use std::ops::Add;

use nalgebra::{Isometry3, Perspective3, Point3, Unit, Vector3};
use rayon::prelude::*;

// 렌더러가 카메라에게 바라는 것은 이 두 가지뿐
pub trait CameraView {
    fn position(&self) -> Point3<f32>;

    /// 픽셀마다 하나씩, `x + y * width` 순서로 저장된 광선 방향
    fn ray_directions(&self) -> &[Vector3<f32>];
}

pub struct Camera {
    projection: Perspective3<f32>,
    view: Isometry3<f32>,

    vertical_fov: f32,
    near: f32,
    far: f32,

    position: Point3<f32>,
    forward: Unit<Vector3<f32>>,

    rays: Vec<Vector3<f32>>,

    viewport_size: (u32, u32),
}

impl Camera {
    pub fn new(vertical_fov: f32, near: f32, far: f32, width: u32, height: u32) -> Self {
        let viewport_size = (width, height);
        let projection = Perspective3::new(aspect_of(viewport_size), vertical_fov, near, far);
        let position = Point3::new(0.0, 0.0, 6.0);
        let forward = Unit::new_unchecked(-Vector3::z());
        let target = position.add(forward.into_inner());
        let view = Isometry3::look_at_rh(&position, &target, &Vector3::y_axis());

        let mut to_return = Self {
            projection,
            view,
            vertical_fov,
            near,
            far,
            position,
            forward,
            rays: vec![],
            viewport_size,
        };

        to_return.reevaluate_rays();

        to_return
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.viewport_size == (width, height) {
            return;
        }
        self.viewport_size = (width, height);

        self.reevaluate_projection();
        self.reevaluate_rays();
    }

    pub fn set_position(&mut self, position: Point3<f32>) {
        self.position = position;

        self.reevaluate_view();
        self.reevaluate_rays();
    }

    // 카메라 위치에서 target을 바라보게 함. 같은 점이면 방향은 그대로
    pub fn look_at(&mut self, target: Point3<f32>) {
        let Some(forward) = Unit::try_new(target - self.position, f32::EPSILON) else {
            return;
        };
        self.forward = forward;

        self.reevaluate_view();
        self.reevaluate_rays();
    }

    pub fn forward(&self) -> Unit<Vector3<f32>> {
        self.forward
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        self.viewport_size
    }

    fn reevaluate_projection(&mut self) {
        self.projection = Perspective3::new(
            aspect_of(self.viewport_size),
            self.vertical_fov,
            self.near,
            self.far,
        );
    }

    fn reevaluate_view(&mut self) {
        let point = self.position.add(self.forward.into_inner());
        self.view = Isometry3::look_at_rh(&self.position, &point, &Vector3::y_axis());
    }

    fn reevaluate_rays(&mut self) {
        let (width, height) = self.viewport_size;
        let projection = &self.projection;
        let view = &self.view;

        let rays = (0..width * height)
            .into_par_iter()
            .map(|index| {
                let y = index / width;
                let x = index % width;

                // 픽셀 중심을 NDC로. (0, 0) 픽셀이 왼쪽 위
                let ndc = Point3::new(
                    (x as f32 + 0.5) / width as f32 * 2.0 - 1.0,
                    1.0 - (y as f32 + 0.5) / height as f32 * 2.0,
                    1.0,
                );

                let target = projection.unproject_point(&ndc);
                view.inverse_transform_vector(&target.coords.normalize())
            })
            .collect();

        self.rays = rays;
    }
}

impl CameraView for Camera {
    fn position(&self) -> Point3<f32> {
        self.position
    }

    fn ray_directions(&self) -> &[Vector3<f32>] {
        &self.rays
    }
}

// 창이 최소화되면 0이 들어올 수 있음
fn aspect_of((width, height): (u32, u32)) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}
