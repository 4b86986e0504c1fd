use nalgebra::{Vector3, Vector4};

use crate::camera::CameraView;
use crate::renderer::ray::{trace_ray, Ray};
use crate::renderer::scene::Scene;
use crate::util::{in_unit_sphere, mix, random_range, random_vec, reflect};

// 맞은 위치에서 바로 다시 쏘면 같은 구에 또 맞기 때문에 법선 방향으로 살짝 띄움
const SURFACE_OFFSET: f32 = 0.0001;

#[derive(Debug, Clone, Copy)]
pub struct PathIntegrator {
    pub bounces: u32,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self { bounces: 5 }
    }
}

impl PathIntegrator {
    pub fn new(bounces: u32) -> Self {
        Self { bounces }
    }

    // 시드 = (x + y * width) * frame_index, 바운스마다 바운스 번호를 더함
    pub fn per_pixel<C: CameraView + ?Sized>(
        &self,
        x: u32,
        y: u32,
        width: u32,
        camera: &C,
        scene: &Scene,
        frame_index: u32,
    ) -> Vector4<f32> {
        let index = x + y * width;

        let mut ray = Ray {
            origin: camera.position(),
            direction: camera.ray_directions()[index as usize],
        };

        let mut light = Vector3::zeros();
        let mut contribution = Vector3::repeat(1.0);

        let mut seed = index.wrapping_mul(frame_index);

        for bounce in 0..self.bounces {
            seed = seed.wrapping_add(bounce);

            let payload = trace_ray(&ray, scene);
            if !payload.is_hit() {
                let sky = scene.skybox.sample(&ray.direction);
                light += sky.xyz().component_mul(&contribution);
                break;
            }

            let sphere = &scene.spheres[payload.object_index];
            let material = &scene.materials[sphere.material_index];

            // contribution을 곱하지 않고 그대로 더함. 지금 이미지가 이 동작에 맞춰져 있음
            light += material.emission();

            ray.origin = payload.position + payload.normal * SURFACE_OFFSET;

            let specular = reflect(
                &ray.direction,
                &(payload.normal + random_vec(-0.5, 0.5, &mut seed) * material.roughness),
            );
            let diffuse = (payload.normal + in_unit_sphere(&mut seed)).normalize();

            // 0 아니면 1
            let is_specular =
                (material.specular_probability >= random_range(0.0, 1.0, &mut seed)) as u8 as f32;

            ray.direction = mix(&diffuse, &specular, material.metallic * is_specular).normalize();
            contribution.component_mul_assign(&mix(
                &material.albedo,
                &material.specular_color,
                is_specular,
            ));
        }

        Vector4::new(light.x, light.y, light.z, 1.0)
    }
}
