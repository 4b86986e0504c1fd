use nalgebra::{Point3, Vector3};

use crate::renderer::scene::Scene;

// 방향은 정규화되어 있지 않아도 됨. 이차방정식의 a 항이 길이를 처리함
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

// 빛의 경로에 대한 정보만 담음. 색은 적분기에서 계산
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPayload {
    // 음수면 아무것도 안 맞음
    pub distance: f32,
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
    pub object_index: usize,
}

impl HitPayload {
    pub const MISS_DISTANCE: f32 = -1.0;

    pub fn miss() -> Self {
        Self {
            distance: Self::MISS_DISTANCE,
            position: Point3::origin(),
            normal: Vector3::zeros(),
            object_index: 0,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.distance >= 0.0
    }
}

// 가속 구조 없이 모든 구를 확인함
pub fn trace_ray(ray: &Ray, scene: &Scene) -> HitPayload {
    let mut closest: Option<usize> = None;
    let mut hit_distance = f32::MAX;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        // a = 빔 시작, b = 빔 방향, r = 구 반지름, t = 빔이 구와 만날 때 그 빔 길이
        // (bx^2 + by^2 + bz^2) * t^2 + 2 * (a . b) * t + (a . a - r^2) = 0
        // 구가 원점에 있다고 가정한 식이라 빔 시작을 구 중심만큼 옮겨서 씀
        let origin = ray.origin - sphere.position;

        let a = ray.direction.magnitude_squared();
        let b = 2.0 * origin.dot(&ray.direction);
        let c = origin.magnitude_squared() - sphere.radius * sphere.radius;

        // 판별식
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            continue;
        }

        // 거리가 같으면 먼저 나온 구가 이김. 무한대 거리는 f32::MAX보다 작지 않으니 버려짐
        let distance = (-b - discriminant.sqrt()) / (2.0 * a);
        if distance > 0.0 && distance < hit_distance {
            hit_distance = distance;
            closest = Some(index);
        }
    }

    match closest {
        Some(index) => closest_hit(ray, hit_distance, index, scene),
        None => miss(ray),
    }
}

pub fn closest_hit(ray: &Ray, distance: f32, object_index: usize, scene: &Scene) -> HitPayload {
    let sphere = &scene.spheres[object_index];

    let origin = ray.origin - sphere.position;
    let local_position = origin + ray.direction * distance;
    let normal = local_position.normalize();

    HitPayload {
        distance,
        position: sphere.position + local_position,
        normal,
        object_index,
    }
}

pub fn miss(_ray: &Ray) -> HitPayload {
    HitPayload::miss()
}
