use nalgebra::{Point3, Vector3};

use crate::renderer::skybox::Skybox;

// 구는 재질을 인덱스로만 가리킴. 재질을 복사하지 않고 여러 구가 같이 씀
#[derive(Debug, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub materials: Vec<Material>,
    pub skybox: Skybox,
}

impl Scene {
    pub fn add_material(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub position: Point3<f32>,
    pub radius: f32,
    pub material_index: usize,
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            radius: 0.5,
            material_index: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub albedo: Vector3<f32>,
    pub roughness: f32,
    pub metallic: f32,
    pub emission_color: Vector3<f32>,
    pub emission_power: f32,
    pub specular_color: Vector3<f32>,
    // 정반사를 고를 확률
    pub specular_probability: f32,
}

impl Material {
    pub fn emission(&self) -> Vector3<f32> {
        self.emission_color * self.emission_power
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            albedo: Vector3::repeat(1.0),
            roughness: 1.0,
            metallic: 0.0,
            emission_color: Vector3::zeros(),
            emission_power: 0.0,
            specular_color: Vector3::repeat(1.0),
            specular_probability: 0.0,
        }
    }
}
