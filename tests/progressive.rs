use nalgebra::{Point3, Vector3, Vector4};

use lumen::color::vec4_to_rgba;
use lumen::renderer::skybox::FALLBACK_SKY_COLOR;
use lumen::{Camera, CameraView, Material, MemorySurface, Renderer, Scene, Skybox, Sphere};

fn glowing_sphere_scene() -> Scene {
    let mut scene = Scene::default();
    let glow = scene.add_material(Material {
        roughness: 0.0,
        metallic: 0.0,
        emission_color: Vector3::repeat(1.0),
        emission_power: 1.0,
        ..Default::default()
    });
    scene.spheres.push(Sphere {
        position: Point3::origin(),
        radius: 1.0,
        material_index: glow,
    });
    scene
}

fn camera(width: u32, height: u32) -> Camera {
    // 기본 위치 (0, 0, 6)에서 -z 방향
    Camera::new(45f32.to_radians(), 0.1, 100.0, width, height)
}

#[test]
fn glowing_sphere_saturates_center_and_sky_fills_corners() {
    let scene = glowing_sphere_scene();
    let camera = camera(3, 3);
    let mut renderer = Renderer::new(3, 3);
    let mut surface = MemorySurface::new();

    renderer.render(&scene, &camera, &mut surface).unwrap();

    let sky = vec4_to_rgba(&Vector4::from(FALLBACK_SKY_COLOR));
    assert_eq!(surface.size(), (3, 3));
    assert_eq!(surface.pixels()[4], 0xFFFFFFFF);
    for corner in [0, 2, 6, 8] {
        assert_eq!(surface.pixels()[corner], sky);
    }
}

#[test]
fn loaded_skybox_colors_misses() {
    let mut scene = glowing_sphere_scene();
    let magenta: Vec<u8> = (0..4 * 2).flat_map(|_| [255, 0, 255, 255]).collect();
    scene.skybox = Skybox::from_rgba(4, 2, &magenta).unwrap();

    let camera = camera(3, 3);
    let mut renderer = Renderer::new(3, 3);
    let mut surface = MemorySurface::new();
    renderer.render(&scene, &camera, &mut surface).unwrap();

    assert_eq!(surface.pixels()[0], 0xFFFF00FF);
}

#[test]
fn moving_camera_restarts_accumulation() {
    let mut scene = glowing_sphere_scene();
    let ground = scene.add_material(Material {
        albedo: Vector3::new(0.2, 0.3, 1.0),
        roughness: 0.1,
        ..Default::default()
    });
    scene.spheres.push(Sphere {
        position: Point3::new(0.0, -101.0, 0.0),
        radius: 100.0,
        material_index: ground,
    });

    let mut camera = camera(8, 6);
    let mut renderer = Renderer::new(8, 6);
    let mut surface = MemorySurface::new();
    for _ in 0..5 {
        renderer.render(&scene, &camera, &mut surface).unwrap();
    }
    assert_eq!(renderer.frame_index(), 6);

    camera.set_position(Point3::new(1.0, 2.0, 6.0));
    camera.look_at(Point3::origin());
    renderer.reset_frame_index();
    renderer.render(&scene, &camera, &mut surface).unwrap();

    let mut fresh = Renderer::new(8, 6);
    let mut fresh_surface = MemorySurface::new();
    fresh.render(&scene, &camera, &mut fresh_surface).unwrap();

    assert_eq!(surface.pixels(), fresh_surface.pixels());
    assert_eq!(renderer.frame_index(), 2);
}

#[test]
fn resizing_both_sides_keeps_buffers_in_step() {
    let scene = glowing_sphere_scene();
    let mut camera = camera(4, 4);
    let mut renderer = Renderer::new(4, 4);
    let mut surface = MemorySurface::new();
    renderer.render(&scene, &camera, &mut surface).unwrap();

    camera.resize(6, 2);
    assert!(renderer.render(&scene, &camera, &mut surface).is_err());

    renderer.resize(6, 2);
    renderer.render(&scene, &camera, &mut surface).unwrap();
    assert_eq!(surface.size(), (6, 2));
    assert_eq!(surface.pixels().len(), camera.ray_directions().len());
}
