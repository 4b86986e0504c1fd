use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use nalgebra::{Point3, Vector3};

use lumen::{Camera, Material, MemorySurface, Renderer, Scene, Settings, Skybox, Sphere};

#[derive(Debug, Parser)]
#[command(name = "lumen", about = "Progressive CPU path tracer")]
struct Args {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 360)]
    height: u32,

    // 누적할 프레임 수
    #[arg(long, default_value_t = 64)]
    frames: u32,

    #[arg(long, short, default_value = "render.png")]
    output: PathBuf,

    // 등장방형 스카이박스 이미지. 없거나 못 읽으면 기본 하늘색
    #[arg(long)]
    skybox: Option<PathBuf>,

    #[arg(long, default_value_t = 5)]
    bounces: u32,

    // 세로 시야각 (도)
    #[arg(long, default_value_t = 45.0)]
    fov: f32,

    #[arg(long)]
    no_accumulate: bool,

    #[arg(long)]
    single_threaded: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut scene = demo_scene();
    if let Some(path) = &args.skybox {
        scene.skybox = Skybox::load_or_default(path);
    }

    let mut camera = Camera::new(args.fov.to_radians(), 0.1, 100.0, args.width, args.height);
    camera.set_position(Point3::new(0.0, 1.0, 6.0));
    camera.look_at(Point3::new(0.0, 0.0, 0.0));

    let settings = Settings {
        accumulate: !args.no_accumulate,
        multithreaded: !args.single_threaded,
        bounces: args.bounces,
    };
    let mut renderer = Renderer::with_settings(args.width, args.height, settings);
    let mut surface = MemorySurface::new();

    let started = Instant::now();
    for frame in 1..=args.frames {
        let frame_started = Instant::now();
        renderer
            .render(&scene, &camera, &mut surface)
            .with_context(|| format!("failed to render frame {}", frame))?;

        if frame == 1 || frame % 16 == 0 || frame == args.frames {
            log::info!(
                "Frame {}/{} in {} ms",
                frame,
                args.frames,
                frame_started.elapsed().as_millis()
            );
        }
    }
    log::info!(
        "Rendered {} frames in {:.2} s",
        args.frames,
        started.elapsed().as_secs_f32()
    );

    surface
        .save_png(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}

fn demo_scene() -> Scene {
    let mut scene = Scene::default();

    let pink = scene.add_material(Material {
        albedo: Vector3::new(1.0, 0.0, 1.0),
        roughness: 0.0,
        ..Default::default()
    });
    let ground = scene.add_material(Material {
        albedo: Vector3::new(0.2, 0.3, 1.0),
        roughness: 0.1,
        ..Default::default()
    });
    let sun = scene.add_material(Material {
        albedo: Vector3::new(0.8, 0.5, 0.2),
        roughness: 0.1,
        emission_color: Vector3::new(0.8, 0.5, 0.2),
        emission_power: 2.0,
        ..Default::default()
    });
    let mirror = scene.add_material(Material {
        albedo: Vector3::new(0.9, 0.9, 0.9),
        roughness: 0.05,
        metallic: 1.0,
        specular_color: Vector3::new(0.95, 0.95, 0.95),
        specular_probability: 0.8,
        ..Default::default()
    });

    scene.spheres = vec![
        Sphere {
            position: Point3::new(0.0, 0.0, 0.0),
            radius: 1.0,
            material_index: pink,
        },
        Sphere {
            position: Point3::new(2.0, 0.0, 0.0),
            radius: 1.0,
            material_index: sun,
        },
        Sphere {
            position: Point3::new(-2.0, 0.0, 0.0),
            radius: 1.0,
            material_index: mirror,
        },
        Sphere {
            position: Point3::new(0.0, -101.0, 0.0),
            radius: 100.0,
            material_index: ground,
        },
    ];

    scene
}
