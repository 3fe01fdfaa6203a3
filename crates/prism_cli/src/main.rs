// Render a scene description to PNG.
// Run with: cargo run --release -- [scene.json] [output.png]

mod demo;

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use prism_core::SceneDescription;
use prism_math::{IVec2, Vec3};
use prism_tracer::{render, Camera, ImageBuffer, RenderConfig, Tracer};

const DEFAULT_OUTPUT: &str = "prism.png";

/// Build the camera described by `description`, defaulting the region to the
/// whole image.
fn camera_for(description: &SceneDescription) -> Result<Camera> {
    let image = &description.image;
    let view = &description.camera;

    let upper_left = view.upper_left.map(IVec2::from_array).unwrap_or(IVec2::ZERO);
    let bottom_right = view
        .bottom_right
        .map(IVec2::from_array)
        .unwrap_or_else(|| IVec2::new(image.width as i32, image.height as i32));

    let camera = Camera::new(Vec3::from_array(view.eye), upper_left, bottom_right)
        .context("Invalid camera")?
        .with_diffuse_sampling(view.diffuse_sampling);
    Ok(camera)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let output = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT);

    let description = match args.get(1) {
        Some(path) => {
            log::info!("Loading scene: {}", path);
            SceneDescription::load(path).with_context(|| format!("Failed to load {}", path))?
        }
        None => {
            log::info!("No scene given, rendering built-in demo");
            demo::scene()?
        }
    };

    let scene = description.build_scene().context("Invalid scene")?;
    let camera = camera_for(&description)?;

    let mut config = RenderConfig::default();
    if let Some(max_depth) = description.camera.max_depth {
        config.max_depth = max_depth;
    }
    let tracer = Tracer::new(&scene, &camera).with_config(config);

    let mut image = ImageBuffer::new(description.image.width, description.image.height);
    let mut rng = rand::thread_rng();

    let mut next_report = 0.1;
    let mut report = |fraction: f32, elapsed: Duration| {
        if fraction >= next_report {
            log::info!("{:>3.0}% ({:.1?})", fraction * 100.0, elapsed);
            while next_report <= fraction {
                next_report += 0.1;
            }
        }
    };

    let stats = render(&tracer, &camera, &mut image, &mut rng, Some(&mut report));
    log::info!("Done: {} pixels in {:.2?}", stats.pixels, stats.elapsed);

    image
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_defaults_to_full_image() {
        let description = demo::scene().unwrap();
        let camera = camera_for(&description).unwrap();

        assert_eq!(camera.upper_left(), IVec2::ZERO);
        assert_eq!(camera.bottom_right(), IVec2::new(640, 480));
        assert_eq!(camera.eye(), Vec3::new(0.0, 0.0, -600.0));
    }

    #[test]
    fn test_camera_uses_explicit_region() {
        let mut description = demo::scene().unwrap();
        description.camera.upper_left = Some([10, 20]);
        description.camera.bottom_right = Some([30, 40]);
        description.camera.diffuse_sampling = true;

        let camera = camera_for(&description).unwrap();
        assert_eq!(camera.region(640, 480), (10..30, 20..40));
        assert!(camera.diffuse_sampling());
    }

    #[test]
    fn test_camera_rejects_zero_depth_eye() {
        let mut description = demo::scene().unwrap();
        description.camera.eye = [0.0, 0.0, 0.0];

        assert!(camera_for(&description).is_err());
    }
}
