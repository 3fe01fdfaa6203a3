//! Render driver and output surface.
//!
//! Walks the camera's region of the output surface one pixel at a time,
//! shading a primary ray per pixel. Single-threaded; pixels are visited
//! column by column.

use std::path::Path;
use std::time::{Duration, Instant};

use prism_core::Rgb;
use rand::RngCore;

use crate::{Camera, RenderResult, Tracer};

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Rgb>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    /// Reset every pixel to black.
    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    /// Raw RGB bytes, row-major, three per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Convert to an opaque RGBA image.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let Rgb { r, g, b } = self.get(x, y);
            image::Rgba([r, g, b, 255])
        })
    }

    /// Encode the buffer as PNG at `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Summary of a finished render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStats {
    /// Pixels shaded
    pub pixels: u64,
    pub elapsed: Duration,
}

/// Shade the primary ray through pixel `(x, y)` of a `width` x `height`
/// surface.
pub fn render_pixel(
    tracer: &Tracer<'_>,
    camera: &Camera,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    rng: &mut dyn RngCore,
) -> Rgb {
    let ray = camera.primary_ray(x, y, width, height);
    tracer.shade_for(camera, &ray, tracer.config().max_depth, rng)
}

/// Render the camera's region of `image`.
///
/// The image is cleared first, so pixels outside the region end up black.
/// `progress` is called after every pixel with the completed fraction and
/// the time spent so far.
pub fn render(
    tracer: &Tracer<'_>,
    camera: &Camera,
    image: &mut ImageBuffer,
    rng: &mut dyn RngCore,
    mut progress: Option<&mut dyn FnMut(f32, Duration)>,
) -> RenderStats {
    let start = Instant::now();
    let (width, height) = (image.width, image.height);
    let (columns, rows) = camera.region(width, height);
    let total = columns.len() as u64 * rows.len() as u64;

    log::info!(
        "Rendering {}x{} region of {}x{} image (max depth {})",
        columns.len(),
        rows.len(),
        width,
        height,
        tracer.config().max_depth
    );

    image.clear();

    let mut done = 0u64;
    for x in columns {
        for y in rows.clone() {
            let color = render_pixel(tracer, camera, x, y, width, height, rng);
            image.set(x, y, color);

            done += 1;
            if let Some(callback) = progress.as_deref_mut() {
                callback(done as f32 / total as f32, start.elapsed());
            }
        }
    }

    let elapsed = start.elapsed();
    log::info!("Rendered {} pixels in {:.2?}", done, elapsed);

    RenderStats {
        pixels: done,
        elapsed,
    }
}
