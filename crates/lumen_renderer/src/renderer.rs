//! Progressive render loop.
//!
//! A [`RenderContext`] owns everything a frame needs: the scene, the camera,
//! settings, the accumulation buffer and the frame counter that drives the
//! random streams. Every call to [`RenderContext::render_frame`] adds one
//! sample per pixel and presents the running average.

use crate::accumulation::Accumulator;
use crate::integrator::{trace, DEFAULT_MAX_BOUNCES};
use crate::{AccumulationBuffer, Camera, Color, Jitter, RenderError, Scene};
use lumen_math::Interval;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Bytes per pixel in the presented framebuffer.
pub const BYTES_PER_PIXEL: usize = 3;

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Maximum surface interactions per camera ray
    pub max_bounces: u32,
    /// Camera ray perturbation per sample
    pub jitter: Jitter,
    /// Base seed for every per-row random stream
    pub seed: u64,
    /// Render rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_bounces: DEFAULT_MAX_BOUNCES,
            jitter: Jitter::Pixel,
            seed: 0,
            parallel: true,
        }
    }
}

/// Convert a linear color to 8-bit RGB, clamping each channel.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Seed for one row of one frame. Rows never share a stream, so results do
/// not depend on how rows are scheduled.
fn row_seed(seed: u64, frame: u64, row: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ (frame << 32) ^ row as u64
}

/// Everything needed to render progressive frames of one scene.
pub struct RenderContext {
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
    accumulation: AccumulationBuffer,
    frames_rendered: u64,
}

impl RenderContext {
    /// Create a context with an empty accumulation buffer sized to the camera.
    pub fn new(
        scene: Scene,
        camera: Camera,
        settings: RenderSettings,
    ) -> Result<Self, RenderError> {
        check_resolution(&camera)?;
        log::debug!(
            "Render context: {}x{}, {} primitives, {} max bounces",
            camera.image_width(),
            camera.image_height(),
            scene.len(),
            settings.max_bounces
        );

        let accumulation = AccumulationBuffer::new(camera.image_width(), camera.image_height());
        Ok(Self {
            scene,
            camera,
            settings,
            accumulation,
            frames_rendered: 0,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn accumulation(&self) -> &AccumulationBuffer {
        &self.accumulation
    }

    /// Frames accumulated since the last reset.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn width(&self) -> u32 {
        self.camera.image_width()
    }

    pub fn height(&self) -> u32 {
        self.camera.image_height()
    }

    /// Length in bytes of the framebuffer [`RenderContext::render_frame`] expects.
    pub fn framebuffer_len(&self) -> usize {
        self.accumulation.len() * BYTES_PER_PIXEL
    }

    /// Drop all accumulated samples.
    pub fn reset(&mut self) {
        log::debug!("Resetting accumulation after {} frames", self.frames_rendered);
        self.accumulation.reset();
        self.frames_rendered = 0;
    }

    /// Replace the scene and start accumulating from scratch.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.reset();
    }

    /// Replace the camera, resizing the accumulation buffer if needed.
    pub fn set_camera(&mut self, camera: Camera) -> Result<(), RenderError> {
        check_resolution(&camera)?;
        if camera.image_width() != self.accumulation.width()
            || camera.image_height() != self.accumulation.height()
        {
            self.accumulation =
                AccumulationBuffer::new(camera.image_width(), camera.image_height());
        }
        self.camera = camera;
        self.reset();
        Ok(())
    }

    /// Replace the settings and start accumulating from scratch.
    pub fn set_settings(&mut self, settings: RenderSettings) {
        self.settings = settings;
        self.reset();
    }

    /// Add one sample to every pixel and present the running average.
    pub fn render_frame(&mut self, framebuffer: &mut [u8]) -> Result<(), RenderError> {
        self.check_framebuffer(framebuffer)?;
        self.accumulate_frame();
        self.write_framebuffer(framebuffer)
    }

    /// Add one sample to every pixel without presenting.
    pub fn accumulate_frame(&mut self) {
        let width = self.camera.image_width() as usize;
        let camera = &self.camera;
        let scene = &self.scene;
        let settings = &self.settings;
        let frame = self.frames_rendered;

        let render_row = |(row, pixels): (usize, &mut [Accumulator])| {
            let mut rng = StdRng::seed_from_u64(row_seed(settings.seed, frame, row));
            for (x, pixel) in pixels.iter_mut().enumerate() {
                let ray = camera.get_ray(x as u32, row as u32, settings.jitter, &mut rng);
                let sample = trace(ray, scene, settings.max_bounces, &mut rng);
                pixel.add(sample.radiance);
            }
        };

        let pixels = self.accumulation.pixels_mut();
        if settings.parallel {
            pixels.par_chunks_mut(width).enumerate().for_each(render_row);
        } else {
            pixels.chunks_mut(width).enumerate().for_each(render_row);
        }

        self.frames_rendered += 1;
        log::trace!("Accumulated frame {}", self.frames_rendered);
    }

    /// Write the current per-pixel averages as packed RGB8, row-major.
    ///
    /// Pixels without samples are written black.
    pub fn write_framebuffer(&self, framebuffer: &mut [u8]) -> Result<(), RenderError> {
        self.check_framebuffer(framebuffer)?;

        for (rgb, pixel) in framebuffer
            .chunks_exact_mut(BYTES_PER_PIXEL)
            .zip(self.accumulation.pixels())
        {
            rgb.copy_from_slice(&color_to_rgb8(displayed_color(pixel)));
        }

        Ok(())
    }

    /// Snapshot of the current averages as an image.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width(), self.height(), |x, y| {
            let pixel = &self.accumulation.pixels()[self.accumulation.index(x, y)];
            image::Rgb(color_to_rgb8(displayed_color(pixel)))
        })
    }

    fn check_framebuffer(&self, framebuffer: &[u8]) -> Result<(), RenderError> {
        let expected = self.framebuffer_len();
        if framebuffer.len() != expected {
            return Err(RenderError::FramebufferSize {
                expected,
                actual: framebuffer.len(),
            });
        }
        Ok(())
    }
}

fn displayed_color(pixel: &Accumulator) -> Color {
    if pixel.count() > 0 {
        pixel.mean()
    } else {
        Color::ZERO
    }
}

fn check_resolution(camera: &Camera) -> Result<(), RenderError> {
    if camera.image_width() == 0 || camera.image_height() == 0 {
        return Err(RenderError::EmptyImage {
            width: camera.image_width(),
            height: camera.image_height(),
        });
    }
    Ok(())
}
