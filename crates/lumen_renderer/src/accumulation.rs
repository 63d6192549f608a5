//! Progressive accumulation of per-pixel radiance samples.
//!
//! Each pixel keeps a running sum and a sample count; the displayed value is
//! their ratio, a cumulative moving average of every frame rendered since the
//! last reset.

use crate::Color;

/// Running radiance sum for one pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    sum: Color,
    count: u32,
}

impl Accumulator {
    /// Merge one sample.
    #[inline]
    pub fn add(&mut self, sample: Color) {
        self.sum += sample;
        self.count += 1;
    }

    /// Mean of all samples so far.
    ///
    /// Must not be called before the first [`Accumulator::add`].
    #[inline]
    pub fn mean(&self) -> Color {
        debug_assert!(self.count > 0, "pixel estimate queried before any sample");
        self.sum / self.count as f32
    }

    pub fn sum(&self) -> Color {
        self.sum
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Per-pixel accumulators for a `width` x `height` image, row-major.
#[derive(Debug, Clone)]
pub struct AccumulationBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Accumulator>,
}

impl AccumulationBuffer {
    /// Create a zeroed buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Accumulator::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major index of pixel (x, y).
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Add one radiance sample to a pixel.
    #[inline]
    pub fn accumulate(&mut self, index: usize, sample: Color) {
        self.pixels[index].add(sample);
    }

    /// Current average for a pixel. The pixel must have at least one sample.
    #[inline]
    pub fn estimate(&self, index: usize) -> Color {
        self.pixels[index].mean()
    }

    pub fn sample_count(&self, index: usize) -> u32 {
        self.pixels[index].count()
    }

    /// Zero every pixel, keeping the resolution.
    pub fn reset(&mut self) {
        self.pixels.fill(Accumulator::default());
    }

    pub fn pixels(&self) -> &[Accumulator] {
        &self.pixels
    }

    /// Mutable slots, for writers that partition the image by pixel.
    pub fn pixels_mut(&mut self) -> &mut [Accumulator] {
        &mut self.pixels
    }
}
