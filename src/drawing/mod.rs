//! Software raster backend: an RGBA framebuffer behind the
//! [`Surface`](crate::canvas::Surface) contract, plus whole-run rendering
//! helpers.

use {
  crate::{
    canvas::{Color, Fill, PixelSpace, WorldSpace},
    sketch::Sketch,
    timeline::Timeline
  },
  euclid::Transform2D,
  image::{Rgba, RgbaImage},
  rand::{Rng, SeedableRng}
};

mod impl_surface_rgbaimage;
#[cfg(test)] mod tests;

/// Raster canvas. `translate`/`rotate` maintain a canvas-style current
/// transform; `save`/`restore` push and pop it. Rectangles are rasterized
/// with an antialiased edge and blended over the existing pixels.
pub struct Raster {
  image: RgbaImage,
  transform: Transform2D<f32, WorldSpace, PixelSpace>,
  stack: Vec<Transform2D<f32, WorldSpace, PixelSpace>>,
  fill: Fill
}

impl Raster {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      image: RgbaImage::new(width, height),
      transform: Transform2D::identity(),
      stack: vec![],
      fill: Fill::Solid(Color::rgb(0, 0, 0))
    }
  }

  pub fn image(&self) -> &RgbaImage {
    &self.image
  }

  pub fn into_image(self) -> RgbaImage {
    self.image
  }
}

impl From<Color> for Rgba<u8> {
  fn from(color: Color) -> Self {
    Rgba([color.r, color.g, color.b, 255])
  }
}

/// Run `sketch` over its whole timeline against a fresh framebuffer,
/// handing every rendered frame to `frame_fn`.
pub fn render_animation<R: Rng>(
  sketch: &mut Sketch<R>,
  mut frame_fn: impl FnMut(u32, &RgbaImage)
) {
  let mut raster = Raster::new(sketch.width as u32, sketch.height as u32);
  for frame in 0..sketch.timeline.frames() {
    sketch.tick(&mut raster, frame);
    frame_fn(frame, raster.image());
  }
}

/// Final frames of many seeded runs, rendered in parallel — one
/// framebuffer per run, no shared pixels between workers.
pub fn render_variations(
  timeline: Timeline,
  width: u32,
  height: u32,
  seeds: impl IntoIterator<Item = u64>
) -> Vec<RgbaImage> {
  use rayon::prelude::*;

  seeds.into_iter().collect::<Vec<_>>()
    .into_par_iter()
    .map(|seed| {
      let rng = rand_pcg::Pcg64::seed_from_u64(seed);
      let mut sketch = Sketch::new(timeline, width as f32, height as f32, rng);
      let mut raster = Raster::new(width, height);
      for frame in 0..timeline.frames() {
        sketch.tick(&mut raster, frame);
      }
      raster.into_image()
    })
    .collect()
}
