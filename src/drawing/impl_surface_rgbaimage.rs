#![allow(non_snake_case)]
use {
  super::Raster,
  crate::canvas::{Color, Fill, PixelSpace, Surface, WorldSpace},
  euclid::{Angle, Box2D, Point2D, Rect, Size2D, Transform2D, Vector2D as V2},
  image::{Pixel, Rgba},
  itertools::iproduct
};

impl Surface for Raster {
  fn save(&mut self) {
    self.stack.push(self.transform);
  }

  fn restore(&mut self) {
    if let Some(transform) = self.stack.pop() {
      self.transform = transform;
    }
  }

  fn translate(&mut self, offset: V2<f32, WorldSpace>) {
    self.transform = self.transform.pre_translate(offset);
  }

  fn rotate(&mut self, angle: Angle<f32>) {
    self.transform = Transform2D::rotation(angle).then(&self.transform);
  }

  fn set_fill(&mut self, fill: &Fill) {
    self.fill = fill.clone();
  }

  fn clear(&mut self, color: Color) {
    let pixel: Rgba<u8> = color.into();
    self.image.pixels_mut().for_each(|p| *p = pixel);
  }

  fn fill_rect(&mut self, rect: Rect<f32, WorldSpace>) {
    let inverse = match self.transform.inverse() {
      Some(inverse) => inverse,
      None => return
    };
    let bounds = match device_bounds(&self.transform, rect, self.image.dimensions()) {
      Some(bounds) => bounds,
      None => return // no intersection with the framebuffer at all
    };
    // the sketch transforms are rigid, one device pixel spans one local unit
    let Δp = 1.0;
    let center = rect.center();
    let half = rect.size.to_vector() / 2.0;

    for (y, x) in iproduct!(bounds.y_range(), bounds.x_range()) {
      let device = Point2D::<f32, PixelSpace>::new(x as f32 + 0.5, y as f32 + 0.5);
      let local = inverse.transform_point(device);
      let sdf = box_sdf(local - center, half);
      if sdf > 0.5 * Δp {
        continue;
      }
      let color = match &self.fill {
        Fill::Solid(color) => *color,
        Fill::Gradient(gradient) => gradient.sample(local)
      };
      let pixel = self.image.get_pixel_mut(x, y);
      *pixel = sdf_overlay_aa(sdf, Δp, *pixel, color.into());
    }
  }
}

// hull of the transformed corners, rounded out and clipped to the framebuffer
fn device_bounds(
  transform: &Transform2D<f32, WorldSpace, PixelSpace>,
  rect: Rect<f32, WorldSpace>,
  (width, height): (u32, u32)
) -> Option<Box2D<u32, PixelSpace>> {
  let corners = [
    Point2D::new(rect.min_x(), rect.min_y()),
    Point2D::new(rect.max_x(), rect.min_y()),
    Point2D::new(rect.max_x(), rect.max_y()),
    Point2D::new(rect.min_x(), rect.max_y())
  ];
  Box2D::from_points(corners.iter().map(|corner| transform.transform_point(*corner)))
    .inflate(1.0, 1.0)
    .round_out()
    .intersection(&Box2D::from_size(Size2D::new(width as f32, height as f32)))
    .map(|bounds| bounds.to_u32())
}

/// Signed distance to an axis-aligned box with half-extents `half`,
/// `offset` measured from its center.
fn box_sdf(offset: V2<f32, WorldSpace>, half: V2<f32, WorldSpace>) -> f32 {
  let dist = offset.abs() - half;
  let outside = dist.max(V2::splat(0.0)).length();
  let inside = dist.x.max(dist.y).min(0.0);
  outside + inside
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
