//! Drawing surface contract: the subset of a 2D canvas context the sketch
//! consumes — an affine transform stack, a current fill style, and filled
//! rectangles.
//!
//! Fills are plain descriptors ([`Fill`], [`LinearGradient`]); a backend
//! turns them into whatever its native fill object is. The reference
//! raster backend lives in [`crate::drawing`].

use {
  euclid::{Angle, Point2D, Rect, Vector2D as V2},
  num_traits::Float
};


/// Device pixel basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// Sketch coordinate basis, origin in the top-left corner
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

/// Opaque 8-bit color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8
}

impl Color {
  pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }

  /// Per-channel linear blend, `t` in `[0, 1]`.
  pub fn lerp(self, other: Self, t: f32) -> Self {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Self {
      r: channel(self.r, other.r),
      g: channel(self.g, other.g),
      b: channel(self.b, other.b)
    }
  }
}

/// Directional color blend: ordered `(offset, color)` stops along the
/// `from → to` axis, both ends in the space current at fill time.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
  pub from: Point2D<f32, WorldSpace>,
  pub to: Point2D<f32, WorldSpace>,
  pub stops: Vec<(f32, Color)>
}

impl LinearGradient {
  /// Color at normalized offset `t` along the axis. Offsets below the
  /// first stop take its color, offsets above the last take the last;
  /// in between, adjacent stops interpolate linearly.
  pub fn color_at(&self, t: f32) -> Color {
    let first = match self.stops.first() {
      Some(first) => *first,
      None => return Color::rgb(0, 0, 0)
    };
    if t <= first.0 {
      return first.1;
    }
    for pair in self.stops.windows(2) {
      let ((o0, c0), (o1, c1)) = (pair[0], pair[1]);
      if t <= o1 {
        let span = o1 - o0;
        return if span > 0.0 { c0.lerp(c1, (t - o0) / span) } else { c1 };
      }
    }
    self.stops[self.stops.len() - 1].1
  }

  /// Color under `point`: the point is projected onto the gradient axis
  /// and clamped to its ends.
  pub fn sample(&self, point: Point2D<f32, WorldSpace>) -> Color {
    let axis = self.to - self.from;
    let len2 = axis.square_length();
    if len2 == 0.0 {
      return self.color_at(0.0);
    }
    let t = (point - self.from).dot(axis) / len2;
    self.color_at(t.clamp(0.0, 1.0))
  }
}

/// Current fill style of a surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
  Solid(Color),
  Gradient(LinearGradient)
}

impl From<Color> for Fill {
  fn from(color: Color) -> Self {
    Fill::Solid(color)
  }
}

/// A 2D drawing surface with canvas transform semantics: `translate` and
/// `rotate` compose onto the current transform, `save`/`restore` push and
/// pop it. `restore` on an empty stack is a no-op.
pub trait Surface {
  fn save(&mut self);
  fn restore(&mut self);
  fn translate(&mut self, offset: V2<f32, WorldSpace>);
  fn rotate(&mut self, angle: Angle<f32>);
  fn set_fill(&mut self, fill: &Fill);
  /// Fill `rect` (given in the current local space) with the current fill.
  fn fill_rect(&mut self, rect: Rect<f32, WorldSpace>);
  /// Paint the whole surface, ignoring the transform stack.
  fn clear(&mut self, color: Color);
}

/// `n` evenly spaced values covering `[0, 1)`, endpoint excluded.
pub fn linspace<T: Float>(n: usize) -> impl Iterator<Item = T> {
  let len = T::from(n).unwrap();
  (0..n).map(move |i| T::from(i).unwrap() / len)
}
