//! The animated ribbon and the run driver.
//!
//! A [`Swirl`] is constructed once per run with every parameter drawn from
//! an injected random source, then advanced once per frame. Between frames
//! only `x`, `y` and `previous_rotation` change; the rest is fixed for the
//! lifetime of the run, so a run is replayable from its seed.

use {
  crate::{
    canvas::{Color, Fill, LinearGradient, Surface, WorldSpace, linspace},
    palette,
    timeline::Timeline
  },
  euclid::{Angle, Point2D, Rect, Size2D, Vector2D as V2},
  rand::Rng,
  std::f32::consts::TAU
};


/// Fixed short dimension of the ribbon cross-section.
pub const STROKE_FRAME: f32 = 16.0;

/// The ribbon. Offsets `x`/`y` are measured from the canvas center.
#[derive(Debug, Clone, PartialEq)]
pub struct Swirl {
  pub width: f32,
  pub height: f32,
  pub x: f32,
  pub y: f32,
  /// Base orientation, constant over the run.
  pub rotation: f32,
  /// Dynamic twist angle of the previous frame; decides which face shows.
  pub previous_rotation: f32,
  /// Angular speed of the wobble oscillation.
  pub frequency: f32,
  /// Forward drift speed scaling.
  pub travel: f32,
  /// Lateral oscillation amplitude scaling.
  pub wobble: f32,
  pub stroke_frame: f32,
  pub stroke_width_start: f32,
  pub stroke_width_end: f32,
  pub front: LinearGradient,
  pub back: LinearGradient
}

impl Swirl {
  /// Draw the randomized parameters of one run. The start offset lands
  /// within a quarter of the short canvas side around the center.
  pub fn new(rng: &mut impl Rng, width: f32, height: f32) -> Self {
    let start_bounds = (width / 4.0).min(height / 4.0);
    let x = rng.gen_range(-start_bounds..start_bounds).floor();
    let y = rng.gen_range(-start_bounds..start_bounds).floor();
    let rotation = rng.gen_range(0.0..TAU);

    let frequency = rng.gen_range(16.0..24.0);
    let travel = rng.gen_range(0.5..1.5);
    let wobble = rng.gen_range(2.0..5.0);

    let stroke_frame = STROKE_FRAME;
    let stroke_width_start = rng.gen_range(100.0..150.0);
    let stroke_width_end = rng.gen_range(60.0..90.0);

    // both faces blend along the stroke diagonal towards the local origin
    let axis = (
      Point2D::new(-stroke_width_start, -stroke_frame),
      Point2D::origin()
    );
    let front = ribbon_gradient(rng, &palette::FRONT, axis);
    let back = ribbon_gradient(rng, &palette::BACK, axis);

    Self {
      width, height,
      x, y,
      rotation,
      previous_rotation: 0.0,
      frequency, travel, wobble,
      stroke_frame, stroke_width_start, stroke_width_end,
      front, back
    }
  }

  /// Advance one frame and draw the current cross-section.
  ///
  /// The path drifts forward while decelerating, with a lateral wobble
  /// whose amplitude decays towards the end of the loop but never below a
  /// quarter of its peak. `playhead` is not validated; values outside
  /// `[0, 1)` are the caller's problem.
  pub fn update(&mut self, surface: &mut impl Surface, playhead: f32) {
    let inverse = 1.0 - playhead;
    surface.save();

    surface.translate(V2::new(self.width / 2.0, self.height / 2.0));
    surface.rotate(Angle::radians(self.rotation));

    let cos = (playhead * self.frequency).cos();
    self.x += 0.5 + inverse * (1.0 - cos.abs()) * (playhead + self.travel);
    self.y += cos * inverse.max(0.25) * self.wobble;
    surface.translate(V2::new(self.x, self.y));

    let rotation = cos * inverse * 2.5;
    surface.rotate(Angle::radians(rotation));

    // the ribbon flips face whenever the twist changes direction
    let side = if self.previous_rotation < rotation { &self.front } else { &self.back };
    surface.set_fill(&Fill::Gradient(side.clone()));

    surface.fill_rect(self.cross_section(playhead));

    surface.restore();
    self.previous_rotation = rotation;
  }

  /// Current rectangle in shape-local coordinates. The trailing edge
  /// stays anchored at the local origin while the leading edge recedes;
  /// the height shrinks with the playhead but keeps a 10% floor.
  pub fn cross_section(&self, playhead: f32) -> Rect<f32, WorldSpace> {
    let width = self.stroke_width_start - self.stroke_width_end * playhead;
    let height = self.stroke_frame * (1.0 - playhead).max(0.1);
    Rect::new(Point2D::new(-width, -height), Size2D::new(width, height))
  }
}

/// One face of the ribbon: a dozen-odd stops picked at random from a fixed
/// palette, spread evenly along `axis`.
fn ribbon_gradient(
  rng: &mut impl Rng,
  palette: &[Color],
  (from, to): (Point2D<f32, WorldSpace>, Point2D<f32, WorldSpace>)
) -> LinearGradient {
  let stops = rng.gen_range(10..25);
  LinearGradient {
    from, to,
    stops: linspace::<f32>(stops)
      .map(|offset| (offset, palette[rng.gen_range(0..palette.len())]))
      .collect()
  }
}

/// Drives one animation run: paints the background and spawns the
/// [`Swirl`] on the first frame, advances it on every later one.
pub struct Sketch<R> {
  pub timeline: Timeline,
  pub width: f32,
  pub height: f32,
  rng: R,
  swirl: Option<Swirl>
}

impl<R: Rng> Sketch<R> {
  pub fn new(timeline: Timeline, width: f32, height: f32, rng: R) -> Self {
    Self { timeline, width, height, rng, swirl: None }
  }

  /// Entry point for the external scheduler, called once per tick with a
  /// monotonically increasing frame number.
  pub fn tick(&mut self, surface: &mut impl Surface, frame: u32) {
    match &mut self.swirl {
      Some(swirl) if frame != 0 =>
        swirl.update(surface, self.timeline.playhead(frame)),
      _ => {
        surface.clear(palette::BACKGROUND);
        self.swirl = Some(Swirl::new(&mut self.rng, self.width, self.height));
      }
    }
  }

  pub fn swirl(&self) -> Option<&Swirl> {
    self.swirl.as_ref()
  }
}
