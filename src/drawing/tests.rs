use {
  super::*,
  crate::{
    canvas::{LinearGradient, Surface},
    palette
  },
  anyhow::Result,
  euclid::{Angle, Point2D, Rect, Size2D, Vector2D as V2}
};

fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect<f32, WorldSpace> {
  Rect::new(Point2D::new(x, y), Size2D::new(w, h))
}

#[test] fn clear_paints_every_pixel() {
  let mut raster = Raster::new(8, 8);
  raster.clear(palette::BACKGROUND);
  let expected: Rgba<u8> = palette::BACKGROUND.into();
  assert!(raster.image().pixels().all(|&pixel| pixel == expected));
}

#[test] fn solid_rect_covers_interior_only() {
  let mut raster = Raster::new(64, 64);
  raster.set_fill(&Fill::Solid(Color::rgb(200, 0, 0)));
  raster.fill_rect(rect(10.0, 10.0, 20.0, 12.0));
  assert_eq!(*raster.image().get_pixel(15, 15), Rgba([200, 0, 0, 255]));
  assert_eq!(*raster.image().get_pixel(40, 40), Rgba([0, 0, 0, 0]));
}

#[test] fn transform_stack_restores() {
  let mut raster = Raster::new(64, 64);
  raster.save();
  raster.translate(V2::new(32.0, 0.0));
  raster.rotate(Angle::degrees(45.0));
  raster.restore();
  assert_eq!(raster.transform, Transform2D::identity());
  assert!(raster.stack.is_empty());

  // restore on an empty stack is a no-op
  raster.restore();
  assert_eq!(raster.transform, Transform2D::identity());
}

#[test] fn rotation_follows_canvas_convention() {
  let mut raster = Raster::new(64, 64);
  raster.set_fill(&Fill::Solid(Color::rgb(0, 200, 0)));
  raster.translate(V2::new(32.0, 32.0));
  raster.rotate(Angle::degrees(90.0));
  // a bar along local +x must land below the pivot, not to its right
  raster.fill_rect(rect(2.0, -1.0, 6.0, 2.0));
  assert_eq!(*raster.image().get_pixel(32, 36), Rgba([0, 200, 0, 255]));
  assert_eq!(*raster.image().get_pixel(36, 32), Rgba([0, 0, 0, 0]));
}

#[test] fn gradient_blends_along_axis() {
  let mut raster = Raster::new(64, 16);
  raster.set_fill(&Fill::Gradient(LinearGradient {
    from: Point2D::origin(),
    to: Point2D::new(64.0, 0.0),
    stops: vec![(0.0, Color::rgb(0, 0, 0)), (1.0, Color::rgb(255, 255, 255))]
  }));
  raster.fill_rect(rect(0.0, 0.0, 64.0, 16.0));
  assert!(raster.image().get_pixel(1, 8).0[0] < 16);
  assert!(raster.image().get_pixel(62, 8).0[0] > 240);
}

#[test] fn render_animation_walks_the_timeline() -> Result<()> {
  let timeline = Timeline { duration: 0.1, fps: 60 };
  let mut sketch = Sketch::new(timeline, 64.0, 48.0, rand_pcg::Pcg64::seed_from_u64(0));
  let mut frames = 0;
  let mut last = None;
  render_animation(&mut sketch, |_, image| {
    frames += 1;
    last = Some(image.clone());
  });
  assert_eq!(frames, 6);

  let last = last.unwrap();
  let background: Rgba<u8> = palette::BACKGROUND.into();
  assert!(last.pixels().any(|&pixel| pixel == background));

  std::fs::create_dir_all("test")?;
  last.save("test/test_loop_final.png")?;
  Ok(())
}

#[test] fn variations_reproducible_per_seed() {
  let timeline = Timeline { duration: 0.1, fps: 60 };
  let frames = render_variations(timeline, 32, 24, [5, 5, 9]);
  assert_eq!(frames[0].as_raw(), frames[1].as_raw());
  assert_ne!(frames[0].as_raw(), frames[2].as_raw());
}
