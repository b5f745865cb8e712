/// Render the final frame of a 4x4 grid of seeded runs in parallel, and
/// tile them into one contact sheet.

use {
  swirls::{drawing, timeline::Timeline},
  anyhow::Result,
  image::RgbaImage
};

fn main() -> Result<()> {
  let path = "out.png";
  let (cols, rows) = (4u32, 4u32);
  let (width, height) = (400u32, 300u32);

  let frames = drawing::render_variations(
    Timeline::default(),
    width, height,
    0..(cols * rows) as u64
  );

  let mut sheet = RgbaImage::new(cols * width, rows * height);
  frames.iter().enumerate().for_each(|(i, frame)| {
    let (col, row) = (i as u32 % cols, i as u32 / cols);
    image::imageops::overlay(
      &mut sheet, frame,
      (col * width) as i64, (row * height) as i64
    );
  });

  sheet.save(path)?;
  open::that(path)?;
  Ok(())
}
