/// Render one seeded run of the swirl loop to a PNG frame sequence.
/// Pass a seed as the first argument; defaults to 7.

use {
  swirls::{drawing, sketch::Sketch, timeline::Timeline},
  anyhow::Result,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

fn main() -> Result<()> {
  let seed = std::env::args().nth(1)
    .map(|arg| arg.parse::<u64>())
    .transpose()?
    .unwrap_or(7);
  let dir = "out/frames";
  std::fs::create_dir_all(dir)?;

  let timeline = Timeline::default();
  let mut sketch = Sketch::new(timeline, 800.0, 600.0, Pcg64::seed_from_u64(seed));

  let mut io = Ok(());
  drawing::render_animation(&mut sketch, |frame, image| {
    if io.is_ok() {
      io = image.save(format!("{dir}/{frame:04}.png"));
    }
  });
  io?;

  println!("seed {}: {} frames -> {}", seed, timeline.frames(), dir);
  open::that(format!("{dir}/{:04}.png", timeline.frames() - 1))?;
  Ok(())
}
