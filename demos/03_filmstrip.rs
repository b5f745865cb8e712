/// Render a run, collect the written frames back from disk, and tile
/// every half-second into a filmstrip poster.

use {
  swirls::{drawing, sketch::Sketch, timeline::Timeline},
  anyhow::Result,
  image::RgbaImage,
  rand::SeedableRng,
  rand_pcg::Pcg64
};

const WIDTH: u32 = 400;
const HEIGHT: u32 = 300;

fn find_frames(path: &str) -> impl Iterator<Item = std::path::PathBuf> {
  use walkdir::{WalkDir, DirEntry};

  let reg = regex::Regex::new("^[0-9]{4}\\.png$").unwrap();
  WalkDir::new(path)
    .sort_by(|a, b| {
      let [a, b] = [a, b].map(|x| x.file_name().to_string_lossy().to_string());
      lexical_sort::lexical_cmp(&a, &b)
    })
    .into_iter()
    .filter_map(Result::ok)
    .map(|file: DirEntry| file.path().to_owned())
    .filter(move |file| file.file_name()
      .map(|name| reg.is_match(name.to_string_lossy().as_ref()))
      .unwrap_or(false))
}

fn main() -> Result<()> {
  let dir = "out/frames";
  std::fs::create_dir_all(dir)?;

  let timeline = Timeline::default();
  let mut sketch = Sketch::new(
    timeline,
    WIDTH as f32, HEIGHT as f32,
    Pcg64::seed_from_u64(1)
  );
  let mut io = Ok(());
  drawing::render_animation(&mut sketch, |frame, image| {
    if io.is_ok() {
      io = image.save(format!("{dir}/{frame:04}.png"));
    }
  });
  io?;

  let frames = find_frames(dir)
    .step_by((timeline.fps / 2) as usize)
    .map(|path| image::open(path).map(|img| img.to_rgba8()))
    .collect::<Result<Vec<_>, _>>()?;
  println!("{} panels", frames.len());

  let mut strip = RgbaImage::new(WIDTH * frames.len() as u32, HEIGHT);
  frames.iter().enumerate().for_each(|(i, frame)|
    image::imageops::overlay(&mut strip, frame, i as i64 * WIDTH as i64, 0));
  strip.save("filmstrip.png")?;
  open::that("filmstrip.png")?;
  Ok(())
}
