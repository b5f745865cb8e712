//! A generative animation sketch: one rotating, wobbling ribbon drifting
//! across the canvas over a fixed 8-second, 60fps loop.
//!
//! The crate is split into a deterministic core and a raster backend:
//! [`sketch`] holds the randomized ribbon state and the per-frame update
//! procedure, [`canvas`] defines the drawing surface contract it draws
//! against (an affine transform stack plus gradient-filled rectangles),
//! [`timeline`] maps frame numbers onto the normalized playhead, and
//! [`palette`] freezes the two gradient faces and the background wash.
//! [`drawing`] (requires the `drawing` feature) rasterizes the whole thing
//! into an [`image::RgbaImage`].
//!
//! # Basic usage
//! ```
//! use {
//!   swirls::{sketch::Sketch, timeline::Timeline},
//!   rand::SeedableRng
//! };
//!
//! // Every run is parameterized by a seed; equal seeds replay the exact
//! // same ribbon.
//! let rng = rand_pcg::Pcg64::seed_from_u64(7);
//! let sketch = Sketch::new(Timeline::default(), 800.0, 600.0, rng);
//! assert_eq!(sketch.timeline.frames(), 480);
//! ```
//!
//! Rendering a run to disk (with the `drawing` feature):
//! ```ignore
//! let mut sketch = Sketch::new(Timeline::default(), 800.0, 600.0, rng);
//! let mut io = Ok(());
//! drawing::render_animation(&mut sketch, |frame, image| {
//!   if io.is_ok() {
//!     io = image.save(format!("frames/{frame:04}.png"));
//!   }
//! });
//! io?;
//! ```
//!
//! The first tick of a run paints the background and draws the shape
//! parameters from the injected random source; every later tick advances
//! the ribbon by one frame. Only the position and the dynamic twist angle
//! mutate between frames, so a run is fully determined by its seed and
//! canvas size.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(rustdoc::private_intra_doc_links)]

pub mod palette;
pub mod canvas;
pub mod timeline;
pub mod sketch;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
