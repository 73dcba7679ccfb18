//!
//! Executes canvas drawing instructions against an in-memory RGBA image
//!
//! Strokes are tessellated into triangles by lyon, scan-converted into a coverage mask and then
//! blended onto the target image.
//!

#[macro_use] extern crate log;

mod rgba;
mod raster_image;
mod stroke_settings;
mod stroke_worker;
mod rasterizer;
mod compose;
mod raster_canvas;

pub use self::rgba::*;
pub use self::raster_image::*;
pub use self::stroke_settings::*;
pub use self::stroke_worker::*;
pub use self::rasterizer::*;
pub use self::compose::*;
pub use self::raster_canvas::*;
