//!
//! # Hatch line renderer
//!
//! Strokes sets of polylines ("hatch lines") onto an in-memory RGBA image. The lines themselves are
//! generated elsewhere: this crate turns them into canvas drawing instructions and renders those
//! with a fixed thickness and colour.
//!
//! ```
//! use flo_hatching::*;
//!
//! let mut renderer = HatchRenderer::with_size(100, 100);
//! renderer.draw_hatch_lines(&[vec![PixelPoint(10, 10), PixelPoint(10, 50)]]).unwrap();
//!
//! assert!(renderer.image().get_pixel(10, 30) == Some(Rgba8::BLACK));
//! ```
//!

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod point;
mod error;
mod stroke_style;
mod hatch_drawing;
mod hatch_renderer;
mod shared_renderer;

pub use self::point::*;
pub use self::error::*;
pub use self::stroke_style::*;
pub use self::hatch_drawing::*;
pub use self::hatch_renderer::*;
pub use self::shared_renderer::*;

pub use flo_hatch_canvas::{Color, LineJoin, LineCap, Draw, GraphicsContext, GraphicsPrimitives};
pub use flo_raster_canvas::{Rgba8, RasterImage};
