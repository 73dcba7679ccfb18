//!
//! An abstract representation of the drawing instructions used to stroke hatch lines
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod gc;
mod draw;
mod color;

pub use self::gc::*;
pub use self::draw::*;
pub use self::color::*;
