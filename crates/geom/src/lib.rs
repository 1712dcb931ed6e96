#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::excessive_precision)]

//! Numerics and 2d line/cubic-bezier primitives.
//!
//! This crate is the leaf of the clipping pipeline: it never knows about
//! contours, sweep lines, or boolean operators. It only answers narrow
//! geometric questions (where do these two curves cross? is this cubic
//! monotonic? what is the signed area of this triangle?) with controlled
//! round-off. `pathclip_clip` is built on top of it the way
//! `lyon_tessellation` is built on top of `lyon_geom`.

#[cfg(feature = "serialization")]
#[macro_use]
extern crate serde;

mod cubic;
mod line;
mod numerics;
mod point;

pub use cubic::{CubicBezier, CubicToCubicIntersection, LineToCubicIntersection};
pub use line::LineSegment;
pub use numerics::{diff_of_products, solve_cubic, solve_quadratic};
pub use point::{left_of_line, signed_area, Point};

#[cfg(test)]
mod cubic_tests;
#[cfg(test)]
mod line_tests;
#[cfg(test)]
mod point_tests;
