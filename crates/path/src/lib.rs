#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! The contour data model and its CBOR wire encoding: line/cubic
//! components, contour area and reversal, and `encode_contours`/
//! `decode_contours` for the `clip_path` boundary.

mod contour;
mod wire;

pub use contour::{Component, Contour};
pub use wire::{decode_contours, encode_contours, WireError};

#[cfg(test)]
mod wire_tests;
