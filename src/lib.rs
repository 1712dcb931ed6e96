//! Boolean set operations (union, intersection, difference, xor, divide) on
//! planar regions bounded by line and cubic-bezier contours.
//!
//! # Crates
//!
//! * **pathclip_geom** - numerics and 2d line/cubic-bezier primitives.
//! * **pathclip_path** - the contour data model and its CBOR wire encoding.
//! * **pathclip_clip** - the sweep-line executor that runs the boolean
//!   operations themselves.
//!
//! This crate reexports the pieces needed to call [`clip`] directly on
//! in-memory contours, plus [`clip_path`], the CBOR-in/CBOR-out boundary
//! used by callers that only want to pass byte buffers across an FFI edge.
//!
//! ```
//! use pathclip::{clip, BooleanOp, Config};
//! use pathclip::geom::Point;
//! use pathclip::path::Contour;
//!
//! let mut a = Contour::new(Point::new(0.0, 0.0));
//! a.line_to(Point::new(2.0, 0.0));
//! a.line_to(Point::new(2.0, 2.0));
//! a.line_to(Point::new(0.0, 2.0));
//! a.line_to(Point::new(0.0, 0.0));
//!
//! let mut b = Contour::new(Point::new(1.0, 1.0));
//! b.line_to(Point::new(3.0, 1.0));
//! b.line_to(Point::new(3.0, 3.0));
//! b.line_to(Point::new(1.0, 3.0));
//! b.line_to(Point::new(1.0, 1.0));
//!
//! let result = clip(&[a], &[b], BooleanOp::Union, &Config::default()).unwrap();
//! assert_eq!(result.len(), 1);
//! ```

pub use pathclip_clip::{clip, BooleanOp, ClipError, Config};

pub mod geom {
    //! Numerics and 2d line/cubic-bezier primitives.
    pub use pathclip_geom::*;
}

pub mod path {
    //! The contour data model and its CBOR wire encoding.
    pub use pathclip_path::*;
}

/// Decodes `sources` and `masks` from their CBOR contour-list encoding,
/// runs `operation` against them, and encodes the result the same way.
/// `operation` is matched case-sensitively against `"union"`,
/// `"intersection"`, `"difference"`, `"xor"`, and `"divide"`; any other
/// string defaults to intersection.
///
/// Never panics: a malformed input buffer or an internal clipping failure
/// both produce an empty contour list rather than propagating an error
/// across the boundary.
pub fn clip_path(sources: &[u8], masks: &[u8], operation: &str) -> Vec<u8> {
    let op = match operation {
        "union" => BooleanOp::Union,
        "difference" => BooleanOp::Difference,
        "xor" => BooleanOp::Xor,
        "divide" => BooleanOp::Divide,
        _ => BooleanOp::Intersection,
    };

    let result = (|| -> Result<Vec<path::Contour>, ()> {
        let sources = path::decode_contours(sources).map_err(|_| ())?;
        let masks = path::decode_contours(masks).map_err(|_| ())?;
        clip(&sources, &masks, op, &Config::default()).map_err(|_| ())
    })();

    match result {
        Ok(contours) => path::encode_contours(&contours),
        Err(()) => path::encode_contours(&[]),
    }
}
