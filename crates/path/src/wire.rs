//! Binary wire encoding for contour arrays: a CBOR array of contours, each
//! a CBOR array of `["line", v1, v2, ...]` / `["cubic", start, end, c1,
//! c2]` segments, vertices as `[x, y, z]` triples.

use ciborium::value::Value;

use crate::contour::{Component, Contour};
use pathclip_geom::Point;

/// Failures decoding a contour-array blob: malformed tags, wrong arity, or
/// a value that isn't a number where one is required. The boundary layer
/// (`pathclip_clip::clip_path`) treats any of these the same as an internal
/// clipping failure: empty result, no panic.
#[derive(Debug, Clone, PartialEq)]
pub enum WireError {
    NotAnArray,
    MalformedSegment,
    UnknownSegmentTag(String),
    NotANumber,
}

impl core::fmt::Display for WireError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WireError::NotAnArray => write!(f, "expected a CBOR array"),
            WireError::MalformedSegment => write!(f, "segment has the wrong shape"),
            WireError::UnknownSegmentTag(tag) => write!(f, "unknown segment tag `{}`", tag),
            WireError::NotANumber => write!(f, "expected a numeric value"),
        }
    }
}

impl std::error::Error for WireError {}

fn vertex_value(p: Point) -> Value {
    Value::Array(vec![
        Value::Float(p.x),
        Value::Float(p.y),
        Value::Float(0.0),
    ])
}

fn value_to_vertex(v: &Value) -> Result<Point, WireError> {
    let items = v.as_array().ok_or(WireError::MalformedSegment)?;
    if items.len() < 2 {
        return Err(WireError::MalformedSegment);
    }
    let x = value_to_f64(&items[0])?;
    let y = value_to_f64(&items[1])?;
    Ok(Point::new(x, y))
}

fn value_to_f64(v: &Value) -> Result<f64, WireError> {
    if let Some(f) = v.as_float() {
        return Ok(f);
    }
    if let Some(i) = v.as_integer() {
        let i: i128 = i.into();
        return Ok(i as f64);
    }
    Err(WireError::NotANumber)
}

/// Encodes one contour as the `["line"|"cubic", ...]` segment array.
fn contour_to_value(contour: &Contour) -> Value {
    let mut segments = Vec::new();
    let mut last = contour.start;
    let mut current_line: Option<Vec<Point>> = None;

    for component in &contour.components {
        match *component {
            Component::LineTo(p) => {
                let line = current_line.get_or_insert_with(|| {
                    if segments.is_empty() {
                        vec![last]
                    } else {
                        Vec::new()
                    }
                });
                line.push(p);
                last = p;
            }
            Component::CubicTo { c1, c2, to } => {
                if let Some(line) = current_line.take() {
                    segments.push(line_value(&line));
                }
                segments.push(Value::Array(vec![
                    Value::Text("cubic".into()),
                    vertex_value(last),
                    vertex_value(to),
                    vertex_value(c1),
                    vertex_value(c2),
                ]));
                last = to;
            }
        }
    }
    if let Some(line) = current_line.take() {
        segments.push(line_value(&line));
    }
    if segments.is_empty() {
        segments.push(line_value(&[contour.start]));
    }

    Value::Array(segments)
}

fn line_value(vertices: &[Point]) -> Value {
    let mut items = vec![Value::Text("line".into())];
    items.extend(vertices.iter().map(|&p| vertex_value(p)));
    Value::Array(items)
}

fn value_to_contour(v: &Value) -> Result<Contour, WireError> {
    let segments = v.as_array().ok_or(WireError::NotAnArray)?;

    let mut start: Option<Point> = None;
    let mut last: Option<Point> = None;
    let mut components = Vec::new();

    for seg in segments {
        let items = seg.as_array().ok_or(WireError::MalformedSegment)?;
        let tag = items
            .first()
            .and_then(Value::as_text)
            .ok_or(WireError::MalformedSegment)?;

        match tag {
            "line" => {
                for v in items.iter().skip(1) {
                    let p = value_to_vertex(v)?;
                    if start.is_none() {
                        start = Some(p);
                        last = Some(p);
                        continue;
                    }
                    if last == Some(p) {
                        continue;
                    }
                    components.push(Component::LineTo(p));
                    last = Some(p);
                }
            }
            "cubic" => {
                if items.len() != 5 {
                    return Err(WireError::MalformedSegment);
                }
                let seg_start = value_to_vertex(&items[1])?;
                let end = value_to_vertex(&items[2])?;
                let c1 = value_to_vertex(&items[3])?;
                let c2 = value_to_vertex(&items[4])?;

                if start.is_none() {
                    start = Some(seg_start);
                    last = Some(seg_start);
                } else if last != Some(seg_start) {
                    components.push(Component::LineTo(seg_start));
                    last = Some(seg_start);
                }
                components.push(Component::CubicTo { c1, c2, to: end });
                last = Some(end);
            }
            other => return Err(WireError::UnknownSegmentTag(other.to_string())),
        }
    }

    Ok(Contour {
        start: start.unwrap_or_else(|| Point::new(0.0, 0.0)),
        components,
    })
}

/// Encodes a slice of contours into the module-level CBOR blob format.
pub fn encode_contours(contours: &[Contour]) -> Vec<u8> {
    let value = Value::Array(contours.iter().map(contour_to_value).collect());
    let mut buf = Vec::new();
    // `Value` always serializes; the only failure mode is an I/O error,
    // which a `Vec<u8>` writer cannot produce.
    ciborium::ser::into_writer(&value, &mut buf).expect("encoding to a Vec<u8> cannot fail");
    buf
}

/// Decodes a CBOR blob into contours, the inverse of [`encode_contours`].
pub fn decode_contours(bytes: &[u8]) -> Result<Vec<Contour>, WireError> {
    let value: Value = ciborium::de::from_reader(bytes).map_err(|_| WireError::NotAnArray)?;
    let items = value.as_array().ok_or(WireError::NotAnArray)?;
    items.iter().map(value_to_contour).collect()
}
