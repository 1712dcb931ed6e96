//! Flattening input contours into the raw line/cubic segments the
//! intersection collector cross-products against each other and the queue
//! builder later cuts at breakpoints.

use pathclip_geom::{CubicBezier, LineSegment, Point};
use pathclip_path::{Component, Contour};

/// Which of the two input sets a segment (and later, an event) belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InputSet {
    Subject,
    Clipping,
}

impl InputSet {
    pub fn other(self) -> InputSet {
        match self {
            InputSet::Subject => InputSet::Clipping,
            InputSet::Clipping => InputSet::Subject,
        }
    }
}

/// A single line or cubic segment pulled out of an input contour, still in
/// its original (un-split) form, tagged with the index of the contour (within
/// its input set) it came from.
#[derive(Copy, Clone, Debug)]
pub struct RawSegment {
    pub geometry: SegmentGeometry,
    pub contour_index: usize,
}

#[derive(Copy, Clone, Debug)]
pub enum SegmentGeometry {
    Line(LineSegment),
    Cubic(CubicBezier),
}

impl RawSegment {
    pub fn sample(&self, t: f64) -> Point {
        match self.geometry {
            SegmentGeometry::Line(l) => l.sample(t),
            SegmentGeometry::Cubic(c) => c.sample(t),
        }
    }

    pub fn is_cubic(&self) -> bool {
        matches!(self.geometry, SegmentGeometry::Cubic(_))
    }
}

/// Identifies one raw segment: which input it came from, and its index
/// within that input's flattened segment list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SegmentId {
    pub input: InputSet,
    pub index: usize,
}

/// The flattened segment lists for one invocation: every line and cubic
/// segment of both input sets, addressable by `SegmentId`.
pub struct SegmentTable {
    pub subject: Vec<RawSegment>,
    pub clipping: Vec<RawSegment>,
}

impl SegmentTable {
    pub fn get(&self, id: SegmentId) -> &RawSegment {
        match id.input {
            InputSet::Subject => &self.subject[id.index],
            InputSet::Clipping => &self.clipping[id.index],
        }
    }

    pub fn list(&self, input: InputSet) -> &[RawSegment] {
        match input {
            InputSet::Subject => &self.subject,
            InputSet::Clipping => &self.clipping,
        }
    }

    /// Iterates every segment of both inputs along with its id.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &RawSegment)> {
        self.subject
            .iter()
            .enumerate()
            .map(|(i, s)| (SegmentId { input: InputSet::Subject, index: i }, s))
            .chain(
                self.clipping
                    .iter()
                    .enumerate()
                    .map(|(i, s)| (SegmentId { input: InputSet::Clipping, index: i }, s)),
            )
    }
}

fn flatten(contours: &[Contour]) -> Vec<RawSegment> {
    let mut segments = Vec::new();
    for (contour_index, contour) in contours.iter().enumerate() {
        let mut prev = contour.start;
        for component in &contour.components {
            match *component {
                Component::LineTo(to) => {
                    if to != prev {
                        segments.push(RawSegment {
                            geometry: SegmentGeometry::Line(LineSegment::new(prev, to)),
                            contour_index,
                        });
                    }
                    prev = to;
                }
                Component::CubicTo { c1, c2, to } => {
                    segments.push(RawSegment {
                        geometry: SegmentGeometry::Cubic(CubicBezier::new(prev, c1, c2, to)),
                        contour_index,
                    });
                    prev = to;
                }
            }
        }
    }
    segments
}

pub fn build_segment_table(sources: &[Contour], masks: &[Contour]) -> SegmentTable {
    SegmentTable {
        subject: flatten(sources),
        clipping: flatten(masks),
    }
}
