//! The boolean operator family, and the membership slot each `SweepEvent`
//! carries recording which operators it belongs to the result of.

/// Index into a `SweepEvent::in_result` array. `Xor` and `Divide` (the
/// public request forms) are not members of this enum: both are assembled
/// by [`crate::clip`] out of multiple connector passes over these four
/// flags (a symmetric difference is the union of "subject minus clipping"
/// and "clipping minus subject"; a divide is that plus the intersection).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operator {
    Intersection,
    Union,
    SubjectMinusClipping,
    ClippingMinusSubject,
}

pub const OPERATOR_COUNT: usize = 4;

impl Operator {
    pub const ALL: [Operator; OPERATOR_COUNT] = [
        Operator::Intersection,
        Operator::Union,
        Operator::SubjectMinusClipping,
        Operator::ClippingMinusSubject,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Operator::Intersection => 0,
            Operator::Union => 1,
            Operator::SubjectMinusClipping => 2,
            Operator::ClippingMinusSubject => 3,
        }
    }
}

/// The five public request forms: `Xor` and `Divide` are composites built
/// from the internal [`Operator`] flavors, not flags of their own during
/// the sweep.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersection,
    Difference,
    Xor,
    Divide,
}
