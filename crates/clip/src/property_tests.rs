use crate::clip::clip;
use crate::config::Config;
use crate::operator::BooleanOp;
use pathclip_geom::Point;
use pathclip_path::Contour;

/// A small xorshift64* generator, seeded explicitly so a failing case is
/// reproducible from its seed alone. Good enough for generating test
/// fixtures; not suitable for anything cryptographic.
struct Xorshift64Star {
    state: u64,
}

impl Xorshift64Star {
    fn new(seed: u64) -> Self {
        Xorshift64Star { state: seed | 1 }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform float in `[lo, hi)`.
    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        let bits = self.next_u64() >> 11;
        let unit = bits as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

fn random_rect(rng: &mut Xorshift64Star, span: f64) -> Contour {
    let x0 = rng.next_f64(0.0, span);
    let y0 = rng.next_f64(0.0, span);
    let w = rng.next_f64(0.5, span);
    let h = rng.next_f64(0.5, span);
    let mut c = Contour::new(Point::new(x0, y0));
    c.line_to(Point::new(x0 + w, y0));
    c.line_to(Point::new(x0 + w, y0 + h));
    c.line_to(Point::new(x0, y0 + h));
    c.line_to(Point::new(x0, y0));
    c
}

fn area_of(contours: &[Contour]) -> f64 {
    contours.iter().map(|c| c.signed_area().abs()).sum()
}

/// `|A| + |B| = |A ∪ B| + |A ∩ B|` for any pair of simple regions,
/// overlapping or not.
#[test]
fn union_and_intersection_areas_conserve_total_area() {
    let mut rng = Xorshift64Star::new(0xC0FFEE);
    let config = Config::default();

    for _ in 0..200 {
        let a = random_rect(&mut rng, 10.0);
        let b = random_rect(&mut rng, 10.0);

        let area_a = area_of(std::slice::from_ref(&a));
        let area_b = area_of(std::slice::from_ref(&b));

        let union = clip(&[a.clone()], &[b.clone()], BooleanOp::Union, &config).unwrap();
        let intersection = clip(&[a], &[b], BooleanOp::Intersection, &config).unwrap();

        let lhs = area_a + area_b;
        let rhs = area_of(&union) + area_of(&intersection);
        assert!(
            (lhs - rhs).abs() < 1e-6,
            "area_a={area_a} area_b={area_b} union={} intersection={} lhs={lhs} rhs={rhs}",
            area_of(&union),
            area_of(&intersection),
        );
    }
}

/// `Xor(A, B)`'s area equals `|A| + |B| - 2 * |A ∩ B|`, the symmetric
/// difference identity.
#[test]
fn xor_area_matches_symmetric_difference_identity() {
    let mut rng = Xorshift64Star::new(0xDECAF);
    let config = Config::default();

    for _ in 0..200 {
        let a = random_rect(&mut rng, 10.0);
        let b = random_rect(&mut rng, 10.0);

        let area_a = area_of(std::slice::from_ref(&a));
        let area_b = area_of(std::slice::from_ref(&b));

        let xor = clip(&[a.clone()], &[b.clone()], BooleanOp::Xor, &config).unwrap();
        let intersection = clip(&[a], &[b], BooleanOp::Intersection, &config).unwrap();

        let expected = area_a + area_b - 2.0 * area_of(&intersection);
        assert!((area_of(&xor) - expected).abs() < 1e-6);
    }
}

/// `Divide(A, B)`'s three partitions (`A \\ B`, `B \\ A`, `A ∩ B`)
/// together cover exactly the union, with no overlap or gap in total area.
#[test]
fn divide_partitions_sum_to_the_union_area() {
    let mut rng = Xorshift64Star::new(0xBADA55);
    let config = Config::default();

    for _ in 0..200 {
        let a = random_rect(&mut rng, 10.0);
        let b = random_rect(&mut rng, 10.0);

        let divided = clip(&[a.clone()], &[b.clone()], BooleanOp::Divide, &config).unwrap();
        let union = clip(&[a], &[b], BooleanOp::Union, &config).unwrap();

        assert!((area_of(&divided) - area_of(&union)).abs() < 1e-6);
    }
}
