//! Hand-drawn rendering: a clean rounded path plus a jittered copy.

use crate::svg_path::precise;
use kurbo::{Point, Vec2};
use scribble_core::geometry::unit_or;

/// Extra warm-up rounds mixed into the generator after the seed.
const SEED_WARMUP: usize = 64;

/// Seeded random number generator (xorshift128).
///
/// Seeded from a string so that a shape's id always produces the same
/// jitter. Each instance is independent; there is no shared state.
#[derive(Debug, Clone)]
pub struct SeededRng {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        let mut rng = Self {
            x: 0,
            y: 0,
            z: 0,
            w: 0,
        };
        let mut units = seed.encode_utf16();
        for _ in 0..seed.encode_utf16().count() + SEED_WARMUP {
            rng.x ^= u32::from(units.next().unwrap_or(0));
            rng.next_u32();
        }
        rng
    }

    fn next_u32(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w ^= (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    /// Random float in range [-1, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u32() as i32) as f64 / 4_294_967_296.0 * 2.0
    }

    /// Random offset scaled by amount
    pub fn offset(&mut self, amount: f64) -> f64 {
        self.next_f64() * amount
    }
}

/// Points just inside each end of the segment `a -> b`, pulled in by at
/// most `roundness`. A zero-length segment is not pulled in.
fn rounded_segment(a: Point, b: Point, roundness: f64) -> (Point, Point) {
    let delta = b - a;
    let pull = unit_or(delta, Vec2::ZERO) * (delta.hypot() / 4.0).min(roundness);
    (a + pull, b - pull)
}

/// Clean and hand-drawn path data for an outline.
///
/// Corners are rounded with quadratic joins whose size grows with
/// `stroke_width`. The second string is the clean path followed by a copy
/// whose vertices are jittered by a generator seeded from `seed`, so the
/// same seed and outline always give the same output.
pub fn emit_rough_path(seed: &str, outline: &[Point], stroke_width: f64) -> (String, String) {
    let Some(&first) = outline.first() else {
        return (String::new(), String::new());
    };

    let mut clean = format!("M {}L", precise(first));
    let mut rough = clean.clone();

    let offset = stroke_width / 3.0;
    let roundness = stroke_width * 2.0;
    let mut rng = SeededRng::new(seed);

    let (mut p0, mut s0) = (first, first);
    let segments = outline.len() - 1;

    for (i, &p1) in outline.iter().enumerate().skip(1) {
        let jitter_x = rng.offset(offset);
        let jitter_y = rng.offset(offset);
        let s1 = p1 + Vec2::new(jitter_x, jitter_y);

        let (q0, q1) = rounded_segment(p0, p1, roundness);
        let (sq0, sq1) = rounded_segment(s0, s1, roundness);

        if i == segments {
            clean += &format!("{}L {}", precise(q0), precise(p1));
            rough += &format!("{}L {}", precise(sq0), precise(s1));
        } else {
            clean += &format!("{}L {}Q {}", precise(q0), precise(q1), precise(p1));
            rough += &format!("{}L {}Q {}", precise(sq0), precise(sq1), precise(s1));
            p0 = p1;
            s0 = s1;
        }
    }

    let combined = format!("{clean}{rough}");
    (clean, combined)
}
