use kurbo::{ParamCurve, ParamCurveArclen, QuadBez};

use crate::core::{Point, Vec2};

/// Floor on the control-point offset so short chords still read as curved.
const MIN_OFFSET: f64 = 30.0;

/// Accuracy for arc-length computation and inversion, in curve units.
const ARC_ACCURACY: f64 = 1e-9;

/// A decorative quadratic arc between two planar points.
///
/// The control point sits perpendicular to the chord at its midpoint, pushed
/// out by `max(30, chord_len * curvature)`. The total arc length is computed
/// once at construction and reused for every per-frame position query.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct RouteCurve {
    quad: QuadBez,
    arc_len: f64,
}

impl RouteCurve {
    pub fn between(from: Point, to: Point, curvature: f64) -> Self {
        let mid = from.midpoint(to);
        let chord = to - from;
        let chord_len = chord.hypot();

        // Coincident endpoints leave no chord to take a normal from; fall
        // back to a fixed downward normal so the control point is still
        // offset by exactly MIN_OFFSET.
        let unit_normal = if chord_len == 0.0 {
            Vec2::new(0.0, 1.0)
        } else {
            Vec2::new(-chord.y, chord.x) / chord_len
        };

        let offset = MIN_OFFSET.max(chord_len * curvature);
        let ctrl = mid + unit_normal * offset;

        Self::from_quad(QuadBez::new(from, ctrl, to))
    }

    pub fn from_quad(quad: QuadBez) -> Self {
        // The closed-form arc length is NaN for a point-degenerate quad;
        // treat that as a zero-length curve.
        let arc_len = quad.arclen(ARC_ACCURACY);
        let arc_len = if arc_len.is_finite() { arc_len } else { 0.0 };
        Self { quad, arc_len }
    }

    pub fn start(&self) -> Point {
        self.quad.p0
    }

    pub fn control(&self) -> Point {
        self.quad.p1
    }

    pub fn end(&self) -> Point {
        self.quad.p2
    }

    pub fn arc_len(&self) -> f64 {
        self.arc_len
    }

    /// Point on the curve at arc-length `pos` from the start. Positions are
    /// clamped into `[0, arc_len]`.
    pub fn point_at(&self, pos: f64) -> Point {
        if self.arc_len <= 0.0 {
            return self.quad.p0;
        }
        let pos = pos.clamp(0.0, self.arc_len);
        let t = self.quad.inv_arclen(pos, ARC_ACCURACY);
        self.quad.eval(t)
    }

    /// SVG path descriptor of the curve (`M x1 y1 Q cx cy x2 y2`).
    pub fn to_svg_path(&self) -> String {
        let QuadBez { p0, p1, p2 } = self.quad;
        format!(
            "M {} {} Q {} {} {} {}",
            p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
        )
    }
}
