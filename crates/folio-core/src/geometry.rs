//! Polar/arc geometry for the circular timeline.
//!
//! All functions are pure and take angles in degrees. The coordinate system
//! is y-down (angle 0° points right, 90° points down), matching 2D display
//! surfaces; consumers that draw on a y-up canvas flip at the viewport edge.

/// A point in y-down model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Normalize an end angle so the arc always sweeps forward from `start`.
///
/// When `end < start`, 360° is added; this lets callers specify an arc that
/// crosses the 0°/360° boundary (the reference arch is 200° → −20°, which
/// normalizes to 340°) without reasoning about wraparound.
pub fn normalize_end_angle(start: f64, end: f64) -> f64 {
    if end < start {
        end + 360.0
    } else {
        end
    }
}

/// Convert polar coordinates to a Cartesian point.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + rad.cos() * radius, center.y + rad.sin() * radius)
}

/// Large-arc flag for an SVG arc command over the given forward span.
fn large_arc_flag(start_deg: f64, end_deg: f64) -> u8 {
    u8::from(end_deg - start_deg > 180.0)
}

/// SVG path command for a single arc stroke.
///
/// The path is traversed from `end_deg` back to `start_deg` so it draws
/// left-to-right visually under the sweep convention. Callers pass a
/// normalized `end_deg` (see [`normalize_end_angle`]).
pub fn arc_path(center: Point, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let start = polar_to_cartesian(center, radius, end_deg);
    let end = polar_to_cartesian(center, radius, start_deg);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2}",
        start.x,
        start.y,
        radius,
        radius,
        large_arc_flag(start_deg, end_deg),
        end.x,
        end.y,
    )
}

/// Closed SVG path for a filled annular sector ("donut slice").
///
/// Outer arc from `end_deg` to `start_deg`, radial line inward, inner arc
/// back from `start_deg` to `end_deg` with the opposite sweep, then close.
/// Callers guarantee `r_outer > r_inner >= 0`.
pub fn annular_sector_path(
    center: Point,
    r_outer: f64,
    r_inner: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let flag = large_arc_flag(start_deg, end_deg);
    let outer_start = polar_to_cartesian(center, r_outer, end_deg);
    let outer_end = polar_to_cartesian(center, r_outer, start_deg);
    let inner_start = polar_to_cartesian(center, r_inner, start_deg);
    let inner_end = polar_to_cartesian(center, r_inner, end_deg);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {flag} 0 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {flag} 1 {:.2} {:.2} Z",
        outer_start.x,
        outer_start.y,
        r_outer,
        r_outer,
        outer_end.x,
        outer_end.y,
        inner_start.x,
        inner_start.y,
        r_inner,
        r_inner,
        inner_end.x,
        inner_end.y,
    )
}

/// Closed SVG path for a triangular indicator pointing radially outward.
///
/// The two base corners sit at `mid_deg ± half_spread_deg` on `base_radius`;
/// the apex sits at `base_radius + length` on `mid_deg`. Callers guarantee
/// `length > 0`.
pub fn wedge_path(
    center: Point,
    base_radius: f64,
    length: f64,
    mid_deg: f64,
    half_spread_deg: f64,
) -> String {
    let left = polar_to_cartesian(center, base_radius, mid_deg - half_spread_deg);
    let right = polar_to_cartesian(center, base_radius, mid_deg + half_spread_deg);
    let tip = polar_to_cartesian(center, base_radius + length, mid_deg);
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2} Z",
        left.x, left.y, tip.x, tip.y, right.x, right.y,
    )
}

/// Sample an arc into a polyline, endpoint inclusive.
///
/// Used by rasterizing renderers that approximate arcs with short chords.
/// `step_deg` must be positive; spans smaller than one step still yield both
/// endpoints.
pub fn arc_points(
    center: Point,
    radius: f64,
    start_deg: f64,
    end_deg: f64,
    step_deg: f64,
) -> Vec<Point> {
    let span = end_deg - start_deg;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = (span / step_deg).ceil().max(1.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    let points = (0..=steps)
        .map(|i| {
            let angle = start_deg + span * (i as f64 / steps as f64);
            polar_to_cartesian(center, radius, angle)
        })
        .collect();
    points
}
