//! Arc layout: partitioning events into angular segments.
//!
//! The layout is recomputed from scratch on every content change; segments
//! carry no persistent identity beyond their index in sorted order.

use crate::config::FolioConfig;
use crate::event::{sort_events, EventRecord};
use crate::geometry::Point;

/// One event's exclusive angular slice of the arc.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Position in sorted (chronological) order.
    pub index: usize,
    /// Slice start angle in degrees, inclusive.
    pub start_deg: f64,
    /// Slice end angle in degrees, exclusive.
    pub end_deg: f64,
    /// Midpoint angle, used for wedge and label placement.
    pub mid_deg: f64,
    /// The event this segment represents.
    pub event: EventRecord,
}

/// Computed arc layout for a set of events.
#[derive(Debug, Clone)]
pub struct ArcLayout {
    /// Model-space center.
    pub center: Point,
    /// Band center-line radius.
    pub radius: f64,
    /// Outer band radius.
    pub r_outer: f64,
    /// Inner band radius.
    pub r_inner: f64,
    /// Outer hit-test radius (band edge plus margin).
    pub hit_outer: f64,
    /// Inner hit-test radius (band edge minus margin, clamped at zero).
    pub hit_inner: f64,
    /// Radius of the year labels along the inner edge.
    pub label_radius: f64,
    /// Radius of the wedge base, just inside the outer edge.
    pub wedge_base: f64,
    /// Radial length of the indicator wedge.
    pub wedge_length: f64,
    /// Half the angular spread of the wedge base.
    pub wedge_half_spread: f64,
    /// Arc start angle in degrees.
    pub start_deg: f64,
    /// Normalized arc end angle in degrees (always forward of start).
    pub end_deg: f64,
    /// Segments in chronological order; empty when there are no events.
    pub segments: Vec<Segment>,
}

impl ArcLayout {
    /// Compute the layout for the given events.
    ///
    /// Events are sorted ascending by inferred year (undated events first)
    /// and the arc span is divided into equal slots, one per event. Never
    /// panics; zero events produce an empty segment list while the band
    /// geometry stays valid.
    pub fn compute(mut events: Vec<EventRecord>, config: &FolioConfig) -> Self {
        sort_events(&mut events);

        let start = config.start_angle;
        let end = config.normalized_end();
        let span = end - start;

        #[allow(clippy::cast_precision_loss)]
        let slot = if events.is_empty() {
            span
        } else {
            span / events.len() as f64
        };

        let segments = events
            .into_iter()
            .enumerate()
            .map(|(index, event)| {
                #[allow(clippy::cast_precision_loss)]
                let i = index as f64;
                let seg_start = start + i * slot + config.gap_deg / 2.0;
                let seg_end = start + (i + 1.0) * slot - config.gap_deg / 2.0;
                Segment {
                    index,
                    start_deg: seg_start,
                    end_deg: seg_end,
                    mid_deg: (seg_start + seg_end) / 2.0,
                    event,
                }
            })
            .collect();

        Self {
            center: config.center(),
            radius: config.radius,
            r_outer: config.r_outer(),
            r_inner: config.r_inner(),
            hit_outer: config.r_outer() + config.hit_margin,
            hit_inner: (config.r_inner() - config.hit_margin).max(0.0),
            label_radius: config.r_inner() + config.label_inset,
            wedge_base: config.r_outer() - 2.0,
            wedge_length: config.wedge_length,
            wedge_half_spread: config.wedge_half_spread,
            start_deg: start,
            end_deg: end,
            segments,
        }
    }

    /// Total angular span of the arc in degrees.
    pub fn span(&self) -> f64 {
        self.end_deg - self.start_deg
    }

    /// Whether the layout has no events.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// The segment at a given index.
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Hit-test a model-space point against the segment band.
    ///
    /// The point is converted to polar coordinates; it hits when its radius
    /// falls inside the expanded hit band and its forward angle from the
    /// start lies inside `[start, end)`. Returns the segment index, or
    /// `None` for misses and empty layouts.
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        if self.segments.is_empty() {
            return None;
        }

        let r = point.distance_to(self.center);
        if r < self.hit_inner || r > self.hit_outer {
            return None;
        }

        let raw = (point.y - self.center.y)
            .atan2(point.x - self.center.x)
            .to_degrees();
        // Wrap into a forward offset from the start angle so arcs crossing
        // the 0°/360° boundary need no special casing.
        let offset = (raw - self.start_deg).rem_euclid(360.0);
        if offset >= self.span() {
            return None;
        }

        let angle = self.start_deg + offset;
        self.segments
            .iter()
            .find(|s| angle >= s.start_deg && angle < s.end_deg)
            .map(|s| s.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::polar_to_cartesian;

    fn events(n: usize) -> Vec<EventRecord> {
        (0..n)
            .map(|i| EventRecord {
                year: Some(2015 + i32::try_from(i).unwrap_or(0)),
                ..EventRecord::new(format!("event {i}"))
            })
            .collect()
    }

    fn layout(n: usize) -> ArcLayout {
        ArcLayout::compute(events(n), &FolioConfig::default())
    }

    #[test]
    fn test_partition_is_contiguous_and_complete() {
        for n in [1, 2, 3, 7] {
            let layout = layout(n);
            assert_eq!(layout.len(), n);

            let first = &layout.segments[0];
            let last = &layout.segments[n - 1];
            assert!((first.start_deg - layout.start_deg).abs() < 1e-9);
            assert!((last.end_deg - layout.end_deg).abs() < 1e-9);

            // No gaps or overlaps between adjacent slices.
            for pair in layout.segments.windows(2) {
                assert!((pair[0].end_deg - pair[1].start_deg).abs() < 1e-9);
            }

            // Slices are equal width.
            #[allow(clippy::cast_precision_loss)]
            let expected = layout.span() / n as f64;
            for s in &layout.segments {
                assert!((s.end_deg - s.start_deg - expected).abs() < 1e-9);
                assert!((s.mid_deg - (s.start_deg + s.end_deg) / 2.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_single_event_occupies_full_span() {
        let layout = layout(1);
        let s = &layout.segments[0];
        assert!((s.start_deg - 200.0).abs() < 1e-9);
        assert!((s.end_deg - 340.0).abs() < 1e-9);
        assert!((s.mid_deg - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_events_does_not_panic() {
        let layout = layout(0);
        assert!(layout.is_empty());
        assert!((layout.span() - 140.0).abs() < 1e-9);
        assert_eq!(layout.segment_at(Point::new(400.0, 100.0)), None);
    }

    #[test]
    fn test_segments_follow_chronological_order() {
        let events = vec![
            EventRecord {
                year: Some(2021),
                ..EventRecord::new("newest")
            },
            EventRecord::new("undated"),
            EventRecord {
                year: Some(2019),
                ..EventRecord::new("oldest dated")
            },
        ];
        let layout = ArcLayout::compute(events, &FolioConfig::default());
        let titles: Vec<&str> = layout
            .segments
            .iter()
            .map(|s| s.event.title.as_str())
            .collect();
        assert_eq!(titles, ["undated", "oldest dated", "newest"]);
    }

    #[test]
    fn test_hit_at_segment_midpoints() {
        let layout = layout(5);
        for s in &layout.segments {
            let p = polar_to_cartesian(layout.center, layout.radius, s.mid_deg);
            assert_eq!(layout.segment_at(p), Some(s.index));
        }
    }

    #[test]
    fn test_hit_respects_radial_margin() {
        let layout = layout(3);
        let mid = layout.segments[1].mid_deg;

        // Just outside the band but inside the hit margin.
        let near = polar_to_cartesian(layout.center, layout.r_outer + 4.0, mid);
        assert_eq!(layout.segment_at(near), Some(1));

        // Beyond the margin.
        let far = polar_to_cartesian(layout.center, layout.hit_outer + 1.0, mid);
        assert_eq!(layout.segment_at(far), None);

        // Well inside the inner radius (e.g. the panel area).
        let inside = polar_to_cartesian(layout.center, layout.hit_inner - 10.0, mid);
        assert_eq!(layout.segment_at(inside), None);
    }

    #[test]
    fn test_hit_outside_angular_span() {
        let layout = layout(4);
        // 90° points straight down, far outside the 200..340 arch.
        let below = polar_to_cartesian(layout.center, layout.radius, 90.0);
        assert_eq!(layout.segment_at(below), None);
        // Just past the end angle.
        let past = polar_to_cartesian(layout.center, layout.radius, layout.end_deg + 1.0);
        assert_eq!(layout.segment_at(past), None);
    }

    #[test]
    fn test_hit_boundaries_half_open() {
        let layout = layout(2);
        let boundary = layout.segments[1].start_deg;
        // Angles straddling the shared boundary resolve to different
        // segments; sampled a hair off the boundary to stay clear of
        // atan2 round-trip noise.
        let before = polar_to_cartesian(layout.center, layout.radius, boundary - 0.01);
        let after = polar_to_cartesian(layout.center, layout.radius, boundary + 0.01);
        assert_eq!(layout.segment_at(before), Some(0));
        assert_eq!(layout.segment_at(after), Some(1));
    }
}
