//! Property-based invariant tests for drop-target geometry.
//!
//! 1. `closest_edge` agrees with the minimum of `distance_to_edge`
//! 2. Scroll ramp hits its endpoints and never increases with distance
//! 3. Corners and center are inside; one unit past any edge is outside
//! 4. First-match proximity never reports a distance at or above threshold
//! 5. Nearest proximity is never farther than first-match

use ftui_dnd_core::geometry::{
    Bounds, Edge, EdgeScan, Point, closest_edge, distance_to_edge, is_near_edge,
    is_point_in_rect, near_edge, rect_center, scroll_speed,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (-1000i32..1000, -1000i32..1000, 2i32..800, 2i32..800).prop_map(|(x, y, w, h)| {
        Bounds::new(f64::from(x), f64::from(y), f64::from(w), f64::from(h))
    })
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (-2000i32..2000, -2000i32..2000).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Closest edge
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn closest_edge_is_first_minimum(bounds in bounds_strategy(), point in point_strategy()) {
        let distances = distance_to_edge(point, bounds);
        let min = distances
            .iter()
            .map(|(_, d)| d)
            .fold(f64::INFINITY, f64::min);
        let expected = Edge::ALL
            .into_iter()
            .find(|edge| distances.get(*edge) == min)
            .unwrap();
        prop_assert_eq!(closest_edge(point, bounds), expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. Scroll ramp
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_speed_endpoints(threshold in 1.0f64..500.0, max in 0.0f64..100.0) {
        prop_assert_eq!(scroll_speed(0.0, threshold, max), max);
        prop_assert_eq!(scroll_speed(threshold, threshold, max), 0.0);
    }

    #[test]
    fn scroll_speed_non_increasing(
        threshold in 1.0f64..500.0,
        max in 0.0f64..100.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        let near_speed = scroll_speed(near * threshold, threshold, max);
        let far_speed = scroll_speed(far * threshold, threshold, max);
        prop_assert!(
            far_speed <= near_speed + 1e-9,
            "speed grew from {} to {} as distance grew", near_speed, far_speed
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Containment
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn corners_and_center_inside(bounds in bounds_strategy()) {
        let corners = [
            Point::new(bounds.left, bounds.top),
            Point::new(bounds.right, bounds.top),
            Point::new(bounds.right, bounds.bottom),
            Point::new(bounds.left, bounds.bottom),
            rect_center(bounds),
        ];
        for p in corners {
            prop_assert!(is_point_in_rect(p, bounds), "{:?} not in {:?}", p, bounds);
        }
    }

    #[test]
    fn one_unit_outside_each_edge(bounds in bounds_strategy()) {
        let c = rect_center(bounds);
        let outside = [
            Point::new(c.x, bounds.top - 1.0),
            Point::new(bounds.right + 1.0, c.y),
            Point::new(c.x, bounds.bottom + 1.0),
            Point::new(bounds.left - 1.0, c.y),
        ];
        for p in outside {
            prop_assert!(!is_point_in_rect(p, bounds), "{:?} in {:?}", p, bounds);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4-5. Edge proximity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn first_match_respects_threshold(
        bounds in bounds_strategy(),
        point in point_strategy(),
        threshold in 1.0f64..200.0,
    ) {
        let near = is_near_edge(point, bounds, threshold);
        match near.edge {
            Some(edge) => {
                prop_assert!(near.distance < threshold);
                prop_assert_eq!(near.distance, distance_to_edge(point, bounds).get(edge));
            }
            None => prop_assert!(near.distance.is_infinite()),
        }
    }

    #[test]
    fn nearest_never_farther_than_first_match(
        bounds in bounds_strategy(),
        point in point_strategy(),
        threshold in 1.0f64..200.0,
    ) {
        let first = near_edge(EdgeScan::FirstMatch, point, bounds, threshold);
        let nearest = near_edge(EdgeScan::Nearest, point, bounds, threshold);
        prop_assert_eq!(first.edge.is_some(), nearest.edge.is_some());
        prop_assert!(nearest.distance <= first.distance);
    }
}
