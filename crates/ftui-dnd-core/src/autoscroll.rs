#![forbid(unsafe_code)]

//! Auto-scroll configuration.
//!
//! [`AutoScrollConfig`] turns pointer proximity to a scroll container's edge
//! into a per-frame [`ScrollStep`]. The frame loop that applies the step to a
//! viewport lives with the host; this module only decides direction and speed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Edge, EdgeScan, Point, near_edge, scroll_speed};

/// Thresholds for edge-triggered auto-scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoScrollConfig {
    /// Distance from an edge (pixels) at which scrolling starts (default: 50.0).
    pub threshold: f64,
    /// Speed at the edge itself, in pixels per frame (default: 20.0).
    pub max_speed: f64,
    /// Edge selection policy when several edges are in range (default: first match).
    pub scan: EdgeScan,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            threshold: 50.0,
            max_speed: 20.0,
            scan: EdgeScan::FirstMatch,
        }
    }
}

impl AutoScrollConfig {
    /// Create a config with a custom trigger distance.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create a config with a custom peak speed.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Create a config with a different edge selection policy.
    #[must_use]
    pub fn with_scan(mut self, scan: EdgeScan) -> Self {
        self.scan = scan;
        self
    }

    /// Compute the scroll step for a pointer inside a scroll container.
    ///
    /// Returns `None` when no edge is within the threshold or the resulting
    /// speed is zero.
    #[must_use]
    pub fn step(&self, pointer: Point, container: Bounds) -> Option<ScrollStep> {
        let near = near_edge(self.scan, pointer, container, self.threshold);
        let edge = near.edge?;
        let speed = scroll_speed(near.distance, self.threshold, self.max_speed);
        if speed <= 0.0 {
            return None;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "autoscroll.step",
            edge = edge.as_str(),
            distance = near.distance,
            speed
        );

        Some(ScrollStep { edge, speed })
    }
}

/// One frame of auto-scroll: which way and how fast.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollStep {
    /// Edge the pointer is approaching; the viewport scrolls toward it.
    pub edge: Edge,
    /// Pixels per frame.
    pub speed: f64,
}

impl ScrollStep {
    /// Signed `(dx, dy)` scroll delta for this step.
    ///
    /// Scrolling toward the top or left edge is negative.
    #[must_use]
    pub fn delta(&self) -> (f64, f64) {
        match self.edge {
            Edge::Top => (0.0, -self.speed),
            Edge::Bottom => (0.0, self.speed),
            Edge::Left => (-self.speed, 0.0),
            Edge::Right => (self.speed, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 400.0, 600.0)
    }

    #[test]
    fn default_config() {
        let config = AutoScrollConfig::default();
        assert_eq!(config.threshold, 50.0);
        assert_eq!(config.max_speed, 20.0);
        assert_eq!(config.scan, EdgeScan::FirstMatch);
    }

    #[test]
    fn builder_methods() {
        let config = AutoScrollConfig::default()
            .with_threshold(10.0)
            .with_max_speed(5.0)
            .with_scan(EdgeScan::Nearest);
        assert_eq!(config.threshold, 10.0);
        assert_eq!(config.max_speed, 5.0);
        assert_eq!(config.scan, EdgeScan::Nearest);
    }

    #[test]
    fn no_step_in_the_middle() {
        let config = AutoScrollConfig::default();
        assert_eq!(config.step(Point::new(200.0, 300.0), viewport()), None);
    }

    #[test]
    fn step_near_bottom_scrolls_down() {
        let config = AutoScrollConfig::default();
        let step = config
            .step(Point::new(200.0, 575.0), viewport())
            .expect("pointer is near the bottom edge");
        assert_eq!(step.edge, Edge::Bottom);
        assert_eq!(step.speed, 10.0);
        assert_eq!(step.delta(), (0.0, 10.0));
    }

    #[test]
    fn step_at_top_edge_is_full_speed() {
        let config = AutoScrollConfig::default();
        let step = config.step(Point::new(200.0, 0.0), viewport()).unwrap();
        assert_eq!(step.edge, Edge::Top);
        assert_eq!(step.speed, 20.0);
        assert_eq!(step.delta(), (0.0, -20.0));
    }

    #[test]
    fn corner_direction_depends_on_scan() {
        // Near the top (30px) and the right (5px) at once.
        let pointer = Point::new(395.0, 30.0);
        let first = AutoScrollConfig::default()
            .step(pointer, viewport())
            .unwrap();
        assert_eq!(first.edge, Edge::Top);

        let nearest = AutoScrollConfig::default()
            .with_scan(EdgeScan::Nearest)
            .step(pointer, viewport())
            .unwrap();
        assert_eq!(nearest.edge, Edge::Right);
        assert_eq!(nearest.delta().0, nearest.speed);
    }

    #[test]
    fn zero_speed_yields_no_step() {
        let config = AutoScrollConfig::default().with_max_speed(0.0);
        assert_eq!(config.step(Point::new(200.0, 10.0), viewport()), None);
    }
}
