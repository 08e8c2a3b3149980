#![forbid(unsafe_code)]

//! Drop-target geometry.
//!
//! Pure functions over axis-aligned [`Bounds`] and [`Point`] values in pixel
//! space. The hit-testing layer uses them to classify where a pointer sits
//! relative to a target (closest edge, before/after half), and the auto-scroll
//! loop uses them to turn edge proximity into a scroll speed.
//!
//! # Invariants
//!
//! 1. Edge iteration order is always `top, right, bottom, left` ([`Edge::ALL`]).
//!    Every tie-break in this module resolves to the earliest edge in that order.
//! 2. Distances are signed and never clamped: a point outside the bounds yields
//!    a negative distance for the edge it crossed.
//! 3. All functions are total over finite inputs and never panic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle descriptor, as reported by a layout pass.
///
/// All six fields are carried so that descriptors captured from a host can be
/// passed through verbatim. Use [`Bounds::new`] or [`Bounds::from_edges`] to
/// build a consistent one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Left edge (inclusive).
    pub left: f64,
    /// Top edge (inclusive).
    pub top: f64,
    /// Right edge (inclusive).
    pub right: f64,
    /// Bottom edge (inclusive).
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds from an origin and a size.
    #[inline]
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Create bounds from the four edge coordinates.
    #[inline]
    #[must_use]
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Inclusive containment test on all four sides.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }

    /// Midpoint of the rectangle.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// One side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in tie-break order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Stable lowercase name, suitable for logs and host bindings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Whether the edge bounds the vertical axis (top or bottom).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Signed distance from a point to each side of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EdgeDistances {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeDistances {
    /// Distance to a single edge.
    #[inline]
    #[must_use]
    pub const fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Iterate `(edge, distance)` pairs in [`Edge::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, f64)> + '_ {
        Edge::ALL.into_iter().map(|edge| (edge, self.get(edge)))
    }
}

/// Result of an edge-proximity query.
///
/// `edge` is `None` (and `distance` is infinite) when no edge qualified.
/// JSON has no infinity, so an infinite distance is written as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NearEdge {
    pub edge: Option<Edge>,
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "serialize_distance",
            deserialize_with = "deserialize_distance"
        )
    )]
    pub distance: f64,
}

impl NearEdge {
    /// No edge within threshold.
    pub const NONE: Self = Self {
        edge: None,
        distance: f64::INFINITY,
    };
}

#[cfg(feature = "serde")]
fn serialize_distance<S>(distance: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if distance.is_finite() {
        serializer.serialize_f64(*distance)
    } else {
        serializer.serialize_none()
    }
}

#[cfg(feature = "serde")]
fn deserialize_distance<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// How [`near_edge`] picks among edges that are under the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EdgeScan {
    /// First edge in [`Edge::ALL`] order whose distance is under the threshold,
    /// even if a later edge is closer.
    #[default]
    FirstMatch,
    /// The closest edge under the threshold; ties keep [`Edge::ALL`] order.
    Nearest,
}

/// Half of a target on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VerticalDrop {
    Top,
    Bottom,
}

/// Half of a target on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizontalDrop {
    Left,
    Right,
}

/// Signed distance from `point` to each edge of `bounds`.
///
/// Positive inside, negative past the corresponding edge.
#[must_use]
pub fn distance_to_edge(point: Point, bounds: Bounds) -> EdgeDistances {
    EdgeDistances {
        top: point.y - bounds.top,
        right: bounds.right - point.x,
        bottom: bounds.bottom - point.y,
        left: point.x - bounds.left,
    }
}

/// Edge with the minimum distance to `point`.
///
/// Ties resolve to the first edge in `top, right, bottom, left` order.
#[must_use]
pub fn closest_edge(point: Point, bounds: Bounds) -> Edge {
    let distances = distance_to_edge(point, bounds);
    let mut best = Edge::Top;
    let mut best_distance = distances.top;
    for (edge, distance) in distances.iter().skip(1) {
        if distance < best_distance {
            best = edge;
            best_distance = distance;
        }
    }
    best
}

/// First edge (in `top, right, bottom, left` order) closer than `threshold`.
///
/// This is a first-match scan: if both the top and the bottom edge are under
/// threshold, `top` wins regardless of which is nearer. Auto-scroll direction
/// depends on this order. See [`near_edge`] with [`EdgeScan::Nearest`] for the
/// true-nearest variant.
#[must_use]
pub fn is_near_edge(point: Point, bounds: Bounds, threshold: f64) -> NearEdge {
    near_edge(EdgeScan::FirstMatch, point, bounds, threshold)
}

/// Edge-proximity query with an explicit selection policy.
#[must_use]
pub fn near_edge(scan: EdgeScan, point: Point, bounds: Bounds, threshold: f64) -> NearEdge {
    let distances = distance_to_edge(point, bounds);
    let mut found = NearEdge::NONE;
    for (edge, distance) in distances.iter() {
        if distance >= threshold || distance.is_nan() {
            continue;
        }
        match scan {
            EdgeScan::FirstMatch => {
                return NearEdge {
                    edge: Some(edge),
                    distance,
                };
            }
            EdgeScan::Nearest => {
                if found.edge.is_none() || distance < found.distance {
                    found = NearEdge {
                        edge: Some(edge),
                        distance,
                    };
                }
            }
        }
    }
    found
}

/// Linear auto-scroll ramp.
///
/// Returns `max_speed` at `distance == 0`, falling linearly to `0` at
/// `distance == threshold`, and `0` beyond. Negative distances (pointer past
/// the edge) are not clamped and exceed `max_speed`. A non-positive threshold
/// disables the ramp.
#[must_use]
pub fn scroll_speed(distance: f64, threshold: f64, max_speed: f64) -> f64 {
    if threshold <= 0.0 || distance >= threshold {
        return 0.0;
    }
    ((threshold - distance) / threshold) * max_speed
}

/// Inclusive point-in-rectangle test.
#[inline]
#[must_use]
pub fn is_point_in_rect(point: Point, bounds: Bounds) -> bool {
    bounds.contains(point)
}

/// Center of `bounds`.
#[inline]
#[must_use]
pub fn rect_center(bounds: Bounds) -> Point {
    bounds.center()
}

/// Classify a y coordinate against the vertical midpoint of `bounds`.
///
/// The exact midpoint classifies as [`VerticalDrop::Bottom`].
#[must_use]
pub fn vertical_drop_position(y: f64, bounds: Bounds) -> VerticalDrop {
    if y < bounds.center().y {
        VerticalDrop::Top
    } else {
        VerticalDrop::Bottom
    }
}

/// Classify an x coordinate against the horizontal midpoint of `bounds`.
///
/// The exact midpoint classifies as [`HorizontalDrop::Right`].
#[must_use]
pub fn horizontal_drop_position(x: f64, bounds: Bounds) -> HorizontalDrop {
    if x < bounds.center().x {
        HorizontalDrop::Left
    } else {
        HorizontalDrop::Right
    }
}
