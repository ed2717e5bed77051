use crate::draw::Color;
use crate::geometry::{distance_squared, Point2, Vector2, EPSILON};
use super::EntityId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by figure construction and measurement.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("construction failed: {0}")]
    Construction(String),

    #[error("domain error: {0}")]
    Domain(String),

    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

pub type GeometryResult<T> = Result<T, GeometryError>;

/// A point is that which has no parts; it has position.
///
/// Identity is the `id`, never coordinate equality: two points at the same
/// coordinates are distinct entities. `radius` and `color` are render hints,
/// not geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Point {
    /// Create a point at the given position. Coordinates must be finite.
    pub fn new(x: f64, y: f64) -> GeometryResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(GeometryError::Construction(format!(
                "point coordinates must be finite, got ({x}, {y})"
            )));
        }
        Ok(Self { id: EntityId::new(), x, y, radius: None, color: None })
    }

    pub fn pos(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Hit test against a cursor position. This is interaction logic, not
    /// geometric truth: a point "contains" the cursor inside `hit_radius`.
    pub fn is_hovered(&self, mx: f64, my: f64, hit_radius: f64) -> bool {
        distance_squared(&self.pos(), &Point2::new(mx, my)) <= hit_radius * hit_radius
    }
}

/// A straight line lies evenly with the points on itself.
/// Its extremities are points.
///
/// Endpoints are stored as ids into the scene's point pool, so moving a
/// point moves every line attached to it and deletion invalidates cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightLine {
    pub id: EntityId,
    pub a: EntityId,
    pub b: EntityId,
}

impl StraightLine {
    /// Create a line between two distinct points. Identity is compared,
    /// not coordinates: two coincident but distinct points are valid endpoints.
    pub fn new(a: EntityId, b: EntityId) -> GeometryResult<Self> {
        if a == b {
            return Err(GeometryError::Construction(
                "a straight line requires two distinct points".into(),
            ));
        }
        Ok(Self { id: EntityId::new(), a, b })
    }

    pub fn connects(&self, point: EntityId) -> bool {
        self.a == point || self.b == point
    }

    /// The opposite endpoint, if `point` is one of this line's extremities.
    pub fn other_endpoint(&self, point: EntityId) -> Option<EntityId> {
        if point == self.a {
            Some(self.b)
        } else if point == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// The inclination of two lines which meet each other
/// but do not have the same direction.
///
/// Both sides must start at the shared vertex (`ab.a == ac.a`), enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    pub vertex: EntityId,
    pub ab: StraightLine,
    pub ac: StraightLine,
}

impl Angle {
    pub fn new(ab: StraightLine, ac: StraightLine) -> GeometryResult<Self> {
        if ab.a != ac.a {
            return Err(GeometryError::Domain("angle sides must share vertex".into()));
        }
        Ok(Self { vertex: ab.a, ab, ac })
    }

    /// Angle in degrees between the two side vectors, in [0, 180].
    ///
    /// Resolved against the given endpoint positions: `a` is the vertex,
    /// `b` and `c` are the far endpoints of the two sides.
    pub fn measure_between(a: &Point2, b: &Point2, c: &Point2) -> GeometryResult<f64> {
        let v1: Vector2 = b - a;
        let v2: Vector2 = c - a;
        if v1.norm() < EPSILON || v2.norm() < EPSILON {
            return Err(GeometryError::Domain("zero-length side".into()));
        }
        let cos_theta = (v1.dot(&v2) / (v1.norm() * v2.norm())).clamp(-1.0, 1.0);
        Ok(cos_theta.acos().to_degrees())
    }
}

/// A surface is that which has length and breadth only.
/// Its extremities are lines.
///
/// Built only from a boundary already verified to be a closed walk; the
/// constructor re-checks the walk defensively and fails loudly on malformed
/// input rather than accepting it. Immutable once formed — if a boundary
/// line is later removed the scene drops the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub id: EntityId,
    /// Boundary line ids, in walk order.
    boundary: Vec<EntityId>,
    /// Ordered distinct vertex point ids (closing point not repeated).
    vertices: Vec<EntityId>,
}

impl Surface {
    /// Build a surface from an ordered closed walk of line segments.
    ///
    /// Requires at least 3 segments, consecutive segments sharing an
    /// endpoint, no repeated vertex except the closing one, and the walk
    /// returning to its starting point.
    pub fn from_walk(walk: &[StraightLine]) -> GeometryResult<Self> {
        if walk.len() < 3 {
            return Err(GeometryError::InvariantViolation(format!(
                "surface boundary needs at least 3 segments, got {}",
                walk.len()
            )));
        }

        // Orient the first segment: the endpoint it shares with the second
        // segment is where the walk continues.
        let first = &walk[0];
        let second = &walk[1];
        let pivot = if second.connects(first.b) {
            first.b
        } else if second.connects(first.a) {
            first.a
        } else {
            return Err(GeometryError::InvariantViolation(
                "surface boundary segments do not chain".into(),
            ));
        };
        let origin = first
            .other_endpoint(pivot)
            .ok_or_else(|| {
                GeometryError::InvariantViolation("surface boundary segments do not chain".into())
            })?;

        let mut vertices = vec![origin, pivot];
        let mut cursor = pivot;

        for (i, line) in walk.iter().enumerate().skip(1) {
            cursor = line.other_endpoint(cursor).ok_or_else(|| {
                GeometryError::InvariantViolation("surface boundary segments do not chain".into())
            })?;
            let last = i == walk.len() - 1;
            if cursor == origin {
                if !last {
                    return Err(GeometryError::InvariantViolation(
                        "surface boundary revisits a point".into(),
                    ));
                }
            } else if vertices.contains(&cursor) {
                return Err(GeometryError::InvariantViolation(
                    "surface boundary revisits a point".into(),
                ));
            } else {
                vertices.push(cursor);
            }
        }

        if cursor != origin {
            return Err(GeometryError::InvariantViolation(
                "surface boundary walk is not closed".into(),
            ));
        }

        Ok(Self {
            id: EntityId::new(),
            boundary: walk.iter().map(|l| l.id).collect(),
            vertices,
        })
    }

    /// Boundary line ids in walk order.
    pub fn boundary(&self) -> &[EntityId] {
        &self.boundary
    }

    /// Ordered distinct vertex point ids.
    pub fn vertices(&self) -> &[EntityId] {
        &self.vertices
    }

    pub fn references_line(&self, line: EntityId) -> bool {
        self.boundary.contains(&line)
    }
}
