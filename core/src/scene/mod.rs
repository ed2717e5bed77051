use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

pub mod graph;
pub mod types;

pub use graph::find_cycle;
pub use types::{Angle, GeometryError, GeometryResult, Point, StraightLine, Surface};

use crate::geometry::distance;

/// A universally unique identifier for any scene entity (Point, Line, Surface).
/// We wrap Uuid to ensure strong typing and allow for potential future
/// extension (e.g. adding generation counters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an ID from a specific UUID (useful for restoration).
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The mutable collection of all points, lines, and surfaces.
///
/// Pools are `Vec`s rather than maps: insertion order is the tie-break for
/// hover resolution and cycle detection, so ordered iteration stability
/// matters more than lookup speed at this scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    points: Vec<Point>,
    lines: Vec<StraightLine>,
    surfaces: Vec<Surface>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn lines(&self) -> &[StraightLine] {
        &self.lines
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn point(&self, id: EntityId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn line(&self, id: EntityId) -> Option<&StraightLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Insert a new point at the given position.
    pub fn add_point(&mut self, x: f64, y: f64) -> GeometryResult<EntityId> {
        let point = Point::new(x, y)?;
        let id = point.id;
        self.points.push(point);
        debug!(%id, x, y, "point added");
        Ok(id)
    }

    /// Insert a new line between two existing, distinct points.
    pub fn add_line(&mut self, a: EntityId, b: EntityId) -> GeometryResult<EntityId> {
        let line = StraightLine::new(a, b)?;
        // The editor only commits hovered points, so unknown endpoints
        // indicate a caller bug.
        self.resolve(&line)?;
        let id = line.id;
        self.lines.push(line);
        debug!(%id, "line added");
        Ok(id)
    }

    /// Insert an already-validated surface.
    pub fn add_surface(&mut self, surface: Surface) -> EntityId {
        let id = surface.id;
        self.surfaces.push(surface);
        debug!(%id, "surface added");
        id
    }

    /// Remove a point, cascading to every line that ends at it and to every
    /// surface whose boundary referenced a removed line. Returns the number
    /// of lines removed.
    pub fn remove_point(&mut self, id: EntityId) -> usize {
        let (removed, kept): (Vec<StraightLine>, Vec<StraightLine>) =
            self.lines.drain(..).partition(|l| l.connects(id));
        self.lines = kept;

        self.surfaces
            .retain(|s| !removed.iter().any(|l| s.references_line(l.id)));
        self.points.retain(|p| p.id != id);

        debug!(%id, removed_lines = removed.len(), "point removed");
        removed.len()
    }

    /// Resolve a line's endpoints against the point pool.
    fn resolve(&self, line: &StraightLine) -> GeometryResult<(&Point, &Point)> {
        let a = self.point(line.a).ok_or_else(|| {
            GeometryError::InvariantViolation(format!("line endpoint {} not in scene", line.a))
        })?;
        let b = self.point(line.b).ok_or_else(|| {
            GeometryError::InvariantViolation(format!("line endpoint {} not in scene", line.b))
        })?;
        Ok((a, b))
    }

    /// Euclidean length of a line, resolved against the point pool.
    pub fn line_length(&self, line: &StraightLine) -> GeometryResult<f64> {
        let (a, b) = self.resolve(line)?;
        Ok(distance(&a.pos(), &b.pos()))
    }

    /// Sum of boundary segment lengths.
    pub fn surface_perimeter(&self, surface: &Surface) -> GeometryResult<f64> {
        surface.boundary().iter().try_fold(0.0, |acc, &line_id| {
            let line = self.line(line_id).ok_or_else(|| {
                GeometryError::InvariantViolation(format!(
                    "surface boundary line {line_id} not in scene"
                ))
            })?;
            Ok(acc + self.line_length(line)?)
        })
    }

    /// Measure an angle in degrees, resolving its vertex and far endpoints.
    pub fn angle_measure(&self, angle: &Angle) -> GeometryResult<f64> {
        let (a, b) = self.resolve(&angle.ab)?;
        let (_, c) = self.resolve(&angle.ac)?;
        Angle::measure_between(&a.pos(), &b.pos(), &c.pos())
    }

    /// First point in insertion order whose hit-radius contains the cursor.
    /// Overlapping points tie-break by insertion order.
    pub fn hovered_point(&self, mx: f64, my: f64, hit_radius: f64) -> Option<EntityId> {
        self.points
            .iter()
            .find(|p| p.is_hovered(mx, my, hit_radius))
            .map(|p| p.id)
    }

    /// First line in insertion order connecting the two points, either direction.
    pub fn line_between(&self, a: EntityId, b: EntityId) -> Option<&StraightLine> {
        self.lines
            .iter()
            .find(|l| (l.a == a && l.b == b) || (l.a == b && l.b == a))
    }

    /// Run cycle detection over the current line set.
    ///
    /// Returns the cycle as an ordered point sequence (first == last), or
    /// `None` when no polygon exists — a normal negative result.
    pub fn detect_polygon(&self) -> Option<Vec<EntityId>> {
        find_cycle(&self.points, &self.lines)
    }

    /// Build a surface from a detected cycle by mapping consecutive point
    /// pairs back to the earliest matching lines.
    pub fn surface_from_cycle(&self, cycle: &[EntityId]) -> GeometryResult<Surface> {
        let walk: Vec<StraightLine> = cycle
            .windows(2)
            .map(|pair| {
                self.line_between(pair[0], pair[1]).cloned().ok_or_else(|| {
                    GeometryError::InvariantViolation(format!(
                        "no line between cycle points {} and {}",
                        pair[0], pair[1]
                    ))
                })
            })
            .collect::<GeometryResult<_>>()?;
        Surface::from_walk(&walk)
    }
}
