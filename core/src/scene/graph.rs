//! Line graph construction and closed-polygon detection.
//!
//! The graph is rebuilt from scratch on demand after each line insertion
//! rather than maintained incrementally; at interactive scale (tens of
//! points) the rebuild is cheaper than keeping the structure consistent
//! through deletions.

use super::types::{Point, StraightLine};
use super::EntityId;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Find the first simple cycle in the line graph.
///
/// Adjacency is undirected and built in line insertion order; a second line
/// between the same pair of points is a no-op re-insertion so a doubled
/// edge can never be walked as a two-segment "polygon". Candidate start
/// points are visited in scene insertion order and neighbors in adjacency
/// order, so repeated runs over the same scene return the identical cycle.
///
/// Returns the cycle as an ordered point sequence with first == last, or
/// `None` when no polygon exists.
pub fn find_cycle(points: &[Point], lines: &[StraightLine]) -> Option<Vec<EntityId>> {
    // A closed walk needs at least three segments.
    if lines.len() < 3 {
        return None;
    }

    let adjacency = build_adjacency(lines);

    for start in points.iter().map(|p| p.id) {
        let degree = adjacency.get(&start).map_or(0, |n| n.len());
        if degree < 2 {
            continue;
        }
        trace!(%start, degree, "probing cycle start");
        if let Some(cycle) = walk_from(start, &adjacency) {
            return Some(cycle);
        }
    }

    None
}

fn build_adjacency(lines: &[StraightLine]) -> HashMap<EntityId, Vec<EntityId>> {
    let mut adjacency: HashMap<EntityId, Vec<EntityId>> = HashMap::new();
    for line in lines {
        let forward = adjacency.entry(line.a).or_default();
        if !forward.contains(&line.b) {
            forward.push(line.b);
        }
        let backward = adjacency.entry(line.b).or_default();
        if !backward.contains(&line.a) {
            backward.push(line.a);
        }
    }
    adjacency
}

/// Depth-first walk with an explicit stack: `path` holds the points taken
/// so far, `next_neighbor[i]` the next neighbor index to try at `path[i]`.
/// A neighbor equal to the start closes the cycle only once the path holds
/// at least three points; any other in-path neighbor is rejected to keep
/// the cycle simple.
fn walk_from(
    start: EntityId,
    adjacency: &HashMap<EntityId, Vec<EntityId>>,
) -> Option<Vec<EntityId>> {
    let mut path = vec![start];
    let mut in_path: HashSet<EntityId> = HashSet::new();
    in_path.insert(start);
    let mut next_neighbor = vec![0usize];

    while let Some(&node) = path.last() {
        let neighbors = match adjacency.get(&node) {
            Some(n) => n,
            None => return None, // every walked node was inserted via a line
        };
        let cursor = next_neighbor.last_mut()?;

        if *cursor >= neighbors.len() {
            // Exhausted this node; backtrack.
            next_neighbor.pop();
            if let Some(dropped) = path.pop() {
                in_path.remove(&dropped);
            }
            continue;
        }

        let candidate = neighbors[*cursor];
        *cursor += 1;

        if candidate == start {
            if path.len() >= 3 {
                let mut cycle = path;
                cycle.push(start);
                return Some(cycle);
            }
            // A two-point walk closing through its own edge is not a polygon.
            continue;
        }

        if in_path.contains(&candidate) {
            continue;
        }

        path.push(candidate);
        in_path.insert(candidate);
        next_neighbor.push(0);
    }

    None
}
