use serde::Serialize;

use crate::geometry::intersect::{classify_segments, segments_intersect, SegIntersection};
use crate::model::{Edge, Graph, Vertex};

/// One intersecting edge pair and where the segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CrossingHit {
    pub first: usize,
    pub second: usize,
    pub x: f32,
    pub y: f32,
}

#[inline]
fn endpoints(vertices: &[Vertex], e: &Edge) -> ((f32, f32), (f32, f32)) {
    let a = vertices[e.a as usize]; let b = vertices[e.b as usize];
    ((a.x, a.y), (b.x, b.y))
}

#[inline]
fn edges_cross(vertices: &[Vertex], e1: &Edge, e2: &Edge) -> bool {
    if e1.shares_endpoint(e2) { return false; }
    let (p1, p2) = endpoints(vertices, e1);
    let (p3, p4) = endpoints(vertices, e2);
    segments_intersect(p1, p2, p3, p4)
}

/// Recomputes every edge's `crossing` flag from current positions and
/// returns the number of crossing pairs counted. Zero means solved.
///
/// Pairs whose edges are both already flagged are skipped, so the count can
/// fall short of the true pair total once an edge crosses several others;
/// the flags and the zero/non-zero outcome are exact.
pub fn detect_crossings(g: &mut Graph) -> usize {
    let Graph { vertices, edges } = g;
    for e in edges.iter_mut() { e.crossing = false; }
    let mut pairs = 0usize;
    for i in 0..edges.len() {
        for j in (i + 1)..edges.len() {
            if edges[i].crossing && edges[j].crossing { continue; }
            if edges_cross(vertices, &edges[i], &edges[j]) {
                edges[i].crossing = true;
                edges[j].crossing = true;
                pairs += 1;
            }
        }
    }
    log::trace!("detection pass: {} crossing pairs over {} edges", pairs, edges.len());
    pairs
}

/// Every intersecting pair with its meeting point, in `(i, j)` order with
/// `i < j`. Flags are left alone; used for hint markers.
pub fn crossing_hits(g: &Graph) -> Vec<CrossingHit> {
    let mut out = Vec::new();
    for (i, e1) in g.edges.iter().enumerate() {
        for (j, e2) in g.edges.iter().enumerate().skip(i + 1) {
            if e1.shares_endpoint(e2) { continue; }
            let (p1, p2) = endpoints(&g.vertices, e1);
            let (p3, p4) = endpoints(&g.vertices, e2);
            if let SegIntersection::Cross { x, y, .. } = classify_segments(p1.0, p1.1, p2.0, p2.1, p3.0, p3.1, p4.0, p4.1) {
                out.push(CrossingHit { first: i, second: j, x: x as f32, y: y as f32 });
            }
        }
    }
    out
}

/// Every intersecting pair `(i, j)`, `i < j`, without touching the flags.
pub fn crossing_pairs(g: &Graph) -> Vec<(usize, usize)> {
    crossing_hits(g).into_iter().map(|h| (h.first, h.second)).collect()
}
