use serde::{Deserialize, Serialize};

use crate::geometry::limits::MIN_CYCLE_LEN;

pub type VertexId = u32;
pub type CycleId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub a: VertexId,
    pub b: VertexId,
    pub cycle: CycleId,
    // Derived; rewritten by every detection pass
    #[serde(default)]
    pub crossing: bool,
}

impl Edge {
    #[inline]
    pub fn touches(&self, v: VertexId) -> bool { self.a == v || self.b == v }

    #[inline]
    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.a == other.a || self.a == other.b || self.b == other.a || self.b == other.b
    }
}

/// Vertices and edges of a puzzle. A vertex id is its index in `vertices`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Lays out consecutive vertex ids into closed cycles of the given sizes.
    /// Every vertex starts at the origin.
    ///
    /// Panics if any size is below 3.
    pub fn from_cycle_sizes(sizes: &[usize]) -> Graph {
        let total: usize = sizes.iter().sum();
        let vertices = (0..total as u32).map(|id| Vertex { id, x: 0.0, y: 0.0 }).collect();
        let mut edges = Vec::with_capacity(total);
        let mut next: u32 = 0;
        for (cycle, &size) in sizes.iter().enumerate() {
            assert!(size >= 3, "cycle {} has {} vertices, at least 3 required", cycle, size);
            let members: Vec<VertexId> = (next..next + size as u32).collect();
            for i in 0..size {
                edges.push(Edge {
                    a: members[i],
                    b: members[(i + 1) % size],
                    cycle: cycle as CycleId,
                    crossing: false,
                });
            }
            next += size as u32;
        }
        Graph { vertices, edges }
    }

    pub fn vertex_count(&self) -> u32 { self.vertices.len() as u32 }
    pub fn edge_count(&self) -> u32 { self.edges.len() as u32 }

    pub fn contains(&self, v: VertexId) -> bool { (v as usize) < self.vertices.len() }

    pub fn position(&self, v: VertexId) -> Option<(f32, f32)> {
        self.vertices.get(v as usize).map(|p| (p.x, p.y))
    }

    /// Panics on an unknown vertex.
    pub fn set_position(&mut self, v: VertexId, x: f32, y: f32) {
        let n = self.vertices.len();
        let p = self.vertices.get_mut(v as usize).unwrap_or_else(|| panic!("vertex {} out of range (count {})", v, n));
        p.x = x;
        p.y = y;
    }

    /// Exchanges the coordinates of two vertices; ids stay put.
    /// Crossing flags are left stale until the next detection pass.
    ///
    /// Panics on an unknown vertex.
    pub fn swap(&mut self, a: VertexId, b: VertexId) {
        let n = self.vertices.len();
        assert!(self.contains(a), "vertex {} out of range (count {})", a, n);
        assert!(self.contains(b), "vertex {} out of range (count {})", b, n);
        log::trace!("swap {} <-> {}", a, b);
        if a == b { return; }
        let (pa, pb) = (self.vertices[a as usize], self.vertices[b as usize]);
        self.vertices[a as usize].x = pb.x;
        self.vertices[a as usize].y = pb.y;
        self.vertices[b as usize].x = pa.x;
        self.vertices[b as usize].y = pa.y;
    }

    /// Number of distinct cycle ids (ids are dense from 0).
    pub fn cycle_count(&self) -> u32 {
        self.edges.iter().map(|e| e.cycle).max().map_or(0, |c| c.saturating_add(1))
    }

    /// True when cycle ids are dense from 0, every cycle has at least three
    /// edges, and every vertex has degree 2 inside exactly one cycle.
    pub fn has_valid_cycles(&self) -> bool {
        let n = self.vertices.len();
        // Also bounds the id so the per-cycle tables below stay small
        if self.edges.iter().any(|e| e.cycle as usize >= self.edges.len()) {
            return false;
        }
        let mut owner: Vec<Option<CycleId>> = vec![None; n];
        let mut degree = vec![0u32; n];
        let mut sizes = vec![0usize; self.cycle_count() as usize];
        for e in &self.edges {
            if !self.contains(e.a) || !self.contains(e.b) || e.a == e.b { return false; }
            sizes[e.cycle as usize] += 1;
            for v in [e.a as usize, e.b as usize] {
                degree[v] += 1;
                match owner[v] {
                    Some(c) if c != e.cycle => return false,
                    _ => owner[v] = Some(e.cycle),
                }
            }
        }
        degree.iter().all(|d| *d == 2) && sizes.iter().all(|s| *s >= MIN_CYCLE_LEN)
    }

    /// Edge count per cycle, indexed by cycle id. In a simple cycle this is
    /// also its vertex count.
    pub fn cycle_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.cycle_count() as usize];
        for e in &self.edges { sizes[e.cycle as usize] += 1; }
        sizes
    }

    pub fn crossing_edge_count(&self) -> u32 {
        self.edges.iter().filter(|e| e.crossing).count() as u32
    }

    /// Flattened `[x0, y0, x1, y1, ...]` in id order.
    pub fn position_array(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| [v.x, v.y]).collect()
    }

    /// Flattened `[a0, b0, a1, b1, ...]` in edge order.
    pub fn endpoint_array(&self) -> Vec<u32> {
        self.edges.iter().flat_map(|e| [e.a, e.b]).collect()
    }
}
