use serde::{Deserialize, Serialize};

use crate::algorithms::cycles::{EdgeStyle, OrbStyle};
use crate::model::{CycleId, Edge, Graph, Vertex, VertexId};
use crate::Puzzle;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything the presentation layer needs to redraw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub crossings: usize,
    #[serde(default)]
    pub clean_cycles: Vec<CycleId>,
    #[serde(default)]
    pub edge_styles: Vec<EdgeStyle>,
    #[serde(default)]
    pub orb_styles: Vec<OrbStyle>,
    #[serde(default)]
    pub selected: Option<VertexId>,
    #[serde(default)]
    pub solved: bool,
}

impl Snapshot {
    pub fn of(p: &Puzzle) -> Snapshot {
        let g = p.graph();
        Snapshot {
            version: SNAPSHOT_VERSION,
            vertices: g.vertices.clone(),
            edges: g.edges.clone(),
            crossings: p.crossings(),
            clean_cycles: p.clean_cycles().into_iter().collect(),
            edge_styles: p.edge_styles(),
            orb_styles: p.orb_styles(),
            selected: p.selected(),
            solved: p.is_solved(),
        }
    }

    pub fn from_json(s: &str) -> Result<Snapshot, serde_json::Error> { serde_json::from_str(s) }

    /// Rebuilds a puzzle from the graph part of the snapshot; derived fields
    /// are recomputed. `None` if vertex or cycle ids are not dense, an edge
    /// points at a missing vertex, or the edges do not form disjoint cycles.
    pub fn into_puzzle(self) -> Option<Puzzle> {
        if self.version != SNAPSHOT_VERSION { return None; }
        let n = self.vertices.len() as u32;
        if self.vertices.iter().enumerate().any(|(i, v)| v.id != i as u32 || !v.x.is_finite() || !v.y.is_finite()) {
            return None;
        }
        if self.edges.iter().any(|e| e.a >= n || e.b >= n || e.a == e.b) {
            return None;
        }
        let graph = Graph { vertices: self.vertices, edges: self.edges };
        if !graph.has_valid_cycles() { return None; }
        let selected = self.selected.filter(|v| *v < n);
        let mut p = Puzzle::from_graph(graph);
        p.selected = selected;
        Some(p)
    }
}

impl Puzzle {
    pub fn snapshot(&self) -> Snapshot { Snapshot::of(self) }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }

    pub fn from_json(s: &str) -> Option<Puzzle> {
        Snapshot::from_json(s).ok()?.into_puzzle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_dangling_edges() {
        let doc = r#"{
            "version": 1,
            "vertices": [ {"id":0,"x":0.0,"y":0.0}, {"id":1,"x":5.0,"y":0.0} ],
            "edges": [ {"a":0,"b":42,"cycle":0} ]
        }"#;
        assert!(Puzzle::from_json(doc).is_none());
    }

    fn triangle_doc(cycles: [u32; 3]) -> String {
        format!(
            r#"{{
                "version": 1,
                "vertices": [ {{"id":0,"x":0.0,"y":0.0}}, {{"id":1,"x":5.0,"y":0.0}}, {{"id":2,"x":0.0,"y":5.0}} ],
                "edges": [ {{"a":0,"b":1,"cycle":{}}}, {{"a":1,"b":2,"cycle":{}}}, {{"a":2,"b":0,"cycle":{}}} ]
            }}"#,
            cycles[0], cycles[1], cycles[2]
        )
    }

    #[test]
    fn cycle_ids_must_be_dense() {
        assert!(Puzzle::from_json(&triangle_doc([0, 0, 0])).is_some());
        assert!(Puzzle::from_json(&triangle_doc([u32::MAX; 3])).is_none());
        assert!(Puzzle::from_json(&triangle_doc([7, 7, 7])).is_none());
        assert!(Puzzle::from_json(&triangle_doc([0, 0, 1])).is_none());
    }

    #[test]
    fn rejects_non_cycle_edges() {
        // Closed triangle plus a stray vertex 3 with no edges
        let doc = r#"{
            "version": 1,
            "vertices": [ {"id":0,"x":0.0,"y":0.0}, {"id":1,"x":5.0,"y":0.0}, {"id":2,"x":0.0,"y":5.0}, {"id":3,"x":9.0,"y":9.0} ],
            "edges": [ {"a":0,"b":1,"cycle":0}, {"a":1,"b":2,"cycle":0}, {"a":2,"b":0,"cycle":0} ]
        }"#;
        assert!(Puzzle::from_json(doc).is_none());
    }

    #[test]
    fn rejects_unknown_version() {
        let doc = r#"{"version": 9, "vertices": [], "edges": []}"#;
        assert!(Puzzle::from_json(doc).is_none());
    }

    #[test]
    fn derived_fields_are_recomputed() {
        // Claims solved, but the bow tie crosses
        let doc = r#"{
            "version": 1,
            "vertices": [
                {"id":0,"x":10.0,"y":0.0}, {"id":1,"x":0.0,"y":0.0},
                {"id":2,"x":10.0,"y":10.0}, {"id":3,"x":0.0,"y":10.0}
            ],
            "edges": [
                {"a":0,"b":1,"cycle":0}, {"a":1,"b":2,"cycle":0},
                {"a":2,"b":3,"cycle":0}, {"a":3,"b":0,"cycle":0}
            ],
            "crossings": 0,
            "solved": true,
            "selected": 17
        }"#;
        let p = Puzzle::from_json(doc).expect("valid snapshot");
        assert_eq!(p.crossings(), 1);
        assert!(!p.is_solved());
        assert_eq!(p.selected(), None);
    }
}
