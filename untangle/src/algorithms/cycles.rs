use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{CycleId, Graph, VertexId};

/// How the presentation layer should draw an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    Crossing = 0,
    CleanCycle = 1,
    TangledCycle = 2,
}

/// How the presentation layer should draw an orb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbStyle {
    Unlit = 0,
    // Owner cycle has no crossing edge
    Lit = 1,
}

pub fn cycle_is_clean(g: &Graph, cycle: CycleId) -> bool {
    g.edges.iter().filter(|e| e.cycle == cycle).all(|e| !e.crossing)
}

/// Cycles with no crossing edge, per the last detection pass.
pub fn clean_cycles(g: &Graph) -> BTreeSet<CycleId> {
    let mut crossings: BTreeMap<CycleId, u32> = BTreeMap::new();
    for e in &g.edges {
        *crossings.entry(e.cycle).or_insert(0) += e.crossing as u32;
    }
    crossings.into_iter().filter(|&(_, n)| n == 0).map(|(c, _)| c).collect()
}

/// Cycle of the first edge, in edge order, that touches `v`.
pub fn owner_cycle(g: &Graph, v: VertexId) -> Option<CycleId> {
    g.edges.iter().find(|e| e.touches(v)).map(|e| e.cycle)
}

pub fn edge_styles(g: &Graph) -> Vec<EdgeStyle> {
    let clean = clean_cycles(g);
    g.edges
        .iter()
        .map(|e| {
            if e.crossing { EdgeStyle::Crossing }
            else if clean.contains(&e.cycle) { EdgeStyle::CleanCycle }
            else { EdgeStyle::TangledCycle }
        })
        .collect()
}

pub fn orb_styles(g: &Graph) -> Vec<OrbStyle> {
    let clean = clean_cycles(g);
    g.vertices
        .iter()
        .map(|v| match owner_cycle(g, v.id) {
            Some(c) if clean.contains(&c) => OrbStyle::Lit,
            _ => OrbStyle::Unlit,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Edge, Vertex};

    fn two_triangles() -> Graph {
        let mut g = Graph::from_cycle_sizes(&[3, 3]);
        g.edges[4].crossing = true;
        g
    }

    #[test]
    fn clean_set_and_lookup() {
        let g = two_triangles();
        assert!(cycle_is_clean(&g, 0));
        assert!(!cycle_is_clean(&g, 1));
        assert_eq!(clean_cycles(&g), BTreeSet::from([0]));
        assert_eq!(owner_cycle(&g, 4), Some(1));
        assert_eq!(owner_cycle(&g, 99), None);
    }

    #[test]
    fn unknown_cycle_counts_as_clean() {
        assert!(cycle_is_clean(&two_triangles(), 7));
    }

    #[test]
    fn isolated_vertex_has_no_owner() {
        let mut g = Graph::from_cycle_sizes(&[3]);
        g.vertices.push(Vertex { id: 3, x: 0.0, y: 0.0 });
        assert_eq!(owner_cycle(&g, 3), None);
        assert_eq!(orb_styles(&g)[3], OrbStyle::Unlit);
    }

    #[test]
    fn owner_is_first_edge_in_scan_order() {
        let mut g = Graph::from_cycle_sizes(&[3]);
        g.edges.insert(0, Edge { a: 1, b: 2, cycle: 5, crossing: false });
        assert_eq!(owner_cycle(&g, 1), Some(5));
        assert_eq!(owner_cycle(&g, 0), Some(0));
    }

    #[test]
    fn styles_follow_flags() {
        let g = two_triangles();
        assert_eq!(
            edge_styles(&g),
            vec![
                EdgeStyle::CleanCycle, EdgeStyle::CleanCycle, EdgeStyle::CleanCycle,
                EdgeStyle::TangledCycle, EdgeStyle::Crossing, EdgeStyle::TangledCycle,
            ]
        );
        assert_eq!(
            orb_styles(&g),
            vec![OrbStyle::Lit, OrbStyle::Lit, OrbStyle::Lit, OrbStyle::Unlit, OrbStyle::Unlit, OrbStyle::Unlit]
        );
    }
}
