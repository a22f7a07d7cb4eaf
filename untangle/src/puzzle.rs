use std::collections::BTreeSet;

use serde::Serialize;

use crate::algorithms::crossings::{crossing_hits, detect_crossings, CrossingHit};
use crate::algorithms::cycles::{self, EdgeStyle, OrbStyle};
use crate::algorithms::{generate::generate, layout::place};
use crate::config::PuzzleConfig;
use crate::error::PuzzleError;
use crate::model::{CycleId, Graph, VertexId};
use crate::rng::RandomSource;

/// Swaps random pairs of distinct vertices until a detection pass finds a
/// crossing. Returns the crossing count, or `None` if `max_swaps` ran out.
pub fn shuffle_until_tangled(g: &mut Graph, max_swaps: u32, rng: &mut impl RandomSource) -> Option<usize> {
    let n = g.vertex_count() as i32;
    if n < 2 { return None; }
    let mut found = detect_crossings(g);
    let mut swaps = 0u32;
    while found == 0 {
        if swaps >= max_swaps { return None; }
        let i = rng.between(0, n - 1);
        let mut j = rng.between(0, n - 1);
        while j == i { j = rng.between(0, n - 1); }
        g.swap(i as VertexId, j as VertexId);
        swaps += 1;
        found = detect_crossings(g);
    }
    log::debug!("tangled after {} shuffle swaps ({} crossings)", swaps, found);
    Some(found)
}

/// Result of clicking an orb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    Selected { id: VertexId },
    Deselected { id: VertexId },
    /// Positions exchanged; call [`Puzzle::settle`] once the move is shown
    Swapped { a: VertexId, b: VertexId },
}

/// Outcome of a detection pass after a move settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Settlement {
    pub crossings: usize,
    pub solved: bool,
    /// True only on the first settle that reaches zero crossings
    pub announce: bool,
}

#[derive(Clone, Debug)]
pub struct Puzzle {
    pub(crate) graph: Graph,
    pub(crate) selected: Option<VertexId>,
    pub(crate) crossings: usize,
    pub(crate) solved_announced: bool,
}

impl Puzzle {
    /// Generates, places and shuffles a fresh puzzle that starts with at
    /// least one crossing.
    pub fn new(cfg: &PuzzleConfig, rng: &mut impl RandomSource) -> Result<Puzzle, PuzzleError> {
        cfg.validate()?;
        for round in 0..cfg.shuffle.max_regenerations {
            let mut graph = generate(&cfg.generation, rng);
            let relaxed = place(&mut graph, &cfg.layout, rng);
            if relaxed > 0 {
                log::debug!("{} orbs placed closer than {}", relaxed, cfg.layout.min_distance);
            }
            if let Some(crossings) = shuffle_until_tangled(&mut graph, cfg.shuffle.max_swaps, rng) {
                return Ok(Puzzle { graph, selected: None, crossings, solved_announced: false });
            }
            log::warn!("layout stayed untangled after {} swaps (round {}), regenerating", cfg.shuffle.max_swaps, round + 1);
        }
        Err(PuzzleError::NoTangledLayout { regenerations: cfg.shuffle.max_regenerations })
    }

    /// Wraps an existing graph as-is and runs one detection pass.
    pub fn from_graph(mut graph: Graph) -> Puzzle {
        let crossings = detect_crossings(&mut graph);
        Puzzle { graph, selected: None, crossings, solved_announced: crossings == 0 }
    }

    pub fn graph(&self) -> &Graph { &self.graph }
    pub fn into_graph(self) -> Graph { self.graph }

    /// Crossing pairs from the last detection pass.
    pub fn crossings(&self) -> usize { self.crossings }
    pub fn is_solved(&self) -> bool { self.crossings == 0 }
    pub fn selected(&self) -> Option<VertexId> { self.selected }

    /// Panics on an unknown vertex.
    pub fn swap(&mut self, a: VertexId, b: VertexId) { self.graph.swap(a, b); }

    pub fn detect_crossings(&mut self) -> usize {
        self.crossings = detect_crossings(&mut self.graph);
        self.crossings
    }

    /// Advances the `Idle -> OrbSelected -> Idle` machine.
    ///
    /// Panics on an unknown vertex.
    pub fn select(&mut self, v: VertexId) -> Selection {
        assert!(self.graph.contains(v), "vertex {} out of range (count {})", v, self.graph.vertex_count());
        match self.selected.take() {
            None => {
                self.selected = Some(v);
                Selection::Selected { id: v }
            }
            Some(s) if s == v => Selection::Deselected { id: v },
            Some(s) => {
                self.graph.swap(s, v);
                Selection::Swapped { a: s, b: v }
            }
        }
    }

    pub fn clear_selection(&mut self) { self.selected = None; }

    /// Re-runs detection after a move has finished animating and reports
    /// whether this is the moment to announce the solve.
    pub fn settle(&mut self) -> Settlement {
        let crossings = self.detect_crossings();
        let solved = crossings == 0;
        let announce = solved && !self.solved_announced;
        self.solved_announced = solved;
        if announce {
            log::info!("puzzle solved");
        }
        Settlement { crossings, solved, announce }
    }

    pub fn cycle_is_clean(&self, cycle: CycleId) -> bool { cycles::cycle_is_clean(&self.graph, cycle) }
    pub fn clean_cycles(&self) -> BTreeSet<CycleId> { cycles::clean_cycles(&self.graph) }
    pub fn owner_cycle(&self, v: VertexId) -> Option<CycleId> { cycles::owner_cycle(&self.graph, v) }
    pub fn edge_styles(&self) -> Vec<EdgeStyle> { cycles::edge_styles(&self.graph) }
    pub fn orb_styles(&self) -> Vec<OrbStyle> { cycles::orb_styles(&self.graph) }
    pub fn crossing_hits(&self) -> Vec<CrossingHit> { crossing_hits(&self.graph) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    fn bow_tie() -> Puzzle {
        let mut g = Graph::from_cycle_sizes(&[4]);
        for (id, (x, y)) in [(10.0, 0.0), (0.0, 0.0), (10.0, 10.0), (0.0, 10.0)].into_iter().enumerate() {
            g.set_position(id as u32, x, y);
        }
        Puzzle::from_graph(g)
    }

    #[test]
    fn selection_machine() {
        let mut p = bow_tie();
        assert_eq!(p.select(2), Selection::Selected { id: 2 });
        assert_eq!(p.selected(), Some(2));
        assert_eq!(p.select(2), Selection::Deselected { id: 2 });
        assert_eq!(p.selected(), None);
        assert_eq!(p.select(0), Selection::Selected { id: 0 });
        assert_eq!(p.select(1), Selection::Swapped { a: 0, b: 1 });
        assert_eq!(p.selected(), None);
        assert_eq!(p.graph().position(0), Some((0.0, 0.0)));
    }

    #[test]
    fn solve_is_announced_once() {
        let mut p = bow_tie();
        assert_eq!(p.crossings(), 1);
        p.select(0);
        p.select(1);
        assert_eq!(p.settle(), Settlement { crossings: 0, solved: true, announce: true });
        assert_eq!(p.settle(), Settlement { crossings: 0, solved: true, announce: false });
        // Re-tangle, then solve again
        p.swap(0, 1);
        assert_eq!(p.settle(), Settlement { crossings: 1, solved: false, announce: false });
        p.swap(0, 1);
        assert!(p.settle().announce);
    }

    #[test]
    fn already_solved_graph_does_not_announce() {
        let mut p = bow_tie();
        p.swap(0, 1);
        let mut p = Puzzle::from_graph(p.into_graph());
        assert!(p.is_solved());
        assert!(!p.settle().announce);
    }

    #[test]
    fn new_starts_tangled() {
        let cfg = PuzzleConfig::default();
        for seed in 0..20 {
            let p = Puzzle::new(&cfg, &mut seeded(seed)).unwrap();
            assert!(p.crossings() > 0);
            assert!(p.graph().crossing_edge_count() >= 2);
            assert!(p.clean_cycles().len() < p.graph().cycle_count() as usize);
        }
    }

    #[test]
    #[should_panic]
    fn select_unknown_vertex_panics() {
        bow_tie().select(4);
    }

    #[test]
    fn shuffle_gives_up_on_two_vertices() {
        // A lone triangle has no pair of edges without a shared vertex
        let mut g = Graph::from_cycle_sizes(&[3]);
        g.set_position(0, 0.0, 0.0);
        g.set_position(1, 10.0, 0.0);
        g.set_position(2, 0.0, 10.0);
        assert_eq!(shuffle_until_tangled(&mut g, 25, &mut seeded(0)), None);
    }
}
