//! Planarity puzzle core: orbs joined into disjoint cycles, scattered on a
//! canvas, untangled by swapping orb positions until no two edges cross.
//!
//! The presentation layer owns sprites, tweens and input; it calls into
//! [`Puzzle`] and redraws from [`Snapshot`] or the per-edge/per-orb styles.

pub mod model;
pub mod config;
pub mod error;
pub mod rng;
pub mod geometry {
    pub mod intersect;
    pub mod limits;
}
pub mod algorithms {
    pub mod crossings;
    pub mod cycles;
    pub mod generate;
    pub mod layout;
}
mod json;
mod puzzle;

pub use algorithms::crossings::{crossing_hits, crossing_pairs, detect_crossings, CrossingHit};
pub use algorithms::cycles::{clean_cycles, cycle_is_clean, owner_cycle, EdgeStyle, OrbStyle};
pub use algorithms::generate::generate;
pub use algorithms::layout::place;
pub use config::{GenerationConfig, LayoutConfig, PuzzleConfig, ShuffleConfig};
pub use error::{ConfigError, PuzzleError};
pub use json::{Snapshot, SNAPSHOT_VERSION};
pub use model::{CycleId, Edge, Graph, Vertex, VertexId};
pub use puzzle::{shuffle_until_tangled, Puzzle, Selection, Settlement};
pub use rng::{seeded, RandomSource};
