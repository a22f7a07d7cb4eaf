// Centralized defaults and bounds for puzzle construction

// Orb count range; every graph needs room for two cycles of three
pub const MIN_ORBS: u32 = 6;
pub const MAX_ORBS: u32 = 20;
pub const MIN_CYCLE_LEN: usize = 3;
pub const MIN_CYCLES: u32 = 2;

// Hard cap on accepted configs; detection is quadratic in edges
pub const ORB_CAP: u32 = 500;

// Canvas (px)
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;
pub const MARGIN: f32 = 50.0;
pub const MIN_DISTANCE: f32 = 60.0;
pub const PLACEMENT_ATTEMPTS: u32 = 100;

// Initial tangle search
pub const SHUFFLE_SWAPS: u32 = 1_000;
pub const REGENERATIONS: u32 = 16;

#[inline]
pub fn in_orb_bounds(n: u32) -> bool { (MIN_ORBS..=ORB_CAP).contains(&n) }
