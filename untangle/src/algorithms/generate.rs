use crate::config::GenerationConfig;
use crate::geometry::limits::{MIN_CYCLES, MIN_CYCLE_LEN};
use crate::model::Graph;
use crate::rng::RandomSource;

/// Splits `n` vertices into `k` cycle sizes. Each cycle but the last draws a
/// size that leaves at least three vertices for every cycle after it; the
/// last one takes whatever remains.
pub fn cycle_sizes(n: usize, k: usize, rng: &mut impl RandomSource) -> Vec<usize> {
    debug_assert!(k >= 1 && n >= k * MIN_CYCLE_LEN, "{} vertices cannot form {} cycles", n, k);
    let mut remaining = n;
    let mut sizes = Vec::with_capacity(k);
    for i in 0..k {
        if i == k - 1 {
            sizes.push(remaining);
            break;
        }
        let reserved = (k - i - 1) * MIN_CYCLE_LEN;
        let max_size = remaining.saturating_sub(reserved).max(MIN_CYCLE_LEN);
        let size = rng.between(MIN_CYCLE_LEN as i32, max_size as i32) as usize;
        sizes.push(size);
        remaining -= size;
    }
    sizes
}

/// Random union of disjoint simple cycles.
///
/// Panics if the config allows fewer than six orbs.
pub fn generate(cfg: &GenerationConfig, rng: &mut impl RandomSource) -> Graph {
    assert!(cfg.validate().is_ok(), "invalid generation config {:?}", cfg);
    let n = rng.between(cfg.min_orbs as i32, cfg.max_orbs as i32) as usize;
    let max_cycles = (n / MIN_CYCLE_LEN).max(MIN_CYCLES as usize);
    let k = rng.between(MIN_CYCLES as i32, max_cycles as i32) as usize;
    log::debug!("generating graph with {} orbs and {} cycles", n, k);
    let sizes = cycle_sizes(n, k, rng);
    log::debug!("cycle sizes: {:?}", sizes);
    Graph::from_cycle_sizes(&sizes)
}
