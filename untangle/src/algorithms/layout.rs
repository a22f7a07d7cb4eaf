use crate::config::LayoutConfig;
use crate::model::Graph;
use crate::rng::RandomSource;

#[inline]
fn too_close(placed: &[(f32, f32)], x: f32, y: f32, min_d2: f32) -> bool {
    placed.iter().any(|&(px, py)| {
        let dx = px - x; let dy = py - y;
        dx * dx + dy * dy < min_d2
    })
}

/// Positions every vertex, in id order, on integer coordinates inside the
/// margins and at least `min_distance` from all earlier vertices. After
/// `max_attempts` samples the last one is kept even if too close.
///
/// Returns how many vertices were accepted that way.
pub fn place(g: &mut Graph, cfg: &LayoutConfig, rng: &mut impl RandomSource) -> u32 {
    let ((lo_x, hi_x), (lo_y, hi_y)) = cfg.pixel_bounds();
    let min_d2 = cfg.min_distance * cfg.min_distance;
    let attempts = cfg.max_attempts.max(1);

    let mut placed: Vec<(f32, f32)> = Vec::with_capacity(g.vertices.len());
    let mut relaxed = 0u32;
    for v in g.vertices.iter_mut() {
        let mut tries = 0u32;
        let (x, y) = loop {
            let x = rng.between(lo_x, hi_x) as f32;
            let y = rng.between(lo_y, hi_y) as f32;
            tries += 1;
            if !too_close(&placed, x, y, min_d2) { break (x, y); }
            if tries >= attempts {
                log::trace!("vertex {} accepted at ({}, {}) after {} attempts", v.id, x, y, tries);
                relaxed += 1;
                break (x, y);
            }
        };
        v.x = x;
        v.y = y;
        placed.push((x, y));
    }
    relaxed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;

    #[test]
    fn stays_inside_margins_and_apart() {
        let cfg = LayoutConfig::default();
        let mut g = Graph::from_cycle_sizes(&[4, 4]);
        let relaxed = place(&mut g, &cfg, &mut seeded(9));
        assert_eq!(relaxed, 0);
        for v in &g.vertices {
            assert!(v.x >= cfg.margin && v.x <= cfg.width - cfg.margin);
            assert!(v.y >= cfg.margin && v.y <= cfg.height - cfg.margin);
            assert_eq!(v.x.fract(), 0.0);
        }
        for (i, a) in g.vertices.iter().enumerate() {
            for b in &g.vertices[i + 1..] {
                let d = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                assert!(d >= cfg.min_distance, "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn fractional_margin_rounds_inward() {
        let cfg = LayoutConfig { width: 101.0, height: 101.0, margin: 50.4, min_distance: 0.0, max_attempts: 1 };
        assert_eq!(cfg.pixel_bounds(), ((51, 50), (51, 50)));
        assert!(cfg.validate().is_err());

        let cfg = LayoutConfig { width: 102.0, height: 102.0, margin: 50.4, min_distance: 0.0, max_attempts: 1 };
        assert!(cfg.validate().is_ok());
        let mut g = Graph::from_cycle_sizes(&[3, 3]);
        place(&mut g, &cfg, &mut seeded(4));
        for v in &g.vertices {
            assert_eq!((v.x, v.y), (51.0, 51.0));
            assert!(v.x >= cfg.margin && v.x <= cfg.width - cfg.margin);
        }
    }

    #[test]
    fn crowded_canvas_relaxes_instead_of_looping() {
        // 20x20 usable square cannot hold 6 points 60 apart
        let cfg = LayoutConfig { width: 120.0, height: 120.0, margin: 50.0, min_distance: 60.0, max_attempts: 5 };
        let mut g = Graph::from_cycle_sizes(&[3, 3]);
        let relaxed = place(&mut g, &cfg, &mut seeded(1));
        assert_eq!(relaxed, 5);
    }
}
