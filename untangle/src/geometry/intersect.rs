// Parametric segment-segment test in f64.
// Parallel and collinear pairs never intersect; touching at an endpoint does.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegIntersection {
    // denom == 0, including collinear overlap
    Parallel,
    // Lines meet outside at least one segment
    Disjoint { t: f64, u: f64 },
    // Closed-interval hit: 0 <= t <= 1 and 0 <= u <= 1
    Cross { t: f64, u: f64, x: f64, y: f64 },
}

impl SegIntersection {
    #[inline]
    pub fn is_cross(&self) -> bool { matches!(self, SegIntersection::Cross { .. }) }
}

/// Classifies segments (x1,y1)-(x2,y2) and (x3,y3)-(x4,y4).
pub fn classify_segments(x1: f32, y1: f32, x2: f32, y2: f32,
                         x3: f32, y3: f32, x4: f32, y4: f32) -> SegIntersection {
    let x1 = x1 as f64; let y1 = y1 as f64; let x2 = x2 as f64; let y2 = y2 as f64;
    let x3 = x3 as f64; let y3 = y3 as f64; let x4 = x4 as f64; let y4 = y4 as f64;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom == 0.0 {
        return SegIntersection::Parallel;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        SegIntersection::Cross { t, u, x: x1 + t * (x2 - x1), y: y1 + t * (y2 - y1) }
    } else {
        SegIntersection::Disjoint { t, u }
    }
}

#[inline]
pub fn segments_intersect(p1: (f32, f32), p2: (f32, f32), p3: (f32, f32), p4: (f32, f32)) -> bool {
    classify_segments(p1.0, p1.1, p2.0, p2.1, p3.0, p3.1, p4.0, p4.1).is_cross()
}
