//! Pointer input mapping
//!
//! Points arrive already translated into arena space. When discs overlap the
//! lowest index wins; there is no depth ordering.

use glam::Vec2;

use super::state::Body;

/// First body (by index) whose disc contains `point`
pub fn hit_test(bodies: &[Body], point: Vec2) -> Option<usize> {
    bodies.iter().position(|body| body.contains(point))
}

/// Add `factor * (point - center)` to the velocity of the first body under
/// `point`. Called per pointer-move event, not per tick.
pub fn nudge(bodies: &mut [Body], point: Vec2, factor: f32) -> Option<usize> {
    let index = hit_test(bodies, point)?;
    let body = &mut bodies[index];
    body.vel += (point - body.pos) * factor;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NUDGE_FACTOR;

    fn overlapping() -> Vec<Body> {
        vec![
            Body::new(Vec2::new(100.0, 100.0), 20.0, "red"),
            Body::new(Vec2::new(110.0, 100.0), 20.0, "blue"),
            Body::new(Vec2::new(400.0, 300.0), 10.0, "green"),
        ]
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let bodies = overlapping();
        assert_eq!(hit_test(&bodies, Vec2::new(105.0, 100.0)), Some(0));
        // Only inside body 1
        assert_eq!(hit_test(&bodies, Vec2::new(125.0, 100.0)), Some(1));
        assert_eq!(hit_test(&bodies, Vec2::new(400.0, 305.0)), Some(2));
    }

    #[test]
    fn test_hit_test_miss() {
        let bodies = overlapping();
        assert_eq!(hit_test(&bodies, Vec2::new(700.0, 50.0)), None);
        assert_eq!(hit_test(&[], Vec2::ZERO), None);
    }

    #[test]
    fn test_nudge_pushes_toward_pointer() {
        let mut bodies = overlapping();
        let hit = nudge(&mut bodies, Vec2::new(100.0, 90.0), NUDGE_FACTOR);

        assert_eq!(hit, Some(0));
        assert!((bodies[0].vel - Vec2::new(0.0, -0.5)).length() < 1e-6);
        assert_eq!(bodies[1].vel, Vec2::ZERO);
    }

    #[test]
    fn test_nudge_accumulates() {
        let mut bodies = overlapping();
        for _ in 0..4 {
            nudge(&mut bodies, Vec2::new(408.0, 300.0), NUDGE_FACTOR);
        }
        assert!((bodies[2].vel.x - 4.0 * 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_nudge_outside_is_noop() {
        let mut bodies = overlapping();
        let before = bodies.clone();
        assert_eq!(nudge(&mut bodies, Vec2::new(700.0, 50.0), NUDGE_FACTOR), None);
        assert_eq!(bodies, before);
    }
}
