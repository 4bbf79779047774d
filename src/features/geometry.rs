//! Shot location geometry
//!
//! Coordinates are on a 0-100 scale in both axes, attacking towards x = 100.
//! The goal-line centre sits at (100, 50).

/// x coordinate of the goal line
pub const GOAL_X: f64 = 100.0;
/// y coordinate of the goal centre
pub const GOAL_Y: f64 = 100.0 / 2.0;

/// Angle used when a shot is taken exactly on the goal line, where the
/// arctangent's denominator is zero
pub const DEFAULT_GOAL_LINE_ANGLE: f64 = 90.0;

/// StatsBomb pitch is 120 x 80
const STATSBOMB_X_SCALE: f64 = 1.2;
const STATSBOMB_Y_SCALE: f64 = 0.8;

/// Geometric features of a shot location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotGeometry {
    /// Euclidean distance to the goal-line centre
    pub distance_to_goal: f64,
    /// Lateral offset from the pitch centre line
    pub distance_to_center: f64,
    /// Degrees between the shot-to-goal line and the pitch axis, in [0, 90]
    pub angle: f64,
}

impl ShotGeometry {
    /// Compute geometry for a shot at (x, y).
    ///
    /// `goal_line_angle` is returned as the angle when x == 100.
    pub fn from_location(x: f64, y: f64, goal_line_angle: f64) -> Self {
        let dx = GOAL_X - x;
        let lateral = (GOAL_Y - y).abs();

        let angle = if dx == 0.0 {
            goal_line_angle
        } else {
            (lateral / dx).atan().to_degrees().abs()
        };

        ShotGeometry {
            distance_to_goal: (dx * dx + (y - GOAL_Y).powi(2)).sqrt(),
            distance_to_center: (y - GOAL_Y).abs(),
            angle,
        }
    }
}

/// Convert 0-100 event coordinates to a 120 x 80 StatsBomb pitch
pub fn to_statsbomb(x: f64, y: f64) -> (f64, f64) {
    (x * STATSBOMB_X_SCALE, (100.0 - y) * STATSBOMB_Y_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_central_shot() {
        let g = ShotGeometry::from_location(90.0, 50.0, DEFAULT_GOAL_LINE_ANGLE);
        assert!(approx(g.distance_to_goal, 10.0));
        assert!(approx(g.distance_to_center, 0.0));
        assert!(approx(g.angle, 0.0));
    }

    #[test]
    fn test_forty_five_degrees() {
        let g = ShotGeometry::from_location(90.0, 40.0, DEFAULT_GOAL_LINE_ANGLE);
        assert!(approx(g.angle, 45.0));
        assert!(approx(g.distance_to_center, 10.0));
        assert!(approx(g.distance_to_goal, 200.0_f64.sqrt()));
    }

    #[test]
    fn test_symmetric_about_center() {
        let left = ShotGeometry::from_location(85.0, 35.0, DEFAULT_GOAL_LINE_ANGLE);
        let right = ShotGeometry::from_location(85.0, 65.0, DEFAULT_GOAL_LINE_ANGLE);
        assert!(approx(left.angle, right.angle));
        assert!(approx(left.distance_to_goal, right.distance_to_goal));
    }

    #[test]
    fn test_goal_line_uses_convention() {
        let g = ShotGeometry::from_location(100.0, 30.0, DEFAULT_GOAL_LINE_ANGLE);
        assert_eq!(g.angle, 90.0);
        assert!(approx(g.distance_to_goal, 20.0));

        let g = ShotGeometry::from_location(100.0, 50.0, 45.0);
        assert_eq!(g.angle, 45.0);
        assert!(!g.angle.is_nan());
        assert!(approx(g.distance_to_goal, 0.0));
    }

    #[test]
    fn test_statsbomb_conversion() {
        let (x, y) = to_statsbomb(100.0, 50.0);
        assert!(approx(x, 120.0));
        assert!(approx(y, 40.0));

        let (x, y) = to_statsbomb(0.0, 0.0);
        assert!(approx(x, 0.0));
        assert!(approx(y, 80.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: angle stays within [0, 90] in front of the goal line
            #[test]
            fn prop_angle_in_range(x in 0.0f64..99.999, y in 0.0f64..=100.0) {
                let g = ShotGeometry::from_location(x, y, DEFAULT_GOAL_LINE_ANGLE);
                prop_assert!(g.angle >= 0.0 && g.angle <= 90.0);
            }

            /// Property: distances are never negative
            #[test]
            fn prop_distances_non_negative(x in 0.0f64..=100.0, y in 0.0f64..=100.0) {
                let g = ShotGeometry::from_location(x, y, DEFAULT_GOAL_LINE_ANGLE);
                prop_assert!(g.distance_to_goal >= 0.0);
                prop_assert!(g.distance_to_center >= 0.0);
                prop_assert!(!g.angle.is_nan());
            }

            /// Property: goal distance is at least the lateral offset
            #[test]
            fn prop_goal_distance_bounds_center(x in 0.0f64..=100.0, y in 0.0f64..=100.0) {
                let g = ShotGeometry::from_location(x, y, DEFAULT_GOAL_LINE_ANGLE);
                prop_assert!(g.distance_to_goal + 1e-9 >= g.distance_to_center);
            }
        }
    }
}
