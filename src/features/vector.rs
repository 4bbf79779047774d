//! Model feature vectors
//!
//! The models were fit on these exact column orders. Reordering a field
//! here silently produces wrong probabilities, so the names live next to
//! the vectors and models that publish their names are checked against them.

use super::geometry::ShotGeometry;
use crate::events::ShotIndicators;

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Features for the open-play model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenPlayFeatures {
    pub distance_to_goal: f64,
    pub angle: f64,
    pub is_foot: f64,
    pub is_head: f64,
}

impl OpenPlayFeatures {
    /// Dimension of feature vector
    pub const DIM: usize = 4;

    /// Column names in model order
    pub const NAMES: [&'static str; Self::DIM] = ["distance_to_goal", "angle", "isFoot", "isHead"];

    pub fn new(geometry: &ShotGeometry, indicators: &ShotIndicators) -> Self {
        OpenPlayFeatures {
            distance_to_goal: geometry.distance_to_goal,
            angle: geometry.angle,
            is_foot: flag(indicators.is_foot()),
            is_head: flag(indicators.is_head),
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![self.distance_to_goal, self.angle, self.is_foot, self.is_head]
    }
}

/// Features for the non-open-play model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonOpenPlayFeatures {
    pub distance_to_goal: f64,
    pub angle: f64,
    pub is_foot: f64,
    pub is_head: f64,
    pub is_direct_free: f64,
    pub is_set_piece: f64,
    pub is_from_corner: f64,
}

impl NonOpenPlayFeatures {
    /// Dimension of feature vector
    pub const DIM: usize = 7;

    /// Column names in model order
    pub const NAMES: [&'static str; Self::DIM] = [
        "distance_to_goal",
        "angle",
        "isFoot",
        "isHead",
        "isDirectFree",
        "isSetPiece",
        "isFromCorner",
    ];

    pub fn new(geometry: &ShotGeometry, indicators: &ShotIndicators) -> Self {
        NonOpenPlayFeatures {
            distance_to_goal: geometry.distance_to_goal,
            angle: geometry.angle,
            is_foot: flag(indicators.is_foot()),
            is_head: flag(indicators.is_head),
            is_direct_free: flag(indicators.is_direct_free),
            is_set_piece: flag(indicators.is_set_piece),
            is_from_corner: flag(indicators.is_from_corner),
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.distance_to_goal,
            self.angle,
            self.is_foot,
            self.is_head,
            self.is_direct_free,
            self.is_set_piece,
            self.is_from_corner,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::DEFAULT_GOAL_LINE_ANGLE;

    #[test]
    fn test_open_play_order() {
        let geometry = ShotGeometry::from_location(90.0, 50.0, DEFAULT_GOAL_LINE_ANGLE);
        let indicators = ShotIndicators {
            is_right_footed: true,
            is_regular_play: true,
            ..Default::default()
        };

        let features = OpenPlayFeatures::new(&geometry, &indicators);
        assert_eq!(features.to_vec(), vec![10.0, 0.0, 1.0, 0.0]);
        assert_eq!(features.to_vec().len(), OpenPlayFeatures::DIM);
    }

    #[test]
    fn test_non_open_play_order() {
        let geometry = ShotGeometry::from_location(90.0, 40.0, DEFAULT_GOAL_LINE_ANGLE);
        let indicators = ShotIndicators {
            is_head: true,
            is_from_corner: true,
            ..Default::default()
        };

        let v = NonOpenPlayFeatures::new(&geometry, &indicators).to_vec();
        assert_eq!(v.len(), NonOpenPlayFeatures::DIM);
        assert_eq!(&v[2..], &[0.0, 1.0, 0.0, 0.0, 1.0]);
        assert!((v[1] - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_names_share_prefix() {
        assert_eq!(
            &NonOpenPlayFeatures::NAMES[..OpenPlayFeatures::DIM],
            &OpenPlayFeatures::NAMES[..]
        );
    }
}
