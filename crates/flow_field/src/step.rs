/// Unit step on the grid: each component is -1, 0 or 1.
///
/// Covers the eight movement directions plus "no movement"; agents
/// following a flow field only ever step to one of their eight
/// neighbours, so a full float vector carries no extra information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepDirection {
    pub dx: i8,
    pub dy: i8,
}

impl StepDirection {
    /// Collapses an arbitrary vector to its unit step.
    pub fn from_vector(x: f32, y: f32) -> Self {
        let clamp = |v: f32| -> i8 {
            if v > 0.0 {
                1
            } else if v < 0.0 {
                -1
            } else {
                0
            }
        };
        Self {
            dx: clamp(x),
            dy: clamp(y),
        }
    }

    /// Angle of the step in radians; 0.0 for the zero step.
    pub fn angle(&self) -> f32 {
        (self.dy as f32).atan2(self.dx as f32)
    }

    /// False only for the zero step.
    pub fn has_magnitude(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn test_from_vector_collapses_to_unit_components() {
        assert_eq!(
            StepDirection::from_vector(3.5, 0.0),
            StepDirection { dx: 1, dy: 0 }
        );
        assert_eq!(
            StepDirection::from_vector(-0.2, 7.0),
            StepDirection { dx: -1, dy: 1 }
        );
        assert_eq!(
            StepDirection::from_vector(0.0, -0.1),
            StepDirection { dx: 0, dy: -1 }
        );
        assert_eq!(
            StepDirection::from_vector(0.0, 0.0),
            StepDirection { dx: 0, dy: 0 }
        );
    }

    #[test]
    fn test_negative_zero_has_no_direction() {
        let step = StepDirection::from_vector(-0.0, -0.0);
        assert!(!step.has_magnitude());
    }

    #[test]
    fn test_angle_of_axis_steps() {
        assert_eq!(StepDirection { dx: 1, dy: 0 }.angle(), 0.0);
        assert!((StepDirection { dx: 0, dy: 1 }.angle() - FRAC_PI_2).abs() < 1e-6);
        assert!((StepDirection { dx: -1, dy: 0 }.angle() - PI).abs() < 1e-6);
        assert!((StepDirection { dx: 0, dy: -1 }.angle() + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_angle_of_diagonal_steps() {
        assert!((StepDirection { dx: 1, dy: 1 }.angle() - FRAC_PI_4).abs() < 1e-6);
        assert!((StepDirection { dx: -1, dy: -1 }.angle() + 3.0 * FRAC_PI_4).abs() < 1e-6);
    }

    #[test]
    fn test_zero_step_angle_is_zero() {
        assert_eq!(StepDirection::default().angle(), 0.0);
        assert!(!StepDirection::default().has_magnitude());
    }

    #[test]
    fn test_has_magnitude() {
        assert!(StepDirection { dx: 0, dy: 1 }.has_magnitude());
        assert!(StepDirection { dx: -1, dy: 0 }.has_magnitude());
        assert!(!StepDirection { dx: 0, dy: 0 }.has_magnitude());
    }
}
