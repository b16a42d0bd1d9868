use crate::constants::UNREACHABLE;
use crate::error::{FlowFieldError, Result};
use crate::grid::Grid;
use crate::integration::{CostField, IntegrationField, combine, integrate};
use crate::step::StepDirection;

/// Per-cell heading in radians toward the nearest target.
pub type DirectionField = Grid<f32>;

/// Index of the cheapest neighbour of `(x, y)` that can actually be
/// stepped to; the cell's own index if no neighbour is cheaper.
///
/// Diagonal moves may not cut a corner: a diagonal improvement is
/// rejected when the direct neighbour it passes on the horizontal or
/// vertical side is `UNREACHABLE`.
pub fn best_neighbour(field: &IntegrationField, x: usize, y: usize) -> usize {
    let mut best = *field.get(x, y);
    let mut best_id = field.index(x, y);

    let mut blocked_left = false;
    let mut blocked_right = false;
    let mut blocked_above = false;
    let mut blocked_below = false;

    for neighbour in field.direct_neighbours(x, y) {
        if field[neighbour] < best {
            best = field[neighbour];
            best_id = neighbour;
        } else if field[neighbour] == UNREACHABLE {
            let (nx, ny) = field.coordinate(neighbour);
            if nx < x {
                blocked_left = true;
            } else if nx > x {
                blocked_right = true;
            } else if ny < y {
                blocked_above = true;
            } else {
                blocked_below = true;
            }
        }
    }

    for neighbour in field.diagonal_neighbours(x, y) {
        if field[neighbour] >= best {
            continue;
        }

        let (nx, ny) = field.coordinate(neighbour);
        let horizontally_blocked = if nx < x { blocked_left } else { blocked_right };
        let vertically_blocked = if ny < y { blocked_above } else { blocked_below };
        if horizontally_blocked || vertically_blocked {
            continue;
        }

        best = field[neighbour];
        best_id = neighbour;
    }

    best_id
}

/// Unit step from `(x, y)` toward its best neighbour; the zero step when
/// the cell is already the local minimum.
pub fn best_direction(field: &IntegrationField, x: usize, y: usize) -> StepDirection {
    let best_id = best_neighbour(field, x, y);
    let (bx, by) = field.coordinate(best_id);
    StepDirection::from_vector(bx as f32 - x as f32, by as f32 - y as f32)
}

/// Converts an integration field into per-cell headings.
///
/// Each cell gets `atan2(by - y, bx - x)` toward its best neighbour.
/// Cells that are their own best neighbour (targets, walls, walled-off
/// pockets) get 0.0.
pub fn direction_field(field: &IntegrationField) -> DirectionField {
    let mut directions = Grid::new(field.width(), field.height(), 0.0f32);

    for id in 0..field.len() {
        let (x, y) = field.coordinate(id);
        let best_id = best_neighbour(field, x, y);
        let (bx, by) = field.coordinate(best_id);
        let vx = bx as f32 - x as f32;
        let vy = by as f32 - y as f32;
        directions[id] = vy.atan2(vx);
    }

    directions
}

/// Full pipeline: flood each target, merge the floods, extract headings.
///
/// Errors when `targets` is empty or any target is out of bounds.
pub fn flow_field(cost: &CostField, targets: &[usize]) -> Result<DirectionField> {
    let (&first, rest) = targets.split_first().ok_or(FlowFieldError::NoTargets)?;
    for &target in targets {
        if !cost.contains_index(target) {
            let (x, y) = (target % cost.width(), target / cost.width());
            return Err(FlowFieldError::TargetOutOfBounds {
                x,
                y,
                width: cost.width(),
                height: cost.height(),
            });
        }
    }

    let mut field = integrate(cost, first);
    for &target in rest {
        field = combine(&field, &integrate(cost, target));
    }

    Ok(direction_field(&field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::IMPASSABLE;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_best_neighbour_descends_the_field() {
        let cost = Grid::new(3, 3, 1u8);
        let field = integrate(&cost, cost.index(0, 0));

        assert_eq!(best_neighbour(&field, 2, 2), field.index(1, 1));
        assert_eq!(best_neighbour(&field, 1, 0), field.index(0, 0));
        // the target itself is its own best neighbour
        assert_eq!(best_neighbour(&field, 0, 0), field.index(0, 0));
    }

    #[test]
    fn test_best_neighbour_refuses_corner_cut() {
        // Wall column with the target on the far side of a gap:
        //   t . w .          w = wall, t = target at (0, 0)
        //   . . w .
        //   . . . .          gap at (2, 2)
        let mut cost = Grid::new(4, 3, 1u8);
        *cost.get_mut(2, 0) = IMPASSABLE;
        *cost.get_mut(2, 1) = IMPASSABLE;
        let field = integrate(&cost, cost.index(0, 0));

        // From (3, 1) the cheapest neighbour by value is the diagonal
        // (2, 2), but that move slides past the wall at (2, 1). It must
        // fall back to the direct neighbour (3, 2).
        assert_eq!(*field.get(3, 1), 6);
        assert_eq!(*field.get(2, 2), 4);
        assert_eq!(*field.get(3, 2), 5);
        assert_eq!(best_neighbour(&field, 3, 1), field.index(3, 2));
    }

    #[test]
    fn test_best_direction_points_at_target() {
        let cost = Grid::new(3, 3, 1u8);
        let field = integrate(&cost, cost.index(0, 0));

        assert_eq!(
            best_direction(&field, 2, 0),
            StepDirection { dx: -1, dy: 0 }
        );
        assert_eq!(
            best_direction(&field, 2, 2),
            StepDirection { dx: -1, dy: -1 }
        );
        assert!(!best_direction(&field, 0, 0).has_magnitude());
    }

    #[test]
    fn test_direction_field_angles() {
        let cost = Grid::new(3, 3, 1u8);
        let field = integrate(&cost, cost.index(0, 0));
        let directions = direction_field(&field);

        // target cell: self-best, angle 0
        assert_eq!(*directions.get(0, 0), 0.0);
        // right of target: points left (pi)
        assert!(close(*directions.get(1, 0), PI));
        // below target: points up (-pi/2)
        assert!(close(*directions.get(0, 1), -FRAC_PI_2));
        // far corner: diagonal up-left (-3pi/4)
        assert!(close(*directions.get(2, 2), -3.0 * FRAC_PI_4));
    }

    #[test]
    fn test_flow_field_merges_two_targets() {
        let cost = Grid::new(5, 1, 1u8);
        let targets = [cost.index(0, 0), cost.index(4, 0)];
        let directions = flow_field(&cost, &targets).unwrap();

        // cells drain toward whichever end is closer
        assert!(close(*directions.get(1, 0), PI));
        assert!(close(*directions.get(3, 0), 0.0));
        // both targets are local minima
        assert_eq!(*directions.get(0, 0), 0.0);
        assert_eq!(*directions.get(4, 0), 0.0);
    }

    #[test]
    fn test_flow_field_rejects_empty_targets() {
        let cost = Grid::new(3, 3, 1u8);
        assert!(matches!(
            flow_field(&cost, &[]),
            Err(FlowFieldError::NoTargets)
        ));
    }

    #[test]
    fn test_flow_field_rejects_out_of_bounds_target() {
        let cost = Grid::new(3, 3, 1u8);
        assert!(matches!(
            flow_field(&cost, &[cost.len()]),
            Err(FlowFieldError::TargetOutOfBounds { .. })
        ));
    }
}
