use std::collections::VecDeque;

use crate::constants::{IMPASSABLE, UNREACHABLE};
use crate::grid::Grid;

/// Traversal cost per cell; `IMPASSABLE` marks walls.
pub type CostField = Grid<u8>;

/// Accumulated cost to reach each cell from a target; `UNREACHABLE`
/// marks cells no flood reached.
pub type IntegrationField = Grid<u16>;

/// Floods the cost field outward from `target` and returns the
/// integration field.
///
/// Label-correcting search over direct neighbours with a FIFO queue: a
/// neighbour is relaxed whenever going through the current cell is
/// cheaper than its recorded cost. Impassable cells are never entered,
/// so anything walled off stays `UNREACHABLE`.
///
/// # Panics
/// Panics if `target` is not a valid cell index.
pub fn integrate(cost: &CostField, target: usize) -> IntegrationField {
    let mut field = Grid::new(cost.width(), cost.height(), UNREACHABLE);
    field[target] = 0;

    let mut open = VecDeque::new();
    open.push_back(target);

    while let Some(id) = open.pop_front() {
        let (x, y) = cost.coordinate(id);

        for neighbour in cost.direct_neighbours(x, y) {
            if cost[neighbour] == IMPASSABLE {
                continue;
            }

            // widened so the sum cannot wrap before the compare
            let candidate = field[id] as u32 + cost[neighbour] as u32;
            if candidate < field[neighbour] as u32 {
                field[neighbour] = candidate as u16;
                open.push_back(neighbour);
            }
        }
    }

    field
}

/// Element-wise minimum of two integration fields, e.g. to merge the
/// floods of two targets into one "distance to nearest target" field.
///
/// # Panics
/// Panics if the fields have different dimensions.
pub fn combine(a: &IntegrationField, b: &IntegrationField) -> IntegrationField {
    assert_eq!(a.width(), b.width(), "integration field widths differ");
    assert_eq!(a.height(), b.height(), "integration field heights differ");

    let mut merged = a.clone();
    for i in 0..merged.len() {
        merged[i] = a[i].min(b[i]);
    }
    merged
}
