use crate::constants::IMPASSABLE;
use crate::integration::CostField;

/// Sums cell costs along the Bresenham line between `a` and `b`.
///
/// Returns `None` when the line crosses an impassable cell. Endpoints
/// are swapped so the walk ascends along the major axis, and the last
/// cell of the walk is left out of the sum.
pub fn direct_path(cost: &CostField, a: usize, b: usize) -> Option<u32> {
    let (x0, y0) = cost.coordinate(a);
    let (x1, y1) = cost.coordinate(b);

    let shallow = (y1 as i64 - y0 as i64).abs() < (x1 as i64 - x0 as i64).abs();
    if shallow {
        if x0 > x1 {
            walk_shallow(cost, x1, y1, x0, y0)
        } else {
            walk_shallow(cost, x0, y0, x1, y1)
        }
    } else if y0 > y1 {
        walk_steep(cost, x1, y1, x0, y0)
    } else {
        walk_steep(cost, x0, y0, x1, y1)
    }
}

fn walk_shallow(cost: &CostField, x0: usize, y0: usize, x1: usize, y1: usize) -> Option<u32> {
    let dx = x1 as i64 - x0 as i64;
    let mut dy = y1 as i64 - y0 as i64;
    let yi: i64 = if dy < 0 {
        dy = -dy;
        -1
    } else {
        1
    };

    let mut d = 2 * dy - dx;
    let mut y = y0 as i64;
    let mut total = 0u32;

    for x in x0..x1 {
        let value = *cost.get(x, y as usize);
        if value == IMPASSABLE {
            return None;
        }
        total += value as u32;

        if d > 0 {
            y += yi;
            d += 2 * (dy - dx);
        } else {
            d += 2 * dy;
        }
    }

    Some(total)
}

fn walk_steep(cost: &CostField, x0: usize, y0: usize, x1: usize, y1: usize) -> Option<u32> {
    let mut dx = x1 as i64 - x0 as i64;
    let dy = y1 as i64 - y0 as i64;
    let xi: i64 = if dx < 0 {
        dx = -dx;
        -1
    } else {
        1
    };

    let mut d = 2 * dx - dy;
    let mut x = x0 as i64;
    let mut total = 0u32;

    for y in y0..y1 {
        let value = *cost.get(x as usize, y);
        if value == IMPASSABLE {
            return None;
        }
        total += value as u32;

        if d > 0 {
            x += xi;
            d += 2 * (dx - dy);
        } else {
            d += 2 * dx;
        }
    }

    Some(total)
}

/// Side of the largest open square whose top-left corner is `(x, y)`.
///
/// An impassable or out-of-grid anchor gives 0. Rings are scanned
/// outward from there: a wall on ring `i` stops the scan at `i`,
/// leaving the map at ring `i` stops it at `i - 1`, and a nonzero
/// `max_clearance` caps the scan at that many rings.
pub fn clearance(cost: &CostField, x: usize, y: usize, max_clearance: u8) -> u8 {
    if !cost.contains(x, y) || *cost.get(x, y) == IMPASSABLE {
        return 0;
    }

    for i in 1..=u8::MAX {
        let ring = i as usize;

        if !cost.contains(x + ring, y + ring) {
            return i - 1;
        }
        if *cost.get(x + ring, y + ring) == IMPASSABLE {
            return i;
        }
        for j in 1..=ring {
            if *cost.get(x + ring, y + ring - j) == IMPASSABLE
                || *cost.get(x + ring - j, y + ring) == IMPASSABLE
            {
                return i;
            }
        }

        if max_clearance != 0 && i == max_clearance {
            return max_clearance;
        }
    }

    u8::MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn test_direct_path_horizontal() {
        let cost = Grid::new(5, 1, 1u8);
        let a = cost.index(0, 0);
        let b = cost.index(4, 0);

        assert_eq!(direct_path(&cost, a, b), Some(4));
        assert_eq!(direct_path(&cost, b, a), Some(4));
    }

    #[test]
    fn test_direct_path_vertical() {
        let cost = Grid::new(1, 5, 2u8);
        let a = cost.index(0, 0);
        let b = cost.index(0, 4);

        assert_eq!(direct_path(&cost, a, b), Some(8));
    }

    #[test]
    fn test_direct_path_same_cell() {
        let cost = Grid::new(3, 3, 7u8);
        let a = cost.index(1, 1);

        assert_eq!(direct_path(&cost, a, a), Some(0));
    }

    #[test]
    fn test_direct_path_diagonal_skips_last_cell() {
        let mut cost = Grid::new(3, 3, 1u8);
        *cost.get_mut(2, 2) = IMPASSABLE;

        // visits (0, 0) and (1, 1); the far endpoint is not probed
        let a = cost.index(0, 0);
        let b = cost.index(2, 2);
        assert_eq!(direct_path(&cost, a, b), Some(2));
    }

    #[test]
    fn test_direct_path_blocked_by_wall() {
        let mut cost = Grid::new(5, 1, 1u8);
        *cost.get_mut(2, 0) = IMPASSABLE;

        let a = cost.index(0, 0);
        let b = cost.index(4, 0);
        assert_eq!(direct_path(&cost, a, b), None);
    }

    #[test]
    fn test_direct_path_steep_line_bends_around_grid() {
        let mut cost = Grid::new(3, 5, 1u8);
        let a = cost.index(0, 0);
        let b = cost.index(1, 4);

        // the steep walk visits (0, 0), (0, 1), (0, 2), (1, 3)
        assert_eq!(direct_path(&cost, a, b), Some(4));

        *cost.get_mut(1, 3) = IMPASSABLE;
        assert_eq!(direct_path(&cost, a, b), None);
    }

    #[test]
    fn test_clearance_stops_at_map_edge() {
        let cost = Grid::new(10, 10, 1u8);
        assert_eq!(clearance(&cost, 0, 0, 0), 9);
        assert_eq!(clearance(&cost, 8, 8, 0), 1);
    }

    #[test]
    fn test_clearance_stops_at_wall() {
        let mut cost = Grid::new(10, 10, 1u8);
        *cost.get_mut(3, 3) = IMPASSABLE;
        assert_eq!(clearance(&cost, 0, 0, 0), 3);

        let mut cost = Grid::new(10, 10, 1u8);
        *cost.get_mut(3, 0) = IMPASSABLE;
        assert_eq!(clearance(&cost, 0, 0, 0), 3);
    }

    #[test]
    fn test_clearance_of_a_wall_anchor_is_zero() {
        let mut cost = Grid::new(10, 10, 1u8);
        *cost.get_mut(3, 3) = IMPASSABLE;

        assert_eq!(clearance(&cost, 3, 3, 0), 0);
        // the wall sits up-left of (4, 4), outside its down-right square
        assert_eq!(clearance(&cost, 4, 4, 0), 5);
    }

    #[test]
    fn test_clearance_honours_cap() {
        let cost = Grid::new(10, 10, 1u8);
        assert_eq!(clearance(&cost, 0, 0, 2), 2);
    }
}
