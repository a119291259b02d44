//! Matrix reduction and edge commitment - the shared primitives the
//! least-cost branch & bound traversal uses to compute lower bounds.
//!
//! `reduce` subtracts each row's minimum (then each column's minimum) from
//! every finite entry, treating [`tsp_common::NO_EDGE`] as infinity. The sum
//! of everything subtracted is a valid TSP lower-bound contribution: any
//! completion of the tour must pay at least that much along whichever edges
//! the reduction discounted.

use tsp_common::{CostMatrix, NO_EDGE};

/// Reduce `matrix` in place (rows, then columns). Returns the total amount
/// subtracted.
pub fn reduce(matrix: &mut CostMatrix) -> i64 {
    let n = matrix.n();
    let mut total = 0i64;

    for row in 0..n {
        let min = (0..n)
            .filter_map(|col| if col == row { None } else { Some(matrix.raw(row, col)) })
            .filter(|&c| c != NO_EDGE)
            .min();
        if let Some(min) = min {
            if min != 0 {
                for col in 0..n {
                    if col != row && matrix.raw(row, col) != NO_EDGE {
                        matrix.set_raw(row, col, matrix.raw(row, col) - min);
                    }
                }
            }
            total += min;
        }
    }

    for col in 0..n {
        let min = (0..n)
            .filter_map(|row| if row == col { None } else { Some(matrix.raw(row, col)) })
            .filter(|&c| c != NO_EDGE)
            .min();
        if let Some(min) = min {
            if min != 0 {
                for row in 0..n {
                    if row != col && matrix.raw(row, col) != NO_EDGE {
                        matrix.set_raw(row, col, matrix.raw(row, col) - min);
                    }
                }
            }
            total += min;
        }
    }

    total
}

/// Commit the edge `from -> to`: forbid every other edge out of `from` and
/// into `to`, and forbid the immediate return `to -> from`.
pub fn mark_used(matrix: &mut CostMatrix, from: usize, to: usize) {
    let n = matrix.n();
    for col in 0..n {
        matrix.set_raw(from, col, NO_EDGE);
    }
    for row in 0..n {
        matrix.set_raw(row, to, NO_EDGE);
    }
    matrix.set_raw(to, from, NO_EDGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_scenario_a_lower_bound_is_nonzero() {
        let mut m = CostMatrix::new(vec![
            vec![-1, 10, 15, 20],
            vec![10, -1, 35, 25],
            vec![15, 35, -1, 30],
            vec![20, 25, 30, -1],
        ])
        .unwrap();
        let cost = reduce(&mut m);
        assert!(cost > 0);
        // After reduction every row and column with a finite entry has a
        // zero-cost edge.
        for row in 0..4 {
            let has_finite = (0..4).any(|col| col != row && m.cost(row, col).is_some());
            if has_finite {
                assert!((0..4).any(|col| col != row && m.cost(row, col) == Some(0)));
            }
        }
    }

    #[test]
    fn mark_used_forbids_row_column_and_return() {
        let mut m = CostMatrix::new(vec![
            vec![-1, 1, 2],
            vec![3, -1, 4],
            vec![5, 6, -1],
        ])
        .unwrap();
        mark_used(&mut m, 0, 1);
        assert_eq!(m.cost(0, 2), None);
        assert_eq!(m.cost(2, 1), None);
        assert_eq!(m.cost(1, 0), None);
        assert_eq!(m.cost(0, 1), None); // committed edge's own cell too
    }

    #[test]
    fn reduce_skips_all_absent_row() {
        // Row 1 fully absent -> no minimum to subtract, no panic.
        let mut m = CostMatrix::new(vec![
            vec![-1, 5, 6],
            vec![-1, -1, -1],
            vec![7, 8, -1],
        ])
        .unwrap();
        let cost = reduce(&mut m);
        assert!(cost >= 0);
    }
}
