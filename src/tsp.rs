pub mod matrix;
mod permutation;
pub mod solver;

pub use matrix::{Distance, DistanceMatrix};
pub use solver::{solve, solve_cancellable, total_cost, Solution};

/// Validates `rows` as a distance matrix and solves it.
pub fn solve_rows(rows: Vec<Vec<Distance>>) -> crate::Result<Solution> {
    let matrix = DistanceMatrix::new(rows)?;
    Ok(solve(&matrix))
}
