use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use super::matrix::{Distance, DistanceMatrix};
use super::permutation::next_permutation;
use crate::error::{Error, InvalidRouteReason};

/// Cheapest closed route found by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    route: Vec<usize>,
    cost: Distance,
}

impl Solution {
    /// Every location exactly once; the cycle closes back to `route[0]`.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    pub fn cost(&self) -> Distance {
        self.cost
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.route {
            write!(f, "{} -> ", location)?;
        }
        if let Some(start) = self.route.first() {
            write!(f, "{}", start)?;
        }
        Ok(())
    }
}

fn validate_route(route: &[usize], size: usize) -> crate::Result<()> {
    if route.len() != size {
        return Err(Error::InvalidRoute(InvalidRouteReason::LengthMismatch {
            length: route.len(),
            expected: size,
        }));
    }
    let mut visited = vec![false; size];
    for &location in route {
        if location >= size {
            return Err(Error::InvalidRoute(
                InvalidRouteReason::LocationOutOfRange(location),
            ));
        }
        if visited[location] {
            return Err(Error::InvalidRoute(
                InvalidRouteReason::LocationVisitedTwice(location),
            ));
        }
        visited[location] = true;
    }
    Ok(())
}

// route must be a permutation of all locations of the matrix
fn route_cost(route: &[usize], matrix: &DistanceMatrix) -> Distance {
    let path: Distance = route
        .windows(2)
        .map(|step| matrix.distance(step[0], step[1]))
        .sum();
    path + matrix.distance(route[route.len() - 1], route[0])
}

/// Cost of travelling `route` as a closed cycle.
pub fn total_cost(route: &[usize], matrix: &DistanceMatrix) -> crate::Result<Distance> {
    validate_route(route, matrix.size())?;
    Ok(route_cost(route, matrix))
}

/// Tries every route starting at location 0 in lexicographic order and
/// returns the first one of minimal cost.
///
/// Runs in factorial time; callers must keep the number of locations small.
pub fn solve(matrix: &DistanceMatrix) -> Solution {
    match search(matrix, || false) {
        Ok(solution) => solution,
        Err(_) => unreachable!("search without cancellation can not fail"),
    }
}

/// Like [`solve`], but gives up with [`Error::Cancelled`] as soon as
/// `cancelled` is set. The flag is checked between two routes.
pub fn solve_cancellable(
    matrix: &DistanceMatrix,
    cancelled: &AtomicBool,
) -> crate::Result<Solution> {
    search(matrix, || cancelled.load(Ordering::Relaxed))
}

fn search(matrix: &DistanceMatrix, is_cancelled: impl Fn() -> bool) -> crate::Result<Solution> {
    let mut route: Vec<usize> = (0..matrix.size()).collect();
    let mut best = Solution {
        cost: route_cost(&route, matrix),
        route: route.clone(),
    };
    loop {
        if is_cancelled() {
            return Err(Error::Cancelled);
        }
        // location 0 stays in front
        if !next_permutation(&mut route[1..]) {
            break;
        }
        let cost = route_cost(&route, matrix);
        if cost < best.cost {
            best.cost = cost;
            best.route.copy_from_slice(&route);
        }
    }
    Ok(best)
}
