use crate::{memory::*, Point};

/// Enum with possible convergence strategies.
/// These strategies decide, whether two successive centroid collections of a running
/// k-means calculation are considered equal, which ends the iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvergenceStrategy<T: Primitive> {
    /// Converged when every coordinate of every centroid is exactly equal to the previous iteration's.
    /// This is reached as soon as an assignment step reproduces the previous iteration's assignments.
    Exact,
    /// Converged when no centroid moved farther than **epsilon** (euclidean distance) since the
    /// previous iteration.
    /// ## Fields:
    /// - **epsilon**: Maximum movement of a single centroid that is still considered "no movement"
    Tolerance { epsilon: T },
}
impl<T: Primitive> Default for ConvergenceStrategy<T> {
    fn default() -> Self { ConvergenceStrategy::Exact }
}
impl<T: Primitive> ConvergenceStrategy<T> {
    pub(crate) fn create_logic(&self) -> Box<dyn ConvergenceLogic<T>> {
        match *self {
            ConvergenceStrategy::Exact => Box::new(ExactLogic),
            ConvergenceStrategy::Tolerance { epsilon } => Box::new(ToleranceLogic { epsilon }),
        }
    }
}

pub(crate) trait ConvergenceLogic<T: Primitive> {
    /// Function that has to be called once an iteration produced a new centroid collection.
    /// ## Arguments
    /// - **old**: The centroids that were used for the iteration's assignment step
    /// - **new**: The centroids computed by the iteration's update step
    /// ## Returns
    /// - **true** if the calculation converged and should stop
    /// - **false** if the calculation should continue
    fn converged(&mut self, old: &[Point<T>], new: &[Point<T>]) -> bool;
}


pub(crate) struct ExactLogic;
impl<T: Primitive> ConvergenceLogic<T> for ExactLogic {
    fn converged(&mut self, old: &[Point<T>], new: &[Point<T>]) -> bool {
        converged(old, new)
    }
}


pub(crate) struct ToleranceLogic<T: Primitive> {
    epsilon: T,
}
impl<T: Primitive> ConvergenceLogic<T> for ToleranceLogic<T> {
    fn converged(&mut self, old: &[Point<T>], new: &[Point<T>]) -> bool {
        old.len() == new.len() && old.iter().zip(new.iter())
            .all(|(o, n)| match o.distance(n) {
                Ok(moved) => moved <= self.epsilon,
                Err(_) => false,
            })
    }
}


/// Exact convergence check between two centroid collections.
///
/// Returns `true` iff both collections have the same amount of centroids and every coordinate of
/// every centroid is numerically equal (`==`, no tolerance) to its counterpart.
pub fn converged<T: Primitive>(old: &[Point<T>], new: &[Point<T>]) -> bool {
    old.len() == new.len() && old.iter().zip(new.iter())
        .all(|(o, n)| o.coordinates() == n.coordinates())
}
