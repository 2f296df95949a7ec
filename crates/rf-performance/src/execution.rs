//! Serial or rayon-parallel evaluation of independent solves.

use rayon::prelude::*;

/// How a sweep evaluates its operating points.
///
/// Both modes return results in input order and produce identical values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    Serial,
    #[default]
    Parallel,
}

impl Execution {
    /// Apply `f` to every item, stopping at the first error.
    pub(crate) fn try_map<T, R, E, F>(self, items: &[T], f: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send,
        F: Fn(&T) -> Result<R, E> + Sync + Send,
    {
        match self {
            Execution::Serial => items.iter().map(f).collect(),
            Execution::Parallel => items.par_iter().map(f).collect(),
        }
    }
}
