use rayon::prelude::*;

/// Applies a pure function elementwise across a slice on rayon's
/// work-stealing scheduler.
///
/// Output index `i` always holds `f(&values[i])`: rayon's indexed collect
/// preserves input order regardless of how the work is scheduled. This is
/// the one data-parallel primitive in the engine; both the escape-test stage
/// and the colour stage ride it.
pub fn par_map<T, U, F>(values: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    values.par_iter().map(f).collect()
}
