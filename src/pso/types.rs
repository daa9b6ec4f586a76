//! Core trait for Particle Swarm Optimization.

/// Defines a continuous PSO problem.
///
/// The user describes the search box and the objective; the PSO framework
/// handles particle memory, velocity updates and boundary clamping.
///
/// # Minimization
///
/// PSO minimizes the objective. For maximization, negate it.
///
/// # Examples
///
/// ```
/// use warehouse_pso::pso::PsoProblem;
///
/// struct Sphere { dim: usize }
///
/// impl PsoProblem for Sphere {
///     fn dimensions(&self) -> usize { self.dim }
///     fn bounds(&self, _dim: usize) -> (f64, f64) { (-5.0, 5.0) }
///     fn evaluate(&self, position: &[f64]) -> f64 {
///         position.iter().map(|x| x * x).sum()
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `PsoProblem` must be `Send + Sync` because the runner may evaluate
/// positions in parallel when the `parallel` feature is enabled.
pub trait PsoProblem: Send + Sync {
    /// Length of a position vector.
    fn dimensions(&self) -> usize;

    /// Inclusive `(lower, upper)` bounds of the given dimension.
    ///
    /// Initial positions are drawn uniformly inside these bounds and every
    /// position update is clamped back into them.
    fn bounds(&self, dim: usize) -> (f64, f64);

    /// Computes the objective of a position. Lower is better.
    ///
    /// Must be deterministic: the runner relies on re-evaluating the same
    /// position producing the same value.
    fn evaluate(&self, position: &[f64]) -> f64;

    /// Called after each full pass over the swarm with the 1-based
    /// iteration number and the current global best.
    ///
    /// The default implementation is a no-op.
    fn on_iteration(&self, _iteration: usize, _best_fitness: f64) {}
}
