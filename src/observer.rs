//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation step.
///
/// Implement this trait to monitor a step (e.g., for debugging,
/// visualization, or profiling). All methods have default no-op
/// implementations.
pub trait StepObserver {
    /// Called once every particle has its accumulated force.
    fn on_forces(&mut self) {}

    /// Called after velocities and then positions have been updated.
    fn on_integrate(&mut self) {}

    /// Called after the ground pass with the number of particles pushed out
    /// of the ground. Only called when ground collisions are on.
    fn on_ground_collisions(&mut self, _contacts: usize) {}

    /// Called after the particle-particle pass with the number of pair
    /// contacts resolved. Not called when collision handling is off.
    fn on_collisions(&mut self, _contacts: usize) {}

    /// Called when a step is fully complete; `step` counts from 1.
    fn on_step_complete(&mut self, _step: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
