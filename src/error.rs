//! Error types for particle system operations.

use core::fmt;

/// Errors that can occur while building or driving a particle system.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The system holds no particles; call `init` first.
    EmptySystem,
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// Mass must be finite and non-negative (zero means fixed).
    InvalidMass,
    /// Radius must be finite and positive.
    InvalidRadius,
    /// Time step must be finite and positive.
    InvalidTimeStep,
    /// Rebound must be in [0, 1].
    InvalidRebound,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::EmptySystem => write!(f, "particle system is empty (not initialized)"),
            PhysicsError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            PhysicsError::InvalidMass => write!(f, "mass must be finite and non-negative"),
            PhysicsError::InvalidRadius => write!(f, "radius must be finite and positive"),
            PhysicsError::InvalidTimeStep => write!(f, "time step must be finite and positive"),
            PhysicsError::InvalidRebound => write!(f, "rebound must be in [0, 1]"),
        }
    }
}
