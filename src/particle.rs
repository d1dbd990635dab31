//! Point-mass particles with explicit velocity.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec;

/// A point mass with a contact radius.
///
/// `mass == 0` marks a fixed particle: its inverse mass is exactly zero,
/// so neither forces nor collision impulses move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<V: Vec> {
    pub position: V,
    pub velocity: V,
    pub mass: V::Scalar,
    pub inv_mass: V::Scalar,
    pub radius: V::Scalar,
    /// Display-only marker; the renderer picks a different colour.
    pub highlight: bool,
}

impl<V: Vec> Particle<V> {
    pub fn new(position: V, velocity: V, mass: V::Scalar, radius: V::Scalar) -> Self {
        let inv_mass = if mass == V::Scalar::zero() {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / mass
        };
        Particle {
            position,
            velocity,
            mass,
            inv_mass,
            radius,
            highlight: false,
        }
    }

    /// Like [`Particle::new`] but rejects negative or non-finite mass and
    /// non-positive radius.
    pub fn try_new(
        position: V,
        velocity: V,
        mass: V::Scalar,
        radius: V::Scalar,
    ) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass < V::Scalar::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        if !radius.is_finite() || radius <= V::Scalar::zero() {
            return Err(PhysicsError::InvalidRadius);
        }
        Ok(Self::new(position, velocity, mass, radius))
    }

    /// An immovable particle at rest.
    pub fn fixed(position: V, radius: V::Scalar) -> Self {
        Self::new(position, V::zero(), V::Scalar::zero(), radius)
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.inv_mass == V::Scalar::zero()
    }

    pub fn set_position(&mut self, position: V) {
        self.position = position;
    }

    pub fn incr_position(&mut self, delta: V) {
        self.position = self.position + delta;
    }

    pub fn incr_velocity(&mut self, delta: V) {
        self.velocity = self.velocity + delta;
    }

    pub fn momentum(&self) -> V {
        self.velocity.scale(self.mass)
    }
}
