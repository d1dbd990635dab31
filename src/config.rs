//! Global parameters and force toggles for a particle system.

use crate::collision::Plane;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::{Vec, Vec3};

/// Physical parameters shared by every particle in a system.
///
/// Gravity, viscosity and collisions are switched on and off through the
/// `*_enabled` flags; the default vectors are kept so a toggle never loses
/// the configured value.
///
/// # Builder Pattern
/// ```
/// use reefsim::config::SystemConfig;
/// use reefsim::vec::Vec3;
///
/// let config: SystemConfig<Vec3<f64>> = SystemConfig::underwater()
///     .with_dt(0.05)
///     .with_rebound(0.8)
///     .with_viscosity(0.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SystemConfig<V: Vec> {
    /// Gravity applied when `gravity_enabled`. Default: zero.
    pub gravity: V,
    /// Medium viscosity applied when `viscosity_enabled`. Default: 0.
    pub viscosity: V::Scalar,
    /// Fixed integration time step. Default: 0.1.
    pub dt: V::Scalar,
    /// Ground plane for the optional ground collision pass.
    pub ground: Plane<V>,
    /// Restitution in [0, 1]. Default: 0.5.
    pub rebound: V::Scalar,
    pub gravity_enabled: bool,
    pub viscosity_enabled: bool,
    pub collisions_enabled: bool,
    /// Run the ground pass inside each step. Default: false.
    pub ground_collisions_enabled: bool,
}

impl<V: Vec> SystemConfig<V> {
    /// Create a config without external forces and a ground plane through
    /// the origin.
    ///
    /// The generic vector type carries no notion of "up", so the plane
    /// normal is zero here; set one with [`SystemConfig::with_ground`]
    /// before enabling ground collisions.
    pub fn new() -> Self {
        SystemConfig {
            gravity: V::zero(),
            viscosity: V::Scalar::zero(),
            dt: V::Scalar::from_f64(0.1),
            ground: Plane { point: V::zero(), normal: V::zero() },
            rebound: V::Scalar::from_f32(0.5),
            gravity_enabled: true,
            viscosity_enabled: true,
            collisions_enabled: true,
            ground_collisions_enabled: false,
        }
    }

    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_viscosity(mut self, viscosity: V::Scalar) -> Self {
        self.viscosity = viscosity;
        self
    }

    pub fn with_dt(mut self, dt: V::Scalar) -> Self {
        self.dt = dt;
        self
    }

    pub fn with_ground(mut self, point: V, normal: V) -> Self {
        self.ground = Plane::new(point, normal);
        self
    }

    pub fn with_rebound(mut self, rebound: V::Scalar) -> Self {
        self.rebound = rebound;
        self
    }

    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions_enabled = enabled;
        self
    }

    pub fn with_ground_collisions(mut self, enabled: bool) -> Self {
        self.ground_collisions_enabled = enabled;
        self
    }

    /// Gravity as seen by the force phase (zero when switched off).
    pub fn effective_gravity(&self) -> V {
        if self.gravity_enabled { self.gravity } else { V::zero() }
    }

    /// Viscosity as seen by the force phase (zero when switched off).
    pub fn effective_viscosity(&self) -> V::Scalar {
        if self.viscosity_enabled { self.viscosity } else { V::Scalar::zero() }
    }

    /// Switch all force terms and collision handling back on.
    pub fn enable_all(&mut self) {
        self.gravity_enabled = true;
        self.viscosity_enabled = true;
        self.collisions_enabled = true;
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !self.dt.is_finite() || self.dt <= V::Scalar::zero() {
            return Err(PhysicsError::InvalidTimeStep);
        }
        if !self.rebound.is_finite()
            || self.rebound < V::Scalar::zero()
            || self.rebound > V::Scalar::one()
        {
            return Err(PhysicsError::InvalidRebound);
        }
        Ok(())
    }
}

impl<F: Float> SystemConfig<Vec3<F>> {
    /// Scene defaults: gravity (0, 0, -10), viscosity 1, dt 0.1, ground at
    /// the origin facing +z, rebound 0.5.
    pub fn underwater() -> Self {
        SystemConfig::new()
            .with_gravity(Vec3::new(F::zero(), F::zero(), F::from_f32(-10.0)))
            .with_viscosity(F::one())
            .with_ground(Vec3::zero(), Vec3::new(F::zero(), F::zero(), F::one()))
    }
}

impl<V: Vec> Default for SystemConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}
