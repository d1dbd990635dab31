//! The particle system: force accumulation, semi-implicit Euler integration
//! and pairwise collision response.

use crate::chain::ChainConfig;
use crate::collision::{pair_mut, particle_ground, particle_particle};
use crate::config::SystemConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::spring::Spring;
use crate::vec::{Vec, Vec3};
use alloc::vec::Vec as AllocVec;

/// Owns particles and springs and advances them one fixed `dt` per step.
///
/// Springs refer to particles by index into `particles`; the per-particle
/// force buffer is kept parallel to it.
pub struct ParticleSystem<V: Vec> {
    particles: AllocVec<Particle<V>>,
    springs: AllocVec<Spring<V>>,
    forces: AllocVec<V>,
    config: SystemConfig<V>,
    chain: ChainConfig<V>,
    steps: u64,
    elapsed: V::Scalar,
}

impl<V: Vec> ParticleSystem<V> {
    /// Create an empty system. Call [`ParticleSystem::init`] to build the
    /// chain scene, or add particles and springs by hand.
    pub fn new(config: SystemConfig<V>, chain: ChainConfig<V>) -> Self {
        ParticleSystem {
            particles: AllocVec::new(),
            springs: AllocVec::new(),
            forces: AllocVec::new(),
            config,
            chain,
            steps: 0,
            elapsed: V::Scalar::zero(),
        }
    }

    /// Rebuild the default scene hanging from `anchor`.
    ///
    /// Drops every particle and spring, switches gravity, viscosity and
    /// collisions back on, then builds the chain.
    pub fn init(&mut self, anchor: V) {
        self.clear();
        self.config.enable_all();
        self.build_chain(anchor);
    }

    /// Remove all particles and springs and reset the clock.
    pub fn clear(&mut self) {
        if !self.particles.is_empty() {
            log::debug!(
                "clearing {} particles and {} springs",
                self.particles.len(),
                self.springs.len()
            );
        }
        self.particles.clear();
        self.springs.clear();
        self.forces.clear();
        self.steps = 0;
        self.elapsed = V::Scalar::zero();
    }

    pub fn add_particle(&mut self, particle: Particle<V>) -> usize {
        let idx = self.particles.len();
        self.particles.push(particle);
        self.forces.push(V::zero());
        idx
    }

    /// Add a spring; both endpoints must already exist.
    pub fn add_spring(&mut self, spring: Spring<V>) -> Result<usize, PhysicsError> {
        let count = self.particles.len();
        for index in [spring.p1, spring.p2] {
            if index >= count {
                log::warn!("rejected spring: particle {} out of {}", index, count);
                return Err(PhysicsError::ParticleOutOfBounds { index, count });
            }
        }
        Ok(self.push_spring(spring))
    }

    /// Append a spring whose endpoints are known to exist.
    pub(crate) fn push_spring(&mut self, spring: Spring<V>) -> usize {
        debug_assert!(spring.p1 < self.particles.len() && spring.p2 < self.particles.len());
        let idx = self.springs.len();
        self.springs.push(spring);
        idx
    }

    /// Advance one frame without observation.
    pub fn animate(&mut self) {
        self.step(&mut NoOpStepObserver);
    }

    /// Advance one frame: forces, then integration, then collisions.
    pub fn step<O: StepObserver>(&mut self, observer: &mut O) {
        self.accumulate_forces();
        observer.on_forces();

        self.integrate();
        observer.on_integrate();

        let mut contacts = 0;
        if self.config.ground_collisions_enabled {
            let ground = self.collide_with_ground();
            observer.on_ground_collisions(ground);
            contacts += ground;
        }
        if self.config.collisions_enabled {
            let pairs = self.resolve_collisions();
            observer.on_collisions(pairs);
            contacts += pairs;
        }

        self.steps += 1;
        self.elapsed = self.elapsed + self.config.dt;
        log::trace!("step {} done, {} contacts", self.steps, contacts);
        if log::log_enabled!(log::Level::Warn) && !self.is_finite() {
            log::warn!("non-finite particle state after step {}", self.steps);
        }

        observer.on_step_complete(self.steps);
    }

    /// Phase 1: gravity and viscosity per particle, then every spring.
    ///
    /// The force on a spring's first endpoint is added to it and subtracted
    /// from the second one.
    pub fn accumulate_forces(&mut self) {
        let gravity = self.config.effective_gravity();
        let viscosity = self.config.effective_viscosity();

        for (force, p) in self.forces.iter_mut().zip(self.particles.iter()) {
            *force = gravity.scale(p.mass) - p.velocity.scale(viscosity);
        }

        for s in self.springs.iter() {
            let f12 = s.current_force(&self.particles);
            self.forces[s.p1] = self.forces[s.p1] + f12;
            self.forces[s.p2] = self.forces[s.p2] - f12;
        }
    }

    /// Phase 2: every velocity first, then every position.
    ///
    /// Fixed particles are skipped so their state stays bit-identical.
    pub fn integrate(&mut self) {
        let dt = self.config.dt;

        for (p, force) in self.particles.iter_mut().zip(self.forces.iter()) {
            if p.is_fixed() {
                continue;
            }
            p.incr_velocity(force.scale(dt * p.inv_mass));
        }

        for p in self.particles.iter_mut() {
            if p.is_fixed() {
                continue;
            }
            p.incr_position(p.velocity.scale(dt));
        }
    }

    /// Phase 3: pairwise particle collisions. Returns the number of contacts.
    ///
    /// The outer index runs over every particle and the inner one starts at
    /// 1, with the inner particle acting as `p1`. Every unordered pair is
    /// therefore visited twice (once per role), except pairs involving
    /// particle 0, which never acts as `p1`.
    pub fn resolve_collisions(&mut self) -> usize {
        let rebound = self.config.rebound;
        let n = self.particles.len();
        let mut contacts = 0;

        for i in 0..n {
            for j in 1..n {
                if i == j {
                    continue;
                }
                let (p1, p2) = pair_mut(&mut self.particles, j, i);
                if particle_particle(p1, p2, rebound) {
                    contacts += 1;
                }
            }
        }
        contacts
    }

    /// Resolve every particle against the ground plane. Returns the number
    /// of contacts.
    pub fn collide_with_ground(&mut self) -> usize {
        let ground = self.config.ground;
        let rebound = self.config.rebound;
        let mut contacts = 0;
        for p in self.particles.iter_mut() {
            if particle_ground(p, &ground, rebound) {
                contacts += 1;
            }
        }
        contacts
    }

    // -- toggles ----------------------------------------------------------

    pub fn set_gravity(&mut self, on: bool) {
        self.config.gravity_enabled = on;
        log::info!("gravity {}", on);
    }

    pub fn set_viscosity(&mut self, on: bool) {
        self.config.viscosity_enabled = on;
        log::info!("viscosity {}", on);
    }

    pub fn set_collisions(&mut self, on: bool) {
        self.config.collisions_enabled = on;
        log::info!("collision detection {}", on);
    }

    /// Flip gravity and return the new state.
    pub fn toggle_gravity(&mut self) -> bool {
        let on = !self.config.gravity_enabled;
        self.set_gravity(on);
        on
    }

    pub fn toggle_viscosity(&mut self) -> bool {
        let on = !self.config.viscosity_enabled;
        self.set_viscosity(on);
        on
    }

    pub fn toggle_collisions(&mut self) -> bool {
        let on = !self.config.collisions_enabled;
        self.set_collisions(on);
        on
    }

    // -- endpoint overrides ------------------------------------------------

    /// Move the head particle (index 0).
    pub fn set_beginning_position(&mut self, position: V) -> Result<(), PhysicsError> {
        self.set_position_at(0, position)
    }

    /// Move the particle at index `spring_count()`, the last chain particle
    /// of the default scene.
    pub fn set_end_position(&mut self, position: V) -> Result<(), PhysicsError> {
        self.set_position_at(self.springs.len(), position)
    }

    /// Move the last particle (the tail marker of the default scene).
    pub fn set_end_particle_position(&mut self, position: V) -> Result<(), PhysicsError> {
        let last = self.particles.len().checked_sub(1).ok_or(PhysicsError::EmptySystem)?;
        self.set_position_at(last, position)
    }

    fn set_position_at(&mut self, index: usize, position: V) -> Result<(), PhysicsError> {
        let count = self.particles.len();
        if count == 0 {
            return Err(PhysicsError::EmptySystem);
        }
        let p = self
            .particles
            .get_mut(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })?;
        p.set_position(position);
        Ok(())
    }

    /// Position of the head particle.
    pub fn fixed_particle_position(&self) -> Result<V, PhysicsError> {
        self.particles
            .first()
            .map(|p| p.position)
            .ok_or(PhysicsError::EmptySystem)
    }

    // -- read access --------------------------------------------------------

    pub fn particles(&self) -> &[Particle<V>] { &self.particles }
    pub fn springs(&self) -> &[Spring<V>] { &self.springs }

    pub fn particle(&self, index: usize) -> Result<&Particle<V>, PhysicsError> {
        let count = self.particles.len();
        self.particles
            .get(index)
            .ok_or(PhysicsError::ParticleOutOfBounds { index, count })
    }

    /// Current positions of both ends of spring `index`, or `None` if there
    /// is no such spring.
    pub fn spring_endpoints(&self, index: usize) -> Option<(V, V)> {
        let s = self.springs.get(index)?;
        Some((self.particles[s.p1].position, self.particles[s.p2].position))
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Forces accumulated by the last force phase, parallel to `particles()`.
    pub fn forces(&self) -> &[V] { &self.forces }

    pub fn len(&self) -> usize { self.particles.len() }
    pub fn is_empty(&self) -> bool { self.particles.is_empty() }
    pub fn spring_count(&self) -> usize { self.springs.len() }

    /// Steps taken since the last clear.
    pub fn steps(&self) -> u64 { self.steps }

    /// Simulated time since the last clear.
    pub fn elapsed(&self) -> V::Scalar { self.elapsed }

    pub fn config(&self) -> &SystemConfig<V> { &self.config }
    pub fn config_mut(&mut self) -> &mut SystemConfig<V> { &mut self.config }
    pub fn chain_config(&self) -> &ChainConfig<V> { &self.chain }
    pub fn chain_config_mut(&mut self) -> &mut ChainConfig<V> { &mut self.chain }

    pub fn total_momentum(&self) -> V {
        self.particles
            .iter()
            .fold(V::zero(), |acc, p| acc + p.momentum())
    }

    /// True when no particle position or velocity is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.particles
            .iter()
            .all(|p| p.position.is_finite() && p.velocity.is_finite())
    }
}

impl<F: Float> Default for ParticleSystem<Vec3<F>> {
    fn default() -> Self {
        Self::new(SystemConfig::underwater(), ChainConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_system() -> ParticleSystem<Vec3<f64>> {
        let config = SystemConfig::underwater().with_collisions(false);
        ParticleSystem::new(config, ChainConfig::default())
    }

    #[test]
    fn add_spring_checks_indices() {
        let mut sys = free_system();
        sys.add_particle(Particle::new(Vec3::zero(), Vec3::zero(), 1.0, 0.1));
        let err = sys.add_spring(Spring::new(0, 3, 1.0, 1.0, 0.0)).unwrap_err();
        assert_eq!(err, PhysicsError::ParticleOutOfBounds { index: 3, count: 1 });
        assert_eq!(sys.spring_count(), 0);
    }

    #[test]
    fn forces_combine_gravity_and_viscosity() {
        let mut sys = free_system();
        sys.add_particle(Particle::new(
            Vec3::zero(),
            Vec3::new(2.0, 0.0, 0.0),
            3.0,
            0.1,
        ));
        sys.accumulate_forces();
        assert_eq!(sys.forces()[0], Vec3::new(-2.0, 0.0, -30.0));

        sys.set_gravity(false);
        sys.set_viscosity(false);
        sys.accumulate_forces();
        assert_eq!(sys.forces()[0], Vec3::zero());
    }

    #[test]
    fn integration_updates_velocity_before_position() {
        let mut sys = free_system();
        sys.set_viscosity(false);
        sys.add_particle(Particle::new(Vec3::zero(), Vec3::zero(), 1.0, 0.1));
        sys.animate();
        let p = sys.particle(0).unwrap();
        // v = dt * g = -1, x = dt * v = -0.1
        assert!((p.velocity.z + 1.0).abs() < 1e-12);
        assert!((p.position.z + 0.1).abs() < 1e-12);
    }

    #[test]
    fn clear_resets_clock() {
        let mut sys = free_system();
        sys.add_particle(Particle::new(Vec3::zero(), Vec3::zero(), 1.0, 0.1));
        sys.animate();
        sys.animate();
        assert_eq!(sys.steps(), 2);
        assert!((sys.elapsed() - 0.2).abs() < 1e-12);
        sys.clear();
        assert!(sys.is_empty());
        assert_eq!(sys.steps(), 0);
        assert!(sys.forces().is_empty());
    }

    #[test]
    fn toggles_return_new_state() {
        let mut sys = free_system();
        assert!(!sys.toggle_gravity());
        assert!(sys.toggle_gravity());
        assert!(!sys.toggle_viscosity());
        assert!(sys.toggle_collisions());
    }
}
