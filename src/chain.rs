//! Default scene: a spring chain hanging between fixed endpoints.

use crate::float::Float;
use crate::particle::Particle;
use crate::spring::Spring;
use crate::system::ParticleSystem;
use crate::vec::{Vec, Vec3};

/// Parameters for the chain built by [`ParticleSystem::build_chain`].
#[derive(Clone, Debug, PartialEq)]
pub struct ChainConfig<V: Vec> {
    /// Number of particles hung below the head.
    pub segments: usize,
    pub particle_mass: V::Scalar,
    pub particle_radius: V::Scalar,
    /// Distance between consecutive particles along `axis`.
    pub spacing: V::Scalar,
    /// Unit direction the chain is laid out along.
    pub axis: V,
    pub stiffness: V::Scalar,
    /// Nominal rest length. Springs built by `build_chain` measure their
    /// rest length from the particle layout instead.
    pub rest_length: V::Scalar,
    pub damping: V::Scalar,
    /// Tail marker radius as a multiple of `particle_radius`.
    pub tail_radius_scale: V::Scalar,
}

impl<V: Vec> ChainConfig<V> {
    /// Chain along `axis` with the scene's particle and spring defaults.
    pub fn along(axis: V) -> Self {
        let radius = V::Scalar::from_f32(0.25);
        ChainConfig {
            segments: 5,
            particle_mass: V::Scalar::one(),
            particle_radius: radius,
            spacing: V::Scalar::from_f32(4.0) * radius,
            axis,
            stiffness: V::Scalar::from_f32(30.0),
            rest_length: V::Scalar::from_f32(0.5),
            damping: V::Scalar::one(),
            tail_radius_scale: V::Scalar::from_f32(5.0),
        }
    }

    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    pub fn with_stiffness(mut self, stiffness: V::Scalar) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: V::Scalar) -> Self {
        self.damping = damping;
        self
    }
}

impl<F: Float> Default for ChainConfig<Vec3<F>> {
    /// Five segments hanging along -y.
    fn default() -> Self {
        Self::along(Vec3::new(F::zero(), -F::one(), F::zero()))
    }
}

impl<V: Vec> ParticleSystem<V> {
    /// Build the chain scene from `anchor`, replacing any previous content.
    ///
    /// Layout, by index:
    /// - `0`: fixed head at `anchor`;
    /// - `1..=segments`: particles at `anchor + axis * spacing * i`, each
    ///   joined to its predecessor by a spring whose rest length is the
    ///   actual spacing. The last of them is massless, so the chain hangs
    ///   between two fixed points;
    /// - `segments + 1`: a fixed, highlighted tail marker at `anchor`, with
    ///   radius `particle_radius * tail_radius_scale`. It has no spring.
    pub fn build_chain(&mut self, anchor: V) {
        self.clear();
        let chain = self.chain_config().clone();

        self.add_particle(Particle::fixed(anchor, chain.particle_radius));

        for i in 0..chain.segments {
            let offset = V::Scalar::from_f32((i + 1) as f32) * chain.spacing;
            let position = anchor + chain.axis.scale(offset);
            let mass = if i + 1 == chain.segments {
                V::Scalar::zero()
            } else {
                chain.particle_mass
            };
            let idx = self.add_particle(Particle::new(position, V::zero(), mass, chain.particle_radius));

            let spring = Spring::from_particles(idx - 1, idx, self.particles(), chain.stiffness, chain.damping);
            // Both endpoints were just pushed.
            self.push_spring(spring);
        }

        let tail = Particle::fixed(anchor, chain.particle_radius * chain.tail_radius_scale)
            .with_highlight(true);
        self.add_particle(tail);

        log::debug!(
            "built chain: {} particles, {} springs",
            self.len(),
            self.spring_count()
        );
    }
}
