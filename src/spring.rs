//! Damped linear springs between two particles.

use crate::particle::Particle;
use crate::vec::Vec;

/// A spring-damper connecting particles `p1` and `p2` by index.
///
/// Holds no state besides its parameters; the force is recomputed from the
/// endpoints every step.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<V: Vec> {
    pub p1: usize,
    pub p2: usize,
    pub stiffness: V::Scalar,
    pub rest_length: V::Scalar,
    pub damping: V::Scalar,
}

impl<V: Vec> Spring<V> {
    pub fn new(
        p1: usize,
        p2: usize,
        stiffness: V::Scalar,
        rest_length: V::Scalar,
        damping: V::Scalar,
    ) -> Self {
        Spring { p1, p2, stiffness, rest_length, damping }
    }

    /// Spring whose rest length is the current distance between its endpoints.
    pub fn from_particles(
        p1: usize,
        p2: usize,
        particles: &[Particle<V>],
        stiffness: V::Scalar,
        damping: V::Scalar,
    ) -> Self {
        let rest_length = particles[p1].position.distance(particles[p2].position);
        Spring { p1, p2, stiffness, rest_length, damping }
    }

    pub fn current_length(&self, particles: &[Particle<V>]) -> V::Scalar {
        particles[self.p1].position.distance(particles[self.p2].position)
    }

    /// Force exerted on `p1`; `p2` receives the negation.
    ///
    /// `u = normalize(x2 - x1)`, magnitude `k * (|x2 - x1| - l0) + c * (v2 - v1) . u`.
    /// A stretched spring pulls `p1` toward `p2`. Coincident endpoints give
    /// no direction and therefore zero force.
    pub fn current_force(&self, particles: &[Particle<V>]) -> V {
        let a = &particles[self.p1];
        let b = &particles[self.p2];

        let delta = b.position - a.position;
        let direction = delta.normalize();
        let extension = delta.length() - self.rest_length;
        let closing_speed = (b.velocity - a.velocity).dot(direction);

        direction.scale(self.stiffness * extension + self.damping * closing_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;
    use alloc::vec;

    fn pair(distance: f64) -> alloc::vec::Vec<Particle<Vec3<f64>>> {
        vec![
            Particle::new(Vec3::zero(), Vec3::zero(), 1.0, 0.1),
            Particle::new(Vec3::new(distance, 0.0, 0.0), Vec3::zero(), 1.0, 0.1),
        ]
    }

    #[test]
    fn rest_length_gives_zero_force() {
        let particles = pair(2.0);
        let s = Spring::from_particles(0, 1, &particles, 30.0, 1.0);
        assert_eq!(s.rest_length, 2.0);
        assert_eq!(s.current_force(&particles), Vec3::zero());
    }

    #[test]
    fn coincident_endpoints_are_finite() {
        let particles = pair(0.0);
        let s: Spring<Vec3<f64>> = Spring::new(0, 1, 30.0, 1.0, 1.0);
        let f = s.current_force(&particles);
        assert!(f.is_finite());
        assert_eq!(f, Vec3::zero());
    }

    #[test]
    fn damping_resists_separation() {
        let mut particles = pair(1.0);
        particles[1].velocity = Vec3::new(2.0, 0.0, 0.0);
        let s: Spring<Vec3<f64>> = Spring::new(0, 1, 0.0, 1.0, 0.5);
        let f = s.current_force(&particles);
        // p1 is dragged along with the receding p2.
        assert!((f.x - 1.0).abs() < 1e-12);
    }
}
