//! Contact response: particle against particle and against a ground plane.

use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec;

/// An infinite plane through `point` with outward `normal` (unit length).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane<V: Vec> {
    pub point: V,
    pub normal: V,
}

impl<V: Vec> Plane<V> {
    pub fn new(point: V, normal: V) -> Self {
        Plane { point, normal: normal.normalize() }
    }

    /// Signed distance from the plane, positive on the normal side.
    pub fn signed_distance(&self, position: V) -> V::Scalar {
        (position - self.point).dot(self.normal)
    }
}

/// Borrow two distinct particles mutably.
///
/// Panics if `i == j` or either index is out of range.
pub fn pair_mut<V: Vec>(
    particles: &mut [Particle<V>],
    i: usize,
    j: usize,
) -> (&mut Particle<V>, &mut Particle<V>) {
    assert!(i != j, "pair_mut needs two distinct indices");
    if i < j {
        let (head, tail) = particles.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = particles.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve overlap between `p1` and `p2`. Returns true if they were in contact.
///
/// Only `p1` is checked for being fixed up front; a fixed `p2` is left
/// untouched after `p1` has been corrected. Each side is moved by half the
/// penetration regardless of mass, and receives an impulse along the contact
/// normal weighted by the other particle's mass fraction.
pub fn particle_particle<V: Vec>(
    p1: &mut Particle<V>,
    p2: &mut Particle<V>,
    rebound: V::Scalar,
) -> bool {
    if p1.is_fixed() {
        return false;
    }

    let separation = p2.position - p1.position;
    let penetration = separation.length() - p1.radius - p2.radius;
    if penetration >= V::Scalar::zero() {
        return false;
    }

    let mut normal = separation.normalize();
    let rel_vel = p1.velocity - p2.velocity;
    let total_mass = p1.mass + p2.mass;
    let restitution = V::Scalar::one() + rebound;

    p1.incr_position(normal.scale(penetration * V::Scalar::half()));
    p1.incr_velocity(-normal.scale(p2.mass / total_mass * normal.dot(rel_vel) * restitution));

    if p2.is_fixed() {
        return true;
    }

    normal = -normal;
    p2.incr_position(normal.scale(penetration * V::Scalar::half()));
    p2.incr_velocity(normal.scale(p1.mass / total_mass * normal.dot(rel_vel) * restitution));
    true
}

/// Push `p` out of `plane` and reflect its normal velocity scaled by
/// `1 + rebound`. Returns true if the particle was below the surface.
///
/// A plane with a zero normal has no sides and never reports a contact.
pub fn particle_ground<V: Vec>(
    p: &mut Particle<V>,
    plane: &Plane<V>,
    rebound: V::Scalar,
) -> bool {
    if p.is_fixed() || plane.normal.length_sq() == V::Scalar::zero() {
        return false;
    }

    let penetration = plane.signed_distance(p.position) - p.radius;
    if penetration >= V::Scalar::zero() {
        return false;
    }

    let v_pen = p.velocity.dot(plane.normal);
    p.incr_position(-plane.normal.scale(penetration));
    p.incr_velocity(-plane.normal.scale((V::Scalar::one() + rebound) * v_pen));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::Vec3;

    type P = Particle<Vec3<f64>>;

    fn ball(x: f64, mass: f64) -> P {
        Particle::new(Vec3::new(x, 0.0, 0.0), Vec3::zero(), mass, 1.0)
    }

    #[test]
    fn separated_particles_untouched() {
        let mut a = ball(0.0, 1.0);
        let mut b = ball(3.0, 1.0);
        assert!(!particle_particle(&mut a, &mut b, 0.5));
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 3.0);
    }

    #[test]
    fn fixed_first_particle_is_skipped() {
        let mut a = Particle::fixed(Vec3::zero(), 1.0);
        let mut b = ball(1.0, 1.0);
        assert!(!particle_particle(&mut a, &mut b, 0.5));
        assert_eq!(b.position.x, 1.0);
    }

    #[test]
    fn fixed_second_particle_not_moved() {
        let mut a = ball(0.0, 1.0);
        let mut b = Particle::fixed(Vec3::new(1.0, 0.0, 0.0), 1.0);
        assert!(particle_particle(&mut a, &mut b, 0.5));
        assert!((a.position.x + 0.5).abs() < 1e-12);
        assert_eq!(b.position.x, 1.0);
        assert_eq!(b.velocity, Vec3::zero());
    }

    #[test]
    fn head_on_impulse_is_symmetric_for_equal_masses() {
        let mut a = ball(0.0, 1.0);
        let mut b = ball(1.5, 1.0);
        a.velocity = Vec3::new(1.0, 0.0, 0.0);
        b.velocity = Vec3::new(-1.0, 0.0, 0.0);
        particle_particle(&mut a, &mut b, 1.0);
        // Elastic exchange: velocities swap.
        assert!((a.velocity.x + 1.0).abs() < 1e-12);
        assert!((b.velocity.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ground_pushes_out_and_reflects() {
        let plane = Plane::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let mut p: P = Particle::new(Vec3::new(0.0, 0.0, 0.1), Vec3::new(0.0, 0.0, -2.0), 1.0, 0.25);
        assert!(particle_ground(&mut p, &plane, 0.5));
        assert!((p.position.z - 0.25).abs() < 1e-12);
        assert!((p.velocity.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ground_ignores_fixed_and_clear_particles() {
        let plane = Plane::new(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let mut fixed: P = Particle::fixed(Vec3::new(0.0, 0.0, -1.0), 0.25);
        assert!(!particle_ground(&mut fixed, &plane, 0.5));
        let mut above: P = Particle::new(Vec3::new(0.0, 0.0, 2.0), Vec3::zero(), 1.0, 0.25);
        assert!(!particle_ground(&mut above, &plane, 0.5));
    }

    #[test]
    fn zero_normal_plane_has_no_contacts() {
        let plane = Plane::new(Vec3::zero(), Vec3::zero());
        let mut p: P = Particle::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0), 1.0, 0.25);
        assert!(!particle_ground(&mut p, &plane, 0.5));
        assert_eq!(p.position, Vec3::new(0.0, 0.0, 100.0));
        assert_eq!(p.velocity, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut v = alloc::vec![ball(0.0, 1.0), ball(1.0, 2.0), ball(2.0, 3.0)];
        let (a, b) = pair_mut(&mut v, 2, 0);
        assert_eq!(a.mass, 3.0);
        assert_eq!(b.mass, 1.0);
    }
}
