use reefsim::{Particle, ParticleSystem, Spring, SystemConfig, ChainConfig, Vec3};
use reefsim::Vec as _;

fn pair(distance: f64) -> Vec<Particle<Vec3<f64>>> {
    vec![
        Particle::new(Vec3::zero(), Vec3::zero(), 1.0, 0.1),
        Particle::new(Vec3::new(distance, 0.0, 0.0), Vec3::zero(), 1.0, 0.1),
    ]
}

#[test]
fn stretched_spring_pulls_together() {
    let particles = pair(3.0);
    let s: Spring<Vec3<f64>> = Spring::new(0, 1, 10.0, 1.0, 0.0);
    let f = s.current_force(&particles);
    // Force on p1 points toward p2.
    assert!((f.x - 20.0).abs() < 1e-12);
    assert_eq!(f.y, 0.0);
    assert_eq!(f.z, 0.0);
}

#[test]
fn compressed_spring_pushes_apart() {
    let particles = pair(0.5);
    let s: Spring<Vec3<f64>> = Spring::new(0, 1, 10.0, 1.0, 0.0);
    let f = s.current_force(&particles);
    assert!((f.x + 5.0).abs() < 1e-12);
}

#[test]
fn current_length_follows_particles() {
    let mut particles = pair(2.0);
    let s: Spring<Vec3<f64>> = Spring::new(0, 1, 10.0, 1.0, 0.0);
    assert!((s.current_length(&particles) - 2.0).abs() < 1e-12);
    particles[1].position = Vec3::new(0.0, 0.0, 4.0);
    assert!((s.current_length(&particles) - 4.0).abs() < 1e-12);
}

fn free_pair(distance: f64) -> ParticleSystem<Vec3<f64>> {
    let config = SystemConfig::new().with_collisions(false);
    let mut sys = ParticleSystem::new(config, ChainConfig::default());
    sys.add_particle(Particle::new(Vec3::zero(), Vec3::zero(), 2.0, 0.1));
    sys.add_particle(Particle::new(Vec3::new(distance, 0.0, 0.0), Vec3::zero(), 2.0, 0.1));
    sys.add_spring(Spring::new(0, 1, 10.0, 1.0, 0.5)).unwrap();
    sys
}

#[test]
fn spring_forces_are_opposite() {
    let mut sys = free_pair(3.0);
    sys.accumulate_forces();
    let f = sys.forces();
    assert!(f[0].x > 0.0);
    assert_eq!(f[0], -f[1]);
}

#[test]
fn momentum_conserved_without_external_forces() {
    let mut sys = free_pair(3.0);
    sys.set_gravity(false);
    sys.set_viscosity(false);

    let mut moving = sys.particles().to_vec();
    moving[0].velocity = Vec3::new(0.0, 1.0, 0.0);
    moving[1].velocity = Vec3::new(1.0, 0.0, -0.5);
    let mut sys = ParticleSystem::new(sys.config().clone(), ChainConfig::default());
    for p in moving {
        sys.add_particle(p);
    }
    sys.add_spring(Spring::new(0, 1, 10.0, 1.0, 0.5)).unwrap();

    let before = sys.total_momentum();
    for _ in 0..200 {
        sys.animate();
    }
    let after = sys.total_momentum();
    assert!((after - before).length() < 1e-9, "momentum drifted: {:?} -> {:?}", before, after);
    assert!(sys.is_finite());
}

#[test]
fn damped_spring_settles_at_rest_length() {
    let mut sys = free_pair(3.0);
    for _ in 0..2000 {
        sys.animate();
    }
    let len = sys.springs()[0].current_length(sys.particles());
    assert!((len - 1.0).abs() < 1e-3, "length = {}", len);
}
