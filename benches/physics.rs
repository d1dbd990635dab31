//! Benchmarks for the reefsim particle system.

use criterion::{criterion_group, criterion_main, Criterion};
use reefsim::*;

fn bench_chain_scene(c: &mut Criterion) {
    c.bench_function("chain_scene_100_steps", |b| {
        b.iter(|| {
            let mut system: ParticleSystem<Vec3<f64>> = ParticleSystem::default();
            system.init(Vec3::new(0.0, 0.0, 10.0));
            for _ in 0..100 {
                system.animate();
            }
            system.positions()
        });
    });
}

fn bench_long_chain(c: &mut Criterion) {
    c.bench_function("chain_64_segments_60_steps", |b| {
        b.iter(|| {
            let mut system: ParticleSystem<Vec3<f32>> = ParticleSystem::new(
                SystemConfig::underwater(),
                ChainConfig::default().with_segments(64),
            );
            system.init(Vec3::new(0.0, 0.0, 10.0));
            for _ in 0..60 {
                system.animate();
            }
            system.positions()
        });
    });
}

fn bench_collision_sweep(c: &mut Criterion) {
    c.bench_function("collision_sweep_200_particles", |b| {
        let mut system: ParticleSystem<Vec3<f32>> = ParticleSystem::default();
        for i in 0..200 {
            let x = (i % 20) as f32 * 0.45;
            let y = (i / 20) as f32 * 0.45;
            system.add_particle(Particle::new(Vec3::new(x, y, 0.0), Vec3::new(0.0, 0.0, 0.0), 1.0, 0.25));
        }
        b.iter(|| system.resolve_collisions());
    });
}

criterion_group!(benches, bench_chain_scene, bench_long_chain, bench_collision_sweep);
criterion_main!(benches);
