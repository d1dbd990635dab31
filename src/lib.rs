//! Mass-spring-damper particle simulation for the underwater scene demo.
//!
//! `reefsim` drives the hanging chain of the scene: point masses joined by
//! damped springs, pulled by gravity, slowed by the surrounding water and
//! kept apart by pairwise collision response. Rendering and input live
//! outside the crate and talk to it through a few narrow calls.
//!
//! # Features
//!
//! - **Fixed-step stepping**: one `animate()` = forces, then semi-implicit
//!   Euler (all velocities, then all positions), then collisions
//! - **Fixed particles**: zero mass pins a particle in place
//! - **Collision response**: particle/particle and particle/ground with a
//!   restitution coefficient
//! - **Chain scene**: `init(anchor)` builds the default hanging chain
//! - **Observable**: monitor step phases via the `StepObserver` trait
//! - **Renderer hand-off**: geometry is read through the `DrawSink` trait
//! - **`no_std` compatible**: needs only `alloc`
//!
//! ```
//! use reefsim::{ParticleSystem, Vec3};
//!
//! let mut system: ParticleSystem<Vec3<f64>> = ParticleSystem::default();
//! system.init(Vec3::new(0.0, 0.0, 10.0));
//! for _ in 0..10 {
//!     system.animate();
//! }
//! assert_eq!(system.fixed_particle_position(), Ok(Vec3::new(0.0, 0.0, 10.0)));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod spring;
pub mod collision;
pub mod config;
pub mod system;
pub mod chain;
pub mod render;
pub mod control;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::Particle;
pub use spring::Spring;
pub use collision::{Plane, particle_particle, particle_ground};
pub use config::SystemConfig;
pub use system::ParticleSystem;
pub use chain::ChainConfig;
pub use render::DrawSink;
pub use control::{Control, ControlOutcome};
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
