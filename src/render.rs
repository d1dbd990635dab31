//! Read-only geometry hand-off to an external renderer.

use crate::system::ParticleSystem;
use crate::vec::Vec;

/// Receives the primitives of one frame.
///
/// The system never issues drawing commands itself; a renderer implements
/// this trait and turns the calls into spheres and lines.
pub trait DrawSink<V: Vec> {
    fn particle(&mut self, position: V, radius: V::Scalar, highlight: bool);
    fn spring(&mut self, from: V, to: V);
}

impl<V: Vec> ParticleSystem<V> {
    /// Emit every particle except the last one, then every spring.
    ///
    /// The last particle is the tail marker of the chain scene, which only
    /// takes part in collisions and is not drawn.
    pub fn draw<S: DrawSink<V>>(&self, sink: &mut S) {
        let particles = self.particles();
        let shown = particles.len().saturating_sub(1);
        for p in &particles[..shown] {
            sink.particle(p.position, p.radius, p.highlight);
        }

        for s in self.springs() {
            sink.spring(particles[s.p1].position, particles[s.p2].position);
        }
    }
}
