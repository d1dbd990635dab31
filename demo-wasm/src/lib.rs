use reefsim::{Control, DrawSink, ParticleSystem, Vec3};
use wasm_bindgen::prelude::*;

/// Flat buffers the JS side turns into spheres and line segments.
#[derive(Default)]
struct FrameBuffers {
    /// [x, y, z, radius, highlight, ...]
    spheres: Vec<f32>,
    /// [ax, ay, az, bx, by, bz, ...]
    lines: Vec<f32>,
}

impl DrawSink<Vec3<f32>> for FrameBuffers {
    fn particle(&mut self, position: Vec3<f32>, radius: f32, highlight: bool) {
        self.spheres.extend_from_slice(&[
            position.x,
            position.y,
            position.z,
            radius,
            if highlight { 1.0 } else { 0.0 },
        ]);
    }

    fn spring(&mut self, from: Vec3<f32>, to: Vec3<f32>) {
        self.lines.extend_from_slice(&[from.x, from.y, from.z, to.x, to.y, to.z]);
    }
}

// ---- Hanging Chain Demo ----

#[wasm_bindgen]
pub struct ChainDemo {
    system: ParticleSystem<Vec3<f32>>,
    frame: FrameBuffers,
}

#[wasm_bindgen]
impl ChainDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        let mut system = ParticleSystem::default();
        system.init(Vec3::new(x, y, z));
        ChainDemo { system, frame: FrameBuffers::default() }
    }

    /// Advance one frame. The page calls this at a fixed rate.
    pub fn animate(&mut self) {
        self.system.animate();
    }

    pub fn reset(&mut self, x: f32, y: f32, z: f32) {
        self.system.init(Vec3::new(x, y, z));
    }

    /// Follow another object with the head of the chain.
    pub fn move_head(&mut self, x: f32, y: f32, z: f32) -> Result<(), JsError> {
        self.system
            .set_beginning_position(Vec3::new(x, y, z))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Key bindings of the viewer: g, v, c and Home.
    /// Returns the status line to display, or `undefined` for other keys.
    pub fn key(&mut self, key: &str) -> Option<String> {
        let control = match key {
            "g" => Control::ToggleGravity,
            "v" => Control::ToggleViscosity,
            "c" => Control::ToggleCollisions,
            "Home" => Control::Reset,
            _ => return None,
        };
        Some(self.system.apply_control(control).message)
    }

    /// Collect this frame's geometry; read it back with `spheres` and `lines`.
    pub fn draw(&mut self) {
        self.frame.spheres.clear();
        self.frame.lines.clear();
        self.system.draw(&mut self.frame);
    }

    pub fn spheres(&self) -> Vec<f32> {
        self.frame.spheres.clone()
    }

    pub fn lines(&self) -> Vec<f32> {
        self.frame.lines.clone()
    }

    pub fn particle_count(&self) -> usize {
        self.system.len()
    }
}
