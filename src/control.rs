//! Discrete user controls for a running system.

use crate::system::ParticleSystem;
use crate::vec::Vec;
use alloc::format;
use alloc::string::String;

/// Commands an input handler can send between steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    ToggleGravity,
    ToggleViscosity,
    ToggleCollisions,
    /// Switch gravity, viscosity and collisions back on.
    Reset,
}

/// Result of [`ParticleSystem::apply_control`], ready to show to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlOutcome {
    pub control: Control,
    /// New state of the toggled flag; `true` after a reset.
    pub enabled: bool,
    pub message: String,
}

impl<V: Vec> ParticleSystem<V> {
    /// Apply `control`. Only the force and collision switches change; the
    /// particles are left where they are.
    pub fn apply_control(&mut self, control: Control) -> ControlOutcome {
        let (enabled, message) = match control {
            Control::ToggleGravity => {
                let on = self.toggle_gravity();
                (on, format!("Set gravity to {}", on))
            }
            Control::ToggleViscosity => {
                let on = self.toggle_viscosity();
                (on, format!("Set viscosity to {}", on))
            }
            Control::ToggleCollisions => {
                let on = self.toggle_collisions();
                (on, format!("Detects collisions {}", on))
            }
            Control::Reset => {
                self.config_mut().enable_all();
                log::info!("controls reset");
                (true, String::from("Gravity, viscosity and collisions enabled"))
            }
        };
        ControlOutcome { control, enabled, message }
    }
}
