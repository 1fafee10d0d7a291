use glam::DVec3;

use minikart_core::controls::ControlFrame;

use crate::physics::constants::{CRUISE_SPEED, CRUISE_TURN_RATE};
use crate::physics::RigidBody;

// Showroom ride: direct-drive velocity with no drift layer. Forward is -Z so
// the showroom car model noses the right way.
#[derive(Default)]
pub struct Cruiser;

impl Cruiser {
    pub fn advance(&mut self, _dt: f64, controls: &ControlFrame, body: &mut impl RigidBody) {
        let forward = body.rotation() * -DVec3::Z;
        let drive = if controls.forward {
            1.0
        } else if controls.backward {
            -1.0
        } else {
            0.0
        };

        let velocity = forward * (drive * CRUISE_SPEED);
        // vertical velocity stays with the integrator so the car still settles
        // onto the ground
        body.set_linear_velocity(DVec3::new(
            velocity.x,
            body.linear_velocity().y,
            velocity.z,
        ));

        let mut yaw = 0.0;
        if drive != 0.0 {
            if controls.steer_left {
                yaw = CRUISE_TURN_RATE * drive;
            } else if controls.steer_right {
                yaw = -CRUISE_TURN_RATE * drive;
            }
        }
        body.set_angular_velocity(DVec3::new(0.0, yaw, 0.0));
    }
}
