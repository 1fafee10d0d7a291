use glam::{DQuat, DVec3};

use minikart_core::pose::Pose;
use minikart_core::GLOBAL_CONFIG;

// resting height of the body's center over the flat ground plane
pub const RIDE_HEIGHT: f64 = 0.35;

// The boundary to the physics engine. The dynamics controllers read the
// body's state through this and write velocity commands back; integration and
// collision stay on the other side of it.
pub trait RigidBody {
    fn translation(&self) -> DVec3;
    fn rotation(&self) -> DQuat;
    fn linear_velocity(&self) -> DVec3;
    fn angular_velocity(&self) -> DVec3;
    fn set_translation(&mut self, position: DVec3);
    fn set_rotation(&mut self, rotation: DQuat);
    fn set_linear_velocity(&mut self, velocity: DVec3);
    fn set_angular_velocity(&mut self, velocity: DVec3);
}

// Stand-in integrator for running headless: gravity, velocity integration and
// a flat ground plane. Anything fancier belongs to a real physics backend.
pub struct KinematicBody {
    pub pose: Pose,
    pub linear_velocity: DVec3,
    pub angular_velocity: DVec3,
    pub gravity: f64,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            pose: Pose::spawn(),
            linear_velocity: DVec3::ZERO,
            angular_velocity: DVec3::ZERO,
            gravity: GLOBAL_CONFIG.world_gravity,
        }
    }
}

impl KinematicBody {
    pub fn integrate(&mut self, dt: f64) {
        self.linear_velocity.y -= self.gravity * dt;
        self.pose.position += self.linear_velocity * dt;

        if self.angular_velocity != DVec3::ZERO {
            self.pose.rotation = (DQuat::from_scaled_axis(self.angular_velocity * dt)
                * self.pose.rotation)
                .normalize();
        }

        // flat ground: stop falling once the body comes to rest on the plane
        if self.pose.position.y < RIDE_HEIGHT {
            self.pose.position.y = RIDE_HEIGHT;
            self.linear_velocity.y = self.linear_velocity.y.max(0.0);
        }
    }
}

impl RigidBody for KinematicBody {
    fn translation(&self) -> DVec3 {
        self.pose.position
    }

    fn rotation(&self) -> DQuat {
        self.pose.rotation
    }

    fn linear_velocity(&self) -> DVec3 {
        self.linear_velocity
    }

    fn angular_velocity(&self) -> DVec3 {
        self.angular_velocity
    }

    fn set_translation(&mut self, position: DVec3) {
        self.pose.position = position;
    }

    fn set_rotation(&mut self, rotation: DQuat) {
        self.pose.rotation = rotation;
    }

    fn set_linear_velocity(&mut self, velocity: DVec3) {
        self.linear_velocity = velocity;
    }

    fn set_angular_velocity(&mut self, velocity: DVec3) {
        self.angular_velocity = velocity;
    }
}
