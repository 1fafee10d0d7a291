use glam::{DQuat, DVec3};

use crate::GLOBAL_CONFIG;

// Pose is the value form of a body's translation/rotation pair == what the
// simulation reads back from the physics body every tick
#[derive(Copy, Clone, Debug)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DQuat,
}

impl Pose {
    // unit vector out the nose of the vehicle
    pub fn forward(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    // unit vector out the right side of the vehicle
    pub fn right(&self) -> DVec3 {
        self.rotation * DVec3::X
    }

    pub fn spawn() -> Pose {
        Pose {
            position: DVec3::new(0.0, GLOBAL_CONFIG.spawn_height, 0.0),
            rotation: DQuat::IDENTITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use glam::{DQuat, DVec3};

    use super::Pose;
    use crate::GLOBAL_CONFIG;

    #[test]
    fn spawn_sits_at_the_configured_height() {
        let pose = Pose::spawn();
        assert!(pose
            .position
            .abs_diff_eq(DVec3::new(0.0, GLOBAL_CONFIG.spawn_height, 0.0), 0.001));
        assert!(pose.rotation.abs_diff_eq(DQuat::IDENTITY, 0.001));
    }

    #[test]
    fn directions_follow_the_rotation() {
        let level = Pose::spawn();
        assert!(level.forward().abs_diff_eq(DVec3::Z, 0.001));
        assert!(level.right().abs_diff_eq(DVec3::X, 0.001));

        // a quarter turn to the left swings the nose from +Z onto +X
        let turned = Pose {
            position: DVec3::ZERO,
            rotation: DQuat::from_rotation_y(FRAC_PI_2),
        };
        assert!(turned.forward().abs_diff_eq(DVec3::X, 0.001));
        assert!(turned.right().abs_diff_eq(-DVec3::Z, 0.001));
    }
}
