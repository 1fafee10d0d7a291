use glam::Vec3;

// One rig covers both vantages; the tuning decides which one it behaves as.
pub struct CameraTuning {
    pub offset: Vec3,
    pub speed_offset: Vec3,
    pub look_offset: Vec3,
    pub smoothing: f32,
}

impl CameraTuning {
    // high chase vantage that leans back as the kart speeds up
    pub fn chase() -> Self {
        Self {
            offset: Vec3::new(0.0, 6.0, -12.0),
            speed_offset: Vec3::new(0.0, 0.1, -0.3),
            look_offset: Vec3::new(0.0, 2.0, 8.0),
            smoothing: 0.08,
        }
    }

    // close trailing vantage that stares straight at the vehicle
    pub fn trailing() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, 7.0),
            speed_offset: Vec3::ZERO,
            look_offset: Vec3::ZERO,
            smoothing: 0.1,
        }
    }
}

// what a renderer would point the view matrix at
#[derive(Copy, Clone, Debug)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look_at: Vec3,
}

pub struct CameraRig {
    tuning: CameraTuning,
    position: Vec3,
}

impl CameraRig {
    pub fn new(tuning: CameraTuning, position: Vec3) -> Self {
        Self { tuning, position }
    }

    // eases toward the wanted vantage by a fixed fraction per call, so the
    // glide rides on the tick rate rather than on dt
    pub fn update(&mut self, vehicle: Vec3, speed: f32) -> CameraTarget {
        let want = vehicle + self.tuning.offset + self.tuning.speed_offset * speed;
        self.position = self.position.lerp(want, self.tuning.smoothing);
        CameraTarget {
            position: self.position,
            look_at: vehicle + self.tuning.look_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chase_rig_eases_toward_the_kart() {
        let mut rig = CameraRig::new(CameraTuning::chase(), Vec3::ZERO);
        let vehicle = Vec3::new(0.0, 0.0, 10.0);

        let target = rig.update(vehicle, 0.0);
        assert!(target.position.abs_diff_eq(Vec3::new(0.0, 0.48, -0.16), 1e-5));
        assert!(target.look_at.abs_diff_eq(Vec3::new(0.0, 2.0, 18.0), 1e-6));

        // held long enough, the rig settles onto the wanted vantage
        let mut settled = target;
        for _ in 0..200 {
            settled = rig.update(vehicle, 0.0);
        }
        assert!(settled.position.abs_diff_eq(Vec3::new(0.0, 6.0, -2.0), 1e-3));
    }

    #[test]
    fn one_call_moves_a_fixed_fraction() {
        let mut rig = CameraRig::new(CameraTuning::chase(), Vec3::ZERO);
        let want = Vec3::new(10.0, 6.0, -12.0);

        let target = rig.update(Vec3::new(10.0, 0.0, 0.0), 0.0);
        assert!(target.position.abs_diff_eq(want * 0.08, 1e-5));

        // each call closes the same fraction of whatever gap is left
        let target = rig.update(Vec3::new(10.0, 0.0, 0.0), 0.0);
        let remaining = (want - target.position).length();
        assert!((remaining - 0.92 * 0.92 * want.length()).abs() < 1e-4);
    }

    #[test]
    fn speed_pulls_the_chase_camera_back() {
        let mut slow = CameraRig::new(CameraTuning::chase(), Vec3::ZERO);
        let mut fast = CameraRig::new(CameraTuning::chase(), Vec3::ZERO);

        let slow_target = slow.update(Vec3::ZERO, 0.0);
        let fast_target = fast.update(Vec3::ZERO, 10.0);

        assert!(fast_target.position.z < slow_target.position.z);
        assert!(fast_target.position.y > slow_target.position.y);
    }

    #[test]
    fn trailing_rig_looks_dead_at_the_vehicle() {
        let mut rig = CameraRig::new(CameraTuning::trailing(), Vec3::ZERO);
        let vehicle = Vec3::new(5.0, 1.0, -3.0);

        let target = rig.update(vehicle, 99.0);
        assert_eq!(target.look_at, vehicle);
        // speed never factors into this vantage
        assert!(target.position.abs_diff_eq(Vec3::new(0.5, 0.4, 0.4), 1e-5));
    }
}
