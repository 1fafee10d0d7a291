use glam::DVec3;

use minikart_core::controls::ControlFrame;
use minikart_core::pose::Pose;
use minikart_core::GLOBAL_CONFIG;

use crate::physics::constants::{
    DRIFT_ROLL_AMPLITUDE, DRIFT_ROLL_FREQUENCY, DRIFT_YAW_GAIN, IDLE_YAW_DECAY, STEER_GAIN,
    STEER_MIN_SPEED, TURBO_MIN_YAW,
};
use crate::physics::RigidBody;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriftState {
    Idle,
    Drifting,
}

// which way the kart last steered; picks the side drift smoke trails from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SteerSide {
    None,
    Left,
    Right,
}

impl SteerSide {
    pub fn sign(&self) -> f32 {
        match self {
            SteerSide::None => 0.0,
            SteerSide::Left => -1.0,
            SteerSide::Right => 1.0,
        }
    }
}

// Everything the drift controller owns. Only advance() mutates this; the rest
// of the crate reads snapshots of it.
#[derive(Copy, Clone, Debug)]
pub struct KartState {
    pub velocity: DVec3,
    pub yaw_rate: f64,
    pub drift: DriftState,
    pub steer_side: SteerSide,
    pub turbo_charge: f64,
}

impl Default for KartState {
    fn default() -> Self {
        Self {
            velocity: DVec3::ZERO,
            yaw_rate: 0.0,
            drift: DriftState::Idle,
            steer_side: SteerSide::None,
            turbo_charge: 0.0,
        }
    }
}

impl KartState {
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

#[derive(Default)]
pub struct Kart {
    state: KartState,
    clock: f64,
}

impl Kart {
    pub fn state(&self) -> KartState {
        self.state
    }

    /* Runs one tick of the drift controller: reads the body's pose and motion,
     * applies throttle, steering and the drift state machine, then writes the
     * resulting velocity commands back to the body */
    pub fn advance(&mut self, dt: f64, controls: &ControlFrame, body: &mut impl RigidBody) {
        self.clock += dt;

        if controls.reset {
            let spawn = Pose::spawn();
            body.set_translation(spawn.position);
            body.set_rotation(spawn.rotation);
            body.set_linear_velocity(DVec3::ZERO);
            body.set_angular_velocity(DVec3::ZERO);
            self.state = KartState::default();
            return;
        }

        let pose = Pose {
            position: body.translation(),
            rotation: body.rotation(),
        };
        let forward = pose.forward();
        let mut velocity = body.linear_velocity();
        let speed = velocity.length();

        if controls.forward {
            let mut push = forward * (GLOBAL_CONFIG.acceleration * dt);
            // throttle runs hotter while a mini-turbo charge is banked, and
            // spends the charge down as it does
            if self.state.turbo_charge > 0.0 {
                push *= GLOBAL_CONFIG.boost_multiplier;
                self.state.turbo_charge =
                    (self.state.turbo_charge - GLOBAL_CONFIG.turbo_charge_rate * dt).max(0.0);
            }
            velocity += push;
        }
        if controls.backward {
            velocity -= forward * (GLOBAL_CONFIG.acceleration * GLOBAL_CONFIG.brake_ratio * dt);
        }

        let mut yaw_rate = body.angular_velocity().y;
        if speed > STEER_MIN_SPEED {
            let strength = GLOBAL_CONFIG.turn_speed * (speed / 10.0).min(1.0) * dt * STEER_GAIN;
            if controls.steer_left {
                yaw_rate += strength;
                self.state.steer_side = SteerSide::Left;
            }
            if controls.steer_right {
                yaw_rate -= strength;
                self.state.steer_side = SteerSide::Right;
            }
        }

        if controls.drift && speed > GLOBAL_CONFIG.drift_entry_speed {
            // a fresh drift always starts from an empty charge
            if self.state.drift == DriftState::Idle {
                self.state.drift = DriftState::Drifting;
                self.state.turbo_charge = 0.0;
                log::debug!(
                    "drift started at speed {:.1}, yaw {:.2}",
                    speed,
                    self.state.yaw_rate
                );
            }

            velocity *= GLOBAL_CONFIG.drift_friction;
            yaw_rate *= DRIFT_YAW_GAIN;

            if yaw_rate.abs() > TURBO_MIN_YAW {
                self.state.turbo_charge = (self.state.turbo_charge
                    + GLOBAL_CONFIG.turbo_charge_rate * dt)
                    .min(GLOBAL_CONFIG.turbo_max_charge);
            }
        } else {
            // leaving the drift pays the mini-turbo out exactly once
            if self.state.drift == DriftState::Drifting {
                if self.state.turbo_charge > GLOBAL_CONFIG.turbo_release_threshold {
                    velocity += forward * GLOBAL_CONFIG.turbo_boost_force;
                    log::debug!(
                        "mini-turbo released with charge {:.2}",
                        self.state.turbo_charge
                    );
                }
                self.state.drift = DriftState::Idle;
            }
            velocity *= GLOBAL_CONFIG.friction;
            yaw_rate *= IDLE_YAW_DECAY;
        }

        if velocity.length() > GLOBAL_CONFIG.max_speed {
            velocity = velocity.normalize() * GLOBAL_CONFIG.max_speed;
        }

        let roll = if self.state.drift == DriftState::Drifting {
            (self.clock * DRIFT_ROLL_FREQUENCY).sin() * DRIFT_ROLL_AMPLITUDE
        } else {
            0.0
        };

        body.set_linear_velocity(velocity);
        body.set_angular_velocity(DVec3::new(0.0, yaw_rate, roll));
        self.state.velocity = velocity;
        self.state.yaw_rate = yaw_rate;
    }
}
