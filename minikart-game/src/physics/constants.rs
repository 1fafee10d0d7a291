// Steering is gated so a stationary kart cannot pivot in place, and the gain
// rescales the per-second turn rate into the per-tick yaw adjustment
pub const STEER_MIN_SPEED: f64 = 0.5;
pub const STEER_GAIN: f64 = 15.0;

pub const DRIFT_YAW_GAIN: f64 = 1.8;
pub const IDLE_YAW_DECAY: f64 = 0.85;
pub const TURBO_MIN_YAW: f64 = 0.1;

// cosmetic body roll while drifting
pub const DRIFT_ROLL_AMPLITUDE: f64 = 0.15;
pub const DRIFT_ROLL_FREQUENCY: f64 = 8.0;

pub const CRUISE_SPEED: f64 = 5.0;
pub const CRUISE_TURN_RATE: f64 = 2.0;
